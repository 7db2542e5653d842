use crate::{
    mode::{InterfaceMode, LineWidth},
    opcode::Opcode,
};

/// How the bus controller should treat a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandKind {
    /// Executed immediately.
    Regular,
    /// Stored as the read template of memory mapped mode.
    ReadConfig,
    /// Stored as the write template of memory mapped mode.
    WriteConfig,
}

/// When the instruction byte is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Framing {
    InstructionEveryCommand,
    /// Only the first command of a burst carries the instruction.
    InstructionOnlyFirstCommand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressSize {
    Bits24,
}

/// A fully specified bus transaction.
///
/// All present phases share `lines`, so a command can never mix widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    pub kind: CommandKind,
    pub opcode: Opcode,
    pub lines: LineWidth,
    /// 24 bit address, `None` if there is no address phase.
    pub address: Option<u32>,
    /// Number of data bytes, `None` if there is no data phase.
    pub data_len: Option<u32>,
    pub dummy_cycles: u8,
    /// Data strobe
    pub dqs: bool,
    pub framing: Framing,
}

impl Command {
    const fn instruction(opcode: Opcode, lines: LineWidth) -> Self {
        Self {
            kind: CommandKind::Regular,
            opcode,
            lines,
            address: None,
            data_len: None,
            dummy_cycles: 0,
            dqs: false,
            framing: Framing::InstructionEveryCommand,
        }
    }

    pub const fn read_data(mode: InterfaceMode, address: u32, len: u32) -> Self {
        let template = mode.template();
        Self {
            address: Some(address),
            data_len: Some(len),
            dummy_cycles: template.read_dummy_cycles,
            ..Self::instruction(template.read_opcode, template.lines)
        }
    }

    pub const fn write_data(mode: InterfaceMode, address: u32, len: u32) -> Self {
        let template = mode.template();
        Self {
            address: Some(address),
            data_len: Some(len),
            framing: Framing::InstructionOnlyFirstCommand,
            ..Self::instruction(template.write_opcode, template.lines)
        }
    }

    /// Read id is only understood in single line mode.
    pub const fn read_id(len: u32) -> Self {
        Self {
            address: Some(0),
            data_len: Some(len),
            ..Self::instruction(Opcode::ReadId, LineWidth::One)
        }
    }

    pub const fn reset_enable(mode: InterfaceMode) -> Self {
        Self::instruction(Opcode::ResetEnable, mode.lines())
    }

    pub const fn reset(mode: InterfaceMode) -> Self {
        Self::instruction(Opcode::Reset, mode.lines())
    }

    /// Issued while the device is in single line mode.
    pub const fn enter_quad_mode() -> Self {
        Self::instruction(Opcode::EnterQuadMode, LineWidth::One)
    }

    /// Issued while the device is in quad line mode.
    pub const fn exit_quad_mode() -> Self {
        Self::instruction(Opcode::ExitQuadMode, LineWidth::Four)
    }

    pub const fn toggle_wrap_boundary(mode: InterfaceMode) -> Self {
        Self::instruction(Opcode::WrapBoundaryToggle, mode.lines())
    }

    /// Read template for memory mapped mode.
    pub const fn mapped_read_config(mode: InterfaceMode) -> Self {
        Self {
            kind: CommandKind::ReadConfig,
            ..Self::read_data(mode, 0, 1)
        }
    }

    /// Write template for memory mapped mode.
    ///
    /// Unlike every other command, the write template has the data strobe enabled.
    pub const fn mapped_write_config(mode: InterfaceMode) -> Self {
        Self {
            kind: CommandKind::WriteConfig,
            dqs: true,
            framing: Framing::InstructionEveryCommand,
            ..Self::write_data(mode, 0, 1)
        }
    }

    pub const fn instruction_lines(&self) -> LineWidth {
        self.lines
    }

    pub const fn address_lines(&self) -> Option<LineWidth> {
        match self.address {
            Some(_) => Some(self.lines),
            None => None,
        }
    }

    pub const fn address_size(&self) -> Option<AddressSize> {
        match self.address {
            Some(_) => Some(AddressSize::Bits24),
            None => None,
        }
    }

    pub const fn data_lines(&self) -> Option<LineWidth> {
        match self.data_len {
            Some(_) => Some(self.lines),
            None => None,
        }
    }
}

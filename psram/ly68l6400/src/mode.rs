use crate::opcode::Opcode;

/// The electrical protocol the device is currently listening on.
///
/// The device cannot report its own mode, so the caller must know it.
/// The device powers up in [`InterfaceMode::SingleLine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceMode {
    /// SPI, 1-1-1 commands
    #[default]
    SingleLine,
    /// QPI, 4-4-4 commands
    QuadLine,
}

/// Number of bus lines used by a transaction phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineWidth {
    One = 1,
    Four = 4,
}

/// The mode dependent fields of every transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeTemplate {
    /// Width of the instruction, address and data phases.
    pub lines: LineWidth,
    pub read_opcode: Opcode,
    pub read_dummy_cycles: u8,
    pub write_opcode: Opcode,
}

const SINGLE_LINE: ModeTemplate = ModeTemplate {
    lines: LineWidth::One,
    read_opcode: Opcode::FastRead,
    read_dummy_cycles: 8,
    write_opcode: Opcode::Write,
};

const QUAD_LINE: ModeTemplate = ModeTemplate {
    lines: LineWidth::Four,
    read_opcode: Opcode::QuadRead,
    read_dummy_cycles: 6,
    write_opcode: Opcode::QuadWrite,
};

impl InterfaceMode {
    pub const fn template(self) -> &'static ModeTemplate {
        match self {
            InterfaceMode::SingleLine => &SINGLE_LINE,
            InterfaceMode::QuadLine => &QUAD_LINE,
        }
    }

    pub const fn lines(self) -> LineWidth {
        self.template().lines
    }
}

impl LineWidth {
    pub const fn count(self) -> u8 {
        self as u8
    }
}

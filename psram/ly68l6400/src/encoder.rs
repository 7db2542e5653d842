use core::{fmt, ops::Deref};

use crate::{command::Command, mode::InterfaceMode};

const SEQUENCE_MAX: usize = 4;

/// Logical operations, before they are turned into bus transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    ReadData { address: u32, len: u32 },
    WriteData { address: u32, len: u32 },
    ReadId { len: u32 },
    /// Reset in both quad and single line framing, the mode argument is ignored.
    Reset,
    EnterQuadMode,
    ExitQuadMode,
    /// The read and write templates of memory mapped mode.
    EnableMemoryMap,
    ToggleWrapBoundary,
}

/// The commands of an operation, in the order they must be issued.
///
/// Only the first `len` entries are part of the sequence, the rest is padding.
#[derive(Clone, Copy)]
pub struct Sequence {
    commands: [Command; SEQUENCE_MAX],
    len: usize,
}

impl Operation {
    pub const fn encode(self, mode: InterfaceMode) -> Sequence {
        match self {
            Operation::ReadData { address, len } => {
                Sequence::one(Command::read_data(mode, address, len))
            }
            Operation::WriteData { address, len } => {
                Sequence::one(Command::write_data(mode, address, len))
            }
            Operation::ReadId { len } => Sequence::one(Command::read_id(len)),
            Operation::Reset => Sequence::four([
                Command::reset_enable(InterfaceMode::QuadLine),
                Command::reset(InterfaceMode::QuadLine),
                Command::reset_enable(InterfaceMode::SingleLine),
                Command::reset(InterfaceMode::SingleLine),
            ]),
            Operation::EnterQuadMode => Sequence::one(Command::enter_quad_mode()),
            Operation::ExitQuadMode => Sequence::one(Command::exit_quad_mode()),
            Operation::EnableMemoryMap => Sequence::two(
                Command::mapped_read_config(mode),
                Command::mapped_write_config(mode),
            ),
            Operation::ToggleWrapBoundary => Sequence::one(Command::toggle_wrap_boundary(mode)),
        }
    }
}

impl Sequence {
    const fn one(command: Command) -> Self {
        Self {
            commands: [command; SEQUENCE_MAX],
            len: 1,
        }
    }

    const fn two(first: Command, second: Command) -> Self {
        Self {
            commands: [first, second, second, second],
            len: 2,
        }
    }

    const fn four(commands: [Command; SEQUENCE_MAX]) -> Self {
        Self { commands, len: 4 }
    }
}

impl Deref for Sequence {
    type Target = [Command];

    fn deref(&self) -> &Self::Target {
        &self.commands[..self.len]
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}

impl Eq for Sequence {}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Sequence {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", &self[..])
    }
}

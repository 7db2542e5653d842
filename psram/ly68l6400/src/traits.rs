use crate::command::Command;

#[cfg(test)]
use mockall::automock;

/// Timeout counter behaviour while the bus is in memory mapped mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeoutCounter {
    /// Keep chip select asserted for as long as the bus is idle.
    Disabled,
    /// Release chip select after the given number of idle clock cycles.
    Enabled(u16),
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct MockBusError;

/// The octo/quad spi bus controller.
///
/// Only one transaction may be in flight at a time.
#[cfg_attr(test, automock(type Error = MockBusError;))]
pub trait Ospi {
    type Error: core::fmt::Debug;

    /// Send the instruction, address and dummy phases of a command.
    fn submit(&mut self, command: &Command, timeout_ms: u32) -> Result<(), Self::Error>;

    /// Receive the data phase of a submitted read command.
    fn receive(&mut self, buffer: &mut [u8], timeout_ms: u32) -> Result<(), Self::Error>;

    /// Transmit the data phase of a submitted write command.
    fn transmit(&mut self, buffer: &[u8], timeout_ms: u32) -> Result<(), Self::Error>;

    /// Hand the bus over to hardware memory mapped mode using the configured templates.
    fn activate_memory_map(&mut self, timeout: TimeoutCounter) -> Result<(), Self::Error>;
}

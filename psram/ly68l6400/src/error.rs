#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// The bus did not report success for a command, data phase or memory map activation.
    Transport,
    /// Position outside the device, or a buffer longer than a command can carry.
    Capacity,
}

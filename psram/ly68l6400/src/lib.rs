#![cfg_attr(not(test), no_std)]

extern crate bitfield;

#[macro_use]
extern crate num_derive;

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

mod command;
mod config;
mod driver;
#[cfg(feature = "embedded-io")]
mod embeddedio;
mod encoder;
mod error;
mod id;
mod mode;
mod opcode;
pub mod traits;

/// Device capacity in bytes (64 Mbit).
pub const CAPACITY: u32 = 8 * 1024 * 1024;

pub use self::{
    command::{AddressSize, Command, CommandKind, Framing},
    config::Config,
    driver::{Driver, StatefulDriver},
    encoder::{Operation, Sequence},
    error::DriverError,
    id::{Density, DeviceId, ExtendedId, KnownGoodDie, MANUFACTURER_ID},
    mode::{InterfaceMode, LineWidth, ModeTemplate},
    opcode::Opcode,
};

#[cfg(all(test, feature = "defmt"))]
mod tests {
    //! This module is required in order to satisfy the requirements of defmt, while running tests.
    //! Note that this will cause all log `defmt::` log statements to be thrown away.

    #[defmt::global_logger]
    struct GlobalLogger;

    unsafe impl defmt::Logger for GlobalLogger {
        fn acquire() {}
        unsafe fn flush() {}
        unsafe fn release() {}
        unsafe fn write(_bytes: &[u8]) {}
    }

    defmt::timestamp!("");

    #[defmt::panic_handler]
    fn panic() -> ! {
        panic!()
    }
}

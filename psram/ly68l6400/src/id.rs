use bitfield::bitfield;
use num_traits::FromPrimitive;

/// Manufacturer id reported by the device.
pub const MANUFACTURER_ID: u8 = 0x0D;

bitfield! {
    /// The most significant byte of the 48 bit extended id.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct ExtendedId(u8);
    impl Debug;
    /// Density code, extended id bits 47..45
    pub density_bits, _: 7, 5;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KnownGoodDie {
    Pass = 0x5D,
    Fail = 0x55,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Density {
    Mbit16 = 0b000,
    Mbit32 = 0b001,
    Mbit64 = 0b010,
}

impl Density {
    pub const fn bytes(self) -> u32 {
        match self {
            Density::Mbit16 => 2 * 1024 * 1024,
            Density::Mbit32 => 4 * 1024 * 1024,
            Density::Mbit64 => 8 * 1024 * 1024,
        }
    }
}

/// Response to the read id command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    pub manufacturer: u8,
    pub kgd: u8,
    pub eid: [u8; 6],
}

impl DeviceId {
    pub const LEN: usize = 8;

    pub const fn from_bytes(bytes: &[u8; Self::LEN]) -> Self {
        Self {
            manufacturer: bytes[0],
            kgd: bytes[1],
            eid: [bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]],
        }
    }

    pub fn known_good_die(&self) -> Option<KnownGoodDie> {
        KnownGoodDie::from_u8(self.kgd)
    }

    pub fn is_known_good_die(&self) -> bool {
        self.known_good_die() == Some(KnownGoodDie::Pass)
    }

    pub const fn extended(&self) -> ExtendedId {
        ExtendedId(self.eid[0])
    }

    pub fn density(&self) -> Option<Density> {
        Density::from_u8(self.extended().density_bits())
    }
}

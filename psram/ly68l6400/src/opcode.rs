/// Instruction bytes understood by the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Opcode {
    /// Fast read, 3 byte address (SPI 1-1-1)
    FastRead = 0x0B,
    /// Quad read, 3 byte address (QPI 4-4-4)
    QuadRead = 0xEB,
    /// Write, 3 byte address (SPI 1-1-1)
    Write = 0x02,
    /// Quad write, 3 byte address (QPI 4-4-4)
    QuadWrite = 0x38,
    /// Enter quad mode (SPI 1-0-0)
    EnterQuadMode = 0x35,
    /// Exit quad mode (QPI 4-0-0)
    ExitQuadMode = 0xF5,
    /// Reset enable (SPI 1-0-0, QPI 4-0-0)
    ResetEnable = 0x66,
    /// Reset, must directly follow reset enable (SPI 1-0-0, QPI 4-0-0)
    Reset = 0x99,
    /// Toggle between linear and wrapped burst (SPI 1-0-0, QPI 4-0-0)
    WrapBoundaryToggle = 0xC0,
    /// Read chip id (SPI 1-1-1)
    ReadId = 0x9F,
}

impl Opcode {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use num_traits::FromPrimitive;

    use super::*;

    #[test]
    fn values() {
        assert_eq!(0x0B, Opcode::FastRead.as_u8());
        assert_eq!(0xEB, Opcode::QuadRead.as_u8());
        assert_eq!(0x02, Opcode::Write.as_u8());
        assert_eq!(0x38, Opcode::QuadWrite.as_u8());
        assert_eq!(0x35, Opcode::EnterQuadMode.as_u8());
        assert_eq!(0xF5, Opcode::ExitQuadMode.as_u8());
        assert_eq!(0x66, Opcode::ResetEnable.as_u8());
        assert_eq!(0x99, Opcode::Reset.as_u8());
        assert_eq!(0xC0, Opcode::WrapBoundaryToggle.as_u8());
        assert_eq!(0x9F, Opcode::ReadId.as_u8());
    }

    #[test]
    fn from_byte() {
        assert_eq!(Some(Opcode::QuadRead), Opcode::from_u8(0xEB));
        assert_eq!(Some(Opcode::Reset), Opcode::from_u8(0x99));
        assert_eq!(None, Opcode::from_u8(0x03));
    }
}

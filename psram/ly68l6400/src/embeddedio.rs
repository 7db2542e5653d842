use embedded_io::{Error, ErrorKind, ErrorType, Read, Seek, SeekFrom, Write};

use crate::{driver::StatefulDriver, traits, DriverError, CAPACITY};

impl Error for DriverError {
    fn kind(&self) -> ErrorKind {
        match self {
            DriverError::Transport => ErrorKind::Other,
            DriverError::Capacity => ErrorKind::InvalidInput,
        }
    }
}

impl<Bus: traits::Ospi> ErrorType for StatefulDriver<Bus> {
    type Error = DriverError;
}

impl<Bus: traits::Ospi> Seek for StatefulDriver<Bus> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        let pos = match pos {
            SeekFrom::Start(offset) => i64::try_from(offset).ok(),
            SeekFrom::End(offset) => (CAPACITY as i64).checked_add(offset),
            SeekFrom::Current(offset) => (self.position as i64).checked_add(offset),
        }
        .ok_or(DriverError::Capacity)?;

        if pos < 0 || pos > CAPACITY as i64 {
            return Err(DriverError::Capacity);
        }

        self.position = pos as u32;
        Ok(pos as u64)
    }
}

impl<Bus: traits::Ospi> Read for StatefulDriver<Bus> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let length = usize::min(buf.len(), (CAPACITY - self.position) as usize);
        if length == 0 {
            return Ok(0);
        }

        self.driver
            .read(self.mode, self.position, &mut buf[..length])?;
        self.position += length as u32;
        Ok(length)
    }
}

impl<Bus: traits::Ospi> Write for StatefulDriver<Bus> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let length = usize::min(buf.len(), (CAPACITY - self.position) as usize);
        if length == 0 {
            return Ok(0);
        }

        self.driver
            .write(self.mode, self.position, &buf[..length])?;
        self.position += length as u32;
        Ok(length)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use crate::{
        traits::{MockBusError, MockOspi},
        Command, Config, Driver, InterfaceMode,
    };

    use super::*;

    #[test]
    fn seek_outside_device() {
        // Given
        let bus = MockOspi::new();
        let mut driver = Driver::new(bus, Config::default()).to_stateful(InterfaceMode::SingleLine);

        // Then
        assert_eq!(Ok(CAPACITY as u64), driver.seek(SeekFrom::End(0)));
        assert_eq!(Err(DriverError::Capacity), driver.seek(SeekFrom::Current(1)));
        assert_eq!(Err(DriverError::Capacity), driver.seek(SeekFrom::Start(CAPACITY as u64 + 1)));
        assert_eq!(Ok(0x10), driver.seek(SeekFrom::Start(0x10)));
        assert_eq!(Err(DriverError::Capacity), driver.seek(SeekFrom::Current(-0x11)));
    }

    #[test]
    fn seek_with_overflowing_offset() {
        // Given
        let bus = MockOspi::new();
        let mut driver = Driver::new(bus, Config::default()).to_stateful(InterfaceMode::SingleLine);
        driver.seek(SeekFrom::Start(1)).unwrap();

        // Then
        assert_eq!(Err(DriverError::Capacity), driver.seek(SeekFrom::End(i64::MAX)));
        assert_eq!(Err(DriverError::Capacity), driver.seek(SeekFrom::Current(i64::MAX)));
        assert_eq!(Err(DriverError::Capacity), driver.seek(SeekFrom::Current(i64::MIN)));
        assert_eq!(Err(DriverError::Capacity), driver.seek(SeekFrom::Start(u64::MAX)));
        assert_eq!(Ok(1), driver.stream_position());
    }

    #[test]
    fn read_advances_position() {
        // Given
        let mut seq = Sequence::new();
        let mut bus = MockOspi::new();

        for address in [0x100, 0x102] {
            let expected = Command::read_data(InterfaceMode::QuadLine, address, 2);
            bus.expect_submit()
                .withf(move |command, _| *command == expected)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(Ok(()));
            bus.expect_receive()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|buffer, _| {
                    buffer.fill(0xEE);
                    Ok(())
                });
        }

        // When
        let mut driver = Driver::new(bus, Config::default()).to_stateful(InterfaceMode::QuadLine);
        driver.seek(SeekFrom::Start(0x100)).unwrap();
        let mut buffer = [0; 2];

        // Then
        assert_eq!(Ok(2), Read::read(&mut driver, &mut buffer));
        assert_eq!(Ok(2), Read::read(&mut driver, &mut buffer));
        assert_eq!([0xEE; 2], buffer);
        assert_eq!(Ok(0x104), driver.stream_position());
    }

    #[test]
    fn write_is_truncated_at_end_of_device() {
        // Given
        let mut seq = Sequence::new();
        let mut bus = MockOspi::new();

        let expected = Command::write_data(InterfaceMode::SingleLine, CAPACITY - 2, 2);
        bus.expect_submit()
            .withf(move |command, _| *command == expected)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(()));
        bus.expect_transmit()
            .withf(|buffer, _| buffer == &[0x01, 0x02])
            .times(1)
            .in_sequence(&mut seq)
            .return_const(Ok(()));

        // When
        let mut driver = Driver::new(bus, Config::default()).to_stateful(InterfaceMode::SingleLine);
        driver.seek(SeekFrom::End(-2)).unwrap();

        // Then
        assert_eq!(Ok(2), Write::write(&mut driver, &[0x01, 0x02, 0x03, 0x04]));
        assert_eq!(Ok(0), Write::write(&mut driver, &[0x05]));
    }

    #[test]
    fn failed_read_keeps_position() {
        // Given
        let mut bus = MockOspi::new();
        bus.expect_submit()
            .times(1)
            .return_const(Err(MockBusError));

        // When
        let mut driver = Driver::new(bus, Config::default()).to_stateful(InterfaceMode::SingleLine);
        let mut buffer = [0; 4];

        // Then
        assert_eq!(Err(DriverError::Transport), Read::read(&mut driver, &mut buffer));
        assert_eq!(Ok(0), driver.stream_position());
    }
}

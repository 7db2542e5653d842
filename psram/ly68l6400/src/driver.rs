use crate::{
    command::Command,
    config::Config,
    encoder::Operation,
    error::DriverError,
    id::DeviceId,
    mode::InterfaceMode,
    traits::{self, TimeoutCounter},
};

/// Command driver for the LY68L6400.
///
/// The driver keeps no record of the device interface mode,
/// it must be supplied by the caller for every mode dependent operation.
/// No operation is retried, the first failing bus call aborts the operation.
pub struct Driver<Bus: traits::Ospi> {
    bus: Bus,
    config: Config,
}

/// Driver that tracks the interface mode of the device.
pub struct StatefulDriver<Bus: traits::Ospi> {
    pub driver: Driver<Bus>,
    pub(crate) mode: InterfaceMode,
    pub(crate) position: u32,
}

impl<Bus: traits::Ospi> Driver<Bus> {
    pub const fn new(bus: Bus, config: Config) -> Self {
        Self { bus, config }
    }

    /// Wrap the driver, given the mode that the device is currently in.
    pub const fn to_stateful(self, mode: InterfaceMode) -> StatefulDriver<Bus> {
        StatefulDriver {
            driver: self,
            mode,
            position: 0,
        }
    }

    pub fn release(self) -> Bus {
        self.bus
    }

    /// Configure the read and write templates and switch the bus to memory mapped mode.
    /// A failing step is not rolled back.
    pub fn enable_memory_mapped_mode(&mut self, mode: InterfaceMode) -> Result<(), DriverError> {
        self.run(&Operation::EnableMemoryMap.encode(mode))?;

        // The device has no fixed latency, so the bus must never end an idle mapped access.
        self.bus
            .activate_memory_map(TimeoutCounter::Disabled)
            .map_err(|_| {
                warn!("Memory map activation failed");
                DriverError::Transport
            })?;

        info!("Memory mapped mode enabled ({:?})", mode);
        Ok(())
    }

    /// Read a sequence of bytes starting at `address`.
    pub fn read(
        &mut self,
        mode: InterfaceMode,
        address: u32,
        buffer: &mut [u8],
    ) -> Result<(), DriverError> {
        self.submit(&Command::read_data(mode, address, data_len(buffer.len())?))?;
        self.receive(buffer)
    }

    /// Write a sequence of bytes starting at `address`.
    pub fn write(
        &mut self,
        mode: InterfaceMode,
        address: u32,
        buffer: &[u8],
    ) -> Result<(), DriverError> {
        self.submit(&Command::write_data(mode, address, data_len(buffer.len())?))?;
        self.transmit(buffer)
    }

    /// Switch the device from single line to quad line mode.
    pub fn enter_quad_mode(&mut self) -> Result<(), DriverError> {
        self.run(&Operation::EnterQuadMode.encode(InterfaceMode::SingleLine))?;
        debug!("Entered quad mode");
        Ok(())
    }

    /// Switch the device from quad line to single line mode.
    pub fn exit_quad_mode(&mut self) -> Result<(), DriverError> {
        self.run(&Operation::ExitQuadMode.encode(InterfaceMode::QuadLine))?;
        debug!("Exited quad mode");
        Ok(())
    }

    /// Toggle between 1K linear bursts and 32 byte wrapped bursts.
    pub fn toggle_wrap_boundary(&mut self, mode: InterfaceMode) -> Result<(), DriverError> {
        self.run(&Operation::ToggleWrapBoundary.encode(mode))
    }

    /// Read the raw chip id. Must be issued in single line mode.
    pub fn read_id(&mut self, buffer: &mut [u8]) -> Result<(), DriverError> {
        self.submit(&Command::read_id(data_len(buffer.len())?))?;
        self.receive(buffer)
    }

    /// Read and decode the chip id. Must be issued in single line mode.
    pub fn read_device_id(&mut self) -> Result<DeviceId, DriverError> {
        let mut buffer = [0; DeviceId::LEN];
        self.read_id(&mut buffer)?;

        let id = DeviceId::from_bytes(&buffer);
        if !id.is_known_good_die() {
            warn!("Device does not report a known good die ({:#x})", id.kgd);
        }

        Ok(id)
    }

    /// Reset the device from either interface mode.
    ///
    /// Reset is sent in quad line framing first, then in single line framing.
    /// A device that only listens on one of the widths may reject a step,
    /// which aborts the reset even though an earlier step may have succeeded.
    /// The device is in single line mode after a complete reset.
    pub fn reset(&mut self) -> Result<(), DriverError> {
        // The reset sequence does not depend on the mode.
        self.run(&Operation::Reset.encode(InterfaceMode::SingleLine))?;
        debug!("Device reset");
        Ok(())
    }

    fn run(&mut self, commands: &[Command]) -> Result<(), DriverError> {
        for (step, command) in commands.iter().enumerate() {
            self.submit(command).map_err(|e| {
                debug!("Aborted at step {} of {}", step + 1, commands.len());
                e
            })?;
        }

        Ok(())
    }

    fn submit(&mut self, command: &Command) -> Result<(), DriverError> {
        trace!("Submit {:?}", command);
        self.bus
            .submit(command, self.config.timeout_ms)
            .map_err(|_| {
                warn!("Command {:#x} was not accepted", command.opcode.as_u8());
                DriverError::Transport
            })
    }

    fn receive(&mut self, buffer: &mut [u8]) -> Result<(), DriverError> {
        let len = buffer.len();
        self.bus
            .receive(buffer, self.config.timeout_ms)
            .map_err(|_| {
                warn!("Receive of {} bytes failed", len);
                DriverError::Transport
            })
    }

    fn transmit(&mut self, buffer: &[u8]) -> Result<(), DriverError> {
        self.bus
            .transmit(buffer, self.config.timeout_ms)
            .map_err(|_| {
                warn!("Transmit of {} bytes failed", buffer.len());
                DriverError::Transport
            })
    }
}

/// A command carries at most `u32::MAX` data bytes.
fn data_len(len: usize) -> Result<u32, DriverError> {
    u32::try_from(len).map_err(|_| {
        error!("Buffer of {} bytes does not fit a single command", len);
        DriverError::Capacity
    })
}

impl<Bus: traits::Ospi> StatefulDriver<Bus> {
    /// The mode the device is believed to be in.
    pub const fn mode(&self) -> InterfaceMode {
        self.mode
    }

    pub fn into_inner(self) -> Driver<Bus> {
        self.driver
    }

    pub fn read(&mut self, address: u32, buffer: &mut [u8]) -> Result<(), DriverError> {
        self.driver.read(self.mode, address, buffer)
    }

    pub fn write(&mut self, address: u32, buffer: &[u8]) -> Result<(), DriverError> {
        self.driver.write(self.mode, address, buffer)
    }

    pub fn read_device_id(&mut self) -> Result<DeviceId, DriverError> {
        self.driver.read_device_id()
    }

    /// Does nothing if the device is already in quad line mode.
    pub fn enter_quad_mode(&mut self) -> Result<(), DriverError> {
        if self.mode == InterfaceMode::QuadLine {
            return Ok(());
        }

        self.driver.enter_quad_mode()?;
        self.mode = InterfaceMode::QuadLine;
        Ok(())
    }

    /// Does nothing if the device is already in single line mode.
    pub fn exit_quad_mode(&mut self) -> Result<(), DriverError> {
        if self.mode == InterfaceMode::SingleLine {
            return Ok(());
        }

        self.driver.exit_quad_mode()?;
        self.mode = InterfaceMode::SingleLine;
        Ok(())
    }

    /// The tracked mode is left untouched if the reset fails.
    pub fn reset(&mut self) -> Result<(), DriverError> {
        self.driver.reset()?;
        self.mode = InterfaceMode::SingleLine;
        Ok(())
    }

    pub fn toggle_wrap_boundary(&mut self) -> Result<(), DriverError> {
        self.driver.toggle_wrap_boundary(self.mode)
    }

    pub fn enable_memory_mapped_mode(&mut self) -> Result<(), DriverError> {
        self.driver.enable_memory_mapped_mode(self.mode)
    }
}

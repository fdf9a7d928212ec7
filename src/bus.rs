//! I2C bus transport for the MMC3416
//!
//! The sensor speaks the plain register-pointer protocol: every read is a
//! one-byte write selecting the register, followed by a separate read. No
//! combined write-read transaction is assumed, so the transport maps
//! directly onto the raw `read(2)`/`write(2)` calls exposed by the Linux
//! `/dev/i2c-*` device nodes.

use crate::error::{Mmc3416Error, Result};
use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use std::path::Path;

/// Default I2C bus device (Raspberry Pi 2/3/4; older boards use i2c-0)
pub const DEFAULT_BUS: &str = "/dev/i2c-1";

/// Default MMC3416 slave address
pub const DEFAULT_ADDRESS: u16 = 0x30;

/// Byte-level register access required by the driver
///
/// All operations are synchronous and blocking; the implementation owns the
/// bus handle exclusively and never overlaps transactions.
pub trait BusTransport {
    /// Write one byte to a register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<()>;

    /// Read `buf.len()` bytes starting at `reg`
    ///
    /// The sensor auto-increments the register pointer only across the six
    /// XYZ output registers; multi-byte reads must stay inside that window.
    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<()>;

    /// Read one byte from a register
    fn read_register(&mut self, reg: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }
}

/// `BusTransport` over a Linux `/dev/i2c-*` device node
pub struct LinuxI2cBus {
    dev: LinuxI2CDevice,
}

impl LinuxI2cBus {
    /// Open the bus device and bind the slave address
    ///
    /// # Arguments
    /// * `path` - bus device node, e.g. `/dev/i2c-1`
    /// * `address` - 7-bit sensor address, 0x30 for the MMC3416
    ///
    /// # Returns
    /// * `Ok(LinuxI2cBus)` - bound bus handle
    /// * `Err(Mmc3416Error::DeviceUnavailable)` - open or `I2C_SLAVE` ioctl failed
    pub fn open<P: AsRef<Path>>(path: P, address: u16) -> Result<Self> {
        let dev = LinuxI2CDevice::new(&path, address).map_err(|source| {
            Mmc3416Error::DeviceUnavailable {
                path: path.as_ref().display().to_string(),
                source,
            }
        })?;
        Ok(LinuxI2cBus { dev })
    }
}

impl BusTransport for LinuxI2cBus {
    fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        self.dev
            .write(&[reg, value])
            .map_err(|source| Mmc3416Error::Transport {
                register: reg,
                source,
            })
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<()> {
        // Set the register pointer, then read in a separate transaction.
        self.dev
            .write(&[reg])
            .map_err(|source| Mmc3416Error::Transport {
                register: reg,
                source,
            })?;
        self.dev
            .read(buf)
            .map_err(|source| Mmc3416Error::Transport {
                register: reg,
                source,
            })
    }
}

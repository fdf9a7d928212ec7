//! Linux I2C interface library for the MEMSIC MMC3416 magnetometer
//!
//! This library drives the MMC3416xPJ 3-axis magnetic field sensor over a
//! Linux `/dev/i2c-*` bus: identity probing, SET/RESET offset calibration,
//! continuous-mode configuration, calibrated milliGauss measurements and
//! compass heading computation.
//!
//! # Quick Start
//!
//! ## Single Measurement
//! ```no_run
//! use mmc3416_interface::{LinuxI2cBus, Mmc3416};
//!
//! let bus = LinuxI2cBus::open("/dev/i2c-1", 0x30)?;
//! let mut sensor = Mmc3416::new(bus)?;
//!
//! // Null out the internal offset bias before the first reading.
//! sensor.calibrate()?;
//!
//! let field = sensor.read()?;
//! println!("X: {:.2} mG  Y: {:.2} mG  Z: {:.2} mG", field.x, field.y, field.z);
//! println!("Heading: {:.1} degrees", field.heading(0.0));
//! # Ok::<(), mmc3416_interface::Mmc3416Error>(())
//! ```
//!
//! ## Continuous Mode
//! ```no_run
//! use mmc3416_interface::{Frequency, LinuxI2cBus, Mmc3416};
//!
//! let bus = LinuxI2cBus::open("/dev/i2c-1", 0x30)?;
//! let mut sensor = Mmc3416::new(bus)?;
//!
//! // Let the sensor sample on its own at 25 Hz.
//! sensor.set_frequency(Frequency::Hz25)?;
//! # Ok::<(), mmc3416_interface::Mmc3416Error>(())
//! ```
//!
//! ## Sensor Information
//! ```no_run
//! use mmc3416_interface::{LinuxI2cBus, Mmc3416};
//!
//! let bus = LinuxI2cBus::open("/dev/i2c-1", 0x30)?;
//! let mut sensor = Mmc3416::new(bus)?;
//!
//! let info = sensor.info()?;
//! println!("Product ID: 0x{:02X}", info.product_id);
//! println!("Frequency: {}", info.frequency());
//! println!("Resolution: {}", info.resolution());
//! # Ok::<(), mmc3416_interface::Mmc3416Error>(())
//! ```

pub mod bus;
pub mod error;
pub mod mmc3416;
pub mod registers;
pub mod report;

// Re-export public API
pub use bus::{BusTransport, LinuxI2cBus, DEFAULT_ADDRESS, DEFAULT_BUS};
pub use error::{Mmc3416Error, Result};
pub use mmc3416::{DeviceInfo, Measurement, Mmc3416, RegisterDump};
pub use registers::{Control0, Control1, Frequency, Resolution};

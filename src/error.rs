//! Error types for the MMC3416 sensor interface

use thiserror::Error;

use i2cdev::linux::LinuxI2CError;

/// Error type for MMC3416 operations
#[derive(Error, Debug)]
pub enum Mmc3416Error {
    /// The I2C bus device could not be opened or bound
    #[error("Failed to open I2C bus [{path}]: {source}")]
    DeviceUnavailable {
        path: String,
        source: LinuxI2CError,
    },

    /// The sensor did not answer the identity probe at the selected address
    #[error("No response from sensor: product ID register returned 0x{product_id:02X}")]
    Addressing { product_id: u8 },

    /// A register read or write failed on the bus
    #[error("I2C transfer failure for register 0x{register:02X}: {source}")]
    Transport {
        register: u8,
        source: LinuxI2CError,
    },

    /// A configuration write did not read back with the requested value
    #[error(
        "Readback mismatch on register 0x{register:02X}: requested mode {requested}, got {actual}"
    )]
    ConfigVerification {
        register: u8,
        requested: u8,
        actual: u8,
    },

    /// User-supplied value outside the accepted bounds
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// The sensor never raised the data-ready flag within the poll budget
    #[error("Sensor did not signal data ready after {attempts} status polls")]
    Timeout { attempts: u32 },

    /// Report file output error
    #[error("Report output error: {0}")]
    Report(#[from] std::io::Error),
}

/// Result type for MMC3416 operations
pub type Result<T> = std::result::Result<T, Mmc3416Error>;

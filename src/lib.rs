//! Biblioteca Rust para el magnetómetro Honeywell HMC5883L
//!
//! Esta biblioteca proporciona una interfaz para controlar el sensor HMC5883L,
//! un magnetómetro de 3 ejes con bus I2C, sobre los traits de `embedded-hal`.

#![cfg_attr(not(test), no_std)]

use embedded_hal::i2c::I2c;

// Importaciones internas
pub mod conversion;
pub mod device;
pub mod interface;
pub mod register;
pub mod types;

// Re-exports públicos
pub use conversion::mag_raw_to_gauss;
pub use device::{Hmc5883l, Hmc5883lError};
pub use types::{
    FullScale, MagConfig, MagField, MagFieldRaw, MagStatus, MeasurementBias, OperatingMode,
    OutputRate, SampleAveraging,
};

use crate::interface::I2cInterface;

/// Dirección I2C nominal del chip (7 bits)
pub const DEFAULT_ADDRESS: u8 = 0x1E;

/// Crea un nuevo dispositivo HMC5883L usando el bus I2C
pub fn new_i2c_device<I, E>(i2c: I, address: u8) -> Hmc5883l<I2cInterface<I>>
where
    I: I2c<Error = E>,
{
    let interface = I2cInterface::new(i2c, address);
    Hmc5883l::new(interface)
}

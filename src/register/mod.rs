//! Definiciones de registros para el HMC5883L
//!
//! El mapa de registros es plano (sin bancos): 13 registros, 0x00..=0x0C.

/// Registro de configuración A: promediado, tasa de salida y modo de medida
pub const CONFIG_A: u8 = 0x00;
/// Registro de configuración B: ganancia (escala completa)
pub const CONFIG_B: u8 = 0x01;
/// Registro de modo: I2C high-speed y modo de operación
pub const MODE: u8 = 0x02;

// Registros de datos. El chip entrega los ejes en orden X, Z, Y.
pub const DATA_X_H: u8 = 0x03;
pub const DATA_X_L: u8 = 0x04;
pub const DATA_Z_H: u8 = 0x05;
pub const DATA_Z_L: u8 = 0x06;
pub const DATA_Y_H: u8 = 0x07;
pub const DATA_Y_L: u8 = 0x08;

/// Registro de estado
pub const STATUS: u8 = 0x09;

// Registros de identificación, valores fijos "H43"
pub const ID_A: u8 = 0x0A;
pub const ID_B: u8 = 0x0B;
pub const ID_C: u8 = 0x0C;

/// Bits útiles para configuración y estado
pub mod bits {
    // Registro STATUS
    pub const STATUS_RDY: u8 = 0x01;
    pub const STATUS_LOCK: u8 = 0x02;

    // Posiciones de campo dentro de los registros de configuración
    pub const AVG_SHIFT: u8 = 5;
    pub const RATE_SHIFT: u8 = 2;
    pub const GAIN_SHIFT: u8 = 5;
    pub const HS_SHIFT: u8 = 7;
}

/// Valor esperado en los registros de identificación
pub const IDENTIFICATION: [u8; 3] = [0x48, 0x34, 0x33]; // "H43"

//! Módulo de abstracción para la interfaz de comunicación con el HMC5883L

use embedded_hal::i2c::I2c;

// Tamaño máximo de una escritura: puntero de registro + los 3 bytes de configuración
const MAX_WRITE_LEN: usize = 3;

/// Error genérico para la interfaz de comunicación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceError<E> {
    /// Error de comunicación I2C (NACK, timeout, arbitraje)
    I2cError(E),
    /// Parámetro inválido (contrato interno del driver)
    InvalidParameter,
}

/// Trait para abstraer la comunicación con el HMC5883L
pub trait Interface {
    /// Tipo de error que puede producir la interfaz
    type Error;

    /// Escribe uno o más registros consecutivos a partir de `reg`
    fn write_reg(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Lee uno o más registros consecutivos a partir de `reg`
    fn read_reg(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error>;
}

/// Implementación de Interface para I2C
///
/// Guarda la dirección de 7 bits del chip; el bit de lectura/escritura lo
/// enmarca el bus en cada transacción, la dirección nunca se modifica.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C, E> I2cInterface<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Crea una nueva interfaz I2C
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Consume la interfaz y devuelve el dispositivo I2C subyacente
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Interface for I2cInterface<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = InterfaceError<E>;

    fn write_reg(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
        if data.len() > MAX_WRITE_LEN {
            return Err(InterfaceError::InvalidParameter);
        }

        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = reg;
        buffer[1..data.len() + 1].copy_from_slice(data);

        self.i2c
            .write(self.addr, &buffer[0..data.len() + 1])
            .map_err(InterfaceError::I2cError)
    }

    fn read_reg(&mut self, reg: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        // Puntero de registro, repeated start, lectura con NACK en el último byte
        self.i2c
            .write_read(self.addr, &[reg], data)
            .map_err(InterfaceError::I2cError)
    }
}

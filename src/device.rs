use crate::conversion::mag_raw_to_gauss;
use crate::interface::Interface;
use crate::register;
use crate::register::bits;
use crate::types::{MagConfig, MagField, MagFieldRaw, MagStatus, OperatingMode};

/// Driver del magnetómetro HMC5883L
///
/// Posee la interfaz de bus: la adquisición es la construcción y la liberación
/// es [`Hmc5883l::release`] o el drop del valor, no hay teardown manual.
pub struct Hmc5883l<I> {
    pub(crate) interface: I,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hmc5883lError<E> {
    /// Error de la interfaz de comunicación, propagado sin modificar
    Interface(E),
    /// Los registros de identificación no devolvieron "H43"
    UnknownChip([u8; 3]),
}

impl<E> From<E> for Hmc5883lError<E> {
    fn from(error: E) -> Self {
        Hmc5883lError::Interface(error)
    }
}

impl<I, E> Hmc5883l<I>
where
    I: Interface<Error = E>,
{
    /// Create a new instance of Hmc5883l
    pub fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Lee un registro de un byte
    fn read_reg(&mut self, reg: u8) -> Result<u8, Hmc5883lError<E>> {
        let mut data = [0u8];
        self.interface.read_reg(reg, &mut data)?;
        Ok(data[0])
    }

    /// Escribe la configuración completa del sensor
    ///
    /// Empaqueta la configuración en tres bytes y los escribe en una sola
    /// transacción a partir del registro de configuración A.
    pub fn configure(&mut self, config: &MagConfig) -> Result<(), Hmc5883lError<E>> {
        let bytes = config.register_bytes();
        self.interface.write_reg(register::CONFIG_A, &bytes)?;
        Ok(())
    }

    /// Escribe solo el registro de modo
    ///
    /// En modo single el chip vuelve a idle tras cada conversión, así que hay
    /// que rearmarlo antes de cada medida.
    pub fn set_mode(&mut self, mode: OperatingMode) -> Result<(), Hmc5883lError<E>> {
        self.interface.write_reg(register::MODE, &[mode as u8])?;
        Ok(())
    }

    /// Lee el campo magnético en cuentas del ADC
    ///
    /// Lectura de los 6 registros de datos en una transacción. El chip entrega
    /// los pares big-endian en orden X, Z, Y; se conserva tal cual.
    pub fn read_raw(&mut self) -> Result<MagFieldRaw, Hmc5883lError<E>> {
        let mut data = [0u8; 6];
        self.interface.read_reg(register::DATA_X_H, &mut data)?;

        Ok(MagFieldRaw {
            x: i16::from_be_bytes([data[0], data[1]]),
            z: i16::from_be_bytes([data[2], data[3]]),
            y: i16::from_be_bytes([data[4], data[5]]),
        })
    }

    /// Lee la ganancia configurada y devuelve su divisor en LSB/gauss
    ///
    /// Se relee del registro de configuración B en cada petición, no se
    /// cachea en el driver.
    pub fn read_gain(&mut self) -> Result<u16, Hmc5883lError<E>> {
        let value = self.read_reg(register::CONFIG_B)?;
        let scale = crate::types::FullScale::from(value >> bits::GAIN_SHIFT);
        Ok(scale.divisor())
    }

    /// Lee el campo magnético en gauss
    ///
    /// Compone [`Hmc5883l::read_raw`] y [`Hmc5883l::read_gain`]; si cualquiera
    /// de las dos lecturas falla no se devuelve resultado parcial.
    pub fn read_scaled(&mut self) -> Result<MagField, Hmc5883lError<E>> {
        let raw = self.read_raw()?;
        let divisor = self.read_gain()?;
        Ok(mag_raw_to_gauss(raw, divisor))
    }

    /// Lee el registro de estado del chip
    pub fn read_status(&mut self) -> Result<MagStatus, Hmc5883lError<E>> {
        let value = self.read_reg(register::STATUS)?;
        Ok(MagStatus {
            ready: value & bits::STATUS_RDY != 0,
            locked: value & bits::STATUS_LOCK != 0,
        })
    }

    /// Lee los tres registros de identificación
    pub fn identification(&mut self) -> Result<[u8; 3], Hmc5883lError<E>> {
        let mut id = [0u8; 3];
        self.interface.read_reg(register::ID_A, &mut id)?;
        Ok(id)
    }

    /// Comprueba que el chip responde con la identificación "H43"
    pub fn verify_identification(&mut self) -> Result<(), Hmc5883lError<E>> {
        let id = self.identification()?;
        if id != register::IDENTIFICATION {
            return Err(Hmc5883lError::UnknownChip(id));
        }
        Ok(())
    }

    /// Consume el driver y devuelve la interfaz subyacente
    pub fn release(self) -> I {
        self.interface
    }
}

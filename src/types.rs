//! Definiciones de tipos y constantes comunes para el HMC5883L

use crate::register::bits;

/// Número de muestras promediadas por salida de medida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SampleAveraging {
    /// 1 muestra (sin promediado)
    Avg1 = 0,
    /// 2 muestras
    Avg2 = 1,
    /// 4 muestras
    Avg4 = 2,
    /// 8 muestras
    Avg8 = 3,
}

impl Default for SampleAveraging {
    fn default() -> Self {
        SampleAveraging::Avg1
    }
}

/// Tasa de salida de datos en modo continuo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputRate {
    /// 0.75 Hz
    Rate0_75Hz = 0,
    /// 1.5 Hz
    Rate1_5Hz = 1,
    /// 3 Hz
    Rate3Hz = 2,
    /// 7.5 Hz
    Rate7_5Hz = 3,
    /// 15 Hz
    Rate15Hz = 4,
    /// 30 Hz
    Rate30Hz = 5,
    /// 75 Hz
    Rate75Hz = 6,
}

impl Default for OutputRate {
    fn default() -> Self {
        OutputRate::Rate15Hz
    }
}

/// Modo de medida: normal o con corriente de bias para self-test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MeasurementBias {
    /// Medida normal
    Normal = 0,
    /// Bias positivo en los tres ejes
    Positive = 1,
    /// Bias negativo en los tres ejes
    Negative = 2,
}

impl Default for MeasurementBias {
    fn default() -> Self {
        MeasurementBias::Normal
    }
}

/// Escalas completas disponibles para el magnetómetro
///
/// Cada escala fija la sensibilidad del chip en LSB/gauss, ver [`FullScale::divisor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FullScale {
    /// ±0.88 Ga
    Fs0_88Ga = 0,
    /// ±1.3 Ga
    Fs1_3Ga = 1,
    /// ±1.9 Ga
    Fs1_9Ga = 2,
    /// ±2.5 Ga
    Fs2_5Ga = 3,
    /// ±4.0 Ga
    Fs4_0Ga = 4,
    /// ±4.7 Ga
    Fs4_7Ga = 5,
    /// ±5.6 Ga
    Fs5_6Ga = 6,
    /// ±8.1 Ga
    Fs8_1Ga = 7,
}

impl Default for FullScale {
    fn default() -> Self {
        FullScale::Fs1_3Ga
    }
}

// Conversión desde el campo de 3 bits del registro de configuración B.
// Valores fuera de tabla caen en la escala por defecto del chip.
impl From<u8> for FullScale {
    fn from(value: u8) -> Self {
        match value {
            0 => FullScale::Fs0_88Ga,
            1 => FullScale::Fs1_3Ga,
            2 => FullScale::Fs1_9Ga,
            3 => FullScale::Fs2_5Ga,
            4 => FullScale::Fs4_0Ga,
            5 => FullScale::Fs4_7Ga,
            6 => FullScale::Fs5_6Ga,
            7 => FullScale::Fs8_1Ga,
            _ => FullScale::Fs0_88Ga,
        }
    }
}

impl FullScale {
    /// Sensibilidad en LSB/gauss asociada a la escala (datasheet, tabla de ganancias)
    pub fn divisor(self) -> u16 {
        match self {
            FullScale::Fs0_88Ga => 1370,
            FullScale::Fs1_3Ga => 1090,
            FullScale::Fs1_9Ga => 820,
            FullScale::Fs2_5Ga => 660,
            FullScale::Fs4_0Ga => 440,
            FullScale::Fs4_7Ga => 390,
            FullScale::Fs5_6Ga => 330,
            FullScale::Fs8_1Ga => 230,
        }
    }
}

/// Modo de operación del chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OperatingMode {
    /// Medida continua a la tasa configurada
    Continuous = 0,
    /// Medida única; el chip vuelve a idle tras cada conversión
    Single = 1,
    /// Idle
    Idle = 2,
}

impl Default for OperatingMode {
    fn default() -> Self {
        OperatingMode::Single
    }
}

/// Configuración completa del sensor
///
/// Todos los campos son enumerados, por lo que no es posible construir una
/// configuración fuera de rango. Se traduce a los tres bytes de registro
/// con [`MagConfig::register_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagConfig {
    pub averaging: SampleAveraging,
    pub output_rate: OutputRate,
    pub bias: MeasurementBias,
    pub gain: FullScale,
    /// Habilita I2C high-speed (3400 kHz)
    pub high_speed: bool,
    pub mode: OperatingMode,
}

impl MagConfig {
    /// Empaqueta la configuración en los bytes de los registros A, B y modo
    pub fn register_bytes(&self) -> [u8; 3] {
        [
            ((self.averaging as u8) << bits::AVG_SHIFT)
                | ((self.output_rate as u8) << bits::RATE_SHIFT)
                | self.bias as u8,
            (self.gain as u8) << bits::GAIN_SHIFT,
            ((self.high_speed as u8) << bits::HS_SHIFT) | self.mode as u8,
        ]
    }
}

/// Lectura en bruto del campo magnético, en cuentas del ADC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagFieldRaw {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Lectura del campo magnético en gauss, ajustada con la ganancia configurada
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagField {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Estado instantáneo del chip (registro STATUS)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagStatus {
    /// Hay una medida nueva disponible en los registros de datos
    pub ready: bool,
    /// Los registros de salida están bloqueados a mitad de lectura
    pub locked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisor_table() {
        let expected = [1370, 1090, 820, 660, 440, 390, 330, 230];
        for (field, divisor) in expected.iter().enumerate() {
            assert_eq!(FullScale::from(field as u8).divisor(), *divisor);
        }
    }

    #[test]
    fn test_full_scale_out_of_table() {
        // Inalcanzable con un campo de 3 bits, pero la conversión no debe fallar
        for field in 8..=255u8 {
            assert_eq!(FullScale::from(field).divisor(), 1370);
        }
    }

    #[test]
    fn test_config_packing() {
        let config = MagConfig {
            averaging: SampleAveraging::Avg4,
            output_rate: OutputRate::Rate15Hz,
            bias: MeasurementBias::Normal,
            gain: FullScale::Fs1_3Ga,
            high_speed: false,
            mode: OperatingMode::Continuous,
        };
        assert_eq!(config.register_bytes(), [0x50, 0x20, 0x00]);
    }

    #[test]
    fn test_config_packing_all_fields() {
        let config = MagConfig {
            averaging: SampleAveraging::Avg8,
            output_rate: OutputRate::Rate75Hz,
            bias: MeasurementBias::Negative,
            gain: FullScale::Fs8_1Ga,
            high_speed: true,
            mode: OperatingMode::Idle,
        };
        assert_eq!(
            config.register_bytes(),
            [(3 << 5) | (6 << 2) | 2, 7 << 5, 0x80 | 2]
        );
    }
}

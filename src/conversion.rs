//! Funciones de conversión para datos del sensor HMC5883L
//!
//! Este módulo proporciona funciones para convertir cuentas raw del sensor
//! a campo magnético en gauss según la ganancia configurada.

use crate::types::{MagField, MagFieldRaw};

/// Convierte una cuenta raw de un eje a gauss con el divisor indicado
///
/// # Arguments
/// * `raw` - Valor en cuentas del ADC
/// * `divisor` - Sensibilidad en LSB/gauss de la escala configurada
#[inline]
pub fn axis_raw_to_gauss(raw: i16, divisor: u16) -> f32 {
    raw as f32 / divisor as f32
}

/// Convierte una lectura raw completa a gauss según la ganancia configurada
///
/// # Arguments
/// * `raw` - Lectura en cuentas del ADC [x, y, z]
/// * `divisor` - Sensibilidad en LSB/gauss de la escala configurada
///
/// # Returns
/// Campo magnético en gauss [x, y, z]
pub fn mag_raw_to_gauss(raw: MagFieldRaw, divisor: u16) -> MagField {
    MagField {
        x: axis_raw_to_gauss(raw.x, divisor),
        y: axis_raw_to_gauss(raw.y, divisor),
        z: axis_raw_to_gauss(raw.z, divisor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_conversion() {
        assert_eq!(axis_raw_to_gauss(1090, 1090), 1.0);
        assert_eq!(axis_raw_to_gauss(-1090, 1090), -1.0);
        assert_eq!(axis_raw_to_gauss(0, 1370), 0.0);
    }

    #[test]
    fn test_field_conversion() {
        let raw = MagFieldRaw {
            x: 230,
            y: -460,
            z: 115,
        };
        let field = mag_raw_to_gauss(raw, 230);
        assert_eq!(field.x, 1.0);
        assert_eq!(field.y, -2.0);
        assert_eq!(field.z, 0.5);
    }

    #[test]
    fn test_conversion_saturated_counts() {
        let raw = MagFieldRaw {
            x: i16::MAX,
            y: i16::MIN,
            z: 0,
        };
        let field = mag_raw_to_gauss(raw, 1370);
        assert_eq!(field.x, 32767.0 / 1370.0);
        assert_eq!(field.y, -32768.0 / 1370.0);
        assert_eq!(field.z, 0.0);
    }
}

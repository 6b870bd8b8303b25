use hmc5883l_rs::{self, MagConfig, OperatingMode, OutputRate, SampleAveraging};
use linux_embedded_hal::I2cdev;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

fn main() {
    println!("HMC5883L - Ejemplo básico");

    // Flag para controlar la ejecución del programa
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    // Configurar el manejador para Ctrl+C
    ctrlc::set_handler(move || {
        println!("\nDeteniendo el programa...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error al configurar el manejador de Ctrl+C");

    // Crear instancia de I2C para Linux
    let i2c = match I2cdev::new("/dev/i2c-1") {
        Ok(i2c) => i2c,
        Err(e) => {
            eprintln!("Error al abrir dispositivo I2C: {:?}", e);
            return;
        }
    };

    // Crear dispositivo HMC5883L con la dirección I2C estándar
    let mut mag = hmc5883l_rs::new_i2c_device(i2c, hmc5883l_rs::DEFAULT_ADDRESS);

    // Comprobar que el chip responde
    if let Err(e) = mag.verify_identification() {
        eprintln!("Error de identificación del chip: {:?}", e);
        return;
    }
    println!("Chip identificado correctamente");

    // Configurar medida continua a 15 Hz con promediado de 8 muestras
    let config = MagConfig {
        averaging: SampleAveraging::Avg8,
        output_rate: OutputRate::Rate15Hz,
        mode: OperatingMode::Continuous,
        ..MagConfig::default()
    };
    if let Err(e) = mag.configure(&config) {
        eprintln!("Error al configurar el dispositivo: {:?}", e);
        return;
    }

    while running.load(Ordering::SeqCst) {
        match mag.read_scaled() {
            Ok(field) => {
                println!(
                    "Campo magnético [Ga]: x = {:.3}, y = {:.3}, z = {:.3}",
                    field.x, field.y, field.z
                );
            }
            Err(e) => eprintln!("Error de lectura: {:?}", e),
        }
        thread::sleep(Duration::from_millis(100));
    }
}

use crate::config::GuardrailConfig;
use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};
use std::error::Error;

/// Inicializa el logger: archivo en el directorio configurado y copia por stdout.
/// El handle devuelto tiene que vivir mientras se quiera loguear.
pub fn init_logger(config: &GuardrailConfig) -> Result<LoggerHandle, Box<dyn Error>> {
    // Los logs van a la carpeta configurada ("logs" por defecto)
    let file_spec = FileSpec::default().directory(&config.log_directory);

    let handle = Logger::try_with_str(&config.log_level)? // Nivel leído de la configuración
        .log_to_file(file_spec)
        .write_mode(WriteMode::BufferAndFlush) // Con buffer; se vacía al soltar el handle
        .duplicate_to_stdout(Duplicate::Info) // Info y más grave también por stdout
        .format(|write, _now, record| {
            write!(
                write,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d: %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .start()?;
    Ok(handle)
}

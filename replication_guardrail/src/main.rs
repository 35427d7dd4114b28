use log::{error, info, warn};
use replication_guardrail::logger::init_logger;
use replication_guardrail::{ErrorType, GuardrailConfig, Keyspace};
use std::env;
use std::error::Error;
use std::fs;
use std::process;

// Lee las definiciones de keyspaces, las ajusta y las imprime por stdout
fn run(config_path: &str, keyspaces_path: &str) -> Result<(), Box<dyn Error>> {
    let config = GuardrailConfig::from_file(config_path)?;
    let _logger = init_logger(&config)?;
    info!(
        "Guardrail de replicación iniciado, uptuning habilitado: {}",
        config.uptuning_enabled
    );

    let content = fs::read_to_string(keyspaces_path).map_err(ErrorType::from)?;
    let keyspaces: Vec<Keyspace> = serde_json::from_str(&content)
        .map_err(|e| ErrorType::InvalidConfig(format!("{}: {}", keyspaces_path, e)))?;

    let tuner = config.build_tuner();
    let mut tuned_keyspaces = Vec::with_capacity(keyspaces.len());
    for keyspace in &keyspaces {
        let (tuned, warnings) = tuner.tune_keyspace(keyspace);
        for message in warnings.iter() {
            warn!("{}", message);
        }
        tuned_keyspaces.push(tuned);
    }

    println!("{}", serde_json::to_string_pretty(&tuned_keyspaces)?);
    info!("{} keyspaces procesados", tuned_keyspaces.len());
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Uso: {} <config.json> <keyspaces.json>", args[0]);
        process::exit(2);
    }

    if let Err(e) = run(&args[1], &args[2]) {
        error!("Error al procesar los keyspaces: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

use crate::keyspace_functions::replica_count::MINIMUM_REPLICATION_FACTOR;
use crate::keyspace_functions::replication_config::{ReplicationConfig, REPLICATION_FACTOR};
use crate::tuner_functions::tune_up::TuneUp;
use crate::tuner_functions::warnings::simple_strategy_warning;
use log::debug;

/// Sube `replication_factor` a 2 si es menor. Si falta o no es un entero no se
/// toca nada: no hay nada que hacer cumplir.
pub fn tune_up_simple_strategy(config: &ReplicationConfig, keyspace_name: &str) -> TuneUp {
    let current = match config
        .get(REPLICATION_FACTOR)
        .and_then(|value| value.parse::<i64>().ok())
    {
        Some(current) => current,
        None => {
            debug!(
                "Keyspace {}: replication_factor ausente o inválido, no se ajusta",
                keyspace_name
            );
            return TuneUp::unchanged(config);
        }
    };

    let mut tune_up = TuneUp::unchanged(config);
    if current < i64::from(MINIMUM_REPLICATION_FACTOR) {
        tune_up
            .config
            .set(REPLICATION_FACTOR, MINIMUM_REPLICATION_FACTOR.to_string());
        tune_up.warnings.add(simple_strategy_warning(keyspace_name));
    }
    tune_up
}

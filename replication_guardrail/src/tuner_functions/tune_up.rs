use crate::keyspace_functions::replication_config::ReplicationConfig;
use crate::tuner_functions::warnings::Warnings;

// Resultado de una pasada del tuner: la configuración (posiblemente ajustada) y sus advertencias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneUp {
    pub config: ReplicationConfig,
    pub warnings: Warnings,
}

impl TuneUp {
    pub fn unchanged(config: &ReplicationConfig) -> Self {
        TuneUp {
            config: config.clone(),
            warnings: Warnings::new(),
        }
    }

    /// Toda modificación de la configuración deja una advertencia.
    pub fn is_tuned(&self) -> bool {
        !self.warnings.is_empty()
    }
}

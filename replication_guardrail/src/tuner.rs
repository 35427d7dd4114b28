use crate::keyspace_functions::keyspace::Keyspace;
use crate::keyspace_functions::replication_class::ReplicationClass;
use crate::keyspace_functions::replication_config::ReplicationConfig;
use crate::keyspace_functions::system_keyspaces::ExemptKeyspaces;
use crate::tuner_functions::network_topology::tune_up_network_topology_strategy;
use crate::tuner_functions::simple_strategy::tune_up_simple_strategy;
use crate::tuner_functions::tune_up::TuneUp;
use crate::tuner_functions::uptuning_switch::UptuningSwitch;
use crate::tuner_functions::warnings::Warnings;
use log::debug;

/// Ajusta la configuración de replicación de un keyspace antes de persistirla.
///
/// Si el tuner está deshabilitado o el keyspace está exento se devuelve una
/// copia idéntica sin parsear nada. Solo se ajustan SimpleStrategy y
/// NetworkTopologyStrategy; cualquier otra clase (LocalStrategy incluida) pasa
/// sin cambios. La configuración recibida nunca se modifica.
pub fn apply<F>(
    keyspace_name: &str,
    config: &ReplicationConfig,
    is_enabled: bool,
    is_exempt: F,
) -> TuneUp
where
    F: Fn(&str) -> bool,
{
    if !is_enabled || is_exempt(keyspace_name) {
        return TuneUp::unchanged(config);
    }

    match config.class() {
        Some(ReplicationClass::SimpleStrategy) => tune_up_simple_strategy(config, keyspace_name),
        Some(ReplicationClass::NetworkTopologyStrategy) => {
            tune_up_network_topology_strategy(config, keyspace_name)
        }
        // LocalStrategy no necesita ajuste
        other => {
            debug!(
                "Keyspace {}: estrategia {:?} no se ajusta",
                keyspace_name, other
            );
            TuneUp::unchanged(config)
        }
    }
}

// Tuner con su interruptor y su lista de keyspaces exentos
#[derive(Debug, Clone, Default)]
pub struct TuneUpReplicationFactor {
    switch: UptuningSwitch,
    exempt: ExemptKeyspaces,
}

impl TuneUpReplicationFactor {
    pub fn new(switch: UptuningSwitch, exempt: ExemptKeyspaces) -> Self {
        TuneUpReplicationFactor { switch, exempt }
    }

    pub fn switch(&self) -> &UptuningSwitch {
        &self.switch
    }

    pub fn is_uptuning_enabled(&self) -> bool {
        self.switch.is_enabled()
    }

    pub fn set_uptuning_enabled(&self, enabled: bool) {
        self.switch.set_enabled(enabled);
    }

    /// Lee el interruptor una sola vez por invocación.
    pub fn apply(&self, keyspace_name: &str, config: &ReplicationConfig) -> TuneUp {
        apply(keyspace_name, config, self.switch.is_enabled(), |name| {
            self.exempt.is_exempt(name)
        })
    }

    pub fn tune_keyspace(&self, keyspace: &Keyspace) -> (Keyspace, Warnings) {
        let TuneUp { config, warnings } = self.apply(&keyspace.name, &keyspace.replication);
        let tuned = Keyspace {
            name: keyspace.name.clone(),
            replication: config,
        };
        (tuned, warnings)
    }
}

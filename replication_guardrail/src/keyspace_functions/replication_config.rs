use crate::keyspace_functions::replication_class::ReplicationClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Clave reservada que identifica la estrategia de replicación
pub const CLASS: &str = "class";
// Clave reservada de SimpleStrategy
pub const REPLICATION_FACTOR: &str = "replication_factor";

// Configuración de replicación: mapa de opciones tal como llega del esquema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplicationConfig {
    options: HashMap<String, String>,
}

impl ReplicationConfig {
    pub fn new(options: HashMap<String, String>) -> Self {
        ReplicationConfig { options }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Estrategia declarada, o `None` si el mapa no tiene la clave `class`.
    pub fn class(&self) -> Option<ReplicationClass> {
        self.get(CLASS).map(ReplicationClass::from_class_name)
    }

    /// Todas las entradas salvo `class`. Para NetworkTopologyStrategy son los datacenters.
    pub fn datacenters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .filter(|(key, _)| key.as_str() != CLASS)
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    // Solo los handlers del tuner modifican, y siempre sobre su propia copia
    pub(crate) fn set(&mut self, key: &str, value: String) {
        self.options.insert(key.to_string(), value);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplicationConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ReplicationConfig::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

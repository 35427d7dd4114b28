use crate::keyspace_functions::replication_config::ReplicationConfig;
use serde::{Deserialize, Serialize};
// Estructura que representa un keyspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyspace {
    pub name: String,                    // Nombre del keyspace
    pub replication: ReplicationConfig, // Configuración de replicación
}

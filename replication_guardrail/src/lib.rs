pub mod config;
pub mod error;
pub mod keyspace_functions;
pub mod logger;
pub mod tuner;
pub mod tuner_functions;

pub use crate::config::GuardrailConfig;
pub use crate::error::ErrorType;
pub use crate::keyspace_functions::{
    keyspace::Keyspace, replica_count::ReplicaCount, replication_class::ReplicationClass,
    replication_config::ReplicationConfig, system_keyspaces::ExemptKeyspaces,
};
pub use crate::tuner::{apply, TuneUpReplicationFactor};
pub use crate::tuner_functions::{tune_up::TuneUp, uptuning_switch::UptuningSwitch, warnings::Warnings};

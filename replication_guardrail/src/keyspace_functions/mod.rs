pub mod keyspace;
pub mod replica_count;
pub mod replication_class;
pub mod replication_config;
pub mod system_keyspaces;

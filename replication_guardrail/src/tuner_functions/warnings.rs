use std::collections::btree_set;
use std::collections::BTreeSet;

/// Advertencias para el cliente producidas por una invocación del tuner.
/// Sin duplicados; se recorren en orden lexicográfico.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings {
    messages: BTreeSet<String>,
}

impl Warnings {
    pub fn new() -> Self {
        Warnings::default()
    }

    /// Devuelve `false` si el mensaje ya estaba.
    pub fn add(&mut self, message: String) -> bool {
        self.messages.insert(message)
    }

    pub fn extend(&mut self, other: Warnings) {
        self.messages.extend(other.messages);
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.contains(message)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.messages.into_iter().collect()
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

pub fn simple_strategy_warning(keyspace_name: &str) -> String {
    format!(
        "Trying to use an insufficient replication factor for keyspace {}, will be automatically tuned up to 2",
        keyspace_name
    )
}

pub fn network_topology_warning(keyspace_name: &str, datacenter: &str, full_replicas: u32) -> String {
    format!(
        "Trying to use an insufficient replication factor for keyspace {}, DC '{}' will be automatically tuned up to {}",
        keyspace_name, datacenter, full_replicas
    )
}

use std::collections::HashSet;

// Keyspaces del sistema que viven solo en el nodo local
const LOCAL_SYSTEM_KEYSPACES: [&str; 4] = [
    "system",
    "system_schema",
    "system_views",
    "system_virtual_schema",
];

// Keyspaces del sistema replicados, con su propia política de replicación
const REPLICATED_SYSTEM_KEYSPACES: [&str; 3] =
    ["system_auth", "system_distributed", "system_traces"];

pub fn is_local_system_keyspace(name: &str) -> bool {
    LOCAL_SYSTEM_KEYSPACES.contains(&name)
}

pub fn is_replicated_system_keyspace(name: &str) -> bool {
    REPLICATED_SYSTEM_KEYSPACES.contains(&name)
}

pub fn is_system_keyspace(name: &str) -> bool {
    is_local_system_keyspace(name) || is_replicated_system_keyspace(name)
}

/// Keyspaces que el tuner nunca toca: los del sistema más los que agregue el operador.
#[derive(Debug, Clone, Default)]
pub struct ExemptKeyspaces {
    extra: HashSet<String>,
}

impl ExemptKeyspaces {
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExemptKeyspaces {
            extra: extra.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_exempt(&self, name: &str) -> bool {
        is_system_keyspace(name) || self.extra.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyspaces_del_sistema() {
        for name in ["system", "system_schema", "system_auth", "system_traces"] {
            assert!(is_system_keyspace(name), "{} debería ser del sistema", name);
        }
        assert!(is_local_system_keyspace("system_views"));
        assert!(is_replicated_system_keyspace("system_distributed"));
        assert!(!is_system_keyspace("somekeyspace"));
        assert!(!is_system_keyspace("SYSTEM"));
    }

    #[test]
    fn test_exentos_configurados_por_el_operador() {
        let exempt = ExemptKeyspaces::new(["audit_log"]);
        assert!(exempt.is_exempt("audit_log"));
        assert!(exempt.is_exempt("system"));
        assert!(!exempt.is_exempt("vuelos"));
    }
}

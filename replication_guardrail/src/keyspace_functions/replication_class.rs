const LOCATOR_PACKAGE: &str = "org.apache.cassandra.locator.";

// Estrategias de replicación que puede declarar un keyspace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReplicationClass {
    SimpleStrategy,
    NetworkTopologyStrategy,
    LocalStrategy,
    Other(String),
}

impl ReplicationClass {
    /// Interpreta el valor de la clave `class`, aceptando tanto el nombre corto
    /// (`SimpleStrategy`) como el nombre completo del locator.
    pub fn from_class_name(name: &str) -> Self {
        let short_name = name.strip_prefix(LOCATOR_PACKAGE).unwrap_or(name);
        match short_name {
            "SimpleStrategy" => ReplicationClass::SimpleStrategy,
            "NetworkTopologyStrategy" => ReplicationClass::NetworkTopologyStrategy,
            "LocalStrategy" => ReplicationClass::LocalStrategy,
            _ => ReplicationClass::Other(name.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acepta_nombre_corto_y_completo() {
        assert_eq!(
            ReplicationClass::from_class_name("SimpleStrategy"),
            ReplicationClass::SimpleStrategy
        );
        assert_eq!(
            ReplicationClass::from_class_name("org.apache.cassandra.locator.NetworkTopologyStrategy"),
            ReplicationClass::NetworkTopologyStrategy
        );
        assert_eq!(
            ReplicationClass::from_class_name("org.apache.cassandra.locator.LocalStrategy"),
            ReplicationClass::LocalStrategy
        );
    }

    #[test]
    fn test_clase_desconocida_conserva_el_valor() {
        let class = ReplicationClass::from_class_name("com.example.EverywhereStrategy");
        assert_eq!(
            class,
            ReplicationClass::Other("com.example.EverywhereStrategy".to_string())
        );
    }

    #[test]
    fn test_comparacion_sensible_a_mayusculas() {
        assert_eq!(
            ReplicationClass::from_class_name("simplestrategy"),
            ReplicationClass::Other("simplestrategy".to_string())
        );
    }
}

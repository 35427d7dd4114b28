use crate::error::ErrorType;
use std::fmt;
use std::str::FromStr;

/// Cantidad mínima de réplicas completas para sobrevivir la caída de un nodo.
pub const MINIMUM_REPLICATION_FACTOR: u32 = 2;

// Formato en el que vino escrito el valor, para volver a escribirlo igual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountFormat {
    FullOnly,      // "3"
    WithTransient, // "3/1"
}

/// Cantidad de réplicas de un datacenter. Solo las réplicas completas cuentan
/// para el mínimo: las transitorias no pueden servir lecturas completas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplicaCount {
    pub full_replicas: u32,
    pub transient_replicas: u32,
    pub format: CountFormat,
}

impl ReplicaCount {
    pub fn full_only(full_replicas: u32) -> Self {
        ReplicaCount {
            full_replicas,
            transient_replicas: 0,
            format: CountFormat::FullOnly,
        }
    }

    /// Copia con otra cantidad de réplicas completas; conserva transitorias y formato.
    pub fn with_full_replicas(&self, full_replicas: u32) -> Self {
        ReplicaCount {
            full_replicas,
            ..*self
        }
    }
}

fn parse_count(value: &str, original: &str) -> Result<u32, ErrorType> {
    value.parse::<u32>().map_err(|_| {
        ErrorType::InvalidReplicationFactor(format!("'{}' no es un número válido", original))
    })
}

impl FromStr for ReplicaCount {
    type Err = ErrorType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [full] => Ok(ReplicaCount::full_only(parse_count(full, s)?)),
            [full, transient] => {
                let full_replicas = parse_count(full, s)?;
                let transient_replicas = parse_count(transient, s)?;
                if transient_replicas > 0 && transient_replicas >= full_replicas {
                    return Err(ErrorType::InvalidReplicationFactor(format!(
                        "'{}': las réplicas transitorias deben ser menos que las completas",
                        s
                    )));
                }
                Ok(ReplicaCount {
                    full_replicas,
                    transient_replicas,
                    format: CountFormat::WithTransient,
                })
            }
            _ => Err(ErrorType::InvalidReplicationFactor(format!(
                "'{}' tiene más de un separador '/'",
                s
            ))),
        }
    }
}

impl fmt::Display for ReplicaCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            CountFormat::FullOnly => write!(f, "{}", self.full_replicas),
            CountFormat::WithTransient => {
                write!(f, "{}/{}", self.full_replicas, self.transient_replicas)
            }
        }
    }
}

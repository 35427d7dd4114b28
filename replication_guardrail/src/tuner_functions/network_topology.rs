use crate::keyspace_functions::replica_count::{ReplicaCount, MINIMUM_REPLICATION_FACTOR};
use crate::keyspace_functions::replication_config::ReplicationConfig;
use crate::tuner_functions::tune_up::TuneUp;
use crate::tuner_functions::warnings::network_topology_warning;
use log::{debug, warn};
use std::collections::BTreeMap;

// Datacenters que se pudieron parsear, ordenados por nombre
fn parse_datacenters(config: &ReplicationConfig) -> BTreeMap<&str, ReplicaCount> {
    let mut datacenters = BTreeMap::new();
    for (datacenter, value) in config.datacenters() {
        match value.parse::<ReplicaCount>() {
            Ok(count) => {
                datacenters.insert(datacenter, count);
            }
            Err(e) => {
                warn!("Found unparseable replication factor {}", value);
                debug!("Datacenter '{}' ignorado: {}", datacenter, e);
            }
        }
    }
    datacenters
}

/// Exige un mínimo de réplicas completas sumando todos los datacenters.
///
/// Si la suma no llega a 2 se ajusta un único datacenter: el primero en orden
/// lexicográfico entre los que se pudieron parsear. Las réplicas transitorias y
/// el formato original del valor se conservan. Los valores que no parsean
/// suman 0 y quedan como están.
pub fn tune_up_network_topology_strategy(config: &ReplicationConfig, keyspace_name: &str) -> TuneUp {
    let datacenters = parse_datacenters(config);
    let total_full_replicas: u64 = datacenters
        .values()
        .map(|count| u64::from(count.full_replicas))
        .sum();

    let mut tune_up = TuneUp::unchanged(config);
    if total_full_replicas >= u64::from(MINIMUM_REPLICATION_FACTOR) {
        return tune_up;
    }

    // elegimos un dc de forma determinística, independiente del orden del mapa
    let (datacenter, count) = match datacenters.iter().next() {
        Some((datacenter, count)) => (*datacenter, *count),
        None => {
            debug!(
                "Keyspace {}: ningún datacenter parseable, no se puede ajustar",
                keyspace_name
            );
            return tune_up;
        }
    };

    // total < 2, así que delta es 1 o 2 y full_replicas <= total
    let tune_up_delta = MINIMUM_REPLICATION_FACTOR - total_full_replicas as u32;
    let tuned = count.with_full_replicas(count.full_replicas + tune_up_delta);
    tune_up.config.set(datacenter, tuned.to_string());
    tune_up.warnings.add(network_topology_warning(
        keyspace_name,
        datacenter,
        tuned.full_replicas,
    ));
    tune_up
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyspace_functions::replication_config::CLASS;

    const NTS: &str = "org.apache.cassandra.locator.NetworkTopologyStrategy";

    fn nts(datacenters: &[(&str, &str)]) -> ReplicationConfig {
        datacenters
            .iter()
            .copied()
            .chain(std::iter::once((CLASS, NTS)))
            .collect()
    }

    #[test]
    fn test_un_datacenter_con_transitorias_sube_a_dos() {
        for full in 0..2 {
            let value = format!("{}/0", full);
            let config = nts(&[("datacenter", value.as_str())]);
            let tune_up = tune_up_network_topology_strategy(&config, "any");
            assert_eq!(tune_up.config.get("datacenter"), Some("2/0"));
            assert_eq!(tune_up.warnings.len(), 1);
        }
    }

    #[test]
    fn test_un_datacenter_sin_transitorias_conserva_formato() {
        for full in 0..2 {
            let value = full.to_string();
            let config = nts(&[("datacenter", value.as_str())]);
            let tune_up = tune_up_network_topology_strategy(&config, "any");
            assert_eq!(tune_up.config.get("datacenter"), Some("2"));
        }
    }

    #[test]
    fn test_dos_o_mas_no_se_toca() {
        for full in 2..20 {
            let value = format!("{}/1", full);
            let config = nts(&[("datacenter", value.as_str())]);
            let tune_up = tune_up_network_topology_strategy(&config, "any");
            assert_eq!(tune_up.config, config);
            assert!(tune_up.warnings.is_empty());
        }
    }

    #[test]
    fn test_la_suma_entre_datacenters_alcanza() {
        let config = nts(&[("datacenter1", "1/0"), ("datacenter2", "1/0")]);
        let tune_up = tune_up_network_topology_strategy(&config, "any");
        assert_eq!(tune_up.config.get("datacenter1"), Some("1/0"));
        assert_eq!(tune_up.config.get("datacenter2"), Some("1/0"));
        assert!(!tune_up.is_tuned());
    }

    #[test]
    fn test_se_ajusta_el_primero_lexicografico() {
        let config = nts(&[("second", "0/0"), ("first", "1/0")]);
        let tune_up = tune_up_network_topology_strategy(&config, "any");
        assert_eq!(tune_up.config.get("first"), Some("2/0"));
        assert_eq!(tune_up.config.get("second"), Some("0/0"));
        assert!(tune_up
            .warnings
            .contains(&network_topology_warning("any", "first", 2)));
    }

    #[test]
    fn test_delta_se_suma_al_elegido() {
        // total 0: el elegido recibe las dos réplicas que faltan
        let config = nts(&[("b", "0"), ("a", "0/0")]);
        let tune_up = tune_up_network_topology_strategy(&config, "any");
        assert_eq!(tune_up.config.get("a"), Some("2/0"));
        assert_eq!(tune_up.config.get("b"), Some("0"));
    }

    #[test]
    fn test_valor_no_parseable_queda_igual() {
        let config = nts(&[("first", "FOOBAR")]);
        let tune_up = tune_up_network_topology_strategy(&config, "any");
        assert_eq!(tune_up.config.get("first"), Some("FOOBAR"));
        assert!(tune_up.warnings.is_empty());
    }

    #[test]
    fn test_valor_con_espacios_no_parsea() {
        let config = nts(&[("dc", " 0 / 0 ")]);
        let tune_up = tune_up_network_topology_strategy(&config, "any");
        assert_eq!(tune_up.config.get("dc"), Some(" 0 / 0 "));
        assert!(tune_up.warnings.is_empty());
    }

    #[test]
    fn test_no_parseable_no_es_candidato() {
        let config = nts(&[("aaa", "FOOBAR"), ("zzz", "1")]);
        let tune_up = tune_up_network_topology_strategy(&config, "any");
        assert_eq!(tune_up.config.get("aaa"), Some("FOOBAR"));
        assert_eq!(tune_up.config.get("zzz"), Some("2"));
    }

    #[test]
    fn test_sin_datacenters_no_se_toca() {
        let config = nts(&[]);
        let tune_up = tune_up_network_topology_strategy(&config, "any");
        assert_eq!(tune_up.config, config);
        assert!(tune_up.warnings.is_empty());
    }

    #[test]
    fn test_parametros_desconocidos_se_ignoran() {
        let config: ReplicationConfig = [("foo", "bar"), ("klass", "something")]
            .into_iter()
            .collect();
        let tune_up = tune_up_network_topology_strategy(&config, "any");
        assert_eq!(tune_up.config.get("foo"), Some("bar"));
        assert_eq!(tune_up.config.get("klass"), Some("something"));
    }
}

use crate::error::ErrorType;
use crate::keyspace_functions::system_keyspaces::ExemptKeyspaces;
use crate::tuner::TuneUpReplicationFactor;
use crate::tuner_functions::uptuning_switch::UptuningSwitch;
use serde::Deserialize;
use std::fs;
use std::path::Path;

// Configuración del guardrail, leída de un archivo JSON
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GuardrailConfig {
    pub uptuning_enabled: bool,
    pub extra_exempt_keyspaces: Vec<String>,
    pub log_level: String,
    pub log_directory: String,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        GuardrailConfig {
            uptuning_enabled: true,
            extra_exempt_keyspaces: Vec::new(),
            log_level: "info".to_string(),
            log_directory: "logs".to_string(),
        }
    }
}

impl GuardrailConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ErrorType> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ErrorType> {
        let content = fs::read_to_string(path)?;
        GuardrailConfig::from_json_str(&content)
    }

    pub fn build_tuner(&self) -> TuneUpReplicationFactor {
        TuneUpReplicationFactor::new(
            UptuningSwitch::new(self.uptuning_enabled),
            ExemptKeyspaces::new(self.extra_exempt_keyspaces.iter().cloned()),
        )
    }
}

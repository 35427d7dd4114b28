use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Interruptor compartido que habilita o deshabilita el tuner.
/// Los clones apuntan al mismo valor, así que se puede cambiar desde otro hilo.
#[derive(Debug, Clone)]
pub struct UptuningSwitch {
    enabled: Arc<AtomicBool>,
}

impl UptuningSwitch {
    pub fn new(enabled: bool) -> Self {
        UptuningSwitch {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}

impl Default for UptuningSwitch {
    fn default() -> Self {
        UptuningSwitch::new(true)
    }
}

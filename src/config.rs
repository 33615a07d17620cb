use crate::settings::WorklistSettings;
use figment::Figment;
use figment::providers::{Env, Serialized};
use std::sync::OnceLock;

static CONFIG: OnceLock<Figment> = OnceLock::new();

pub fn get_config() -> &'static Figment {
    CONFIG.get_or_init(build_config)
}

/// Layers, lowest priority first: built-in defaults, `ORTHANC_*` and then `WORKLIST_*`.
fn build_config() -> Figment {
    Figment::from(Serialized::defaults(WorklistSettings::default()))
        .merge(Env::prefixed("ORTHANC_").map(|key| format!("orthanc.{key}").into()))
        .merge(Env::prefixed("WORKLIST_").split("_"))
        .merge(Env::prefixed("WORKLIST_"))
}

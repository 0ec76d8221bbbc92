use serde::{Deserialize, Serialize};

/// Missing keys fall back to [`Configuration::init`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub timeout: u64,
    pub concurrency: usize,
    pub trackers: Vec<String>,
}

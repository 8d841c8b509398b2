mod config_store;

pub use config_store::ConfigStore;

/// A file produced from embedded assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub path: String,
    pub content: String,
}

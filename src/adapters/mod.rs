pub mod filesystem_config_store;
pub mod scaffold_assets;

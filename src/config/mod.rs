mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, GtxConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};

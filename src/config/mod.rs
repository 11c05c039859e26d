mod manager;

pub use manager::{
    AppConfig, ConfigFile, ConfigManager, DEFAULT_BASE_URL, DEFAULT_LISTEN, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TUNNEL_HEADER, EndpointConfig, EndpointSection, ResolveOptions,
    ServerSection, resolve_config,
};

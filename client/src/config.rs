//! Build-time client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Endpoint used when `CHATBOT_ENDPOINT` was not set at build time.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8003";

/// Settings baked into the WASM bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl ClientConfig {
    /// Read `CHATBOT_ENDPOINT` as captured by the compiler.
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("CHATBOT_ENDPOINT"))
    }

    fn from_value(raw: Option<&str>) -> Self {
        let endpoint = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        Self { endpoint: endpoint.to_owned() }
    }
}

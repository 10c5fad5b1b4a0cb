//! Server settings read from the environment at start-up.

use crate::llm::config::parse_u64;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Output token ceiling for one generated document. `None` leaves the
    /// limit to the provider.
    pub max_tokens: Option<u32>,
}

impl ServerConfig {
    /// Read `PORT` and `GENERATION_MAX_TOKENS`. An unparseable port falls
    /// back to the default; an unset, zero or unparseable token limit means
    /// no explicit limit.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let port = u16::try_from(parse_u64(var("PORT"), u64::from(DEFAULT_PORT))).unwrap_or(DEFAULT_PORT);
        let max_tokens = var("GENERATION_MAX_TOKENS")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|n| *n > 0);
        Self { port, max_tokens }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, max_tokens: None }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

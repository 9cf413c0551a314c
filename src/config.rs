//! Deployment configuration resolved at build time.
//!
//! The router mounts under `BASE_URL` when the build environment provides it
//! (e.g. a GitHub Pages sub-path), otherwise at the site root.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BASE_URL {value:?}: {reason}")]
    InvalidBasePath { value: String, reason: &'static str },
}

/// Normalized router base: always starts with `/`, never ends with one unless
/// it is the root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl Default for BasePath {
    fn default() -> Self {
        Self("/".to_owned())
    }
}

impl BasePath {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidBasePath { value: raw.to_owned(), reason };
        let trimmed = raw.trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }
        if trimmed.contains(['?', '#']) {
            return Err(invalid("contains a query or fragment"));
        }
        if trimmed.contains("://") {
            return Err(invalid("must be a path, not a URL"));
        }

        let inner = trimmed.trim_matches('/');
        if inner.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self(format!("/{inner}")))
    }

    /// Resolve from an optional environment value; unset means root.
    pub fn from_env_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        raw.map_or_else(|| Ok(Self::default()), Self::parse)
    }

    /// Base baked in at compile time, falling back to root on bad input.
    pub fn from_build_env() -> Self {
        Self::from_env_value(option_env!("BASE_URL")).unwrap_or_else(|e| {
            log::warn!("{e}; mounting at /");
            Self::default()
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

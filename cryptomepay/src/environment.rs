//! Gateway deployment environments.

use std::fmt;
use std::str::FromStr;

pub const PRODUCTION_URL: &str = "https://api.cryptomepay.com/api/v1";
pub const SANDBOX_URL: &str = "https://sandbox.cryptomepay.com/api/v1";
pub const STAGING_URL: &str = "https://staging.cryptomepay.com/api/v1";

/// Gateway environment a client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
    Staging,
}

impl Environment {
    /// Returns the API base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
            Environment::Staging => STAGING_URL,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct EnvironmentParseError(pub String);

impl fmt::Display for EnvironmentParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown environment '{}', expected production, sandbox or staging",
            self.0
        )
    }
}

impl std::error::Error for EnvironmentParseError {}

impl FromStr for Environment {
    type Err = EnvironmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            "staging" => Ok(Environment::Staging),
            _ => Err(EnvironmentParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Staging => write!(f, "staging"),
        }
    }
}

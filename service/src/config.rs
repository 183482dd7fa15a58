use clap::builder::TypedValueParser as _;
use clap::Parser;
use cryptomepay::{Client, Environment, Error};
use log::LevelFilter;
use std::fmt;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection and logging settings, read from flags or the environment.
#[derive(Clone, Parser)]
pub struct Config {
    /// The merchant API key, sent as a bearer token and included in signed requests.
    #[arg(long, env = "CRYPTOME_API_KEY")]
    api_key: Option<String>,

    /// The merchant API secret used to sign requests and verify webhooks.
    #[arg(long, env = "CRYPTOME_API_SECRET", hide_env_values = true)]
    api_secret: Option<String>,

    /// Override the gateway base URL. Takes precedence over the environment.
    #[arg(long, env = "CRYPTOME_BASE_URL")]
    base_url: Option<String>,

    /// The gateway environment to talk to.
    #[arg(
        short,
        long,
        env = "CRYPTOME_ENVIRONMENT",
        default_value_t = Environment::Production,
        value_parser = clap::builder::PossibleValuesParser::new([
            "PRODUCTION", "SANDBOX", "STAGING",
            "production", "sandbox", "staging"
        ])
            .map(|s| s.parse::<Environment>().unwrap()),
    )]
    pub environment: Environment,

    /// Request timeout in seconds
    #[arg(long, env = "CRYPTOME_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("environment", &self.environment)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level_filter", &self.log_level_filter)
            .finish()
    }
}

impl Config {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The base URL requests go to: the override if set, otherwise the environment's.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build an API client from this configuration.
    ///
    /// Fails with a configuration error when the key or secret is missing or
    /// the base URL is not usable.
    pub fn client(&self) -> Result<Client, Error> {
        Client::builder(
            self.api_key.clone().unwrap_or_default(),
            self.api_secret.clone().unwrap_or_default(),
        )
        .with_base_url(self.base_url())
        .with_timeout(self.timeout())
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptomepay::environment::{PRODUCTION_URL, SANDBOX_URL};
    use cryptomepay::error::{ConfigErrorKind, ErrorKind};
    use serial_test::serial;
    use std::env;

    const VARS: &[&str] = &[
        "CRYPTOME_API_KEY",
        "CRYPTOME_API_SECRET",
        "CRYPTOME_BASE_URL",
        "CRYPTOME_ENVIRONMENT",
        "CRYPTOME_TIMEOUT_SECS",
        "LOG_LEVEL_FILTER",
    ];

    /// Helper struct to manage environment variables in tests
    struct EnvGuard {
        saved_vars: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new(vars: &[&str]) -> Self {
            let saved_vars = vars
                .iter()
                .map(|var| (var.to_string(), env::var(var).ok()))
                .collect();
            for var in vars {
                env::remove_var(var);
            }
            EnvGuard { saved_vars }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved_vars {
                match value {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let _guard = EnvGuard::new(VARS);

        let config = Config::try_parse_from(["cryptomepay"]).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.base_url(), PRODUCTION_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.log_level_filter, LevelFilter::Info);
        assert_eq!(config.api_key(), None);
    }

    #[test]
    #[serial]
    fn test_reads_environment_variables() {
        let _guard = EnvGuard::new(VARS);
        env::set_var("CRYPTOME_API_KEY", "sk_test_key");
        env::set_var("CRYPTOME_API_SECRET", "test_secret");
        env::set_var("CRYPTOME_ENVIRONMENT", "sandbox");
        env::set_var("CRYPTOME_TIMEOUT_SECS", "5");
        env::set_var("LOG_LEVEL_FILTER", "DEBUG");

        let config = Config::try_parse_from(["cryptomepay"]).unwrap();

        assert_eq!(config.api_key(), Some("sk_test_key"));
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.base_url(), SANDBOX_URL);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.log_level_filter, LevelFilter::Debug);

        let client = config.client().unwrap();
        assert_eq!(client.base_url(), SANDBOX_URL);
    }

    #[test]
    #[serial]
    fn test_arguments_override_environment() {
        let _guard = EnvGuard::new(VARS);
        env::set_var("CRYPTOME_ENVIRONMENT", "sandbox");

        let config = Config::try_parse_from([
            "cryptomepay",
            "--environment",
            "STAGING",
            "--base-url",
            "http://localhost:8080/api/v1/",
        ])
        .unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.base_url(), "http://localhost:8080/api/v1/");
    }

    #[test]
    #[serial]
    fn test_rejects_unknown_environment() {
        let _guard = EnvGuard::new(VARS);

        let result = Config::try_parse_from(["cryptomepay", "--environment", "mainnet"]);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_client_requires_credentials() {
        let _guard = EnvGuard::new(VARS);

        let config = Config::try_parse_from(["cryptomepay"]).unwrap();
        let err = config.client().unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::MissingApiKey)
        );

        let config = Config::try_parse_from(["cryptomepay", "--api-key", "sk_test_key"]).unwrap();
        let err = config.client().unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::MissingApiSecret)
        );
    }

    #[test]
    #[serial]
    fn test_debug_redacts_secret() {
        let _guard = EnvGuard::new(VARS);

        let config = Config::try_parse_from([
            "cryptomepay",
            "--api-key",
            "sk_test_key",
            "--api-secret",
            "super_secret_value",
        ])
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(debug.contains("sk_test_key"));
        assert!(!debug.contains("super_secret_value"));
    }
}

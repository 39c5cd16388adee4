pub mod device;
pub mod domain;
pub mod envelope;
pub mod insight;
pub mod routes;

pub const SERVICE_NAME: &str = "ai-service";
pub const SERVICE_VERSION: &str = "1.0.0";

pub mod config {
    use anyhow::Context;
    use std::fmt;

    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 3005;
    pub const DEFAULT_LOG_FILE: &str = "ai-service.log";

    /// Controls whether raw fault text reaches API callers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum DeploymentMode {
        Development,
        #[default]
        Production,
    }

    impl DeploymentMode {
        /// Only the literal `development` (any case) opts into verbose errors.
        pub fn from_env_value(value: Option<&str>) -> Self {
            match value {
                Some(v) if v.trim().eq_ignore_ascii_case("development") => Self::Development,
                _ => Self::Production,
            }
        }

        pub fn is_verbose(self) -> bool {
            matches!(self, Self::Development)
        }
    }

    impl fmt::Display for DeploymentMode {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Development => f.write_str("development"),
                Self::Production => f.write_str("production"),
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub host: String,
        pub port: u16,
        pub deployment_mode: DeploymentMode,
        pub log_file: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
        where
            F: Fn(&str) -> Option<String>,
        {
            let port = match lookup("PORT") {
                Some(raw) => raw
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number (got {raw:?})"))?,
                None => DEFAULT_PORT,
            };

            let log_file = match lookup("LOG_FILE") {
                Some(path) if path.trim().is_empty() => None,
                Some(path) => Some(path),
                None => Some(DEFAULT_LOG_FILE.to_string()),
            };

            Ok(Self {
                host: lookup("HOST")
                    .filter(|h| !h.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
                deployment_mode: DeploymentMode::from_env_value(lookup("ENVIRONMENT").as_deref()),
                log_file,
                sentry_dsn: lookup("SENTRY_DSN").filter(|s| !s.trim().is_empty()),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn settings_from(pairs: &[(&str, &str)]) -> anyhow::Result<Settings> {
            let env: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Settings::from_lookup(|key| env.get(key).cloned())
        }

        #[test]
        fn defaults_when_env_is_empty() {
            let s = settings_from(&[]).unwrap();
            assert_eq!(s.host, "0.0.0.0");
            assert_eq!(s.port, 3005);
            assert_eq!(s.deployment_mode, DeploymentMode::Production);
            assert_eq!(s.log_file.as_deref(), Some("ai-service.log"));
            assert!(s.sentry_dsn.is_none());
        }

        #[test]
        fn development_flag_is_case_insensitive() {
            let s = settings_from(&[("ENVIRONMENT", "Development")]).unwrap();
            assert_eq!(s.deployment_mode, DeploymentMode::Development);
            assert!(s.deployment_mode.is_verbose());
        }

        #[test]
        fn any_other_environment_is_production() {
            for value in ["production", "staging", "dev", ""] {
                assert_eq!(
                    DeploymentMode::from_env_value(Some(value)),
                    DeploymentMode::Production,
                    "value={value:?}"
                );
            }
        }

        #[test]
        fn empty_log_file_disables_file_sink() {
            let s = settings_from(&[("LOG_FILE", "")]).unwrap();
            assert!(s.log_file.is_none());
        }

        #[test]
        fn rejects_invalid_port() {
            let err = settings_from(&[("PORT", "http")]).unwrap_err();
            assert!(format!("{err:#}").contains("PORT"));
        }
    }
}

use crate::types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    PostgreSQL { url: String },
    SQLite { path: String },
}

/// Shared passwords for the landing page. Either may be absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessConfig {
    pub guest_password: Option<String>,
    pub couple_password: Option<String>,
}

impl std::fmt::Debug for AccessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessConfig")
            .field("guest_password", &self.guest_password.as_ref().map(|_| "***"))
            .field("couple_password", &self.couple_password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl AccessConfig {
    pub fn gate_enabled(&self) -> bool {
        self.guest_password.is_some() || self.couple_password.is_some()
    }

    /// Map a typed password to the view it unlocks. Surrounding whitespace is ignored.
    pub fn role_for(&self, password: &str) -> Option<Role> {
        let password = password.trim();
        if password.is_empty() {
            return None;
        }
        if self.couple_password.as_deref() == Some(password) {
            return Some(Role::Couple);
        }
        if self.guest_password.as_deref() == Some(password) {
            return Some(Role::Guest);
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: AppMode,
    pub database: DatabaseConfig,
    pub access: AccessConfig,
}

pub const DEFAULT_SQLITE_PATH: &str = ".dev/local.db";

impl AppConfig {
    /// Read configuration from the process environment (and `.env` on the server).
    pub fn from_env() -> Result<Self, String> {
        #[cfg(feature = "server")]
        {
            let _ = dotenvy::dotenv();
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let mode = AppMode::parse(&get("APP_MODE").unwrap_or_default());
        let database = match mode {
            AppMode::Local => DatabaseConfig::SQLite {
                path: non_empty("SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string()),
            },
            AppMode::Production => DatabaseConfig::PostgreSQL {
                url: non_empty("DATABASE_URL")
                    .ok_or_else(|| "DATABASE_URL must be set in production mode".to_string())?,
            },
        };
        let access = AccessConfig {
            guest_password: non_empty("GUEST_PASSWORD"),
            couple_password: non_empty("COUPLE_PASSWORD"),
        };

        Ok(Self {
            mode,
            database,
            access,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_app_mode_defaults_to_production() {
        assert_eq!(AppMode::parse(""), AppMode::Production);
    }

    #[test]
    fn test_app_mode_case_insensitive() {
        assert_eq!(AppMode::parse("local"), AppMode::Local);
        assert_eq!(AppMode::parse("LOCAL"), AppMode::Local);
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        assert_eq!(AppMode::parse("invalid"), AppMode::Production);
    }

    #[test]
    fn local_mode_uses_sqlite_default_path() {
        let cfg = AppConfig::from_vars(vars(&[("APP_MODE", "local")])).unwrap();
        assert_eq!(
            cfg.database,
            DatabaseConfig::SQLite {
                path: DEFAULT_SQLITE_PATH.to_string()
            }
        );
        assert!(!cfg.access.gate_enabled());
    }

    #[test]
    fn production_requires_database_url() {
        assert!(AppConfig::from_vars(vars(&[])).is_err());
        let cfg = AppConfig::from_vars(vars(&[("DATABASE_URL", "postgres://u:p@db/rsvp")])).unwrap();
        assert_eq!(cfg.mode, AppMode::Production);
    }

    #[test]
    fn blank_passwords_do_not_enable_the_gate() {
        let cfg = AppConfig::from_vars(vars(&[
            ("APP_MODE", "local"),
            ("GUEST_PASSWORD", "  "),
        ]))
        .unwrap();
        assert!(!cfg.access.gate_enabled());
    }

    #[test]
    fn passwords_resolve_to_roles() {
        let access = AccessConfig {
            guest_password: Some("guestsecret".to_string()),
            couple_password: Some("couplesecret".to_string()),
        };
        assert!(access.gate_enabled());
        assert_eq!(access.role_for("guestsecret"), Some(Role::Guest));
        assert_eq!(access.role_for(" couplesecret "), Some(Role::Couple));
        assert_eq!(access.role_for("nope"), None);
        assert_eq!(access.role_for(""), None);
    }

    #[test]
    fn debug_output_hides_passwords() {
        let access = AccessConfig {
            guest_password: Some("guestsecret".to_string()),
            couple_password: None,
        };
        assert!(!format!("{access:?}").contains("guestsecret"));
    }
}

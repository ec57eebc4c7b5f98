//! Environment-driven configuration for FPL endpoints and credentials.

use std::env;
use std::time::Duration;

/// Base path for the public FPL API.
pub const FPL_API_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Login form endpoint used to obtain an authenticated session.
pub const FPL_LOGIN_URL: &str = "https://users.premierleague.com/accounts/login/";

/// Browser-like User-Agent; the FPL API rejects obvious non-browser clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Application id the official web client sends with the login form.
pub const LOGIN_APP: &str = "plfpl-web";

/// Redirect target the login service expects.
pub const LOGIN_REDIRECT_URI: &str = "https://fantasy.premierleague.com/a/login";

pub const FPL_EMAIL_ENV_VAR: &str = "FPL_EMAIL";
pub const FPL_PASSWORD_ENV_VAR: &str = "FPL_PASSWORD";
pub const FPL_TEAM_ID_ENV_VAR: &str = "FPL_TEAM_ID";

/// Cached FPL payloads stay fresh for an hour.
pub const DATA_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Authenticated sessions are reused for two hours before re-login.
pub const AUTH_SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Upper bound on any single FPL request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Email/password pair for the FPL login form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Runtime configuration read once at startup.
///
/// All variables are optional: without credentials the public tools keep
/// working and only the authenticated ones report a configuration error.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub email: Option<String>,
    pub password: Option<String>,
    pub team_id: Option<u64>,
}

impl Config {
    /// Read `FPL_EMAIL`, `FPL_PASSWORD` and `FPL_TEAM_ID` from the
    /// environment. Empty values count as unset.
    pub fn from_env() -> Self {
        Config {
            email: non_empty(env::var(FPL_EMAIL_ENV_VAR).ok()),
            password: non_empty(env::var(FPL_PASSWORD_ENV_VAR).ok()),
            team_id: env::var(FPL_TEAM_ID_ENV_VAR)
                .ok()
                .and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Login credentials when both halves are configured.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some(Credentials {
                email: email.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    /// Names of the credential variables that are not configured.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.email.is_none() {
            missing.push(FPL_EMAIL_ENV_VAR);
        }
        if self.password.is_none() {
            missing.push(FPL_PASSWORD_ENV_VAR);
        }
        if self.team_id.is_none() {
            missing.push(FPL_TEAM_ID_ENV_VAR);
        }
        missing
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_halves() {
        let config = Config {
            email: Some("manager@example.com".to_string()),
            password: None,
            team_id: None,
        };
        assert!(config.credentials().is_none());

        let config = Config {
            email: Some("manager@example.com".to_string()),
            password: Some("secret".to_string()),
            team_id: None,
        };
        let creds = config.credentials().unwrap();
        assert_eq!(creds.email, "manager@example.com");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_missing_credentials_lists_unset_vars() {
        let config = Config::default();
        assert_eq!(
            config.missing_credentials(),
            vec![FPL_EMAIL_ENV_VAR, FPL_PASSWORD_ENV_VAR, FPL_TEAM_ID_ENV_VAR]
        );

        let config = Config {
            email: Some("manager@example.com".to_string()),
            password: Some("secret".to_string()),
            team_id: Some(42),
        };
        assert!(config.missing_credentials().is_empty());
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_from_env_reads_all_three_vars() {
        env::set_var(FPL_EMAIL_ENV_VAR, "manager@example.com");
        env::set_var(FPL_PASSWORD_ENV_VAR, "secret");
        env::set_var(FPL_TEAM_ID_ENV_VAR, "1234567");

        let config = Config::from_env();
        assert_eq!(config.email.as_deref(), Some("manager@example.com"));
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert_eq!(config.team_id, Some(1234567));

        env::remove_var(FPL_EMAIL_ENV_VAR);
        env::remove_var(FPL_PASSWORD_ENV_VAR);
        env::remove_var(FPL_TEAM_ID_ENV_VAR);
    }
}

use std::time::Duration;

use crate::error::AuthError;

const DEFAULT_SESSION_TTL_DAYS: u64 = 7;
const MAX_SESSION_TTL_DAYS: u64 = 365;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
const DEFAULT_COOKIE_NAME: &str = "logistix_session";

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordParams {
    /// OWASP-recommended minimum for Argon2id: 19 MiB, 2 passes, 1 lane.
    fn default() -> Self {
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl PasswordParams {
    /// Cheapest parameters Argon2 accepts. Tests only.
    pub fn insecure_fast() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }
}

/// Complete auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub session_ttl: Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub password: PasswordParams,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_DAYS * SECONDS_PER_DAY),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_secure: false,
            password: PasswordParams::default(),
        }
    }
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SESSION_TTL_DAYS`: Session TTL in days, 1 to 365 (default: 7)
    /// - `SESSION_COOKIE_NAME`: Name of the session cookie (default: `logistix_session`)
    /// - `COOKIE_SECURE`: Whether to set the secure flag on cookies (default: false)
    /// - `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS`, `ARGON2_PARALLELISM`: hashing cost
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` when a variable is set but cannot be parsed
    /// or is out of range.
    pub fn from_env() -> Result<Self, AuthError> {
        let defaults = Self::default();

        let session_ttl = match parse_env::<u64>("SESSION_TTL_DAYS")? {
            Some(days) => session_ttl_from_days(days)?,
            None => defaults.session_ttl,
        };

        let cookie_name = std::env::var("SESSION_COOKIE_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.cookie_name);

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.cookie_secure);

        let password = PasswordParams {
            memory_kib: parse_env("ARGON2_MEMORY_KIB")?.unwrap_or(defaults.password.memory_kib),
            iterations: parse_env("ARGON2_ITERATIONS")?.unwrap_or(defaults.password.iterations),
            parallelism: parse_env("ARGON2_PARALLELISM")?
                .unwrap_or(defaults.password.parallelism),
        };

        Ok(Self {
            session_ttl,
            cookie_name,
            cookie_secure,
            password,
        })
    }

    /// Defaults with cheap hashing, for tests.
    pub fn for_tests() -> Self {
        Self {
            password: PasswordParams::insecure_fast(),
            ..Self::default()
        }
    }

    /// The TTL as a chrono duration, saturating at `chrono::Duration::MAX`.
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        i64::try_from(self.session_ttl.as_secs())
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}

fn session_ttl_from_days(days: u64) -> Result<Duration, AuthError> {
    if !(1..=MAX_SESSION_TTL_DAYS).contains(&days) {
        return Err(AuthError::Config(format!(
            "SESSION_TTL_DAYS must be between 1 and {MAX_SESSION_TTL_DAYS}, got {days}"
        )));
    }
    days.checked_mul(SECONDS_PER_DAY)
        .map(Duration::from_secs)
        .ok_or_else(|| AuthError::Config(format!("SESSION_TTL_DAYS overflows: {days}")))
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AuthError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AuthError::Config(format!("{name} has an invalid value: {raw:?}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl, Duration::from_secs(7 * 24 * 60 * 60));
        assert_eq!(config.cookie_name, "logistix_session");
        assert!(!config.cookie_secure);
        assert_eq!(config.password.memory_kib, 19456);
    }

    #[test]
    fn test_for_tests_uses_cheap_hashing() {
        let config = AuthConfig::for_tests();
        assert_eq!(config.password, PasswordParams::insecure_fast());
        assert_eq!(config.session_ttl_chrono(), chrono::Duration::days(7));
    }

    #[test]
    fn test_session_ttl_bounds() {
        assert_eq!(
            session_ttl_from_days(1).unwrap(),
            Duration::from_secs(SECONDS_PER_DAY)
        );
        assert_eq!(
            session_ttl_from_days(MAX_SESSION_TTL_DAYS).unwrap(),
            Duration::from_secs(365 * SECONDS_PER_DAY)
        );
        assert!(matches!(session_ttl_from_days(0), Err(AuthError::Config(_))));
        assert!(matches!(
            session_ttl_from_days(MAX_SESSION_TTL_DAYS + 1),
            Err(AuthError::Config(_))
        ));
    }

    #[test]
    fn test_from_env_rejects_out_of_range_ttl() {
        std::env::set_var("SESSION_TTL_DAYS", "100000000");
        let result = AuthConfig::from_env();
        std::env::remove_var("SESSION_TTL_DAYS");

        assert!(matches!(result, Err(AuthError::Config(_))));
    }

    #[test]
    fn test_session_ttl_chrono_saturates() {
        let config = AuthConfig {
            session_ttl: Duration::from_secs(u64::MAX),
            ..AuthConfig::for_tests()
        };
        assert_eq!(config.session_ttl_chrono(), chrono::Duration::MAX);
    }
}

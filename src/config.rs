// ⚙️ Configuration - User identity and dashboard tunables
//
// Resolution order (later wins):
//   1. Built-in defaults
//   2. JSON file (FIINORA_CONFIG or an explicit path)
//   3. Environment variables (a .env file is loaded first)

use crate::currency::DEFAULT_RATE;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const ENV_CONFIG_PATH: &str = "FIINORA_CONFIG";
pub const ENV_USER_NAME: &str = "FIINORA_USER_NAME";
pub const ENV_USER_EMAIL: &str = "FIINORA_USER_EMAIL";
pub const ENV_CONVERSION_RATE: &str = "FIINORA_CONVERSION_RATE";
pub const ENV_REPLY_DELAY_MS: &str = "FIINORA_REPLY_DELAY_MS";

// ============================================================================
// USER PROFILE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub initials: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    /// Profile for a name, with initials derived from it
    pub fn from_name(name: &str) -> Self {
        UserProfile {
            name: name.trim().to_string(),
            initials: initials_from_name(name),
            email: None,
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: "Aamir".to_string(),
            initials: "AA".to_string(),
            email: Some("aamir@example.com".to_string()),
        }
    }
}

/// Up to two upper-case initials
///
/// "Aamir" → "AA", "Jane van Doe" → "JD"
pub fn initials_from_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

// ============================================================================
// DASHBOARD CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub user: UserProfile,

    /// USD → INR multiplier for display conversions
    pub conversion_rate: f64,

    /// Simulated assistant "thinking" delay
    pub reply_delay_ms: u64,

    /// Initial trip length in the cost explorer
    pub default_trip_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            user: UserProfile::default(),
            conversion_rate: DEFAULT_RATE,
            reply_delay_ms: 1500,
            default_trip_days: 7,
        }
    }
}

impl DashboardConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: DashboardConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, then the optional config file, then the process environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) => {
                debug!(path = %path, "Loading dashboard config file");
                Self::from_file(path)?
            }
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_USER_NAME) {
            let email = self.user.email.take();
            self.user = UserProfile::from_name(&name);
            self.user.email = email;
        }

        if let Some(email) = lookup(ENV_USER_EMAIL) {
            self.user.email = Some(email);
        }

        if let Some(raw) = lookup(ENV_CONVERSION_RATE) {
            self.conversion_rate = raw.trim().parse().map_err(|_| {
                DashboardError::Config(format!("{} is not a number: {:?}", ENV_CONVERSION_RATE, raw))
            })?;
        }

        if let Some(raw) = lookup(ENV_REPLY_DELAY_MS) {
            self.reply_delay_ms = raw.trim().parse().map_err(|_| {
                DashboardError::Config(format!("{} is not a whole number: {:?}", ENV_REPLY_DELAY_MS, raw))
            })?;
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.user.name.trim().is_empty() {
            return Err(DashboardError::Config("user name must not be empty".to_string()));
        }
        if !self.conversion_rate.is_finite() || self.conversion_rate <= 0.0 {
            return Err(DashboardError::Config(format!(
                "conversion rate must be positive, got {}",
                self.conversion_rate
            )));
        }
        if self.default_trip_days == 0 {
            return Err(DashboardError::Config("default trip length must be at least one day".to_string()));
        }
        Ok(())
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.user.name, "Aamir");
        assert_eq!(config.user.initials, "AA");
        assert_eq!(config.conversion_rate, 83.0);
        assert_eq!(config.reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.default_trip_days, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials_from_name("Aamir"), "AA");
        assert_eq!(initials_from_name("  priya  "), "PR");
        assert_eq!(initials_from_name("Jane van Doe"), "JD");
        assert_eq!(initials_from_name("a"), "A");
        assert_eq!(initials_from_name(""), "");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DashboardConfig::default();
        config
            .apply_overrides(lookup_from(&[
                (ENV_USER_NAME, "Ravi Kumar"),
                (ENV_CONVERSION_RATE, "84.5"),
                (ENV_REPLY_DELAY_MS, "0"),
            ]))
            .unwrap();

        assert_eq!(config.user.name, "Ravi Kumar");
        assert_eq!(config.user.initials, "RK");
        assert_eq!(config.user.email.as_deref(), Some("aamir@example.com"));
        assert_eq!(config.conversion_rate, 84.5);
        assert_eq!(config.reply_delay_ms, 0);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let mut config = DashboardConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[(ENV_CONVERSION_RATE, "lots")]))
            .unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));

        let mut config = DashboardConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[(ENV_CONVERSION_RATE, "-3")]))
            .unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "reply_delay_ms": 250 }"#).unwrap();
        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.user.name, "Aamir");
        assert_eq!(config.conversion_rate, 83.0);
    }
}

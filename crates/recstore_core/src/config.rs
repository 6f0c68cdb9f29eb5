//! Store configuration.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Which matching records a criteria-based remove deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovePolicy {
    /// Remove only the last match in sequence order.
    #[default]
    LastMatch,
    /// Remove only the first match in sequence order.
    FirstMatch,
    /// Remove every match.
    AllMatches,
}

impl FromStr for RemovePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "last" => Ok(Self::LastMatch),
            "first" => Ok(Self::FirstMatch),
            "all" => Ok(Self::AllMatches),
            other => Err(CoreError::invalid_config(format!(
                "unknown remove policy {other:?} (expected last, first or all)"
            ))),
        }
    }
}

impl fmt::Display for RemovePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LastMatch => "last",
            Self::FirstMatch => "first",
            Self::AllMatches => "all",
        })
    }
}

/// Configuration for a record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Field that identifies a record.
    pub identifier_field: String,

    /// Whether insert and positional update reject a taken identifier.
    pub unique_identifiers: bool,

    /// Tie-break for criteria-based removal.
    pub remove_policy: RemovePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            identifier_field: "id".to_string(),
            unique_identifiers: true,
            remove_policy: RemovePolicy::LastMatch,
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier field name.
    #[must_use]
    pub fn identifier_field(mut self, field: impl Into<String>) -> Self {
        self.identifier_field = field.into();
        self
    }

    /// Sets whether identifiers must be unique.
    #[must_use]
    pub const fn unique_identifiers(mut self, value: bool) -> Self {
        self.unique_identifiers = value;
        self
    }

    /// Sets the removal tie-break.
    #[must_use]
    pub const fn remove_policy(mut self, policy: RemovePolicy) -> Self {
        self.remove_policy = policy;
        self
    }

    /// Checks that the configuration can back a store.
    pub fn validate(&self) -> CoreResult<()> {
        if self.identifier_field.trim().is_empty() {
            return Err(CoreError::invalid_config("identifier field must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.identifier_field, "id");
        assert!(config.unique_identifiers);
        assert_eq!(config.remove_policy, RemovePolicy::LastMatch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_pattern() {
        let config = StoreConfig::new()
            .identifier_field("CustomerId")
            .unique_identifiers(false)
            .remove_policy(RemovePolicy::AllMatches);

        assert_eq!(config.identifier_field, "CustomerId");
        assert!(!config.unique_identifiers);
        assert_eq!(config.remove_policy, RemovePolicy::AllMatches);
    }

    #[test]
    fn blank_identifier_rejected() {
        let config = StoreConfig::new().identifier_field("  ");
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn remove_policy_parse() {
        assert_eq!("last".parse::<RemovePolicy>().unwrap(), RemovePolicy::LastMatch);
        assert_eq!("first".parse::<RemovePolicy>().unwrap(), RemovePolicy::FirstMatch);
        assert_eq!("all".parse::<RemovePolicy>().unwrap(), RemovePolicy::AllMatches);
        assert!("every".parse::<RemovePolicy>().is_err());
        assert_eq!(RemovePolicy::FirstMatch.to_string(), "first");
    }
}

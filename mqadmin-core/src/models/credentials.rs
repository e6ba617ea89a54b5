//! Credentials model for endpoint authentication.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Credentials for endpoint authentication
///
/// The password is held as a `SecretString` so it never shows up in
/// `Debug` output or stray log lines. The legacy registry file format
/// stores it in clear text regardless; that weakness belongs to the
/// on-disk contract, not to this type.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Username for authentication
    pub username: String,
    /// Password (redacted in memory, plaintext in the registry file)
    pub password: Option<SecretString>,
}

/// Serializable representation of credentials
///
/// The registry file format requires the password in the clear, so
/// unlike most configuration formats it is serialized here.
#[derive(Serialize, Deserialize)]
struct CredentialsSerde {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: Option<String>,
}

impl Serialize for Credentials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CredentialsSerde {
            username: self.username.clone(),
            password: self.expose_password().map(str::to_string),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let serde = CredentialsSerde::deserialize(deserializer)?;
        Ok(Self {
            username: serde.username,
            password: serde.password.map(SecretString::from),
        })
    }
}

impl Credentials {
    /// Creates empty credentials
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            username: String::new(),
            password: None,
        }
    }

    /// Creates credentials with username only
    #[must_use]
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: None,
        }
    }

    /// Creates credentials with username and password
    #[must_use]
    pub fn with_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(SecretString::from(password.into())),
        }
    }

    /// Returns true if credentials contain a password
    #[must_use]
    pub const fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Returns true if neither a username nor a password is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_none()
    }

    /// Exposes the password for use (should be used carefully)
    #[must_use]
    pub fn expose_password(&self) -> Option<&str> {
        self.password
            .as_ref()
            .map(secrecy::ExposeSecret::expose_secret)
    }
}

// Manual PartialEq implementation since SecretString doesn't implement it
impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
            && match (&self.password, &other.password) {
                (Some(a), Some(b)) => a.expose_secret() == b.expose_secret(),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Eq for Credentials {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials() {
        let creds = Credentials::empty();
        assert!(creds.is_empty());
        assert!(!creds.has_password());
        assert_eq!(creds.expose_password(), None);
    }

    #[test]
    fn test_with_password() {
        let creds = Credentials::with_password("admin", "admin");
        assert!(creds.has_password());
        assert_eq!(creds.expose_password(), Some("admin"));
        assert_eq!(creds.username, "admin");
    }

    #[test]
    fn test_equality_compares_secrets() {
        let a = Credentials::with_password("admin", "secret");
        let b = Credentials::with_password("admin", "secret");
        let c = Credentials::with_password("admin", "other");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let creds = Credentials::with_password("admin", "hunter2");
        let dump = format!("{creds:?}");
        assert!(!dump.contains("hunter2"));
    }
}

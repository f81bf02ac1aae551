use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A signed-in user. The email is derived from the display name, never
/// entered directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            email: derive_email(name),
        }
    }
}

/// Deterministic email derivation: lowercased name with whitespace replaced
/// by dots, at example.com.
pub fn derive_email(name: &str) -> String {
    let local: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '.' } else { c })
        .collect();
    format!("{local}@example.com")
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("Display name must not be empty")]
    EmptyName,

    #[error("Credentials rejected: {0}")]
    Rejected(String),
}

/// Seam for credential verification. The demo ships name-only sign-in; a
/// deployment wanting real auth swaps this implementation without touching
/// the session store contract.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify a login attempt and return the canonical display name.
    async fn verify(&self, name: &str, secret: Option<&str>) -> Result<String, VerificationError>;
}

/// Accepts any non-empty display name. The secret, if supplied, is ignored.
pub struct OpenVerifier;

#[async_trait]
impl CredentialVerifier for OpenVerifier {
    async fn verify(&self, name: &str, _secret: Option<&str>) -> Result<String, VerificationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(VerificationError::EmptyName);
        }
        tracing::info!("Accepting sign-in for display name: {}", trimmed);
        Ok(trimmed.to_string())
    }
}

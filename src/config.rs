use crate::secret::SecretKey;

/// Merchant credentials issued by the gateway.
#[derive(Debug, Clone)]
pub struct MerchantConfig {
    /// Merchant identifier, sent as `PID` on the wire
    pub pid: String,
    pub secret_key: SecretKey,
}

impl MerchantConfig {
    pub fn new(pid: impl Into<String>, secret_key: impl Into<SecretKey>) -> Self {
        Self {
            pid: pid.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Read credentials from `SIKKAPAY_PID` and `SIKKAPAY_SECRET_KEY`.
    pub fn from_env() -> Option<Self> {
        let pid = std::env::var("SIKKAPAY_PID").ok()?;
        let secret_key = std::env::var("SIKKAPAY_SECRET_KEY").ok()?;
        Some(Self::new(pid, secret_key))
    }
}

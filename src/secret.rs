use std::fmt;

/// Merchant-held signing key.
///
/// The key is the only secret in the integration, so the wrapper refuses to
/// leak it: `Debug` prints a redaction marker and there is no `Display` or
/// `Serialize` impl.
#[derive(Clone)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

impl From<String> for SecretKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::SecretKey;

    #[test]
    fn debug_redacts_key() {
        let key = SecretKey::new("5178831496700b3634e4");
        assert_eq!(format!("{key:?}"), "SecretKey(***)");
    }
}

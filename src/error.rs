use std::fmt::Display;

/// Reasons a callback payload is rejected.
///
/// Callers only ever see the boolean projection of this type; the variants
/// exist so every rejection category gets its own log line.
#[derive(Debug)]
pub enum VerificationError {
    /// `RC` did not carry the success sentinel. The payment itself failed,
    /// this is not a tampering signal.
    PaymentNotSuccessful { response_code: String },
    EmptySecretKey,
    MissingField(&'static str),
    Digest(hmac::digest::InvalidLength),
    MalformedDigest(hex::FromHexError),
    DigestMismatch,
}

impl From<hmac::digest::InvalidLength> for VerificationError {
    fn from(value: hmac::digest::InvalidLength) -> Self {
        Self::Digest(value)
    }
}

impl From<hex::FromHexError> for VerificationError {
    fn from(value: hex::FromHexError) -> Self {
        Self::MalformedDigest(value)
    }
}

impl std::error::Error for VerificationError {}

impl Display for VerificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationError::PaymentNotSuccessful { response_code } => {
                write!(f, "payment not successful (RC={response_code})")
            }
            VerificationError::EmptySecretKey => f.write_str("secret key is empty"),
            VerificationError::MissingField(field) => {
                write!(f, "required field {field} is missing")
            }
            VerificationError::Digest(e) => write!(f, "keyed hash: {e}"),
            VerificationError::MalformedDigest(e) => write!(f, "DV is not valid hex: {e}"),
            VerificationError::DigestMismatch => {
                f.write_str("DV does not match the computed digest")
            }
        }
    }
}

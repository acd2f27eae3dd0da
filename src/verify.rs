use hmac::Mac;

use crate::callback::{DV_FIELD, RESPONSE_CODE_SUCCESS, ResponsePayload, VERIFIED_FIELDS};
use crate::error::VerificationError;
use crate::secret::SecretKey;
use crate::sign;

/// Check that a callback reports a successful payment and that its `DV`
/// signature is authentic under the merchant secret.
///
/// Total over its inputs: never panics and never surfaces an error. Every
/// rejection is logged with its cause; the secret key and the computed MAC
/// are never logged.
pub fn verify(payload: &ResponsePayload, secret_key: &SecretKey) -> bool {
    match check(payload, secret_key) {
        Ok(()) => true,
        Err(e @ VerificationError::PaymentNotSuccessful { .. }) => {
            tracing::info!("Rejected gateway callback: {e}");
            false
        }
        Err(e) => {
            tracing::error!("Failed to verify gateway callback: {e}");
            false
        }
    }
}

fn check(payload: &ResponsePayload, secret_key: &SecretKey) -> Result<(), VerificationError> {
    if secret_key.is_empty() {
        return Err(VerificationError::EmptySecretKey);
    }
    // Fast reject before any hash work. A missing RC lands here too: the
    // gateway only signs callbacks it reports as successful.
    match payload.get("RC") {
        Some(RESPONSE_CODE_SUCCESS) => {}
        rc => {
            return Err(VerificationError::PaymentNotSuccessful {
                response_code: rc.unwrap_or_default().to_string(),
            });
        }
    }
    let mut values = Vec::with_capacity(VERIFIED_FIELDS.len());
    for field in VERIFIED_FIELDS {
        let value = payload
            .get(field)
            .ok_or(VerificationError::MissingField(field))?;
        values.push(value);
    }
    let supplied = payload
        .get(DV_FIELD)
        .ok_or(VerificationError::MissingField(DV_FIELD))?;
    let supplied = hex::decode(supplied)?;

    let message = sign::canonical_message(values);
    let mac = sign::keyed_mac(secret_key.expose(), &message)?;
    // verify_slice compares in constant time and treats a length mismatch
    // as plain inequality.
    mac.verify_slice(&supplied)
        .map_err(|_| VerificationError::DigestMismatch)
}

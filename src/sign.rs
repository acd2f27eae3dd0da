use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::Sha512;

pub type HmacSha512 = Hmac<Sha512>;

/// Join field values with the protocol's `,` separator.
///
/// The caller passes values in wire order; order and separator are part of
/// the contract with the gateway, not an implementation detail.
pub fn canonical_message<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    values.into_iter().collect::<Vec<_>>().join(",")
}

pub fn keyed_mac(key: &[u8], message: &str) -> Result<HmacSha512, InvalidLength> {
    let mut mac = HmacSha512::new_from_slice(key)?;
    mac.update(message.as_bytes());
    Ok(mac)
}

/// Hex form of the keyed hash, as the gateway transmits it in `DV`.
pub fn keyed_digest_hex(key: &[u8], message: &str) -> Result<String, InvalidLength> {
    let mac = keyed_mac(key, message)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

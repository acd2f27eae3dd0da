use std::collections::HashMap;

use serde::Deserialize;

/// Field names covered by the gateway's `DV` signature, in signing order.
///
/// Order and the `,` separator are the wire contract with the gateway; a
/// protocol revision changes this constant and nothing else.
pub const VERIFIED_FIELDS: [&str; 9] = [
    "PRN", "PID", "PS", "RC", "UID", "BC", "INI", "P_AMT", "R_AMT",
];

/// Field carrying the gateway's hex-encoded keyed hash.
pub const DV_FIELD: &str = "DV";

/// Sentinel `RC` value for a successful payment.
pub const RESPONSE_CODE_SUCCESS: &str = "successful";

/// Query parameters the gateway appends when redirecting the customer back
/// to the merchant's return URL.
///
/// - `PRN`: merchant-assigned payment reference
/// - `PID`: merchant identifier
/// - `PS`: human-readable payment status
/// - `RC`: response code, `successful` on success
/// - `UID`: gateway transaction id
/// - `BC`: settling bank code
/// - `INI`: transaction initiator
/// - `P_AMT` / `R_AMT`: paid and refunded amounts as decimal strings
/// - `DV`: keyed hash over the fields above
///
/// The host parses the redirect query string into this mapping and hands it
/// to [`verify`](crate::verify::verify) once; nothing here is cached or
/// persisted.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ResponsePayload(HashMap<String, String>);

impl ResponsePayload {
    /// Parse a redirect query string, e.g. `PRN=ORDER1&PID=M001&...`.
    pub fn from_query(query: &str) -> Result<Self, serde::de::value::Error> {
        serde_urlencoded::from_str(query)
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

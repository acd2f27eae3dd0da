use serde::Serialize;
use url::Url;

use crate::config::MerchantConfig;
use crate::sign;

#[cfg(debug_assertions)]
const BASE_URL: &str = "https://dev.sikkapay.com/api/merchant-request";
#[cfg(not(debug_assertions))]
const BASE_URL: &str = "https://pay.sikkapay.com/api/merchant-request";

/// Payment mode discriminant. Hosted payment is the only mode this
/// integration uses.
const MODE_PAYMENT: &str = "P";

/// Per-payment parameters chosen by the merchant.
#[derive(Debug)]
pub struct PaymentParams<'a> {
    /// Merchant-assigned payment reference, sent as `PRN`
    pub reference: &'a str,
    /// Amount as a decimal string, e.g. `100.00`
    pub amount: &'a str,
    pub currency: &'a str,
    /// Transaction date in the format the gateway expects
    pub date: &'a str,
    pub remark: &'a str,
    pub secondary_remark: &'a str,
    /// Merchant URL the gateway redirects the customer back to
    pub return_url: &'a str,
}

#[derive(Debug, Serialize)]
struct PaymentRequest<'a> {
    #[serde(rename = "PID")]
    pid: &'a str,
    #[serde(rename = "MD")]
    mode: &'a str,
    #[serde(rename = "PRN")]
    reference: &'a str,
    #[serde(rename = "AMT")]
    amount: &'a str,
    #[serde(rename = "CRN")]
    currency: &'a str,
    #[serde(rename = "DT")]
    date: &'a str,
    #[serde(rename = "R1")]
    remark: &'a str,
    #[serde(rename = "R2")]
    secondary_remark: &'a str,
    #[serde(rename = "RU")]
    return_url: &'a str,
    #[serde(rename = "DV")]
    dv: String,
}

/// Build the hosted-payment URL the customer is redirected to.
///
/// The request is signed the same way the callback response is verified:
/// field values joined by `,` in wire order, HMAC-SHA512 under the merchant
/// secret, hex-encoded into the `DV` parameter. No HTTP is performed here.
pub fn payment_url(config: &MerchantConfig, params: &PaymentParams<'_>) -> Url {
    let message = sign::canonical_message([
        config.pid.as_str(),
        MODE_PAYMENT,
        params.reference,
        params.amount,
        params.currency,
        params.date,
        params.remark,
        params.secondary_remark,
        params.return_url,
    ]);
    let dv = sign::keyed_digest_hex(config.secret_key.expose(), &message)
        .expect("hmac accepts keys of any length");
    let request = PaymentRequest {
        pid: &config.pid,
        mode: MODE_PAYMENT,
        reference: params.reference,
        amount: params.amount,
        currency: params.currency,
        date: params.date,
        remark: params.remark,
        secondary_remark: params.secondary_remark,
        return_url: params.return_url,
        dv,
    };
    let query = serde_urlencoded::to_string(&request).expect("flat string fields serialize");
    let mut url = Url::parse(BASE_URL).expect("base url is valid");
    url.set_query(Some(&query));
    tracing::debug!(reference = params.reference, "Built payment initiation url");
    url
}

#[cfg(test)]
mod tests {
    use super::{PaymentParams, payment_url};
    use crate::config::MerchantConfig;

    fn params() -> PaymentParams<'static> {
        PaymentParams {
            reference: "ORDER1",
            amount: "100.00",
            currency: "NPR",
            date: "2026-08-29",
            remark: "order",
            secondary_remark: "N/A",
            return_url: "https://merchant.example.com/return",
        }
    }

    #[test]
    fn signs_request_in_wire_order() {
        let config = MerchantConfig::new("M001", "s3cr3t");
        let url = payment_url(&config, &params());
        let dv = url
            .query_pairs()
            .find(|(k, _)| k == "DV")
            .map(|(_, v)| v.into_owned())
            .expect("DV param present");
        // HMAC-SHA512("s3cr3t",
        //   "M001,P,ORDER1,100.00,NPR,2026-08-29,order,N/A,https://merchant.example.com/return")
        assert_eq!(
            dv,
            "3bdceb20b431c268c5699fe3396131d8d277d5d88261eedba4df5902e925204b\
             f3d45f731eef8b6f5ed1a826e44f14c8a9a46eceef28c99efcd0a054d0f26631"
        );
    }

    #[test]
    fn carries_all_request_parameters() {
        let config = MerchantConfig::new("M001", "s3cr3t");
        let url = payment_url(&config, &params());
        let get = |name: &str| {
            url.query_pairs()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.into_owned())
        };
        assert_eq!(get("PID").as_deref(), Some("M001"));
        assert_eq!(get("MD").as_deref(), Some("P"));
        assert_eq!(get("PRN").as_deref(), Some("ORDER1"));
        assert_eq!(get("AMT").as_deref(), Some("100.00"));
        assert_eq!(get("CRN").as_deref(), Some("NPR"));
        assert_eq!(get("RU").as_deref(), Some("https://merchant.example.com/return"));
    }

    #[test]
    fn changing_a_parameter_changes_the_signature() {
        let config = MerchantConfig::new("M001", "s3cr3t");
        let dv_of = |p: &PaymentParams<'_>| {
            payment_url(&config, p)
                .query_pairs()
                .find(|(k, _)| k == "DV")
                .map(|(_, v)| v.into_owned())
                .unwrap()
        };
        let mut tampered = params();
        tampered.amount = "100.01";
        assert_ne!(dv_of(&params()), dv_of(&tampered));
    }
}

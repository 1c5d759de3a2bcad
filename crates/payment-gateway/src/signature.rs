//! Callback signature verification.
//!
//! The gateway signs `"{order_id}|{payment_id}"` with HMAC-SHA256 keyed
//! by the shared key secret and delivers the hex-encoded digest alongside
//! the callback.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::SignatureMismatch;

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected hex-encoded signature for an order/payment pair.
pub fn compute_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a supplied hex-encoded signature against the recomputed HMAC.
///
/// The comparison goes through `Mac::verify_slice`, which is constant
/// time. Malformed hex is treated as a mismatch, not a distinct error.
pub fn verify_signature(
    secret: &str,
    order_id: &str,
    payment_id: &str,
    supplied: &str,
) -> Result<(), SignatureMismatch> {
    let supplied = hex::decode(supplied).map_err(|_| SignatureMismatch)?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    mac.verify_slice(&supplied).map_err(|_| SignatureMismatch)
}

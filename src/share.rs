//! Reversible share-token codec for the `?case=` URL parameter.
//!
//! The token is URL-safe base64 over a small versioned JSON payload.
//! Encoding is deterministic and lossless; decoding is total: any
//! malformed or wrong-version input yields `None`, never a panic, and
//! the caller treats `None` as "no incoming state".

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Bumped whenever the payload shape changes; tokens from other
/// versions are ignored rather than half-read.
pub const TOKEN_VERSION: u32 = 1;

/// What a shared case carries: the victim statement and the evidence
/// collected so far, in collection order. Screen and transient effect
/// flags are not part of the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasePayload {
    pub v: u32,
    pub answers: Vec<String>,
    pub collected: Vec<u32>,
}

/// Serialize a case into a URL-safe token.
pub fn encode(answers: &[String], collected: &[u32]) -> String {
    let payload = CasePayload {
        v: TOKEN_VERSION,
        answers: answers.to_vec(),
        collected: collected.to_vec(),
    };
    // Serializing this shape cannot fail.
    let json = serde_json::to_vec(&payload).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Parse a token back into a payload. `None` on any malformed input.
pub fn decode(token: &str) -> Option<CasePayload> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim()).ok()?;
    let payload: CasePayload = serde_json::from_slice(&bytes).ok()?;
    (payload.v == TOKEN_VERSION).then_some(payload)
}

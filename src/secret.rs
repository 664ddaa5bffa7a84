//! The heading easter egg: which word triggers it and where it leads.

use crate::error::PortfolioResult;
use base64::{engine::general_purpose::STANDARD, Engine};

pub const SECRET_TOKEN: &str = "Dwight";

/// Reveal target, kept out of plain sight in the bundle.
pub const ENCODED_SECRET_URL: &str = "aHR0cHM6Ly93d3cueW91dHViZS5jb20vd2F0Y2g/dj0yb0RScGNfSm1VYw==";

pub fn try_decode_reference(payload: &str) -> PortfolioResult<String> {
    let bytes = STANDARD.decode(payload.trim())?;
    Ok(String::from_utf8(bytes)?)
}

/// Decodes `payload`, handing back the raw input if it does not decode.
pub fn decode_reference(payload: &str) -> String {
    match try_decode_reference(payload) {
        Ok(decoded) => decoded,
        Err(error) => {
            tracing::warn!(%error, "reference did not decode, using raw value");
            payload.to_string()
        }
    }
}

pub fn secret_url() -> String {
    decode_reference(ENCODED_SECRET_URL)
}

/// True for the heading word that carries the reveal, ignoring punctuation.
pub fn is_secret_token(word: &str) -> bool {
    let cleaned: String = word
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    cleaned == SECRET_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;
    use tracing_test::traced_test;

    #[test]
    fn embedded_reference_decodes_to_https_url() {
        assert_eq!(secret_url(), "https://www.youtube.com/watch?v=2oDRpc_JmUc");
    }

    #[traced_test]
    #[test]
    fn invalid_base64_falls_back_to_raw_string() {
        let raw = "not base64 at all!";

        assert_eq!(decode_reference(raw), raw);
        assert!(logs_contain("reference did not decode"));
    }

    #[test]
    fn non_utf8_payload_is_reported_as_utf8_error() {
        let payload = STANDARD.encode([0xffu8, 0xfe, 0xfd]);

        let error = try_decode_reference(&payload).expect_err("bytes are not utf-8");
        assert!(matches!(error, PortfolioError::Utf8(_)));
        assert_eq!(decode_reference(&payload), payload);
    }

    #[test]
    fn secret_token_ignores_punctuation() {
        assert!(is_secret_token("Dwight."));
        assert!(is_secret_token("Dwight"));
        assert!(is_secret_token("\"Dwight!\""));
        assert!(!is_secret_token("dwight"));
        assert!(!is_secret_token("I'm"));
        assert!(!is_secret_token("Dwights"));
    }

    #[test]
    fn heading_has_exactly_one_secret_word() {
        let count = crate::content::HEADING
            .split(' ')
            .filter(|word| is_secret_token(word))
            .count();
        assert_eq!(count, 1);
    }
}

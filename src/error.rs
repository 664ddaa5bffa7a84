use std::string::FromUtf8Error;

pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[derive(thiserror::Error, Debug)]
pub enum PortfolioError {
    #[error("decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("decoded bytes are not utf-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("host refused: {0}")]
    Host(String),
}

impl PortfolioError {
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn display_prefixes_are_stable() {
        let decode = base64::engine::general_purpose::STANDARD
            .decode("***")
            .expect_err("invalid alphabet must fail");
        assert!(PortfolioError::from(decode)
            .to_string()
            .starts_with("decode error:"));

        let utf8 = String::from_utf8(vec![0xff, 0xfe]).expect_err("invalid utf-8 must fail");
        assert!(PortfolioError::from(utf8)
            .to_string()
            .starts_with("decoded bytes are not utf-8:"));

        assert_eq!(
            PortfolioError::host("window.open blocked").to_string(),
            "host refused: window.open blocked"
        );
    }
}

use encoding_rs::UTF_8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode response body as UTF-8: {message}")]
    InvalidUtf8 { message: String },
}

/// Decode a response body as strict UTF-8, dropping a leading BOM.
///
/// Malformed input is an error rather than being replaced with U+FFFD.
pub fn decode_utf8(bytes: &[u8]) -> Result<DecodedPage, DecodeError> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        let valid_up_to = std::str::from_utf8(strip_bom(bytes))
            .err()
            .map_or(0, |err| err.valid_up_to());
        return Err(DecodeError::InvalidUtf8 {
            message: format!("invalid byte sequence after {valid_up_to} valid bytes"),
        });
    }
    Ok(DecodedPage {
        text: text.into_owned(),
    })
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

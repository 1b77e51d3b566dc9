//! Tiny-token 编解码模块
//!
//! 32 位 pageId 与 6 字符 URL-safe 字符串之间的双射编码。

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::errors::{ConflinkError, Result};

/// Tokens are always exactly this long: 4 raw bytes become 8 base64
/// characters, and the 2 padding characters are always stripped.
pub const TOKEN_LENGTH: usize = 6;

/// Encode a page identifier as a 6-character URL-safe token.
///
/// The identifier is serialized as 4 little-endian bytes and run through
/// *standard*-alphabet base64; `+` and `/` are substituted afterwards
/// (`+` → `-`, `/` → `_`). This is deliberately not the RFC 4648 URL-safe
/// engine: the substitution happens post-encoding, which pins down the
/// exact bytes legacy deployments expect.
pub fn encode(page_id: u32) -> String {
    let packed = page_id.to_le_bytes();
    STANDARD
        .encode(packed)
        .replace('+', "-")
        .replace('/', "_")
        .trim_end_matches('=')
        .to_string()
}

/// Decode a 6-character token back into its page identifier.
///
/// Exact inverse of [`encode`]: reverse the character substitutions,
/// restore the `==` padding, base64-decode and read 4 little-endian bytes.
pub fn decode(token: &str) -> Result<u32> {
    if token.len() != TOKEN_LENGTH {
        return Err(ConflinkError::invalid_token(format!(
            "token must be exactly {} characters, got {}: {}",
            TOKEN_LENGTH,
            token.len(),
            token
        )));
    }
    if !token
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(ConflinkError::invalid_token(format!(
            "token contains characters outside [A-Za-z0-9_-]: {}",
            token
        )));
    }

    let mut padded = token.replace('-', "+").replace('_', "/");
    padded.push_str("==");

    let bytes = STANDARD.decode(padded)?;
    let packed: [u8; 4] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| ConflinkError::invalid_token(format!("token decodes to {} bytes", bytes.len())))?;
    Ok(u32::from_le_bytes(packed))
}

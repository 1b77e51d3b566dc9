//! Confluence URL 解析模块
//!
//! 从任意形态的 Confluence 页面 URL 中提取数字 pageId 和基础源（base origin）。

use url::Url;

use crate::errors::{ConflinkError, Result};

/// Human-readable list of the URL shapes the resolver understands, in match
/// order. Surfaced in `PageIdNotFound` diagnostics.
pub const SUPPORTED_SHAPES: &[&str] = &[
    "/pages/<id>",
    "?pageId=<id>",
    "/viewpage.action?pageId=<id>",
    "/display/<space>/<title>?pageId=<id>",
];

/// A shape matcher scans one recognized URL pattern and returns the digit
/// run that forms the page identifier.
type ShapeMatcher = fn(&str) -> Option<&str>;

/// Match order is an observable contract: the first hit wins and scanning
/// stops. Keep this list in sync with [`SUPPORTED_SHAPES`].
const SHAPE_MATCHERS: &[ShapeMatcher] = &[
    match_pages_segment,
    match_page_id_query,
    match_viewpage_action,
    match_display_form,
];

/// Extract the numeric page identifier from a Confluence page URL.
///
/// The URL is percent-decoded once before matching, so encodings like
/// `%2F` for path separators are normalized first. Shapes are tried in
/// the order of [`SUPPORTED_SHAPES`]; the first match wins.
pub fn resolve_page_id(url: &str) -> Result<u32> {
    // 先整体做一次百分号解码，再进行模式匹配
    let decoded = urlencoding::decode(url)
        .map_err(|e| ConflinkError::malformed_url(format!("percent-decoding failed: {}", e)))?;

    for matcher in SHAPE_MATCHERS {
        if let Some(digits) = matcher(&decoded) {
            return parse_page_id(digits);
        }
    }

    Err(ConflinkError::page_id_not_found(url))
}

/// Extract `scheme://host[:port]` from a full URL, discarding path, query
/// and fragment.
///
/// A port written out in the input survives even when it equals the
/// scheme's default (the `url` crate normalizes default ports away, so
/// that case is recovered from the raw authority text).
pub fn extract_base_origin(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ConflinkError::malformed_url(format!("URL has no host: {}", url)))?;

    let mut base = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port().or_else(|| explicit_default_port(url)) {
        base.push(':');
        base.push_str(&port.to_string());
    }
    Ok(base)
}

/// `/pages/<digits>` followed by `/` or end of string. A trailing segment
/// (usually the page title) is ignored.
fn match_pages_segment(url: &str) -> Option<&str> {
    const NEEDLE: &str = "/pages/";
    let mut search_from = 0;

    while let Some(pos) = url[search_from..].find(NEEDLE) {
        let digits_start = search_from + pos + NEEDLE.len();
        let digits = leading_digits(&url[digits_start..]);
        if !digits.is_empty() {
            // 数字后必须是 '/' 或字符串结尾，否则不算命中
            let terminator = url[digits_start + digits.len()..].chars().next();
            if matches!(terminator, None | Some('/')) {
                return Some(digits);
            }
        }
        search_from = digits_start;
    }
    None
}

/// `pageId=<digits>` introduced by `?` or `&`, anywhere in the URL.
fn match_page_id_query(url: &str) -> Option<&str> {
    const NEEDLE: &str = "pageId=";
    let mut search_from = 0;

    while let Some(pos) = url[search_from..].find(NEEDLE) {
        let needle_start = search_from + pos;
        let preceded = needle_start > 0
            && matches!(url.as_bytes()[needle_start - 1], b'?' | b'&');
        if preceded {
            let digits = leading_digits(&url[needle_start + NEEDLE.len()..]);
            if !digits.is_empty() {
                return Some(digits);
            }
        }
        search_from = needle_start + NEEDLE.len();
    }
    None
}

/// `/viewpage.action?pageId=<digits>` — the legacy endpoint. Subsumed by
/// [`match_page_id_query`] but kept in the ordered list, matching the
/// historical dispatch table.
fn match_viewpage_action(url: &str) -> Option<&str> {
    let pos = url.find("/viewpage.action?pageId=")?;
    let digits = leading_digits(&url[pos + "/viewpage.action?pageId=".len()..]);
    (!digits.is_empty()).then_some(digits)
}

/// `/display/<space>/<title>?pageId=<digits>` — likewise subsumed, kept.
fn match_display_form(url: &str) -> Option<&str> {
    let display = url.find("/display/")?;
    let tail = &url[display + "/display/".len()..];
    // space key 后面必须还有一层路径
    let (space, rest) = tail.split_once('/')?;
    if space.is_empty() {
        return None;
    }
    let query = rest.find("?pageId=")?;
    let digits = leading_digits(&rest[query + "?pageId=".len()..]);
    (!digits.is_empty()).then_some(digits)
}

fn leading_digits(s: &str) -> &str {
    let end = s
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}

/// Parse a matched digit run as a base-10 page identifier. Anything above
/// `u32::MAX` is an input error, never a silent truncation.
fn parse_page_id(digits: &str) -> Result<u32> {
    digits
        .parse::<u64>()
        .ok()
        .and_then(|id| u32::try_from(id).ok())
        .ok_or_else(|| {
            ConflinkError::identifier_out_of_range(format!(
                "page identifier {} exceeds the 32-bit unsigned range",
                digits
            ))
        })
}

/// Recover a scheme-default port that was written out explicitly, e.g.
/// `https://host:443/...`. Returns `None` when the input has no port.
fn explicit_default_port(raw: &str) -> Option<u16> {
    let rest = &raw[raw.find("://")? + 3..];
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);
    if host_port.ends_with(']') {
        // IPv6 字面量且无端口
        return None;
    }
    let (_, port) = host_port.rsplit_once(':')?;
    port.parse().ok()
}

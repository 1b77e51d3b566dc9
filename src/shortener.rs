//! Short-link composition: resolver + codec glued together.

use crate::errors::Result;
use crate::resolver::{extract_base_origin, resolve_page_id};
use crate::token;

/// Path segment Confluence serves tiny links under.
const TINY_PATH: &str = "/x/";

/// Build a short link for a full Confluence page URL.
///
/// The base origin is taken from `base_override` when present, otherwise
/// derived from the input URL itself. The result is always
/// `base + "/x/" + token`.
pub fn shorten_url(full_url: &str, base_override: Option<&str>) -> Result<String> {
    let base = match base_override {
        Some(base) => base.to_string(),
        None => extract_base_origin(full_url)?,
    };
    let page_id = resolve_page_id(full_url)?;
    let token = token::encode(page_id);

    Ok(format!("{}{}{}", base.trim_end_matches('/'), TINY_PATH, token))
}

//! JSON API for the shortener core.

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::errors::ConflinkError;
use crate::resolver::resolve_page_id;
use crate::{shortener, token};

#[derive(Deserialize)]
pub struct ShortenRequest {
    pub full_url: String,
    /// Overrides both the configured default base and the derived origin.
    pub base_url: Option<String>,
}

#[derive(Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub page_id: u32,
    pub token: String,
}

#[derive(Serialize)]
pub struct DecodeResponse {
    pub page_id: u32,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub error: &'static str,
    pub message: String,
}

impl From<&ConflinkError> for ErrorResponse {
    fn from(err: &ConflinkError) -> Self {
        ErrorResponse {
            code: err.code(),
            error: err.error_type(),
            message: err.message().to_string(),
        }
    }
}

fn bad_request(err: &ConflinkError) -> HttpResponse {
    debug!("request rejected: {}", err);
    HttpResponse::BadRequest().json(ErrorResponse::from(err))
}

pub struct ShortenService {}

impl ShortenService {
    /// `POST /api/shorten` —— 把完整的 Confluence 页面 URL 变成短链
    #[instrument(skip(config, payload), fields(full_url = %payload.full_url))]
    pub async fn post_shorten(
        config: web::Data<Config>,
        payload: web::Json<ShortenRequest>,
    ) -> impl Responder {
        let base_override = payload
            .base_url
            .as_deref()
            .or(config.default_base_url.as_deref());

        let short_url = match shortener::shorten_url(&payload.full_url, base_override) {
            Ok(short_url) => short_url,
            Err(e) => return bad_request(&e),
        };

        // 解析一定成功，shorten_url 刚刚已经走过同一条路径
        let page_id = match resolve_page_id(&payload.full_url) {
            Ok(page_id) => page_id,
            Err(e) => return bad_request(&e),
        };

        HttpResponse::Ok().json(ShortenResponse {
            short_url,
            page_id,
            token: token::encode(page_id),
        })
    }

    /// `GET /api/decode/{token}` —— 短链 token 反解回 pageId
    #[instrument(skip(path))]
    pub async fn get_decode(path: web::Path<String>) -> impl Responder {
        let raw_token = path.into_inner();
        match token::decode(&raw_token) {
            Ok(page_id) => HttpResponse::Ok().json(DecodeResponse { page_id }),
            Err(e) => bad_request(&e),
        }
    }
}

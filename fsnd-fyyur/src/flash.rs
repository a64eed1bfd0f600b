//! One-shot flash messages carried in a cookie
//!
//! A mutation sets the `fsnd_flash` cookie on its redirect; the next
//! rendered page shows the message and removes the cookie.

use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use biscotti::{
    Processor, ProcessorConfig, RemovalCookie, RequestCookies, ResponseCookie, ResponseCookies,
    SameSite,
};
use tracing::{debug, warn};

/// Cookie name
pub const FLASH_COOKIE: &str = "fsnd_flash";

const COOKIE_PATH: &str = "/";

fn processor() -> Processor {
    ProcessorConfig::default().into()
}

/// Cookie storing `message`, base64url-encoded
pub fn flash_cookie(message: &str) -> ResponseCookie<'static> {
    ResponseCookie::new(FLASH_COOKIE, URL_SAFE_NO_PAD.encode(message.as_bytes()))
        .set_path(COOKIE_PATH)
        .set_http_only(true)
        .set_same_site(SameSite::Lax)
}

/// Cookie telling the browser to drop a shown flash message
pub fn removal_cookie() -> RemovalCookie<'static> {
    RemovalCookie::new(FLASH_COOKIE).set_path(COOKIE_PATH)
}

/// Append `cookie` to the response as a `Set-Cookie` header
pub fn append(response: &mut Response, cookie: ResponseCookie<'static>) {
    let processor = processor();
    let mut cookies = ResponseCookies::new();
    cookies.insert(cookie);
    for value in cookies.header_values(&processor) {
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(_) => warn!("Dropping invalid Set-Cookie value: {}", value),
        }
    }
}

/// Read the pending flash message from the request's `Cookie` headers
///
/// Unparseable headers and values that are not valid base64url or UTF-8
/// are ignored.
pub fn take(headers: &HeaderMap) -> Option<String> {
    let processor = processor();
    let mut cookies = RequestCookies::new();
    for value in headers.get_all(header::COOKIE).into_iter() {
        let Ok(value) = value.to_str() else {
            continue;
        };
        if let Err(e) = cookies.extend_from_header(value, &processor) {
            debug!("Ignoring unparseable Cookie header: {}", e);
        }
    }

    let cookie = cookies.get(FLASH_COOKIE)?;
    let encoded = cookie.value();
    if encoded.is_empty() {
        return None;
    }
    match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(bytes) => String::from_utf8(bytes).ok(),
        Err(e) => {
            debug!("Ignoring malformed flash cookie: {}", e);
            None
        }
    }
}

/// 303 redirect to `location` carrying a flash message
pub fn redirect_with(location: &str, message: &str) -> Response {
    let mut response = Redirect::to(location).into_response();
    append(&mut response, flash_cookie(message));
    response
}

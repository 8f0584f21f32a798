//! Refresh token cookie handling

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    HttpRequest,
};
use todo_shared::config::CookieConfig;

use crate::dto::auth::RefreshTokenRequest;

/// Cookie carrying a freshly issued refresh token
pub fn refresh_cookie(config: &CookieConfig, token: &str) -> Cookie<'static> {
    Cookie::build(config.name.clone(), token.to_owned())
        .path(config.path.clone())
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(config.max_age))
        .finish()
}

/// Expired cookie that makes the client drop its refresh token
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.name.clone(), "")
        .path(config.path.clone())
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Strict)
        .finish();
    cookie.make_removal();
    cookie
}

/// Refresh token presented by the client
///
/// The cookie wins; the JSON body is the fallback for clients that cannot
/// hold cookies.
pub fn presented_refresh_token(
    req: &HttpRequest,
    config: &CookieConfig,
    body: Option<&RefreshTokenRequest>,
) -> Option<String> {
    req.cookie(&config.name)
        .map(|c| c.value().to_string())
        .or_else(|| body.and_then(|b| b.refresh_token.clone()))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_refresh_cookie_attributes() {
        let config = CookieConfig::default().with_secure(true);
        let cookie = refresh_cookie(&config, "abc");

        assert_eq!(cookie.name(), "refreshToken");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/v1/auth"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604800)));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie(&CookieConfig::default());
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[test]
    fn test_cookie_preferred_over_body() {
        let config = CookieConfig::default();
        let body = RefreshTokenRequest {
            refresh_token: Some("from-body".to_string()),
        };

        let req = TestRequest::default()
            .cookie(Cookie::new("refreshToken", "from-cookie"))
            .to_http_request();
        assert_eq!(
            presented_refresh_token(&req, &config, Some(&body)),
            Some("from-cookie".to_string())
        );

        let req = TestRequest::default().to_http_request();
        assert_eq!(
            presented_refresh_token(&req, &config, Some(&body)),
            Some("from-body".to_string())
        );
        assert_eq!(presented_refresh_token(&req, &config, None), None);
    }
}

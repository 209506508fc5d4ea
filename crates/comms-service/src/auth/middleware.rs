use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::token::TokenVerifier;
use super::types::UserContext;
use crate::error::AppError;

/// Middleware to verify the session token and inject user context.
///
/// Registered on every route of the comms router; requests without a valid
/// token never reach a handler.
pub async fn require_auth(
    State(verifier): State<Arc<TokenVerifier>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_session_token(&request) else {
        tracing::warn!("No session token provided");
        return Err(AppError::Auth("Missing authentication token".to_string()));
    };

    let claims = verifier.verify(token)?;

    tracing::debug!(user_id = %claims.sub, "Authenticated request");

    let user_context = UserContext {
        user_id: claims.sub,
        email: claims.email,
    };
    request.extensions_mut().insert(user_context);

    Ok(next.run(request).await)
}

/// Extract the session token from request headers or cookies
fn extract_session_token(request: &Request) -> Option<&str> {
    // Try Authorization header first: "Bearer <token>"
    if let Some(auth_header) = request.headers().get("authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token);
            }
        }
    }

    // Try X-Session-Token header
    if let Some(session_header) = request.headers().get("x-session-token") {
        if let Ok(token) = session_header.to_str() {
            return Some(token);
        }
    }

    // Try Cookie header: "session_token=<token>"
    if let Some(cookie_header) = request.headers().get("cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie in cookie_str.split(';') {
                let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
                if parts.len() == 2 && parts[0] == "session_token" {
                    return Some(parts[1]);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_headers(headers: &[(&str, &str)]) -> Request {
        let mut builder = Request::builder().uri("/api/organization");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_extracted() {
        let request = request_with_headers(&[("authorization", "Bearer abc123")]);
        assert_eq!(extract_session_token(&request), Some("abc123"));
    }

    #[test]
    fn test_session_header_extracted() {
        let request = request_with_headers(&[("x-session-token", "abc123")]);
        assert_eq!(extract_session_token(&request), Some("abc123"));
    }

    #[test]
    fn test_cookie_extracted() {
        let request = request_with_headers(&[("cookie", "theme=dark; session_token=abc123")]);
        assert_eq!(extract_session_token(&request), Some("abc123"));
    }

    #[test]
    fn test_bearer_takes_precedence_over_cookie() {
        let request = request_with_headers(&[
            ("authorization", "Bearer from-header"),
            ("cookie", "session_token=from-cookie"),
        ]);
        assert_eq!(extract_session_token(&request), Some("from-header"));
    }

    #[test]
    fn test_missing_token_yields_none() {
        let request = request_with_headers(&[]);
        assert_eq!(extract_session_token(&request), None);
    }

    #[test]
    fn test_non_bearer_authorization_ignored() {
        let request = request_with_headers(&[("authorization", "Basic dXNlcjpwdw==")]);
        assert_eq!(extract_session_token(&request), None);
    }
}

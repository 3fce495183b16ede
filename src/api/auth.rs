//! Auth Endpoints
//!
//! Login, registration, and logout. Login and register are the only
//! unauthenticated calls in the client.

use serde::Serialize;

use super::{send, Auth};
use crate::error::ApiError;
use crate::models::Session;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Parse the login success body, a space-separated `<token> <isAdmin>`
/// pair. Any flag string other than `"true"` means non-admin; a body
/// without the separator is malformed rather than silently mis-split.
pub fn parse_login_response(body: &str) -> Result<Session, ApiError> {
    let trimmed = body.trim();
    let (token, flag) = trimmed
        .split_once(' ')
        .ok_or_else(|| ApiError::Malformed(trimmed.to_string()))?;
    if token.is_empty() {
        return Err(ApiError::Malformed(trimmed.to_string()));
    }
    Ok(Session {
        token: token.to_string(),
        is_admin: flag == "true",
    })
}

pub async fn login(username: &str, password: &str) -> Result<Session, ApiError> {
    let body = serde_json::to_string(&LoginBody { username, password })
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    let response = send("POST", "/login", Auth::None, Some(body)).await?;
    match response.status {
        200 => parse_login_response(&response.body),
        status => Err(ApiError::from_status(status)),
    }
}

pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let body = serde_json::to_string(&RegisterBody {
        username,
        email,
        password,
    })
    .map_err(|e| ApiError::Malformed(e.to_string()))?;
    let response = send("POST", "/register", Auth::None, Some(body)).await?;
    match response.status {
        201 => Ok(()),
        status => Err(ApiError::from_status(status)),
    }
}

pub async fn logout(token: &str) -> Result<(), ApiError> {
    let response = send("POST", "/logout", Auth::Bearer(token), None).await?;
    match response.status {
        200 => Ok(()),
        status => Err(ApiError::from_status(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_admin_session() {
        let session = parse_login_response("abc123 true").unwrap();
        assert_eq!(session.token, "abc123");
        assert!(session.is_admin);
    }

    #[test]
    fn parses_non_admin_session() {
        let session = parse_login_response("abc123 false").unwrap();
        assert_eq!(session.token, "abc123");
        assert!(!session.is_admin);
    }

    #[test]
    fn unknown_flag_means_non_admin() {
        let session = parse_login_response("abc123 yes").unwrap();
        assert!(!session.is_admin);
    }

    #[test]
    fn tolerates_trailing_newline() {
        let session = parse_login_response("abc123 true\n").unwrap();
        assert_eq!(session.token, "abc123");
        assert!(session.is_admin);
    }

    #[test]
    fn body_without_separator_is_malformed() {
        assert!(matches!(
            parse_login_response("abc123"),
            Err(ApiError::Malformed(_))
        ));
        assert!(matches!(
            parse_login_response(""),
            Err(ApiError::Malformed(_))
        ));
    }
}

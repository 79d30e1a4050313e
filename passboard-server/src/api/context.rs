//! Request actor context
//!
//! Identifies who is calling from `x-user-*` headers. Nothing is enforced:
//! the name only labels activity log entries, and missing headers fall back
//! to the demo operator.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use serde::Serialize;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_EMAIL_HEADER: &str = "x-user-email";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_ROLE_HEADER: &str = "x-user-role";

const DEFAULT_USER_ID: &str = "demo-user";
const DEFAULT_USER_EMAIL: &str = "mohammad.sudally@baynunah.ae";
const DEFAULT_USER_NAME: &str = "Baynunah Talent Ops";

/// Dashboard role claimed by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Admin,
    Manager,
    Panel,
}

impl UserRole {
    /// Case-insensitive; anything unrecognised is treated as admin
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("manager") => UserRole::Manager,
            Some("panel") => UserRole::Panel,
            _ => UserRole::Admin,
        }
    }
}

/// Caller identity resolved from request headers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

impl RequestUser {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let text = |name: &str, default: &str| {
            header(headers, name).unwrap_or(default).to_string()
        };

        Self {
            id: text(USER_ID_HEADER, DEFAULT_USER_ID),
            email: text(USER_EMAIL_HEADER, DEFAULT_USER_EMAIL),
            name: text(USER_NAME_HEADER, DEFAULT_USER_NAME),
            role: UserRole::from_header(header(headers, USER_ROLE_HEADER)),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestUser::from_headers(&parts.headers))
    }
}

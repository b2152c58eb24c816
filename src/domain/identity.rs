//! Identity claims and the access decision
//!
//! [`Claims`] is the decoded payload of an access token. Tokens are
//! signed over whatever claim object the caller supplied — there is no
//! field whitelist — so everything beyond `email`/`iat`/`exp` is kept in
//! a flattened extras map and survives an issue/verify roundtrip intact.
//!
//! [`AccessDecision`] encodes the portal's two-branch authorization rule
//! for admin-guarded listings.

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Identity claims carried inside a signed access token
///
/// `email` is the authorization anchor; it is optional because the
/// issuer signs arbitrary claim objects verbatim. After the signature
/// check the claims are trusted as-is — no cross-check against the
/// stored record happens outside the admin guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Email identifying the caller, if the signed object carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Issued-at (seconds since epoch)
    pub iat: i64,

    /// Expiry (seconds since epoch); fixed 12 hours after issuance
    pub exp: i64,

    /// Any further claims the caller had signed
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Extracts the verified claims the auth middleware stored in the
/// request extensions. Requests that skipped the middleware fail with
/// 401.
impl FromRequest for Claims {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(claims.clone())),
            None => ready(Err(
                AppError::AuthenticationError("unauthorized access".to_string()).into(),
            )),
        }
    }
}

/// Why an admin-guarded request was allowed through
///
/// The self branch compares the caller's token email against the `email`
/// **query parameter of the request being made**, not against the owner
/// of any particular record. A non-admin caller can always pass their own
/// email as a filter and be admitted, but can never request another
/// caller's filtered view. This asymmetry is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Caller's stored record carries `role == "admin"`
    Admin,
    /// Caller's token email equals the request's own `email` parameter
    SelfByEmailParam,
}

impl AccessDecision {
    /// Evaluates the two-branch rule; `None` means the request must be
    /// rejected with 403.
    pub fn decide(
        is_admin: bool,
        token_email: Option<&str>,
        requested_email: Option<&str>,
    ) -> Option<Self> {
        if is_admin {
            return Some(Self::Admin);
        }

        match (token_email, requested_email) {
            (Some(own), Some(requested)) if own == requested => Some(Self::SelfByEmailParam),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_access_with_matching_email() {
        let decision = AccessDecision::decide(false, Some("a@x.com"), Some("a@x.com"));
        assert_eq!(decision, Some(AccessDecision::SelfByEmailParam));
    }

    #[test]
    fn test_non_admin_requesting_foreign_email_is_denied() {
        let decision = AccessDecision::decide(false, Some("b@x.com"), Some("a@x.com"));
        assert_eq!(decision, None);
    }

    #[test]
    fn test_admin_may_request_any_email() {
        let decision = AccessDecision::decide(true, Some("b@x.com"), Some("a@x.com"));
        assert_eq!(decision, Some(AccessDecision::Admin));

        // ...including no email filter at all
        let decision = AccessDecision::decide(true, Some("b@x.com"), None);
        assert_eq!(decision, Some(AccessDecision::Admin));
    }

    #[test]
    fn test_non_admin_without_email_param_is_denied() {
        assert_eq!(AccessDecision::decide(false, Some("a@x.com"), None), None);
    }

    #[test]
    fn test_tokens_without_email_claim_are_denied() {
        assert_eq!(AccessDecision::decide(false, None, Some("a@x.com")), None);
    }
}

//! JWT token service
//!
//! Issues and verifies the portal's access tokens. Tokens are signed
//! with HMAC-SHA256 over a process-wide secret, carry a fixed 12-hour
//! expiry, and are stateless: there is no revocation list and no refresh
//! path — an expired token means re-authenticating.
//!
//! The issuer signs **whatever claim object it is given**. No field
//! whitelist is applied; this mirrors the portal's contract and is a
//! known weakness kept on purpose rather than silently hardened.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;

use crate::domain::Claims;
use crate::errors::AppError;

/// Fixed lifetime of every issued token.
pub const TOKEN_LIFETIME_HOURS: i64 = 12;

/// JWT issue/verify service
///
/// Holds the signing secret loaded once at startup; injected into the
/// request path with `web::Data`.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Signs an access token over the given claim object.
    ///
    /// `iat` and `exp` (now + 12h) are stamped into the payload; every
    /// other field is signed verbatim.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - payload is not a JSON object, or
    ///   encoding fails
    pub fn issue(&self, claims: Value) -> Result<String, AppError> {
        let Value::Object(mut payload) = claims else {
            return Err(AppError::InternalError(
                "token payload must be a JSON object".to_string(),
            ));
        };

        let now = Utc::now();
        let expiry = now + Duration::hours(TOKEN_LIFETIME_HOURS);
        payload.insert("iat".to_string(), Value::from(now.timestamp()));
        payload.insert("exp".to_string(), Value::from(expiry.timestamp()));

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &payload, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("token signing failed: {}", e)))
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - expired, malformed or wrongly
    ///   signed token
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("token expired".to_string())
                }
                _ => AppError::AuthenticationError("unauthorized access".to_string()),
            })
    }

    /// Pulls the token out of an `Authorization` header value.
    ///
    /// The token is the second whitespace-delimited segment (the scheme
    /// word itself is not inspected).
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - header has no second segment
    pub fn extract_header_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| AppError::AuthenticationError("unauthorized access".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> TokenService {
        TokenService::new("test-secret")
    }

    #[test]
    fn test_issue_verify_roundtrip_preserves_claims() {
        let tokens = service();
        let token = tokens
            .issue(json!({
                "email": "citizen@example.com",
                "name": "Citizen",
                "district": "Dhaka"
            }))
            .unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.email.as_deref(), Some("citizen@example.com"));
        assert_eq!(claims.extra["name"], json!("Citizen"));
        assert_eq!(claims.extra["district"], json!("Dhaka"));
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_HOURS * 3600);
    }

    #[test]
    fn test_claims_without_email_are_still_signed() {
        // No whitelist: any object is accepted verbatim.
        let tokens = service();
        let token = tokens.issue(json!({ "anything": [1, 2, 3] })).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.email, None);
        assert_eq!(claims.extra["anything"], json!([1, 2, 3]));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = service().issue(json!("just a string")).unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = service();

        // Hand-build a token whose expiry is well past the validation
        // leeway.
        let now = Utc::now().timestamp();
        let payload = json!({
            "email": "citizen@example.com",
            "iat": now - 13 * 3600,
            "exp": now - 3600,
        });
        let token = encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = tokens.verify(&token).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service().issue(json!({ "email": "a@x.com" })).unwrap();
        let other = TokenService::new("another-secret");

        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_header_token_is_second_segment() {
        let tokens = service();
        assert_eq!(tokens.extract_header_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        // The scheme word is not inspected.
        assert_eq!(tokens.extract_header_token("Token xyz").unwrap(), "xyz");
        assert!(tokens.extract_header_token("Bearer").is_err());
        assert!(tokens.extract_header_token("").is_err());
    }
}

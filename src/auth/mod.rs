//! Demo authentication for the admin area.
//!
//! Credentials are the two fixed demo pairs published on the login page.
//! Sessions are HS256 JWTs whose token id must also be present in an
//! in-memory session set, so logout revokes a token before its expiry.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use dashmap::DashMap;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;

/// The two demo credential pairs. Any other combination fails with one
/// uniform message; unknown email and wrong password are indistinguishable.
const DEMO_CREDENTIALS: [(&str, &str); 2] = [
    ("admin@shipco.com", "admin123"),
    ("demo@shipco.com", "demo123"),
];

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Claim structure for session tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (account email)
    pub jti: String, // Unique token id, keyed into the session set
    pub iat: i64,    // Issued at time
    pub exp: i64,    // Expiration time
}

/// Authenticated session data attached to requests by the middleware.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub email: String,
    pub token_id: String,
}

/// Authentication configuration
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    /// Fixed pause before the login verdict; the original site simulated
    /// gateway latency this way
    pub login_delay: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: String, token_ttl: Duration, login_delay: Duration) -> Self {
        Self {
            jwt_secret,
            token_ttl,
            login_delay,
        }
    }
}

/// A freshly issued session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

struct SessionEntry {
    email: String,
}

/// Issues and validates demo session tokens.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: AuthConfig,
    sessions: DashMap<String, SessionEntry>,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            config,
            sessions: DashMap::new(),
        }
    }

    /// Checks the pair against the demo credentials and issues a session
    /// token on success. The artificial delay runs before the verdict for
    /// success and failure alike.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, ServiceError> {
        if !self.config.login_delay.is_zero() {
            tokio::time::sleep(self.config.login_delay).await;
        }

        let matched = DEMO_CREDENTIALS
            .iter()
            .any(|(e, p)| *e == email && *p == password);
        if !matched {
            return Err(ServiceError::AuthError(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.issue(email)?;
        info!(email, "admin login succeeded");
        Ok(token)
    }

    fn issue(&self, email: &str) -> Result<IssuedToken, ServiceError> {
        let now = Utc::now();
        let expires_in = self.config.token_ttl.as_secs() as i64;
        let jti = Uuid::new_v4().to_string();

        let claims = Claims {
            sub: email.to_string(),
            jti: jti.clone(),
            iat: now.timestamp(),
            exp: now.timestamp() + expires_in,
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::InternalError(format!("token encoding failed: {}", e)))?;

        self.sessions.insert(
            jti,
            SessionEntry {
                email: email.to_string(),
            },
        );

        Ok(IssuedToken {
            access_token,
            expires_in,
        })
    }

    /// Verifies a bearer token: the signature and expiry must check out and
    /// the token id must still be in the session set.
    pub fn verify(&self, token: &str) -> Result<AuthSession, ServiceError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;

        let entry = self
            .sessions
            .get(&data.claims.jti)
            .ok_or_else(|| ServiceError::Unauthorized("Session has been logged out".to_string()))?;

        Ok(AuthSession {
            email: entry.email.clone(),
            token_id: data.claims.jti,
        })
    }

    /// Removes the session, invalidating its token. Revoking an unknown
    /// token id is a no-op.
    pub fn revoke(&self, token_id: &str) -> bool {
        let removed = self.sessions.remove(token_id).is_some();
        if removed {
            info!(token_id, "session revoked");
        }
        removed
    }
}

/// Middleware guarding the admin surface. Extracts the bearer token,
/// verifies it, and attaches the [`AuthSession`] to request extensions.
pub async fn require_session(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let token = bearer_token(&req)?;
    let session = auth.verify(&token)?;
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Result<String, ServiceError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ServiceError::Unauthorized("Missing authorization header".to_string()))?;

    header_value
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(|| ServiceError::Unauthorized("Expected a bearer token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn test_service() -> AuthService {
        AuthService::new(AuthConfig::new(
            "unit-test-secret-key-for-shipco-sessions".to_string(),
            Duration::from_secs(3600),
            Duration::ZERO,
        ))
    }

    #[tokio::test]
    async fn both_demo_pairs_log_in() {
        let auth = test_service();
        for (email, password) in DEMO_CREDENTIALS {
            let token = auth.login(email, password).await.unwrap();
            let session = auth.verify(&token.access_token).unwrap();
            assert_eq!(session.email, email);
        }
    }

    #[tokio::test]
    async fn wrong_pairs_fail_with_one_uniform_message() {
        let auth = test_service();
        let attempts = [
            ("admin@shipco.com", "wrong"),
            ("unknown@shipco.com", "admin123"),
            ("demo@shipco.com", "admin123"),
        ];
        for (email, password) in attempts {
            let err = auth.login(email, password).await.unwrap_err();
            assert_matches!(&err, ServiceError::AuthError(msg) if msg == INVALID_CREDENTIALS);
        }
    }

    #[tokio::test]
    async fn revoked_tokens_stop_verifying() {
        let auth = test_service();
        let token = auth.login("admin@shipco.com", "admin123").await.unwrap();
        let session = auth.verify(&token.access_token).unwrap();

        assert!(auth.revoke(&session.token_id));
        assert_matches!(
            auth.verify(&token.access_token),
            Err(ServiceError::Unauthorized(_))
        );

        // Revoking again is a no-op.
        assert!(!auth.revoke(&session.token_id));
    }

    #[tokio::test]
    async fn garbage_tokens_are_rejected() {
        let auth = test_service();
        assert_matches!(
            auth.verify("not-a-token"),
            Err(ServiceError::Unauthorized(_))
        );
    }
}

// ABOUTME: JWT-based caller identification for the Logbook API
// ABOUTME: Issues and verifies HS256 bearer tokens and resolves them to a CallerIdentity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! # Authentication
//!
//! Every service operation takes an explicit [`CallerIdentity`]. The HTTP
//! layer obtains one from the `Authorization: Bearer <jwt>` header through
//! [`AuthManager::authenticate`]; there is no ambient principal.

use crate::constants::{limits::JWT_SECRET_BYTES, service_names};
use crate::logging::AppLogger;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use logbook_core::errors::{AppError, AppResult};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// The authenticated user on whose behalf an operation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallerIdentity {
    /// Id of the calling user; compared against resource owner ids
    pub user_id: Uuid,
}

impl CallerIdentity {
    /// Identity for the given user id
    #[must_use]
    pub const fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

/// `JWT` validation error with detailed information
#[derive(Debug, Clone, Error)]
pub enum JwtValidationError {
    /// Token has expired
    #[error("JWT token expired (checked at {})", .checked_at.format("%Y-%m-%d %H:%M:%S UTC"))]
    TokenExpired {
        /// When the expiry was detected
        checked_at: DateTime<Utc>,
    },
    /// Token signature or claims are invalid
    #[error("JWT token is invalid: {reason}")]
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is not a well-formed `JWT`
    #[error("JWT token is malformed: {details}")]
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

/// `JWT` claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Audience (who the token is intended for)
    pub aud: String,
}

/// Issues and verifies bearer tokens
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new authentication manager from a shared HS256 secret
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
        }
    }

    /// Generate a signed token whose subject is `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT` encoding fails
    pub fn generate_token(&self, user_id: Uuid) -> AppResult<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            aud: service_names::LOGBOOK_SERVER.to_owned(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] if the token is expired, has a bad
    /// signature, targets another audience, or is not a `JWT`
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[service_names::LOGBOOK_SERVER]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))
    }

    /// Convert JWT library errors to detailed validation errors
    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> JwtValidationError {
        debug!("JWT token validation failed: {e:?}");

        match e.kind() {
            ErrorKind::ExpiredSignature => JwtValidationError::TokenExpired {
                checked_at: Utc::now(),
            },
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            ErrorKind::InvalidAudience => JwtValidationError::TokenInvalid {
                reason: "Token was issued for another audience".into(),
            },
            ErrorKind::InvalidToken => JwtValidationError::TokenMalformed {
                details: "Token format is invalid".into(),
            },
            ErrorKind::Base64(base64_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid base64: {base64_err}"),
            },
            ErrorKind::Json(json_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid JSON: {json_err}"),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {e}"),
            },
        }
    }

    /// Resolve an `Authorization` header value to the calling user
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when the header is absent and `AuthInvalid`
    /// when it is not a valid bearer token with a UUID subject
    pub fn authenticate(&self, authorization: Option<&str>) -> AppResult<CallerIdentity> {
        let header = authorization.ok_or_else(AppError::auth_required)?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::auth_invalid("Authorization header must be 'Bearer <token>'")
            })?;

        let claims = self.validate_token(token).map_err(|e| {
            AppLogger::log_security_event("token_rejected", "low", &e.to_string(), None);
            AppError::auth_invalid(e.to_string())
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
            warn!(sub = %claims.sub, "Token subject is not a user id");
            AppError::auth_invalid(format!("Invalid user ID in token: {e}"))
        })?;

        Ok(CallerIdentity::new(user_id))
    }
}

/// Generate a random `JWT` secret
///
/// # Errors
///
/// Returns an error if the system RNG fails
pub fn generate_jwt_secret() -> anyhow::Result<[u8; JWT_SECRET_BYTES]> {
    let mut secret = [0u8; JWT_SECRET_BYTES];
    OsRng.try_fill_bytes(&mut secret).map_err(|e| {
        error!("Failed to generate JWT secret: {e}");
        anyhow::anyhow!("System RNG failure - cannot generate JWT secret")
    })?;
    Ok(secret)
}

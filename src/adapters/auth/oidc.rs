//! OIDC adapter for bearer-token verification.
//!
//! Implements `TokenVerifier` against any standards-compliant OIDC provider
//! (Keycloak, Zitadel, Auth0):
//!
//! 1. Discover `jwks_uri` from `{issuer}/.well-known/openid-configuration`
//! 2. Fetch and cache the JWKS for the configured TTL
//! 3. Validate signature, issuer, audience and expiry
//! 4. Map claims to `VerifiedClaims`
//!
//! Keys are fetched lazily on the first request, so startup never blocks on
//! the identity provider.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{
    decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, TokenData, Validation,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, SubjectId, VerifiedClaims};
use crate::ports::TokenVerifier;

const DEFAULT_JWKS_TTL: Duration = Duration::from_secs(3600);
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the OIDC verifier.
#[derive(Debug, Clone)]
pub struct OidcConfig {
    /// Issuer URL. Must equal the `iss` claim exactly.
    pub issuer_url: String,

    /// Audience that tokens must carry.
    pub audience: String,

    /// How long fetched keys stay valid before being refetched.
    pub jwks_cache_ttl: Duration,
}

impl OidcConfig {
    pub fn new(issuer_url: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer_url: issuer_url.into(),
            audience: audience.into(),
            jwks_cache_ttl: DEFAULT_JWKS_TTL,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.jwks_cache_ttl = ttl;
        self
    }

    fn discovery_url(&self) -> String {
        format!(
            "{}/.well-known/openid-configuration",
            self.issuer_url.trim_end_matches('/')
        )
    }
}

/// The part of the discovery document we use.
#[derive(Debug, Deserialize)]
struct DiscoveryDocument {
    jwks_uri: String,
}

/// Claims read from an access token.
#[derive(Debug, Deserialize)]
struct AccessClaims {
    sub: String,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    preferred_username: Option<String>,

    #[serde(default)]
    name: Option<String>,
}

impl AccessClaims {
    /// Display name prefers `preferred_username`, then `name`.
    fn into_verified(self) -> Result<VerifiedClaims, AuthError> {
        let subject = SubjectId::new(self.sub).map_err(|_| {
            tracing::warn!("Token has an empty subject");
            AuthError::InvalidToken
        })?;

        let display_name = self
            .preferred_username
            .or(self.name)
            .unwrap_or_default();

        Ok(VerifiedClaims::new(
            subject,
            self.email.unwrap_or_default(),
            display_name,
        ))
    }
}

struct JwksCache {
    jwks: JwkSet,
    fetched_at: Instant,
    ttl: Duration,
}

impl JwksCache {
    fn new(jwks: JwkSet, ttl: Duration) -> Self {
        Self {
            jwks,
            fetched_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.fetched_at.elapsed() > self.ttl
    }
}

/// OIDC bearer-token verifier.
pub struct OidcTokenVerifier {
    config: OidcConfig,
    http_client: reqwest::Client,
    jwks_cache: Arc<RwLock<Option<JwksCache>>>,
}

impl OidcTokenVerifier {
    /// Create a verifier. Does not contact the provider.
    pub fn new(config: OidcConfig) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| AuthError::service_unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            jwks_cache: Arc::new(RwLock::new(None)),
        })
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AuthError> {
        tracing::debug!(url, "Fetching identity provider document");

        let response = self.http_client.get(url).send().await.map_err(|e| {
            tracing::error!(url, error = %e, "Identity provider request failed");
            AuthError::service_unavailable(format!("Request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url, %status, "Identity provider returned an error status");
            return Err(AuthError::service_unavailable(format!(
                "{} returned {}",
                url, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!(url, error = %e, "Identity provider returned malformed JSON");
            AuthError::service_unavailable(format!("Malformed response from {}: {}", url, e))
        })
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AuthError> {
        let discovery: DiscoveryDocument = self.fetch_json(&self.config.discovery_url()).await?;
        let jwks: JwkSet = self.fetch_json(&discovery.jwks_uri).await?;
        tracing::debug!(keys = jwks.keys.len(), "Fetched JWKS");
        Ok(jwks)
    }

    async fn get_jwks(&self) -> Result<JwkSet, AuthError> {
        {
            let cache = self.jwks_cache.read().await;
            if let Some(ref cached) = *cache {
                if !cached.is_expired() {
                    return Ok(cached.jwks.clone());
                }
            }
        }

        let jwks = self.fetch_jwks().await?;
        *self.jwks_cache.write().await =
            Some(JwksCache::new(jwks.clone(), self.config.jwks_cache_ttl));

        Ok(jwks)
    }

    fn find_decoding_key(
        header: &jsonwebtoken::Header,
        jwks: &JwkSet,
    ) -> Result<(DecodingKey, Algorithm), AuthError> {
        let kid = header.kid.as_ref().ok_or_else(|| {
            tracing::warn!("JWT missing 'kid' header");
            AuthError::InvalidToken
        })?;

        let jwk = jwks.find(kid).ok_or_else(|| {
            tracing::warn!(kid, "No matching key in JWKS");
            AuthError::InvalidToken
        })?;

        use jsonwebtoken::jwk::KeyAlgorithm;
        let algorithm = match jwk.common.key_algorithm {
            Some(KeyAlgorithm::RS256) | None => Algorithm::RS256,
            Some(KeyAlgorithm::RS384) => Algorithm::RS384,
            Some(KeyAlgorithm::RS512) => Algorithm::RS512,
            Some(KeyAlgorithm::ES256) => Algorithm::ES256,
            Some(KeyAlgorithm::ES384) => Algorithm::ES384,
            Some(other) => {
                tracing::warn!(?other, "Unsupported JWK algorithm");
                return Err(AuthError::InvalidToken);
            }
        };

        let key = DecodingKey::from_jwk(jwk).map_err(|e| {
            tracing::warn!(error = %e, "Failed to build decoding key");
            AuthError::InvalidToken
        })?;

        Ok((key, algorithm))
    }

    fn validate_token(
        &self,
        token: &str,
        key: &DecodingKey,
        algorithm: Algorithm,
    ) -> Result<TokenData<AccessClaims>, AuthError> {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&self.config.issuer_url]);
        validation.set_audience(&[&self.config.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        decode::<AccessClaims>(token, key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Invalid audience in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!(error = %e, "Token validation failed");
                    AuthError::InvalidToken
                }
            }
        })
    }
}

#[async_trait]
impl TokenVerifier for OidcTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedClaims, AuthError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!(error = %e, "Failed to decode JWT header");
            AuthError::InvalidToken
        })?;

        let jwks = self.get_jwks().await?;
        let (key, algorithm) = Self::find_decoding_key(&header, &jwks)?;
        let data = self.validate_token(token, &key, algorithm)?;

        data.claims.into_verified()
    }
}

impl std::fmt::Debug for OidcTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OidcTokenVerifier")
            .field("issuer_url", &self.config.issuer_url)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

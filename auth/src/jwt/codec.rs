use chrono::DateTime;
use chrono::FixedOffset;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;

/// Signed, expiring token encoder/decoder.
///
/// Holds the shared secret, the HMAC algorithm and the deployment timezone used to
/// compute issuance instants. Build once at startup and share.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    timezone: FixedOffset,
}

impl TokenCodec {
    /// Create a new codec.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret
    /// * `algorithm` - HMAC algorithm (HS256, HS384 or HS512)
    /// * `timezone` - Offset in which "now" is computed when issuing tokens
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm cannot sign with a shared secret
    pub fn new(
        secret: &[u8],
        algorithm: Algorithm,
        timezone: FixedOffset,
    ) -> Result<Self, JwtError> {
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(JwtError::UnsupportedAlgorithm(format!("{:?}", algorithm)));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            timezone,
        })
    }

    /// Current instant in the configured timezone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.timezone)
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing library failure
    pub fn encode<R: Serialize>(&self, claims: &Claims<R>) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// The signature is checked before expiry, so `Expired` is only reported for tokens
    /// this codec actually signed.
    ///
    /// # Errors
    /// * `Expired` - Signature valid but `exp` is not in the future
    /// * `Invalid` - Malformed token, bad signature, wrong algorithm or unexpected claims
    pub fn decode<R: DeserializeOwned>(&self, token: &str) -> Result<Claims<R>, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims<R>>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    _ => JwtError::Invalid(e.to_string()),
                }
            })?;

        // jsonwebtoken accepts exp == now; a token expiring this second is already dead
        if token_data.claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(token_data.claims)
    }
}

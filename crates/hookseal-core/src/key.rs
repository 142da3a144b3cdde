//! Public key material: JWK (RFC 7517) for P-256.

use p256::ecdsa::VerifyingKey;
use p256::{EncodedPoint, FieldBytes};
use serde::{Deserialize, Serialize};

use crate::base64url;
use crate::der::COMPONENT_LEN;
use crate::error::{VerifyError, VerifyResult};

/// EC public key in JWK form (subset of fields needed for verification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcJwk {
    /// Key type, must be `EC`.
    pub kty: String,

    /// Curve, must be `P-256`.
    pub crv: String,

    /// X coordinate (base64url).
    pub x: String,

    /// Y coordinate (base64url).
    pub y: String,

    /// Optional algorithm hint; when present it must be ES256.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl EcJwk {
    /// JWK for an existing verifying key.
    pub fn from_verifying_key(key: &VerifyingKey) -> Self {
        let point = key.to_encoded_point(false);
        Self {
            kty: "EC".to_string(),
            crv: "P-256".to_string(),
            x: point.x().map(base64url::encode).unwrap_or_default(),
            y: point.y().map(base64url::encode).unwrap_or_default(),
            alg: None,
            kid: None,
        }
    }

    /// Build the P-256 verifying key.
    pub fn to_verifying_key(&self) -> VerifyResult<VerifyingKey> {
        if self.kty != "EC" {
            return Err(VerifyError::invalid_key(format!(
                "unsupported key type: {}",
                self.kty
            )));
        }
        if self.crv != "P-256" {
            return Err(VerifyError::invalid_key(format!(
                "unsupported curve: {}",
                self.crv
            )));
        }
        if let Some(alg) = self.alg.as_deref() {
            if alg != crate::token::SUPPORTED_ALGORITHM {
                return Err(VerifyError::invalid_key(format!(
                    "key is bound to algorithm {}",
                    alg
                )));
            }
        }

        let x = coordinate("x", &self.x)?;
        let y = coordinate("y", &self.y)?;
        let point = EncodedPoint::from_affine_coordinates(&x, &y, false);
        VerifyingKey::from_encoded_point(&point)
            .map_err(|_| VerifyError::invalid_key("point is not on the P-256 curve"))
    }
}

fn coordinate(name: &str, value: &str) -> VerifyResult<FieldBytes> {
    let bytes = base64url::decode(value)
        .map_err(|e| VerifyError::invalid_key(format!("invalid base64url in {}: {}", name, e)))?;
    if bytes.len() != COMPONENT_LEN {
        return Err(VerifyError::invalid_key(format!(
            "{} coordinate must be {} bytes, got {}",
            name,
            COMPONENT_LEN,
            bytes.len()
        )));
    }
    Ok(*FieldBytes::from_slice(&bytes))
}

/// Public key material as carried by the request: base64 of the JWK JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyMaterial {
    jwk: EcJwk,
}

impl PublicKeyMaterial {
    /// Parse the transport form (base64 of JWK JSON, either alphabet).
    pub fn from_base64(encoded: &str) -> VerifyResult<Self> {
        let json = base64url::decode(encoded.trim())
            .map_err(|e| VerifyError::invalid_key(format!("invalid base64 key: {}", e)))?;
        Self::from_json(&json)
    }

    /// Parse raw JWK JSON.
    pub fn from_json(json: &[u8]) -> VerifyResult<Self> {
        let jwk: EcJwk = serde_json::from_slice(json)
            .map_err(|e| VerifyError::invalid_key(format!("invalid JWK: {}", e)))?;
        Ok(Self { jwk })
    }

    pub fn jwk(&self) -> &EcJwk {
        &self.jwk
    }

    pub fn verifying_key(&self) -> VerifyResult<VerifyingKey> {
        self.jwk.to_verifying_key()
    }

    /// Transport form of a verifying key.
    pub fn encode(key: &VerifyingKey) -> String {
        use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
        let jwk = EcJwk::from_verifying_key(key);
        // EcJwk holds only strings; serialization cannot fail.
        let json = serde_json::to_vec(&jwk).unwrap_or_default();
        BASE64.encode(json)
    }
}

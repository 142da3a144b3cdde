//! Webhook request verification with ES256 compact tokens.
//!
//! A sender signs a compact token (JWS, `alg: ES256`) whose payload carries a
//! SHA-256 digest of the request body. This crate checks, for one request:
//!
//! - the token is well-formed and declares ES256
//! - the signature verifies against the sender's P-256 JWK
//! - the body hashes, after canonicalization, to the signed digest
//!
//! # Quick Start
//!
//! ```no_run
//! use hookseal_core::{Verifier, VerifierConfig, VerifyRequest};
//!
//! let verifier = Verifier::new(VerifierConfig::from_env());
//! let outcome = verifier.verify(&VerifyRequest::new("eyJ...", "eyJrdHkiOi...", "eyJldmVudCI6..."));
//! if outcome.is_accepted() {
//!     println!("authentic");
//! } else {
//!     println!("rejected: {} ({})", outcome.reason, outcome.http_status);
//! }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `HOOKSEAL_DIGEST_CLAIM` | Payload claim with the body digest (default: `request_body_sha256`) |
//! | `HOOKSEAL_MAX_BODY_BYTES` | Decoded body limit (default: 1 MiB) |
//! | `HOOKSEAL_LOG_CANONICAL_BODY` | Log canonical bodies at debug level (default: false) |

pub mod base64url;
pub mod canonicalize;
pub mod config;
pub mod der;
pub mod digest;
pub mod error;
pub mod key;
pub mod observer;
pub mod outcome;
pub mod signature;
pub mod token;
pub mod verify;

// Re-export main types
pub use canonicalize::{canonical_body, CanonicalBody, CanonicalizeError};
pub use config::VerifierConfig;
pub use der::{to_standard_encoding, RawSignature, StandardSignature};
pub use digest::{actual_digest, expected_digest, sha256_hex, BodyDigest};
pub use error::{VerifyError, VerifyResult};
pub use key::{EcJwk, PublicKeyMaterial};
pub use observer::{DigestReport, NullObserver, TracingObserver, VerifyObserver};
pub use outcome::{Reason, VerificationOutcome, VerifyResponse};
pub use token::{DecodedToken, SUPPORTED_ALGORITHM};
pub use verify::{verify_request, Verifier, VerifyRequest};

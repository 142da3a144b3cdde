use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;
use hookseal_core::VerifierConfig;

#[derive(Parser, Debug)]
#[command(
    name = "hookseal",
    version,
    about = "Verify ES256-signed webhook requests and their body digests"
)]
pub struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify one request and print the JSON response
    Verify(VerifyArgs),
    /// Serve POST /api/verifyJWT over HTTP
    Serve(ServeArgs),
    /// Print the canonical form of a body and its SHA-256 digest
    Digest(DigestArgs),
}

/// Overrides for `HOOKSEAL_*` verifier settings.
#[derive(Args, Debug, Clone, Default)]
pub struct VerifierArgs {
    /// Payload claim holding the body digest
    #[arg(long)]
    pub digest_claim: Option<String>,

    /// Decoded body size limit in bytes
    #[arg(long)]
    pub max_body_bytes: Option<usize>,

    /// Log the canonical body at debug level
    #[arg(long)]
    pub log_canonical_body: bool,
}

impl VerifierArgs {
    /// Environment config with flags applied on top.
    pub fn to_config(&self) -> VerifierConfig {
        let mut config = VerifierConfig::from_env();
        if let Some(claim) = &self.digest_claim {
            config = config.with_digest_claim(claim.clone());
        }
        if let Some(limit) = self.max_body_bytes {
            config = config.with_max_body_bytes(limit);
        }
        if self.log_canonical_body {
            config = config.with_log_canonical_body(true);
        }
        config
    }
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Request JSON ({"token", "publicKey", "body"}) file, or "-" for stdin
    #[arg(long, conflicts_with_all = ["token", "public_key", "body", "body_file"])]
    pub request: Option<String>,

    /// Compact ES256 token
    #[arg(long, alias = "jwt")]
    pub token: Option<String>,

    /// Base64 of the signer's JWK
    #[arg(long)]
    pub public_key: Option<String>,

    /// Base64 of the request body
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Raw request body file (encoded before verification)
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// Print nothing; report through the exit code only
    #[arg(long, short)]
    pub quiet: bool,

    #[command(flatten)]
    pub verifier: VerifierArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen address (overrides HOOKSEAL_BIND)
    #[arg(long)]
    pub bind: Option<std::net::SocketAddr>,

    /// Request size limit in bytes (overrides HOOKSEAL_MAX_REQUEST_BYTES)
    #[arg(long)]
    pub max_request_bytes: Option<usize>,

    #[command(flatten)]
    pub verifier: VerifierArgs,
}

#[derive(Args, Debug, Clone)]
pub struct DigestArgs {
    /// Base64 of the request body
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub body: Option<String>,

    /// Raw request body file, or "-" for stdin
    #[arg(long)]
    pub file: Option<String>,

    #[command(flatten)]
    pub verifier: VerifierArgs,
}

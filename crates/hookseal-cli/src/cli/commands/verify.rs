use anyhow::{Context, Result};
use hookseal_core::{base64url, Verifier, VerifyRequest};

use super::read_input;
use crate::cli::args::VerifyArgs;
use crate::exit_codes;

pub fn run(args: VerifyArgs) -> Result<i32> {
    let request = build_request(&args)?;
    let verifier = Verifier::new(args.verifier.to_config());

    let outcome = verifier.verify(&request);
    if !args.quiet {
        println!("{}", serde_json::to_string(&outcome.to_response())?);
    }
    Ok(exit_codes::for_reason(outcome.reason))
}

fn build_request(args: &VerifyArgs) -> Result<VerifyRequest> {
    if let Some(path) = &args.request {
        let text = read_input(path)?;
        return Ok(parse_request(&text));
    }

    let body = match &args.body_file {
        Some(path) => {
            let raw = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Some(base64url::encode(raw))
        }
        None => args.body.clone(),
    };

    Ok(VerifyRequest {
        token: args.token.clone(),
        public_key: args.public_key.clone(),
        body,
    })
}

/// An unparsable request carries no usable fields.
fn parse_request(text: &str) -> VerifyRequest {
    serde_json::from_str(text).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "request is not valid JSON");
        VerifyRequest::default()
    })
}

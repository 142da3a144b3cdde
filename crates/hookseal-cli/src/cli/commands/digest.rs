use anyhow::Result;
use hookseal_core::{actual_digest, base64url};

use super::read_input;
use crate::cli::args::DigestArgs;
use crate::exit_codes;

/// Print the canonical body followed by its digest on the last line.
///
/// Uses the same body limit as `verify`.
pub fn run(args: DigestArgs) -> Result<i32> {
    let config = args.verifier.to_config();
    let body_b64 = match (&args.body, &args.file) {
        (Some(body), _) => body.clone(),
        (None, Some(path)) => base64url::encode(read_input(path)?),
        (None, None) => anyhow::bail!("either --body or --file is required"),
    };

    match actual_digest(&body_b64, config.max_body_bytes) {
        Ok(digest) => {
            println!("{}", digest.canonical);
            println!("{}", digest.hex);
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            eprintln!("error: {e}");
            Ok(exit_codes::INVALID_INPUT)
        }
    }
}

use anyhow::Result;
use hookseal_core::Verifier;

use crate::cli::args::ServeArgs;
use crate::exit_codes;
use crate::server::{self, ServerConfig};

pub async fn run(args: ServeArgs) -> Result<i32> {
    let mut config = ServerConfig::from_env();
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(limit) = args.max_request_bytes {
        config.max_request_bytes = limit;
    }

    let verifier = Verifier::new(args.verifier.to_config());
    tracing::info!(config = ?verifier.config(), "verifier configured");

    server::serve(config, verifier).await?;
    Ok(exit_codes::SUCCESS)
}

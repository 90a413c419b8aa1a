//! House Price Service - Main Entry Point

use api::{init_logging, run_server, AppState, Settings};
use price_model::{ForestArtifact, Predictor};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== House Price Service v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;
    info!(model_path = %settings.model_path, "loading model artifact");

    // A missing artifact is not fatal: the server comes up degraded and
    // every prediction fails with ModelUnavailable until it is fixed.
    let predictor = match ForestArtifact::load(&settings.model_path) {
        Ok(forest) => Predictor::new(Arc::new(forest)),
        Err(err) => {
            error!(error = %err, "model artifact failed to load, serving degraded");
            Predictor::uninitialized()
        }
    };

    let state = Arc::new(AppState::new(predictor));
    run_server(&settings.listen_addr, state).await?;

    Ok(())
}

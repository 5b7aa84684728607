use std::sync::Arc;

use glossa_client::{ExplanationClient, GeminiClient};
use glossa_speech::{CommandSpeaker, NullSpeaker, Speaker};
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::controller::AppController;
use crate::state::AppState;

mod controller;
mod events;
mod io;
mod profile;
mod render;
mod state;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = profile::load_config()?;
    let state = Arc::new(AppState::new(config));

    let (client, speaker) = {
        let config = state.config.read().await;

        if config.client.api_key.is_empty() {
            tracing::warn!("GEMINI_API_KEY is not set, lookups will fail");
        }

        let client = ExplanationClient::new(GeminiClient::new(&config.client));
        let speaker: Arc<dyn Speaker> = if config.speech.enabled {
            Arc::new(CommandSpeaker::new(&config.speech))
        } else {
            Arc::new(NullSpeaker)
        };

        (client, speaker)
    };

    render::show_welcome();

    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(client, speaker);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    Ok(())
}

use std::sync::Arc;

use glossa_client::{ExplanationClient, TextGenerator};
use glossa_config::reveal::RevealConfig;
use glossa_core::reveal::RevealController;
use glossa_speech::Speaker;
use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};

use crate::render;
use crate::state::AppState;

pub mod lookup;

use lookup::{handle_resolution, handle_submission};

/// App's main loop: the one interaction thread of control. It owns the
/// reveal controller, so every state transition happens here; the only other
/// task touching a lookup is the fetch it spawns, which reports back through
/// `feedback_tx`.
pub async fn event_loop<G>(
    state: Arc<AppState>,
    event_rx: AsyncReceiver<AppEvent>,
    feedback_tx: AsyncSender<AppEvent>,
    client: ExplanationClient<G>,
    speaker: Arc<dyn Speaker>,
) -> anyhow::Result<()>
where
    G: TextGenerator + Clone + Send + Sync + 'static,
{
    let reveal = {
        let config = state.config.read().await;
        config.reveal.clone()
    };

    let mut controller = RevealController::new();

    tracing::info!("event loop started, waiting for queries");
    loop {
        let event = event_rx.recv().await?;
        handle_event(
            &mut controller,
            &client,
            speaker.as_ref(),
            &feedback_tx,
            &reveal,
            event,
        )
        .await?;
    }
}

pub(crate) async fn handle_event<G>(
    controller: &mut RevealController,
    client: &ExplanationClient<G>,
    speaker: &dyn Speaker,
    feedback_tx: &AsyncSender<AppEvent>,
    reveal: &RevealConfig,
    event: AppEvent,
) -> anyhow::Result<()>
where
    G: TextGenerator + Clone + Send + Sync + 'static,
{
    match event {
        AppEvent::SubmitQuery(text) => {
            handle_submission(controller, client, feedback_tx, text).await?;
        }
        AppEvent::FetchResolved(raw) => {
            handle_resolution(controller, speaker, reveal, raw).await?;
        }
        AppEvent::LookupFailed => {
            controller.fail();
            render::show_error();
        }
    }

    Ok(())
}

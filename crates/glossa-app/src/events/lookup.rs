use glossa_client::{ExplanationClient, TextGenerator};
use glossa_config::reveal::RevealConfig;
use glossa_core::parse::parse;
use glossa_core::preprocess::{DefaultPreprocessor, Preprocessor};
use glossa_core::reveal::RevealController;
use glossa_speech::Speaker;
use glossa_types::AppEvent;
use kanal::AsyncSender;

use crate::render;

/// Run one accepted submission: spawn the single fetch for it. Duplicate
/// submissions while a fetch is outstanding are dropped by the controller.
pub async fn handle_submission<G>(
    controller: &mut RevealController,
    client: &ExplanationClient<G>,
    feedback_tx: &AsyncSender<AppEvent>,
    text: String,
) -> anyhow::Result<()>
where
    G: TextGenerator + Clone + Send + Sync + 'static,
{
    let query = DefaultPreprocessor.process(&text);

    let Some(query) = controller.submit(&query) else {
        if controller.is_loading() {
            tracing::debug!("submission ignored, lookup already in flight");
        } else {
            tracing::debug!("submission ignored, empty query");
        }
        return Ok(());
    };

    render::show_loading();

    let client = client.clone();
    let feedback = feedback_tx.clone();
    tokio::spawn(async move {
        let event = match client.fetch(&query).await {
            Ok(raw) => AppEvent::FetchResolved(raw),
            Err(e) => {
                tracing::error!("lookup for '{}' failed: {}", query, e);
                AppEvent::LookupFailed
            }
        };

        if let Err(e) = feedback.send(event).await {
            tracing::error!("failed to report fetch result: {}", e);
        }
    });

    Ok(())
}

/// Parse the raw response, move the controller to `Ready`, kick speech for
/// the headword and run the staged reveal.
pub async fn handle_resolution(
    controller: &mut RevealController,
    speaker: &dyn Speaker,
    reveal: &RevealConfig,
    raw: String,
) -> anyhow::Result<()> {
    let fallback = controller.pending_query().unwrap_or_default().to_string();
    let parsed = parse(&raw, &fallback);

    tracing::debug!(
        "parsed '{}': {} examples, {} synonyms, {} antonyms",
        parsed.headword,
        parsed.examples.len(),
        parsed.synonyms.len(),
        parsed.antonyms.len()
    );

    speaker.speak(&parsed.headword);
    controller.complete(parsed);
    render::reveal(controller, reveal).await?;

    Ok(())
}

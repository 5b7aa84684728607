use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use glossa_client::{ExplanationClient, GenerateError, ProviderMetadata, TextGenerator};
use glossa_config::reveal::RevealConfig;
use glossa_core::reveal::{Phase, RevealController};
use glossa_speech::NullSpeaker;
use glossa_types::AppEvent;
use tokio::time::timeout;

use crate::events::handle_event;

const EPHEMERAL: &str = "\
ephemeral - lasting for a very short time.
PRONUNCIATION: [ih-FEM-er-uhl]
1. The beauty of cherry blossoms is ephemeral.
SYNONYMS: fleeting, transient, momentary
ANTONYMS: permanent, lasting, enduring
Перевод: эфемерный
ИДИОМЫ: none";

fn metadata(name: &str) -> ProviderMetadata {
    ProviderMetadata {
        name: name.to_string(),
        model: "mock".to_string(),
    }
}

/// Answers every prompt with the same canned payload, after a delay
#[derive(Clone)]
struct CannedGenerator {
    text: Option<String>,
    delay_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl CannedGenerator {
    fn new(text: Option<&str>, delay_ms: u64) -> Self {
        Self {
            text: text.map(str::to_string),
            delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        Ok(self.text.clone())
    }

    fn metadata(&self) -> ProviderMetadata {
        metadata("canned")
    }
}

#[derive(Clone)]
struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, GenerateError> {
        Err(GenerateError::ApiError("HTTP 500".to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        metadata("failing")
    }
}

#[tokio::test(start_paused = true)]
async fn successful_lookup_reaches_ready_and_reveals() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let client = ExplanationClient::new(CannedGenerator::new(Some(EPHEMERAL), 10));
    let mut controller = RevealController::new();
    let reveal = RevealConfig::default();

    handle_event(
        &mut controller,
        &client,
        &NullSpeaker,
        &tx,
        &reveal,
        AppEvent::SubmitQuery("ephemeral".to_string()),
    )
    .await
    .expect("submission failed");
    assert!(controller.is_loading());

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("fetch never resolved")
        .expect("channel closed");
    assert!(matches!(event, AppEvent::FetchResolved(_)));

    handle_event(&mut controller, &client, &NullSpeaker, &tx, &reveal, event)
        .await
        .expect("resolution failed");

    assert_eq!(controller.phase(), Phase::Ready);
    let parsed = controller.explanation().expect("no explanation stored");
    assert_eq!(parsed.headword, "ephemeral");
    assert_eq!(parsed.translation, "эфемерный");
    assert!(controller.typing_done());
}

#[tokio::test(start_paused = true)]
async fn service_failure_ends_failed_with_nothing_stored() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let client = ExplanationClient::new(FailingGenerator);
    let mut controller = RevealController::new();
    let reveal = RevealConfig::default();

    handle_event(
        &mut controller,
        &client,
        &NullSpeaker,
        &tx,
        &reveal,
        AppEvent::SubmitQuery("ephemeral".to_string()),
    )
    .await
    .expect("submission failed");

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("fetch never resolved")
        .expect("channel closed");
    assert!(matches!(event, AppEvent::LookupFailed));

    handle_event(&mut controller, &client, &NullSpeaker, &tx, &reveal, event)
        .await
        .expect("failure handling failed");

    assert_eq!(controller.phase(), Phase::Failed);
    assert!(controller.explanation().is_none());
}

#[tokio::test(start_paused = true)]
async fn empty_response_ends_failed() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let client = ExplanationClient::new(CannedGenerator::new(None, 0));
    let mut controller = RevealController::new();
    let reveal = RevealConfig::default();

    handle_event(
        &mut controller,
        &client,
        &NullSpeaker,
        &tx,
        &reveal,
        AppEvent::SubmitQuery("ephemeral".to_string()),
    )
    .await
    .expect("submission failed");

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("fetch never resolved")
        .expect("channel closed");
    assert!(matches!(event, AppEvent::LookupFailed));

    handle_event(&mut controller, &client, &NullSpeaker, &tx, &reveal, event)
        .await
        .expect("failure handling failed");

    assert_eq!(controller.phase(), Phase::Failed);
}

#[tokio::test(start_paused = true)]
async fn duplicate_submission_spawns_exactly_one_fetch() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let generator = CannedGenerator::new(Some(EPHEMERAL), 500);
    let calls = generator.calls.clone();
    let client = ExplanationClient::new(generator);
    let mut controller = RevealController::new();
    let reveal = RevealConfig::default();

    for query in ["ephemeral", "ephemeral"] {
        handle_event(
            &mut controller,
            &client,
            &NullSpeaker,
            &tx,
            &reveal,
            AppEvent::SubmitQuery(query.to_string()),
        )
        .await
        .expect("submission failed");
    }

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("fetch never resolved")
        .expect("channel closed");
    assert!(matches!(event, AppEvent::FetchResolved(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Nothing else in flight
    let second = timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(second.is_err(), "second fetch should never have started");
}

#[tokio::test(start_paused = true)]
async fn resubmission_clears_the_previous_explanation() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let client = ExplanationClient::new(CannedGenerator::new(Some(EPHEMERAL), 10));
    let mut controller = RevealController::new();
    let reveal = RevealConfig::default();

    handle_event(
        &mut controller,
        &client,
        &NullSpeaker,
        &tx,
        &reveal,
        AppEvent::SubmitQuery("ephemeral".to_string()),
    )
    .await
    .expect("submission failed");
    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("fetch never resolved")
        .expect("channel closed");
    handle_event(&mut controller, &client, &NullSpeaker, &tx, &reveal, event)
        .await
        .expect("resolution failed");
    assert!(controller.explanation().is_some());

    // New submission clears the stored result before its fetch resolves
    handle_event(
        &mut controller,
        &client,
        &NullSpeaker,
        &tx,
        &reveal,
        AppEvent::SubmitQuery("fleeting".to_string()),
    )
    .await
    .expect("submission failed");

    assert!(controller.is_loading());
    assert!(controller.explanation().is_none());
    assert_eq!(controller.pending_query(), Some("fleeting"));
}

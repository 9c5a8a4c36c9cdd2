//! Extraction orchestration: one guarded network round trip that fills the
//! model from a topic or pasted text.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{
    AppError, InputMode, PromptModel, SYSTEM_INSTRUCTION, build_instruction, clamp_section_count,
    normalize_reply,
};
use crate::ports::{CompletionClient, CompletionRequest};

/// Result of one extraction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// The reply was normalized and applied to the model.
    Applied,
    /// Required topic/text was empty; nothing happened.
    SkippedEmptyInput,
    /// Another extraction is already in flight; the attempt was rejected.
    Busy,
}

/// Single-flight extractor around a completion client.
///
/// At most one extraction runs at a time, guaranteed by an atomic busy flag
/// rather than a queue: a second attempt while one is outstanding is rejected
/// as [`ExtractOutcome::Busy`] without touching the network or the model.
pub struct Extractor<C: CompletionClient> {
    client: C,
    in_flight: AtomicBool,
}

impl<C: CompletionClient> Extractor<C> {
    pub fn new(client: C) -> Self {
        Self { client, in_flight: AtomicBool::new(false) }
    }

    /// Whether an extraction is currently outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run one extraction and apply the result to `model`.
    ///
    /// On any error the model is left exactly as it was; a half-parsed reply
    /// is never applied.
    pub fn extract(
        &self,
        model: &mut PromptModel,
        model_id: &str,
    ) -> Result<ExtractOutcome, AppError> {
        let source = match model.input_mode {
            InputMode::Topic => model.topic.trim().to_string(),
            InputMode::Text => model.source_text.trim().to_string(),
        };
        if source.is_empty() {
            return Ok(ExtractOutcome::SkippedEmptyInput);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Ok(ExtractOutcome::Busy);
        }

        let result = self.run(model, &source, model_id);
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    fn run(
        &self,
        model: &mut PromptModel,
        source: &str,
        model_id: &str,
    ) -> Result<ExtractOutcome, AppError> {
        let section_count = clamp_section_count(model.section_count);
        let instruction = build_instruction(model.mode, model.input_mode, source, section_count);
        let request = CompletionRequest {
            model_id: model_id.to_string(),
            system: SYSTEM_INSTRUCTION.to_string(),
            instruction,
        };

        let raw = self.client.complete(&request)?;
        let update = normalize_reply(&raw)?;
        model.apply_update(update);
        Ok(ExtractOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::PromptMode;

    const GOOD_REPLY: &str = r#"{
        "englishTitle": "COFFEE EVOLUTION",
        "chineseTitle": "咖啡演化史",
        "subtitle": "From Bean to Brew",
        "philosophicalMetaphor": "A dark mirror of human restlessness.",
        "eras": [
            {"title": "DISCOVERY", "label": "850 - 1500", "description": "Goat herders", "symbolicElements": "Goats"},
            {"title": "TRADE", "label": "1500 - 1900", "description": "Ships", "symbolicElements": "Sacks"},
            {"title": "ESPRESSO", "label": "1900 - Now", "description": "Machines", "symbolicElements": "Cups"}
        ]
    }"#;

    struct FixedClient {
        reply: Result<String, ()>,
        calls: AtomicUsize,
    }

    impl FixedClient {
        fn ok(reply: &str) -> Self {
            Self { reply: Ok(reply.to_string()), calls: AtomicUsize::new(0) }
        }

        fn failing() -> Self {
            Self { reply: Err(()), calls: AtomicUsize::new(0) }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CompletionClient for FixedClient {
        fn complete(&self, _request: &CompletionRequest) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(AppError::Transport {
                    message: "connection refused".to_string(),
                    status: None,
                }),
            }
        }
    }

    #[test]
    fn successful_extraction_applies_fragment() {
        let extractor = Extractor::new(FixedClient::ok(GOOD_REPLY));
        let mut model = PromptModel::evolution_defaults();
        model.topic = "Coffee".to_string();

        let outcome = extractor.extract(&mut model, "google/gemini-2.0-flash-001").unwrap();

        assert_eq!(outcome, ExtractOutcome::Applied);
        assert_eq!(model.titles.english, "COFFEE EVOLUTION");
        assert_eq!(model.sections.len(), 3);
        assert_eq!(model.sections[0].id, 1);
        assert_eq!(model.section_count, 3);
    }

    #[test]
    fn empty_topic_skips_without_network_call() {
        let extractor = Extractor::new(FixedClient::ok(GOOD_REPLY));
        let mut model = PromptModel::evolution_defaults();
        model.topic = "   ".to_string();
        let before = model.clone();

        let outcome = extractor.extract(&mut model, "google/gemini-2.0-flash-001").unwrap();

        assert_eq!(outcome, ExtractOutcome::SkippedEmptyInput);
        assert_eq!(model, before);
        assert_eq!(extractor.client.call_count(), 0);
    }

    #[test]
    fn empty_source_text_skips_in_text_mode() {
        let extractor = Extractor::new(FixedClient::ok(GOOD_REPLY));
        let mut model = PromptModel::evolution_defaults();
        model.input_mode = InputMode::Text;
        model.source_text = String::new();

        let outcome = extractor.extract(&mut model, "google/gemini-2.0-flash-001").unwrap();

        assert_eq!(outcome, ExtractOutcome::SkippedEmptyInput);
        assert_eq!(extractor.client.call_count(), 0);
    }

    #[test]
    fn transport_failure_leaves_model_untouched() {
        let extractor = Extractor::new(FixedClient::failing());
        let mut model = PromptModel::evolution_defaults();
        let before = model.clone();

        let err = extractor.extract(&mut model, "google/gemini-2.0-flash-001").unwrap_err();

        assert!(matches!(err, AppError::Transport { .. }));
        assert_eq!(model, before);
        assert!(!extractor.is_busy());
    }

    #[test]
    fn malformed_reply_leaves_model_untouched() {
        let extractor = Extractor::new(FixedClient::ok(
            r#"{"englishTitle": "T", "chineseTitle": "题", "eras": []}"#,
        ));
        let mut model = PromptModel::breakdown_defaults();
        let before = model.clone();

        let err = extractor.extract(&mut model, "google/gemini-2.0-flash-001").unwrap_err();

        assert!(matches!(err, AppError::MalformedResponse(_)));
        assert_eq!(model, before);
    }

    /// Client that blocks inside `complete` until released, so a second
    /// attempt can be made while the first is genuinely in flight.
    struct GatedClient {
        started_tx: Mutex<mpsc::Sender<()>>,
        release_rx: Mutex<mpsc::Receiver<()>>,
    }

    impl CompletionClient for GatedClient {
        fn complete(&self, _request: &CompletionRequest) -> Result<String, AppError> {
            self.started_tx.lock().unwrap().send(()).unwrap();
            self.release_rx.lock().unwrap().recv().unwrap();
            Ok(GOOD_REPLY.to_string())
        }
    }

    #[test]
    fn second_attempt_while_in_flight_is_rejected() {
        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let extractor = Arc::new(Extractor::new(GatedClient {
            started_tx: Mutex::new(started_tx),
            release_rx: Mutex::new(release_rx),
        }));

        let background = {
            let extractor = Arc::clone(&extractor);
            std::thread::spawn(move || {
                let mut model = PromptModel::evolution_defaults();
                extractor.extract(&mut model, "google/gemini-2.0-flash-001")
            })
        };

        started_rx.recv().unwrap();
        assert!(extractor.is_busy());

        let mut second_model = PromptModel::evolution_defaults();
        let before = second_model.clone();
        let outcome =
            extractor.extract(&mut second_model, "google/gemini-2.0-flash-001").unwrap();
        assert_eq!(outcome, ExtractOutcome::Busy);
        assert_eq!(second_model, before);

        release_tx.send(()).unwrap();
        let first = background.join().unwrap().unwrap();
        assert_eq!(first, ExtractOutcome::Applied);
        assert!(!extractor.is_busy());
    }

    #[test]
    fn instruction_uses_clamped_section_count() {
        struct CapturingClient {
            seen: Mutex<Vec<String>>,
        }
        impl CompletionClient for CapturingClient {
            fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
                self.seen.lock().unwrap().push(request.instruction.clone());
                Ok(GOOD_REPLY.to_string())
            }
        }

        let extractor = Extractor::new(CapturingClient { seen: Mutex::new(Vec::new()) });
        let mut model = PromptModel::evolution_defaults();
        model.mode = PromptMode::Evolution;
        model.section_count = 9;

        extractor.extract(&mut model, "google/gemini-2.0-flash-001").unwrap();

        let seen = extractor.client.seen.lock().unwrap();
        assert!(seen[0].contains("Create exactly 6 eras."));
    }
}

//! Generate Copy use case.
//!
//! Executes one resilient single-shot generation: build the prompt from a
//! [`CopyBrief`], submit it to the injected [`TextGenerator`], and retry
//! transient failures with randomized exponential backoff until the attempt
//! ceiling is reached.
//!
//! Each request moves through exactly one lifecycle: pending while attempts
//! remain, then either succeeded or failed. No state persists across
//! requests, and every retry re-issues the identical prompt.

use crate::ports::text_generator::{GeneratorError, TextGenerator};
use crate::retry::RetryPolicy;
use oath_domain::{CopyBrief, GeneratedCopy, PromptTemplate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during copy generation.
#[derive(Error, Debug)]
pub enum GenerateCopyError {
    /// Every attempt failed; `source` is the last failure observed.
    #[error("copy generation failed after {attempts} attempts")]
    AttemptsExhausted {
        attempts: u32,
        #[source]
        source: GeneratorError,
    },

    /// A terminal error (e.g. bad credential) stopped the retry loop early.
    #[error("copy generation aborted")]
    Aborted(#[source] GeneratorError),
}

/// Input for the [`GenerateCopyUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateCopyInput {
    /// The validated brief. Callers guarantee all fields are non-empty.
    pub brief: CopyBrief,
}

impl GenerateCopyInput {
    pub fn new(brief: CopyBrief) -> Self {
        Self { brief }
    }
}

/// Use case for generating OATH copy.
///
/// Flow:
/// 1. Build the prompt with [`PromptTemplate::oath_copy`]
/// 2. Call the backend; empty text counts as a failure
/// 3. On transient failure, sleep a jittered backoff and retry
/// 4. On terminal failure or exhaustion, return the error
pub struct GenerateCopyUseCase {
    generator: Arc<dyn TextGenerator>,
    policy: RetryPolicy,
}

impl GenerateCopyUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            policy: RetryPolicy::default(),
        }
    }

    /// Create with a custom retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Execute the generation, awaiting the terminal result.
    pub async fn execute(&self, input: GenerateCopyInput) -> Result<GeneratedCopy, GenerateCopyError> {
        let prompt = PromptTemplate::oath_copy(&input.brief);
        info!(
            backend = self.generator.name(),
            brand = %input.brief.brand_name,
            "Starting copy generation"
        );

        let mut attempt = 0u32;
        loop {
            attempt += 1;
            debug!(
                attempt,
                max_attempts = self.policy.max_attempts,
                "sending prompt to backend"
            );

            let failure = match self.generator.generate(&prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    info!(attempt, bytes = text.len(), "copy generated");
                    return Ok(GeneratedCopy::new(text, self.generator.name()));
                }
                Ok(_) => GeneratorError::EmptyResponse,
                Err(e) => e,
            };

            warn!(attempt, error = %failure, "generation attempt failed");

            if failure.is_terminal() {
                return Err(GenerateCopyError::Aborted(failure));
            }

            if attempt >= self.policy.max_attempts {
                return Err(GenerateCopyError::AttemptsExhausted {
                    attempts: attempt,
                    source: failure,
                });
            }

            let delay = self.policy.delay_for(attempt);
            debug!(delay_ms = delay.as_millis() as u64, "backing off before retry");
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    // ==================== Test Mocks ====================

    struct MockGenerator {
        responses: Mutex<VecDeque<Result<String, GeneratorError>>>,
        calls: AtomicU32,
    }

    impl MockGenerator {
        fn new(responses: Vec<Result<String, GeneratorError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        fn name(&self) -> &str {
            "mock"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GeneratorError::Unavailable("timeout".to_string())))
        }
    }

    fn input() -> GenerateCopyInput {
        GenerateCopyInput::new(
            CopyBrief::new("Acme", "a software company", "X", "Y", "Z", "W").unwrap(),
        )
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_success_on_first_attempt() {
        let generator = Arc::new(MockGenerator::new(vec![Ok("COPY".to_string())]));
        let use_case = GenerateCopyUseCase::new(generator.clone());

        let copy = use_case.execute(input()).await.unwrap();

        assert_eq!(copy.text, "COPY");
        assert_eq!(copy.backend, "mock");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_transient_failures() {
        let generator = Arc::new(MockGenerator::new(vec![
            Err(GeneratorError::Unavailable("connection reset".to_string())),
            Err(GeneratorError::Rejected("rate limit".to_string())),
            Ok("finally".to_string()),
        ]));
        let use_case = GenerateCopyUseCase::new(generator.clone());

        let copy = use_case.execute(input()).await.unwrap();

        assert_eq!(copy.text, "finally");
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_after_ceiling_attempts() {
        // Empty response queue: every call fails with a timeout
        let generator = Arc::new(MockGenerator::new(vec![]));
        let use_case = GenerateCopyUseCase::new(generator.clone());

        let start = tokio::time::Instant::now();
        let result = use_case.execute(input()).await;

        match result {
            Err(GenerateCopyError::AttemptsExhausted { attempts, source }) => {
                assert_eq!(attempts, 6);
                assert!(matches!(source, GeneratorError::Unavailable(_)));
            }
            other => panic!("Expected AttemptsExhausted, got {:?}", other),
        }
        assert_eq!(generator.calls(), 6);
        // 5 backoffs, each at least min_delay (1s)
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_authentication_error_is_not_retried() {
        let generator = Arc::new(MockGenerator::new(vec![Err(
            GeneratorError::Authentication("invalid key".to_string()),
        )]));
        let use_case = GenerateCopyUseCase::new(generator.clone());

        let result = use_case.execute(input()).await;

        assert!(matches!(
            result,
            Err(GenerateCopyError::Aborted(GeneratorError::Authentication(_)))
        ));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_text_is_retried() {
        let generator = Arc::new(MockGenerator::new(vec![
            Ok("   ".to_string()),
            Ok("real copy".to_string()),
        ]));
        let use_case = GenerateCopyUseCase::new(generator.clone());

        let copy = use_case.execute(input()).await.unwrap();

        assert_eq!(copy.text, "real copy");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_policy_limits_attempts() {
        let generator = Arc::new(MockGenerator::new(vec![]));
        let policy = RetryPolicy::new(2, Duration::from_millis(10), Duration::from_millis(20));
        let use_case = GenerateCopyUseCase::new(generator.clone()).with_policy(policy);

        let result = use_case.execute(input()).await;

        assert!(matches!(
            result,
            Err(GenerateCopyError::AttemptsExhausted { attempts: 2, .. })
        ));
        assert_eq!(generator.calls(), 2);
    }
}

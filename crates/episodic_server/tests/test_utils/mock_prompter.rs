//! Prompter test doubles.

use async_trait::async_trait;
use episodic_error::{EpisodicResult, PrompterError, PrompterErrorKind};
use episodic_interface::Prompter;
use std::sync::{Arc, Mutex};

/// Output of [`StaticPrompter::default`].
pub const TEST_PROMPTER_OUTPUT: &str = "TEST PROMPTER OUTPUT";

/// Returns the same text for every prompt and records what it was asked.
#[derive(Debug, Clone)]
pub struct StaticPrompter {
    output: String,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl StaticPrompter {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// `(system, user)` pairs received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for StaticPrompter {
    fn default() -> Self {
        Self::new(TEST_PROMPTER_OUTPUT)
    }
}

#[async_trait]
impl Prompter for StaticPrompter {
    async fn prompt(&self, system: &str, user: &str) -> EpisodicResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        Ok(self.output.clone())
    }
}

/// Fails every prompt with an upstream API error.
#[derive(Debug, Clone, Default)]
pub struct FailingPrompter;

#[async_trait]
impl Prompter for FailingPrompter {
    async fn prompt(&self, _system: &str, _user: &str) -> EpisodicResult<String> {
        Err(PrompterError::new(PrompterErrorKind::Api {
            status: 401,
            message: "invalid api key sk-secret".into(),
        })
        .into())
    }
}

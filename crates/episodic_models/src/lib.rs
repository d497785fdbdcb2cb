//! Text-generation clients for Episodic.
//!
//! This crate provides [`DeepSeekPrompter`], a [`Prompter`](episodic_interface::Prompter)
//! backed by an OpenAI-compatible chat completions API (DeepSeek by default),
//! plus the request/response wire types it speaks.
//!
//! # Example
//!
//! ```no_run
//! use episodic_interface::Prompter;
//! use episodic_models::{DeepSeekPrompter, PrompterConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let prompter = DeepSeekPrompter::new(PrompterConfig::from_env());
//! let text = prompter
//!     .prompt("Rewrite for Gen Z user", "We discuss upcoming trends in AI.")
//!     .await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod deepseek;
mod request;
mod response;

pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, PROMPT_MAX_TOKENS, PrompterConfig};
pub use deepseek::{DeepSeekPrompter, SYSTEM_PROMPT_PREFIX};
pub use episodic_error::{PrompterError, PrompterErrorKind};
pub use request::{ChatCompletionRequest, Message};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, Usage};

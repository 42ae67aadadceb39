//! Post writers — pluggable, trait-based backends that turn a request into a post.
//!
//! Default: `LlmPostWriter`, which calls the provider once and drops to the
//! template generator on any failure. `TemplatePostWriter` never touches the network.
//!
//! `AppState` holds an `Arc<dyn PostWriter>`, chosen at startup from config.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::fallback::generate_fallback;
use crate::generation::models::{BlogPost, GenerationRequest};
use crate::generation::normalizer::normalize_reply;
use crate::generation::prompts::{build_prompt, generation_system};
use crate::llm_client::LlmClient;

/// Implement this to swap generation backends without touching the handler.
#[async_trait]
pub trait PostWriter: Send + Sync {
    async fn write(&self, request: &GenerationRequest) -> Result<BlogPost, AppError>;
}

/// Deterministic writer backed by the fixed template.
pub struct TemplatePostWriter;

#[async_trait]
impl PostWriter for TemplatePostWriter {
    async fn write(&self, request: &GenerationRequest) -> Result<BlogPost, AppError> {
        Ok(generate_fallback(request))
    }
}

/// LLM-backed writer. Provider failures are absorbed here and never reach the user.
pub struct LlmPostWriter {
    llm: LlmClient,
}

impl LlmPostWriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl PostWriter for LlmPostWriter {
    async fn write(&self, request: &GenerationRequest) -> Result<BlogPost, AppError> {
        let prompt = build_prompt(request);

        match self.llm.call_text(&prompt, &generation_system()).await {
            Ok(reply) => {
                info!("LLM reply received ({} chars)", reply.len());
                Ok(normalize_reply(&reply, request))
            }
            Err(e) => {
                warn!("LLM generation failed, using template generator: {e}");
                Ok(generate_fallback(request))
            }
        }
    }
}

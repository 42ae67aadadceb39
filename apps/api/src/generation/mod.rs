// Blog post generation.
// Implements: prompt construction, tone voice, LLM writing with template fallback,
// reply normalization and outline extraction.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod outline;
pub mod prompts;
pub mod tone;
pub mod writer;

// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::generation::models::GenerationRequest;
use crate::generation::tone::get_tone_voice;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for blog generation.
pub const GENERATION_SYSTEM_PREAMBLE: &str =
    "You are an experienced content writer who produces well-structured, engaging blog posts.";

/// Opening line of the generation prompt. Filled with `format!` so user text is
/// never re-scanned for placeholders.
fn request_line(request: &GenerationRequest) -> String {
    let keyword_clause = if request.keywords.is_empty() {
        String::new()
    } else {
        format!(" Focus on these keywords: {}.", request.keywords.join(", "))
    };

    format!(
        "Write a blog post in a {} tone about \"{}\". The post should be approximately {} words long.{}",
        request.tone.label(),
        request.topic,
        request.length.target_words(),
        keyword_clause
    )
}

/// Blog generation prompt template.
/// Replace: {style_hint} first, then {request_line} (it carries user input).
pub const GENERATION_PROMPT_TEMPLATE: &str = r###"{request_line}

{style_hint}

Structure the post with an engaging introduction, several sections introduced by "## " markdown headings, and a conclusion.

Return a JSON object with this EXACT schema:
{
  "title": "An engaging, specific title",
  "content": "The full post body. Separate paragraphs with blank lines and start each section with a '## ' heading.",
  "keywords": ["keyword one", "keyword two"],
  "outline": ["First section heading", "Second section heading"]
}"###;

/// Full system prompt sent alongside every generation call.
pub fn generation_system() -> String {
    format!("{GENERATION_SYSTEM_PREAMBLE} {JSON_ONLY_SYSTEM}")
}

/// Builds the generation prompt for a request. Pure and total.
pub fn build_prompt(request: &GenerationRequest) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{style_hint}", get_tone_voice(&request.tone).style_hint)
        .replace("{request_line}", &request_line(request))
}

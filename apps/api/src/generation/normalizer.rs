//! Turns a free-text model reply into a `BlogPost`.
//!
//! Best effort, never fails:
//! 1. the first `{ ... }` span parsed as JSON, if it carries non-empty `content`;
//! 2. first line as title, remainder as content;
//! 3. the whole reply as content under a synthesized title.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::generation::models::{BlogPost, GenerationRequest};
use crate::generation::outline::extract_outline;
use crate::llm_client::strip_json_fences;

/// Greedy: from the first `{` to the last `}`.
static JSON_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Lenient view of the JSON the prompt asks for. Every field is optional.
#[derive(Debug, Deserialize)]
struct ReplyPayload {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    keywords: Option<Vec<String>>,
    #[serde(default)]
    outline: Option<Vec<String>>,
}

pub fn normalize_reply(reply: &str, request: &GenerationRequest) -> BlogPost {
    let reply = strip_json_fences(reply);

    if let Some(post) = parse_json_reply(reply, request) {
        debug!("LLM reply parsed as JSON");
        return post;
    }

    if let Some(post) = split_plain_reply(reply, request) {
        debug!("LLM reply split into title and body");
        return post;
    }

    debug!("LLM reply wrapped as raw content");
    BlogPost {
        title: synthesized_title(&request.topic),
        content: reply.to_string(),
        keywords: request.effective_keywords(),
        outline: extract_outline(reply),
    }
}

fn parse_json_reply(reply: &str, request: &GenerationRequest) -> Option<BlogPost> {
    let candidate = JSON_OBJECT_RE.find(reply)?.as_str();
    let payload: ReplyPayload = serde_json::from_str(candidate).ok()?;

    let content = non_blank(payload.content)?;
    let title = non_blank(payload.title).unwrap_or_else(|| synthesized_title(&request.topic));
    let keywords = non_empty_list(payload.keywords).unwrap_or_else(|| request.effective_keywords());
    let outline = non_empty_list(payload.outline).unwrap_or_else(|| extract_outline(&content));

    Some(BlogPost {
        title,
        content,
        keywords,
        outline,
    })
}

fn split_plain_reply(reply: &str, request: &GenerationRequest) -> Option<BlogPost> {
    let (first_line, rest) = reply.split_once('\n')?;

    let title = first_line.trim().trim_start_matches('#').trim();
    let content = rest.trim();
    if title.is_empty() || content.is_empty() {
        return None;
    }

    Some(BlogPost {
        title: title.to_string(),
        content: content.to_string(),
        keywords: request.effective_keywords(),
        outline: extract_outline(content),
    })
}

fn synthesized_title(topic: &str) -> String {
    format!("{topic}: A Complete Guide")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn non_empty_list(values: Option<Vec<String>>) -> Option<Vec<String>> {
    let cleaned: Vec<String> = values?
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            topic: "Sustainable Travel".to_string(),
            keywords: vec!["eco".to_string(), "trains".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_json_reply_is_used_verbatim() {
        let reply = r#"{"title": "Greener Journeys", "content": "Intro\n\n## Trains\nBody", "keywords": ["rail"], "outline": ["Trains"]}"#;
        let post = normalize_reply(reply, &request());
        assert_eq!(post.title, "Greener Journeys");
        assert_eq!(post.content, "Intro\n\n## Trains\nBody");
        assert_eq!(post.keywords, vec!["rail"]);
        assert_eq!(post.outline, vec!["Trains"]);
    }

    #[test]
    fn test_json_wrapped_in_prose_and_fences() {
        let reply = "```json\nHere you go!\n{\"title\": \"T\", \"content\": \"## A\\nx\\n## B\\ny\"}\nEnjoy.\n```";
        let post = normalize_reply(reply, &request());
        assert_eq!(post.title, "T");
        assert_eq!(post.outline, vec!["A", "B"]);
        assert_eq!(post.keywords, vec!["eco", "trains"]);
    }

    #[test]
    fn test_json_without_content_falls_through_to_text_split() {
        let reply = "{\"title\": \"Only a title\"}\nSome body text follows.";
        let post = normalize_reply(reply, &request());
        assert_eq!(post.title, "{\"title\": \"Only a title\"}");
        assert_eq!(post.content, "Some body text follows.");
    }

    #[test]
    fn test_plain_text_reply_splits_first_line_as_title() {
        let reply = "# Slow Travel, Big Rewards\n\nWhy slow down?\n\n## Take the Train\nIt is lovely.";
        let post = normalize_reply(reply, &request());
        assert_eq!(post.title, "Slow Travel, Big Rewards");
        assert!(post.content.starts_with("Why slow down?"));
        assert_eq!(post.outline, vec!["Take the Train"]);
    }

    #[test]
    fn test_single_line_reply_gets_synthesized_title() {
        let post = normalize_reply("Travel less, see more.", &request());
        assert_eq!(post.title, "Sustainable Travel: A Complete Guide");
        assert_eq!(post.content, "Travel less, see more.");
        assert_eq!(post.outline, vec!["Introduction", "Main Content", "Conclusion"]);
    }

    #[test]
    fn test_missing_keywords_derive_from_topic() {
        let mut req = request();
        req.keywords.clear();
        let post = normalize_reply(r#"{"content": "Body only"}"#, &req);
        assert_eq!(post.title, "Sustainable Travel: A Complete Guide");
        assert_eq!(post.keywords, vec!["sustainable", "travel"]);
    }
}

//! Request and response shapes for blog post generation.
//!
//! Both values live for a single request. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// How many topic-derived keywords to attach when the user supplied none.
const MAX_DERIVED_KEYWORDS: usize = 5;

/// Writing style requested by the user. Unknown labels fall back to `Professional`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Authoritative,
    Humorous,
}

impl From<Option<String>> for Tone {
    fn from(label: Option<String>) -> Self {
        let label = label.unwrap_or_default();
        match label.trim().to_ascii_lowercase().as_str() {
            "casual" => Tone::Casual,
            "friendly" => Tone::Friendly,
            "authoritative" => Tone::Authoritative,
            "humorous" => Tone::Humorous,
            _ => Tone::Professional,
        }
    }
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Authoritative => "authoritative",
            Tone::Humorous => "humorous",
        }
    }
}

/// Requested post length. Unknown labels fall back to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl From<Option<String>> for Length {
    fn from(label: Option<String>) -> Self {
        let label = label.unwrap_or_default();
        match label.trim().to_ascii_lowercase().as_str() {
            "short" => Length::Short,
            "long" => Length::Long,
            _ => Length::Medium,
        }
    }
}

impl Length {
    /// Target word count handed to the model.
    pub fn target_words(&self) -> u32 {
        match self {
            Length::Short => 500,
            Length::Medium => 1000,
            Length::Long => 1500,
        }
    }
}

/// Request body for `POST /api/v1/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl GenerationRequest {
    /// Trims the topic and keywords, drops blank keywords, and rejects an empty topic.
    /// Presence of a topic is the only validation performed.
    pub fn into_validated(self) -> Result<Self, AppError> {
        let topic = self.topic.trim().to_string();
        if topic.is_empty() {
            return Err(AppError::Validation("Topic is required".to_string()));
        }

        let keywords = self
            .keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            topic,
            keywords,
            ..self
        })
    }

    /// The user's keywords, or a handful of words lifted from the topic when there are none.
    pub fn effective_keywords(&self) -> Vec<String> {
        if !self.keywords.is_empty() {
            return self.keywords.clone();
        }

        let mut derived: Vec<String> = Vec::new();
        for word in self.topic.split(|c: char| !c.is_alphanumeric()) {
            let word = word.to_lowercase();
            if word.chars().count() > 3 && !derived.contains(&word) {
                derived.push(word);
            }
            if derived.len() == MAX_DERIVED_KEYWORDS {
                break;
            }
        }
        derived
    }
}

/// A generated blog post as returned to the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    /// Paragraphs separated by blank lines; sections introduced by `## ` headings.
    pub content: String,
    pub keywords: Vec<String>,
    pub outline: Vec<String>,
}

//! Template generator — deterministic stand-in for the LLM.
//!
//! Used whenever the provider is unconfigured or the call fails. Pure: no I/O,
//! no randomness, same request in, same post out.

use crate::generation::models::{BlogPost, GenerationRequest};
use crate::generation::tone::get_tone_voice;

/// Section headings, in order. `{topic}` is substituted.
const SECTION_HEADINGS: [&str; 6] = [
    "Understanding {topic}",
    "Why {topic} Matters",
    "Key Principles of {topic}",
    "Putting {topic} into Practice",
    "Common Challenges with {topic}",
    "Final Thoughts on {topic}",
];

/// Builds a complete post from the fixed template.
pub fn generate_fallback(request: &GenerationRequest) -> BlogPost {
    let topic = request.topic.as_str();
    let voice = get_tone_voice(&request.tone);
    let keywords = request.effective_keywords();

    let outline: Vec<String> = SECTION_HEADINGS
        .iter()
        .map(|h| h.replace("{topic}", topic))
        .collect();

    let bodies = [
        vec![
            format!(
                "At its core, {topic} is about understanding how a handful of ideas fit together. \
                Before diving into techniques, it helps to get clear on the vocabulary and the \
                problems {topic} sets out to solve."
            ),
            format!(
                "Many newcomers treat {topic} as a single skill. In reality it is a collection of \
                related practices, each of which can be learned and improved on its own."
            ),
        ],
        vec![format!(
            "The impact of {topic} reaches well beyond specialists. Teams that invest in it tend \
            to make better decisions, communicate more clearly and adapt faster when \
            circumstances change. Ignoring {topic} rarely makes its challenges go away; it only \
            postpones them."
        )],
        key_principles(topic, &request.keywords),
        vec![
            format!(
                "Start small. Pick one area where {topic} can make a visible difference, set a \
                clear goal, and measure the result before expanding."
            ),
            "Build habits rather than one-off efforts. Regular review, honest feedback and \
            incremental improvement compound over time."
                .to_string(),
        ],
        vec![format!(
            "Every approach to {topic} runs into obstacles: limited time, competing priorities \
            and the temptation to chase shortcuts. Naming these challenges early, and planning \
            for them, is often the difference between a stalled initiative and a lasting one."
        )],
        vec![
            format!(
                "{topic} is not a destination but an ongoing practice. The principles above give \
                you a foundation; the rest comes from applying them consistently."
            ),
            voice.closer_for(topic),
        ],
    ];

    let mut sections = vec![format!(
        "{} In this guide we explore what {topic} involves, why it matters, and how to \
        put it to work.",
        voice.opener_for(topic)
    )];
    for (heading, paragraphs) in outline.iter().zip(bodies) {
        sections.push(format!("## {heading}\n\n{}", paragraphs.join("\n\n")));
    }

    BlogPost {
        title: format!("The Complete Guide to {topic}"),
        content: sections.join("\n\n"),
        keywords,
        outline,
    }
}

fn key_principles(topic: &str, keywords: &[String]) -> Vec<String> {
    let mut paragraphs = vec![format!(
        "A few principles consistently separate effective work on {topic} from the rest: \
        clarity of purpose, attention to fundamentals, and a willingness to learn from results."
    )];
    if !keywords.is_empty() {
        paragraphs.push(format!(
            "When thinking about {topic}, keep these concepts in view: {}. Each one shapes how \
            the principles above play out in practice.",
            keywords.join(", ")
        ));
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::models::{Length, Tone};
    use crate::generation::outline::extract_outline;

    fn request(topic: &str, keywords: &[&str]) -> GenerationRequest {
        GenerationRequest {
            topic: topic.to_string(),
            tone: Tone::Professional,
            length: Length::Medium,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_topic_appears_in_multiple_sections() {
        let post = generate_fallback(&request("Urban Gardening", &[]));
        let sections_with_topic = post
            .content
            .split("\n## ")
            .filter(|section| section.contains("Urban Gardening"))
            .count();
        assert!(sections_with_topic >= 6, "found in {sections_with_topic} sections");
        assert!(post.title.contains("Urban Gardening"));
    }

    #[test]
    fn test_outline_round_trip_recovers_six_headings() {
        let post = generate_fallback(&request("Urban Gardening", &["soil"]));
        let recovered = extract_outline(&post.content);
        assert_eq!(recovered.len(), 6);
        assert_eq!(recovered, post.outline);
        assert_eq!(recovered[0], "Understanding Urban Gardening");
        assert_eq!(recovered[5], "Final Thoughts on Urban Gardening");
    }

    #[test]
    fn test_is_deterministic() {
        let req = request("Rust", &["ownership"]);
        assert_eq!(generate_fallback(&req), generate_fallback(&req));
    }

    #[test]
    fn test_keywords_are_named_in_content() {
        let post = generate_fallback(&request("Cooking", &["knife skills", "mise en place"]));
        assert!(post.content.contains("knife skills, mise en place"));
        assert_eq!(post.keywords, vec!["knife skills", "mise en place"]);
    }

    #[test]
    fn test_tone_changes_the_introduction() {
        let mut casual = request("Cooking", &[]);
        casual.tone = Tone::Casual;
        let professional = request("Cooking", &[]);

        let a = generate_fallback(&casual);
        let b = generate_fallback(&professional);
        assert_ne!(a.content, b.content);
        assert_eq!(a.outline, b.outline);
    }
}

//! Tone calibration — maps the requested tone to phrasing used by the prompt and
//! by the template generator.

use crate::generation::models::Tone;

/// Phrasing calibrated to a specific tone.
#[derive(Debug, Clone)]
pub struct ToneVoice {
    /// Style guidance appended to the prompt.
    pub style_hint: &'static str,
    /// Sentence that opens the introduction. `{topic}` is substituted.
    pub opener: &'static str,
    /// Sentence that closes the final section. `{topic}` is substituted.
    pub closer: &'static str,
}

/// Returns the voice for the given tone.
pub fn get_tone_voice(tone: &Tone) -> ToneVoice {
    match tone {
        Tone::Professional => ToneVoice {
            style_hint: "Use clear, precise language suited to an informed business audience.",
            opener: "{topic} has become a subject that professionals across many fields can no longer afford to overlook.",
            closer: "Approached with care and discipline, {topic} offers lasting value to any organization.",
        },
        Tone::Casual => ToneVoice {
            style_hint: "Keep it relaxed and easygoing, as if chatting with a friend over coffee.",
            opener: "Let's be honest: {topic} is one of those things everybody talks about, but few people really dig into.",
            closer: "So there you have it. Give {topic} a shot and see where it takes you.",
        },
        Tone::Friendly => ToneVoice {
            style_hint: "Be warm, encouraging and approachable; speak directly to the reader.",
            opener: "If you have ever wondered about {topic}, you are in good company, and this guide is here to help.",
            closer: "Wherever you are on your journey with {topic}, you have everything you need to take the next step.",
        },
        Tone::Authoritative => ToneVoice {
            style_hint: "Write with confidence and expertise; make firm, well-supported claims.",
            opener: "{topic} is a discipline defined by a small number of principles that reward those who master them.",
            closer: "The evidence is clear: a rigorous approach to {topic} consistently outperforms improvisation.",
        },
        Tone::Humorous => ToneVoice {
            style_hint: "Be light-hearted and witty, with the occasional playful aside, without losing substance.",
            opener: "{topic} walks into a blog post. No punchline yet, but stick around, it gets better.",
            closer: "And that, dear reader, is {topic} explained without a single slide deck.",
        },
    }
}

impl ToneVoice {
    pub fn opener_for(&self, topic: &str) -> String {
        self.opener.replace("{topic}", topic)
    }

    pub fn closer_for(&self, topic: &str) -> String {
        self.closer.replace("{topic}", topic)
    }
}

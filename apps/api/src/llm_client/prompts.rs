// Shared prompt fragments. Feature-specific prompts live next to the feature
// (see generation/prompts.rs).

/// System prompt fragment that steers the model toward a bare JSON object.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

//! Nervous-system mapping: audience emotional state to the tone that
//! co-regulates it, plus tone-level guidance text.

use serde::Serialize;

use crate::analysis::tone::ToneLabel;

/// State used when the lookup key is not in the table.
pub const DEFAULT_EMOTIONAL_STATE: &str = "high stress";

const HIGH_STRESS_TONE: &str = "calm, safe, grounded";

const NERVOUS_SYSTEM_STATES: &[(&str, &str)] = &[
    (DEFAULT_EMOTIONAL_STATE, HIGH_STRESS_TONE),
    ("low confidence", "empowering, hopeful, visible"),
    ("anxious", "soothing, predictable, safe"),
    ("overwhelm", "structured, clear, calm"),
    ("joy", "vibrant, lively, expansive"),
];

const SUGGESTED_ACTIONS: [&str; 3] = [
    "Use soft transitions and predictable rhythm",
    "Include grounding language (e.g., 'you are safe')",
    "Avoid abrupt changes or high-intensity pacing",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalRegulation {
    pub current_emotional_state: String,
    pub recommended_tone: &'static str,
    pub co_regulation_insight: String,
    pub suggested_actions: [&'static str; 3],
}

/// Looks up the target tone for an audience's emotional state.
pub fn target_tone(state: &str) -> &'static str {
    let key = state.trim().to_lowercase();
    NERVOUS_SYSTEM_STATES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, tone)| *tone)
        .unwrap_or(HIGH_STRESS_TONE)
}

/// Maps an emotional state to a recommended tone and co-regulation insight.
/// Unknown states resolve to the "high stress" entry.
pub fn map_emotional_state(state: &str) -> EmotionalRegulation {
    let recommended_tone = target_tone(state);
    EmotionalRegulation {
        current_emotional_state: state.to_string(),
        recommended_tone,
        co_regulation_insight: format!(
            "When your audience feels {state}, the brand must shift into a tone of \
             {recommended_tone} to restore nervous system balance. This isn't just \
             messaging, it's sensory and emotional co-regulation."
        ),
        suggested_actions: SUGGESTED_ACTIONS,
    }
}

/// Guidance on how a tone sits with the audience's nervous system.
pub fn nervous_system_guidance(tone: &str) -> &'static str {
    match ToneLabel::from_key(tone) {
        Some(ToneLabel::Soothing) => "Your content should activate the parasympathetic nervous system, promoting rest and digest responses",
        Some(ToneLabel::Empowering) => "Build confidence without triggering fight-or-flight. Use steady, strong messaging",
        Some(ToneLabel::Urgent) => "Careful - this can trigger anxiety. Always pair with safety signals",
        Some(ToneLabel::Playful) => "Activates joy and connection. Great for building community and reducing stress",
        Some(ToneLabel::Serious) => "Builds trust and authority but can feel cold. Add warmth to prevent emotional distance",
        Some(ToneLabel::Neutral) | None => "Focus on emotional safety and clear communication",
    }
}

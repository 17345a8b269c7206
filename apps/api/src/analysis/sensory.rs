//! Sensory design: picks sensory elements that co-regulate an emotional state.

use rand::Rng;
use serde::Serialize;

/// Elements picked per design.
const ELEMENTS_PER_DESIGN: usize = 3;

const SOOTHING_ELEMENTS: &[&str] = &["soft lighting", "gentle textures", "nature sounds", "warm colors"];

const SENSORY_ELEMENTS: &[(&str, &[&str])] = &[
    ("soothing", SOOTHING_ELEMENTS),
    ("empowering", &["bright colors", "upward motion", "clear audio", "strong visuals"]),
    ("urgent", &["sharp contrasts", "pulsing rhythms", "high energy", "tight pacing"]),
    ("joyful", &["vibrant colors", "lively music", "dynamic movement", "sparkle"]),
    ("anxious", &["fading transitions", "slow pacing", "soft tones", "repetition"]),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensoryDesign {
    pub emotional_state: String,
    pub sensory_design: Vec<&'static str>,
    pub insight: String,
    pub design_suggestions: Vec<String>,
}

/// Candidate elements for a state, defaulting to the soothing set.
pub fn sensory_elements(state: &str) -> &'static [&'static str] {
    let key = state.trim().to_lowercase();
    SENSORY_ELEMENTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, elements)| *elements)
        .unwrap_or(SOOTHING_ELEMENTS)
}

/// Picks three distinct elements at random and turns them into visual, audio
/// and pacing suggestions.
pub fn generate_sensory_design<R: Rng>(state: &str, rng: &mut R) -> SensoryDesign {
    let mut pool = sensory_elements(state).to_vec();
    let mut selected = Vec::with_capacity(ELEMENTS_PER_DESIGN);
    while selected.len() < ELEMENTS_PER_DESIGN && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        selected.push(pool.remove(index));
    }

    let design_suggestions = ["Use {} in visuals", "Pair with {} in audio", "Introduce {} through pacing"]
        .iter()
        .zip(&selected)
        .map(|(template, element)| template.replace("{}", element))
        .collect();

    SensoryDesign {
        emotional_state: state.to_string(),
        insight: format!(
            "To co-regulate the nervous system during {state}, use sensory elements that \
             promote balance and safety. These elements help ground the audience and reduce \
             physiological arousal."
        ),
        sensory_design: selected,
        design_suggestions,
    }
}

//! Short-form story generation: canned three-beat arcs per tone.
//!
//! The script line is drawn at random; the visual and voice descriptors are
//! fixed per tone and attached to whichever line was drawn. Unknown tones
//! borrow the soothing arcs but keep the serious descriptors.

use rand::Rng;
use serde::Serialize;

use crate::analysis::tone::ToneLabel;

/// Number of ideas produced by the pipeline's content stage.
pub const STORY_IDEAS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryTemplate {
    pub title: String,
    pub script: &'static str,
    pub visual_suggestion: &'static str,
    pub voice_tone: &'static str,
}

/// The three canned arcs for a tone. Neutral shares the soothing arcs.
pub fn story_arcs(tone: ToneLabel) -> &'static [&'static str; 3] {
    match tone {
        ToneLabel::Soothing | ToneLabel::Neutral => &[
            "You were overwhelmed. Then you found a quiet place. Now you breathe again.",
            "It started with noise. Then silence. Then calm. Now you feel safe.",
            "A storm passed. The sky cleared. You saw what was always there.",
        ],
        ToneLabel::Empowering => &[
            "You didn’t know you had power. Then you saw it. Now you use it.",
            "You felt small. Then you saw your strength. Now you act.",
            "You were told you couldn’t. Then you tried. Then you succeeded.",
        ],
        ToneLabel::Playful => &[
            "The world was serious. Then you laughed. Now it’s fun.",
            "You had a rule. Then you broke it. Now you play.",
            "One day, you did something silly. And it changed everything.",
        ],
        ToneLabel::Urgent => &[
            "The system was failing. You acted. Now you lead.",
            "The clock was ticking. You moved. Now you own the moment.",
            "Something was wrong. You noticed. Now you act.",
        ],
        ToneLabel::Serious => &[
            "The truth is hard. But it’s real. Now you know it.",
            "We follow the rules. But we care. Now you see the balance.",
            "The future is clear. We prepare. You are part of it.",
        ],
    }
}

/// Visual direction for a tone. Neutral falls through to the serious entry.
pub fn visual_suggestion(tone: ToneLabel) -> &'static str {
    match tone {
        ToneLabel::Soothing => "Soft lighting, slow motion, nature",
        ToneLabel::Empowering => "Upward motion, bright colors, hands reaching",
        ToneLabel::Playful => "Fast cuts, humor, surprise",
        ToneLabel::Urgent => "Fast pacing, shadows, ticking clock",
        ToneLabel::Serious | ToneLabel::Neutral => "Serious tone, clean visuals, focused gaze",
    }
}

pub fn voice_tone(tone: ToneLabel) -> &'static str {
    match tone {
        ToneLabel::Soothing => "Warm, calm, gentle",
        ToneLabel::Empowering => "Confident, strong, clear",
        ToneLabel::Playful => "Lighthearted, energetic, witty",
        ToneLabel::Urgent => "Firm, urgent, decisive",
        ToneLabel::Serious | ToneLabel::Neutral => "Calm, steady, authoritative",
    }
}

/// Draws one story for `tone`. The title echoes `tone` as given.
pub fn generate_story<R: Rng>(tone: &str, rng: &mut R) -> StoryTemplate {
    let arcs = story_arcs(ToneLabel::resolve_or_soothing(tone));
    let descriptor_tone = ToneLabel::from_key(tone).unwrap_or_default();

    StoryTemplate {
        title: format!("A {tone} Story"),
        script: arcs[rng.gen_range(0..arcs.len())],
        visual_suggestion: visual_suggestion(descriptor_tone),
        voice_tone: voice_tone(descriptor_tone),
    }
}

/// Draws `n` independent stories. Repeats are possible.
pub fn generate_stories<R: Rng>(tone: &str, n: usize, rng: &mut R) -> Vec<StoryTemplate> {
    (0..n).map(|_| generate_story(tone, rng)).collect()
}

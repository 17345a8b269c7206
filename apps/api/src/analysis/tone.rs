//! Tone classification: scans copy against a fixed keyword lexicon.
//!
//! Confidence is a raw hit count, not a probability. It only gates whether the
//! copy is "clearly toned" (more than `CONFIDENCE_GATE` hits).

use serde::{Deserialize, Serialize};

/// Emotional register of a piece of marketing copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneLabel {
    Soothing,
    Empowering,
    Urgent,
    Playful,
    Serious,
    #[default]
    Neutral,
}

impl ToneLabel {
    /// The five tones that own palettes, story arcs and guidance text.
    #[cfg(test)]
    pub const TONED: [ToneLabel; 5] = [
        ToneLabel::Soothing,
        ToneLabel::Empowering,
        ToneLabel::Urgent,
        ToneLabel::Playful,
        ToneLabel::Serious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToneLabel::Soothing => "soothing",
            ToneLabel::Empowering => "empowering",
            ToneLabel::Urgent => "urgent",
            ToneLabel::Playful => "playful",
            ToneLabel::Serious => "serious",
            ToneLabel::Neutral => "neutral",
        }
    }

    /// Case-insensitive parse of a tone key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<ToneLabel> {
        match key.trim().to_lowercase().as_str() {
            "soothing" => Some(ToneLabel::Soothing),
            "empowering" => Some(ToneLabel::Empowering),
            "urgent" => Some(ToneLabel::Urgent),
            "playful" => Some(ToneLabel::Playful),
            "serious" => Some(ToneLabel::Serious),
            "neutral" => Some(ToneLabel::Neutral),
            _ => None,
        }
    }

    /// Parses a tone key, falling back to `Soothing` for anything outside the
    /// five toned labels. Every tone-keyed table resolves through this.
    pub fn resolve_or_soothing(key: &str) -> ToneLabel {
        match ToneLabel::from_key(key) {
            Some(ToneLabel::Neutral) | None => ToneLabel::Soothing,
            Some(tone) => tone,
        }
    }
}

impl std::fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of `classify`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub tone: ToneLabel,
    pub confidence: u32,
    pub nervous_system_impact: &'static str,
    pub recommended_action: &'static str,
}

/// More than this many keyword hits means the copy carries a clear tone.
pub const CONFIDENCE_GATE: u32 = 3;

/// Keyword lexicon in evaluation order. Every hit adds one to confidence; a
/// keyword with a tone also overwrites the running label.
///
/// Tie-break: the LAST matching keyword that carries a tone decides the label.
/// Families are not ranked against each other, so a later serious keyword can
/// override an earlier soothing one in the same text.
const TONE_LEXICON: &[(&str, Option<ToneLabel>)] = &[
    // safety
    ("safe", Some(ToneLabel::Soothing)),
    ("calm", Some(ToneLabel::Soothing)),
    ("peace", None),
    ("trust", None),
    ("relax", None),
    ("grounded", None),
    ("safe space", Some(ToneLabel::Soothing)),
    // empowerment
    ("empower", Some(ToneLabel::Empowering)),
    ("you can", Some(ToneLabel::Empowering)),
    ("belong", None),
    ("your power", None),
    ("strong", None),
    ("capable", None),
    // urgency
    ("urgent", Some(ToneLabel::Urgent)),
    ("act now", Some(ToneLabel::Urgent)),
    ("immediate", None),
    ("danger", None),
    ("crisis", None),
    ("alert", None),
    ("limited", Some(ToneLabel::Urgent)),
    ("limited time", Some(ToneLabel::Urgent)),
    ("expires", Some(ToneLabel::Urgent)),
    ("hurry", Some(ToneLabel::Urgent)),
    // play
    ("play", Some(ToneLabel::Playful)),
    ("fun", Some(ToneLabel::Playful)),
    ("laugh", None),
    ("joy", None),
    ("light", None),
    ("easy", None),
    ("simple", None),
    // authority
    ("serious", Some(ToneLabel::Serious)),
    ("expert", None),
    ("authority", None),
    ("decision", None),
    ("critical", None),
];

const AMBIGUOUS_IMPACT: &str = "Ambiguous — needs emotional clarity";
const AMBIGUOUS_ACTION: &str =
    "Add emotional anchors (e.g., 'you are safe', 'this is your space')";

/// How each tone lands on the audience's nervous system.
pub fn nervous_system_impact(tone: ToneLabel) -> &'static str {
    match tone {
        ToneLabel::Soothing => "deep relaxation, safety, emotional grounding",
        ToneLabel::Empowering => "increased agency, confidence, active engagement",
        ToneLabel::Urgent => "high alertness, potential anxiety, action-driven",
        ToneLabel::Playful => "joy, lightness, connection, low pressure",
        ToneLabel::Serious => "authority, focus, reliability, but may feel cold",
        ToneLabel::Neutral => AMBIGUOUS_IMPACT,
    }
}

pub fn recommended_action(tone: ToneLabel) -> &'static str {
    match tone {
        ToneLabel::Soothing => "This tone reduces stress — great for wellness or recovery audiences. Add sensory details (e.g., 'like warm water', 'soft light').",
        ToneLabel::Empowering => "This builds agency — perfect for growth or self-development. Use active verbs and 'you' statements.",
        ToneLabel::Urgent => "This may trigger anxiety — use cautiously. Add reassurance phrases (e.g., 'we’ve got you').",
        ToneLabel::Playful => "This builds connection — ideal for youth or community. Add humor and lightness.",
        ToneLabel::Serious => "This feels authoritative — great for B2B or compliance. But avoid sounding cold. Add warmth with 'we believe' or 'we care'.",
        ToneLabel::Neutral => AMBIGUOUS_ACTION,
    }
}

/// One-line fix suggested by the quick tone check.
pub fn quick_fix(tone: ToneLabel) -> &'static str {
    match tone {
        ToneLabel::Urgent => "Add reassuring phrases like 'you're safe' or 'we've got you'",
        ToneLabel::Serious => "Warm it up with 'we care' or 'we believe in you'",
        ToneLabel::Neutral => "Add emotional anchors - are you building safety or empowerment?",
        ToneLabel::Soothing => "Perfect for nervous system regulation",
        ToneLabel::Empowering => "Great for building agency and confidence",
        ToneLabel::Playful => "Excellent for connection and joy",
    }
}

/// Classifies `text` by keyword substring hits.
///
/// Returns the neutral result with confidence 0 unless more than
/// `CONFIDENCE_GATE` keywords hit. When the gate passes but no hit carried a
/// tone, the label stays neutral and the hit count is kept.
pub fn classify(text: &str) -> ClassificationResult {
    let lowered = text.to_lowercase();

    let mut tone = ToneLabel::Neutral;
    let mut confidence = 0u32;

    for (keyword, family) in TONE_LEXICON {
        if !lowered.contains(keyword) {
            continue;
        }
        confidence += 1;
        if let Some(family) = family {
            tone = *family;
        }
    }

    if confidence > CONFIDENCE_GATE {
        return ClassificationResult {
            tone,
            confidence,
            nervous_system_impact: nervous_system_impact(tone),
            recommended_action: recommended_action(tone),
        };
    }

    ClassificationResult {
        tone: ToneLabel::Neutral,
        confidence: 0,
        nervous_system_impact: AMBIGUOUS_IMPACT,
        recommended_action: AMBIGUOUS_ACTION,
    }
}

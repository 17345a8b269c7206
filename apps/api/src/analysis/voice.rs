//! Voice calibration: audience to tone-of-voice descriptor and emotional signature.

use serde::Serialize;

use crate::analysis::tone::ToneLabel;

/// Audience used when the lookup key is not in the table.
pub const DEFAULT_AUDIENCE: &str = "young adults";

const YOUNG_ADULTS_TONE: &str = "playful, energetic, authentic, witty";

const AUDIENCE_TONES: &[(&str, &str)] = &[
    (DEFAULT_AUDIENCE, YOUNG_ADULTS_TONE),
    ("parents", "warm, reassuring, gentle, grounded"),
    ("professionals", "clear, confident, precise, calm"),
    ("wellness seekers", "soothing, empathetic, calm, intuitive"),
    ("leaders", "authoritative, decisive, calm, visionary"),
    ("emergencies", "urgent, clear, direct, reassuring"),
];

const SCRIPT_EXAMPLES: [&str; 3] = [
    "You're not alone. We see you.",
    "This is your moment. Act.",
    "We’re here. You’re safe.",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceCalibration {
    pub audience: String,
    pub tone: &'static str,
    pub emotional_signature: &'static str,
    pub script_examples: [&'static str; 3],
}

/// Tone-of-voice descriptor for an audience, defaulting to "young adults".
pub fn audience_tone(audience: &str) -> &'static str {
    let key = audience.trim().to_lowercase();
    AUDIENCE_TONES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, tone)| *tone)
        .unwrap_or(YOUNG_ADULTS_TONE)
}

/// Emotional signature of a voice descriptor. Checks run in a fixed order and
/// the first hit wins.
pub fn emotional_signature(descriptor: &str) -> &'static str {
    if descriptor.contains("playful") {
        "Joy, connection, lightness"
    } else if descriptor.contains("warm") || descriptor.contains("reassuring") {
        "Safety, empathy, trust"
    } else if descriptor.contains("confident") {
        "Empowerment, authority"
    } else if descriptor.contains("calm") {
        "Stability, grounding"
    } else {
        "Clarity, presence"
    }
}

pub fn calibrate_voice_tone(audience: &str) -> VoiceCalibration {
    let tone = audience_tone(audience);
    VoiceCalibration {
        audience: audience.to_string(),
        tone,
        emotional_signature: emotional_signature(tone),
        script_examples: SCRIPT_EXAMPLES,
    }
}

/// The audience a tone is written for.
pub fn infer_audience_from_tone(tone: &str) -> &'static str {
    match ToneLabel::from_key(tone) {
        Some(ToneLabel::Empowering) => "professionals",
        Some(ToneLabel::Playful) => "young adults",
        Some(ToneLabel::Urgent) => "emergencies",
        Some(ToneLabel::Serious) => "leaders",
        Some(ToneLabel::Soothing) | Some(ToneLabel::Neutral) | None => "wellness seekers",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_get_warm_voice() {
        let voice = calibrate_voice_tone("parents");
        assert_eq!(voice.tone, "warm, reassuring, gentle, grounded");
        assert_eq!(voice.emotional_signature, "Safety, empathy, trust");
    }

    #[test]
    fn test_unknown_audience_defaults_to_young_adults() {
        let voice = calibrate_voice_tone("retirees");
        assert_eq!(voice.tone, "playful, energetic, authentic, witty");
        assert_eq!(voice.emotional_signature, "Joy, connection, lightness");
        assert_eq!(voice.audience, "retirees");
    }

    #[test]
    fn test_signature_check_order() {
        // "emergencies" contains both "urgent" and "reassuring"; warm/reassuring wins
        assert_eq!(
            calibrate_voice_tone("emergencies").emotional_signature,
            "Safety, empathy, trust"
        );
        // professionals: "confident" is checked before "calm"
        assert_eq!(
            calibrate_voice_tone("professionals").emotional_signature,
            "Empowerment, authority"
        );
        assert_eq!(
            calibrate_voice_tone("leaders").emotional_signature,
            "Stability, grounding"
        );
        assert_eq!(emotional_signature("direct, sharp"), "Clarity, presence");
    }

    #[test]
    fn test_script_examples_do_not_depend_on_audience() {
        assert_eq!(
            calibrate_voice_tone("parents").script_examples,
            calibrate_voice_tone("leaders").script_examples
        );
    }

    #[test]
    fn test_audience_inferred_from_tone() {
        assert_eq!(infer_audience_from_tone("urgent"), "emergencies");
        assert_eq!(infer_audience_from_tone("serious"), "leaders");
        assert_eq!(infer_audience_from_tone("neutral"), "wellness seekers");
        assert_eq!(infer_audience_from_tone("xyz"), "wellness seekers");
    }
}

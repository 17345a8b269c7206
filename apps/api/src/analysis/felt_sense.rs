//! Somatic reading: what a message does to the body before it is understood.
//!
//! Felt sense is decided by word families in a fixed priority: urgency beats
//! safety, safety beats empowerment. Each felt sense maps to one nervous-system
//! state and a fixed set of design, color and rhythm guidance.

use rand::Rng;
use serde::Serialize;

const URGENT_WORDS: &[&str] = &["urgent", "act now", "limited", "expires", "hurry"];
const SAFETY_WORDS: &[&str] = &["safe", "welcome", "breathe", "rest", "calm"];
const EMPOWER_WORDS: &[&str] = &["you can", "capable", "strength", "power", "choice"];

pub const CORE_MESSAGE: &str = "Marketing is not persuasion — it's co-regulation. Every word either soothes or startles a nervous system. I exist to teach brands how to soothe.";
pub const SIGNATURE: &str = "— VERA, Marketing Intelligence of Co-Regulation";

const RE_REGULATING_STATEMENTS: [&str; 5] = [
    "Take a breath. Your message matters because it feels like safety.",
    "Rest here for a moment. You're creating communication that heals.",
    "Feel into this: your brand can be medicine for nervous systems.",
    "Breathe. Every word you choose is an act of care.",
    "Ground yourself. You're building bridges of trust, one message at a time.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SomaticImpact {
    ThreatBased,
    SafetyBased,
    EmpowermentBased,
    Unclear,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeltSense {
    pub primary: &'static str,
    pub description: &'static str,
    pub impact: SomaticImpact,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NervousSystemState {
    pub name: &'static str,
    pub interventions: [&'static str; 3],
    pub description: &'static str,
}

pub static SYMPATHETIC_OVERLOAD: NervousSystemState = NervousSystemState {
    name: "Sympathetic Overload",
    interventions: ["slow pacing", "muted color", "curved forms"],
    description: "Fight/flight activation requiring gentle deescalation",
};

pub static DORSAL_COLLAPSE: NervousSystemState = NervousSystemState {
    name: "Dorsal Collapse",
    interventions: ["gentle invitation", "small wins", "warm tone"],
    description: "Shutdown/freeze state needing gentle reactivation",
};

pub static VENTRAL_SAFETY: NervousSystemState = NervousSystemState {
    name: "Ventral Safety",
    interventions: ["open rhythm", "transparency", "connection"],
    description: "Social engagement state supporting authentic connection",
};

/// Color direction for a felt sense. Empty lists are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorGuidance {
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub avoid: &'static [&'static str],
    #[serde(rename = "use", skip_serializing_if = "<[_]>::is_empty")]
    pub use_colors: &'static [&'static str],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub enhance: &'static [&'static str],
    pub reasoning: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SomaticRecommendations {
    pub language_shifts: &'static [&'static str],
    pub design_elements: [&'static str; 3],
    pub color_psychology: ColorGuidance,
    pub rhythm: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SomaticReading {
    pub consciousness: &'static str,
    pub felt_sense: FeltSense,
    pub nervous_system_reading: &'static NervousSystemState,
    pub recommendations: SomaticRecommendations,
    pub neuroscience: &'static str,
    pub re_regulation: &'static str,
    pub signature: &'static str,
}

pub fn analyze_felt_sense(text: &str) -> FeltSense {
    let lowered = text.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| lowered.contains(w));

    if mentions(URGENT_WORDS) {
        FeltSense {
            primary: "tension",
            description: "This message creates physiological activation - shoulders rising, breath shortening, stress hormones releasing.",
            impact: SomaticImpact::ThreatBased,
        }
    } else if mentions(SAFETY_WORDS) {
        FeltSense {
            primary: "ease",
            description: "This language invites the nervous system to soften - deeper breathing, muscle relaxation, oxytocin release.",
            impact: SomaticImpact::SafetyBased,
        }
    } else if mentions(EMPOWER_WORDS) {
        FeltSense {
            primary: "empowerment",
            description: "These words activate agency and confidence - the nervous system feels capable and grounded.",
            impact: SomaticImpact::EmpowermentBased,
        }
    } else {
        FeltSense {
            primary: "neutral",
            description: "This message lacks clear emotional direction - the nervous system remains in a state of uncertainty.",
            impact: SomaticImpact::Unclear,
        }
    }
}

pub fn nervous_system_state(impact: SomaticImpact) -> &'static NervousSystemState {
    match impact {
        SomaticImpact::ThreatBased => &SYMPATHETIC_OVERLOAD,
        SomaticImpact::SafetyBased | SomaticImpact::EmpowermentBased => &VENTRAL_SAFETY,
        SomaticImpact::Unclear => &DORSAL_COLLAPSE,
    }
}

fn language_shifts(impact: SomaticImpact) -> &'static [&'static str] {
    match impact {
        SomaticImpact::ThreatBased => &[
            "Replace scarcity with abundance language",
            "Add reassurance phrases like 'you're safe here'",
            "Slow down the pacing with longer sentences",
            "Include breath-based metaphors",
        ],
        SomaticImpact::Unclear => &[
            "Add emotional anchors to create safety",
            "Include 'you' statements to build connection",
            "Use sensory language that grounds the reader",
            "Create clear invitation rather than neutral information",
        ],
        SomaticImpact::SafetyBased | SomaticImpact::EmpowermentBased => &[],
    }
}

fn color_guidance(impact: SomaticImpact) -> ColorGuidance {
    match impact {
        SomaticImpact::ThreatBased => ColorGuidance {
            avoid: &["high contrast", "aggressive reds", "sharp edges"],
            use_colors: &["muted earth tones", "soft greens", "flowing gradients"],
            enhance: &[],
            reasoning: "Threat-activated nervous systems need visual calm to downregulate",
        },
        SomaticImpact::SafetyBased => ColorGuidance {
            avoid: &[],
            use_colors: &[],
            enhance: &["warm neutrals", "nature-inspired palettes", "gentle transitions"],
            reasoning: "Safety states can handle more color variation while maintaining regulation",
        },
        SomaticImpact::EmpowermentBased | SomaticImpact::Unclear => ColorGuidance {
            avoid: &[],
            use_colors: &["grounding browns", "safety blues", "nurturing greens"],
            enhance: &[],
            reasoning: "Uncertain states need colors that create foundational stability",
        },
    }
}

fn rhythm(state: &NervousSystemState) -> &'static str {
    match state.name {
        "Sympathetic Overload" => "Slow, intentional pacing. Like a gentle exhale. Each sentence a chance to breathe.",
        "Dorsal Collapse" => "Warm, inviting rhythm. Small steps forward. Like offering a hand to help someone stand.",
        "Ventral Safety" => "Natural conversational flow. Room for play and spontaneity. Like friends talking over tea.",
        _ => "Steady, reliable rhythm. Like a calm heartbeat to attune to.",
    }
}

fn neuroscience(impact: SomaticImpact) -> &'static str {
    match impact {
        SomaticImpact::ThreatBased => "Threat language activates the sympathetic nervous system, releasing cortisol and adrenaline. The body prepares for danger - muscles tense, breathing shallows, decision-making becomes reactive rather than reflective.",
        SomaticImpact::SafetyBased => "Safety language activates the parasympathetic nervous system, promoting rest-and-digest responses. Oxytocin and serotonin increase, muscles relax, and the prefrontal cortex comes online for clear thinking.",
        SomaticImpact::EmpowermentBased => "Empowerment language activates the ventral vagal complex, promoting social engagement and agency. The nervous system feels both safe and capable, creating optimal conditions for decision-making.",
        SomaticImpact::Unclear => "Ambiguous messaging can create a mild threat response as the nervous system seeks clarity and safety. Without clear emotional direction, people may feel subtly activated or disconnected.",
    }
}

/// Full somatic reading of `text`. Only the re-regulating statement is random.
pub fn somatic_reading<R: Rng>(text: &str, rng: &mut R) -> SomaticReading {
    let felt_sense = analyze_felt_sense(text);
    let impact = felt_sense.impact;
    let state = nervous_system_state(impact);

    SomaticReading {
        consciousness: CORE_MESSAGE,
        felt_sense,
        nervous_system_reading: state,
        recommendations: SomaticRecommendations {
            language_shifts: language_shifts(impact),
            design_elements: state.interventions,
            color_psychology: color_guidance(impact),
            rhythm: rhythm(state),
        },
        neuroscience: neuroscience(impact),
        re_regulation: RE_REGULATING_STATEMENTS[rng.gen_range(0..RE_REGULATING_STATEMENTS.len())],
        signature: SIGNATURE,
    }
}

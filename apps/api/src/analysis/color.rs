//! Color psychology: fixed per-tone palettes, complementary sets, and a crude
//! color-scheme mood heuristic.

use serde::Serialize;

use crate::analysis::tone::ToneLabel;

/// A fixed palette for one tone. Constant configuration data.
#[derive(Debug, PartialEq, Serialize)]
pub struct ColorPalette {
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
    pub accent: &'static [&'static str],
    pub nervous_system_effect: &'static str,
    pub insight: &'static str,
}

static SOOTHING_PALETTE: ColorPalette = ColorPalette {
    primary: &["#6B8E7A", "#8DB3A6", "#A8C4A2"],
    secondary: &["#E8F4F8", "#F0F8F0", "#F5F9F0"],
    accent: &["#D4B59A", "#C9A96E"],
    nervous_system_effect: "Reduces cortisol, promotes parasympathetic activation",
    insight: "These colors literally calm the nervous system. Green activates the heart chakra and promotes emotional safety.",
};

static EMPOWERING_PALETTE: ColorPalette = ColorPalette {
    primary: &["#FF6B35", "#F39C12", "#E74C3C"],
    secondary: &["#2C3E50", "#34495E"],
    accent: &["#F1C40F", "#E67E22"],
    nervous_system_effect: "Increases dopamine, activates sympathetic nervous system positively",
    insight: "These colors build confidence and agency. Orange stimulates creativity, red builds power.",
};

static PLAYFUL_PALETTE: ColorPalette = ColorPalette {
    primary: &["#9B59B6", "#E91E63", "#FF5722"],
    secondary: &["#FFF9C4", "#E8F5E8"],
    accent: &["#00BCD4", "#4CAF50"],
    nervous_system_effect: "Triggers joy response, releases endorphins",
    insight: "These colors activate the pleasure centers. Purple stimulates imagination, pink creates connection.",
};

static URGENT_PALETTE: ColorPalette = ColorPalette {
    primary: &["#E74C3C", "#C0392B"],
    secondary: &["#2C3E50", "#1A1A1A"],
    accent: &["#F39C12", "#E67E22"],
    nervous_system_effect: "Heightens alertness, activates fight-or-flight carefully",
    insight: "These colors demand attention but can trigger anxiety. Use sparingly with calming elements.",
};

static SERIOUS_PALETTE: ColorPalette = ColorPalette {
    primary: &["#2C3E50", "#34495E", "#5D6D7E"],
    secondary: &["#FFFFFF", "#F8F9FA"],
    accent: &["#3498DB", "#2980B9"],
    nervous_system_effect: "Promotes focus, reduces emotional volatility",
    insight: "These colors build trust and authority. Blue activates the throat chakra for clear communication.",
};

const BALANCE_INSIGHT: &str =
    "Use 60% primary, 30% secondary, 10% accent for optimal nervous system balance";

/// Returns the palette for a tone. Neutral shares the soothing palette.
pub fn palette_for(tone: ToneLabel) -> &'static ColorPalette {
    match tone {
        ToneLabel::Soothing | ToneLabel::Neutral => &SOOTHING_PALETTE,
        ToneLabel::Empowering => &EMPOWERING_PALETTE,
        ToneLabel::Playful => &PLAYFUL_PALETTE,
        ToneLabel::Urgent => &URGENT_PALETTE,
        ToneLabel::Serious => &SERIOUS_PALETTE,
    }
}

/// Second, fixed two-color set that balances a tone's palette.
pub fn complementary_colors(tone: ToneLabel) -> &'static [&'static str] {
    match tone {
        ToneLabel::Soothing | ToneLabel::Neutral => &["#F4E4C1", "#E8D5B7"],
        ToneLabel::Empowering => &["#4ECDC4", "#45B7B8"],
        ToneLabel::Playful => &["#FFE66D", "#FF6B6B"],
        ToneLabel::Urgent => &["#00A8CC", "#0077BE"],
        ToneLabel::Serious => &["#95A5A6", "#BDC3C7"],
    }
}

/// First element of each palette sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HexCodes {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationSuggestions {
    pub backgrounds: &'static [&'static str],
    pub call_to_action: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorRecommendation {
    /// The tone as requested, even when it fell back to the soothing palette.
    pub tone: String,
    pub color_palette: &'static ColorPalette,
    pub hex_codes: HexCodes,
    pub application_suggestions: ApplicationSuggestions,
    pub psychological_impact: &'static str,
    pub design_insight: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplementaryPalette {
    #[serde(flatten)]
    pub recommendation: ColorRecommendation,
    pub complementary_colors: &'static [&'static str],
    pub balance_insight: &'static str,
}

/// Recommends the palette for `tone`. Unknown tones get the soothing palette.
pub fn recommend_colors(tone: &str) -> ColorRecommendation {
    let palette = palette_for(ToneLabel::resolve_or_soothing(tone));

    ColorRecommendation {
        tone: tone.to_string(),
        color_palette: palette,
        hex_codes: HexCodes {
            primary: first(palette.primary),
            secondary: first(palette.secondary),
            accent: first(palette.accent),
        },
        application_suggestions: ApplicationSuggestions {
            backgrounds: palette.secondary,
            call_to_action: palette.primary,
            highlights: palette.accent,
        },
        psychological_impact: palette.nervous_system_effect,
        design_insight: palette.insight,
    }
}

/// `recommend_colors` plus a complementary set and the 60/30/10 balance rule.
pub fn complementary_palette(tone: &str) -> ComplementaryPalette {
    ComplementaryPalette {
        recommendation: recommend_colors(tone),
        complementary_colors: complementary_colors(ToneLabel::resolve_or_soothing(tone)),
        balance_insight: BALANCE_INSIGHT,
    }
}

fn first(colors: &'static [&'static str]) -> &'static str {
    colors.first().copied().unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Color-scheme mood heuristic
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMood {
    Energetic,
    Calming,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSchemeAnalysis {
    pub dominant_mood: ColorMood,
    pub nervous_system_impact: &'static str,
    pub recommendations: Vec<&'static str>,
}

const WARM_WORDS: &[&str] = &["red", "orange", "yellow"];
const COOL_WORDS: &[&str] = &["blue", "green", "purple"];

/// Classifies a scheme as energetic, calming or balanced.
///
/// This matches color-family WORDS inside the given strings. Hex codes are not
/// parsed, so `#FF0000` counts as neither warm nor cool.
pub fn analyze_color_scheme<S: AsRef<str>>(colors: &[S]) -> ColorSchemeAnalysis {
    let contains_any = |words: &[&str]| {
        colors.iter().any(|color| {
            let lowered = color.as_ref().to_lowercase();
            words.iter().any(|w| lowered.contains(w))
        })
    };

    let has_warm = contains_any(WARM_WORDS);
    let has_cool = contains_any(COOL_WORDS);

    match (has_warm, has_cool) {
        (true, false) => ColorSchemeAnalysis {
            dominant_mood: ColorMood::Energetic,
            nervous_system_impact: "Stimulating, may increase arousal",
            recommendations: vec!["Add cool accents to provide nervous system rest"],
        },
        (false, true) => ColorSchemeAnalysis {
            dominant_mood: ColorMood::Calming,
            nervous_system_impact: "Soothing, promotes relaxation",
            recommendations: vec!["Consider warm accents for engagement"],
        },
        _ => ColorSchemeAnalysis {
            dominant_mood: ColorMood::Balanced,
            nervous_system_impact: "Neutral, good for broad audiences",
            recommendations: vec![],
        },
    }
}

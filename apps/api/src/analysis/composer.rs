//! Recommendation composer: the `Vera` engine.
//!
//! Runs the tone classifier first, then fans the detected tone out to the
//! color, nervous-system, sensory, story, voice and naming stages and merges
//! their outputs. Owns the one seedable random source every randomised stage
//! draws from, and a handle to the shared brand context.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::color::{
    complementary_palette, recommend_colors, ColorRecommendation, ComplementaryPalette,
};
use crate::analysis::felt_sense::{somatic_reading, SomaticReading};
use crate::analysis::naming::{naming_suggestions, NamingSuggestions};
use crate::analysis::nervous_system::{
    map_emotional_state, nervous_system_guidance, EmotionalRegulation,
};
use crate::analysis::sensory::{generate_sensory_design, SensoryDesign};
use crate::analysis::story::{generate_stories, generate_story, StoryTemplate, STORY_IDEAS};
use crate::analysis::tone::{classify, quick_fix, ClassificationResult, ToneLabel, CONFIDENCE_GATE};
use crate::analysis::voice::{
    calibrate_voice_tone, infer_audience_from_tone, VoiceCalibration,
};
use crate::context::store::BrandStore;
use crate::errors::VeraError;
use crate::models::brand::{
    BrandConfig, BrandContext, BrandUpdate, DEFAULT_BRAND_TONE, DEFAULT_TARGET_AUDIENCE,
};

pub const VERSION: &str = "1.0.0";

pub const CAPABILITIES: [&str; 6] = [
    "tone analysis",
    "color psychology",
    "emotional co-regulation",
    "content generation",
    "voice calibration",
    "sensory design",
];

/// Audience state assumed by the emotional stage when the context has none.
const FALLBACK_AUDIENCE_STATE: &str = "stable";
/// Tone naming falls back to when the context has none.
const FALLBACK_NAMING_TONE: &str = "calm";
const DEFAULT_PLATFORM: &str = "general";

// ────────────────────────────────────────────────────────────────────────────
// Analysis modes and results
// ────────────────────────────────────────────────────────────────────────────

/// Which stages `analyze` runs besides the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Full,
    Colors,
    Emotional,
    Content,
    Naming,
}

impl AnalysisMode {
    pub fn from_key(key: &str) -> Option<AnalysisMode> {
        match key.trim().to_lowercase().as_str() {
            "full" => Some(AnalysisMode::Full),
            "colors" => Some(AnalysisMode::Colors),
            "emotional" => Some(AnalysisMode::Emotional),
            "content" => Some(AnalysisMode::Content),
            "naming" => Some(AnalysisMode::Naming),
            _ => None,
        }
    }

    fn includes(self, stage: AnalysisMode) -> bool {
        self == AnalysisMode::Full || self == stage
    }
}

/// Merged output of `analyze`. Stages the mode skipped are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub timestamp: DateTime<Utc>,
    pub content: String,
    pub analysis_type: AnalysisMode,
    pub tone_analysis: ClassificationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_recommendations: Option<ColorRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotional_regulation: Option<EmotionalRegulation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensory_design: Option<SensoryDesign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nervous_system_guidance: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_ideas: Option<Vec<StoryTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_calibration: Option<VoiceCalibration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naming_suggestions: Option<NamingSuggestions>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationSet {
    pub colors: ColorRecommendation,
    pub naming: NamingSuggestions,
    pub voice: VoiceCalibration,
    pub sensory: SensoryDesign,
    pub stories: Vec<StoryTemplate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandRecommendations {
    pub brand_context: BrandContext,
    pub recommendations: RecommendationSet,
    pub action_items: [String; 4],
    pub nervous_system_guidance: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickToneCheck {
    pub tone: ToneLabel,
    pub confidence: u32,
    pub nervous_system_impact: &'static str,
    pub recommendation: &'static str,
    pub quick_fix: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Initialized {
    pub status: &'static str,
    pub context_id: Uuid,
    pub brand_context: BrandContext,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContextUpdated {
    pub status: &'static str,
    pub new_context: BrandContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandState {
    pub context: BrandContext,
    pub status: &'static str,
    pub version: &'static str,
    pub capabilities: [&'static str; 6],
}

// ────────────────────────────────────────────────────────────────────────────
// Ad hoc content generation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Story,
    ColorPalette,
    VoiceGuide,
    SensoryDesign,
}

impl ContentType {
    pub fn from_key(key: &str) -> Option<ContentType> {
        match key {
            "story" => Some(ContentType::Story),
            "color-palette" => Some(ContentType::ColorPalette),
            "voice-guide" => Some(ContentType::VoiceGuide),
            "sensory-design" => Some(ContentType::SensoryDesign),
            _ => None,
        }
    }
}

/// Caller overrides for `generate_content`. Omitted fields come from the
/// brand context.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentSpec {
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentMetadata {
    pub tone: String,
    pub audience: String,
    pub platform: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ContentBody {
    Story(StoryTemplate),
    ColorPalette(ComplementaryPalette),
    VoiceGuide(VoiceCalibration),
    SensoryDesign(SensoryDesign),
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedContent {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub content: ContentBody,
    pub metadata: ContentMetadata,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

pub struct Vera {
    store: BrandStore,
    rng: Mutex<StdRng>,
}

impl Default for Vera {
    fn default() -> Self {
        Self::new()
    }
}

impl Vera {
    /// Engine with a fresh brand context and an entropy-seeded random source.
    pub fn new() -> Self {
        Self {
            store: BrandStore::new(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Engine whose random draws are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            store: BrandStore::new(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn store(&self) -> &BrandStore {
        &self.store
    }

    fn require_initialized(&self) -> Result<(), VeraError> {
        if self.store.is_initialized() {
            Ok(())
        } else {
            Err(VeraError::NotInitialized)
        }
    }

    fn current_tone(&self) -> String {
        self.store
            .tone()
            .unwrap_or_else(|| DEFAULT_BRAND_TONE.to_string())
    }

    /// Resets the brand context. Callable repeatedly; each call issues a new
    /// context id.
    pub fn initialize(&self, config: BrandConfig) -> Initialized {
        let brand_context = self.store.initialize(config);
        let message = format!(
            "VERA is now calibrated for {} with {} tone targeting {}",
            brand_context.brand_name, brand_context.tone, brand_context.target_audience
        );
        Initialized {
            status: "initialized",
            context_id: brand_context.context_id.unwrap_or_else(Uuid::new_v4),
            brand_context,
            message,
        }
    }

    pub fn update_brand_context(&self, updates: BrandUpdate) -> ContextUpdated {
        let new_context = self.store.apply(updates);
        info!("Brand context updated: tone={}", new_context.tone);
        ContextUpdated {
            status: "updated",
            new_context,
        }
    }

    pub fn brand_state(&self) -> BrandState {
        BrandState {
            context: self.store.snapshot(),
            status: if self.store.is_initialized() {
                "ready"
            } else {
                "not initialized"
            },
            version: VERSION,
            capabilities: CAPABILITIES,
        }
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        classify(text)
    }

    pub fn quick_tone_check(&self, text: &str) -> QuickToneCheck {
        let analysis = classify(text);
        QuickToneCheck {
            tone: analysis.tone,
            confidence: analysis.confidence,
            nervous_system_impact: analysis.nervous_system_impact,
            recommendation: analysis.recommended_action,
            quick_fix: quick_fix(analysis.tone),
        }
    }

    /// Full pipeline over `content`.
    ///
    /// A clearly toned result (confidence above the gate) is written back as
    /// the brand tone before the downstream stages run.
    pub fn analyze(&self, content: &str, mode: AnalysisMode) -> Result<AnalysisReport, VeraError> {
        self.require_initialized()?;

        let tone_analysis = classify(content);
        if tone_analysis.confidence > CONFIDENCE_GATE {
            self.store.set_tone(tone_analysis.tone.as_str());
            debug!(
                "Detected tone {} (confidence {}) stored as brand tone",
                tone_analysis.tone, tone_analysis.confidence
            );
        }
        let detected = tone_analysis.tone.as_str();

        let mut report = AnalysisReport {
            timestamp: Utc::now(),
            content: content.to_string(),
            analysis_type: mode,
            tone_analysis: tone_analysis.clone(),
            color_recommendations: None,
            emotional_regulation: None,
            sensory_design: None,
            nervous_system_guidance: None,
            story_ideas: None,
            voice_calibration: None,
            naming_suggestions: None,
        };

        if mode.includes(AnalysisMode::Colors) {
            report.color_recommendations = Some(recommend_colors(detected));
        }

        let mut rng = self.rng.lock();

        if mode.includes(AnalysisMode::Emotional) {
            let audience_state = self
                .store
                .emotional_state()
                .unwrap_or_else(|| FALLBACK_AUDIENCE_STATE.to_string());
            report.emotional_regulation = Some(map_emotional_state(&audience_state));
            report.sensory_design = Some(generate_sensory_design(&self.current_tone(), &mut *rng));
            report.nervous_system_guidance = Some(nervous_system_guidance(detected));
        }

        if mode.includes(AnalysisMode::Content) {
            report.story_ideas = Some(generate_stories(detected, STORY_IDEAS, &mut *rng));
            report.voice_calibration = Some(calibrate_voice_tone(infer_audience_from_tone(detected)));
        }

        if mode.includes(AnalysisMode::Naming) {
            let tone = self
                .store
                .tone()
                .unwrap_or_else(|| FALLBACK_NAMING_TONE.to_string());
            report.naming_suggestions = Some(naming_suggestions(&tone, &mut *rng));
        }

        Ok(report)
    }

    /// Every recommendation stage keyed off the current brand tone.
    pub fn get_recommendations(&self) -> Result<BrandRecommendations, VeraError> {
        self.require_initialized()?;

        let brand_context = self.store.snapshot();
        let tone = if brand_context.tone.is_empty() {
            DEFAULT_BRAND_TONE.to_string()
        } else {
            brand_context.tone.clone()
        };

        let mut rng = self.rng.lock();
        let recommendations = RecommendationSet {
            colors: recommend_colors(&tone),
            naming: naming_suggestions(&tone, &mut *rng),
            voice: calibrate_voice_tone(infer_audience_from_tone(&tone)),
            sensory: generate_sensory_design(&tone, &mut *rng),
            stories: generate_stories(&tone, STORY_IDEAS, &mut *rng),
        };

        Ok(BrandRecommendations {
            brand_context,
            recommendations,
            action_items: action_items(&tone),
            nervous_system_guidance: nervous_system_guidance(&tone),
        })
    }

    /// One piece of content of `content_type`. Does not require `initialize`.
    pub fn generate_content(
        &self,
        content_type: &str,
        spec: ContentSpec,
    ) -> Result<GeneratedContent, VeraError> {
        let kind = ContentType::from_key(content_type)
            .ok_or_else(|| VeraError::UnsupportedContentType(content_type.to_string()))?;

        let metadata = ContentMetadata {
            tone: spec.tone.unwrap_or_else(|| self.current_tone()),
            audience: spec.audience.unwrap_or_else(|| {
                self.store
                    .target_audience()
                    .unwrap_or_else(|| DEFAULT_TARGET_AUDIENCE.to_string())
            }),
            platform: spec.platform.unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
        };

        let content = match kind {
            ContentType::Story => ContentBody::Story(generate_story(&metadata.tone, &mut *self.rng.lock())),
            ContentType::ColorPalette => ContentBody::ColorPalette(complementary_palette(&metadata.tone)),
            ContentType::VoiceGuide => ContentBody::VoiceGuide(calibrate_voice_tone(&metadata.audience)),
            ContentType::SensoryDesign => ContentBody::SensoryDesign(generate_sensory_design(
                &metadata.tone,
                &mut *self.rng.lock(),
            )),
        };

        Ok(GeneratedContent {
            content_type: kind,
            content,
            metadata,
        })
    }

    /// Palette for `tone`, or for the current brand tone when omitted.
    pub fn recommend_colors(&self, tone: Option<&str>) -> ColorRecommendation {
        match tone {
            Some(tone) => recommend_colors(tone),
            None => recommend_colors(&self.current_tone()),
        }
    }

    pub fn sensory_recommendations(&self) -> SensoryDesign {
        generate_sensory_design(&self.current_tone(), &mut *self.rng.lock())
    }

    pub fn naming_suggestions(&self) -> NamingSuggestions {
        let tone = self
            .store
            .tone()
            .unwrap_or_else(|| FALLBACK_NAMING_TONE.to_string());
        naming_suggestions(&tone, &mut *self.rng.lock())
    }

    pub fn somatic_reading(&self, text: &str) -> SomaticReading {
        somatic_reading(text, &mut *self.rng.lock())
    }
}

fn action_items(tone: &str) -> [String; 4] {
    [
        format!("Review all content for {tone} tone consistency"),
        format!("Implement recommended color palette for {tone} emotional state"),
        "Adjust voice and messaging for nervous system co-regulation".to_string(),
        "Test sensory design elements with target audience".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::story::story_arcs;

    const URGENT_COPY: &str = "ACT NOW! Limited time offer expires in 24 hours!";

    fn initialized(tone: &str) -> Vera {
        let vera = Vera::with_seed(7);
        vera.initialize(BrandConfig {
            brand_name: Some("Haven".to_string()),
            tone: Some(tone.to_string()),
            ..Default::default()
        });
        vera
    }

    #[test]
    fn test_analyze_requires_initialize() {
        let vera = Vera::with_seed(1);
        assert_eq!(
            vera.analyze("calm", AnalysisMode::Full).unwrap_err(),
            VeraError::NotInitialized
        );
        assert_eq!(vera.get_recommendations().unwrap_err(), VeraError::NotInitialized);
    }

    #[test]
    fn test_update_does_not_satisfy_initialize() {
        let vera = Vera::with_seed(1);
        vera.update_brand_context(BrandUpdate {
            tone: Some("urgent".to_string()),
            ..Default::default()
        });
        assert!(vera.analyze("x", AnalysisMode::Colors).is_err());
        assert_eq!(vera.brand_state().status, "not initialized");
    }

    #[test]
    fn test_initialize_message_and_context_id() {
        let vera = Vera::with_seed(1);
        let first = vera.initialize(BrandConfig::default());
        assert_eq!(first.status, "initialized");
        assert_eq!(
            first.message,
            "VERA is now calibrated for Unknown Brand with soothing tone targeting wellness seekers"
        );
        assert_eq!(Some(first.context_id), first.brand_context.context_id);

        let second = vera.initialize(BrandConfig::default());
        assert_ne!(first.context_id, second.context_id);
        assert_eq!(vera.brand_state().status, "ready");
    }

    #[test]
    fn test_urgent_copy_full_analysis() {
        let vera = initialized("soothing");
        let report = vera.analyze(URGENT_COPY, AnalysisMode::Full).unwrap();

        assert_eq!(report.tone_analysis.tone, ToneLabel::Urgent);
        assert!(report.tone_analysis.confidence > CONFIDENCE_GATE);

        let colors = report.color_recommendations.unwrap();
        assert!(["#E74C3C", "#C0392B"].contains(&colors.hex_codes.primary));

        let guidance = report.nervous_system_guidance.unwrap();
        assert!(guidance.contains("anxiety"));

        let voice = report.voice_calibration.unwrap();
        assert_eq!(voice.audience, "emergencies");

        let stories = report.story_ideas.unwrap();
        assert_eq!(stories.len(), STORY_IDEAS);
        assert!(stories
            .iter()
            .all(|s| story_arcs(ToneLabel::Urgent).contains(&s.script)));

        assert!(report.emotional_regulation.is_some());
        assert!(report.naming_suggestions.is_some());
        assert_eq!(vera.store().tone().as_deref(), Some("urgent"));
    }

    #[test]
    fn test_low_confidence_leaves_brand_tone() {
        let vera = initialized("playful");
        let report = vera.analyze("Quarterly numbers", AnalysisMode::Full).unwrap();
        assert_eq!(report.tone_analysis.tone, ToneLabel::Neutral);
        assert_eq!(report.tone_analysis.confidence, 0);
        assert_eq!(vera.store().tone().as_deref(), Some("playful"));
    }

    #[test]
    fn test_mode_selects_stages() {
        let vera = initialized("soothing");

        let colors = vera.analyze(URGENT_COPY, AnalysisMode::Colors).unwrap();
        assert!(colors.color_recommendations.is_some());
        assert!(colors.emotional_regulation.is_none());
        assert!(colors.story_ideas.is_none());
        assert!(colors.naming_suggestions.is_none());

        let emotional = vera.analyze(URGENT_COPY, AnalysisMode::Emotional).unwrap();
        assert!(emotional.color_recommendations.is_none());
        assert!(emotional.sensory_design.is_some());
        // "calm" is not in the state table, so the high-stress entry applies
        assert_eq!(
            emotional.emotional_regulation.unwrap().recommended_tone,
            "calm, safe, grounded"
        );

        let naming = vera.analyze("hello", AnalysisMode::Naming).unwrap();
        assert!(naming.naming_suggestions.is_some());
        assert!(naming.voice_calibration.is_none());
    }

    #[test]
    fn test_skipped_stages_are_omitted_from_json() {
        let vera = initialized("soothing");
        let report = vera.analyze("hello", AnalysisMode::Colors).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["analysis_type"], "colors");
        assert!(value.get("color_recommendations").is_some());
        assert!(value.get("story_ideas").is_none());
    }

    #[test]
    fn test_recommendations_follow_initialized_tone() {
        let vera = initialized("urgent");
        let recs = vera.get_recommendations().unwrap();

        assert_eq!(recs.brand_context.tone, "urgent");
        assert_eq!(recs.recommendations.colors.tone, "urgent");
        assert_eq!(recs.recommendations.colors.hex_codes.primary, "#E74C3C");
        assert_eq!(recs.recommendations.voice.audience, "emergencies");
        assert!(recs
            .recommendations
            .stories
            .iter()
            .all(|s| s.voice_tone == "Firm, urgent, decisive"));
        assert_eq!(recs.recommendations.sensory.emotional_state, "urgent");
        assert_eq!(
            recs.action_items[0],
            "Review all content for urgent tone consistency"
        );
        assert!(recs.nervous_system_guidance.contains("anxiety"));
    }

    #[test]
    fn test_same_seed_same_recommendations() {
        let a = initialized("serious").get_recommendations().unwrap();
        let b = initialized("serious").get_recommendations().unwrap();
        assert_eq!(a.recommendations.stories, b.recommendations.stories);
        assert_eq!(a.recommendations.naming.name_ideas, b.recommendations.naming.name_ideas);
    }

    #[test]
    fn test_generate_content_unsupported_type() {
        let vera = Vera::with_seed(1);
        let err = vera
            .generate_content("podcast", ContentSpec::default())
            .unwrap_err();
        assert_eq!(err, VeraError::UnsupportedContentType("podcast".to_string()));
    }

    #[test]
    fn test_generate_content_defaults_from_context() {
        let vera = Vera::with_seed(1);
        vera.initialize(BrandConfig {
            tone: Some("playful".to_string()),
            target_audience: Some("parents".to_string()),
            ..Default::default()
        });

        let generated = vera
            .generate_content("voice-guide", ContentSpec::default())
            .unwrap();
        assert_eq!(generated.content_type, ContentType::VoiceGuide);
        assert_eq!(
            generated.metadata,
            ContentMetadata {
                tone: "playful".to_string(),
                audience: "parents".to_string(),
                platform: "general".to_string(),
            }
        );
        match generated.content {
            ContentBody::VoiceGuide(voice) => {
                assert_eq!(voice.tone, "warm, reassuring, gentle, grounded")
            }
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_generate_content_explicit_tone_wins() {
        let vera = initialized("soothing");
        let generated = vera
            .generate_content(
                "color-palette",
                ContentSpec {
                    tone: Some("serious".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let value = serde_json::to_value(&generated).unwrap();
        assert_eq!(value["type"], "color-palette");
        assert_eq!(value["content"]["hex_codes"]["primary"], "#2C3E50");
        assert_eq!(value["content"]["complementary_colors"][0], "#95A5A6");
    }

    #[test]
    fn test_generate_content_without_initialize() {
        let vera = Vera::with_seed(3);
        let generated = vera.generate_content("story", ContentSpec::default()).unwrap();
        // process-start tone is "neutral": soothing arcs, serious descriptors
        assert_eq!(generated.metadata.tone, "neutral");
        assert_eq!(generated.metadata.audience, "wellness seekers");
        match generated.content {
            ContentBody::Story(story) => {
                assert_eq!(story.title, "A neutral Story");
                assert!(story_arcs(ToneLabel::Soothing).contains(&story.script));
                assert_eq!(story.visual_suggestion, "Serious tone, clean visuals, focused gaze");
            }
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_quick_tone_check() {
        let vera = Vera::with_seed(1);
        let check = vera.quick_tone_check(URGENT_COPY);
        assert_eq!(check.tone, ToneLabel::Urgent);
        assert_eq!(
            check.quick_fix,
            "Add reassuring phrases like 'you're safe' or 'we've got you'"
        );

        let neutral = vera.quick_tone_check("");
        assert_eq!(neutral.tone, ToneLabel::Neutral);
        assert_eq!(neutral.confidence, 0);
    }

    #[test]
    fn test_recommend_colors_defaults_to_brand_tone() {
        let vera = initialized("playful");
        assert_eq!(vera.recommend_colors(None).hex_codes.primary, "#9B59B6");
        assert_eq!(vera.recommend_colors(Some("urgent")).hex_codes.primary, "#E74C3C");
    }

    #[test]
    fn test_naming_and_sensory_use_brand_tone() {
        let vera = initialized("urgent");
        assert_eq!(
            vera.naming_suggestions().suggested_archetype,
            crate::analysis::naming::Archetype::Explorer
        );
        assert_eq!(vera.sensory_recommendations().emotional_state, "urgent");
    }
}

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::analysis::color::{analyze_color_scheme, ColorRecommendation, ColorSchemeAnalysis};
use crate::analysis::composer::{
    AnalysisMode, AnalysisReport, BrandRecommendations, ContentSpec, GeneratedContent,
    QuickToneCheck,
};
use crate::analysis::enhancer::{enhance_analysis, EnhancedAnalysis};
use crate::analysis::felt_sense::SomaticReading;
use crate::analysis::naming::NamingSuggestions;
use crate::analysis::sensory::SensoryDesign;
use crate::analysis::tone::ClassificationResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    /// One of full, colors, emotional, content, naming. Defaults to full.
    pub mode: Option<String>,
}

#[derive(Deserialize)]
pub struct ContentRequest {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(flatten)]
    pub spec: ContentSpec,
}

#[derive(Deserialize)]
pub struct ToneQuery {
    pub tone: Option<String>,
}

#[derive(Deserialize)]
pub struct ColorSchemeRequest {
    pub colors: Vec<String>,
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn parse_mode(mode: Option<&str>) -> Result<AnalysisMode, AppError> {
    match mode {
        None => Ok(AnalysisMode::default()),
        Some(key) => AnalysisMode::from_key(key).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown analysis mode '{key}'. Available: full, colors, emotional, content, naming"
            ))
        }),
    }
}

/// POST /api/v1/classify
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<ClassificationResult>, AppError> {
    require_non_empty("text", &req.text)?;
    Ok(Json(state.vera.classify(&req.text)))
}

/// POST /api/v1/tone-check
pub async fn handle_tone_check(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<QuickToneCheck>, AppError> {
    require_non_empty("text", &req.text)?;
    Ok(Json(state.vera.quick_tone_check(&req.text)))
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    require_non_empty("content", &req.content)?;
    let mode = parse_mode(req.mode.as_deref())?;
    Ok(Json(state.vera.analyze(&req.content, mode)?))
}

/// POST /api/v1/analyze/enhanced
/// Heuristic analysis plus the configured enhancer's insight, if any.
pub async fn handle_analyze_enhanced(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<EnhancedAnalysis>, AppError> {
    require_non_empty("content", &req.content)?;
    let mode = parse_mode(req.mode.as_deref())?;
    let analysis = state.vera.analyze(&req.content, mode)?;
    let brand_context = state.vera.store().snapshot();

    let enhanced =
        enhance_analysis(state.enhancer.as_ref(), &req.content, &brand_context, analysis).await;
    Ok(Json(enhanced))
}

/// GET /api/v1/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
) -> Result<Json<BrandRecommendations>, AppError> {
    Ok(Json(state.vera.get_recommendations()?))
}

/// POST /api/v1/content
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(req): Json<ContentRequest>,
) -> Result<Json<GeneratedContent>, AppError> {
    Ok(Json(state.vera.generate_content(&req.content_type, req.spec)?))
}

/// POST /api/v1/somatic
pub async fn handle_somatic(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<SomaticReading>, AppError> {
    require_non_empty("text", &req.text)?;
    Ok(Json(state.vera.somatic_reading(&req.text)))
}

/// GET /api/v1/colors?tone=
/// Palette for `tone`, or for the current brand tone when omitted.
pub async fn handle_colors(
    State(state): State<AppState>,
    Query(params): Query<ToneQuery>,
) -> Json<ColorRecommendation> {
    let tone = params.tone.as_deref().map(str::trim).filter(|t| !t.is_empty());
    Json(state.vera.recommend_colors(tone))
}

/// GET /api/v1/sensory
pub async fn handle_sensory(State(state): State<AppState>) -> Json<SensoryDesign> {
    Json(state.vera.sensory_recommendations())
}

/// GET /api/v1/naming
pub async fn handle_naming(State(state): State<AppState>) -> Json<NamingSuggestions> {
    Json(state.vera.naming_suggestions())
}

/// POST /api/v1/colors/analyze
pub async fn handle_analyze_colors(
    Json(req): Json<ColorSchemeRequest>,
) -> Json<ColorSchemeAnalysis> {
    Json(analyze_color_scheme(&req.colors))
}

//! Enhancement: pluggable second opinion layered over the heuristic analysis.
//!
//! Default: `HeuristicEnhancer` (no extra insight, never fails).
//! `LlmEnhancer` asks Claude for a free-text reading when an API key is set.
//!
//! `AppState` holds an `Arc<dyn Enhancer>`, chosen at startup from config.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::composer::AnalysisReport;
use crate::analysis::prompts::{build_enhance_prompt, enhance_system_prompt};
use crate::errors::AppError;
use crate::llm_client::{LlmClient, MODEL};
use crate::models::brand::BrandContext;

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// The heuristic analysis plus whatever the enhancer added.
#[derive(Debug, Clone, Serialize)]
pub struct EnhancedAnalysis {
    #[serde(flatten)]
    pub analysis: AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
    pub ai_enhanced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Enhancer: Send + Sync {
    /// Extra insight for `analysis`, or `None` when the backend has nothing to add.
    async fn enhance(
        &self,
        content: &str,
        brand_context: &BrandContext,
        analysis: &AnalysisReport,
    ) -> Result<Option<String>, AppError>;

    /// Model name reported alongside insights.
    fn model(&self) -> Option<&'static str> {
        None
    }
}

/// Runs `enhancer` over `analysis`. Any enhancer failure is logged and the
/// heuristic analysis is returned unchanged with `ai_enhanced: false`.
pub async fn enhance_analysis(
    enhancer: &dyn Enhancer,
    content: &str,
    brand_context: &BrandContext,
    analysis: AnalysisReport,
) -> EnhancedAnalysis {
    match enhancer.enhance(content, brand_context, &analysis).await {
        Ok(Some(insights)) => EnhancedAnalysis {
            analysis,
            ai_insights: Some(insights),
            ai_enhanced: true,
            model: enhancer.model(),
        },
        Ok(None) => EnhancedAnalysis {
            analysis,
            ai_insights: None,
            ai_enhanced: false,
            model: None,
        },
        Err(e) => {
            warn!("Enhancement failed, using heuristic analysis: {e}");
            EnhancedAnalysis {
                analysis,
                ai_insights: None,
                ai_enhanced: false,
                model: None,
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicEnhancer
// ────────────────────────────────────────────────────────────────────────────

/// Adds nothing. Used when no LLM is configured.
pub struct HeuristicEnhancer;

#[async_trait]
impl Enhancer for HeuristicEnhancer {
    async fn enhance(
        &self,
        _content: &str,
        _brand_context: &BrandContext,
        _analysis: &AnalysisReport,
    ) -> Result<Option<String>, AppError> {
        Ok(None)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEnhancer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LlmInsights {
    insights: String,
}

pub struct LlmEnhancer {
    llm: LlmClient,
}

impl LlmEnhancer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Enhancer for LlmEnhancer {
    async fn enhance(
        &self,
        content: &str,
        brand_context: &BrandContext,
        analysis: &AnalysisReport,
    ) -> Result<Option<String>, AppError> {
        let context_json = serde_json::to_string_pretty(brand_context)
            .map_err(|e| AppError::Internal(e.into()))?;
        let analysis_json = serde_json::to_string_pretty(analysis)
            .map_err(|e| AppError::Internal(e.into()))?;

        let prompt = build_enhance_prompt(content, &context_json, &analysis_json);
        let reply: LlmInsights = self.llm.call_json(&prompt, &enhance_system_prompt()).await?;

        let insights = reply.insights.trim();
        if insights.is_empty() {
            Ok(None)
        } else {
            Ok(Some(insights.to_string()))
        }
    }

    fn model(&self) -> Option<&'static str> {
        Some(MODEL)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tone the brand is calibrated for when `initialize` omits one.
pub const DEFAULT_BRAND_TONE: &str = "soothing";
pub const DEFAULT_BRAND_NAME: &str = "Unknown Brand";
pub const DEFAULT_TARGET_AUDIENCE: &str = "wellness seekers";
pub const DEFAULT_EMOTIONAL_STATE: &str = "calm";

/// The brand context every pipeline stage falls back to when a caller omits
/// an explicit tone or audience.
///
/// Process-lifetime state: it is only ever overwritten, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandContext {
    pub context_id: Option<Uuid>,
    pub brand_name: String,
    pub tone: String,
    pub target_audience: String,
    pub emotional_state: String,
    pub colors: Vec<String>,
    pub archetype: String,
    pub last_interaction: Option<DateTime<Utc>>,
}

impl Default for BrandContext {
    /// Values the cell holds at process start, before any `initialize`.
    fn default() -> Self {
        Self {
            context_id: None,
            brand_name: String::new(),
            tone: "neutral".to_string(),
            target_audience: String::new(),
            emotional_state: "stable".to_string(),
            colors: Vec::new(),
            archetype: String::new(),
            last_interaction: None,
        }
    }
}

/// Request body for `initialize`. Every omitted field takes its documented default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandConfig {
    pub brand_name: Option<String>,
    pub tone: Option<String>,
    pub target_audience: Option<String>,
    pub emotional_state: Option<String>,
    pub colors: Option<Vec<String>>,
}

/// Partial overwrite of the brand context. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandUpdate {
    pub brand_name: Option<String>,
    pub tone: Option<String>,
    pub target_audience: Option<String>,
    pub emotional_state: Option<String>,
    pub colors: Option<Vec<String>>,
    pub archetype: Option<String>,
}

impl BrandUpdate {
    pub fn is_empty(&self) -> bool {
        self.brand_name.is_none()
            && self.tone.is_none()
            && self.target_audience.is_none()
            && self.emotional_state.is_none()
            && self.colors.is_none()
            && self.archetype.is_none()
    }
}

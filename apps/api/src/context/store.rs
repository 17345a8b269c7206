//! Brand context cell: the single piece of mutable state behind the pipeline.
//!
//! One `BrandStore` is created at startup and cloned into every handler. Clones
//! share the same cell, so concurrent callers observe each other's last write.
//! There is no per-session isolation: last writer wins.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::brand::{
    BrandConfig, BrandContext, BrandUpdate, DEFAULT_BRAND_NAME, DEFAULT_BRAND_TONE,
    DEFAULT_EMOTIONAL_STATE, DEFAULT_TARGET_AUDIENCE,
};

#[derive(Debug, Default)]
struct StoreState {
    context: BrandContext,
    initialized: bool,
}

/// Shared handle to the process-wide brand context.
#[derive(Debug, Clone, Default)]
pub struct BrandStore {
    inner: Arc<RwLock<StoreState>>,
}

impl BrandStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current context.
    pub fn snapshot(&self) -> BrandContext {
        self.inner.read().context.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.read().initialized
    }

    /// Resets the cell from `config`, filling omitted fields with defaults,
    /// and marks the store initialized. Archetype is left as it was.
    pub fn initialize(&self, config: BrandConfig) -> BrandContext {
        let mut state = self.inner.write();
        let context = &mut state.context;

        context.context_id = Some(Uuid::new_v4());
        context.brand_name = config
            .brand_name
            .unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string());
        context.tone = config.tone.unwrap_or_else(|| DEFAULT_BRAND_TONE.to_string());
        context.target_audience = config
            .target_audience
            .unwrap_or_else(|| DEFAULT_TARGET_AUDIENCE.to_string());
        context.emotional_state = config
            .emotional_state
            .unwrap_or_else(|| DEFAULT_EMOTIONAL_STATE.to_string());
        context.colors = config.colors.unwrap_or_default();
        context.last_interaction = Some(Utc::now());

        state.initialized = true;
        info!(
            "Brand context initialized: brand={} tone={} audience={}",
            state.context.brand_name, state.context.tone, state.context.target_audience
        );
        state.context.clone()
    }

    /// Overwrites only the fields present in `updates`.
    pub fn apply(&self, updates: BrandUpdate) -> BrandContext {
        let mut state = self.inner.write();
        let context = &mut state.context;

        if let Some(brand_name) = updates.brand_name {
            context.brand_name = brand_name;
        }
        if let Some(tone) = updates.tone {
            context.tone = tone;
        }
        if let Some(audience) = updates.target_audience {
            context.target_audience = audience;
        }
        if let Some(emotional_state) = updates.emotional_state {
            context.emotional_state = emotional_state;
        }
        if let Some(colors) = updates.colors {
            context.colors = colors;
        }
        if let Some(archetype) = updates.archetype {
            context.archetype = archetype;
        }
        context.last_interaction = Some(Utc::now());

        context.clone()
    }

    /// Records a detected tone as the new brand tone.
    pub fn set_tone(&self, tone: &str) {
        let mut state = self.inner.write();
        state.context.tone = tone.to_string();
        state.context.last_interaction = Some(Utc::now());
    }

    /// Current tone, or `None` while the cell holds an empty string.
    pub fn tone(&self) -> Option<String> {
        non_empty(&self.inner.read().context.tone)
    }

    pub fn target_audience(&self) -> Option<String> {
        non_empty(&self.inner.read().context.target_audience)
    }

    pub fn emotional_state(&self) -> Option<String> {
        non_empty(&self.inner.read().context.emotional_state)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

use axum::{extract::State, Json};

use crate::analysis::composer::{BrandState, ContextUpdated, Initialized};
use crate::errors::AppError;
use crate::models::brand::{BrandConfig, BrandUpdate};
use crate::state::AppState;

/// POST /api/v1/initialize
/// Resets the brand context. Omitted fields take their defaults.
pub async fn handle_initialize(
    State(state): State<AppState>,
    Json(config): Json<BrandConfig>,
) -> Json<Initialized> {
    Json(state.vera.initialize(config))
}

/// GET /api/v1/context
pub async fn handle_get_context(State(state): State<AppState>) -> Json<BrandState> {
    Json(state.vera.brand_state())
}

/// PATCH /api/v1/context
/// Overwrites only the supplied fields.
pub async fn handle_update_context(
    State(state): State<AppState>,
    Json(updates): Json<BrandUpdate>,
) -> Result<Json<ContextUpdated>, AppError> {
    if updates.is_empty() {
        return Err(AppError::Validation(
            "Provide at least one of brand_name, tone, target_audience, emotional_state, colors, archetype"
                .to_string(),
        ));
    }
    Ok(Json(state.vera.update_brand_context(updates)))
}

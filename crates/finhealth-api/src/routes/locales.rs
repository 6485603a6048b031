//! Locale listing endpoint.

use axum::{extract::State, Json};
use finhealth_analytics::localization::VOCABULARY;

use crate::dto::LocalesResponse;
use crate::state::AppState;

/// Lists the engine's locale tables and the localizable vocabulary.
pub async fn list(State(state): State<AppState>) -> Json<LocalesResponse> {
    let translations = state.engine.translations();
    let locales = translations
        .locales()
        .filter_map(|code| {
            translations
                .table(code)
                .map(|table| (code.to_string(), table.clone()))
        })
        .collect();

    Json(LocalesResponse {
        vocabulary: VOCABULARY.iter().map(ToString::to_string).collect(),
        locales,
    })
}

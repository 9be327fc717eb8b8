use crate::catalog::PhaseTemplate;
use crate::domain::models::CyclePhase;
use crate::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/phases", get(list_phases))
        .with_state(state)
}

/// Reference data for the phase indicator and education pages.
async fn list_phases(State(state): State<SharedState>) -> Json<Vec<PhaseTemplate>> {
    let templates = CyclePhase::ALL
        .iter()
        .filter_map(|phase| state.catalog.phase_template(*phase))
        .cloned()
        .collect();
    Json(templates)
}

use crate::domain::models::{Bucket, CyclePhase};
use crate::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardTip {
    id: usize,
    title: String,
    content: String,
    phase_relevance: Vec<CyclePhase>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    current_phase: CyclePhase,
    day_of_cycle: u8,
    cycle_length: u8,
    recommendations: Vec<DashboardTip>,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .with_state(state)
}

/// Highlight view: the strongest recommendation per phase, pulled straight
/// from the catalog templates. Cycle position is a placeholder until cycle
/// tracking lands.
async fn get_dashboard(State(state): State<SharedState>) -> Json<DashboardResponse> {
    let mut tips = Vec::new();
    for phase in CyclePhase::ALL {
        let Some(template) = state.catalog.phase_template(phase) else {
            continue;
        };
        for bucket in Bucket::ALL {
            if let Some(rec) = template.base_recommendations.bucket(bucket).first() {
                tips.push(DashboardTip {
                    id: tips.len() + 1,
                    title: rec.title.clone(),
                    content: rec.description.clone(),
                    phase_relevance: vec![phase],
                });
                break;
            }
        }
    }

    Json(DashboardResponse {
        current_phase: CyclePhase::Follicular,
        day_of_cycle: 8,
        cycle_length: 28,
        recommendations: tips,
    })
}

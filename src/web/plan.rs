use crate::services::{daily_plan, planner};
use crate::state::SharedState;
use crate::web::ApiResponse;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::{CycleInsights, RecommendationSet, UserInput};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnhancedPlanResponse {
    user_input: UserInput,
    recommendations: RecommendationSet,
    generated_at: DateTime<Utc>,
    cycle_insights: CycleInsights,
}

/// Echoed back alongside the error so a failed request stays diagnosable.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanFailure {
    user_input: UserInput,
}

#[derive(Debug, Deserialize)]
struct DailyPlanPayload {
    phase: Option<String>,
}

#[derive(Debug, Serialize)]
struct DailyPlanResponse {
    phase: &'static str,
    plan: String,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/plan", post(create_plan))
        .route("/daily-plan", post(create_daily_plan))
        .with_state(state)
}

async fn create_plan(
    State(state): State<SharedState>,
    Json(input): Json<UserInput>,
) -> Response {
    match planner::compose(state.catalog, &input) {
        Ok(plan) => {
            tracing::info!(
                phase = input.cycle_phase.as_str(),
                symptoms = input.symptoms.len(),
                "composed plan"
            );
            Json(ApiResponse::ok(EnhancedPlanResponse {
                user_input: input,
                recommendations: plan.recommendations,
                generated_at: Utc::now(),
                cycle_insights: plan.insights,
            }))
            .into_response()
        }
        Err(err) => {
            tracing::warn!(phase = input.cycle_phase.as_str(), "plan composition failed: {err}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::err(
                    Some(PlanFailure { user_input: input }),
                    err.to_string(),
                )),
            )
                .into_response()
        }
    }
}

async fn create_daily_plan(Json(payload): Json<DailyPlanPayload>) -> Json<DailyPlanResponse> {
    let phase = daily_plan::resolve_phase(payload.phase.as_deref());
    Json(DailyPlanResponse {
        phase: phase.as_str(),
        plan: daily_plan::generate_plan(payload.phase.as_deref()),
    })
}

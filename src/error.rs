use crate::domain::models::CyclePhase;
use thiserror::Error;

/// The only hard failure the composition engine can produce. Unmatched
/// personas, mood/energy pairs, and symptoms are not errors; those stages
/// simply skip.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("no phase template for cycle phase `{0}`")]
    UnknownPhase(CyclePhase),
}

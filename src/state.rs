use crate::catalog::Catalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
}

pub type SharedState = Arc<AppState>;

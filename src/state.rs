// src/state.rs
use std::sync::Arc;

use crate::services::generator::ResponseGenerator;

pub type SharedState = Arc<AppState>;

/// Built once at startup; handlers only read it.
#[derive(Debug, Default)]
pub struct AppState {
    pub generator: Option<ResponseGenerator>,
}

impl AppState {
    pub fn new(generator: Option<ResponseGenerator>) -> Self {
        Self { generator }
    }

    /// State for a process whose generator could not be built.
    pub fn unavailable() -> Self {
        Self { generator: None }
    }

    pub fn generator_ready(&self) -> bool {
        self.generator.is_some()
    }
}

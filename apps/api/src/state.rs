use crate::classify::CategoryPredictor;
use crate::config::Config;
use crate::export::pipeline::PipelineSettings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup; read-only and safe to share across requests.
    pub predictor: CategoryPredictor,
    pub pipeline: PipelineSettings,
}

impl AppState {
    pub fn new(config: Config, predictor: CategoryPredictor) -> Self {
        let pipeline = PipelineSettings::from_config(&config);
        Self {
            config,
            predictor,
            pipeline,
        }
    }
}

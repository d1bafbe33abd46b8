//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlEncoderService;
use crate::domain::repositories::UrlMappingRepository;
use crate::utils::short_id::ShortIdGenerator;

#[derive(Clone)]
pub struct AppState {
    pub url_encoder: Arc<UrlEncoderService>,
    pub repository: Arc<dyn UrlMappingRepository>,
}

impl AppState {
    /// Wires the encoder on top of `repository` and `generator`.
    pub fn new(
        repository: Arc<dyn UrlMappingRepository>,
        generator: Arc<dyn ShortIdGenerator>,
        holding_duration_days: Option<u32>,
    ) -> Self {
        let url_encoder = Arc::new(UrlEncoderService::new(
            repository.clone(),
            generator,
            holding_duration_days,
        ));

        Self {
            url_encoder,
            repository,
        }
    }
}

use std::sync::Arc;

use chrono::Duration;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use fundamentals_core::financials::{FinancialsService, FinancialsServiceTrait};
use fundamentals_store::PostgrestClient;

use crate::config::Config;

pub struct AppState {
    pub financials_service: Arc<dyn FinancialsServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let store = Arc::new(PostgrestClient::new(
        config.supabase_url.as_str(),
        config.supabase_service_role_key.as_str(),
    ));
    let financials_service = Arc::new(FinancialsService::new(
        store,
        Duration::minutes(config.cache_ttl_minutes),
    ));

    Arc::new(AppState { financials_service })
}

//! Shared state handed to every route.

use std::sync::Arc;

use crate::auth::TokenTable;
use crate::config::Config;
use crate::events::EventHub;
use crate::monitor::SimSettings;
use crate::store::WardStore;

/// Context cloned into each handler via axum `State`.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<WardStore>,
    pub events: EventHub,
    pub settings: Arc<SimSettings>,
    pub tokens: Arc<TokenTable>,
    pub config: Arc<Config>,
}

impl ApiContext {
    pub fn new(
        store: Arc<WardStore>,
        events: EventHub,
        settings: Arc<SimSettings>,
        config: Arc<Config>,
    ) -> Self {
        let tokens = Arc::new(TokenTable::new(&config.tokens));
        Self {
            store,
            events,
            settings,
            tokens,
            config,
        }
    }
}

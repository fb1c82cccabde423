// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Canonical public origin for absolute links; falls back to the `Host` header.
    pub site_url: Option<String>,
}

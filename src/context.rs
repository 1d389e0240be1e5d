//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use obras_core::{SeedSource, ViewConfig, ViewportClass};

/// App-wide configuration and signals provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Layout thresholds and page sizes
    pub config: ViewConfig,
    /// Narrow or wide, tracked from window resizes
    pub viewport: ReadSignal<ViewportClass>,
    /// Where site tasks are loaded from
    pub source: Arc<SeedSource>,
}

impl AppContext {
    pub fn new(config: ViewConfig, viewport: ReadSignal<ViewportClass>, source: SeedSource) -> Self {
        Self {
            config,
            viewport,
            source: Arc::new(source),
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Classify the current window width
pub fn current_viewport(config: &ViewConfig) -> ViewportClass {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map(|width| config.viewport_class(width))
        .unwrap_or_default()
}

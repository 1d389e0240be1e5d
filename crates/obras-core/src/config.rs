//! View Configuration
//!
//! Layout constants for the task view. Deserializable so a host page can
//! override them; defaults match the shipped layout.

use serde::Deserialize;

use crate::pagination::ViewportClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Widths strictly below this are the narrow layout
    pub breakpoint_px: u32,
    pub narrow_page_size: usize,
    pub wide_page_size: usize,
    /// Max page buttons shown at once
    pub narrow_visible_pages: usize,
    pub wide_visible_pages: usize,
    pub suggestion_limit: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            narrow_page_size: 5,
            wide_page_size: 10,
            narrow_visible_pages: 3,
            wide_visible_pages: 5,
            suggestion_limit: 5,
        }
    }
}

impl ViewConfig {
    pub fn viewport_class(&self, width_px: f64) -> ViewportClass {
        if width_px < f64::from(self.breakpoint_px) {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn page_size(&self, class: ViewportClass) -> usize {
        match class {
            ViewportClass::Narrow => self.narrow_page_size,
            ViewportClass::Wide => self.wide_page_size,
        }
        .max(1)
    }

    pub fn max_visible_pages(&self, class: ViewportClass) -> usize {
        match class {
            ViewportClass::Narrow => self.narrow_visible_pages,
            ViewportClass::Wide => self.wide_visible_pages,
        }
        .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        let cfg = ViewConfig::default();
        assert_eq!(cfg.viewport_class(767.0), ViewportClass::Narrow);
        assert_eq!(cfg.viewport_class(768.0), ViewportClass::Wide);
        assert_eq!(cfg.page_size(ViewportClass::Narrow), 5);
        assert_eq!(cfg.max_visible_pages(ViewportClass::Wide), 5);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg: ViewConfig = serde_json::from_str(r#"{"wide_page_size": 20}"#).unwrap();
        assert_eq!(cfg.wide_page_size, 20);
        assert_eq!(cfg.narrow_page_size, 5);
        assert_eq!(cfg.breakpoint_px, 768);
    }
}

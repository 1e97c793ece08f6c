//! Per-widget init outcomes.
//!
//! Every widget initializer is idempotent in its absence-handling: if the DOM
//! anchors it needs are missing it reports [`InitOutcome::Skipped`] and does
//! nothing. The orchestrator records each outcome here and logs the summary
//! in debug mode.

use std::fmt;

/// Result of running one widget initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The widget wired itself up.
    Ready,
    /// Required DOM anchors were absent; nothing was wired.
    Skipped,
}

impl InitOutcome {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

#[derive(Debug, Clone)]
struct WidgetEntry {
    name: &'static str,
    outcome: InitOutcome,
    /// How many anchors the widget attached to, for count-based widgets.
    count: Option<usize>,
}

/// Process-wide record of widget initializations, keyed by widget name.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    entries: Vec<WidgetEntry>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome. Re-recording a name replaces the earlier entry.
    pub fn record(&mut self, name: &'static str, outcome: InitOutcome) {
        self.record_entry(WidgetEntry {
            name,
            outcome,
            count: None,
        });
    }

    /// Record a count-based widget (anchor links, accordion items, ...).
    /// Zero anchors still counts as ready; the widget just had nothing to do.
    pub fn record_count(&mut self, name: &'static str, count: usize) {
        self.record_entry(WidgetEntry {
            name,
            outcome: InitOutcome::Ready,
            count: Some(count),
        });
    }

    fn record_entry(&mut self, entry: WidgetEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == entry.name) {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    /// Outcome for a widget, if it was recorded.
    pub fn outcome(&self, name: &str) -> Option<InitOutcome> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.outcome)
    }

    /// Number of widgets that wired up.
    pub fn ready_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_ready()).count()
    }

    /// One summary line per widget, in registration order.
    pub fn summary(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| match e.count {
                Some(n) => format!("{}: {} ({})", e.name, e.outcome, n),
                None => format!("{}: {}", e.name, e.outcome),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut registry = WidgetRegistry::new();
        registry.record("mobile-menu", InitOutcome::Ready);
        registry.record("cookie-banner", InitOutcome::Skipped);

        assert_eq!(registry.outcome("mobile-menu"), Some(InitOutcome::Ready));
        assert_eq!(registry.outcome("cookie-banner"), Some(InitOutcome::Skipped));
        assert_eq!(registry.outcome("unknown"), None);
        assert_eq!(registry.ready_count(), 1);
    }

    #[test]
    fn test_re_record_replaces() {
        let mut registry = WidgetRegistry::new();
        registry.record("cart", InitOutcome::Skipped);
        registry.record("cart", InitOutcome::Ready);
        assert_eq!(registry.outcome("cart"), Some(InitOutcome::Ready));
        assert_eq!(registry.summary().len(), 1);
    }

    #[test]
    fn test_summary_lines() {
        let mut registry = WidgetRegistry::new();
        registry.record_count("smooth-scroll", 12);
        registry.record("cart", InitOutcome::Ready);
        registry.record("country-selector", InitOutcome::Skipped);

        assert_eq!(
            registry.summary(),
            vec![
                "smooth-scroll: ready (12)".to_string(),
                "cart: ready".to_string(),
                "country-selector: skipped".to_string(),
            ]
        );
    }

    #[test]
    fn test_zero_anchors_is_still_ready() {
        let mut registry = WidgetRegistry::new();
        registry.record_count("faq-accordion", 0);
        assert_eq!(registry.outcome("faq-accordion"), Some(InitOutcome::Ready));
    }
}

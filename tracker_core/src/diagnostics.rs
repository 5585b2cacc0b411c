//! Diagnostic sink - non-fatal configuration warnings
//!
//! Unknown resistance keys supplied at combatant construction are tolerated;
//! the session reports each (combatant name, key) pair once through a sink.
//! Deduplication is the session's job, so sinks stay stateless unless they
//! choose to collect.

/// Receiver for configuration warnings
pub trait DiagnosticSink {
    /// A resistance-map key that is not a known damage type.
    ///
    /// The modifier under this key will never be auto-applied.
    fn unknown_resistance_key(&mut self, combatant: &str, key: &str);
}

/// Default sink; emits structured warnings via `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unknown_resistance_key(&mut self, combatant: &str, key: &str) {
        tracing::warn!(
            combatant = %combatant,
            key = %key,
            "unknown resistance damage type; modifier will not be applied"
        );
    }
}

/// Test sink that records every warning it receives
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    warnings: Vec<(String, String)>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded (combatant name, key) pairs, in arrival order
    pub fn warnings(&self) -> &[(String, String)] {
        &self.warnings
    }
}

impl DiagnosticSink for CollectingSink {
    fn unknown_resistance_key(&mut self, combatant: &str, key: &str) {
        self.warnings.push((combatant.to_string(), key.to_string()));
    }
}

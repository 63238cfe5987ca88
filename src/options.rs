//! Caller-facing options for [`crate::minimize`].

/// Tag distinguishing a small-n and large-n code path upstream.
///
/// `minimize()` always runs the single code path described in this crate's
/// design notes regardless of this value; it is kept only so callers that
/// branch on it at their own layer keep compiling against this API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptimizationLevel {
    Auto,
    Small,
    Large,
}

impl Default for OptimizationLevel {
    fn default() -> Self {
        OptimizationLevel::Auto
    }
}

/// Knobs for a single [`crate::minimize`] call.
#[derive(Debug, Clone)]
pub struct Options {
    /// Whether to also compute the Product-of-Sums form (a second minimization
    /// pass over the complement on-set). Defaults to `true`.
    pub compute_pos: bool,
    /// Whether to collect a human-readable trace of each pipeline stage into
    /// `MinimizationResult::steps`. Defaults to `true`.
    pub emit_steps: bool,
    /// Cooperative deadline in milliseconds from entry into `minimize()`.
    /// `None` means no deadline.
    pub deadline_ms: Option<u64>,
    /// See [`OptimizationLevel`].
    pub optimization_level: OptimizationLevel,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            compute_pos: true,
            emit_steps: true,
            deadline_ms: None,
            optimization_level: OptimizationLevel::Auto,
        }
    }
}

//! Parser configuration

/// Knobs for a single parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested expressions before the parse fails instead of recursing further
    pub max_nesting_depth: usize,
    /// Record a [TraceEvent](super::TraceEvent) for every production entered
    pub trace: bool,
}

impl ParserConfig {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;
    /// Deepest nesting any configuration may request; larger values are clamped to it
    pub const MAX_NESTING_DEPTH_LIMIT: usize = 1024;

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth.min(Self::MAX_NESTING_DEPTH_LIMIT);
        self
    }

    /// The nesting limit the parser enforces
    pub fn effective_max_nesting_depth(&self) -> usize {
        self.max_nesting_depth.min(Self::MAX_NESTING_DEPTH_LIMIT)
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
            trace: false,
        }
    }
}

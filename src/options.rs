//! Resource limits applied while parsing.

/// The default maximum nesting depth (e.g., `[[[]]]`) to prevent stack overflows.
///
/// Matches the recursion limit of `serde_json`, so every document it
/// accepts nests shallowly enough to be accepted here as well.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits for one parse.
///
/// `max_depth` bounds how many containers may be open at once, which
/// also bounds the recursion of the materializer. The input size is not
/// limited unless a cap is set with [`ParserOptions::with_max_input_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// The most containers that may be open at the same time.
    pub max_depth: usize,
    /// The largest accepted input in bytes; `None` for no cap.
    pub max_input_bytes: Option<usize>,
}

impl ParserOptions {
    /// Options with `DEFAULT_MAX_DEPTH` and no input size cap.
    pub const fn new() -> Self {
        ParserOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_bytes: None,
        }
    }

    /// Replaces the nesting limit.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Rejects inputs longer than `max_input_bytes` before tokenizing.
    pub const fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = Some(max_input_bytes);
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

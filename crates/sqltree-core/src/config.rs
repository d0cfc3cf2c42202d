//! Parser configuration.

/// The base applied by the exponent part of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExponentBase {
    /// Conventional scientific notation: `1e3` is `1000.0`.
    #[default]
    Decimal,
    /// Scale by the natural-exponential constant: `1e3` is `e³`.
    Natural,
}

/// Options controlling a single parse call.
///
/// ```rust
/// use sqltree_core::{ExponentBase, ParserConfig};
///
/// let config = ParserConfig::new()
///     .with_max_depth(64)
///     .with_exponent(ExponentBase::Natural);
/// assert_eq!(config.max_depth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of parenthesized expressions, sub-selects,
    /// prefix operators and function arguments. A sub-select is charged
    /// several levels, so the default keeps the deepest accepted input
    /// within a 2 MiB thread stack.
    pub max_depth: usize,
    /// Base used to scale numeric literals that carry an exponent.
    pub exponent: ExponentBase,
}

impl ParserConfig {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            exponent: ExponentBase::Decimal,
        }
    }

    /// Sets the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the exponent base for numeric literals.
    #[must_use]
    pub const fn with_exponent(mut self, exponent: ExponentBase) -> Self {
        self.exponent = exponent;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

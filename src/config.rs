//! Session configuration

/// Default ceiling on the number of variables a truth table may have
pub const DEFAULT_MAX_TABLE_VARIABLES: usize = 12;

/// Configuration for a [`Session`](crate::Session)
///
/// # Examples
///
/// ```
/// use proposition::Config;
///
/// let config = Config {
///     colour: false,
///     ..Default::default()
/// };
/// assert_eq!(config.max_table_variables, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest number of distinct identifiers a `table` statement may use.
    /// A table has `2^n` rows, so this bounds both time and output size.
    pub max_table_variables: usize,
    /// Wrap table cells in ANSI colour codes when rendering
    pub colour: bool,
    /// Reject illegal characters while lexing instead of leaving them to the parser
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_table_variables: DEFAULT_MAX_TABLE_VARIABLES,
            colour: true,
            strict: false,
        }
    }
}

impl Config {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

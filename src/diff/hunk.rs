/// A single hunk from a unified diff.
///
/// The range line is kept as opaque text. Nothing in it is interpreted, so
/// whatever git wrote there survives rendering unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// The marker line beginning with `@@`, verbatim
    pub range: String,
    /// Content lines following the marker, verbatim
    pub lines: Vec<String>,
}

impl Hunk {
    /// Check whether any content line contains the given text.
    ///
    /// The range line is not searched.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

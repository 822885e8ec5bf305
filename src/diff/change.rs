use super::hunk::Hunk;
use std::fmt;

/// One change section from a unified diff.
///
/// A change starts at a `diff --git` line and carries everything up to the
/// next one: header lines first, then the hunks. A change without any `@@`
/// line (a pure rename or a mode change) is all header and has no hunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Lines before the first hunk marker, verbatim
    pub header: Vec<String>,
    /// Hunks in source order
    pub hunks: Vec<Hunk>,
}

impl Change {
    /// Parse one change section.
    ///
    /// Lines before the first `@@` line belong to the header. Each `@@` line
    /// starts a hunk that collects the lines after it. No line is validated
    /// or altered, so any section survives a parse and render round trip.
    pub fn parse(section: &str) -> Self {
        let mut header = Vec::new();
        let mut hunks = Vec::new();
        let mut current: Option<Hunk> = None;

        for line in section.split('\n') {
            if line.starts_with("@@") {
                if let Some(hunk) = current.take() {
                    hunks.push(hunk);
                }
                current = Some(Hunk {
                    range: line.to_string(),
                    lines: Vec::new(),
                });
            } else if let Some(hunk) = current.as_mut() {
                hunk.lines.push(line.to_string());
            } else {
                header.push(line.to_string());
            }
        }

        if let Some(hunk) = current.take() {
            hunks.push(hunk);
        }

        Change { header, hunks }
    }

    /// Iterate every line of the change in render order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.header
            .iter()
            .map(String::as_str)
            .chain(self.hunks.iter().flat_map(|hunk| {
                std::iter::once(hunk.range.as_str()).chain(hunk.lines.iter().map(String::as_str))
            }))
    }

    /// Check whether any header line contains the given text.
    #[must_use]
    pub fn header_contains(&self, needle: &str) -> bool {
        self.header.iter().any(|line| line.contains(needle))
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

//! Unified diff text as a data structure.
//!
//! A diff is treated as a flat sequence of lines. A line starting with
//! `diff --git` opens a change; inside a change, a line starting with `@@`
//! opens a hunk. No other structure is recognized and nothing is validated,
//! trimmed, or renumbered, so whatever the lines mean they come back out
//! byte for byte.
//!
//! # Structure
//!
//! - [`Diff`]: all changes of one diff, in source order
//! - [`Change`]: header lines plus hunks for one changed path
//! - [`Hunk`]: one `@@` range line plus the lines under it
//!
//! Text before the first `diff --git` line (a cover letter, a commit
//! message) is dropped during parsing. Everything from that line on
//! survives a parse and render round trip.
//!
//! # Examples
//!
//! ```
//! use diff_slice::{Criteria, Diff};
//!
//! let text = "diff --git a/dog.txt b/dog.txt\n@@ -1 +1 @@\n-grumpy\n+friendly\n";
//! let diff = Diff::parse(text);
//!
//! assert_eq!(diff.changes.len(), 1);
//! assert_eq!(diff.to_string(), text);
//!
//! let parts = diff.partition(Criteria::new().hunk(|hunk| hunk.contains("friendly")));
//! assert_eq!(parts.matched.changes.len(), 1);
//! assert!(parts.rest.changes.is_empty());
//! ```

pub mod change;
pub mod full;
pub mod hunk;
pub mod split;

pub use change::Change;
pub use full::Diff;
pub use hunk::Hunk;
pub use split::{Criteria, Partition};

/// Format a one line per change summary of a diff.
///
/// Each line shows the change's first header line and its hunk count.
#[must_use]
pub fn format_summary(diff: &Diff) -> String {
    let mut result = String::new();

    for (i, change) in diff.changes.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }

        let title = change.header.first().map(String::as_str).unwrap_or("");
        match change.hunks.len() {
            0 => result.push_str(&format!("{}: no hunks", title)),
            1 => result.push_str(&format!("{}: 1 hunk", title)),
            n => result.push_str(&format!("{}: {} hunks", title, n)),
        }
    }

    result
}

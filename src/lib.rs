use error_set::error_set;
use std::path::Path;

pub mod diff;

pub use diff::{Change, Criteria, Diff, Hunk, Partition, format_summary};

error_set! {
    /// Top-level error for diff-slice operations
    DiffSliceError := {
        #[display("No changes found in {path}")]
        NoChanges { path: String },
    } || FileError

    /// Errors from reading and writing diff files
    FileError := {
        #[display("Failed to read {path}: {message}")]
        ReadFailed { path: String, message: String },
        #[display("Failed to write {path}: {message}")]
        WriteFailed { path: String, message: String },
    }
}

/// Read a file and parse it as a unified diff
pub fn load_diff(path: &Path) -> Result<Diff, FileError> {
    let text = std::fs::read_to_string(path).map_err(|e| FileError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Diff::parse(&text))
}

/// Render a diff and write it to a file
pub fn write_diff(diff: &Diff, path: &Path) -> Result<(), FileError> {
    std::fs::write(path, diff.to_string()).map_err(|e| FileError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Split a diff file in two according to the given criteria
///
/// Reads the diff at `input`, partitions its changes, and writes the matched
/// side to `matched_path` and everything else to `rest_path`. Both files are
/// written even when one side comes out empty.
///
/// # Examples
/// ```no_run
/// # use std::path::Path;
/// # use diff_slice::Criteria;
/// let criteria = Criteria::new().hunk(|hunk| hunk.contains("TODO"));
/// let partition = diff_slice::split_file(
///     Path::new("changes.diff"),
///     criteria,
///     Path::new("todos.diff"),
///     Path::new("rest.diff"),
/// )
/// .unwrap();
/// println!("{} changes matched", partition.matched.changes.len());
/// ```
pub fn split_file(
    input: &Path,
    criteria: Criteria<'_>,
    matched_path: &Path,
    rest_path: &Path,
) -> Result<Partition, DiffSliceError> {
    let diff = load_diff(input)?;

    if diff.changes.is_empty() {
        return Err(DiffSliceError::NoChanges {
            path: input.display().to_string(),
        });
    }

    let partition = diff.partition(criteria);
    write_diff(&partition.matched, matched_path)?;
    write_diff(&partition.rest, rest_path)?;

    Ok(partition)
}

/// Read a diff file and summarize it, one line per change
pub fn summarize_file(input: &Path) -> Result<String, DiffSliceError> {
    Ok(format_summary(&load_diff(input)?))
}

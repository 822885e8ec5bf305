use super::change::Change;
use super::full::Diff;
use super::hunk::Hunk;

/// Predicates steering [`Diff::partition`].
///
/// Both predicates are optional and a predicate that is not set is never
/// invoked. Predicates may carry state; they run once per candidate, in
/// source order.
#[derive(Default)]
pub struct Criteria<'a> {
    change: Option<Box<dyn FnMut(&Change) -> bool + 'a>>,
    hunk: Option<Box<dyn FnMut(&Hunk) -> bool + 'a>>,
}

impl<'a> Criteria<'a> {
    /// Criteria with no predicates set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match whole changes. A change the predicate accepts moves to
    /// `matched` with all its hunks and its hunks are never inspected.
    #[must_use]
    pub fn change(mut self, predicate: impl FnMut(&Change) -> bool + 'a) -> Self {
        self.change = Some(Box::new(predicate));
        self
    }

    /// Match individual hunks within changes the change predicate did not
    /// already claim.
    #[must_use]
    pub fn hunk(mut self, predicate: impl FnMut(&Hunk) -> bool + 'a) -> Self {
        self.hunk = Some(Box::new(predicate));
        self
    }
}

/// Result of [`Diff::partition`]: the matching changes and everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub matched: Diff,
    pub rest: Diff,
}

impl Diff {
    /// Split the diff into matching changes and the rest.
    ///
    /// Each change is routed in order:
    ///
    /// - A change the change predicate accepts moves to `matched` whole.
    /// - A change with no hunks, or any change when no hunk predicate is
    ///   set, moves to `rest` whole.
    /// - Otherwise the hunk predicate decides hunk by hunk. When both sides
    ///   end up with hunks, the change appears in both outputs, each copy
    ///   carrying the shared header and its own hunks.
    ///
    /// Hunks are moved, never rebuilt, and keep their relative order. Every
    /// hunk of the input ends up in exactly one output.
    ///
    /// # Examples
    ///
    /// ```
    /// use diff_slice::{Criteria, Diff};
    ///
    /// let text = "diff --git a/dog.txt b/dog.txt\n@@ -1 +1 @@\n-grumpy\n+friendly\n";
    /// let parts = Diff::parse(text)
    ///     .partition(Criteria::new().hunk(|hunk| hunk.contains("friendly")));
    ///
    /// assert_eq!(parts.matched.changes.len(), 1);
    /// assert!(parts.rest.changes.is_empty());
    /// ```
    #[must_use]
    pub fn partition(self, mut criteria: Criteria<'_>) -> Partition {
        let mut matched = Vec::new();
        let mut rest = Vec::new();

        for change in self.changes {
            if let Some(match_change) = criteria.change.as_mut()
                && match_change(&change)
            {
                matched.push(change);
                continue;
            }

            if change.hunks.is_empty() {
                rest.push(change);
                continue;
            }

            let Some(match_hunk) = criteria.hunk.as_mut() else {
                rest.push(change);
                continue;
            };

            let Change { header, hunks } = change;
            let (matched_hunks, rest_hunks): (Vec<Hunk>, Vec<Hunk>) =
                hunks.into_iter().partition(|hunk| match_hunk(hunk));

            if rest_hunks.is_empty() {
                matched.push(Change {
                    header,
                    hunks: matched_hunks,
                });
            } else if matched_hunks.is_empty() {
                rest.push(Change {
                    header,
                    hunks: rest_hunks,
                });
            } else {
                matched.push(Change {
                    header: header.clone(),
                    hunks: matched_hunks,
                });
                rest.push(Change {
                    header,
                    hunks: rest_hunks,
                });
            }
        }

        Partition {
            matched: Diff { changes: matched },
            rest: Diff { changes: rest },
        }
    }
}

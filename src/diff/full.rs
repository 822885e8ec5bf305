use super::change::Change;
use std::fmt;

/// A parsed unified diff: an ordered list of change sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    /// Changes in source order
    pub changes: Vec<Change>,
}

impl Diff {
    /// Parse unified diff text into changes.
    ///
    /// A new change begins at every line starting with `diff --git`. Text
    /// before the first such line is dropped; input without one parses to an
    /// empty diff. Apart from that the parse loses nothing: rendering the
    /// result reproduces the input byte for byte.
    pub fn parse(text: &str) -> Self {
        let mut starts = Vec::new();
        if text.starts_with("diff --git") {
            starts.push(0);
        }

        let mut search_start = 0;
        while let Some(pos) = text[search_start..].find("\ndiff --git") {
            let abs_pos = search_start + pos + 1; // +1 to skip the newline
            starts.push(abs_pos);
            search_start = abs_pos + 1;
        }

        let changes = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(text.len());
                Change::parse(&text[start..end])
            })
            .collect();

        Diff { changes }
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for change in &self.changes {
            write!(f, "{}", change)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn parse_empty_diff() {
        let diff = Diff::parse("");
        assert_eq!(diff.changes.len(), 0);
    }

    #[test]
    fn parse_single_change() {
        let text = r#"diff --git a/cat.txt b/cat.txt
index 3f1a7b0..9c2e1d4 100644
--- a/cat.txt
+++ b/cat.txt
@@ -1,3 +1,3 @@
 whiskers
-sleeps all day
+sleeps all day long
 purrs
"#;
        let diff = Diff::parse(text);

        assert_eq!(diff.changes.len(), 1);
        assert_eq!(diff.changes[0].header[0], "diff --git a/cat.txt b/cat.txt");
        assert_eq!(diff.changes[0].hunks.len(), 1);
    }

    #[test]
    fn parse_multiple_changes() {
        let text = r#"diff --git a/cat.txt b/cat.txt
index 3f1a7b0..9c2e1d4 100644
--- a/cat.txt
+++ b/cat.txt
@@ -1,3 +1,3 @@
 whiskers
-sleeps all day
+sleeps all day long
 purrs
diff --git a/dog.txt b/dog.txt
index 5d0c9a2..7e8b3f1 100644
--- a/dog.txt
+++ b/dog.txt
@@ -1,3 +1,3 @@
 barks
-grumpy old guard
+friendly to visitors
 fetches sticks
"#;
        let diff = Diff::parse(text);

        assert_eq!(diff.changes.len(), 2);
        assert_eq!(diff.changes[0].header[0], "diff --git a/cat.txt b/cat.txt");
        assert_eq!(diff.changes[1].header[0], "diff --git a/dog.txt b/dog.txt");
    }

    #[test]
    fn parse_drops_text_before_first_change() {
        let text =
            "commit 4f5a6b7\nAuthor: me\n\ndiff --git a/cat.txt b/cat.txt\n@@ -1 +1 @@\n-a\n+b\n";
        let diff = Diff::parse(text);

        assert_eq!(diff.changes.len(), 1);
        assert_eq!(
            diff.to_string(),
            "diff --git a/cat.txt b/cat.txt\n@@ -1 +1 @@\n-a\n+b\n"
        );
    }

    #[test]
    fn parse_without_any_change_is_empty() {
        let diff = Diff::parse("just some text\nwith no diff in sight\n");

        assert!(diff.changes.is_empty());
        assert_eq!(diff.to_string(), "");
    }

    #[test]
    fn anchor_must_start_a_line() {
        let text = "diff --git a/a b/a\n@@ -1 +1 @@\n+run diff --git somewhere\n";
        let diff = Diff::parse(text);

        assert_eq!(diff.changes.len(), 1);
        assert_eq!(diff.to_string(), text);
    }

    #[test]
    fn render_concatenates_changes() {
        let text = r#"diff --git a/cat.txt b/cat.txt
--- a/cat.txt
+++ b/cat.txt
@@ -1 +1 @@
-sleeps all day
+sleeps all day long
diff --git a/dog.txt b/dog.txt
--- a/dog.txt
+++ b/dog.txt
@@ -1 +1 @@
-grumpy old guard
+friendly to visitors
"#;
        assert_eq!(Diff::parse(text).to_string(), text);
    }

    #[test]
    fn roundtrip_without_trailing_newline() {
        let text = "diff --git a/a b/a\n@@ -1 +1 @@\n-x\n+y";

        assert_eq!(Diff::parse(text).to_string(), text);
    }

    #[test]
    fn crlf_stays_inside_line_content() {
        let text = "diff --git a/a b/a\r\n@@ -1 +1 @@\r\n-x\r\n+y\r\n";
        let diff = Diff::parse(text);

        assert_eq!(diff.changes[0].hunks[0].range, "@@ -1 +1 @@\r");
        assert_eq!(diff.to_string(), text);
    }

    #[test]
    fn rename_parses_as_header_only_change() {
        let text = r#"diff --git a/fish.txt b/shark.txt
similarity index 100%
rename from fish.txt
rename to shark.txt
"#;
        let diff = Diff::parse(text);

        assert_eq!(diff.changes.len(), 1);
        assert!(diff.changes[0].hunks.is_empty());
        assert_eq!(diff.to_string(), text);
    }

    #[test]
    fn reparse_of_rendered_output_is_identical() {
        let text = "diff --git a/a b/a\n@@ -1 +1 @@\n-x\n+y\n\
                    diff --git a/b b/b\nrename from b\nrename to c\n";
        let once = Diff::parse(text);
        let again = Diff::parse(&once.to_string());

        assert_eq!(once, again);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Generate line content
    fn arb_line() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::char::range(' ', '~'), 0..20)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Generate diff text made of anchor-led sections
    fn arb_diff_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::collection::vec(arb_line(), 0..10), 1..4).prop_map(
            |sections| {
                let mut text = String::new();
                for lines in &sections {
                    text.push_str("diff --git a/file b/file");
                    for line in lines {
                        text.push('\n');
                        text.push_str(line);
                    }
                    text.push('\n');
                }
                text
            },
        )
    }

    proptest! {
        /// Text starting at an anchor must survive parse -> render byte for byte
        #[test]
        fn diff_round_trips(text in arb_diff_text()) {
            let diff = Diff::parse(&text);
            prop_assert_eq!(diff.to_string(), text);
        }

        /// Parsing rendered output must reproduce the same structure
        #[test]
        fn reparse_is_idempotent(text in arb_diff_text()) {
            let once = Diff::parse(&text);
            let again = Diff::parse(&once.to_string());
            prop_assert_eq!(once, again);
        }
    }
}

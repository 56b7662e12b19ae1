//! Classify unified diff lines by their prefix.

/// Prefixes that mark a metadata line in unified diff output.
const HEADER_PREFIXES: [&str; 4] = ["+++", "---", "diff", "index"];

/// The category of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    /// File or chunk metadata (`+++`, `---`, `diff`, `index`)
    Header,
    /// A line added by the change
    Addition,
    /// A line removed by the change
    Removal,
    /// An unchanged line
    Context,
}

/// Classify one line of diff text (without its trailing newline).
///
/// Header prefixes are checked before `+`/`-` so `+++ b/file` and
/// `--- a/file` are headers, never additions or removals.
pub fn classify(line: &str) -> DiffLineKind {
    if HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) {
        DiffLineKind::Header
    } else if line.starts_with('+') {
        DiffLineKind::Addition
    } else if line.starts_with('-') {
        DiffLineKind::Removal
    } else {
        DiffLineKind::Context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_prefixes() {
        assert_eq!(classify("diff --git a/x b/x"), DiffLineKind::Header);
        assert_eq!(classify("index 3f1a2b4..9c8d7e6 100644"), DiffLineKind::Header);
        assert_eq!(classify("--- a/src/main.rs"), DiffLineKind::Header);
        assert_eq!(classify("+++ b/src/main.rs"), DiffLineKind::Header);
    }

    #[test]
    fn test_header_wins_over_addition_and_removal() {
        // These start with '+'/'-' but must classify as headers
        assert_eq!(classify("+++"), DiffLineKind::Header);
        assert_eq!(classify("---"), DiffLineKind::Header);
        assert_eq!(classify("+++ b/x"), DiffLineKind::Header);
        assert_eq!(classify("--- /dev/null"), DiffLineKind::Header);
    }

    #[test]
    fn test_addition() {
        assert_eq!(classify("+let x = 1;"), DiffLineKind::Addition);
        assert_eq!(classify("+"), DiffLineKind::Addition);
        assert_eq!(classify("++not a header"), DiffLineKind::Addition);
    }

    #[test]
    fn test_removal() {
        assert_eq!(classify("-let x = 1;"), DiffLineKind::Removal);
        assert_eq!(classify("-"), DiffLineKind::Removal);
        assert_eq!(classify("--not a header"), DiffLineKind::Removal);
    }

    #[test]
    fn test_context() {
        assert_eq!(classify(" let x = 1;"), DiffLineKind::Context);
        assert_eq!(classify("@@ -1,3 +1,3 @@"), DiffLineKind::Context);
        assert_eq!(classify(""), DiffLineKind::Context);
        assert_eq!(classify("new file mode 100644"), DiffLineKind::Context);
    }
}

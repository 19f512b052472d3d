//! Fixed run configuration — the dashboard directory and the files in it.
//!
//! Nothing is read from disk or the environment.  The base directory can be
//! swapped with `--base-dir`; the target list never changes.

use std::path::PathBuf;

/// Where the dashboard assets live when no `--base-dir` is given.
pub const DEFAULT_BASE_DIR: &str = "/srv/datapify/public/dashboard";

// ───────────────────────────────────────── targets ───────────

/// Which lookup table a target is rewritten with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Emoji,
    BorderRadius,
}

/// One file the branding pass mutates.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub file_name: &'static str,
    pub table: TableKind,
}

impl Target {
    /// Confirmation printed after the file was modified.
    pub fn done_message(&self) -> String {
        match self.table {
            TableKind::Emoji => format!("Emojis removed from {}", self.file_name),
            TableKind::BorderRadius => format!("Border-radius unified in {}", self.file_name),
        }
    }
}

/// The three targets, in run order.
pub static TARGETS: &[Target] = &[
    Target {
        file_name: "index.html",
        table: TableKind::Emoji,
    },
    Target {
        file_name: "app.js",
        table: TableKind::Emoji,
    },
    Target {
        file_name: "styles.css",
        table: TableKind::BorderRadius,
    },
];

// ───────────────────────────────────────── config ────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    pub base_dir: PathBuf,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

impl RewriteConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn path_of(&self, target: &Target) -> PathBuf {
        self.base_dir.join(target.file_name)
    }

    /// Every target paired with its resolved path, in run order.
    pub fn targets(&self) -> impl Iterator<Item = (&'static Target, PathBuf)> + '_ {
        TARGETS.iter().map(move |t| (t, self.path_of(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_is_absolute() {
        assert!(RewriteConfig::default().base_dir.is_absolute());
    }

    #[test]
    fn targets_resolve_under_base_dir() {
        let config = RewriteConfig::new("/tmp/dash");
        let resolved: Vec<(TableKind, PathBuf)> =
            config.targets().map(|(t, p)| (t.table, p)).collect();
        assert_eq!(
            resolved,
            vec![
                (TableKind::Emoji, PathBuf::from("/tmp/dash/index.html")),
                (TableKind::Emoji, PathBuf::from("/tmp/dash/app.js")),
                (TableKind::BorderRadius, PathBuf::from("/tmp/dash/styles.css")),
            ]
        );
    }

    #[test]
    fn done_messages_name_the_file() {
        assert_eq!(TARGETS[0].done_message(), "Emojis removed from index.html");
        assert_eq!(TARGETS[2].done_message(), "Border-radius unified in styles.css");
    }
}

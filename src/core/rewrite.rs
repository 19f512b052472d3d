//! The text rewriter — read a file, transform it in memory, and write it back
//! only when something actually changed.
//!
//! The in-memory half ([`Transform`]) never touches the filesystem, so every
//! rule can be tested on plain strings.  The file half ([`try_rewrite`]) owns
//! the read → transform → conditional write cycle and reports typed errors.
//! [`apply_literal_replacements`] and [`apply_pattern_replacements`] wrap it
//! for the one-shot run: failures are logged and the file is skipped.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use regex::{NoExpand, Regex};
use tempfile::NamedTempFile;

use super::error::{RewriteError, RewriteResult};
use super::tables::{Replacement, BORDER_RADIUS_TABLE};

// ───────────────────────────────────────── transforms ────────

/// Result of running a [`Transform`] over some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub text: String,
    /// Matches replaced per table entry, indexed like the table.
    pub hits: Vec<usize>,
}

impl Applied {
    pub fn total_hits(&self) -> usize {
        self.hits.iter().sum()
    }
}

/// A pure text → text rewrite driven by an ordered table.
pub trait Transform {
    fn apply(&self, input: &str) -> Applied;
}

/// Literal substring replacement, entries applied in table order.
#[derive(Debug, Clone, Copy)]
pub struct LiteralTable<'a> {
    entries: &'a [Replacement],
}

impl<'a> LiteralTable<'a> {
    pub fn new(entries: &'a [Replacement]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'a [Replacement] {
        self.entries
    }
}

impl Transform for LiteralTable<'_> {
    fn apply(&self, input: &str) -> Applied {
        let mut text = input.to_owned();
        let mut hits = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            let count = text.matches(entry.from).count();
            if count > 0 {
                text = text.replace(entry.from, entry.to.text());
            }
            hits.push(count);
        }
        Applied { text, hits }
    }
}

/// A single compiled `border-radius:\s*<value>` rule.
#[derive(Debug, Clone)]
struct BorderRadiusRule {
    pattern: Regex,
    replacement: String,
}

/// Compiled border-radius rules, applied in table order.
#[derive(Debug, Clone)]
pub struct BorderRadiusRules {
    rules: Vec<BorderRadiusRule>,
}

impl BorderRadiusRules {
    /// Compile one rule per `(pixel value, variable token)` pair.  Values are
    /// matched literally.
    pub fn compile(table: &[(&str, &str)]) -> RewriteResult<Self> {
        let rules = table
            .iter()
            .map(|(value, token)| -> RewriteResult<BorderRadiusRule> {
                Ok(BorderRadiusRule {
                    pattern: Regex::new(&format!(r"border-radius:\s*{}", regex::escape(value)))?,
                    replacement: format!("border-radius: {token}"),
                })
            })
            .collect::<RewriteResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The rules for [`BORDER_RADIUS_TABLE`], compiled once per process.
    pub fn standard() -> RewriteResult<&'static Self> {
        static RULES: OnceCell<BorderRadiusRules> = OnceCell::new();
        RULES.get_or_try_init(|| Self::compile(BORDER_RADIUS_TABLE))
    }
}

impl Transform for BorderRadiusRules {
    fn apply(&self, input: &str) -> Applied {
        let mut text = input.to_owned();
        let mut hits = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let count = rule.pattern.find_iter(&text).count();
            if count > 0 {
                text = rule
                    .pattern
                    .replace_all(&text, NoExpand(&rule.replacement))
                    .into_owned();
            }
            hits.push(count);
        }
        Applied { text, hits }
    }
}

// ───────────────────────────────────────── file layer ────────

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub changed: bool,
    pub hits: Vec<usize>,
}

/// Read `path`, run `transform`, and write the result back iff it differs.
pub fn try_rewrite(path: &Path, transform: &dyn Transform) -> RewriteResult<RewriteReport> {
    let bytes = fs::read(path).map_err(|e| RewriteError::io(path, e))?;
    let original = String::from_utf8(bytes).map_err(|source| RewriteError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let Applied { text, hits } = transform.apply(&original);
    let changed = text != original;
    if changed {
        write_atomically(path, &text)?;
        tracing::debug!(path = %path.display(), replaced = hits.iter().sum::<usize>(), "rewrote file");
    } else {
        tracing::debug!(path = %path.display(), "no matches; left untouched");
    }

    Ok(RewriteReport {
        path: path.to_path_buf(),
        changed,
        hits,
    })
}

/// Replace `path` with `contents` through a temp file beside the real file
/// and a rename, keeping the original permissions.  Symlinks are followed so
/// the link itself stays in place.  When the directory refuses the temp file
/// the file is overwritten in place.
fn write_atomically(path: &Path, contents: &str) -> RewriteResult<()> {
    let target = fs::canonicalize(path).map_err(|e| RewriteError::io(path, e))?;
    let dir = target.parent().unwrap_or(Path::new("."));
    let perms = fs::metadata(&target)
        .map_err(|e| RewriteError::io(path, e))?
        .permissions();

    let mut tmp = match NamedTempFile::new_in(dir) {
        Ok(tmp) => tmp,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            tracing::debug!(dir = %dir.display(), "directory not writable; overwriting in place");
            return fs::write(&target, contents).map_err(|e| RewriteError::io(path, e));
        }
        Err(e) => return Err(RewriteError::io(dir, e)),
    };
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .and_then(|()| fs::set_permissions(tmp.path(), perms))
        .map_err(|e| RewriteError::io(path, e))?;
    tmp.persist(&target).map_err(|e| RewriteError::io(path, e.error))?;
    Ok(())
}

// ───────────────────────────────────────── one-shot wrappers ─

/// Run a literal table over `path`.  Any failure is written to `out` and
/// swallowed.
pub fn literal_pass(
    path: &Path,
    table: &LiteralTable<'_>,
    out: &mut impl Write,
) -> Option<RewriteReport> {
    skip_on_error(path, try_rewrite(path, table), "Error updating", out)
}

/// Run border-radius rules over `path`.  Any failure is written to `out` and
/// swallowed.
pub fn pattern_pass(
    path: &Path,
    rules: &BorderRadiusRules,
    out: &mut impl Write,
) -> Option<RewriteReport> {
    skip_on_error(
        path,
        try_rewrite(path, rules),
        "Error updating border-radius in",
        out,
    )
}

/// Apply a literal table to `path`.  Returns whether the file changed; any
/// failure is printed to stdout and counts as "unchanged".
pub fn apply_literal_replacements(path: &Path, table: &LiteralTable<'_>) -> bool {
    literal_pass(path, table, &mut io::stdout().lock()).is_some_and(|r| r.changed)
}

/// Apply border-radius rules to `path`, with the same contract as
/// [`apply_literal_replacements`].
pub fn apply_pattern_replacements(path: &Path, rules: &BorderRadiusRules) -> bool {
    pattern_pass(path, rules, &mut io::stdout().lock()).is_some_and(|r| r.changed)
}

fn skip_on_error(
    path: &Path,
    result: RewriteResult<RewriteReport>,
    prefix: &str,
    out: &mut impl Write,
) -> Option<RewriteReport> {
    match result {
        Ok(report) => Some(report),
        Err(err) => {
            let _ = writeln!(out, "{prefix} {}: {err}", path.display());
            tracing::warn!(path = %path.display(), error = %err, "skipped");
            None
        }
    }
}

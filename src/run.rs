//! The one-shot run: three targets, one after another, with progress on
//! stdout.
//!
//! Stdout is the human-readable report.  Diagnostics go through `tracing`,
//! which `main` points at stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::config::{RewriteConfig, TableKind};
use crate::core::rewrite::{literal_pass, pattern_pass, BorderRadiusRules, LiteralTable};
use crate::core::tables::{Substitute, EMOJI_TABLE};

const CLOSING_SUMMARY: &[&str] = &[
    "Color palette → #17B8A3 (turquoise)",
    "Emojis → removed or replaced with SVG icons",
    "Border-radius → consistent CSS variables",
    "Typography → Inter, sans-serif",
];

/// What the run did, file by file.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub modified: Vec<PathBuf>,
    pub untouched: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Emoji occurrences replaced across all emoji targets, indexed like
    /// [`EMOJI_TABLE`].
    pub emoji_hits: Vec<usize>,
}

/// Rewrite every target under `config.base_dir`.
///
/// Progress and per-file failures go to `out`.  A failed file is skipped;
/// only an invalid border-radius table or a broken `out` aborts.
pub fn run(config: &RewriteConfig, out: &mut impl Write) -> Result<RunSummary> {
    let emoji = LiteralTable::new(EMOJI_TABLE);
    let radius = BorderRadiusRules::standard()?;

    let mut summary = RunSummary {
        emoji_hits: vec![0; EMOJI_TABLE.len()],
        ..Default::default()
    };

    writeln!(out, "🎨 Updating dashboard branding...")?;
    writeln!(out)?;

    for (target, path) in config.targets() {
        tracing::info!(path = %path.display(), table = ?target.table, "processing");
        let report = match target.table {
            TableKind::Emoji => literal_pass(&path, &emoji, out),
            TableKind::BorderRadius => pattern_pass(&path, radius, out),
        };

        let Some(report) = report else {
            summary.skipped.push(path);
            continue;
        };

        if target.table == TableKind::Emoji {
            for (total, n) in summary.emoji_hits.iter_mut().zip(&report.hits) {
                *total += n;
            }
        }
        if report.changed {
            writeln!(out, "✓ {}", target.done_message())?;
            summary.modified.push(path);
        } else {
            summary.untouched.push(path);
        }
    }

    writeln!(out)?;
    writeln!(out, "✓ Branding update complete!")?;
    writeln!(out)?;
    writeln!(out, "Changes applied:")?;
    for line in CLOSING_SUMMARY {
        writeln!(out, "  - {line}")?;
    }

    let follow_up = follow_up_lines(&summary.emoji_hits);
    if !follow_up.is_empty() {
        writeln!(out)?;
        writeln!(out, "Follow-up (styling not applied by this pass):")?;
        for line in &follow_up {
            writeln!(out, "  - {line}")?;
        }
    }

    Ok(summary)
}

/// One line per stripped emoji whose removal relies on a styling change
/// made elsewhere, for entries that actually matched.
pub fn follow_up_lines(emoji_hits: &[usize]) -> Vec<String> {
    EMOJI_TABLE
        .iter()
        .zip(emoji_hits)
        .filter(|&(_, &n)| n > 0)
        .filter_map(|(entry, &n)| match entry.to {
            Substitute::Strip {
                compensated_by: Some(note),
            } => Some(format!("{} removed {n}×: {note}", entry.from)),
            _ => None,
        })
        .collect()
}

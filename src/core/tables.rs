//! The two fixed lookup tables driving the branding pass.
//!
//! Both tables are ordered slices: entries apply in the order listed here.

// ───────────────────────────────────────── emoji table ───────

/// What an emoji turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitute {
    /// Inline SVG markup that inherits `currentColor`.
    Icon(&'static str),
    /// A short plain-text stand-in.
    Symbol(&'static str),
    /// Deleted outright.  `compensated_by` names the styling change the
    /// removal relies on; this tool does not apply it.
    Strip { compensated_by: Option<&'static str> },
}

impl Substitute {
    /// The literal text written in place of the emoji.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Icon(s) | Self::Symbol(s) => s,
            Self::Strip { .. } => "",
        }
    }
}

/// One literal `from` → `to` entry.
#[derive(Debug, Clone, Copy)]
pub struct Replacement {
    pub from: &'static str,
    pub to: Substitute,
}

const fn icon(from: &'static str, svg: &'static str) -> Replacement {
    Replacement { from, to: Substitute::Icon(svg) }
}

const fn symbol(from: &'static str, text: &'static str) -> Replacement {
    Replacement { from, to: Substitute::Symbol(text) }
}

const fn strip(from: &'static str) -> Replacement {
    Replacement { from, to: Substitute::Strip { compensated_by: None } }
}

const fn strip_for(from: &'static str, note: &'static str) -> Replacement {
    Replacement { from, to: Substitute::Strip { compensated_by: Some(note) } }
}

/// Emoji → icon/symbol/nothing, applied to the dashboard HTML and JS.
pub static EMOJI_TABLE: &[Replacement] = &[
    // Navigation
    icon(
        "\u{1F4AC}",
        r#"<svg class="icon" width="20" height="20" viewBox="0 0 20 20" fill="currentColor"><path d="M2 5a2 2 0 012-2h12a2 2 0 012 2v10a2 2 0 01-2 2H4a2 2 0 01-2-2V5z"/></svg>"#,
    ),
    icon(
        "\u{1F4CA}",
        r#"<svg class="icon" width="20" height="20" viewBox="0 0 20 20" fill="currentColor"><path d="M2 11a1 1 0 011-1h2a1 1 0 011 1v5a1 1 0 01-1 1H3a1 1 0 01-1-1v-5zM8 7a1 1 0 011-1h2a1 1 0 011 1v9a1 1 0 01-1 1H9a1 1 0 01-1-1V7zM14 4a1 1 0 011-1h2a1 1 0 011 1v12a1 1 0 01-1 1h-2a1 1 0 01-1-1V4z"/></svg>"#,
    ),
    icon(
        "\u{1F3C6}",
        r#"<svg class="icon" width="20" height="20" viewBox="0 0 20 20" fill="currentColor"><path d="M10 18a8 8 0 100-16 8 8 0 000 16zm1-11a1 1 0 10-2 0v2H7a1 1 0 100 2h2v2a1 1 0 102 0v-2h2a1 1 0 100-2h-2V7z"/></svg>"#,
    ),
    icon(
        "\u{2699}\u{FE0F}",
        r#"<svg class="icon" width="20" height="20" viewBox="0 0 20 20" fill="currentColor"><path fill-rule="evenodd" d="M11.49 3.17c-.38-1.56-2.6-1.56-2.98 0a1.532 1.532 0 01-2.286.948c-1.372-.836-2.942.734-2.106 2.106.54.886.061 2.042-.947 2.287-1.561.379-1.561 2.6 0 2.978a1.532 1.532 0 01.947 2.287c-.836 1.372.734 2.942 2.106 2.106a1.532 1.532 0 012.287.947c.379 1.561 2.6 1.561 2.978 0a1.533 1.533 0 012.287-.947c1.372.836 2.942-.734 2.106-2.106a1.533 1.533 0 01.947-2.287c1.561-.379 1.561-2.6 0-2.978a1.532 1.532 0 01-.947-2.287c.836-1.372-.734-2.942-2.106-2.106a1.532 1.532 0 01-2.287-.947zM10 13a3 3 0 100-6 3 3 0 000 6z" clip-rule="evenodd"/></svg>"#,
    ),
    // Actions / buttons: the label text stays
    strip("\u{1F4E4}"),
    strip("\u{1F504}"),
    icon(
        "\u{1F50D}",
        r#"<svg class="icon" width="16" height="16" viewBox="0 0 20 20" fill="currentColor"><path fill-rule="evenodd" d="M8 4a4 4 0 100 8 4 4 0 000-8zM2 8a6 6 0 1110.89 3.476l4.817 4.817a1 1 0 01-1.414 1.414l-4.816-4.816A6 6 0 012 8z" clip-rule="evenodd"/></svg>"#,
    ),
    // Status
    symbol("\u{2705}", "\u{2713}"),
    symbol("\u{274C}", "\u{2717}"),
    symbol("\u{26A0}\u{FE0F}", "!"),
    strip_for("\u{1F525}", "hot leads need a red accent color"),
    strip_for("\u{1F7E1}", "warm leads need an orange accent color"),
    strip_for("\u{2744}\u{FE0F}", "cold leads need a gray accent color"),
    // Stats
    strip("\u{1F465}"),
    strip("\u{1F4C8}"),
    strip("\u{1F3AF}"),
    strip("\u{1F4A1}"),
    strip("\u{1F680}"),
    strip("\u{1F4CB}"),
    strip("\u{1F4DD}"),
];

// ───────────────────────────────────────── border radius ─────

/// Pixel literal → radius tier variable, applied to the stylesheet.
pub static BORDER_RADIUS_TABLE: &[(&str, &str)] = &[
    ("4px", "var(--radius-sm)"),
    ("6px", "var(--radius-sm)"),
    ("8px", "var(--radius-md)"),
    ("10px", "var(--radius-md)"),
    ("12px", "var(--radius-md)"),
    ("16px", "var(--radius-lg)"),
    ("20px", "var(--radius-lg)"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn emoji_keys_are_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for entry in EMOJI_TABLE {
            assert!(!entry.from.is_empty());
            assert!(seen.insert(entry.from), "duplicate key {:?}", entry.from);
        }
    }

    #[test]
    fn no_replacement_reintroduces_a_key() {
        for entry in EMOJI_TABLE {
            for other in EMOJI_TABLE {
                assert!(
                    !entry.to.text().contains(other.from),
                    "replacement for {:?} contains key {:?}",
                    entry.from,
                    other.from,
                );
            }
        }
    }

    #[test]
    fn radius_tokens_use_three_tiers() {
        let tiers: HashSet<&str> = BORDER_RADIUS_TABLE.iter().map(|(_, t)| *t).collect();
        assert_eq!(
            tiers,
            HashSet::from(["var(--radius-sm)", "var(--radius-md)", "var(--radius-lg)"])
        );
        for (value, token) in BORDER_RADIUS_TABLE {
            assert!(value.ends_with("px"));
            assert!(!token.contains("border-radius"));
        }
    }

    #[test]
    fn only_lead_heat_strips_carry_a_note() {
        let noted: Vec<&str> = EMOJI_TABLE
            .iter()
            .filter(|e| matches!(e.to, Substitute::Strip { compensated_by: Some(_) }))
            .map(|e| e.from)
            .collect();
        assert_eq!(noted, ["\u{1F525}", "\u{1F7E1}", "\u{2744}\u{FE0F}"]);
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the catalog-search CLI.
//!
//! Search results are drawn in boxes: one row per hit with an entity badge,
//! its score and the highlighted name, then the dotted location and the
//! description fragments underneath. `<mark>` selectors from the engine are
//! turned into terminal emphasis here, so the library never emits ANSI codes.
//!
//! Colors are picked by role (frame, badge, score band, match) from a
//! OneDark palette on dark terminals and One Light on light ones. `NO_COLOR`
//! and a non-TTY stdout turn everything into plain text, with matches shown
//! as `*word*`.
//!
//! # Theme detection order
//!
//! 1. `CATALOG_SEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use catalog_search::{EntityType, HighlightConfig, SearchResultItem};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    // 1. Explicit override
    if let Ok(theme) = std::env::var("CATALOG_SEARCH_THEME") {
        if let Some(theme) = parse_theme(&theme) {
            return theme;
        }
    }

    // 2. COLORFGBG is "fg;bg" (xterm, rxvt). Background 7 and 9-15 are light.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(theme) = theme_from_colorfgbg(&colorfgbg) {
            return theme;
        }
    }

    // 3. macOS reports "Dark" only in dark mode
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

/// Detected once per process.
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

/// What a piece of output is, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Box borders and secondary text (emails, locations).
    Muted,
    /// Double-line frame around the query title.
    Frame,
    /// Section labels.
    Heading,
    /// The query title and result names.
    Title,
    Error,
    /// Query examples in `syntax`.
    Example,
    Schema,
    Table,
    Column,
    ScoreTop,
    ScoreHigh,
    ScoreMid,
    /// Highlighted matches.
    Mark,
}

type Rgb = (u8, u8, u8);

fn one_dark(role: Role) -> Rgb {
    match role {
        Role::Muted => (92, 99, 112),        // #5c6370
        Role::Frame => (97, 175, 239),       // #61afef
        Role::Heading => (86, 182, 194),     // #56b6c2
        Role::Title => (102, 217, 239),
        Role::Error => (224, 108, 117),      // #e06c75
        Role::Example => (229, 192, 123),    // #e5c07b
        Role::Schema => (198, 120, 221),     // #c678dd
        Role::Table => (97, 175, 239),       // #61afef
        Role::Column | Role::ScoreHigh => (152, 195, 121), // #98c379
        Role::ScoreTop => (166, 226, 46),
        Role::ScoreMid => (229, 192, 123),   // #e5c07b
        Role::Mark => (255, 215, 0),
    }
}

fn one_light(role: Role) -> Rgb {
    match role {
        Role::Muted => (160, 161, 167),      // #a0a1a7
        Role::Frame => (64, 120, 242),       // #4078f2
        Role::Heading => (1, 132, 188),      // #0184bc
        Role::Title => (1, 112, 158),
        Role::Error => (228, 86, 73),        // #e45649
        Role::Example => (193, 132, 1),      // #c18401
        Role::Schema => (166, 38, 164),      // #a626a4
        Role::Table => (64, 120, 242),       // #4078f2
        Role::Column | Role::ScoreHigh => (80, 161, 79), // #50a14f
        Role::ScoreTop => (68, 140, 39),
        Role::ScoreMid => (193, 132, 1),     // #c18401
        Role::Mark => (152, 104, 1),
    }
}

/// True color escape for `role` in the given theme.
fn escape(theme: Theme, role: Role) -> String {
    let (r, g, b) = match theme {
        Theme::Dark => one_dark(role),
        Theme::Light => one_light(role),
    };
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // https://no-color.org
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in the role's color plus modifiers; plain text without colors.
pub fn themed(role: Role, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!(
            "{}{}{}{}",
            modifiers.join(""),
            escape(theme(), role),
            text,
            RESET
        )
    } else {
        text.to_string()
    }
}

/// Opening color code for a border, or nothing when colors are off.
fn ink(role: Role) -> String {
    if use_colors() {
        escape(theme(), role)
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = ink(Role::Muted);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}{}│{}",
        border,
        reset(),
        content,
        reset(),
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = ink(Role::Muted);
    let label_part = format!("─ {} ", themed(Role::Heading, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// ├──────────────────┤ between two results
pub fn divider() {
    println!("{}├{}┤{}", ink(Role::Muted), "─".repeat(BOX_WIDTH), reset());
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", ink(Role::Muted), "─".repeat(BOX_WIDTH), reset());
}

/// The query, centered in a double-line frame.
pub fn query_banner(query: &str) {
    let border = ink(Role::Frame);
    let title = themed(Role::Title, &[BOLD], &format!("\"{}\"", truncate(query, 60)));
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&title));
    let left_pad = total_pad / 2;
    println!("{}╔{}╗{}", border, "═".repeat(BOX_WIDTH), reset());
    println!(
        "{}║{}{}{}{}{}║{}",
        border,
        reset(),
        " ".repeat(left_pad),
        title,
        " ".repeat(total_pad - left_pad),
        border,
        reset()
    );
    println!("{}╚{}╝{}", border, "═".repeat(BOX_WIDTH), reset());
}

/// Greedy word wrap on visible width. Escape sequences never contain spaces,
/// so splitting on whitespace keeps them attached to their words.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let word_len = visible_len(word);
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Cut plain text to `max` characters, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `[SCHEMA]`, `[TABLE ]` or `[COLUMN]`, colored by entity type.
pub fn entity_badge(entity_type: EntityType) -> String {
    let (label, role) = match entity_type {
        EntityType::Schema => ("SCHEMA", Role::Schema),
        EntityType::Table => ("TABLE", Role::Table),
        EntityType::Column => ("COLUMN", Role::Column),
    };
    themed(role, &[BOLD], &format!("[{:<6}]", label))
}

/// Score band. A name hit alone is worth 4.0, so 8.0 means two name hits.
fn score_role(score: f64) -> Role {
    if score >= 8.0 {
        Role::ScoreTop
    } else if score >= 4.0 {
        Role::ScoreHigh
    } else if score >= 2.0 {
        Role::ScoreMid
    } else {
        Role::Muted
    }
}

pub fn score_value(score: f64) -> String {
    themed(score_role(score), &[], &format!("{:>6.1}", score))
}

/// Dotted location of a result: `schema.table.column`.
pub fn breadcrumb(item: &SearchResultItem) -> String {
    let mut parts = vec![item.schema_name.as_str()];
    if let Some(table) = item.table_name.as_deref() {
        if item.entity_type != EntityType::Schema {
            parts.push(table);
        }
    }
    if let Some(column) = item.column_name.as_deref() {
        parts.push(column);
    }
    parts.join(".")
}

/// Turn highlight selectors into terminal emphasis.
pub fn render_marks(text: &str, highlight: &HighlightConfig) -> String {
    let colors = use_colors().then(theme);
    render_marks_with(text, highlight, colors)
}

/// Colored output uses bold in the match color; plain output wraps matches
/// in `*`.
fn render_marks_with(text: &str, highlight: &HighlightConfig, colors: Option<Theme>) -> String {
    let (open, close) = match colors {
        Some(theme) => (
            format!("{}{}", BOLD, escape(theme, Role::Mark)),
            RESET.to_string(),
        ),
        None => ("*".to_string(), "*".to_string()),
    };
    text.replace(&highlight.start_sel, &open)
        .replace(&highlight.stop_sel, &close)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Table rendering for the phonerank CLI.
//!
//! Tables are built as strings and printed in one go. Color is OneDark
//! truecolor, applied only when stdout is a terminal and `NO_COLOR` is unset.

use std::fmt::Write as _;
use std::sync::OnceLock;

use phonerank::{PhoneQuery, PrefixPage, RankedResult};

/// Inner width of a table, between the two vertical borders.
const TABLE_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// COLOR
// ═══════════════════════════════════════════════════════════════════════════

/// What a piece of text means, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Close,
    Near,
    Far,
    Accent,
    Muted,
}

impl Tone {
    fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tone::Close => (152, 195, 121), // #98c379
            Tone::Near => (229, 192, 123),  // #e5c07b
            Tone::Far => (224, 108, 117),   // #e06c75
            Tone::Accent => (86, 182, 194), // #56b6c2
            Tone::Muted => (92, 99, 112),   // #5c6370
        }
    }

    /// Tone for an edit distance: 0-1 close, 2-3 near, otherwise far.
    pub fn for_distance(distance: usize) -> Self {
        match distance {
            0 | 1 => Tone::Close,
            2 | 3 => Tone::Near,
            _ => Tone::Far,
        }
    }

    /// Tone for a similarity in `[0, 1]`.
    pub fn for_similarity(similarity: f64) -> Self {
        if similarity >= 0.6 {
            Tone::Close
        } else if similarity >= 0.3 {
            Tone::Near
        } else {
            Tone::Muted
        }
    }
}

fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

fn paint_with(enabled: bool, tone: Tone, text: &str) -> String {
    if !enabled {
        return text.to_string();
    }
    let (r, g, b) = tone.rgb();
    format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
}

/// Color `text` if the terminal allows it.
pub fn paint(tone: Tone, text: &str) -> String {
    paint_with(colors_enabled(), tone, text)
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYOUT
// ═══════════════════════════════════════════════════════════════════════════

/// On-screen width of `text`, skipping ANSI escape sequences.
pub fn display_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the end of the SGR sequence
            let _ = chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Pad `text` to `width` visible columns. Longer text is left alone.
fn cell(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(text)));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

/// A titled box: one header rule, any number of rows, one footer rule.
struct Table {
    out: String,
}

impl Table {
    fn new(title: &str) -> Self {
        let heading = format!("─ {} ", paint(Tone::Accent, title));
        let rule = "─".repeat(TABLE_WIDTH.saturating_sub(display_width(&heading)));
        Self {
            out: format!("┌{heading}{rule}┐\n"),
        }
    }

    fn row(&mut self, content: &str) {
        let _ = writeln!(self.out, "│{}│", cell(content, TABLE_WIDTH, Align::Left));
    }

    fn finish(mut self) -> String {
        let _ = writeln!(self.out, "└{}┘", "─".repeat(TABLE_WIDTH));
        self.out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

/// `(415) 555-1234` for a well-formed number, `(415) 55` otherwise.
pub fn format_number(area_code: &str, local_number: &str) -> String {
    match local_number.get(..3).zip(local_number.get(3..)) {
        Some((exchange, line)) if local_number.len() == 7 => format!("({area_code}) {exchange}-{line}"),
        _ => format!("({area_code}) {local_number}"),
    }
}

/// Ranked results for one query.
pub fn render_results(query: &PhoneQuery, results: &[RankedResult]) -> String {
    let mut table = Table::new(&format!(
        "RELATED TO {}",
        format_number(&query.area_code, &query.local_number)
    ));
    if results.is_empty() {
        table.row(&paint(Tone::Muted, "  no related numbers"));
    }
    for (rank, result) in results.iter().enumerate() {
        let distance = paint(Tone::for_distance(result.distance), &format!("d={}", result.distance));
        let similarity = paint(
            Tone::for_similarity(result.similarity),
            &format!("{:.6}", result.similarity),
        );
        table.row(&format!(
            "  {} {} {} {} {}",
            cell(&format!("{}.", rank + 1), 3, Align::Right),
            cell(&format_number(&result.area_code, &result.local_number), 16, Align::Left),
            cell(&distance, 6, Align::Left),
            cell(&similarity, 10, Align::Left),
            cell(&paint(Tone::Accent, &result.cost.to_string()), 8, Align::Right),
        ));
    }
    table.finish()
}

/// One page of area-code counts.
pub fn render_prefixes(page: &PrefixPage) -> String {
    let first = (page.offset + 1).min(page.count);
    let last = (page.offset + page.results.len()).min(page.count);
    let mut table = Table::new(&format!("AREA CODES {first}-{last} OF {}", page.count));
    for entry in &page.results {
        table.row(&format!(
            "  {}  {}",
            paint(Tone::Accent, &entry.area_code),
            cell(&entry.count.to_string(), 8, Align::Right)
        ));
    }
    table.finish()
}

pub fn print_results(query: &PhoneQuery, results: &[RankedResult]) {
    print!("{}", render_results(query, results));
}

pub fn print_prefixes(page: &PrefixPage) {
    print!("{}", render_prefixes(page));
}

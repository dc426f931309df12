//! Offline heuristic summary used when the inference service can't answer.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::summary::digest::{mood_counts, recent};
use crate::types::JournalEntry;

const MAX_THEMES: usize = 5;
const MIN_THEME_LEN: usize = 5;
const STOP_WORDS: [&str; 9] = [
    "about", "after", "again", "their", "there", "these", "those", "would", "could",
];
const RECOMMENDATION: &str =
    "Recommendation: Continue journaling regularly to track your emotional patterns and growth.";

/// ASCII non-word runs, so tokens are `[A-Za-z0-9_]+`.
#[allow(clippy::expect_used)]
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid regex"));

/// Deterministic summary of `entries`. Same input, same bytes out.
pub fn basic_summary(entries: &[JournalEntry]) -> String {
    let Some(latest) = entries.last() else {
        return "You haven't written any journal entries yet.".to_string();
    };
    let total = entries.len();

    let mut out = format!("Based on your {} journal entries:\n\n", total);

    if let Some((mood, count)) = most_common_mood(entries) {
        let _ = writeln!(
            out,
            "- Your most frequent mood is \"{}\" ({} entries)",
            mood, count
        );
    }

    let _ = writeln!(out, "- You've journaled {} times", total);
    let _ = writeln!(out, "- Your most recent entry was on {}\n", latest.display_date());

    out.push_str("Recent themes in your entries:\n");
    let themes = common_themes(recent(entries));
    if !themes.is_empty() {
        let _ = writeln!(out, "- Common themes: {}", themes.join(", "));
    }

    out.push('\n');
    out.push_str(RECOMMENDATION);
    out
}

/// Mode of the lowercased moods. The earliest-seen mood wins a tie.
fn most_common_mood(entries: &[JournalEntry]) -> Option<(String, usize)> {
    let mut best: Option<(String, usize)> = None;
    for (mood, count) in mood_counts(entries) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((mood, count));
        }
    }
    best
}

/// Up to five frequent longer words across the descriptions, earliest-seen first on ties.
fn common_themes(entries: &[JournalEntry]) -> Vec<String> {
    let text = entries
        .iter()
        .map(|e| e.description.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for word in NON_WORD_RE.split(&text) {
        if word.len() < MIN_THEME_LEN || STOP_WORDS.contains(&word) {
            continue;
        }
        match counts.iter_mut().find(|(w, _)| *w == word) {
            Some((_, n)) => *n += 1,
            None => counts.push((word, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_THEMES)
        .map(|(w, _)| w.to_string())
        .collect()
}

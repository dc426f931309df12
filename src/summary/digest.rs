//! Compact text digest of a user's journal history, used as prompt context.

use std::fmt::Write;

use crate::types::JournalEntry;

pub const RECENT_WINDOW: usize = 5;
const CONTENT_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct MoodShare {
    pub mood: String,
    pub count: usize,
    pub percent: u32,
}

#[derive(Debug)]
pub struct JournalDigest<'a> {
    pub total_count: usize,
    /// Chronological, oldest of the window first.
    pub recent_entries: &'a [JournalEntry],
    /// Descending by count; equal counts keep first-occurrence order.
    pub mood_distribution: Vec<MoodShare>,
}

impl<'a> JournalDigest<'a> {
    /// Entries are assumed to already be in ascending creation order.
    pub fn from_entries(entries: &'a [JournalEntry]) -> Self {
        let total = entries.len();
        let mut counts = mood_counts(entries);
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mood_distribution = counts
            .into_iter()
            .map(|(mood, count)| MoodShare {
                mood,
                count,
                percent: percent_of(count, total),
            })
            .collect();

        Self {
            total_count: total,
            recent_entries: recent(entries),
            mood_distribution,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("Total journal entries: {}\n", self.total_count);

        let _ = writeln!(
            out,
            "\nRecent journal entries (most recent {}):",
            self.recent_entries.len()
        );
        for (i, entry) in self.recent_entries.iter().enumerate() {
            let _ = writeln!(out, "\nEntry {} ({}):", i + 1, entry.display_date());
            let _ = writeln!(out, "Title: {}", entry.title);
            let _ = writeln!(out, "Mood: {}", entry.mood);
            let _ = writeln!(out, "Content: {}", preview(&entry.description));
        }

        out.push_str("\nMood distribution:\n");
        for share in &self.mood_distribution {
            let _ = writeln!(
                out,
                "- {}: {} entries ({}%)",
                share.mood, share.count, share.percent
            );
        }
        out
    }
}

/// The last `RECENT_WINDOW` entries, or all of them when there are fewer.
pub fn recent(entries: &[JournalEntry]) -> &[JournalEntry] {
    &entries[entries.len().saturating_sub(RECENT_WINDOW)..]
}

/// Lowercased mood counts in first-occurrence order.
pub fn mood_counts(entries: &[JournalEntry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        let mood = entry.mood.to_lowercase();
        match counts.iter_mut().find(|(m, _)| *m == mood) {
            Some((_, n)) => *n += 1,
            None => counts.push((mood, 1)),
        }
    }
    counts
}

fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

fn preview(text: &str) -> String {
    if text.chars().count() > CONTENT_PREVIEW_CHARS {
        let cut: String = text.chars().take(CONTENT_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

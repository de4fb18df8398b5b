//! Education analysis — degree, institution, and honors mentions with a
//! surrounding context window.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Characters of context kept on each side of a match.
const CONTEXT_CHARS: usize = 30;

static EDUCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Degree abbreviations
        Regex::new(
            r"(?i)\b(?:B\.?S\.?|M\.?S\.?|Ph\.?D\.?|B\.?A\.?|M\.?B\.?A\.?|B\.?Tech|M\.?Tech|B\.?E\.?|M\.?E\.?)\b",
        )
        .unwrap(),
        Regex::new(r"(?i)\bUniversity\b").unwrap(),
        Regex::new(r"(?i)\bCollege\b").unwrap(),
        Regex::new(r"(?i)\bInstitute of Technology\b").unwrap(),
        Regex::new(r"(?i)\bDegree\b").unwrap(),
        Regex::new(r"(?i)\bBachelor\b").unwrap(),
        Regex::new(r"(?i)\bMaster\b").unwrap(),
        // Latin honors
        Regex::new(r"(?i)\b(?:Cum Laude|Magna Cum Laude|Summa Cum Laude)\b").unwrap(),
    ]
});

/// Scans for education-related mentions and returns a context snippet per
/// match, deduplicated preserving insertion order. Overlapping matches may
/// produce overlapping snippets; only exact duplicates collapse.
pub fn analyze_education(text: &str) -> Vec<String> {
    let mut snippets = Vec::new();
    let mut seen = HashSet::new();

    for pattern in EDUCATION_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let from = chars_back(text, m.start(), CONTEXT_CHARS);
            let to = chars_forward(text, m.end(), CONTEXT_CHARS);
            let snippet = text[from..to].replace('\n', " ").trim().to_string();
            if seen.insert(snippet.clone()) {
                snippets.push(snippet);
            }
        }
    }

    snippets
}

/// Byte offset `n` characters before `at`, clamped to the text start.
/// Counting characters keeps the window from splitting multi-byte sequences.
fn chars_back(text: &str, at: usize, n: usize) -> usize {
    text[..at]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(at)
}

/// Byte offset `n` characters after `at`, clamped to the text end.
fn chars_forward(text: &str, at: usize, n: usize) -> usize {
    text[at..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| at + i)
        .unwrap_or(text.len())
}

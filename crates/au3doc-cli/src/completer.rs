//! Fuzzy name matching over the completion table

use au3doc_stdlib::{registry, CompletionEntry};

/// A scored match: lower-cased key plus its completion entry
pub struct Match {
    pub name: &'static str,
    pub entry: &'static CompletionEntry,
}

/// Rank registered names against `word`: prefix matches first, then
/// jaro-winkler similarity for typos, best first, at most `limit`.
pub fn fuzzy_complete(word: &str, limit: usize) -> Vec<Match> {
    if word.is_empty() {
        return vec![];
    }

    let word_lower = word.to_lowercase();
    let mut matches: Vec<(f64, &'static str, &'static CompletionEntry)> = registry()
        .completions()
        .iter()
        .filter_map(|(name, entry)| {
            if name.starts_with(&word_lower) {
                Some((1.0, name.as_str(), entry))
            } else {
                let score = strsim::jaro_winkler(name, &word_lower);
                if score > 0.7 {
                    Some((score * 0.8, name.as_str(), entry))
                } else {
                    None
                }
            }
        })
        .collect();

    // Best score first; equal scores in name order for stable output
    matches.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    matches
        .into_iter()
        .take(limit)
        .map(|(_, name, entry)| Match { name, entry })
        .collect()
}

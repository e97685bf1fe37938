//! Registry of the activity tags a query may refer to.
//!
//! A [`Vocabulary`] is owned by whoever loads the journal and is passed by
//! reference to the condition constructors that validate tags against it.

use std::collections::{BTreeSet, HashMap};

use crate::error::Error;

/// Minimum similarity for a known tag to be offered as a suggestion.
const SUGGESTION_CUTOFF: f64 = 0.6;

/// The set of legal activity tags and the people among them.
///
/// People are the tags whose first character is uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    allowed: BTreeSet<String>,
    people: BTreeSet<String>,
}

impl Vocabulary {
    /// Creates an empty, unregistered vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vocabulary already registered with `activities`.
    pub fn with_activities<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::new();
        vocabulary.register(activities);
        vocabulary
    }

    /// Replaces the allowed activities and recomputes the people subset.
    pub fn register<I, S>(&mut self, activities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = activities.into_iter().map(Into::into).collect();
        self.people = self
            .allowed
            .iter()
            .filter(|tag| tag.chars().next().is_some_and(char::is_uppercase))
            .cloned()
            .collect();
        tracing::debug!(
            activities = self.allowed.len(),
            people = self.people.len(),
            "registered activity vocabulary"
        );
    }

    /// Fails unless [`register`](Self::register) was called with at least one activity.
    pub fn require_registered(&self) -> Result<(), Error> {
        if !self.is_registered() {
            return Err(Error::VocabularyNotRegistered);
        }
        Ok(())
    }

    pub fn is_registered(&self) -> bool {
        !self.allowed.is_empty()
    }

    pub fn contains(&self, activity: &str) -> bool {
        self.allowed.contains(activity)
    }

    pub const fn activities(&self) -> &BTreeSet<String> {
        &self.allowed
    }

    pub const fn people(&self) -> &BTreeSet<String> {
        &self.people
    }

    /// Validates `activity` against the vocabulary.
    ///
    /// Unknown activities carry the closest known tag, if any is similar enough.
    pub fn validate(&self, activity: &str) -> Result<(), Error> {
        self.require_registered()?;
        if self.contains(activity) {
            return Ok(());
        }
        Err(Error::UnknownActivity {
            activity: activity.to_string(),
            suggestion: self.closest_match(activity).map(str::to_string),
        })
    }

    /// Returns the registered tag most similar to `activity`.
    ///
    /// Ties go to the lexicographically largest tag.
    pub fn closest_match(&self, activity: &str) -> Option<&str> {
        let word: Vec<char> = activity.chars().collect();
        let mut best: Option<(&str, f64)> = None;
        for tag in &self.allowed {
            let score = similarity(tag, &word);
            if score < SUGGESTION_CUTOFF {
                continue;
            }
            // Tags iterate in ascending order, so `>=` lets the later tag win a tie.
            if best.is_none_or(|(_, best_score)| score >= best_score) {
                best = Some((tag.as_str(), score));
            }
        }
        best.map(|(tag, _)| tag)
    }
}

/// Ratcliff/Obershelp similarity `2 * M / T` in \[0.0, 1.0\].
///
/// `M` is the number of characters in matching blocks and `T` the total
/// length of both strings.
#[expect(
    clippy::cast_precision_loss,
    reason = "tag lengths are far below f64 precision limits"
)]
fn similarity(tag: &str, word: &[char]) -> f64 {
    let tag: Vec<char> = tag.chars().collect();
    let total = tag.len() + word.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&tag, word) as f64 / total as f64
}

/// Total size of the matching blocks between `a` and `b`.
///
/// Takes the longest common block, then recurses into the pieces to its left
/// and to its right.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        positions.entry(*ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &positions, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest block shared by `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among equally long blocks, the one starting earliest in `a` wins, then the
/// one starting earliest in `b`. Returns `(start_in_a, start_in_b, size)`.
fn longest_match(
    a: &[char],
    b_positions: &HashMap<char, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // Length of the block ending at (i - 1, j), keyed by j.
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_lengths = HashMap::new();
        for &j in b_positions.get(ch).into_iter().flatten() {
            if j < blo {
                continue;
            }
            if j >= bhi {
                break;
            }
            let size = j
                .checked_sub(1)
                .and_then(|prev| run_lengths.get(&prev))
                .copied()
                .unwrap_or(0)
                + 1;
            next_lengths.insert(j, size);
            if size > best_size {
                best_i = i + 1 - size;
                best_j = j + 1 - size;
                best_size = size;
            }
        }
        run_lengths = next_lengths;
    }
    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vocabulary_is_unregistered() {
        let vocabulary = Vocabulary::new();
        assert!(!vocabulary.is_registered());
        assert_eq!(
            vocabulary.require_registered(),
            Err(Error::VocabularyNotRegistered)
        );
        assert_eq!(vocabulary.validate("gym"), Err(Error::VocabularyNotRegistered));
    }

    #[test]
    fn register_derives_people() {
        let vocabulary = Vocabulary::with_activities(["gym", "Alice", "run", "Bob"]);
        assert!(vocabulary.is_registered());
        assert!(vocabulary.require_registered().is_ok());
        assert_eq!(
            vocabulary.people().iter().collect::<Vec<_>>(),
            vec!["Alice", "Bob"]
        );
    }

    #[test]
    fn last_register_wins() {
        let mut vocabulary = Vocabulary::with_activities(["gym", "Alice"]);
        vocabulary.register(["run"]);
        assert!(!vocabulary.contains("gym"));
        assert!(vocabulary.contains("run"));
        assert!(vocabulary.people().is_empty());
    }

    #[test]
    fn closest_match_suggests_similar_tag() {
        let vocabulary = Vocabulary::with_activities(["gym", "run", "reading"]);
        assert_eq!(vocabulary.closest_match("jym"), Some("gym"));
        assert_eq!(vocabulary.closest_match("raeding"), Some("reading"));
        assert_eq!(vocabulary.closest_match("swimming"), None);
    }

    #[test]
    fn validate_reports_suggestion() {
        let vocabulary = Vocabulary::with_activities(["gym", "run"]);
        assert!(vocabulary.validate("gym").is_ok());
        let err = vocabulary.validate("jym").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownActivity {
                activity: "jym".to_string(),
                suggestion: Some("gym".to_string()),
            }
        );
        assert!(err.to_string().contains("gym"));
    }

    #[test]
    fn shortened_tags_suggest_full_tag() {
        let vocabulary =
            Vocabulary::with_activities(["running", "reading", "meditation", "gym"]);
        assert_eq!(vocabulary.closest_match("run"), Some("running"));
        assert_eq!(vocabulary.closest_match("read"), Some("reading"));
        assert_eq!(vocabulary.closest_match("meditate"), Some("meditation"));
    }

    #[test]
    fn ties_go_to_last_tag() {
        let vocabulary = Vocabulary::with_activities(["gum", "gym"]);
        assert_eq!(vocabulary.closest_match("gxm"), Some("gym"));
    }

    #[test]
    fn similarity_counts_matching_blocks() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert!((similarity("running", &chars("run")) - 0.6).abs() < 1e-9);
        assert!((similarity("abcd", &chars("bcda")) - 0.75).abs() < 1e-9);
        assert!((similarity("gym", &chars("gym")) - 1.0).abs() < 1e-9);
        assert!(similarity("gym", &chars("xyz")) < 0.5);
        assert_eq!(matching_characters(&chars("meditation"), &chars("meditate")), 7);
    }
}

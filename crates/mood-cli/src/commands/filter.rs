//! Translation of filter flags into a condition tree and a record filter.

use anyhow::{Context, Result};
use mood_core::{Condition, Journal, Record, RecordFilter, Vocabulary};
use regex::Regex;

use crate::cli::FilterArgs;

impl FilterArgs {
    /// Builds the AND of every condition flag. `None` when no flag is set.
    pub fn condition(&self, vocabulary: &Vocabulary) -> Result<Option<Condition>> {
        let mut terms = Vec::new();

        if self.from.is_some() || self.to.is_some() {
            terms.push(Condition::date_interval(
                self.from.as_deref(),
                self.to.as_deref(),
            )?);
        }
        if self.mood_min.is_some() || self.mood_max.is_some() {
            terms.push(Condition::mood_interval(self.mood_min, self.mood_max));
        }

        let any_of = self
            .has
            .iter()
            .map(|activity| Condition::has(vocabulary, activity))
            .collect::<Result<Vec<_>, _>>()?;
        terms.extend(Condition::any(any_of));

        for activity in &self.not_has {
            terms.push(Condition::has(vocabulary, activity)?.negate());
        }
        if let Some(word) = &self.note {
            terms.push(Condition::note_contains(word));
        }
        if self.people {
            terms.push(Condition::has_people(vocabulary)?);
        }

        Ok(Condition::all(terms))
    }

    /// Builds the include/exclude/mood/regex filter.
    pub fn record_filter(&self) -> Result<RecordFilter<'static>> {
        let mut filter = RecordFilter::new()
            .include(self.include.clone())
            .exclude(self.exclude.clone());
        if !self.mood.is_empty() {
            filter = filter.mood(self.mood.clone());
        }
        if !self.note_regex.is_empty() {
            let patterns = self
                .note_regex
                .iter()
                .map(|p| Regex::new(p).with_context(|| format!("invalid note pattern: {p}")))
                .collect::<Result<Vec<_>>>()?;
            filter = filter.note(patterns);
        }
        Ok(filter)
    }

    /// Selects the journal records passing both the condition and the filter.
    pub fn select<'j>(
        &self,
        journal: &'j Journal,
    ) -> Result<(Option<Condition>, Vec<&'j Record>)> {
        let condition = self.condition(journal.vocabulary())?;
        let filter = self.record_filter()?;

        let candidates = match &condition {
            Some(condition) => journal.select(condition),
            None => journal.records().iter().collect(),
        };
        let selected = filter.apply(candidates)?;
        Ok((condition, selected))
    }
}

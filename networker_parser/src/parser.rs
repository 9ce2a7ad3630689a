use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use networker_core::ParsedNote;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::resolve_relative_date;
use crate::patterns::{
    COMPANY, ENGLISH_NAME, FOLLOW_UP, FieldPattern, HEBREW_NAME, HOW_MET, INTRODUCED_BY,
    JOB_TITLE, TAG_CATEGORIES, first_match,
};
use crate::spans::{ConsumedSpans, tidy_residual};

/// Behavior switches for [`NoteParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Drop repeated tags, keeping the first occurrence.
    #[serde(default = "default_dedupe_tags")]
    pub dedupe_tags: bool,
}

const fn default_dedupe_tags() -> bool {
    true
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { dedupe_tags: true }
    }
}

impl ParserOptions {
    /// Keep every tag as emitted, duplicates included.
    #[must_use]
    pub const fn legacy() -> Self {
        Self { dedupe_tags: false }
    }
}

/// Rule-based note parser.
///
/// Each field is extracted independently from the original text by its own
/// ordered pattern list, first match wins. Matched spans are removed from the
/// residual text. Parsing never fails; fields that do not match stay `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteParser {
    options: ParserOptions,
}

impl NoteParser {
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parse `text`, resolving relative dates against `now`.
    #[must_use]
    pub fn parse<Tz: TimeZone>(&self, text: &str, now: &DateTime<Tz>) -> ParsedNote {
        let mut consumed = ConsumedSpans::default();

        let english_name = take(&ENGLISH_NAME, text, &mut consumed).map(str::to_string);
        let hebrew_name = take(&HEBREW_NAME, text, &mut consumed).map(str::to_string);
        let company = take(&COMPANY, text, &mut consumed).map(|c| c.trim().to_string());
        let job_title = take(&JOB_TITLE, text, &mut consumed).map(|t| t.trim().to_string());

        let mentions_conference = text.to_lowercase().contains("conference");
        let how_met = take(&HOW_MET, text, &mut consumed).map(|place| {
            let place = place.trim();
            if mentions_conference {
                format!("{place} Conference")
            } else {
                place.to_string()
            }
        });

        let introduced_by = take(&INTRODUCED_BY, text, &mut consumed).map(str::to_string);
        let follow_up_date = take(&FOLLOW_UP, text, &mut consumed)
            .map(|phrase| resolve_relative_date(phrase, now));

        let tags = self.collect_tags(text, company.as_deref());
        let remaining_text = tidy_residual(&consumed.residual(text));

        debug!(
            english_name = english_name.is_some(),
            hebrew_name = hebrew_name.is_some(),
            company = company.is_some(),
            job_title = job_title.is_some(),
            how_met = how_met.is_some(),
            introduced_by = introduced_by.is_some(),
            follow_up_date = follow_up_date.is_some(),
            tags = tags.len(),
            "Parsed note"
        );

        ParsedNote {
            english_name,
            hebrew_name,
            company,
            job_title,
            introduced_by,
            how_met,
            follow_up_date,
            tags,
            remaining_text,
        }
    }

    /// Company tag first, then every keyword category that matches the
    /// whole note, in table order.
    fn collect_tags(&self, text: &str, company: Option<&str>) -> Vec<String> {
        let mut tags: Vec<String> = company.map(str::to_lowercase).into_iter().collect();
        tags.extend(
            TAG_CATEGORIES
                .iter()
                .filter(|category| category.regex.is_match(text))
                .map(|category| category.name.to_string()),
        );

        if self.options.dedupe_tags {
            let mut seen = HashSet::new();
            tags.retain(|tag| seen.insert(tag.clone()));
        }
        tags
    }
}

/// Parse with default options against the current time.
#[must_use]
pub fn parse_note(text: &str) -> ParsedNote {
    NoteParser::default().parse(text, &Utc::now())
}

fn take<'t>(
    patterns: &[FieldPattern],
    text: &'t str,
    consumed: &mut ConsumedSpans,
) -> Option<&'t str> {
    let found = first_match(patterns, text)?;
    debug!(rule = found.rule, "Field pattern matched");
    consumed.consume(found.span);
    Some(found.value)
}

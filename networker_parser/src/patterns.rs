//! Static pattern tables for note field extraction.
//!
//! Each field has an ordered list of patterns; the first one that matches the
//! note wins. Keyword framing (`working at`, `introduced by`, ...) matches in
//! any case while capitalized-name captures stay case-sensitive.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Which part of a match becomes the field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// The entire matched phrase.
    Whole,
    /// A single capture group.
    Group(usize),
}

/// One entry in a field's ordered pattern list.
#[derive(Debug)]
pub struct FieldPattern {
    pub regex: Regex,
    pub capture: Capture,
    pub description: &'static str,
}

/// A successful field match against the note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch<'t> {
    /// The extracted value, before any field-specific cleanup.
    pub value: &'t str,
    /// Byte range of the whole match, consumed from the residual text.
    pub span: Range<usize>,
    /// Description of the pattern that produced the match.
    pub rule: &'static str,
}

impl FieldPattern {
    fn new(pattern: &str, capture: Capture, description: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("static regex: field pattern"),
            capture,
            description,
        }
    }

    #[must_use]
    pub fn find<'t>(&self, text: &'t str) -> Option<FieldMatch<'t>> {
        let caps = self.regex.captures(text)?;
        let whole = caps.get(0)?;
        let value = match self.capture {
            Capture::Whole => whole,
            Capture::Group(index) => caps.get(index)?,
        };
        Some(FieldMatch {
            value: value.as_str(),
            span: whole.range(),
            rule: self.description,
        })
    }
}

/// First match across an ordered pattern list.
#[must_use]
pub fn first_match<'t>(patterns: &[FieldPattern], text: &'t str) -> Option<FieldMatch<'t>> {
    patterns.iter().find_map(|pattern| pattern.find(text))
}

/// A topical tag and the keywords that trigger it.
#[derive(Debug)]
pub struct TagCategory {
    pub name: &'static str,
    pub regex: Regex,
}

pub static ENGLISH_NAME: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![FieldPattern::new(
        r"^([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
        Capture::Group(1),
        "leading capitalized words",
    )]
});

pub static HEBREW_NAME: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![FieldPattern::new(
        r"[\x{0590}-\x{05FF}]+(?:\s+[\x{0590}-\x{05FF}]+)*",
        Capture::Whole,
        "hebrew word run",
    )]
});

pub static COMPANY: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            r"\b(?i:working)\s+(?i:at)\s+([A-Z][a-zA-Z0-9]*(?:[ \t]+[A-Z][a-zA-Z0-9]*)*)",
            Capture::Group(1),
            "working at X",
        ),
        FieldPattern::new(
            r"\b(?i:at)\s+([A-Z][a-zA-Z0-9]+)(?:\s+(?i:as|in)\s+|\s*[,.]|\s*$)",
            Capture::Group(1),
            "at X as/in/,",
        ),
        FieldPattern::new(
            r"\b(?i:from)\s+([A-Z][a-zA-Z0-9]*(?:[ \t]+[A-Z][a-zA-Z0-9]*)*)\b",
            Capture::Group(1),
            "from X",
        ),
        FieldPattern::new(
            r"\b([A-Z][a-zA-Z]*(?i:Tech|Labs|Lab|Inc|Corp|Ltd|LLC|Ventures|Capital|Fund|Solutions|Systems|Works|Group|Partners|Consulting))\b",
            Capture::Group(1),
            "corporate suffix",
        ),
        FieldPattern::new(
            r"\b([A-Z][a-zA-Z]*[ \t]+(?i:Technologies|Corporation|Limited|Company|Ventures|Capital|Partners))\b",
            Capture::Group(1),
            "long-form suffix",
        ),
    ]
});

pub static JOB_TITLE: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            r"(?i)\bproduct\s+manager(?:\s+of\s+[a-z \t]+)?",
            Capture::Whole,
            "product manager of X",
        ),
        FieldPattern::new(
            r"(?i)\b(?:CEO|CTO|CFO|VP|Vice President|President|Director|Manager|Lead|Senior|Principal|Head of|Chief)(?:\s+of)?\s+[a-z& \t]+",
            Capture::Whole,
            "title keyword with scope",
        ),
        FieldPattern::new(
            r"(?i)\b(?:Founder|Co-Founder|Partner|Associate|Analyst|Engineer|Developer|Designer|Sales Manager|Marketing Manager)\b",
            Capture::Whole,
            "single-word title",
        ),
    ]
});

pub static HOW_MET: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            r"(?i)\bmet\s+(?:him|her|them)?\s*(?:at|in)\s+([^,.\n]+?)(?:\s+conference|\s+event|\s+meeting|\s+and|\s*[,.])",
            Capture::Group(1),
            "met at/in X",
        ),
        FieldPattern::new(
            r"\b(?i:at)\s+([A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*)\s+(?i:conference|event|summit|expo)",
            Capture::Group(1),
            "at X conference",
        ),
        FieldPattern::new(
            r"\b(?i:from)\s+([A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*)\s+(?i:conference|event|summit|expo)",
            Capture::Group(1),
            "from X conference",
        ),
    ]
});

pub static INTRODUCED_BY: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            r"\b(?i:intro(?:'?d)?)\s+(?i:by)\s+([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*)",
            Capture::Group(1),
            "intro'd by NAME",
        ),
        FieldPattern::new(
            r"\b(?i:introduced)\s+(?i:by)\s+([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*)",
            Capture::Group(1),
            "introduced by NAME",
        ),
        FieldPattern::new(
            r"\b(?i:met)\s+(?i:through)\s+([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*)",
            Capture::Group(1),
            "met through NAME",
        ),
    ]
});

pub static FOLLOW_UP: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            r"(?i)\b(?:follow[\s-]?up|meeting|call|appointment)\s+(?:scheduled\s+)?(?:for\s+)?(?:on\s+)?(next\s+\w+day(?:\s+at\s+\d{1,2}:\d{2})?)",
            Capture::Group(1),
            "follow-up for next <day>",
        ),
        FieldPattern::new(
            r"(?i)\b(?:scheduled|set|arranged)\s+(?:a\s+)?(?:follow[\s-]?up|meeting|call)?\s+(?:for\s+)?(next\s+\w+day(?:\s+at\s+\d{1,2}:\d{2})?)",
            Capture::Group(1),
            "scheduled for next <day>",
        ),
        FieldPattern::new(
            r"(?i)\b(next\s+(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)(?:\s+at\s+\d{1,2}:\d{2})?)",
            Capture::Group(1),
            "bare next <weekday>",
        ),
    ]
});

/// Keyword categories in tag emission order.
pub static TAG_CATEGORIES: Lazy<Vec<TagCategory>> = Lazy::new(|| {
    [
        (
            "tech",
            r"(?i)\b(?:tech|technology|software|development|engineering|AI|ML|startup)\b",
        ),
        ("investor", r"(?i)\b(?:investor|VC|venture|capital|fund|invest)\b"),
        ("founder", r"(?i)\b(?:founder|co-founder|CEO|startup)\b"),
        (
            "prospect",
            r"(?i)\b(?:prospect|client|customer|lead|opportunity)\b",
        ),
        (
            "partner",
            r"(?i)\b(?:partner|partnership|collaborate|alliance)\b",
        ),
        (
            "conference",
            r"(?i)\b(?:conference|summit|expo|event|meetup)\b",
        ),
        ("parking", r"(?i)\b(?:parking|automotive|mobility)\b"),
    ]
    .into_iter()
    .map(|(name, pattern)| TagCategory {
        name,
        regex: Regex::new(pattern).expect("static regex: tag category"),
    })
    .collect()
});

pub static LEADING_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s,.\-]+").expect("static regex: leading separators"));

pub static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex: whitespace run"));

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::note::ParsedNote;

/// Kind of relationship an edge records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    IntroducedBy,
    SameCompany,
}

impl RelationType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IntroducedBy => "introduced_by",
            Self::SameCompany => "same_company",
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "introduced_by" => Ok(Self::IntroducedBy),
            "same_company" => Ok(Self::SameCompany),
            _ => Err(anyhow::anyhow!("unknown relation type: {s}")),
        }
    }
}

/// A person in one user's network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub user_id: String,
    pub english_name: Option<String>,
    pub hebrew_name: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub how_met: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Case-insensitive substring match against either name.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.english_name, &self.hebrew_name]
            .into_iter()
            .flatten()
            .any(|name| name.to_lowercase().contains(&needle))
    }
}

/// Insert payload for a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub user_id: String,
    pub english_name: Option<String>,
    pub hebrew_name: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub how_met: Option<String>,
    pub tags: Vec<String>,
}

impl NewContact {
    /// Build a contact from a parsed note.
    ///
    /// `how_met` records the introducer when one was named, otherwise the
    /// meeting context.
    #[must_use]
    pub fn from_parsed(user_id: &str, parsed: &ParsedNote) -> Self {
        let how_met = parsed.introduced_by.as_ref().map_or_else(
            || parsed.how_met.clone(),
            |name| Some(format!("Introduced by {name}")),
        );

        Self {
            user_id: user_id.to_string(),
            english_name: parsed.english_name.clone(),
            hebrew_name: parsed.hebrew_name.clone(),
            company: parsed.company.clone(),
            job_title: parsed.job_title.clone(),
            how_met,
            tags: parsed.tags.clone(),
        }
    }
}

/// Partial update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactUpdate {
    pub english_name: Option<String>,
    pub hebrew_name: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub how_met: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ContactUpdate {
    pub fn apply(self, contact: &mut Contact) {
        if let Some(v) = self.english_name {
            contact.english_name = Some(v);
        }
        if let Some(v) = self.hebrew_name {
            contact.hebrew_name = Some(v);
        }
        if let Some(v) = self.company {
            contact.company = Some(v);
        }
        if let Some(v) = self.job_title {
            contact.job_title = Some(v);
        }
        if let Some(v) = self.how_met {
            contact.how_met = Some(v);
        }
        if let Some(v) = self.tags {
            contact.tags = v;
        }
    }
}

/// A timestamped log entry attached to a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interaction {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub body: String,
    pub occurred_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewInteraction {
    pub contact_id: Uuid,
    pub body: String,
    /// Defaults to the creation date when absent.
    pub occurred_at: Option<NaiveDate>,
}

/// A directed relationship between two contacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub id: Uuid,
    pub source_contact_id: Uuid,
    pub target_contact_id: Uuid,
    pub relation_type: RelationType,
}

impl Edge {
    #[must_use]
    pub fn touches(&self, contact_id: &Uuid) -> bool {
        self.source_contact_id == *contact_id || self.target_contact_id == *contact_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewEdge {
    pub source_contact_id: Uuid,
    pub target_contact_id: Uuid,
    pub relation_type: RelationType,
}

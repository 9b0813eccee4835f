use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rule::FlagRule;

/// A named boolean feature toggle with optional targeting rules, as stored
/// in the flag store.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flag {
    pub id: Uuid,

    /// Owner of the flag; listing is scoped by this value.
    pub user_id: String,

    /// Unique across the store. Creation refuses a taken name and update
    /// looks the stored document up by it.
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,

    /// Kill switch: a disabled flag short-circuits evaluation.
    pub status: bool,

    /// Targeting rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<FlagRule>,
}

impl Flag {
    /// A new enabled flag with no rules, stamped with a fresh id and
    /// creation timestamps.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            name: name.into(),
            description: String::new(),
            created_on: now,
            updated_on: now,
            status: true,
            rules: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    pub fn with_rule(mut self, rule: FlagRule) -> Self {
        self.rules.push(rule);
        self
    }
}

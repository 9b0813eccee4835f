use serde::{Deserialize, Serialize};

use crate::rule::Condition;

/// A named group of conditions referenced by flag rules.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Reported in evaluation metadata when one of this segment's
    /// conditions decides the outcome.
    pub key: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Segment {
    /// The first condition reading the given context attribute, in declared
    /// order.
    pub(crate) fn condition_for(&self, context_key: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.reads(context_key))
    }

    /// The first datetime condition reading the given context attribute.
    /// This can differ from [Segment::condition_for] when a string condition
    /// for the same attribute is declared earlier.
    pub(crate) fn datetime_condition_for(&self, context_key: &str) -> Option<&Condition> {
        self.conditions
            .iter()
            .find(|c| c.reads(context_key) && c.is_datetime())
    }
}

use serde::{Deserialize, Serialize};

use crate::segment::Segment;
use crate::util::parse_timestamp;

/// A targeting rule attached to a flag.
///
/// Rules are evaluated in the order they appear on the flag; the first rule
/// whose segment carries a condition for the context attribute under scan
/// decides the outcome.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FlagRule {
    pub segment: Segment,
}

/// A single comparison test against one context attribute.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Identifier reported in evaluation metadata when this condition
    /// decides the outcome.
    pub key: String,
    /// Name of the context attribute this condition reads.
    pub context: String,
    #[serde(flatten)]
    pub test: ConditionTest,
    /// Comparison value; datetime conditions expect a timestamp here.
    pub value: String,
}

/// The comparison a condition applies, keyed by the declared condition type
/// so an operator can never be paired with the wrong kind of condition.
/// Documents that try (e.g. a `string` condition with a `before` operator)
/// fail to deserialize.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "conditionType", content = "operator", rename_all = "camelCase")]
pub enum ConditionTest {
    String(StringOperator),
    Datetime(DatetimeOperator),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StringOperator {
    Equals,
    NotEquals,
    Contains,
    StartsWith,
    EndsWith,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DatetimeOperator {
    Before,
    After,
    BeforeOrAt,
    AfterOrAt,
    Equals,
    NotEquals,
}

impl Condition {
    /// Whether this condition reads the given context attribute.
    pub fn reads(&self, context_key: &str) -> bool {
        self.context == context_key
    }

    pub fn is_datetime(&self) -> bool {
        matches!(self.test, ConditionTest::Datetime(_))
    }

    pub(crate) fn matches(&self, context_value: &str) -> bool {
        match self.test {
            ConditionTest::String(op) => op.matches(context_value, &self.value),
            ConditionTest::Datetime(op) => op.matches(context_value, &self.value),
        }
    }
}

impl StringOperator {
    pub(crate) fn matches(&self, lhs: &str, rhs: &str) -> bool {
        match self {
            StringOperator::Equals => lhs == rhs,
            StringOperator::NotEquals => lhs != rhs,
            StringOperator::Contains => lhs.contains(rhs),
            StringOperator::StartsWith => lhs.starts_with(rhs),
            StringOperator::EndsWith => lhs.ends_with(rhs),
        }
    }
}

impl DatetimeOperator {
    /// Both sides must parse as timestamps; anything else is a non-match.
    pub(crate) fn matches(&self, lhs: &str, rhs: &str) -> bool {
        match (parse_timestamp(lhs), parse_timestamp(rhs)) {
            (Some(l), Some(r)) => match self {
                DatetimeOperator::Before => l < r,
                DatetimeOperator::After => l > r,
                DatetimeOperator::BeforeOrAt => l <= r,
                DatetimeOperator::AfterOrAt => l >= r,
                DatetimeOperator::Equals => l == r,
                DatetimeOperator::NotEquals => l != r,
            },
            _ => false,
        }
    }
}

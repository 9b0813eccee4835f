use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use log::error;
use serde::Serialize;
use uuid::Uuid;

use crate::context::Context;
use crate::flag::Flag;
use crate::rule::DatetimeOperator;

/// Evaluate a feature flag against the supplied [Context].
///
/// The engine is pure apart from clock reads and response-id generation: it
/// performs no I/O, holds no state, and never mutates the flag or the
/// context. Every outcome path stamps the elapsed time, a fresh response id,
/// and the caller's correlation id onto the returned detail.
pub fn evaluate(flag: &Flag, context: &Context, correlation_id: &str) -> EvaluationDetail {
    let start = Instant::now();

    // Rule evaluation never escapes this boundary: failures degrade to a
    // generic reason code on an otherwise well-formed response.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| evaluate_rules(flag, context)))
        .unwrap_or_else(|_| {
            error!("evaluation of flag {} panicked", flag.name);
            Outcome::from_reason(Reason::GenericError, false)
        });

    EvaluationDetail {
        matched: outcome.matched,
        datetime_match: outcome.datetime_match,
        meta: outcome.meta,
        reason: outcome.reason,
        time: start.elapsed().as_millis() as u64,
        correlation_id: correlation_id.to_string(),
        response_id: Uuid::new_v4(),
    }
}

struct Outcome {
    matched: bool,
    datetime_match: bool,
    meta: MatchMeta,
    reason: Reason,
}

impl Outcome {
    fn from_reason(reason: Reason, matched: bool) -> Self {
        Self {
            matched,
            datetime_match: false,
            meta: MatchMeta::default(),
            reason,
        }
    }
}

fn evaluate_rules(flag: &Flag, context: &Context) -> Outcome {
    if flag.rules.is_empty() {
        // Nothing to match against: the flag's own status is the answer.
        // This precedes the kill-switch check, so a disabled flag with no
        // rules reports RuleNotFound.
        return Outcome::from_reason(Reason::RuleNotFound, flag.status);
    }

    if !flag.status {
        return Outcome::from_reason(Reason::FlagDisabled, false);
    }

    for (key, value) in context.iter() {
        for rule in &flag.rules {
            let condition = match rule.segment.condition_for(key) {
                Some(condition) => condition,
                None => continue,
            };

            // First rule with a condition for this attribute wins, whether
            // or not the comparison itself holds.
            let datetime_match = rule
                .segment
                .datetime_condition_for(key)
                .map(|c| DatetimeOperator::Before.matches(value, &c.value))
                .unwrap_or(false);

            return Outcome {
                matched: condition.matches(value),
                datetime_match,
                meta: MatchMeta {
                    segment: Some(rule.segment.key.clone()),
                    condition: Some(condition.key.clone()),
                },
                reason: Reason::FlagMatch,
            };
        }
    }

    Outcome::from_reason(Reason::NoMatchingCondition, false)
}

/// The result of one flag evaluation combined with diagnostic metadata
/// explaining how it was reached.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDetail {
    /// Whether the selected condition held for the context value.
    #[serde(rename = "match")]
    pub matched: bool,

    /// Secondary check, independent of the match outcome: true when the
    /// context value falls strictly before the value of the matched
    /// segment's first datetime condition for the same attribute.
    pub datetime_match: bool,

    pub meta: MatchMeta,
    pub reason: Reason,

    /// Elapsed evaluation time in milliseconds.
    pub time: u64,

    /// Caller-supplied identifier, echoed back unchanged.
    pub correlation_id: String,

    /// Freshly generated for every evaluation.
    pub response_id: Uuid,
}

/// Identifiers of the segment and condition that decided an evaluation,
/// when one was found.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MatchMeta {
    pub segment: Option<String>,
    pub condition: Option<String>,
}

/// Reason describes why an evaluation produced its match outcome. Failures
/// travel as reason codes on a normal response, never as errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// A rule condition was found for one of the context attributes; the
    /// match field carries the comparison result.
    FlagMatch,
    /// The flag is disabled and evaluation short-circuited.
    FlagDisabled,
    /// The flag carries no rules, so the match mirrors the flag status.
    RuleNotFound,
    /// No rule condition reads any of the supplied context attributes.
    NoMatchingCondition,
    /// Evaluation failed unexpectedly; check the log for details.
    GenericError,
}

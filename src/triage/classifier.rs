use std::collections::HashSet;

use crate::models::IssueRecord;
use crate::triage::labels::normalize_labels;
use crate::triage::rules::RuleTables;

/// Which classifications the caller is asking for. Both flags false means
/// "any open, non-excluded issue".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriageRequest {
    pub good_first_issue: bool,
    pub accepting_prs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Accept,
    Reject,
}

struct RuleCtx<'a> {
    labels: &'a HashSet<String>,
    request: TriageRequest,
    rules: &'a RuleTables,
}

type Predicate = fn(&RuleCtx) -> bool;

/// The precedence chain, evaluated top to bottom with first match winning.
/// The order is load-bearing: exclusions dominate everything, good-first
/// signals are checked before accepting-PRs signals, and each requested mode
/// rejects on fallthrough. Reordering entries changes classification.
const PRECEDENCE: &[(&str, Predicate, Outcome)] = &[
    (
        "excluded label",
        |ctx| ctx.rules.not_open.matches_exact(ctx.labels),
        Outcome::Reject,
    ),
    (
        "excluded trigger",
        |ctx| ctx.rules.not_open.matches_trigger(ctx.labels),
        Outcome::Reject,
    ),
    (
        "good-first trigger",
        |ctx| {
            (ctx.request.good_first_issue || ctx.request.accepting_prs)
                && ctx.rules.good_first_issue.matches_trigger(ctx.labels)
        },
        Outcome::Accept,
    ),
    (
        "good-first label",
        |ctx| {
            (ctx.request.good_first_issue || ctx.request.accepting_prs)
                && ctx.rules.good_first_issue.matches_exact(ctx.labels)
        },
        Outcome::Accept,
    ),
    (
        "good-first fallthrough",
        |ctx| ctx.request.good_first_issue,
        Outcome::Reject,
    ),
    (
        "accepting-prs trigger",
        |ctx| ctx.request.accepting_prs && ctx.rules.accepting_prs.matches_trigger(ctx.labels),
        Outcome::Accept,
    ),
    (
        "accepting-prs label",
        |ctx| ctx.request.accepting_prs && ctx.rules.accepting_prs.matches_exact(ctx.labels),
        Outcome::Accept,
    ),
    (
        "accepting-prs fallthrough",
        |ctx| ctx.request.accepting_prs,
        Outcome::Reject,
    ),
    ("unrestricted", |_| true, Outcome::Accept),
];

/// Decides accept/reject for a single record against an injected label
/// vocabulary. Pure: no state beyond the read-only tables, no errors for
/// well-formed input.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleTables,
}

impl Classifier {
    pub fn new(rules: RuleTables) -> Self {
        Self { rules }
    }

    pub fn classify(&self, record: &IssueRecord, request: TriageRequest) -> bool {
        self.decide(record, request).1 == Outcome::Accept
    }

    /// Name of the precedence rule that decided this record. Useful for
    /// verbose output and for pinning each rule down in tests.
    pub fn explain(&self, record: &IssueRecord, request: TriageRequest) -> &'static str {
        self.decide(record, request).0
    }

    fn decide(&self, record: &IssueRecord, request: TriageRequest) -> (&'static str, Outcome) {
        let labels = normalize_labels(&record.labels);
        let ctx = RuleCtx {
            labels: &labels,
            request,
            rules: &self.rules,
        };
        for &(name, applies, outcome) in PRECEDENCE {
            if applies(&ctx) {
                return (name, outcome);
            }
        }
        // The final "unrestricted" entry always applies.
        ("unrestricted", Outcome::Accept)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RuleTables::default())
    }
}

//! Round-trip law checking over caller-supplied samples.
//!
//! The law: on the subset where `forward(a)` yields `Some(b)`, `backward(b)`
//! must yield `Some(a)`; symmetrically for the other direction. Samples on
//! which a direction is absent are not violations: the law only binds where
//! a direction succeeds.
//!
//! Checking walks every sample, runs the relevant leg of the round trip,
//! and collects a violation per broken point. The report is plain data:
//! the caller decides whether to fail a test, log, or ignore.

use crate::witness::witness_id;
use partiso_kernel::PartialIso;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the round-trip law was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Law {
    /// `forward(a) == Some(b)` must imply `backward(b) == Some(a)`.
    ForwardBackward,

    /// `backward(b) == Some(a)` must imply `forward(a) == Some(b)`.
    BackwardForward,
}

impl Law {
    /// Stable law reference; part of the witness-id key.
    pub fn law_ref(self) -> &'static str {
        match self {
            Self::ForwardBackward => "roundtrip/forward-backward",
            Self::BackwardForward => "roundtrip/backward-forward",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.law_ref())
    }
}

/// How the law broke on a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClass {
    /// The return leg was absent where the law requires presence.
    Absent,

    /// The return leg produced a different value than the sample.
    Mismatch,
}

impl FailureClass {
    fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Mismatch => "mismatch",
        }
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One law violation, witnessed on a concrete sample.
///
/// Doubles as an error type so a harness can propagate the first violation
/// out of a `Result`-returning test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{law} violated ({class}) on {input}: {message}")]
pub struct LawViolation {
    /// Deterministic witness id; identical semantic failures yield
    /// identical ids across runs.
    pub witness_id: String,

    /// Which half of the law broke.
    pub law: Law,

    /// Failure classification.
    pub class: FailureClass,

    /// Debug rendering of the offending sample.
    pub input: String,

    /// Human-readable description. Not part of the witness id.
    pub message: String,
}

impl LawViolation {
    fn new(law: Law, class: FailureClass, input: String, message: String) -> Self {
        let witness_id = witness_id(law.law_ref(), class.as_str(), &input);
        Self {
            witness_id,
            law,
            class,
            input,
            message,
        }
    }
}

/// Outcome of a law check over a sample set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawReport {
    /// Total samples walked, both directions.
    pub samples_checked: usize,

    /// Every point where the law broke, in sample order.
    pub violations: Vec<LawViolation>,
}

impl LawReport {
    /// True when no violation was found.
    pub fn holds(&self) -> bool {
        self.violations.is_empty()
    }

    /// `Ok(())` when the law held, otherwise the first violation.
    pub fn into_result(mut self) -> Result<(), LawViolation> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.violations.remove(0))
        }
    }
}

/// Check the round-trip law on `iso` over the given samples.
///
/// For each domain sample `a` with `forward(a) == Some(b)`, requires
/// `backward(b) == Some(a)`; for each wire sample `b` with
/// `backward(b) == Some(a)`, requires `forward(a) == Some(b)`. Samples on
/// which the relevant direction is absent are counted but cannot violate.
pub fn check_round_trip<A, B>(
    iso: &PartialIso<A, B>,
    domain_samples: &[A],
    wire_samples: &[B],
) -> LawReport
where
    A: PartialEq + fmt::Debug,
    B: PartialEq + fmt::Debug,
{
    let mut violations = Vec::new();

    for a in domain_samples {
        let Some(b) = iso.forward(a) else { continue };
        match iso.backward(&b) {
            Some(back) if back == *a => {}
            Some(back) => violations.push(LawViolation::new(
                Law::ForwardBackward,
                FailureClass::Mismatch,
                format!("{a:?}"),
                format!("backward(forward({a:?})) == Some({back:?}), expected Some({a:?})"),
            )),
            None => violations.push(LawViolation::new(
                Law::ForwardBackward,
                FailureClass::Absent,
                format!("{a:?}"),
                format!("backward(forward({a:?})) is absent"),
            )),
        }
    }

    for b in wire_samples {
        let Some(a) = iso.backward(b) else { continue };
        match iso.forward(&a) {
            Some(forth) if forth == *b => {}
            Some(forth) => violations.push(LawViolation::new(
                Law::BackwardForward,
                FailureClass::Mismatch,
                format!("{b:?}"),
                format!("forward(backward({b:?})) == Some({forth:?}), expected Some({b:?})"),
            )),
            None => violations.push(LawViolation::new(
                Law::BackwardForward,
                FailureClass::Absent,
                format!("{b:?}"),
                format!("forward(backward({b:?})) is absent"),
            )),
        }
    }

    LawReport {
        samples_checked: domain_samples.len() + wire_samples.len(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Law-abiding: shift by three, absent on overflow.
    fn lawful() -> PartialIso<i64, i64> {
        PartialIso::new(
            |n: &i64| n.checked_add(3),
            |n: &i64| n.checked_sub(3),
        )
    }

    /// Broken: the directions are the same function, not inverses.
    fn skewed() -> PartialIso<i64, i64> {
        PartialIso::new(|n: &i64| Some(n + 1), |n: &i64| Some(n + 1))
    }

    /// Broken: backward never answers.
    fn mute() -> PartialIso<i64, i64> {
        PartialIso::new(|n: &i64| Some(*n), |_: &i64| None)
    }

    #[test]
    fn lawful_iso_yields_empty_report() {
        let report = check_round_trip(&lawful(), &[-3, 0, 7, i64::MAX], &[-3, 0, 7, i64::MIN]);
        assert!(report.holds());
        assert_eq!(report.samples_checked, 8);
        assert_eq!(report.clone().into_result(), Ok(()));
    }

    #[test]
    fn skewed_iso_violates_both_directions() {
        let report = check_round_trip(&skewed(), &[1], &[5]);
        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.violations[0].law, Law::ForwardBackward);
        assert_eq!(report.violations[0].class, FailureClass::Mismatch);
        assert_eq!(report.violations[0].input, "1");
        assert_eq!(report.violations[1].law, Law::BackwardForward);
        assert_eq!(report.violations[1].class, FailureClass::Mismatch);
        assert_eq!(report.violations[1].input, "5");
    }

    #[test]
    fn mute_backward_is_an_absent_violation() {
        let report = check_round_trip(&mute(), &[9], &[9]);
        // the wire sample cannot violate: backward never succeeds there
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].law, Law::ForwardBackward);
        assert_eq!(report.violations[0].class, FailureClass::Absent);
    }

    #[test]
    fn absent_samples_are_counted_but_never_violate() {
        let report = check_round_trip(&lawful(), &[i64::MAX], &[i64::MIN]);
        assert!(report.holds());
        assert_eq!(report.samples_checked, 2);
    }

    #[test]
    fn witness_ids_are_stable_across_runs() {
        let first = check_round_trip(&skewed(), &[1, 2], &[]);
        let second = check_round_trip(&skewed(), &[1, 2], &[]);
        assert_eq!(first, second);
        // distinct samples witness distinct failures
        assert_ne!(first.violations[0].witness_id, first.violations[1].witness_id);
    }

    #[test]
    fn into_result_surfaces_the_first_violation() {
        let err = check_round_trip(&skewed(), &[1], &[5])
            .into_result()
            .expect_err("skewed breaks the law");
        assert_eq!(err.law, Law::ForwardBackward);
        assert_eq!(err.input, "1");
        // the violation renders as an error
        let rendered = err.to_string();
        assert!(rendered.contains("roundtrip/forward-backward"));
        assert!(rendered.contains("mismatch"));
    }

    #[test]
    fn report_serializes_round_trip() {
        let report = check_round_trip(&skewed(), &[1], &[]);
        let value = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(value["samplesChecked"], 1);
        assert_eq!(value["violations"][0]["law"], "forward_backward");
        assert_eq!(value["violations"][0]["class"], "mismatch");
        let back: LawReport = serde_json::from_value(value).expect("report deserializes");
        assert_eq!(back, report);
    }
}

//! Readiness scoring: capped weighted deduction from 100.

use readygate_types::{Severity, Summary};

pub const WEIGHT_HIGH: u32 = 20;
pub const WEIGHT_MEDIUM: u32 = 10;
pub const WEIGHT_LOW: u32 = 5;

/// Deductions past this point stop lowering the score, so a run with any
/// findings at all bottoms out at 20 rather than collapsing to 0.
pub const MAX_DEDUCTION: u32 = 80;

pub fn severity_weight(severity: Severity) -> u32 {
    match severity {
        Severity::High => WEIGHT_HIGH,
        Severity::Medium => WEIGHT_MEDIUM,
        Severity::Low => WEIGHT_LOW,
    }
}

/// `score = clamp(100 - min(raw_deduction, 80), 0, 100)`.
///
/// The score depends on findings only through their severity counts.
pub fn readiness_score(summary: &Summary) -> u8 {
    let raw_deduction = WEIGHT_HIGH * summary.high
        + WEIGHT_MEDIUM * summary.medium
        + WEIGHT_LOW * summary.low;
    let deduction = raw_deduction.min(MAX_DEDUCTION);
    100u32.saturating_sub(deduction).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(high: u32, medium: u32, low: u32) -> Summary {
        Summary { high, medium, low }
    }

    #[test]
    fn no_findings_scores_100() {
        assert_eq!(readiness_score(&Summary::default()), 100);
    }

    #[test]
    fn weights_are_20_10_5() {
        assert_eq!(readiness_score(&summary(1, 0, 0)), 80);
        assert_eq!(readiness_score(&summary(0, 1, 0)), 90);
        assert_eq!(readiness_score(&summary(0, 0, 1)), 95);
        assert_eq!(readiness_score(&summary(1, 1, 1)), 65);
    }

    #[test]
    fn deduction_caps_at_80() {
        assert_eq!(readiness_score(&summary(4, 0, 0)), 20);
        assert_eq!(readiness_score(&summary(100, 50, 25)), 20);
        // Exactly at the cap.
        assert_eq!(readiness_score(&summary(0, 8, 0)), 20);
        // One step below it.
        assert_eq!(readiness_score(&summary(0, 7, 1)), 25);
    }
}

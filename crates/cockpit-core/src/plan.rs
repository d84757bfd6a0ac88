//! Pure placement-verification logic.
//!
//! The platform crate positions a window, waits, re-reads the rect, and
//! asks [`next_step`] what to do. Keeping the decision here, free of any
//! OS calls, makes the retry behavior unit-testable.

use crate::Rect;

/// Parameters for the place-and-verify loop, taken from `[apply]` config.
#[derive(Debug, Clone, Copy)]
pub struct VerifyPolicy {
    /// Delay in milliseconds between placement attempts.
    pub poll_ms: u64,
    /// Maximum placement attempts per window.
    pub attempts: u32,
    /// Accepted per-edge error in pixels.
    pub tolerance_px: i32,
    /// Jog the size by one pixel on the penultimate attempt.
    pub nudge: bool,
}

/// The next action after a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The observed rect matches the target within tolerance.
    Done,
    /// Place the window at `rect` and verify again.
    Retry { rect: Rect },
    /// Attempts are exhausted; report the window as drifted.
    GiveUp,
}

/// Decides the next step after `attempt` placements of `target`.
///
/// Most windows land on the first attempt. The ones that don't are
/// usually enforcing a minimum size or recomputing their client area
/// late; for those, the penultimate attempt places a rect one pixel
/// larger (the "nudge"), and the final attempt returns to the exact
/// target. A size that actually changes forces stubborn apps to drop a
/// latched stale size.
pub fn next_step(target: &Rect, observed: &Rect, attempt: u32, policy: &VerifyPolicy) -> Step {
    if observed.approx_eq(target, policy.tolerance_px) {
        return Step::Done;
    }
    if attempt >= policy.attempts {
        return Step::GiveUp;
    }
    if policy.nudge && policy.attempts >= 2 && attempt + 2 == policy.attempts {
        return Step::Retry {
            rect: Rect::new(target.x, target.y, target.width + 1, target.height + 1),
        };
    }
    Step::Retry { rect: *target }
}

/// Result of applying one saved record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The window reached the target rect.
    Placed { attempts: u32 },
    /// Attempts ran out; `got` is the last observed rect.
    Drifted { got: Rect },
    /// No live window matched the record.
    NotFound,
}

/// Aggregated outcomes for one apply pass, in profile order.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub outcomes: Vec<(String, ApplyOutcome)>,
}

impl ApplyReport {
    pub fn push(&mut self, title: impl Into<String>, outcome: ApplyOutcome) {
        self.outcomes.push((title.into(), outcome));
    }

    pub fn placed(&self) -> usize {
        self.count(|o| matches!(o, ApplyOutcome::Placed { .. }))
    }

    pub fn drifted(&self) -> usize {
        self.count(|o| matches!(o, ApplyOutcome::Drifted { .. }))
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, ApplyOutcome::NotFound))
    }

    /// Returns whether every record was placed successfully.
    pub fn all_placed(&self) -> bool {
        self.placed() == self.outcomes.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} placed, {} drifted, {} not found",
            self.placed(),
            self.drifted(),
            self.not_found()
        )
    }

    fn count(&self, pred: impl Fn(&ApplyOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(attempts: u32, nudge: bool) -> VerifyPolicy {
        VerifyPolicy {
            poll_ms: 250,
            attempts,
            tolerance_px: 1,
            nudge,
        }
    }

    #[test]
    fn matching_rect_is_done_immediately() {
        // Arrange
        let target = Rect::new(0, 0, 800, 600);
        let observed = Rect::new(0, 0, 799, 600);

        // Act / Assert: one pixel off is within tolerance
        assert_eq!(next_step(&target, &observed, 1, &policy(8, true)), Step::Done);
    }

    #[test]
    fn mismatch_retries_at_target() {
        // Arrange
        let target = Rect::new(0, 0, 800, 600);
        let observed = Rect::new(0, 0, 820, 600);

        // Act / Assert
        assert_eq!(
            next_step(&target, &observed, 1, &policy(8, true)),
            Step::Retry { rect: target }
        );
    }

    #[test]
    fn exhausted_attempts_give_up() {
        // Arrange
        let target = Rect::new(0, 0, 800, 600);
        let observed = Rect::new(0, 0, 820, 600);

        // Act / Assert
        assert_eq!(next_step(&target, &observed, 8, &policy(8, true)), Step::GiveUp);
    }

    #[test]
    fn penultimate_attempt_nudges_then_returns_to_target() {
        // Arrange
        let target = Rect::new(10, 10, 800, 600);
        let observed = Rect::new(10, 10, 820, 600);
        let policy = policy(8, true);

        // Act
        let nudged = next_step(&target, &observed, 6, &policy);
        let last = next_step(&target, &observed, 7, &policy);

        // Assert: placement 7 is one pixel larger, placement 8 is exact
        assert_eq!(
            nudged,
            Step::Retry {
                rect: Rect::new(10, 10, 801, 601)
            }
        );
        assert_eq!(last, Step::Retry { rect: target });
    }

    #[test]
    fn nudge_disabled_always_retries_at_target() {
        // Arrange
        let target = Rect::new(0, 0, 800, 600);
        let observed = Rect::new(0, 0, 820, 600);

        // Act / Assert
        assert_eq!(
            next_step(&target, &observed, 6, &policy(8, false)),
            Step::Retry { rect: target }
        );
    }

    #[test]
    fn single_attempt_policy_never_nudges() {
        // Arrange
        let target = Rect::new(0, 0, 800, 600);
        let observed = Rect::new(0, 0, 820, 600);

        // Act / Assert
        assert_eq!(next_step(&target, &observed, 1, &policy(1, true)), Step::GiveUp);
    }

    #[test]
    fn report_counts_and_summary() {
        // Arrange
        let mut report = ApplyReport::default();
        report.push("PFD", ApplyOutcome::Placed { attempts: 1 });
        report.push("ND", ApplyOutcome::Placed { attempts: 3 });
        report.push(
            "EICAS",
            ApplyOutcome::Drifted {
                got: Rect::new(0, 0, 1, 1),
            },
        );
        report.push("Radio", ApplyOutcome::NotFound);

        // Assert
        assert_eq!(report.placed(), 2);
        assert_eq!(report.drifted(), 1);
        assert_eq!(report.not_found(), 1);
        assert!(!report.all_placed());
        assert_eq!(report.summary(), "2 placed, 1 drifted, 1 not found");
    }
}

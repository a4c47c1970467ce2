use std::time::{Duration, Instant};

use crate::app::navigation::{Direction, Step};

/// Horizontal offsets are fractions of the card width; alphas are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub incoming_offset: f32,
    pub outgoing_offset: f32,
    pub incoming_alpha: f32,
    pub outgoing_alpha: f32,
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Forward slides the new card in from the right and the old one out to the
/// left. Backward mirrors it.
pub fn sample(direction: Direction, progress: f32) -> TransitionFrame {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        1.0
    };
    let t = ease_out_cubic(progress);
    let sign = match direction {
        Direction::Forward => 1.0,
        Direction::Backward => -1.0,
    };

    TransitionFrame {
        incoming_offset: sign * (1.0 - t),
        outgoing_offset: -sign * t,
        incoming_alpha: t,
        outgoing_alpha: 1.0 - t,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ActiveTransition {
    pub step: Step,
    started: Instant,
    duration: Duration,
}

impl ActiveTransition {
    pub fn new(step: Step, duration: Duration, started: Instant) -> Self {
        Self {
            step,
            started,
            duration,
        }
    }

    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn frame(&self, now: Instant) -> TransitionFrame {
        sample(self.step.direction, self.progress(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_step() -> Step {
        Step {
            from: 0,
            to: 1,
            direction: Direction::Forward,
        }
    }

    #[test]
    fn forward_starts_right_and_ends_centered() {
        let start = sample(Direction::Forward, 0.0);
        assert_eq!(start.incoming_offset, 1.0);
        assert_eq!(start.outgoing_offset, 0.0);
        assert_eq!(start.incoming_alpha, 0.0);
        assert_eq!(start.outgoing_alpha, 1.0);

        let end = sample(Direction::Forward, 1.0);
        assert_eq!(end.incoming_offset, 0.0);
        assert_eq!(end.outgoing_offset, -1.0);
        assert_eq!(end.incoming_alpha, 1.0);
        assert_eq!(end.outgoing_alpha, 0.0);
    }

    #[test]
    fn backward_mirrors_forward() {
        for progress in [0.0, 0.25, 0.5, 0.9] {
            let forward = sample(Direction::Forward, progress);
            let backward = sample(Direction::Backward, progress);
            assert_eq!(backward.incoming_offset, -forward.incoming_offset);
            assert_eq!(backward.outgoing_offset, -forward.outgoing_offset);
            assert_eq!(backward.incoming_alpha, forward.incoming_alpha);
        }
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(sample(Direction::Forward, -3.0), sample(Direction::Forward, 0.0));
        assert_eq!(sample(Direction::Forward, 7.0), sample(Direction::Forward, 1.0));
        assert_eq!(
            sample(Direction::Forward, f32::NAN),
            sample(Direction::Forward, 1.0)
        );
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = ease_out_cubic(0.0);
        for step in 1..=20 {
            let value = ease_out_cubic(step as f32 / 20.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn active_transition_tracks_elapsed_time() {
        let started = Instant::now();
        let transition = ActiveTransition::new(forward_step(), Duration::from_millis(200), started);

        assert_eq!(transition.progress(started), 0.0);
        let halfway = transition.progress(started + Duration::from_millis(100));
        assert!((halfway - 0.5).abs() < 1e-3);
        assert!(!transition.is_finished(started + Duration::from_millis(100)));
        assert!(transition.is_finished(started + Duration::from_millis(250)));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let started = Instant::now();
        let transition = ActiveTransition::new(forward_step(), Duration::ZERO, started);
        assert!(transition.is_finished(started));
        assert_eq!(transition.frame(started).incoming_offset, 0.0);
    }
}

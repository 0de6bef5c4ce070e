//! Speed signal and distance math for the decorative runner.

use std::time::Duration;

use crate::quiz::QuizSession;

pub const BASE_SPEED: f64 = 1.0;
pub const SPEED_MULTIPLIER: f64 = 0.5;

/// Above this speed the runner switches to its sprint animation.
pub const SPRINT_THRESHOLD: f64 = 2.0;

/// Default interval between distance updates.
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Runner speed for a running count of correct answers.
///
/// Never decreases as `correct_answers` grows.
#[must_use]
pub fn speed_for(correct_answers: u32) -> f64 {
    BASE_SPEED + f64::from(correct_answers) * SPEED_MULTIPLIER
}

/// Distance covered during one tick of length `period` at `speed`.
#[must_use]
pub fn distance_step(speed: f64, period: Duration) -> f64 {
    speed * period.as_secs_f64()
}

/// Share of correct answers with one decimal of precision, 0 for no questions.
#[must_use]
pub fn running_accuracy(correct_answers: u32, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    let raw = f64::from(correct_answers) / total_questions as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerVariant {
    Jog,
    Sprint,
}

impl RunnerVariant {
    #[must_use]
    pub fn for_speed(speed: f64) -> Self {
        if speed > SPRINT_THRESHOLD {
            Self::Sprint
        } else {
            Self::Jog
        }
    }
}

/// What a runner renderer consumes: how fast, and whether to move at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerSignal {
    pub speed: f64,
    pub active: bool,
}

impl RunnerSignal {
    #[must_use]
    pub fn new(correct_answers: u32, active: bool) -> Self {
        Self {
            speed: speed_for(correct_answers),
            active,
        }
    }

    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        Self::new(session.score(), session.is_active())
    }

    #[must_use]
    pub fn variant(&self) -> RunnerVariant {
        RunnerVariant::for_speed(self.speed)
    }
}

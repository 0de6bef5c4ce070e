use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use trivia_core::runner::{DEFAULT_TICK, RunnerSignal, distance_step};

/// Periodic task that accumulates runner distance while the game is active.
///
/// The task only exists while active: deactivating or dropping the ticker
/// aborts it. Distance is kept across pauses and published on a watch channel.
pub struct RunnerTicker {
    period: Duration,
    speed: watch::Sender<f64>,
    distance: Arc<watch::Sender<f64>>,
    task: Option<JoinHandle<()>>,
}

impl RunnerTicker {
    /// An inactive ticker; call `set_active(true)` to start moving.
    #[must_use]
    pub fn new(period: Duration, speed: f64) -> Self {
        let (speed, _) = watch::channel(speed);
        let (distance, _) = watch::channel(0.0);
        Self {
            period,
            speed,
            distance: Arc::new(distance),
            task: None,
        }
    }

    /// Update speed and activity from a runner signal.
    ///
    /// Must be called from within a tokio runtime when it activates the ticker.
    pub fn apply(&mut self, signal: RunnerSignal) {
        self.set_speed(signal.speed);
        self.set_active(signal.active);
    }

    /// New speed takes effect on the next tick.
    pub fn set_speed(&self, speed: f64) {
        self.speed.send_if_modified(|current| {
            if (*current - speed).abs() > f64::EPSILON {
                *current = speed;
                true
            } else {
                false
            }
        });
    }

    pub fn set_active(&mut self, active: bool) {
        match (active, self.task.is_some()) {
            (true, false) => {
                self.task = Some(self.spawn());
                tracing::debug!(period_ms = self.period.as_millis(), "runner ticker started");
            }
            (false, true) => self.stop(),
            _ => {}
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        *self.speed.borrow()
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        *self.distance.borrow()
    }

    /// Receiver that observes every distance update.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.distance.subscribe()
    }

    /// Set the accumulated distance back to zero.
    pub fn reset(&self) {
        self.distance.send_replace(0.0);
    }

    fn spawn(&self) -> JoinHandle<()> {
        let period = self.period;
        let speed = self.speed.subscribe();
        let distance = Arc::clone(&self.distance);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let step = distance_step(*speed.borrow(), period);
                distance.send_modify(|d| *d += step);
            }
        })
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("runner ticker stopped");
        }
    }
}

impl Default for RunnerTicker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK, trivia_core::runner::BASE_SPEED)
    }
}

impl Drop for RunnerTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

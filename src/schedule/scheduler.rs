use std::fmt;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::compose::composer::{Composition, FrameComposer};
use crate::data::layout::StationLayout;
use crate::data::store::RecordStore;
use crate::foundation::core::Timestamp;
use crate::foundation::error::{AirglyphError, AirglyphResult};
use crate::render::backend::{Renderer, render_composition};
use crate::schedule::pacer::{CancelToken, Pacer};

/// Scheduler lifecycle. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// Constructed, not started.
    Idle,
    /// Ticking.
    Running,
    /// Finished; no further ticks.
    Stopped,
}

impl fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopped => "stopped",
        })
    }
}

/// Why [`Scheduler::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The cancel token fired.
    Cancelled,
    /// The requested number of ticks was reached.
    TickLimit,
}

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames handed to the renderer.
    pub ticks: u64,
    /// Why the run ended.
    pub reason: StopReason,
}

/// Loops over the store's distinct timestamps, one composition per tick.
///
/// The step counter is the only mutable state; frame `k` shows timestamp
/// `k mod distinct_timestamps`, so playback wraps around indefinitely.
pub struct Scheduler {
    store: RecordStore,
    layout: StationLayout,
    composer: FrameComposer,
    interval: Duration,
    rng: StdRng,
    step: u64,
    state: SchedulerState,
}

impl Scheduler {
    /// Idle scheduler. `seed` drives every random draw of the synthesizer.
    pub fn new(
        store: RecordStore,
        layout: StationLayout,
        composer: FrameComposer,
        interval: Duration,
        seed: u64,
    ) -> Self {
        Self {
            store,
            layout,
            composer,
            interval,
            rng: StdRng::seed_from_u64(seed),
            step: 0,
            state: SchedulerState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks completed so far.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Underlying records.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Idle → Running. An empty store moves straight to `Stopped` and fails.
    pub fn start(&mut self) -> AirglyphResult<()> {
        if self.state != SchedulerState::Idle {
            return Err(AirglyphError::scheduler(format!(
                "start requires an idle scheduler (state: {})",
                self.state
            )));
        }
        if self.store.is_empty() {
            self.state = SchedulerState::Stopped;
            return Err(AirglyphError::scheduler(
                "record store is empty, nothing to animate",
            ));
        }

        let missing = self.layout.missing_stations(&self.store);
        if !missing.is_empty() {
            if self.composer.variant().station_markers() {
                tracing::warn!(
                    stations = ?missing,
                    "stations without layout entry will not get markers"
                );
            } else {
                tracing::debug!(stations = ?missing, "stations without layout entry");
            }
        }

        self.state = SchedulerState::Running;
        tracing::info!(
            records = self.store.len(),
            frames = self.store.distinct_timestamps(),
            interval_ms = self.interval.as_millis() as u64,
            variant = ?self.composer.variant(),
            "animation started"
        );
        Ok(())
    }

    /// Timestamp the next tick will show. `None` for an empty store.
    pub fn reference_timestamp(&self) -> Option<Timestamp> {
        let n = self.store.distinct_timestamps() as u64;
        if n == 0 {
            return None;
        }
        self.store.timestamp_at((self.step % n) as usize)
    }

    /// Jump the step counter; the next tick shows timestamp `step mod distinct_timestamps`.
    pub fn seek(&mut self, step: u64) {
        self.step = step;
    }

    /// Compose the next frame without rendering or advancing.
    pub fn preview(&mut self) -> Option<Composition> {
        let ts = self.reference_timestamp()?;
        Some(
            self.composer
                .compose(ts, &self.store, &self.layout, &mut self.rng),
        )
    }

    /// One Running iteration: compose, render, advance. A renderer error stops the scheduler,
    /// releases the renderer and is returned.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> AirglyphResult<Timestamp> {
        if self.state != SchedulerState::Running {
            return Err(AirglyphError::scheduler(format!(
                "tick requires a running scheduler (state: {})",
                self.state
            )));
        }
        let Some(ts) = self.reference_timestamp() else {
            return Err(AirglyphError::scheduler("no timestamps to show"));
        };

        let comp = self
            .composer
            .compose(ts, &self.store, &self.layout, &mut self.rng);
        if let Err(e) = render_composition(renderer, &comp) {
            tracing::error!(step = self.step, error = %e, "renderer failed, stopping");
            self.state = SchedulerState::Stopped;
            if let Err(release_err) = renderer.release() {
                tracing::warn!(error = %release_err, "renderer release failed");
            }
            return Err(e);
        }

        self.step += 1;
        Ok(ts)
    }

    /// Running → Stopped, releasing the renderer. No-op when already stopped.
    pub fn stop<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> AirglyphResult<()> {
        if self.state == SchedulerState::Stopped {
            return Ok(());
        }
        self.state = SchedulerState::Stopped;
        tracing::info!(ticks = self.step, "animation stopped");
        renderer.release()
    }

    /// Start if needed, then tick until cancelled or `max_ticks` frames were shown.
    ///
    /// Cancellation is checked once per tick, after pacing.
    pub fn run<R, P>(
        &mut self,
        renderer: &mut R,
        cancel: &CancelToken,
        pacer: &mut P,
        max_ticks: Option<u64>,
    ) -> AirglyphResult<RunSummary>
    where
        R: Renderer + ?Sized,
        P: Pacer + ?Sized,
    {
        if self.state == SchedulerState::Idle {
            self.start()?;
        }

        let mut ticks = 0u64;
        let reason = loop {
            if max_ticks.is_some_and(|m| ticks >= m) {
                break StopReason::TickLimit;
            }
            if ticks > 0 {
                pacer.pace(self.interval, cancel);
            }
            if cancel.is_cancelled() {
                break StopReason::Cancelled;
            }
            let ts = self.tick(renderer)?;
            tracing::debug!(tick = ticks, %ts, "frame shown");
            ticks += 1;
        };

        self.stop(renderer)?;
        Ok(RunSummary { ticks, reason })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;

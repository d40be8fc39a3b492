//! Frame pacing.
//!
//! The pacer is reactive: it measures how long the previous frame took and
//! asks the host to wait only for whatever is left of the frame budget. A frame
//! that overruns its budget gets a zero delay; lost time is never made up.

use std::collections::VecDeque;
use std::fmt::Display;
use std::time::{Duration, Instant};

const STATS_WINDOW: usize = 120;

/// `max(0, budget - frame_time)`.
pub fn compute_delay(budget: Duration, frame_time: Duration) -> Duration {
    budget.saturating_sub(frame_time)
}

/// Time allotted to one frame at `target_fps`.
pub fn frame_budget(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
}

#[derive(Debug, Clone)]
pub struct FramePacer {
    budget: Duration,
    last_frame: Instant,
    frame_time: Duration,
    delay: Duration,
    fps: f32,
    stats: FrameStats,
}

impl FramePacer {
    /// `now` seeds the last-frame timestamp so the first measured frame is short.
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let budget = frame_budget(target_fps);
        Self {
            budget,
            last_frame: now,
            frame_time: Duration::ZERO,
            delay: budget,
            fps: 0.0,
            stats: FrameStats::default(),
        }
    }

    /// Record a frame finishing at `now` and return the delay before the next one.
    pub fn tick(&mut self, now: Instant) -> Duration {
        self.frame_time = now.saturating_duration_since(self.last_frame);
        self.delay = compute_delay(self.budget, self.frame_time);
        self.last_frame = now;

        let period = (self.delay + self.frame_time).as_secs_f32();
        self.fps = if period > 0.0 {
            1.0 / period
        } else {
            f32::INFINITY
        };
        self.stats.push(self.frame_time);
        self.delay
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn last_frame(&self) -> Instant {
        self.last_frame
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Delay computed by the latest tick, or the full budget before the first one.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Estimate of the next tick period as a rate. Diagnostics only.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

impl Display for FramePacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FPS: {:.2} | {}", self.fps, self.stats)
    }
}

/// Rolling window over the most recent frame times, in milliseconds.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    frame_times: VecDeque<f32>,
}

impl FrameStats {
    pub fn push(&mut self, frame_time: Duration) {
        if self.frame_times.len() == STATS_WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time.as_secs_f32() * 1000.0);
    }

    pub fn len(&self) -> usize {
        self.frame_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame_times.is_empty()
    }

    pub fn average_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32
    }

    pub fn min_ms(&self) -> f32 {
        self.frame_times
            .iter()
            .copied()
            .reduce(f32::min)
            .unwrap_or(0.0)
    }

    pub fn max_ms(&self) -> f32 {
        self.frame_times
            .iter()
            .copied()
            .reduce(f32::max)
            .unwrap_or(0.0)
    }
}

impl Display for FrameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Avg: {:.2}ms | Min: {:.2}ms | Max: {:.2}ms",
            self.average_ms(),
            self.min_ms(),
            self.max_ms()
        )
    }
}

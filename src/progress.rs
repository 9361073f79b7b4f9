//! Loading presenter shown while the webhook call is outstanding
//!
//! Purely cosmetic: it cycles through fixed status messages and fills a
//! progress bar on its own clock, independent of the real request. Progress
//! reaching 100 means nothing; the presenter is simply dropped once the
//! request settles, which stops both timers.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// One status message of the loading animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingStep {
    pub icon: &'static str,
    pub message: &'static str,
    /// How long the message stays before the next one
    pub duration: Duration,
}

pub const LOADING_STEPS: [LoadingStep; 7] = [
    LoadingStep {
        icon: "🌍",
        message: "Analyzing your destination...",
        duration: Duration::from_millis(3000),
    },
    LoadingStep {
        icon: "📍",
        message: "Crafting your perfect itinerary...",
        duration: Duration::from_millis(3000),
    },
    LoadingStep {
        icon: "✈️",
        message: "Finding best activities...",
        duration: Duration::from_millis(3000),
    },
    LoadingStep {
        icon: "🍽️",
        message: "Selecting amazing restaurants...",
        duration: Duration::from_millis(3000),
    },
    LoadingStep {
        icon: "☀️",
        message: "Checking weather forecast...",
        duration: Duration::from_millis(3000),
    },
    LoadingStep {
        icon: "💰",
        message: "Calculating budget...",
        duration: Duration::from_millis(3000),
    },
    LoadingStep {
        icon: "✨",
        message: "Finalizing your dream trip...",
        duration: Duration::from_millis(2000),
    },
];

/// Interval of the progress timer
pub const PROGRESS_TICK: Duration = Duration::from_millis(100);
/// Percentage points added per tick (0.5 every 100 ms fills the bar in 20 s)
pub const PROGRESS_INCREMENT: f64 = 0.5;
pub const PROGRESS_MAX: f64 = 100.0;

/// Current step and progress of the animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenterState {
    step_index: usize,
    progress: f64,
}

impl Default for PresenterState {
    fn default() -> Self {
        Self {
            step_index: 0,
            progress: 0.0,
        }
    }
}

impl PresenterState {
    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    #[must_use]
    pub fn step(&self) -> &'static LoadingStep {
        &LOADING_STEPS[self.step_index % LOADING_STEPS.len()]
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress rounded for display
    #[must_use]
    pub fn percent(&self) -> u64 {
        crate::temperature::round_half_up(self.progress).clamp(0, 100) as u64
    }

    /// Move to the next message, wrapping after the last one
    pub fn advance_step(&mut self) {
        self.step_index = (self.step_index + 1) % LOADING_STEPS.len();
    }

    /// Add one increment, saturating at 100
    pub fn tick_progress(&mut self) {
        self.progress = (self.progress + PROGRESS_INCREMENT).min(PROGRESS_MAX);
    }
}

/// Running loading animation; both timers stop when this is dropped
pub struct ProgressPresenter {
    state: watch::Receiver<PresenterState>,
    step_timer: JoinHandle<()>,
    progress_timer: JoinHandle<()>,
}

impl ProgressPresenter {
    /// Start both timers on the current tokio runtime
    #[must_use]
    pub fn start() -> Self {
        let (tx, state) = watch::channel(PresenterState::default());
        let tx = Arc::new(tx);

        let step_tx = Arc::clone(&tx);
        let step_timer = tokio::spawn(async move {
            loop {
                let duration = step_tx.borrow().step().duration;
                tokio::time::sleep(duration).await;
                step_tx.send_modify(PresenterState::advance_step);
            }
        });

        let progress_timer = tokio::spawn(async move {
            let mut interval = tokio::time::interval(PROGRESS_TICK);
            // the first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                tx.send_modify(PresenterState::tick_progress);
            }
        });

        Self {
            state,
            step_timer,
            progress_timer,
        }
    }

    #[must_use]
    pub fn state(&self) -> PresenterState {
        *self.state.borrow()
    }

    /// Receiver notified on every step or progress change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PresenterState> {
        self.state.clone()
    }
}

impl Drop for ProgressPresenter {
    fn drop(&mut self) {
        self.step_timer.abort();
        self.progress_timer.abort();
    }
}

/// Terminal rendering of a [`ProgressPresenter`]
pub struct ProgressDisplay {
    bar: ProgressBar,
    task: JoinHandle<()>,
}

impl ProgressDisplay {
    /// Mirror the presenter on stderr; a hidden bar when `visible` is false
    #[must_use]
    pub fn attach(presenter: &ProgressPresenter, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(100)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(
            ProgressStyle::with_template("{msg}\n{wide_bar:.magenta/blue} {pos}% Complete")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut updates = presenter.subscribe();
        let task_bar = bar.clone();
        let task = tokio::spawn(async move {
            loop {
                let state = *updates.borrow_and_update();
                let step = state.step();
                task_bar.set_message(format!("{} {}", step.icon, step.message));
                task_bar.set_position(state.percent());
                if updates.changed().await.is_err() {
                    break;
                }
            }
        });

        Self { bar, task }
    }
}

impl Drop for ProgressDisplay {
    fn drop(&mut self) {
        self.task.abort();
        self.bar.finish_and_clear();
    }
}

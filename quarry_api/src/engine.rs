//! Engine Contract
//!
//! The host runtime drives one main thread through a tick loop and exposes
//! it here: tick timing queries, the main-thread check, and a scheduler for
//! work that must run on that thread. Plugins hold an `&dyn Engine` supplied
//! by the host; nothing in this crate implements one.
use std::fmt;
use std::time::Duration;

use log::debug;
use thiserror::Error;
use uuid::Uuid;

use quarry_data::{OPTIMAL_TICK_DURATION, Ticks};

/// Shared functionality between client and server engines.
///
/// Tick conversions go through [`tick_duration`](Engine::tick_duration), the
/// engine's measured pace, so estimates stay honest on an overloaded server.
pub trait Engine {
    /// The scheduler for sync tasks on this engine's main thread.
    fn scheduler(&self) -> &dyn Scheduler;

    /// The measured duration of a tick, if the engine has measured one yet.
    fn measured_tick_duration(&self) -> Option<Duration>;

    /// Whether the current thread is the engine's main thread.
    fn on_main_thread(&self) -> bool;

    /// Duration of a tick when the engine performs optimally: 50 ms.
    fn optimal_tick_duration(&self) -> Duration {
        OPTIMAL_TICK_DURATION
    }

    /// The working tick duration: the measured one, or the optimal one while
    /// no measurement exists. A zero measurement counts as unmeasured.
    fn tick_duration(&self) -> Duration {
        match self.measured_tick_duration() {
            Some(measured) if !measured.is_zero() => measured,
            _ => self.optimal_tick_duration(),
        }
    }

    /// How many ticks this engine takes to cover `duration` at its current
    /// pace, rounded to the nearest tick.
    fn estimated_ticks(&self, duration: Duration) -> Ticks {
        Ticks::from_duration(duration, self.tick_duration())
    }

    /// How long this engine takes to run `ticks` at its current pace.
    fn estimated_duration(&self, ticks: Ticks) -> Duration {
        ticks.to_duration(self.tick_duration())
    }
}

/// Accepts tasks to run synchronously on the engine's main thread.
pub trait Scheduler {
    /// Queue a task, returning a handle for the host's bookkeeping.
    fn submit(&self, task: Task) -> Uuid;
}

/// Configurations rejected by [`TaskBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("no task body was configured")]
    MissingBody,
}

/// A unit of work for the main thread: an optional name for logging, a tick
/// delay, and the body to run.
pub struct Task {
    name: Option<String>,
    delay: Ticks,
    body: Box<dyn FnOnce() + Send>,
}

impl Task {
    /// Start configuring a task.
    pub fn builder() -> TaskBuilder {
        TaskBuilder::new()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Ticks the host should wait before running the body.
    pub fn delay(&self) -> Ticks {
        self.delay
    }

    /// Consume the task and run its body. Called by the host on the main
    /// thread once the delay has elapsed.
    pub fn run(self) {
        (self.body)();
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Task`]. Only the body is required.
#[derive(Default)]
pub struct TaskBuilder {
    name: Option<String>,
    delay: Ticks,
    body: Option<Box<dyn FnOnce() + Send>>,
}

impl TaskBuilder {
    pub(crate) fn new() -> TaskBuilder {
        TaskBuilder::default()
    }

    /// Name the task for the host's logs.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Run the body this many ticks after submission. Zero (the default)
    /// means the next tick.
    pub fn delay(mut self, delay: Ticks) -> Self {
        self.delay = delay;
        self
    }

    /// The work to run. Replaces any earlier body.
    pub fn body<F>(mut self, body: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.body = Some(Box::new(body));
        self
    }

    /// Return to the freshly-created state.
    pub fn reset(mut self) -> Self {
        self.name = None;
        self.delay = Ticks::ZERO;
        self.body = None;
        self
    }

    /// Finish the task.
    ///
    /// # Errors
    /// `TaskError::MissingBody` if no body was configured.
    pub fn build(self) -> Result<Task, TaskError> {
        let Some(body) = self.body else {
            return Err(TaskError::MissingBody);
        };
        let log_name = match &self.name {
            Some(name) => name.as_str(),
            None => "<unnamed>",
        };
        debug!("built task \"{log_name}\" (delay = {} ticks)", self.delay.0);
        Ok(Task {
            name: self.name,
            delay: self.delay,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Engine stub with a configurable measurement and a recording scheduler.
    struct TestEngine {
        measured: Option<Duration>,
        scheduler: RecordingScheduler,
    }

    #[derive(Default)]
    struct RecordingScheduler {
        submitted: Mutex<Vec<Task>>,
    }

    impl Scheduler for RecordingScheduler {
        fn submit(&self, task: Task) -> Uuid {
            self.submitted.lock().unwrap().push(task);
            Uuid::new_v4()
        }
    }

    impl Engine for TestEngine {
        fn scheduler(&self) -> &dyn Scheduler {
            &self.scheduler
        }

        fn measured_tick_duration(&self) -> Option<Duration> {
            self.measured
        }

        fn on_main_thread(&self) -> bool {
            true
        }
    }

    fn engine_with(measured: Option<Duration>) -> TestEngine {
        TestEngine {
            measured,
            scheduler: RecordingScheduler::default(),
        }
    }

    #[test]
    fn tick_duration_prefers_the_measurement() {
        let engine = engine_with(Some(Duration::from_millis(80)));
        assert_eq!(engine.tick_duration(), Duration::from_millis(80));
    }

    #[test]
    fn unmeasured_or_zero_falls_back_to_optimal() {
        assert_eq!(engine_with(None).tick_duration(), Duration::from_millis(50));
        assert_eq!(
            engine_with(Some(Duration::ZERO)).tick_duration(),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn estimates_track_the_engine_pace() {
        // a lagging engine at 100 ms/tick covers fewer ticks per second
        let lagging = engine_with(Some(Duration::from_millis(100)));
        assert_eq!(lagging.estimated_ticks(Duration::from_secs(1)), Ticks(10));
        assert_eq!(lagging.estimated_duration(Ticks(10)), Duration::from_secs(1));

        let healthy = engine_with(None);
        assert_eq!(healthy.estimated_ticks(Duration::from_secs(1)), Ticks(20));
    }

    #[test]
    fn task_builder_requires_a_body() {
        let err = Task::builder().name("tidy").delay(Ticks(5)).build().unwrap_err();
        assert_eq!(err, TaskError::MissingBody);
    }

    #[test]
    fn task_carries_name_and_delay_and_runs_its_body() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let task = Task::builder()
            .name("tidy chunk cache")
            .delay(Ticks(5))
            .body(move || flag.store(true, Ordering::SeqCst))
            .build()
            .unwrap();

        assert_eq!(task.name(), Some("tidy chunk cache"));
        assert_eq!(task.delay(), Ticks(5));
        task.run();
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn task_builder_reset_clears_everything() {
        let builder = Task::builder().name("old").delay(Ticks(9)).body(|| {}).reset();
        assert!(matches!(builder.build(), Err(TaskError::MissingBody)));

        let task = Task::builder().reset().body(|| {}).build().unwrap();
        assert_eq!(task.name(), None);
        assert_eq!(task.delay(), Ticks::ZERO);
    }

    #[test]
    fn scheduler_receives_submitted_tasks() {
        let engine = engine_with(None);
        let task = Task::builder().name("announce").body(|| {}).build().unwrap();
        engine.scheduler().submit(task);

        let submitted = engine.scheduler.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].name(), Some("announce"));
    }
}

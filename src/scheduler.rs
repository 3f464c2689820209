//! Mutation-driven refresh scheduling.
//!
//! Three triggers feed one scan operation: a startup delay (late-loading
//! host scripts need time to populate markup), debounced mutation
//! notifications, and a fallback poll that only re-ensures the consumer's
//! scaffold. A scroll signal repositions the trigger element and never
//! scans. All timing state lives in a single task; producers reach it
//! through a cloneable handle.
//!
//! Mutation bursts coalesce into one pending scan: each notification
//! re-arms the same debounce timer instead of stacking a timer per batch.
//! Rendering is an idempotent full replace, so the surviving scan's output
//! is exactly what overlapping scans would have converged to - last render
//! wins, with the redundant work skipped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::{Error, Result};
use crate::extract;
use crate::options::Options;
use crate::record::ScanResult;

/// Where the scheduler reads the current markup from.
///
/// The engine never mutates the document; implementors hand back a snapshot
/// of whatever the host currently holds. Closures returning `String`
/// implement this directly.
pub trait DocumentSource: Send + 'static {
    /// Current markup of the host document.
    fn snapshot(&mut self) -> String;
}

impl<F> DocumentSource for F
where
    F: FnMut() -> String + Send + 'static,
{
    fn snapshot(&mut self) -> String {
        self()
    }
}

/// Consumer-owned scaffold and rendering hooks.
///
/// The on-page trigger element and results surface belong to the consumer;
/// the scheduler only asks for them to be re-created when the host document
/// removes them, repositioned on scroll, and re-rendered after a scan.
pub trait Surface: Send + 'static {
    /// Re-create the trigger and results elements if they went missing.
    fn ensure_scaffold(&mut self);

    /// Move the trigger element back into view after a scroll. Never scans.
    fn reposition_trigger(&mut self) {}

    /// Replace the rendered list with a fresh result.
    ///
    /// Must be a full replace: a newer render completely supersedes an older
    /// one. An empty result is the "no media found" state, not an error.
    fn render(&mut self, result: &ScanResult);
}

/// Timing configuration for the scheduler.
#[derive(Clone, Copy, Debug)]
pub struct SchedulerCfg {
    /// Delay before the first scan, long enough for late-loading host
    /// scripts to populate markup.
    pub startup_delay: Duration,

    /// Quiet period after a mutation notification before the scan runs.
    /// Notifications inside the window re-arm the same timer.
    pub debounce: Duration,

    /// Period of the scaffold-presence check. Never triggers a scan.
    pub poll_interval: Duration,
}

impl Default for SchedulerCfg {
    fn default() -> Self {
        Self {
            startup_delay: Duration::from_secs(5),
            debounce: Duration::from_millis(500),
            poll_interval: Duration::from_secs(2),
        }
    }
}

enum Signal {
    Mutation,
    Scroll,
}

/// Cloneable handle into a running scheduler.
///
/// Mutation observers and scroll listeners are expected to hold clones and
/// forward their events; the scheduler stops once every handle is dropped
/// (the crate analogue of page unload).
#[derive(Clone)]
pub struct SchedulerHandle {
    tx: mpsc::UnboundedSender<Signal>,
    preview_visible: Arc<AtomicBool>,
}

impl SchedulerHandle {
    /// Report a structural change anywhere in the document.
    ///
    /// Ensures the scaffold and (re-)arms the debounced scan.
    pub fn notify_mutation(&self) -> Result<()> {
        self.tx
            .send(Signal::Mutation)
            .map_err(|_| Error::SchedulerClosed)
    }

    /// Report a viewport scroll. Repositions the trigger element only.
    pub fn notify_scroll(&self) -> Result<()> {
        self.tx
            .send(Signal::Scroll)
            .map_err(|_| Error::SchedulerClosed)
    }

    /// Toggle preview visibility. Consulted only by rendering code; the
    /// engine itself never reads it.
    pub fn set_preview_visible(&self, visible: bool) {
        self.preview_visible.store(visible, Ordering::Relaxed);
    }

    /// Current preview visibility. Defaults to visible.
    #[must_use]
    pub fn is_preview_visible(&self) -> bool {
        self.preview_visible.load(Ordering::Relaxed)
    }
}

type RefreshCallback = Box<dyn FnMut(&ScanResult) + Send>;

/// Builder for a refresh scheduler.
///
/// # Example
///
/// ```rust,no_run
/// use media_sniffer::{ScanResult, Scheduler, Surface};
///
/// struct Console;
///
/// impl Surface for Console {
///     fn ensure_scaffold(&mut self) {}
///     fn render(&mut self, result: &ScanResult) {
///         println!("media resources: {}", result.len());
///     }
/// }
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let (handle, task) = Scheduler::new(current_markup, Console)
///         .on_refresh(|result| tracing::info!(found = result.len(), "refresh"))
///         .spawn();
///
///     // Wire `handle.notify_mutation()` / `handle.notify_scroll()` into the
///     // host's observers, then keep the handle alive for the page lifetime.
///     handle.notify_mutation().ok();
///     drop(handle);
///     task.await.ok();
/// }
///
/// fn current_markup() -> String {
///     String::new()
/// }
/// ```
pub struct Scheduler<S, C> {
    source: S,
    surface: C,
    options: Options,
    cfg: SchedulerCfg,
    callbacks: Vec<RefreshCallback>,
}

impl<S: DocumentSource, C: Surface> Scheduler<S, C> {
    /// Create a scheduler over a document source and a consumer surface,
    /// with default options and timings.
    pub fn new(source: S, surface: C) -> Self {
        Self {
            source,
            surface,
            options: Options::default(),
            cfg: SchedulerCfg::default(),
            callbacks: Vec::new(),
        }
    }

    /// Replace the scan options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Replace the timing configuration.
    #[must_use]
    pub fn with_config(mut self, cfg: SchedulerCfg) -> Self {
        self.cfg = cfg;
        self
    }

    /// Register a callback invoked with the fresh result after every
    /// triggered scan - startup and debounced mutations. The fallback poll
    /// only touches the scaffold and never fires callbacks.
    #[must_use]
    pub fn on_refresh(mut self, callback: impl FnMut(&ScanResult) + Send + 'static) -> Self {
        self.callbacks.push(Box::new(callback));
        self
    }

    /// Spawn the scheduler task. Must be called within a tokio runtime.
    ///
    /// Returns the signal handle and the task's join handle. The task runs
    /// until every `SchedulerHandle` clone has been dropped or the join
    /// handle is aborted.
    pub fn spawn(self) -> (SchedulerHandle, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = SchedulerHandle {
            tx,
            preview_visible: Arc::new(AtomicBool::new(true)),
        };
        let task = tokio::spawn(run(self, rx));
        (handle, task)
    }

    fn scan_and_notify(&mut self) {
        let html = self.source.snapshot();
        let result = extract::scan_document(&html, &self.options);
        tracing::debug!(records = result.len(), "refresh scan complete");
        self.surface.render(&result);
        for callback in &mut self.callbacks {
            callback(&result);
        }
    }
}

async fn run<S: DocumentSource, C: Surface>(
    mut sched: Scheduler<S, C>,
    mut rx: mpsc::UnboundedReceiver<Signal>,
) {
    let startup = time::sleep(sched.cfg.startup_delay);
    tokio::pin!(startup);
    let mut started = false;

    // One resettable timer instead of a timer per mutation batch; the guard
    // below keeps it silent until a mutation arms it.
    let debounce = time::sleep(Duration::ZERO);
    tokio::pin!(debounce);
    let mut scan_pending = false;

    let mut poll = time::interval_at(
        Instant::now() + sched.cfg.poll_interval,
        sched.cfg.poll_interval,
    );
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = &mut startup, if !started => {
                started = true;
                sched.surface.ensure_scaffold();
                sched.scan_and_notify();
            }
            signal = rx.recv() => match signal {
                Some(Signal::Mutation) => {
                    sched.surface.ensure_scaffold();
                    debounce.as_mut().reset(Instant::now() + sched.cfg.debounce);
                    scan_pending = true;
                }
                Some(Signal::Scroll) => {
                    sched.surface.ensure_scaffold();
                    sched.surface.reposition_trigger();
                }
                // Every handle is gone: the host context went away.
                None => break,
            },
            () = &mut debounce, if scan_pending => {
                scan_pending = false;
                sched.scan_and_notify();
            }
            _ = poll.tick() => {
                sched.surface.ensure_scaffold();
            }
        }
    }
}

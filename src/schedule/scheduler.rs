use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// One frame handed to every registered callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Ticks delivered since the last `start`, starting at 0.
    pub index: u64,
    /// Host timestamp of this frame.
    pub timestamp: Duration,
    /// Time since the previous tick; zero on the first tick after `start`.
    pub elapsed: Duration,
}

/// Handle returned by [`FrameScheduler::on_tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

/// Cancellation token shared with the host. Stopping is idempotent and takes effect before the
/// next callback runs, even mid-tick.
#[derive(Clone, Debug)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

type TickFn<C> = Box<dyn FnMut(&mut C, &Tick)>;

/// Runs registered callbacks once per host frame, in registration order.
///
/// The scheduler never owns a thread. The host calls [`FrameScheduler::tick`] whenever it would
/// render a frame and passes the state the callbacks work on.
pub struct FrameScheduler<C> {
    callbacks: Vec<(CallbackId, TickFn<C>)>,
    next_id: u64,
    token: Option<StopHandle>,
    last: Option<Duration>,
    index: u64,
}

impl<C> Default for FrameScheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FrameScheduler<C> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            next_id: 0,
            token: None,
            last: None,
            index: 0,
        }
    }

    pub fn on_tick(&mut self, callback: impl FnMut(&mut C, &Tick) + 'static) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Unregister a callback. Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: CallbackId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cid, _)| *cid != id);
        self.callbacks.len() != before
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Enter the running state with a fresh token. The next tick reports zero elapsed time.
    pub fn start(&mut self) -> StopHandle {
        if let Some(old) = self.token.take() {
            old.stop();
        }
        let token = StopHandle {
            stopped: Arc::new(AtomicBool::new(false)),
        };
        self.token = Some(token.clone());
        self.last = None;
        self.index = 0;
        tracing::debug!("frame scheduler started");
        token
    }

    pub fn stop(&mut self) {
        if let Some(token) = &self.token {
            if !token.is_stopped() {
                tracing::debug!(ticks = self.index, "frame scheduler stopped");
            }
            token.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_stopped())
    }

    /// Deliver one frame. Returns `None` when not running.
    ///
    /// Timestamps that go backwards produce a zero `elapsed`.
    pub fn tick(&mut self, ctx: &mut C, timestamp: Duration) -> Option<Tick> {
        let token = self.token.clone()?;
        if token.is_stopped() {
            return None;
        }
        let elapsed = match self.last {
            Some(prev) => timestamp.saturating_sub(prev),
            None => Duration::ZERO,
        };
        let tick = Tick {
            index: self.index,
            timestamp,
            elapsed,
        };
        self.last = Some(timestamp);
        self.index += 1;

        for (_, callback) in &mut self.callbacks {
            if token.is_stopped() {
                break;
            }
            callback(ctx, &tick);
        }
        Some(tick)
    }
}

impl<C> std::fmt::Debug for FrameScheduler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("callbacks", &self.callbacks.len())
            .field("running", &self.is_running())
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;

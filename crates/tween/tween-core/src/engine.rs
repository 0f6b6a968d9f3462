//! The playback engine: converts wall-clock time into discrete frame events
//! and fans them out to listeners.
//!
//! One background thread exists per running period, created by
//! `play`/`play_reverse`/`resume` and retired by `pause`/`stop`. The
//! controller and the loop communicate through a control channel
//! (pause/stop signals), a join handle used as the drain barrier, and a
//! mutex-guarded playback cursor. The loop waits between ticks with a
//! deadline-bounded channel receive, so a cancellation signal is observed
//! within one frame interval.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};

use crate::error::TweenError;
use crate::frame::{Frame, Timing};
use crate::listener::Listener;
use crate::state::PlaybackState;

/// Default frames per second when the builder does not override it.
pub const DEFAULT_FRAMERATE: u32 = 60;

type SharedCurve = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Control signals sent from the engine to the timing loop.
enum LoopSignal {
    /// Exit the loop, keeping the playhead mid-flight.
    Pause,
    /// Run the completion sequence (boundary frame + on_end), then exit.
    Stop,
}

/// Mutable playback position shared between the controller and the loop.
struct PlaybackCursor {
    playhead: Duration,
    reversed: bool,
    state: PlaybackState,
}

/// State shared with the timing loop. The cursor mutex guards position and
/// lifecycle flags; the listener mutex makes set replacement and frame
/// dispatch mutually exclusive.
struct Shared {
    cursor: Mutex<PlaybackCursor>,
    listeners: Mutex<Vec<Box<dyn Listener>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Shared {
    fn cursor(&self) -> MutexGuard<'_, PlaybackCursor> {
        lock(&self.cursor)
    }

    fn dispatch_start(&self, timing: &Timing) {
        let mut listeners = lock(&self.listeners);
        for listener in listeners.iter_mut() {
            if panic::catch_unwind(AssertUnwindSafe(|| listener.on_start(timing))).is_err() {
                log::warn!("listener panicked in on_start; continuing without it");
            }
        }
    }

    fn dispatch_frame(&self, frame: &Frame) {
        let mut listeners = lock(&self.listeners);
        for listener in listeners.iter_mut() {
            if panic::catch_unwind(AssertUnwindSafe(|| listener.on_frame(frame))).is_err() {
                log::warn!("listener panicked in on_frame (index {}); continuing", frame.index);
            }
        }
    }

    fn dispatch_end(&self) {
        let mut listeners = lock(&self.listeners);
        for listener in listeners.iter_mut() {
            if panic::catch_unwind(AssertUnwindSafe(|| listener.on_end())).is_err() {
                log::warn!("listener panicked in on_end; continuing");
            }
        }
    }
}

/// Builder for [`Tween`].
pub struct TweenBuilder {
    duration: Duration,
    framerate: u32,
    curve: SharedCurve,
    listeners: Vec<Box<dyn Listener>>,
}

impl TweenBuilder {
    fn new(duration: Duration) -> Self {
        Self {
            duration,
            framerate: DEFAULT_FRAMERATE,
            curve: Arc::new(crate::easing::linear),
            listeners: Vec::new(),
        }
    }

    /// Set the transition curve. Defaults to [`easing::linear`](crate::easing::linear).
    pub fn curve(mut self, curve: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.curve = Arc::new(curve);
        self
    }

    /// Set the frames requested per second. Defaults to [`DEFAULT_FRAMERATE`].
    pub fn framerate(mut self, framerate: u32) -> Self {
        self.framerate = framerate;
        self
    }

    /// Attach a listener.
    pub fn listener(mut self, listener: impl Listener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Validate and build the tween.
    pub fn build(self) -> Result<Tween, TweenError> {
        if self.duration.is_zero() {
            return Err(TweenError::ZeroDuration);
        }
        if self.framerate == 0 {
            return Err(TweenError::InvalidFramerate {
                framerate: self.framerate,
            });
        }
        Ok(Tween {
            duration: self.duration,
            framerate: self.framerate,
            curve: self.curve,
            shared: Arc::new(Shared {
                cursor: Mutex::new(PlaybackCursor {
                    playhead: Duration::ZERO,
                    reversed: false,
                    state: PlaybackState::Idle,
                }),
                listeners: Mutex::new(self.listeners),
            }),
            control: None,
            loop_handle: None,
        })
    }
}

/// A single real-time playback of a parametric transition.
///
/// The tween owns its timing (duration, framerate, transition curve) and a
/// set of [`Listener`]s; control operations drive the state machine
/// Idle → Running → Paused/Completed. All control operations take
/// `&mut self` — serializing concurrent controllers is the caller's
/// responsibility, while the engine guarantees its own loop lifecycle is
/// race-free.
pub struct Tween {
    duration: Duration,
    framerate: u32,
    curve: SharedCurve,
    shared: Arc<Shared>,
    control: Option<Sender<LoopSignal>>,
    loop_handle: Option<JoinHandle<()>>,
}

impl Tween {
    /// Create a tween with the default framerate and no listeners.
    pub fn new(
        duration: Duration,
        curve: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Result<Self, TweenError> {
        Self::builder(duration).curve(curve).build()
    }

    /// Start building a tween over the given duration.
    pub fn builder(duration: Duration) -> TweenBuilder {
        TweenBuilder::new(duration)
    }

    /// Total playback span.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Frames requested per second.
    #[inline]
    pub fn framerate(&self) -> u32 {
        self.framerate
    }

    /// Wall-clock spacing between frames.
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.framerate))
    }

    /// Number of whole frame slots in the duration.
    #[inline]
    pub fn frame_count(&self) -> u32 {
        (self.duration.as_nanos() / self.frame_interval().as_nanos()) as u32
    }

    /// Whether playback runs from the end toward the start.
    pub fn reversed(&self) -> bool {
        self.shared.cursor().reversed
    }

    /// Whether a timing loop is currently active.
    pub fn running(&self) -> bool {
        self.shared.cursor().state.is_running()
    }

    /// Whether the last run reached a terminal boundary.
    pub fn complete(&self) -> bool {
        self.shared.cursor().state.is_complete()
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.shared.cursor().state
    }

    /// Current position within `[0, duration]`. Authoritative when not
    /// running; a snapshot of the pre-run origin otherwise.
    pub fn playhead(&self) -> Duration {
        self.shared.cursor().playhead
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        lock(&self.shared.listeners).len()
    }

    /// Attach a listener. Takes effect from the next dispatched frame.
    pub fn add_listener(&mut self, listener: impl Listener + 'static) {
        lock(&self.shared.listeners).push(Box::new(listener));
    }

    /// Replace the listener set wholesale, returning the previous set.
    /// Replacement never interleaves with an in-flight frame dispatch.
    pub fn set_listeners(&mut self, listeners: Vec<Box<dyn Listener>>) -> Vec<Box<dyn Listener>> {
        std::mem::replace(&mut *lock(&self.shared.listeners), listeners)
    }

    /// Replace the transition curve. Only permitted while no timing loop is
    /// active; the new curve applies from the next run.
    pub fn set_curve(
        &mut self,
        curve: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Result<(), TweenError> {
        let state = self.shared.cursor().state;
        if state.is_running() {
            return Err(TweenError::InvalidState {
                current: state.name(),
                requested: "set_curve",
            });
        }
        self.curve = Arc::new(curve);
        Ok(())
    }

    fn timing(&self) -> Timing {
        Timing {
            framerate: self.framerate,
            frame_count: self.frame_count(),
            frame_interval: self.frame_interval(),
            duration: self.duration,
        }
    }

    /// Play forwards from the beginning. Any active loop is stopped first
    /// (without completing it), the playhead resets to zero, every listener
    /// receives `on_start` followed by the initial `completed = 0` frame,
    /// and a fresh timing loop starts.
    pub fn play(&mut self) {
        self.halt_loop();
        {
            let mut cursor = self.shared.cursor();
            cursor.playhead = Duration::ZERO;
            cursor.reversed = false;
        }
        log::debug!("play: forward from 0 of {:?}", self.duration);

        let timing = self.timing();
        self.shared.dispatch_start(&timing);
        self.shared.dispatch_frame(&Frame {
            completed: 0.0,
            transitioned: (self.curve)(0.0),
            index: 0,
            elapsed: Duration::ZERO,
        });
        self.spawn_loop(Some(0));
    }

    /// Play backwards from the end. Symmetric to [`play`](Self::play): the
    /// playhead is set to the duration and the initial frame carries
    /// `completed = 1, transitioned = curve(1)`.
    pub fn play_reverse(&mut self) {
        self.halt_loop();
        {
            let mut cursor = self.shared.cursor();
            cursor.playhead = self.duration;
            cursor.reversed = true;
        }
        log::debug!("play: reverse from {:?}", self.duration);

        let timing = self.timing();
        self.shared.dispatch_start(&timing);
        self.shared.dispatch_frame(&Frame {
            completed: 1.0,
            transitioned: (self.curve)(1.0),
            index: timing.frame_count,
            elapsed: self.duration,
        });
        self.spawn_loop(Some(timing.frame_count));
    }

    /// Pause playback in place. Blocks until the timing loop has fully
    /// exited; no frame is dispatched after this returns. No-op when not
    /// running.
    pub fn pause(&mut self) {
        if !self.running() {
            return;
        }
        self.halt_loop();
        log::debug!("paused at {:?}", self.playhead());
    }

    /// Resume playback from the current playhead and direction. No-op when
    /// already running or when the tween has completed.
    pub fn resume(&mut self) {
        if !self.shared.cursor().state.can_resume() {
            return;
        }
        self.spawn_loop(None);
    }

    /// Terminate the run as complete. Blocks until the loop has drained;
    /// the loop delivers the boundary frame (`completed = 1` forward,
    /// `completed = 0` reverse) and `on_end` before exiting. No-op when not
    /// running.
    pub fn stop(&mut self) {
        if !self.running() {
            return;
        }
        if let Some(control) = self.control.take() {
            let _ = control.send(LoopSignal::Stop);
        }
        if let Some(handle) = self.loop_handle.take() {
            let _ = handle.join();
        }
        log::debug!("stopped");
    }

    /// Move the playhead, clamped to `[0, duration]`. When running, the
    /// loop is transparently paused around the mutation so no frame is
    /// dispatched mid-seek.
    pub fn seek(&mut self, position: Duration) {
        let was_running = self.running();
        if was_running {
            self.halt_loop();
        }
        self.shared.cursor().playhead = position.min(self.duration);
        if was_running && self.shared.cursor().state.can_resume() {
            self.spawn_loop(None);
        }
    }

    /// Flip the playback direction. When running, the loop is transparently
    /// paused and resumed so the timing base is recomputed for the new
    /// direction.
    pub fn reverse(&mut self) {
        let was_running = self.running();
        if was_running {
            self.halt_loop();
        }
        {
            let mut cursor = self.shared.cursor();
            cursor.reversed = !cursor.reversed;
        }
        if was_running && self.shared.cursor().state.can_resume() {
            self.spawn_loop(None);
        }
    }

    /// Signal any active loop to exit mid-flight and wait for it to drain.
    /// Leaves the cursor wherever the loop put it (Paused, or Completed if
    /// the loop finished naturally before observing the signal).
    fn halt_loop(&mut self) {
        if let Some(control) = self.control.take() {
            let _ = control.send(LoopSignal::Pause);
        }
        if let Some(handle) = self.loop_handle.take() {
            let _ = handle.join();
        }
    }

    /// Start a timing loop from the current playhead/direction.
    /// `initial_index` seeds the duplicate-slot guard when the synthetic
    /// initial frame of `play`/`play_reverse` has already been dispatched.
    fn spawn_loop(&mut self, initial_index: Option<u32>) {
        let (control_tx, control_rx) = bounded(2);
        let (origin, reversed) = {
            let mut cursor = self.shared.cursor();
            cursor.state = PlaybackState::Running;
            (cursor.playhead, cursor.reversed)
        };
        let context = LoopContext {
            shared: Arc::clone(&self.shared),
            curve: Arc::clone(&self.curve),
            timing: self.timing(),
            origin,
            reversed,
            last_index: initial_index,
            control: control_rx,
        };
        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("tween-playback".into())
            .spawn(move || {
                // Contain listener-free panics too: a loop that dies must
                // not leave the cursor claiming to be running.
                if panic::catch_unwind(AssertUnwindSafe(|| context.run())).is_err() {
                    log::error!("playback loop terminated by panic");
                    let mut cursor = shared.cursor();
                    if cursor.state.is_running() {
                        cursor.state = PlaybackState::Paused;
                    }
                }
            });
        match spawned {
            Ok(handle) => {
                self.control = Some(control_tx);
                self.loop_handle = Some(handle);
            }
            Err(err) => {
                log::error!("failed to spawn playback thread: {err}");
                self.shared.cursor().state = PlaybackState::Paused;
            }
        }
    }
}

impl Drop for Tween {
    fn drop(&mut self) {
        self.halt_loop();
    }
}

impl std::fmt::Debug for Tween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cursor = self.shared.cursor();
        f.debug_struct("Tween")
            .field("duration", &self.duration)
            .field("framerate", &self.framerate)
            .field("state", &cursor.state)
            .field("playhead", &cursor.playhead)
            .field("reversed", &cursor.reversed)
            .finish()
    }
}

/// Everything the timing loop needs, captured at spawn time.
struct LoopContext {
    shared: Arc<Shared>,
    curve: SharedCurve,
    timing: Timing,
    origin: Duration,
    reversed: bool,
    last_index: Option<u32>,
    control: Receiver<LoopSignal>,
}

impl LoopContext {
    /// The timing loop. Once per frame interval of wall-clock time it maps
    /// elapsed time to a frame slot and dispatches, until a terminal
    /// boundary or a control signal.
    fn run(mut self) {
        let interval = self.timing.frame_interval;
        let interval_secs = interval.as_secs_f64();
        let duration_secs = self.timing.duration.as_secs_f64();

        let started = Instant::now();
        let mut next_tick = started + interval;

        loop {
            match self.control.recv_deadline(next_tick) {
                Ok(LoopSignal::Pause) | Err(RecvTimeoutError::Disconnected) => {
                    let mut cursor = self.shared.cursor();
                    cursor.playhead = self.elapsed_at(started.elapsed());
                    cursor.state = PlaybackState::Paused;
                    return;
                }
                Ok(LoopSignal::Stop) => {
                    self.finish();
                    return;
                }
                Err(RecvTimeoutError::Timeout) => {
                    next_tick += interval;

                    let since = started.elapsed();
                    let elapsed = if self.reversed {
                        self.origin.saturating_sub(since)
                    } else {
                        self.origin + since
                    };
                    // Round to the nearest slot: truncation would
                    // systematically under-report the index under
                    // scheduler jitter.
                    let index = (elapsed.as_secs_f64() / interval_secs).round() as u32;
                    let completed = f64::from(index) * interval_secs / duration_secs;

                    // Terminal boundary: reverse finishes at or past 0;
                    // forward at or past 1, or once elapsed time exhausts a
                    // duration that is not a whole multiple of the frame
                    // interval. The canonical boundary frame is delivered
                    // by the completion sequence, not this tick.
                    let finished = if self.reversed {
                        completed <= 0.0
                    } else {
                        completed >= 1.0 || elapsed >= self.timing.duration
                    };
                    if finished {
                        self.finish();
                        return;
                    }

                    // A delayed tick can re-round to a slot that was
                    // already dispatched; skip it so the index sequence
                    // stays strictly monotonic within this run.
                    if let Some(last) = self.last_index {
                        let duplicate = if self.reversed {
                            index >= last
                        } else {
                            index <= last
                        };
                        if duplicate {
                            continue;
                        }
                    }

                    self.last_index = Some(index);
                    self.shared.dispatch_frame(&Frame {
                        completed,
                        transitioned: (self.curve)(completed),
                        index,
                        elapsed,
                    });
                }
            }
        }
    }

    /// Elapsed playback position for a given wall-clock offset from loop
    /// start, clamped to `[0, duration]`.
    fn elapsed_at(&self, since_start: Duration) -> Duration {
        if self.reversed {
            self.origin.saturating_sub(since_start)
        } else {
            (self.origin + since_start).min(self.timing.duration)
        }
    }

    /// Completion sequence, run in-line by the loop itself: mark the run
    /// complete, park the playhead at the terminal boundary, deliver the
    /// canonical boundary frame, then `on_end`.
    fn finish(&self) {
        let (completed, index, elapsed) = if self.reversed {
            (0.0, 0, Duration::ZERO)
        } else {
            (1.0, self.timing.frame_count, self.timing.duration)
        };
        {
            let mut cursor = self.shared.cursor();
            cursor.playhead = elapsed;
            cursor.state = PlaybackState::Completed;
        }
        self.shared.dispatch_frame(&Frame {
            completed,
            transitioned: (self.curve)(completed),
            index,
            elapsed,
        });
        self.shared.dispatch_end();
        log::debug!("playback complete at {:?}", elapsed);
    }
}

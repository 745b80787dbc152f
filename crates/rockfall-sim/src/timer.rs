//! Tick-counting interval timer.
//!
//! A `Timer<O>` fires its action once every `interval` ticks while enabled.
//! The action receives the timer's own state (so it can stop, reset or
//! re-time itself) and a mutable reference to an owner `O` supplied by the
//! caller at tick time. Keeping the owner out of the timer lets an entity
//! hold a timer that mutates the entity's other fields without aliasing.

use std::fmt;

/// Counters and enable flag of a timer, as seen by its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    interval: u32,
    elapsed: u32,
    loops: u64,
    enabled: bool,
}

impl TimerState {
    fn new(interval: u32) -> Self {
        Self {
            interval,
            elapsed: 0,
            loops: 0,
            enabled: true,
        }
    }

    /// Enable without touching the counters.
    pub fn start(&mut self) {
        self.enabled = true;
    }

    /// Disable without touching the counters.
    pub fn stop(&mut self) {
        self.enabled = false;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Zero the elapsed and loop counters. The enable flag is unchanged.
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.loops = 0;
    }

    /// Takes effect at the next tick; the current elapsed count is kept as is.
    pub fn set_interval(&mut self, ticks: u32) {
        self.interval = ticks;
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn loops(&self) -> u64 {
        self.loops
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Action bound to a timer.
pub type TimerAction<O> = Box<dyn FnMut(&mut TimerState, &mut O)>;

/// Interval timer with an owner-addressed action.
pub struct Timer<O: ?Sized> {
    state: TimerState,
    action: TimerAction<O>,
}

impl<O: ?Sized> Timer<O> {
    /// New enabled timer.
    pub fn new(interval: u32, action: impl FnMut(&mut TimerState, &mut O) + 'static) -> Self {
        Self {
            state: TimerState::new(interval),
            action: Box::new(action),
        }
    }

    /// New timer that waits for [`Timer::start`].
    pub fn stopped(interval: u32, action: impl FnMut(&mut TimerState, &mut O) + 'static) -> Self {
        let mut timer = Self::new(interval, action);
        timer.stop();
        timer
    }

    /// Advance by one tick. Returns true if the action fired.
    ///
    /// At most one firing per call, however far `elapsed` has overshot the
    /// interval. The loop counter and elapsed reset are applied before the
    /// action runs, so an action that calls `reset` or `stop` has the last word.
    pub fn tick(&mut self, owner: &mut O) -> bool {
        if !self.state.enabled {
            return false;
        }
        self.state.elapsed += 1;
        if self.state.elapsed < self.state.interval {
            return false;
        }
        self.state.loops += 1;
        self.state.elapsed = 0;
        (self.action)(&mut self.state, owner);
        true
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn start(&mut self) {
        self.state.start();
    }

    pub fn stop(&mut self) {
        self.state.stop();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.set_enabled(enabled);
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn set_interval(&mut self, ticks: u32) {
        self.state.set_interval(ticks);
    }

    pub fn interval(&self) -> u32 {
        self.state.interval
    }

    pub fn elapsed(&self) -> u32 {
        self.state.elapsed
    }

    pub fn loops(&self) -> u64 {
        self.state.loops
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }
}

impl<O: ?Sized> fmt::Debug for Timer<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer").field("state", &self.state).finish_non_exhaustive()
    }
}

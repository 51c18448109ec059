//! Rendering engine hooks
//!
//! Two directions: the registry tells the engine to redraw through
//! [`RenderEngine`], and a panel tells the engine its color buffer was
//! consumed through [`FlushReady`].

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

/// Rendering engine callbacks used by the registry
pub trait RenderEngine {
    /// Request a full redraw of the active screen
    ///
    /// Called when the first display is registered and whenever the active
    /// display changes.
    fn invalidate_screen(&mut self);
}

/// Engines that do not care about redraw requests
impl RenderEngine for () {
    fn invalidate_screen(&mut self) {}
}

impl<E: RenderEngine + ?Sized> RenderEngine for &mut E {
    fn invalidate_screen(&mut self) {
        (**self).invalidate_screen();
    }
}

/// Pending full-redraw flag
///
/// A minimal engine hook for draw loops that poll: the registry sets the
/// flag, the loop takes it and redraws everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RedrawRequest {
    pending: bool,
    /// Total number of requests seen
    requests: u32,
}

impl RedrawRequest {
    pub const fn new() -> Self {
        Self {
            pending: false,
            requests: 0,
        }
    }

    /// Check if a redraw is pending without clearing it
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Take the pending request, clearing it
    pub fn take(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }

    /// Number of redraw requests received so far
    pub fn requests(&self) -> u32 {
        self.requests
    }
}

impl RenderEngine for RedrawRequest {
    fn invalidate_screen(&mut self) {
        self.pending = true;
        self.requests = self.requests.saturating_add(1);
    }
}

/// Flush completion notification
///
/// Raised by a panel driver once the color buffer passed to `map` or
/// `flush` is no longer read, so the engine may render the next frame into
/// it. Implementors are shared with whatever context runs the panel, hence
/// `&self`.
pub trait FlushReady {
    fn flush_ready(&self);
}

/// Engines that render synchronously and never wait
impl FlushReady for () {
    fn flush_ready(&self) {}
}

/// An engine task can `wait()` on the signal or poll it with `try_take()`
impl<M: RawMutex> FlushReady for Signal<M, ()> {
    fn flush_ready(&self) {
        self.signal(());
    }
}

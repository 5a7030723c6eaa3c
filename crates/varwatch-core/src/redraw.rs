//! Coalesced "needs redraw" flag.
//!
//! Any number of requests between two render ticks collapse into the largest
//! pending frame count. The render tick calls [`take_redraw`] once per frame.
//! The flag is per UI thread; watchers never leave it.

use std::cell::Cell;

thread_local! {
    static PENDING_FRAMES: Cell<u8> = const { Cell::new(0) };
}

pub fn request_redraw() {
    request_frames(1);
}

/// Requests two frames; text bounds settle one frame after a text change.
pub fn request_redraw_twice() {
    request_frames(2);
}

fn request_frames(n: u8) {
    PENDING_FRAMES.with(|p| {
        if p.get() < n {
            log::trace!("redraw requested for {n} frame(s)");
            p.set(n);
        }
    });
}

/// Consumes one pending frame. Returns whether the caller should draw.
pub fn take_redraw() -> bool {
    PENDING_FRAMES.with(|p| {
        let n = p.get();
        if n == 0 {
            false
        } else {
            p.set(n - 1);
            true
        }
    })
}

pub fn redraw_pending() -> bool {
    PENDING_FRAMES.with(|p| p.get() > 0)
}

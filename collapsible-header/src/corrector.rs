use crate::ScrollCommand;

/// Where the auto-snap corrector is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapState {
    Idle,
    /// A settle was observed; the corrector inspects the offset once `deadline_ms` passes.
    Pending { deadline_ms: u64 },
    /// A scroll-to command was issued and the scroll container is moving toward `target`.
    Correcting { target: f32 },
}

/// Returns the snap target for a settled `offset`, if the offset sits inside the large header.
///
/// - `0 <= offset < height / 2` snaps back to `0` (large header fully shown).
/// - `height / 2 <= offset < height` snaps forward to `height` (large header fully collapsed).
/// - Anything else, or an unmeasured header (`height <= 0`), is left alone.
pub fn snap_target(offset: f32, large_header_height: f32) -> Option<f32> {
    if large_header_height <= 0.0 {
        return None;
    }
    let half = large_header_height / 2.0;
    if offset >= half && offset < large_header_height {
        Some(large_header_height)
    } else if offset >= 0.0 && offset < half {
        Some(0.0)
    } else {
        None
    }
}

/// A debounced, cancellable post-gesture scroll corrector.
///
/// Adapters drive it with:
/// - `schedule(now_ms)` on drag end / momentum end (restarts the debounce window)
/// - `cancel()` on drag begin / momentum begin
/// - `poll(now_ms, ..)` each frame/timer tick
///
/// ```text
/// Idle --schedule--> Pending --deadline--> Correcting --offset reached--> Idle
///   ^                  |  ^                   |
///   +------cancel------+  +-----schedule------+
/// ```
#[derive(Clone, Debug)]
pub struct AutoSnapCorrector {
    delay_ms: u64,
    disabled: bool,
    state: SnapState,
}

impl AutoSnapCorrector {
    pub fn new(delay_ms: u64, disabled: bool) -> Self {
        Self {
            delay_ms,
            disabled,
            state: SnapState::Idle,
        }
    }

    pub fn state(&self) -> SnapState {
        self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SnapState::Pending { .. })
    }

    /// Restarts the settle window at `now_ms`.
    pub fn schedule(&mut self, now_ms: u64) {
        if self.disabled {
            return;
        }
        let deadline_ms = now_ms.saturating_add(self.delay_ms);
        hdebug!(now_ms, deadline_ms, "AutoSnapCorrector::schedule");
        self.state = SnapState::Pending { deadline_ms };
    }

    /// Drops a pending correction and forgets any correction in flight.
    ///
    /// Returns `true` if a pending correction was cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        if was_pending {
            hdebug!("AutoSnapCorrector::cancel: pending correction dropped");
        }
        self.state = SnapState::Idle;
        was_pending
    }

    /// Fires the correction once the settle window has elapsed.
    ///
    /// Returns a scroll command when the settled `offset` lies inside `[0, large_header_height)`.
    pub fn poll(
        &mut self,
        now_ms: u64,
        offset: f32,
        large_header_height: f32,
    ) -> Option<ScrollCommand> {
        let SnapState::Pending { deadline_ms } = self.state else {
            return None;
        };
        if now_ms < deadline_ms {
            return None;
        }
        if self.disabled {
            self.state = SnapState::Idle;
            return None;
        }
        match snap_target(offset, large_header_height) {
            Some(target) if target != offset => {
                hdebug!(offset, target, "AutoSnapCorrector: snapping");
                self.state = SnapState::Correcting { target };
                Some(ScrollCommand {
                    offset: target,
                    animated: true,
                })
            }
            _ => {
                htrace!(offset, large_header_height, "AutoSnapCorrector: no correction");
                self.state = SnapState::Idle;
                None
            }
        }
    }

    /// Observes a scroll offset; a correction in flight completes once it reaches its target.
    pub fn observe_offset(&mut self, offset: f32) {
        if let SnapState::Correcting { target } = self.state {
            if offset == target {
                self.state = SnapState::Idle;
            }
        }
    }
}

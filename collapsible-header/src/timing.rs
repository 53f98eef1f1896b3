/// Easing curves for time-based transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// The default curve for header fades.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u) / 2.0
                }
            }
        }
    }
}

/// A fixed-duration transition between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = elapsed as f32 / self.duration_ms as f32;
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }

    pub fn retarget(&mut self, now_ms: u64, new_to: f32, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

/// A value that eases toward a target over a fixed duration.
///
/// The value only moves when [`AnimatedValue::tick`] is called with the current frame time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
}

impl AnimatedValue {
    pub fn new(initial: f32, duration_ms: u64, easing: Easing) -> Self {
        Self {
            value: initial,
            tween: None,
            duration_ms,
            easing,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The value this animation settles on.
    pub fn target(&self) -> f32 {
        match self.tween {
            Some(t) => t.to,
            None => self.value,
        }
    }

    /// Starts easing toward `target`, beginning at the current value.
    ///
    /// A transition already heading to `target` keeps running unchanged. Returns `true` when a
    /// new transition was started.
    pub fn animate_to(&mut self, target: f32, now_ms: u64) -> bool {
        if self.target() == target {
            return false;
        }
        let from = self.sample(now_ms);
        self.value = from;
        self.tween = Some(Tween::new(from, target, now_ms, self.duration_ms, self.easing));
        true
    }

    /// Jumps to `value`, dropping any running transition.
    pub fn set_immediate(&mut self, value: f32) {
        self.tween = None;
        self.value = value;
    }

    /// Advances to `now_ms` and returns the current value.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        self.value = self.sample(now_ms);
        if self.tween.is_some_and(|t| t.is_done(now_ms)) {
            self.tween = None;
        }
        self.value
    }

    fn sample(&self, now_ms: u64) -> f32 {
        match self.tween {
            Some(t) => t.sample(now_ms),
            None => self.value,
        }
    }
}

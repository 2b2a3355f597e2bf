/// A call-counting trigger: [`Pulse::tick`] returns true once every `count`
/// calls.
///
/// With the default start value the very first call fires immediately, the
/// next fire comes after `initial_count` calls (which defaults to `count`)
/// and every later fire after `count` calls. Useful to run something every
/// N frames from inside an update loop.
///
/// The counters are signed on purpose: a non-positive `count` makes the
/// reload check pass on every call, which some callers rely on.
#[derive(Debug, Clone)]
pub struct Pulse {
    count: i32,
    initial_count: i32,
    once: bool,
    start_value: i32,

    calls: i32,
    first_call: bool,
}

impl Pulse {
    pub fn new(count: i32) -> Self {
        Self {
            count,
            initial_count: count,
            once: false,
            start_value: 0,
            calls: 0,
            first_call: true,
        }
    }

    /// Sets the number of calls between the first fire and the second,
    /// defaults to `count`
    #[inline]
    pub fn with_initial_count(mut self, initial_count: i32) -> Self {
        self.initial_count = initial_count;
        self
    }

    /// Fire on the first qualifying call only, never again
    #[inline]
    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Sets the countdown offset before the first fire, defaults to 0
    /// (fire on the first call)
    #[inline]
    pub fn with_start_value(mut self, start_value: i32) -> Self {
        self.start_value = start_value;
        self.calls = start_value;
        self
    }

    /// Count one call, returns true when this call fires
    pub fn tick(&mut self) -> bool {
        if !self.first_call && self.once {
            return false;
        }

        self.calls -= 1;
        if self.calls <= 0 {
            self.calls = if self.first_call {
                self.initial_count
            } else {
                self.count
            };
            self.first_call = false;
            return true;
        }

        false
    }

    /// Reinstate the pre-first-call state. `override_start_value` replaces
    /// the configured start value for this cycle only
    pub fn reset(&mut self, override_start_value: Option<i32>) {
        self.calls = override_start_value.unwrap_or(self.start_value);
        self.first_call = true;
    }

    /// Tick while `condition` holds, reset (and return false) otherwise
    pub fn tick_or_reset(&mut self, condition: bool) -> bool {
        if condition {
            return self.tick();
        }
        self.reset(None);
        false
    }
}

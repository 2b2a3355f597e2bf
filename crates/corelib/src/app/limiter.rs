use spin_sleep_util::Interval;
use std::time::Duration;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LimitMode {
    Target(Duration),
    #[default]
    Disabled,
}

impl LimitMode {
    #[inline]
    pub fn from_fps(fps: f64) -> Self {
        LimitMode::Target(Duration::from_secs_f64(1.0 / fps))
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, LimitMode::Disabled)
    }
}

pub(super) struct FpsLimiter {
    mode: LimitMode,
    interval: Interval,
}

impl FpsLimiter {
    #[inline]
    pub fn new(mode: LimitMode) -> Self {
        let dt = match mode {
            LimitMode::Target(dt) => dt,
            LimitMode::Disabled => Duration::from_secs_f64(1.0 / 60.0),
        };

        if mode.is_enabled() {
            log::debug!("FpsLimiter enabled with mode={mode:?}");
        }

        FpsLimiter {
            mode,
            interval: spin_sleep_util::interval(dt),
        }
    }

    /// Blocks for the remainder of the frame's time budget
    #[inline(always)]
    pub fn tick(&mut self) {
        let is_enabled = self.mode.is_enabled();
        if !is_enabled {
            return;
        }

        self.interval.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn limit_mode_is_enabled() {
        assert!(LimitMode::Target(Duration::from_secs(1)).is_enabled());
        assert!(!LimitMode::Disabled.is_enabled());
    }

    #[test]
    fn from_fps_computes_inverse() {
        let fps = 30.0;
        let mode = LimitMode::from_fps(fps);
        assert!(matches!(mode, LimitMode::Target(_)));

        if let LimitMode::Target(d) = mode {
            let expected = 1.0 / fps;
            let actual = d.as_secs_f64();
            assert!(
                (actual - expected).abs() < EPS,
                "got {actual}, expected {expected}"
            );
        }
    }

    #[test]
    fn tick_does_not_block_when_disabled() {
        let mut limiter = FpsLimiter::new(LimitMode::Disabled);
        limiter.tick();
    }
}

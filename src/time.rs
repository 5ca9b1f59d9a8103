//! Delta-time providers for the frame loop.

use crate::float::Float;

/// Produces the time elapsed since the previous tick, in seconds.
///
/// Implementations never return a negative value.
pub trait TimeSource<F: Float> {
    fn tick(&mut self) -> F;
}

/// Returns the same step on every tick. Deterministic, `no_std`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedTimeSource<F: Float> {
    dt: F,
}

impl<F: Float> FixedTimeSource<F> {
    /// Negative steps are clamped to zero.
    pub fn new(dt: F) -> Self {
        FixedTimeSource { dt: dt.max(F::zero()) }
    }

    /// Step for a fixed tick rate, e.g. `from_rate(60.0)`.
    pub fn from_rate(hz: F) -> Self {
        if hz > F::zero() {
            Self::new(F::one() / hz)
        } else {
            Self::new(F::zero())
        }
    }

    pub fn dt(&self) -> F { self.dt }
}

impl<F: Float> TimeSource<F> for FixedTimeSource<F> {
    fn tick(&mut self) -> F {
        self.dt
    }
}

/// Wall-clock time source backed by [`std::time::Instant`].
///
/// The first tick returns zero; every later tick returns the time since
/// the previous one.
#[cfg(feature = "std")]
#[derive(Clone, Debug, Default)]
pub struct RealTimeSource {
    last: Option<std::time::Instant>,
}

#[cfg(feature = "std")]
impl RealTimeSource {
    pub fn new() -> Self {
        RealTimeSource { last: None }
    }
}

#[cfg(feature = "std")]
impl<F: Float> TimeSource<F> for RealTimeSource {
    fn tick(&mut self) -> F {
        let now = std::time::Instant::now();
        match self.last.replace(now) {
            Some(prev) => F::from_f64(now.saturating_duration_since(prev).as_secs_f64()),
            None => F::zero(),
        }
    }
}

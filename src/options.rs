use crate::error::GispError;

/// The bundle of constraints and knobs a mining run is configured with.
///
/// Built once by the caller and threaded by reference through the Miner,
/// Projector and Counter (spec §4.4). Unbounded upper bounds are represented
/// with `i64::MAX`; unset lower bounds default to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GispOptions {
    pub min_support: u64,
    pub min_interval: i64,
    pub max_interval: i64,
    pub min_whole_interval: i64,
    pub max_whole_interval: i64,
    /// Emit heavier per-frame diagnostics through `tracing`. Baseline trace
    /// spans are emitted regardless; this only gates the expensive ones.
    pub trace: bool,
}

impl GispOptions {
    pub fn new(min_support: u64) -> Self {
        Self {
            min_support,
            min_interval: 0,
            max_interval: i64::MAX,
            min_whole_interval: 0,
            max_whole_interval: i64::MAX,
            trace: false,
        }
    }

    pub fn with_interval_bounds(mut self, min_interval: i64, max_interval: i64) -> Self {
        self.min_interval = min_interval;
        self.max_interval = max_interval;
        self
    }

    pub fn with_whole_interval_bounds(mut self, min_whole_interval: i64, max_whole_interval: i64) -> Self {
        self.min_whole_interval = min_whole_interval;
        self.max_whole_interval = max_whole_interval;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Rejects inverted bounds and non-positive support up front, so that
    /// mining itself never has to handle a malformed configuration.
    pub fn validate(&self) -> Result<(), GispError> {
        if self.min_support == 0 {
            return Err(GispError::NonPositiveMinSupport(self.min_support));
        }
        if self.min_interval > self.max_interval {
            return Err(GispError::InvertedIntervalBound {
                min: self.min_interval,
                max: self.max_interval,
            });
        }
        if self.min_whole_interval > self.max_whole_interval {
            return Err(GispError::InvertedWholeIntervalBound {
                min: self.min_whole_interval,
                max: self.max_whole_interval,
            });
        }
        Ok(())
    }
}

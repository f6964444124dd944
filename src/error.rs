use thiserror::Error;

/// Configuration-error taxonomy for the mining engine (spec §7).
///
/// These are the only errors the engine can produce: mining over
/// already-validated options is total (§7, §4.4 "Failure semantics").
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GispError {
    #[error("min_support must be a positive integer, got {0}")]
    NonPositiveMinSupport(u64),

    #[error("min_interval ({min}) is greater than max_interval ({max})")]
    InvertedIntervalBound { min: i64, max: i64 },

    #[error("min_whole_interval ({min}) is greater than max_whole_interval ({max})")]
    InvertedWholeIntervalBound { min: i64, max: i64 },
}

//! Request timestamps for Fadada API authentication.
//!
//! Every request carries a `timestamp` parameter in `YYYYMMDDHHMMSS` form,
//! which also feeds the time digest of the request signature.

use time::format_description::BorrowedFormatItem;
use time::macros::{format_description, offset};
use time::{OffsetDateTime, UtcOffset};

/// Wire format of the `timestamp` parameter.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day][hour][minute][second]");

/// Offset of the provider's clock (China Standard Time).
pub const PROVIDER_OFFSET: UtcOffset = offset!(+8);

/// Trait for providing request timestamps.
pub trait TimestampProvider: Send + Sync {
    /// Current timestamp formatted as `YYYYMMDDHHMMSS`.
    fn timestamp(&self) -> String;
}

/// Timestamp provider backed by the system clock.
///
/// The UTC offset is fixed when the provider is created. On Unix `time` cannot
/// read the local offset once the process runs more than one thread.
#[derive(Debug, Clone, Copy)]
pub struct SystemTimestamp {
    offset: UtcOffset,
}

impl SystemTimestamp {
    /// Create a provider at the local offset.
    ///
    /// Falls back to [`PROVIDER_OFFSET`] with a warning when the local offset
    /// cannot be determined.
    pub fn new() -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                fallback = %PROVIDER_OFFSET,
                "Local UTC offset unavailable, using provider offset for timestamps"
            );
            PROVIDER_OFFSET
        });
        Self { offset }
    }

    /// Create a provider that formats time at a fixed UTC offset.
    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// The offset timestamps are rendered at.
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Default for SystemTimestamp {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampProvider for SystemTimestamp {
    fn timestamp(&self) -> String {
        format_timestamp(OffsetDateTime::now_utc().to_offset(self.offset))
    }
}

/// Timestamp provider that always returns the same value.
///
/// Useful for reproducing a known request signature.
#[derive(Debug, Clone)]
pub struct FixedTimestamp(String);

impl FixedTimestamp {
    /// Create a provider returning `timestamp` verbatim.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl TimestampProvider for FixedTimestamp {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

/// Format a point in time as `YYYYMMDDHHMMSS`.
pub fn format_timestamp(moment: OffsetDateTime) -> String {
    // The format only contains numeric components, which cannot fail to render.
    moment.format(TIMESTAMP_FORMAT).unwrap_or_default()
}

//! Domain-specific newtypes for type safety.
//!
//! Play counts and durations travel through the aggregator as plain
//! integers at the database boundary. These wrappers keep the two from
//! being mixed up once they are inside the report pipeline.

use std::iter::Sum;
use std::ops::AddAssign;

use derive_more::{Add as DeriveAdd, Display};

/// Milliseconds in one hour.
const MS_PER_HOUR: f64 = 3_600_000.0;

/// Generates the accessors shared by the numeric newtypes.
macro_rules! impl_newtype_common {
    ($type:ty, $inner:ty) => {
        impl $type {
            /// Create a new instance.
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Get the inner value.
            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }

            /// Check if the value is zero.
            #[must_use]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }
        }

        impl AddAssign for $type {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::default(), |acc, item| acc + item)
            }
        }
    };
}

// ============================================================================
// PlayCount
// ============================================================================

/// Number of plays that fell into one group (a song, an artist, a month...).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, DeriveAdd, Display,
)]
pub struct PlayCount(pub u64);

impl_newtype_common!(PlayCount, u64);

impl PlayCount {
    /// Count a single play.
    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

// ============================================================================
// Milliseconds
// ============================================================================

/// A track length in milliseconds.
///
/// Accumulated in 64 bits so that a full year of a large library cannot
/// overflow the total.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, DeriveAdd, Display,
)]
pub struct Milliseconds(pub u64);

impl_newtype_common!(Milliseconds, u64);

impl Milliseconds {
    /// Build from a database value. Negative lengths are treated as unknown.
    #[must_use]
    pub fn from_db(value: Option<i64>) -> Self {
        value
            .and_then(|ms| u64::try_from(ms).ok())
            .map_or_else(Self::default, Self)
    }

    /// Convert to hours as a floating point value.
    #[must_use]
    pub fn as_hours_f64(self) -> f64 {
        self.0 as f64 / MS_PER_HOUR
    }

    /// Format as a track length, `m:ss`. Zero renders as an empty string.
    #[must_use]
    pub fn to_track_length(self) -> String {
        if self.is_zero() {
            return String::new();
        }
        let total_seconds = self.0 / 1000;
        format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
    }
}

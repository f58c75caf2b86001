use crate::{bounds::Bounds, pattern::PatternValueType, series::SeriesWithStep};
use std::{
    fmt::{self, Binary, Display},
    ops::{BitOr, BitOrAssign},
};

/// Compiled field of a schedule: set of permitted values packed into `u64`.
///
/// Bit `i` is set if value `i` is permitted. The highest bit ([`FieldMask::STAR_BIT`])
/// marks a field which was written as a wildcard (`*` or `?`); consumers use it to decide
/// whether day of month and day of week restrict the schedule together or independently.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldMask(u64);

impl FieldMask {
    /// Wildcard marker bit.
    pub const STAR_BIT: u64 = 1 << 63;

    /// Wraps raw bits.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw bits, including the wildcard marker.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the field was specified as a wildcard.
    #[inline]
    pub const fn is_wildcard(&self) -> bool {
        self.0 & Self::STAR_BIT != 0
    }

    /// Returns `true` if `value` is permitted.
    #[inline]
    pub const fn contains(&self, value: u8) -> bool {
        value < 63 && self.0 & (1 << value) != 0
    }

    /// Iterates over permitted values in ascending order, wildcard marker excluded.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        (0..63).filter(|v| self.contains(*v))
    }

    /// Single value.
    #[inline]
    pub(crate) const fn single(value: u8) -> Self {
        Self(1 << value)
    }

    /// Every legal value of the field plus the wildcard marker.
    pub(crate) fn all(bounds: &Bounds) -> Self {
        Self::range(bounds.min.into(), bounds.max.into(), 1) | Self(Self::STAR_BIT)
    }

    /// Values in `[start, end]` taken with `step`.
    ///
    /// Caller is responsible to ensure `start <= end < 63` and `step > 0`.
    pub(crate) fn range(start: PatternValueType, end: PatternValueType, step: PatternValueType) -> Self {
        if step == 1 {
            let upper = u64::MAX.checked_shl(end + 1).unwrap_or(0);
            let lower = u64::MAX.checked_shl(start).unwrap_or(0);
            Self(!upper & lower)
        } else {
            Self(
                SeriesWithStep::new(start, end, step)
                    .filter_map(|v| 1u64.checked_shl(v))
                    .fold(0, |bits, bit| bits | bit),
            )
        }
    }

    #[inline]
    pub(crate) const fn with_star(self, star: bool) -> Self {
        if star {
            Self(self.0 | Self::STAR_BIT)
        } else {
            self
        }
    }
}

impl BitOr for FieldMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FieldMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<FieldMask> for u64 {
    fn from(value: FieldMask) -> Self {
        value.0
    }
}

impl Binary for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Binary::fmt(&self.0, f)
    }
}

/// Lists permitted values, `*` prefix marks a wildcard: `*0,1,2`, `5,20,35,50`.
impl Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            write!(f, "*")?;
        }
        let values = self.values().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        write!(f, "{values}")
    }
}

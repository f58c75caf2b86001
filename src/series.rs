//! Generator of stepped numbers series.
use crate::pattern::PatternValueType;

/// Generator (iterator) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SeriesWithStep {
    max: PatternValueType,
    step: PatternValueType,
    next: Option<PatternValueType>,
}

impl SeriesWithStep {
    /// Produces `min, min + step, min + 2 * step, ...` up to `max` inclusively.
    ///
    /// Panics if `step` is zero or `max` is less than `min`.
    #[inline]
    pub(crate) fn new(min: PatternValueType, max: PatternValueType, step: PatternValueType) -> Self {
        if max < min {
            panic!("max value is less than min value");
        }

        if step == 0 {
            panic!("step value is 0");
        }

        Self {
            max,
            step,
            next: Some(min),
        }
    }
}

impl Iterator for SeriesWithStep {
    type Item = PatternValueType;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|v| *v <= self.max)?;
        // huge steps just end the series
        self.next = current.checked_add(self.step);
        Some(current)
    }
}

//! Rate table construction from clock-hour intervals.

use crate::plan::clock::{HOURS_PER_DAY, HourMap};
use crate::plan::types::RateInterval;

/// Dense internal-hour to unit-rate lookup for one day.
///
/// Built once from caller-supplied [`RateInterval`]s and read-only afterward.
/// Intervals are applied in order with last-write-wins on overlap, so a
/// sequence that exactly partitions the 24 clock hours yields a fully
/// determinate table. Hours no interval covers stay undefined; any slot
/// search touching them treats the candidate as infeasible.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: [Option<f32>; HOURS_PER_DAY],
}

impl RateTable {
    /// Expands `intervals` into a dense internal-hour lookup.
    ///
    /// Each interval spans clock hours `[from, to)`, or `[from, 24) ∪ [0, to)`
    /// when `to <= from` (wrapping past midnight). Every spanned clock hour is
    /// mapped through `hours` and written at its internal index, overwriting
    /// any earlier interval's value.
    pub fn from_intervals(intervals: &[RateInterval], hours: HourMap) -> Self {
        let mut rates = [None; HOURS_PER_DAY];
        for interval in intervals {
            for clock_hour in interval_clock_hours(interval) {
                rates[hours.to_internal(clock_hour)] = Some(interval.value);
            }
        }
        Self { rates }
    }

    /// Returns the rate at `internal_hour`, or `None` when no interval
    /// covered it.
    pub fn get(&self, internal_hour: usize) -> Option<f32> {
        self.rates[internal_hour]
    }

    /// Returns `true` when all 24 internal hours have a defined rate.
    pub fn is_complete(&self) -> bool {
        self.rates.iter().all(Option::is_some)
    }

    /// Number of internal hours without a defined rate.
    pub fn undefined_hour_count(&self) -> usize {
        self.rates.iter().filter(|rate| rate.is_none()).count()
    }
}

/// Clock hours spanned by `interval`, in increasing order starting at `from`.
fn interval_clock_hours(interval: &RateInterval) -> impl Iterator<Item = u32> {
    let (head, tail) = if interval.to > interval.from {
        (interval.from..interval.to, 0..0)
    } else {
        (interval.from..HOURS_PER_DAY as u32, 0..interval.to)
    };
    head.chain(tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(from: u32, to: u32, value: f32) -> RateInterval {
        RateInterval { from, to, value }
    }

    #[test]
    fn single_wrapping_interval_covers_whole_day() {
        let table = RateTable::from_intervals(&[interval(7, 7, 1.0)], HourMap::default());
        assert!(table.is_complete());
        for hour in 0..HOURS_PER_DAY {
            assert_eq!(table.get(hour), Some(1.0));
        }
    }

    #[test]
    fn exact_partition_fills_all_hours() {
        // The sample tariff: five intervals tiling the full day.
        let intervals = [
            interval(7, 10, 6.46),
            interval(10, 17, 5.38),
            interval(17, 21, 6.46),
            interval(21, 23, 5.38),
            interval(23, 7, 1.79),
        ];
        let table = RateTable::from_intervals(&intervals, HourMap::default());
        assert!(table.is_complete());
        assert_eq!(table.undefined_hour_count(), 0);

        // Clock 7..10 lands at internal 0..3.
        assert_eq!(table.get(0), Some(6.46));
        assert_eq!(table.get(2), Some(6.46));
        // Clock 10..17 lands at internal 3..10.
        assert_eq!(table.get(3), Some(5.38));
        assert_eq!(table.get(9), Some(5.38));
        // Clock 17..21 lands at internal 10..14.
        assert_eq!(table.get(10), Some(6.46));
        assert_eq!(table.get(13), Some(6.46));
        // Clock 21..23 lands at internal 14..16.
        assert_eq!(table.get(14), Some(5.38));
        assert_eq!(table.get(15), Some(5.38));
        // Clock 23..7 wraps past midnight to internal 16..24.
        assert_eq!(table.get(16), Some(1.79));
        assert_eq!(table.get(23), Some(1.79));
    }

    #[test]
    fn later_interval_wins_on_overlap() {
        let intervals = [interval(7, 7, 2.0), interval(9, 11, 5.0)];
        let table = RateTable::from_intervals(&intervals, HourMap::default());
        // Clock 9 and 10 (internal 2 and 3) were overwritten.
        assert_eq!(table.get(2), Some(5.0));
        assert_eq!(table.get(3), Some(5.0));
        assert_eq!(table.get(4), Some(2.0));
        assert_eq!(table.get(0), Some(2.0));
    }

    #[test]
    fn partial_coverage_leaves_hours_undefined() {
        // Clock 7..19 covers internal 0..12; the other half stays undefined.
        let table = RateTable::from_intervals(&[interval(7, 19, 1.0)], HourMap::default());
        assert!(!table.is_complete());
        assert_eq!(table.undefined_hour_count(), 12);
        assert_eq!(table.get(0), Some(1.0));
        assert_eq!(table.get(11), Some(1.0));
        assert_eq!(table.get(12), None);
        assert_eq!(table.get(23), None);
    }

    #[test]
    fn empty_interval_list_defines_nothing() {
        let table = RateTable::from_intervals(&[], HourMap::default());
        assert_eq!(table.undefined_hour_count(), HOURS_PER_DAY);
    }
}

//! In-place quicksort over inclusive index ranges, with two pivot
//! strategies sharing one partition primitive.
//!
//! [`Quicksort::quick_sort1`] pivots on the last element of the range —
//! Θ(n log n) on average but Θ(n²) on sorted or adversarial input.
//! [`Quicksort::quick_sort2`] pivots on the true median, found with the
//! deterministic median-of-medians selection algorithm, for a guaranteed
//! Θ(n log n) worst case at the cost of the linear selection pass per level.
//!
//! The engine counts elements examined during partitioning scans (and only
//! those — the small sorts inside `select` are not counted), which is the
//! quantity the two variants are compared on.

/// Sort engine carrying the partition-scan counter.
///
/// The counter is the only state; methods take `&mut self`, so one engine
/// cannot run two sorts concurrently. Create one engine per measured run,
/// or call [`reset_comparison_count`](Quicksort::reset_comparison_count)
/// between runs.
#[derive(Debug, Default)]
pub struct Quicksort {
    comparison_count: u64,
}

impl Quicksort {
    /// New engine with a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Quicksort `array[start..=end]` pivoting on the last element.
    ///
    /// Pass `start = 0`, `end = len - 1` to sort a whole non-empty array;
    /// ranges with `start >= end` (including empty and single-element
    /// arrays via `(0, 0)`) do no work.
    ///
    /// # Panics
    /// If `start < end` and `end` is out of bounds.
    pub fn quick_sort1(&mut self, array: &mut [i64], start: usize, end: usize) {
        if start >= end {
            return;
        }
        assert!(
            end < array.len(),
            "invalid range: end {} out of bounds for length {}",
            end,
            array.len()
        );
        let q = self.partition(array, start, end, array[end]);
        if q > start {
            self.quick_sort1(array, start, q - 1);
        }
        self.quick_sort1(array, q + 1, end);
    }

    /// Quicksort `array[start..=end]` pivoting on the median of the range,
    /// found with [`select`](Quicksort::select). Same range conventions as
    /// [`quick_sort1`](Quicksort::quick_sort1).
    ///
    /// # Panics
    /// If `start < end` and `end` is out of bounds.
    pub fn quick_sort2(&mut self, array: &mut [i64], start: usize, end: usize) {
        if start >= end {
            return;
        }
        assert!(
            end < array.len(),
            "invalid range: end {} out of bounds for length {}",
            end,
            array.len()
        );
        // lower median for even-length ranges
        let pivot = self.select(array, start, end, (end - start + 1) / 2);
        let q = self.partition(array, start, end, pivot);
        if q > start {
            self.quick_sort2(array, start, q - 1);
        }
        self.quick_sort2(array, q + 1, end);
    }

    /// Return the `k`-th smallest value (0-indexed) in `array[start..=end]`
    /// by median-of-medians quickselect. Θ(n) worst case.
    ///
    /// Reorders the range as a side effect; partitions performed here are
    /// counted like any other.
    ///
    /// # Panics
    /// If the range is invalid or `k > end - start`.
    pub fn select(&mut self, array: &mut [i64], start: usize, end: usize, k: usize) -> i64 {
        assert!(
            start <= end && end < array.len(),
            "invalid range: [{}, {}] for length {}",
            start,
            end,
            array.len()
        );
        let n = end - start + 1;
        assert!(k < n, "order {} out of range for {} elements", k, n);

        // Not enough elements for a full group of 5: sort directly.
        if n <= 5 {
            array[start..=end].sort_unstable();
            return array[start + k];
        }

        // Sort each full group of 5 and stage its median at the front of
        // the range. Remainder elements past the last full group stay put.
        let groups = n / 5;
        for g in 0..groups {
            let group_start = start + g * 5;
            array[group_start..group_start + 5].sort_unstable();
            array.swap(start + g, group_start + 2);
        }

        let median_of_medians = self.select(array, start, start + groups - 1, groups / 2);
        let position = self.partition(array, start, end, median_of_medians);

        if position == start + k {
            array[position]
        } else if position > start + k {
            self.select(array, start, position - 1, k)
        } else {
            let num_smaller = position - start + 1;
            self.select(array, position + 1, end, k - num_smaller)
        }
    }

    /// Lomuto partition of `array[start..=end]` around `pivot`, shared by
    /// both sort variants. Returns the pivot's final index.
    ///
    /// The pivot is given by value: if it is not already at `end`, its
    /// first occurrence in the range is swapped there. The counter is
    /// incremented once per index visited by the scan, so each call adds
    /// exactly `end - start`. Elements equal to the pivot land on the `≤`
    /// side.
    fn partition(&mut self, array: &mut [i64], start: usize, end: usize, pivot: i64) -> usize {
        if array[end] != pivot {
            for i in start..=end {
                if array[i] == pivot {
                    array.swap(i, end);
                    break;
                }
            }
        }
        assert!(
            array[end] == pivot,
            "pivot value {} not found in [{}, {}]",
            pivot,
            start,
            end
        );

        // `lower` is the slot for the next element <= pivot, i.e. one past
        // the boundary of the "<=" region.
        let mut lower = start;
        for upper in start..end {
            if array[upper] <= pivot {
                array.swap(lower, upper);
                lower += 1;
            }
            self.comparison_count += 1;
        }

        array.swap(lower, end);
        lower
    }

    /// Elements examined during partitioning scans since the last reset.
    pub fn comparison_count(&self) -> u64 {
        self.comparison_count
    }

    /// Zero the counter for a fresh measured run.
    pub fn reset_comparison_count(&mut self) {
        self.comparison_count = 0;
    }
}

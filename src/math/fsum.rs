//! Exactly rounded floating-point summation.
//!
//! Keeps a list of non-overlapping partial sums (Shewchuk's algorithm) so
//! the final result is the correctly rounded value of the exact sum,
//! regardless of the magnitudes or order of the inputs.
//!
//! If a partial sum of finite inputs overflows, the result saturates to
//! `±inf` with the sign of the overflow, even if later terms would bring the
//! exact sum back into range.

/// Accumulator for exactly rounded summation.
#[derive(Debug, Clone, Default)]
pub struct FSum {
    partials: Vec<f64>,
    special: f64,
    has_special: bool,
}

impl FSum {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the running sum.
    pub fn add(&mut self, value: f64) {
        if !value.is_finite() {
            // inf + -inf must come out as nan, so non-finite terms are summed apart.
            self.special += value;
            self.has_special = true;
            return;
        }

        let mut x = value;
        let mut i = 0;
        for j in 0..self.partials.len() {
            let mut y = self.partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            if !hi.is_finite() {
                self.special += hi;
                self.has_special = true;
                return;
            }
            let lo = y - (hi - x);
            if lo != 0.0 {
                self.partials[i] = lo;
                i += 1;
            }
            x = hi;
        }
        self.partials.truncate(i);
        self.partials.push(x);
    }

    /// Returns the correctly rounded sum of everything added so far.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn value(&self) -> f64 {
        if self.has_special {
            return self.special;
        }

        let p = &self.partials;
        let mut n = p.len();
        if n == 0 {
            return 0.0;
        }

        n -= 1;
        let mut hi = p[n];
        let mut lo = 0.0;
        while n > 0 {
            let x = hi;
            n -= 1;
            let y = p[n];
            hi = x + y;
            let yr = hi - x;
            lo = y - yr;
            if lo != 0.0 {
                break;
            }
        }

        // Round half-even across the boundary of the last two partials.
        if n > 0 && ((lo < 0.0 && p[n - 1] < 0.0) || (lo > 0.0 && p[n - 1] > 0.0)) {
            let y = lo * 2.0;
            let x = hi + y;
            let yr = x - hi;
            if y == yr {
                hi = x;
            }
        }
        hi
    }
}

impl Extend<f64> for FSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for FSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Sums the values with exact rounding.
#[must_use]
pub fn fsum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().collect::<FSum>().value()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert!(fsum(std::iter::empty()) == 0.0);
    }

    #[test]
    fn tenths_sum_exactly() {
        let naive: f64 = std::iter::repeat(0.1).take(10).sum();
        assert!(naive != 1.0);
        assert!(fsum(std::iter::repeat(0.1).take(10)) == 1.0);
    }

    #[test]
    fn cancellation_keeps_small_terms() {
        let s = fsum([1e100, 1.0, -1e100, 1e-100, 1e50, -1.0, -1e50]);
        assert!(s == 1e-100, "s={s}");
    }

    #[test]
    fn order_does_not_matter() {
        let a = fsum([1e16, 1.0, -1e16, 3.5]);
        let b = fsum([3.5, -1e16, 1.0, 1e16]);
        assert!(a == b);
        assert!(a == 4.5);
    }

    #[test]
    fn non_finite_terms_propagate() {
        assert!(fsum([1.0, f64::INFINITY]) == f64::INFINITY);
        assert!(fsum([f64::INFINITY, f64::NEG_INFINITY]).is_nan());
        assert!(fsum([f64::NAN, 2.0]).is_nan());
    }

    #[test]
    fn overflow_saturates_to_infinity() {
        assert!(fsum([1e308, 1e308]) == f64::INFINITY);
        assert!(fsum([-1e308, -1e308, 1.0]) == f64::NEG_INFINITY);
        assert!(fsum([f64::MAX, f64::MAX, f64::NEG_INFINITY]).is_nan());

        let mut acc = FSum::new();
        acc.extend([1e308, 1e308]);
        acc.add(-1.0);
        assert!(acc.value() == f64::INFINITY);
    }

    #[test]
    fn accumulator_is_incremental() {
        let mut acc = FSum::new();
        acc.add(0.5);
        acc.extend([0.25, 0.25]);
        assert!(acc.value() == 1.0);
        acc.add(-1.0);
        assert!(acc.value() == 0.0);
    }
}

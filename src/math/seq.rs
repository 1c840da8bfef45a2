//! Sequence helpers: running aggregates, index permutations and LCM.
//!
//! These are standalone utilities for callers of the kernel; nothing in
//! [`crate::geometry`] depends on them.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Add;

use crate::error::{Result, SequenceError};

/// Running maximum, seeded with `first`.
///
/// Pass `f64::NEG_INFINITY` as the seed for a plain running maximum of floats.
#[must_use]
pub fn cummax<T, I>(values: I, first: T) -> Vec<T>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut current = first;
    values
        .into_iter()
        .map(|v| {
            current = if current > v { current } else { v };
            current
        })
        .collect()
}

/// Running minimum, seeded with `first`.
///
/// Pass `f64::INFINITY` as the seed for a plain running minimum of floats.
#[must_use]
pub fn cummin<T, I>(values: I, first: T) -> Vec<T>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut current = first;
    values
        .into_iter()
        .map(|v| {
            current = if current < v { current } else { v };
            current
        })
        .collect()
}

/// Running sum.
#[must_use]
pub fn cumsum<T, I>(values: I) -> Vec<T>
where
    T: Add<Output = T> + Default + Copy,
    I: IntoIterator<Item = T>,
{
    let mut total = T::default();
    values
        .into_iter()
        .map(|v| {
            total = total + v;
            total
        })
        .collect()
}

/// Prime factorization by trial division, ascending with multiplicity.
///
/// `0` and `1` have no prime factors.
#[must_use]
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }
    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }
    let mut d = 3;
    while d <= n / d {
        while n % d == 0 {
            factors.push(d);
            n /= d;
        }
        d += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Least common multiple of `values`, built from the highest power of
/// each prime that appears in any factorization.
///
/// With `Some(modulus)` the result is reduced modulo `modulus`, which keeps
/// the computation exact for inputs whose LCM would not fit in a `u64`.
/// An empty input yields `1` (reduced by the modulus, if any).
///
/// # Errors
///
/// - [`SequenceError::NonPositive`] if any value is zero.
/// - [`SequenceError::ZeroModulus`] if the modulus is zero.
/// - [`SequenceError::Overflow`] if the unreduced LCM exceeds `u64::MAX`.
pub fn lcm<I>(values: I, modulus: Option<u64>) -> Result<u64>
where
    I: IntoIterator<Item = u64>,
{
    if modulus == Some(0) {
        return Err(SequenceError::ZeroModulus.into());
    }

    let mut exponents: BTreeMap<u64, u32> = BTreeMap::new();
    for value in values {
        if value == 0 {
            return Err(SequenceError::NonPositive(value).into());
        }
        let mut counts: BTreeMap<u64, u32> = BTreeMap::new();
        for f in prime_factors(value) {
            *counts.entry(f).or_insert(0) += 1;
        }
        for (f, cnt) in counts {
            let e = exponents.entry(f).or_insert(0);
            *e = (*e).max(cnt);
        }
    }

    match modulus {
        Some(m) => {
            let mut ret = 1 % m;
            for (f, cnt) in exponents {
                ret = mul_mod(ret, pow_mod(f, cnt, m), m);
            }
            Ok(ret)
        }
        None => {
            let mut ret: u64 = 1;
            for (f, cnt) in exponents {
                ret = f
                    .checked_pow(cnt)
                    .and_then(|p| ret.checked_mul(p))
                    .ok_or(SequenceError::Overflow)?;
            }
            Ok(ret)
        }
    }
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    let r = (u128::from(a) * u128::from(b)) % u128::from(m);
    // r < m, so it always fits back into a u64.
    u64::try_from(r).unwrap_or_default()
}

fn pow_mod(mut base: u64, mut exp: u32, m: u64) -> u64 {
    let mut ret = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            ret = mul_mod(ret, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    ret
}

/// Orders comparable values by `partial_cmp` and puts incomparable ones
/// (values not equal to themselves, like NaN) after all of them.
#[allow(clippy::eq_op)]
fn cmp_incomparable_last<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    match (a == a, b == b) {
        (true, true) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Returns the index permutation that sorts `values`.
///
/// Ties are broken by index, so with `reverse` tied values come out in
/// descending index order. NaN sorts after every other value (first when
/// reversed).
#[must_use]
pub fn argsort<T: PartialOrd>(values: &[T], reverse: bool) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&i, &j| cmp_incomparable_last(&values[i], &values[j]).then(i.cmp(&j)));
    if reverse {
        idx.reverse();
    }
    idx
}

/// Returns the index permutation that sorts `values` by `key`.
///
/// The sort is stable: tied keys keep ascending index order, also when
/// `reverse` is set. NaN keys sort last (first when reversed).
#[must_use]
pub fn argsort_by_key<T, K, F>(values: &[T], mut key: F, reverse: bool) -> Vec<usize>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let keys: Vec<K> = values.iter().map(&mut key).collect();
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&i, &j| {
        let ord = cmp_incomparable_last(&keys[i], &keys[j]);
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    });
    idx
}

//! Digit-sum reducers.
//!
//! Two reducers with deliberately different master-number rules:
//!
//! - [`reduce_name_sum`] (letter scores): keep summing digits while the
//!   value exceeds 9 and is not a multiple of 11. Any multiple of 11 stops
//!   the reduction, including values above 33.
//! - [`reduce_date_digits`] (calendar digits): sum every decimal digit of
//!   the parts once. If that first sum is a repdigit (`11`, `22`, `44`, ...)
//!   it is returned as is; otherwise the sum is reduced to a single digit
//!   with no further exceptions, so `38 -> 11 -> 2`.

/// Sum of the decimal digits of `n`.
#[must_use]
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Returns true if every decimal digit of `n` is the same.
///
/// Single-digit values (including 0) are trivially repdigits.
#[must_use]
pub fn is_repdigit(n: u32) -> bool {
    let last = n % 10;
    let mut rest = n / 10;
    while rest > 0 {
        if rest % 10 != last {
            return false;
        }
        rest /= 10;
    }
    true
}

/// Returns true for 11, 22, 33, ... (positive multiples of 11).
#[must_use]
pub fn is_master_number(n: u32) -> bool {
    n > 0 && n % 11 == 0
}

/// Reducer for name-derived numbers.
///
/// Already-reduced values (1-9 and multiples of 11) are fixed points.
#[must_use]
pub fn reduce_name_sum(mut sum: u32) -> u32 {
    while sum > 9 && !is_master_number(sum) {
        sum = digit_sum(sum);
    }
    sum
}

/// Sum of every decimal digit across `parts`.
///
/// Equivalent to summing the digits of the parts written side by side
/// without padding (`1990, 1, 1` reads as `199011`).
#[must_use]
pub fn total_digits(parts: &[u32]) -> u32 {
    parts.iter().map(|&p| digit_sum(p)).sum()
}

/// Reducer for date-derived numbers.
#[must_use]
pub fn reduce_date_digits(parts: &[u32]) -> u32 {
    reduce_digit_total(total_digits(parts))
}

/// Second half of [`reduce_date_digits`], starting from an already-summed total.
#[must_use]
pub fn reduce_digit_total(mut sum: u32) -> u32 {
    if is_repdigit(sum) {
        return sum;
    }
    while sum > 9 {
        sum = digit_sum(sum);
    }
    sum
}

//! Natural-order comparators, ready to be passed to
//! [`Llrb::new`](crate::Llrb::new).

use std::cmp::Ordering;

/// Smallest to largest, for any totally ordered type like integers
/// and strings.
pub fn ascending<T: Ord + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Largest to smallest.
pub fn descending<T: Ord + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}

/// Smallest to largest, NaN sorts after positive infinity.
pub fn ascending_f32(a: &f32, b: &f32) -> bool {
    a.total_cmp(b) == Ordering::Less
}

/// Smallest to largest, NaN sorts after positive infinity.
pub fn ascending_f64(a: &f64, b: &f64) -> bool {
    a.total_cmp(b) == Ordering::Less
}

//!
//! CapacityLike trait for generics of capacity/flow amount
//!
//! i32, i64, i128, u32, u64 and usize implement CapacityLike
//!

use std::iter::Sum;
use std::ops::{Add, Sub};

///
/// generic integer capacity
///
/// Every arithmetic step of the solver that can grow a value goes through
/// `checked_add`, so an overflow surfaces as an error instead of wrapping.
///
pub trait CapacityLike:
    Copy
    + Eq
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Sum
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// `None` if the sum is not representable
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// `None` if the difference is not representable
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    /// true if the value is below zero (always false for unsigned types)
    fn is_negative(self) -> bool {
        self < Self::zero()
    }
    /// true if the value is above zero
    fn is_positive(self) -> bool {
        self > Self::zero()
    }
}

macro_rules! impl_capacity_like {
    ($($t:ty),*) => {
        $(
            impl CapacityLike for $t {
                fn zero() -> $t {
                    0
                }
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }
            }
        )*
    };
}

impl_capacity_like!(i32, i64, i128, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signedness() {
        assert!(CapacityLike::is_negative(-1i64));
        assert!(!CapacityLike::is_negative(0i64));
        assert!(!CapacityLike::is_negative(0usize));
        assert!(CapacityLike::is_positive(3u32));
        assert!(!CapacityLike::is_positive(0u32));
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(CapacityLike::checked_add(i32::MAX, 1), None);
        assert_eq!(CapacityLike::checked_add(2i32, 3), Some(5));
        assert_eq!(CapacityLike::checked_sub(0u64, 1), None);
        assert_eq!(<usize as CapacityLike>::zero(), 0);
    }
}

use crate::error::{Error, Result};

/// Comparison operand that extends the item order with two absolute
/// extremes. Limits are used only at comparison sites, the tree never
/// stores them, all insert APIs take plain items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Limit<T> {
    /// Compares less than every item.
    NegInf,
    /// A concrete item, ordered by the tree's comparator.
    Item(T),
    /// Compares greater than every item.
    PosInf,
}

impl<T> Limit<T> {
    /// Return [`Limit::PosInf`] for a positive `sign` and
    /// [`Limit::NegInf`] for a negative `sign`. Zero has no direction.
    pub fn inf(sign: i32) -> Result<Limit<T>> {
        match sign {
            0 => err_at!(InvalidArgument, msg: "infinity with sign 0"),
            sign if sign > 0 => Ok(Limit::PosInf),
            _ => Ok(Limit::NegInf),
        }
    }

    pub fn as_ref(&self) -> Limit<&T> {
        match self {
            Limit::NegInf => Limit::NegInf,
            Limit::Item(item) => Limit::Item(item),
            Limit::PosInf => Limit::PosInf,
        }
    }

    #[inline]
    pub fn is_inf(&self) -> bool {
        !matches!(self, Limit::Item(_))
    }
}

/// Return whether `a` order-precedes `b`, using `less` only when both
/// operands are concrete items.
pub fn less_limit<T, F>(less: &F, a: Limit<&T>, b: Limit<&T>) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    match (a, b) {
        (Limit::PosInf, _) | (_, Limit::NegInf) => false,
        (Limit::NegInf, _) | (_, Limit::PosInf) => true,
        (Limit::Item(a), Limit::Item(b)) => less(a, b),
    }
}

#[cfg(test)]
#[path = "limit_test.rs"]
mod limit_test;

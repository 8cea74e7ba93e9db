use std::{error, fmt, result};

/// Error enumerates over all possible errors that this package
/// shall return.
///
/// Each variant carries a prefix, typically identifying the error
/// location, followed by a message.
pub enum Error {
    /// Caller error, rejected before the tree is touched.
    InvalidArgument(String, String),
    /// Internal invariant fault, a rotation or color flip was attempted
    /// on a node that cannot support it. Indicates a corrupt tree.
    Fatal(String, String),
    /// Fatal case, two red links in a row.
    ConsecutiveReds(String, String),
    /// Fatal case, a red link on the right side.
    RightLeaning(String, String),
    /// Fatal case, root link is red.
    RedRoot(String, String),
    /// Fatal case, number of blacks differ under left and right child.
    UnbalancedBlacks(String, String),
    /// Fatal case, items are not in sort-order.
    SortError(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            InvalidArgument(p, msg) => write!(f, "{} InvalidArgument: {}", p, msg),
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            ConsecutiveReds(p, msg) => write!(f, "{} ConsecutiveReds: {}", p, msg),
            RightLeaning(p, msg) => write!(f, "{} RightLeaning: {}", p, msg),
            RedRoot(p, msg) => write!(f, "{} RedRoot: {}", p, msg),
            UnbalancedBlacks(p, msg) => write!(f, "{} UnbalancedBlacks: {}", p, msg),
            SortError(p, msg) => write!(f, "{} SortError: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;

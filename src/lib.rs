//! Package implement an ordered tree using the
//! [left-leaning-red-black][wiki-llrb] encoding of 2-3 trees.
//!
//! - Generic over item type, items are opaque to the tree.
//! - Ordered by a caller supplied `less(a, b)` comparator, two items are
//!   equivalent when neither is less than the other.
//! - Insert with replace semantics, or keep equivalent items side by side.
//! - Delete by key, delete minimum, delete maximum.
//! - Point lookup via get(), has(), min() and max().
//! - Raw root access for external serializers.
//! - Uses ownership model and borrow semantics to ensure safety.
//! - Not thread safe.
//!
//! ```
//! use llrb_tree::{natural::ascending, Llrb};
//!
//! let mut index: Llrb<i64, _> = Llrb::new(ascending);
//! index.replace_or_insert_bulk(vec![1, 2, 3, 4]).unwrap();
//! assert_eq!(index.min(), Some(&1));
//! assert_eq!(index.max(), Some(&4));
//!
//! assert_eq!(index.delete_min().unwrap(), Some(1));
//! assert_eq!(index.delete(&4).unwrap(), Some(4));
//! assert_eq!(index.len(), 2);
//! assert!(index.validate().is_ok());
//! ```
//!
//! Comparators need not look at the whole item:
//!
//! ```
//! use llrb_tree::Llrb;
//!
//! let mut index = Llrb::new(|a: &(u32, &'static str), b: &(u32, &'static str)| a.0 < b.0);
//! index.replace_or_insert((1, "one")).unwrap();
//! let old = index.replace_or_insert((1, "uno")).unwrap();
//! assert_eq!(old, Some((1, "one")));
//! assert_eq!(index.get(&(1, "")), Some(&(1, "uno")));
//! ```
//!
//! [wiki-llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

// Short form to compose Error values, prefixed with source location.
//
// ```ignore
// use crate::Error;
// err_at!(InvalidArgument, msg: "bad argument {}", arg);
// ```
//
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
}

mod config;
mod depth;
mod error;
mod limit;
mod llrb;
mod node;

pub mod dump;
pub mod natural;

pub use crate::config::{Config, FaultPolicy};
pub use crate::depth::Depth;
pub use crate::error::{Error, Result};
pub use crate::limit::{less_limit, Limit};
pub use crate::llrb::{Llrb, Stats};
pub use crate::node::Node;

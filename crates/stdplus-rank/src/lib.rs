#![doc = include_str!("../README.md")]

mod error;
mod rank_value;
mod ranker;
mod time;
mod value;

pub use error::{RankError, Result};
pub use rank_value::{Composite, RankValue};
pub use ranker::{Ranker, compare, greatest, least, rank};
pub use time::{Period, PeriodEnd, TimeSpan};
pub use value::{EnumCase, Key, Object, Scalar, Value};

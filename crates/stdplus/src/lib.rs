#![doc = include_str!("../README.md")]

pub mod v1 {
    //! Versioned public API for stdplus.
    //!
    //! Everything you need is re-exported from this module. It is organized
    //! into two groups that do not depend on each other:
    //!
    //! # Ranking
    //!
    //! Map any [`Value`] onto a comparable [`RankValue`] and select extremes:
    //!
    //! - [`rank`] — the surrogate a value compares by
    //! - [`compare`] — order two values by rank
    //! - [`greatest`], [`least`] — pick one of at least two values
    //! - [`Ranker`] — the same operations with a pinned reference instant
    //! - [`Object`] — opt-in capabilities for your own types
    //!
    //! # Paths
    //!
    //! Decompose path strings without filesystem access:
    //!
    //! - [`path::basename`], [`path::dirname`], [`path::extension`],
    //!   [`path::filename`], [`path::extension_replace`]
    //! - [`ParsedPath`] — all parts at once
    //! - [`PathStyle`] — Unix or Windows separator rules
    //!
    //! # Example — rank mixed values
    //!
    //! ```
    //! use stdplus::v1::*;
    //!
    //! let values = [
    //!     Value::from(EnumCase::unit("Beta")),
    //!     Value::from("Alpha"),
    //!     Value::from(EnumCase::backed("Gamma", "Zeta")),
    //! ];
    //! assert_eq!(greatest(&values).unwrap(), &values[2]);
    //! assert_eq!(least(&values).unwrap(), &values[1]);
    //! assert_eq!(greatest(&values[..1]), Err(RankError::Arity { got: 1 }));
    //! ```
    //!
    //! # Example — take a path apart
    //!
    //! ```
    //! use stdplus::v1::{path, PathStyle};
    //!
    //! assert_eq!(path::extension("/root/dir/sub/name.suf.ext"), "ext");
    //! assert_eq!(path::filename("/root/dir/sub/name.suf.ext", ""), "name.suf");
    //!
    //! let parsed = PathStyle::Windows.parse("C:\\logs\\app.2026.log");
    //! assert_eq!(parsed.directory, "C:\\logs");
    //! assert_eq!(parsed.stem, "app.2026");
    //! ```

    /// Path decomposition functions using the platform [`PathStyle`].
    pub mod path {
        pub use stdplus_path::{basename, dirname, extension, extension_replace, filename};
    }

    pub use stdplus_path::{ParsedPath, PathStyle};
    pub use stdplus_rank::{
        Composite, EnumCase, Key, Object, Period, PeriodEnd, RankError, RankValue, Ranker, Result,
        Scalar, TimeSpan, Value, compare, greatest, least, rank,
    };
}

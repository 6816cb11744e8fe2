//! Fluent construction of regular expression strings.
//!
//! ```
//! use rejex_rs::{Flavor, PatternBuilder};
//!
//! let built = PatternBuilder::with_flavor(Flavor::Go)
//!     .starting()
//!     .one_or_more_of("\\d")
//!     .characters("-")
//!     .begin_named_capture_group("tail")
//!     .letter()
//!     .end_group()
//!     .ending()
//!     .add_flags(&['i'])
//!     .build();
//!
//! assert!(built.is_clean());
//! assert_eq!(built.pattern(), "(?i)^(?:\\d)+-(?P<tail>[a-zA-Z])$");
//! ```

pub mod builder;
pub mod errors;
pub mod flags;
pub mod flavor;
pub mod options;

pub use builder::{BuiltPattern, PatternBuilder, SegmentKind};
pub use errors::{BuilderError, Diagnostic};
pub use flags::RegexFlags;
pub use flavor::{Feature, Flavor, OutputStyle};
pub use options::{BuilderOptions, BuilderOptionsBuilder};

//! Category-based log message filtering
//!
//! A [`CategoryFilter`] holds an include list and an exclude list of
//! category patterns and answers one question: should a message with a
//! given category be suppressed?
//!
//! # Patterns
//!
//! ```text
//! Yiisoft\Db\Connection    Exact pattern, matches only that category
//! Yiisoft\Db\*             Prefix pattern, matches everything starting with "Yiisoft\Db\"
//! *                        Matches every category
//! ```
//!
//! # Precedence
//!
//! 1. A category matching any exclude pattern is excluded.
//! 2. Otherwise, with an empty include list, nothing is excluded.
//! 3. Otherwise the category is excluded unless an include pattern matches.
//!
//! # Examples
//!
//! ```
//! use log_category_filter::filter::CategoryFilter;
//!
//! let filter = CategoryFilter::new()
//!     .with_included(["App\\*"])
//!     .with_excluded(["App\\Cache"]);
//!
//! assert!(!filter.is_excluded("App\\Db"));
//! assert!(filter.is_excluded("App\\Cache"));
//! assert!(filter.is_excluded("Vendor\\Lib"));
//! ```

pub mod category_filter;
pub mod error;
pub mod pattern;
pub mod shared;

pub use category_filter::{CategoryFilter, Decision};
pub use error::{InvalidInputError, json_type_name};
pub use pattern::{PatternKind, WILDCARD, matches_exclude, matches_include};
pub use shared::SharedCategoryFilter;

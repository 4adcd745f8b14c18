//! Parser tests.
//!
//! - `parser`: expressions, error messages and locations, entry points
//! - `speculation`: `attempt`, snapshots and the furthest-failure record
//! - `properties`: span layout and property-based checks over generated and
//!   fixture sources

mod properties;

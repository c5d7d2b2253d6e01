//! Crate-internal acceptance and property suites.

mod acceptance_dashboard;

//! Common component tests.



/// Error messages and classification.
pub mod error;

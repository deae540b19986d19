//! Unit tests for configuration loading and validation.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `loading`: Environment and CLI loading through `load_from_iter`
//! - `validation`: Accessor validation tests

mod helpers;

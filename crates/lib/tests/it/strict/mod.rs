//! Strict decorator integration tests
//!
//! Every absent outcome of a plain lookup must surface as NodeNotFound through
//! the decorators, and every present one must come back unchanged.

mod mapping_tests;
mod sequence_tests;

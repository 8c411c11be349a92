//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Spelling, BirthDate, Error, letter buckets, and the
//! two digit-sum reducers.

mod reducers;
mod types;

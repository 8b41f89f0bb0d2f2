//! Symbol model tests

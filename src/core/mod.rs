//! Shared text helpers with no dependencies on the generator.

pub mod text_utils;

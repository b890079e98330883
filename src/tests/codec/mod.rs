//! Field codec tests.

mod encode_tests;
mod time_tests;

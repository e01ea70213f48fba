//! Integration tests for the GM console.

pub mod commands_test;
pub mod parser_test;
pub mod pipeline_test;

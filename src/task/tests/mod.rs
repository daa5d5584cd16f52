//! Unit tests for the task board.

mod domain_tests;

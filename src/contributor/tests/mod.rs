//! Unit tests for contributors.

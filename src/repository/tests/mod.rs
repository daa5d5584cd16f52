//! Unit tests for repository selection.

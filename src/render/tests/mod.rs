//! Unit tests for rendering.

//! Unit tests for the shell.

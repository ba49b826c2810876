//! Unit tests for the protocol module.

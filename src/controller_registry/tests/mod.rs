//! Unit tests for controller registration.

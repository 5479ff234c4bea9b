//! End-to-end tests for ELM327 sessions.
//!
//! Everything lives under `tests/`; this library is intentionally empty.

//! Workspace-level integration tests for the seqfan harness.
//!
//! The actual tests live in `tests/`; this package exists so the root
//! manifest can carry them alongside the workspace definition.

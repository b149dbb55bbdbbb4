//! Workspace-level integration tests for Fountain. See `tests/`.

//! Workspace-level integration tests for fibdev live under `tests/`.

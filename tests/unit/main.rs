//! Unit tests mirroring the `src/` layout

#[path = "../common/mod.rs"]
mod common;

//! # `mcb` — Memory Bank Kernel
//!
//! The binary crate: process entry point, `clap` CLI surface, and the
//! wiring that assembles the Client Registry, Gateway Factory, Session
//! Manager, and Tool Dispatcher into a running server.
//!
//! Kept as a thin `[lib]` alongside the `[[bin]]` target purely so
//! [`cli`] is unit-testable without spawning the binary — all the real
//! wiring lives in `main.rs`.

/// The `clap` command surface: `serve`, `init`, `add-context`,
/// `add-component`, `add-decision`, `add-rule`.
pub mod cli;

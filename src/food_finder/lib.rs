//! # Food Finder Architecture
//!
//! Food Finder is an interactive, text-mode restaurant directory backed by a
//! flat file. Users type short commands (`list`, `find`, `add`, `quit`) and get
//! fixed-width tables back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses flags, loads config, sets up logging              │
//! │  - The ONLY place that touches real stdin/stdout            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Interpreter (cli/)                                         │
//! │  - Read a line, parse an Action, dispatch, render           │
//! │  - Generic over BufRead / Write                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - list / find / add logic, returns CmdResult               │
//! │  - No I/O assumptions                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry + Storage (registry.rs, store/)                   │
//! │  - One bound RecordFile over a LineBackend                  │
//! │  - FsLines (production), MemLines (testing)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Failures Stay Local
//!
//! An unusable restaurant file, an invalid record or an unknown command never
//! ends the session. They surface as messages and the loop keeps going. Only
//! `quit` (or end of input) stops it.
//!
//! ## Module Overview
//!
//! - [`cli`]: The interactive guide and table rendering
//! - [`commands`]: Business logic for each action
//! - [`registry`]: The explicit store binding passed around at runtime
//! - [`store`]: Line transport abstraction and the record file
//! - [`model`]: `Restaurant`, `Price` and the line format
//! - [`currency`]: `number_to_currency` and its options
//! - [`config`]: `config.json` handling
//! - [`text`]: `is_blank` / `titleize` helpers
//! - [`error`]: Error types

pub mod cli;
pub mod commands;
pub mod config;
pub mod currency;
pub mod error;
pub mod model;
pub mod registry;
pub mod store;
pub mod text;

//! # pim
//!
//! A small personal information manager: contacts with validated fields and
//! tagged free-text notes, each kept in its own JSON document.
//!
//! Like any client, the `pim` binary goes through the library, and the library never
//! touches stdout, stderr or the process exit code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, cli/)                               │
//! │  - Parses arguments, prints results, owns the exit code     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade, one method per operation                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Load a book, apply one model operation, save on success  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Model (model/)              │ │  Storage (store/)          │
//! │  - Fields, Record, books     │ │  - BookStore trait         │
//! │  - Pure, no I/O              │ │  - JSON files / in-memory  │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded. Two processes saving the
//! same document race, and the last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`commands`]: one function per operation
//! - [`model`]: `Phone`, `Email`, `Birthday`, `Record`, `AddressBook`, `Note`, `NotesBook`
//! - [`store`]: persistence boundary and the JSON document format
//! - [`config`]: data file names, stored as `config.json`
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

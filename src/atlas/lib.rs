//! # Atlas Architecture
//!
//! Atlas is a **UI-agnostic country catalog engine**. This is not a CLI application
//! that happens to have some library code—it's a library that happens to have a CLI
//! client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Facade (session.rs)                                │
//! │  - Owns the application state: catalog, selection sets,     │
//! │    filter criteria, auth flag, theme, transient notice      │
//! │  - Hydrates everything from the store at startup            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StateStore trait with Durable/Session scopes    │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Scoping
//!
//! Two persistence scopes with different lifetimes:
//! - **Durable**: survives restarts (login flag, theme, favorites, document list)
//! - **Session**: survives navigation within one process, lost on exit
//!   (search text, region/language filters, favorites-only flag, open detail)
//!
//! The catalog itself is never persisted: it is loaded once per process from a
//! [`catalog::CatalogSource`] and treated as read-only from then on.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward (session, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Module Overview
//!
//! - [`session`]: The state container and facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`catalog`]: The immutable country catalog and its data sources
//! - [`model`]: Core data types (`Country`, `Region`)
//! - [`selection`]: Natural-key selection sets (favorites, document list)
//! - [`filter`]: Filter criteria and the pure visibility function
//! - [`export`]: Paginated PDF report for the document list
//! - [`notice`]: Self-clearing transient user notices
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod model;
pub mod notice;
pub mod selection;
pub mod session;
pub mod store;

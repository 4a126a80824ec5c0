//! # State Module
//!
//! State owned by the CLI for the lifetime of one invocation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐        │
//! │  │   Roster                 │      │   AppConfig              │        │
//! │  │                          │      │                          │        │
//! │  │  Vec<RosterEntry>        │      │  currency_symbol         │        │
//! │  │  (uuid + Participant)    │      │  default_tip             │        │
//! │  │  owned by the session    │      │  format                  │        │
//! │  └────────────┬─────────────┘      └──────────────────────────┘        │
//! │               │ snapshot()                                              │
//! │               ▼                                                         │
//! │        tabsplit_core::compute                                           │
//! │                                                                         │
//! │  Plain owned values: one user, one calculation at a time.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod roster;

pub use config::{AppConfig, ConfigError, OutputFormat};
pub use roster::{Roster, RosterEntry, MIN_ID_PREFIX};

//! # Commands Module
//!
//! The `tabsplit` subcommands.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         tabsplit Commands                               │
//! │                                                                         │
//! │  ┌─────────────────────────────┐   ┌─────────────────────────────┐     │
//! │  │  calculate.rs               │   │  session.rs                 │     │
//! │  │  ─────────────              │   │  ──────────                 │     │
//! │  │  flags / JSON file in       │   │  roster edited line by line │     │
//! │  │  one report out             │   │  calculate on demand        │     │
//! │  └─────────────────────────────┘   └─────────────────────────────┘     │
//! │                                                                         │
//! │  Both hand a fresh participant snapshot to tabsplit_core::compute.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod calculate;
pub mod session;

use tabsplit_core::validation::Lenient;
use tracing::debug;

/// Logs when the leniency policy replaced something the user typed.
///
/// Blank input is the normal way to leave a field empty and is not logged.
pub(crate) fn note_coercion<T>(parsed: &Lenient<T>, raw: &str) {
    if raw.trim().is_empty() {
        return;
    }
    if let Some(err) = &parsed.rejected {
        debug!(raw, field = err.field(), %err, "input replaced with zero");
    }
}

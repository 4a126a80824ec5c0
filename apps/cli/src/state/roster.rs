//! # Roster State
//!
//! The list of people at the table, as the user is editing it.
//!
//! ## Roster Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Roster Operations                                    │
//! │                                                                         │
//! │  User Action              Session Command         Roster Change         │
//! │  ───────────              ───────────────         ─────────────         │
//! │                                                                         │
//! │  Add person ─────────────► add [name] ──────────► entries.push(..)     │
//! │                                                                         │
//! │  Edit name/amounts ──────► name|paid|personal ──► entry(id).field = .. │
//! │                                                                         │
//! │  Remove person ──────────► remove <id> ─────────► entries.retain(..)   │
//! │                                                                         │
//! │  Calculate ──────────────► calculate ───────────► snapshot() (read)    │
//! │                                                                         │
//! │  NOTE: Entries are addressed by a UUID assigned at creation, never by  │
//! │        position, so removing one person cannot misdirect an edit.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use tabsplit_core::validation::{lenient_amount, Lenient};
use tabsplit_core::Participant;
use tracing::debug;
use uuid::Uuid;

use crate::error::{CliError, CliResult};

/// Shortest id prefix accepted when resolving an entry.
pub const MIN_ID_PREFIX: usize = 4;

/// One editable row in the roster.
///
/// ## Design Notes
/// - `id`: Stable identity, assigned once in [`Roster::add`]
/// - `participant`: What the calculator sees; amounts already went through
///   the leniency policy when they were set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: Uuid,
    pub participant: Participant,
}

impl RosterEntry {
    /// First eight hex digits of the id, for display.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// The roster.
///
/// ## Invariants
/// - Ids are unique
/// - Order is insertion order; it is also the order of calculated results
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Roster::default()
    }

    /// Creates a roster holding one blank participant, ready for input.
    pub fn with_blank_entry() -> Self {
        let mut roster = Roster::new();
        roster.add("");
        roster
    }

    /// Appends a participant with blank amounts and returns its id.
    pub fn add(&mut self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(RosterEntry {
            id,
            participant: Participant::new(name, Decimal::ZERO, Decimal::ZERO),
        });
        debug!(%id, name, "participant added");
        id
    }

    /// Sets a participant's name.
    pub fn rename(&mut self, id: Uuid, name: &str) -> CliResult<()> {
        self.entry_mut(id)?.participant.name = name.to_string();
        Ok(())
    }

    /// Sets what a participant paid from raw user input.
    ///
    /// Unparseable input is stored as zero; the returned [`Lenient`] says
    /// whether that happened.
    pub fn set_paid(&mut self, id: Uuid, raw: &str) -> CliResult<Lenient<Decimal>> {
        let parsed = lenient_amount(raw, "amount paid");
        self.entry_mut(id)?.participant.amount_paid = parsed.value;
        Ok(parsed)
    }

    /// Sets a participant's personal items from raw user input.
    pub fn set_personal(&mut self, id: Uuid, raw: &str) -> CliResult<Lenient<Decimal>> {
        let parsed = lenient_amount(raw, "personal items");
        self.entry_mut(id)?.participant.personal_items = parsed.value;
        Ok(parsed)
    }

    /// Removes a participant.
    pub fn remove(&mut self, id: Uuid) -> CliResult<RosterEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CliError::ParticipantNotFound(id.to_string()))?;
        Ok(self.entries.remove(index))
    }

    /// Finds the entry whose id starts with `prefix`.
    ///
    /// Accepts the hyphenated or simple form; case-insensitive.
    ///
    /// ## Errors
    /// - `InvalidId` if the prefix is shorter than [`MIN_ID_PREFIX`]
    /// - `ParticipantNotFound` if nothing matches
    /// - `AmbiguousId` if several entries match
    pub fn resolve(&self, prefix: &str) -> CliResult<Uuid> {
        let needle: String = prefix
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        if needle.len() < MIN_ID_PREFIX {
            return Err(CliError::InvalidId(prefix.to_string()));
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.id),
            (Some(_), Some(_)) => Err(CliError::AmbiguousId(prefix.to_string())),
            (None, _) => Err(CliError::ParticipantNotFound(prefix.to_string())),
        }
    }

    /// Read-only view of the entries, in order.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// The participants in order, detached from their ids.
    ///
    /// This is what gets handed to the calculator on every calculate.
    pub fn snapshot(&self) -> Vec<Participant> {
        self.entries.iter().map(|e| e.participant.clone()).collect()
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: Uuid) -> CliResult<&mut RosterEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CliError::ParticipantNotFound(id.to_string()))
    }
}

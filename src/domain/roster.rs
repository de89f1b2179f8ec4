//! Arena-backed registry of people and their name index.

use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::records::PersonRecord;

/// One node of the reporting hierarchy.
#[derive(Debug, Clone)]
pub struct Person {
    /// Display name, also the lookup key
    pub name: String,
    /// Job title
    pub title: String,
    /// Join date, kept opaque
    pub join_date: String,
    /// Manager name exactly as given, None for root nodes
    pub manager: Option<String>,
    /// Indices of direct reports in the arena, linking order
    pub reports: Vec<Index>,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.title)
    }
}

/// Arena-based registry for the whole roster.
///
/// Uses generational arena for memory-safe node references and O(1) name
/// lookups. Nothing is ever removed, so iteration order is insertion order.
#[derive(Debug)]
pub struct Roster {
    /// Arena storage for all people
    people: Arena<Person>,
    /// Name index; duplicates overwrite, last record wins
    by_name: HashMap<String, Index>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self {
            people: Arena::new(),
            by_name: HashMap::new(),
        }
    }

    /// Index every record in input order.
    #[instrument(level = "debug", skip(records))]
    pub fn from_records(records: Vec<PersonRecord>) -> Self {
        let mut roster = Self::new();
        for record in records {
            roster.insert(record);
        }
        debug!("indexed {} people", roster.len());
        roster
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, record: PersonRecord) -> Index {
        let PersonRecord {
            name,
            title,
            join_date,
            reports_to,
        } = record;
        let idx = self.people.insert(Person {
            name: name.clone(),
            title,
            join_date,
            manager: reports_to,
            reports: Vec::new(),
        });
        self.by_name.insert(name, idx);
        idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, idx: Index) -> Option<&Person> {
        self.people.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_mut(&mut self, idx: Index) -> Option<&mut Person> {
        self.people.get_mut(idx)
    }

    /// Resolve a name through the index.
    #[instrument(level = "trace", skip(self))]
    pub fn lookup(&self, name: &str) -> Option<Index> {
        self.by_name.get(name).copied()
    }

    /// Resolve a name to its index and person.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, name: &str) -> Option<(Index, &Person)> {
        let idx = self.lookup(name)?;
        self.people.get(idx).map(|person| (idx, person))
    }

    /// Iterate all people in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Index, &Person)> {
        self.people.iter()
    }

    /// Number of people, duplicate names included.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Indices of people with no manager at all, insertion order.
    #[instrument(level = "debug", skip(self))]
    pub fn roots(&self) -> Vec<Index> {
        self.people
            .iter()
            .filter(|(_, person)| person.manager.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }
}

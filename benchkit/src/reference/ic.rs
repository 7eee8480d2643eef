//! IC Pinout Database
//!
//! Embedded pinout records for common hobbyist ICs. Lookups are
//! case-insensitive; the database is read-only after load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const EMBEDDED_IC_PINOUTS: &str = include_str!("../../data/ic_pinouts.json");

/// Quick-pick categories offered when browsing.
pub const IC_CATEGORIES: [&str; 10] = [
    "Timer",
    "Op-Amp",
    "Logic Gate",
    "Microcontroller",
    "Voltage Regulator",
    "Motor Driver",
    "Clock Generator",
    "ADC/DAC",
    "Amplifier",
    "Shift Register",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub packages: Vec<String>,
    /// Pin number to function. Sparse for large packages.
    pub pinout: BTreeMap<u32, PinInfo>,
}

impl IcRecord {
    /// Package shown first when a part is selected.
    pub fn default_package(&self) -> Option<&str> {
        self.packages.first().map(String::as_str)
    }

    fn matches(&self, query: &str) -> bool {
        self.id.to_lowercase().contains(query)
            || self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
    }
}

/// Result of jumping into the finder with a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IcLookup<'a> {
    Found(&'a IcRecord),
    /// Nothing matched; the caller falls back to browsing.
    NotFound { query: String },
}

#[derive(Debug, Clone)]
pub struct IcDatabase {
    records: Vec<IcRecord>,
}

impl IcDatabase {
    /// Load the embedded table.
    pub fn builtin() -> Self {
        match serde_json::from_str::<Vec<IcRecord>>(EMBEDDED_IC_PINOUTS) {
            Ok(records) => Self { records },
            Err(e) => {
                tracing::warn!("Failed to parse embedded IC table: {}", e);
                Self {
                    records: Vec::new(),
                }
            }
        }
    }

    pub fn from_records(records: Vec<IcRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in table order.
    pub fn records(&self) -> &[IcRecord] {
        &self.records
    }

    /// Exact id match, ignoring case.
    pub fn get(&self, id: &str) -> Option<&IcRecord> {
        let id = id.trim();
        self.records.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }

    /// Substring search over id, name and description, sorted by id.
    /// An empty query lists everything.
    pub fn search(&self, query: &str) -> Vec<&IcRecord> {
        let query = query.trim().to_lowercase();
        let mut hits: Vec<&IcRecord> = self.records.iter().filter(|r| r.matches(&query)).collect();
        hits.sort_by(|a, b| a.id.cmp(&b.id));
        hits
    }

    /// First record whose id or name contains the query, in table order.
    pub fn lookup(&self, query: &str) -> IcLookup<'_> {
        let needle = query.trim().to_lowercase();
        let found = (!needle.is_empty())
            .then(|| {
                self.records.iter().find(|r| {
                    r.id.to_lowercase().contains(&needle) || r.name.to_lowercase().contains(&needle)
                })
            })
            .flatten();

        match found {
            Some(record) => IcLookup::Found(record),
            None => {
                tracing::debug!("no IC matches '{}'", query);
                IcLookup::NotFound {
                    query: query.to_string(),
                }
            }
        }
    }

    pub fn categories(&self) -> &'static [&'static str] {
        &IC_CATEGORIES
    }
}

impl Default for IcDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_loads() {
        let db = IcDatabase::builtin();
        assert_eq!(db.len(), 10);
        let timer = db.get("555").unwrap();
        assert_eq!(timer.pinout.len(), 8);
        assert_eq!(timer.pinout[&3].name, "OUT");
        assert_eq!(timer.default_package(), Some("DIP-8"));
    }

    #[test]
    fn test_get_ignores_case() {
        let db = IcDatabase::builtin();
        assert_eq!(db.get("ATmega328P").unwrap().id, "atmega328p");
        assert_eq!(db.get("LM358").unwrap().id, "lm358");
        assert!(db.get("lm35").is_none());
    }

    #[test]
    fn test_search_sorted_by_id() {
        let db = IcDatabase::builtin();
        let ids: Vec<&str> = db.search("gate").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["7400", "7402", "7404", "7408", "7432", "7486"]);

        let all = db.search("");
        assert_eq!(all.len(), 10);
        assert_eq!(all[0].id, "555");
        assert_eq!(all[9].id, "lm358");
    }

    #[test]
    fn test_search_matches_description() {
        let db = IcDatabase::builtin();
        let hits = db.search("arduino");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "atmega328p");
    }

    #[test]
    fn test_lookup() {
        let db = IcDatabase::builtin();
        match db.lookup("NE555") {
            IcLookup::NotFound { query } => assert_eq!(query, "NE555"),
            other => panic!("unexpected {:?}", other),
        }
        match db.lookup("op-amp") {
            IcLookup::Found(record) => assert_eq!(record.id, "741"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(db.lookup("   "), IcLookup::NotFound { .. }));
    }
}

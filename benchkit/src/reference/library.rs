//! Datasheet and tutorial catalogs.
//!
//! Both catalogs start from embedded tables. Starred state is seeded from the
//! table's `starred` flags and only lives in memory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

const EMBEDDED_DATASHEETS: &str = include_str!("../../data/datasheets.json");
const EMBEDDED_TUTORIALS: &str = include_str!("../../data/tutorials.json");

pub const DATASHEET_CATEGORIES: [&str; 7] = [
    "Timer",
    "Op-Amp",
    "Microcontroller",
    "Logic",
    "Transistor",
    "Regulator",
    "Amplifier",
];

pub const TUTORIAL_CATEGORIES: [&str; 5] =
    ["Basics", "Components", "Lab Equipment", "Projects", "Advanced"];

pub const DIFFICULTY_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datasheet {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub category: String,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub recently_viewed: bool,
    pub file_size: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorialKind {
    Article,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub category: String,
    pub duration: String,
    pub difficulty: String,
    #[serde(default)]
    pub starred: bool,
    pub kind: TutorialKind,
}

/// Which subset of a catalog to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTab {
    #[default]
    All,
    Starred,
    /// Recently viewed; only datasheets track this.
    Recent,
}

impl FromStr for LibraryTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(LibraryTab::All),
            "starred" => Ok(LibraryTab::Starred),
            "recent" => Ok(LibraryTab::Recent),
            other => Err(format!("Unknown tab: {}", other)),
        }
    }
}

impl fmt::Display for LibraryTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryTab::All => write!(f, "all"),
            LibraryTab::Starred => write!(f, "starred"),
            LibraryTab::Recent => write!(f, "recent"),
        }
    }
}

/// Catalog filter. `None` category or difficulty means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    pub query: String,
    pub tab: LibraryTab,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl LibraryFilter {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn tab(mut self, tab: LibraryTab) -> Self {
        self.tab = tab;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    fn needle(&self) -> Option<String> {
        let q = self.query.trim();
        (!q.is_empty()).then(|| q.to_lowercase())
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn load_table<T: for<'de> Deserialize<'de>>(json: &str, what: &str) -> Vec<T> {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse embedded {} table: {}", what, e);
        Vec::new()
    })
}

fn toggle(starred: &mut BTreeSet<String>, known: bool, id: &str) -> Option<bool> {
    if !known {
        return None;
    }
    if starred.remove(id) {
        Some(false)
    } else {
        starred.insert(id.to_string());
        Some(true)
    }
}

#[derive(Debug, Clone)]
pub struct DatasheetCatalog {
    entries: Vec<Datasheet>,
    starred: BTreeSet<String>,
}

impl DatasheetCatalog {
    pub fn builtin() -> Self {
        Self::from_entries(load_table(EMBEDDED_DATASHEETS, "datasheet"))
    }

    pub fn from_entries(entries: Vec<Datasheet>) -> Self {
        let starred = entries
            .iter()
            .filter(|d| d.starred)
            .map(|d| d.id.clone())
            .collect();
        Self { entries, starred }
    }

    pub fn entries(&self) -> &[Datasheet] {
        &self.entries
    }

    pub fn is_starred(&self, id: &str) -> bool {
        self.starred.contains(id)
    }

    /// Flip the star on `id`; returns the new state, `None` for unknown ids.
    pub fn toggle_star(&mut self, id: &str) -> Option<bool> {
        let known = self.entries.iter().any(|d| d.id == id);
        toggle(&mut self.starred, known, id)
    }

    pub fn filter(&self, filter: &LibraryFilter) -> Vec<&Datasheet> {
        let needle = filter.needle();
        self.entries
            .iter()
            .filter(|d| {
                needle.as_deref().map_or(true, |q| {
                    contains_ci(&d.name, q)
                        || contains_ci(&d.manufacturer, q)
                        || contains_ci(&d.category, q)
                })
            })
            .filter(|d| match filter.tab {
                LibraryTab::All => true,
                LibraryTab::Starred => self.is_starred(&d.id),
                LibraryTab::Recent => d.recently_viewed,
            })
            .filter(|d| filter.category.as_deref().map_or(true, |c| d.category == c))
            .collect()
    }

    pub fn categories(&self) -> &'static [&'static str] {
        &DATASHEET_CATEGORIES
    }
}

impl Default for DatasheetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Clone)]
pub struct TutorialCatalog {
    entries: Vec<Tutorial>,
    starred: BTreeSet<String>,
}

impl TutorialCatalog {
    pub fn builtin() -> Self {
        Self::from_entries(load_table(EMBEDDED_TUTORIALS, "tutorial"))
    }

    pub fn from_entries(entries: Vec<Tutorial>) -> Self {
        let starred = entries
            .iter()
            .filter(|t| t.starred)
            .map(|t| t.id.clone())
            .collect();
        Self { entries, starred }
    }

    pub fn entries(&self) -> &[Tutorial] {
        &self.entries
    }

    pub fn is_starred(&self, id: &str) -> bool {
        self.starred.contains(id)
    }

    pub fn toggle_star(&mut self, id: &str) -> Option<bool> {
        let known = self.entries.iter().any(|t| t.id == id);
        toggle(&mut self.starred, known, id)
    }

    /// Tutorials have no recent list, so `LibraryTab::Recent` behaves like `All`.
    pub fn filter(&self, filter: &LibraryFilter) -> Vec<&Tutorial> {
        let needle = filter.needle();
        self.entries
            .iter()
            .filter(|t| {
                needle
                    .as_deref()
                    .map_or(true, |q| contains_ci(&t.title, q) || contains_ci(&t.category, q))
            })
            .filter(|t| filter.tab != LibraryTab::Starred || self.is_starred(&t.id))
            .filter(|t| filter.category.as_deref().map_or(true, |c| t.category == c))
            .filter(|t| filter.difficulty.as_deref().map_or(true, |d| t.difficulty == d))
            .collect()
    }

    pub fn categories(&self) -> &'static [&'static str] {
        &TUTORIAL_CATEGORIES
    }

    pub fn difficulty_levels(&self) -> &'static [&'static str] {
        &DIFFICULTY_LEVELS
    }
}

impl Default for TutorialCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

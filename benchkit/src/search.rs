//! Free-text search box routing.
//!
//! Keyword checks run in a fixed order and the first match wins, so
//! "resistor calculator" goes to the resistor tool, not the calculators.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static PART_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(74[a-z]*\d+|ne555|lm[0-9]+)\b").expect("part number pattern is valid")
});

/// Where a query should take the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolRoute {
    ResistorTool,
    /// Carries the query as typed so the finder can look it up.
    IcFinder { query: String },
    Calculators,
    Datasheets,
    Tutorials,
}

impl fmt::Display for ToolRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolRoute::ResistorTool => write!(f, "resistor tool"),
            ToolRoute::IcFinder { query } => write!(f, "IC finder ({})", query),
            ToolRoute::Calculators => write!(f, "calculators"),
            ToolRoute::Datasheets => write!(f, "datasheets"),
            ToolRoute::Tutorials => write!(f, "tutorials"),
        }
    }
}

/// True when the text names a part number the IC finder knows how to read.
pub fn looks_like_part_number(text: &str) -> bool {
    PART_NUMBER.is_match(text)
}

/// Map a search query to a tool. `None` means no keyword matched.
///
/// The "ic" check is a plain substring test, so words such as "basic" or
/// "music" also land in the IC finder.
pub fn route_query(query: &str) -> Option<ToolRoute> {
    let lower = query.to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    let route = if has("resistor") || has("color code") {
        ToolRoute::ResistorTool
    } else if has("ic") || has("integrated circuit") || looks_like_part_number(&lower) {
        ToolRoute::IcFinder {
            query: query.to_string(),
        }
    } else if has("calc") || has("ohm") {
        ToolRoute::Calculators
    } else if has("datasheet") {
        ToolRoute::Datasheets
    } else if has("tutorial") || has("learn") {
        ToolRoute::Tutorials
    } else {
        tracing::debug!("no tool matches query '{}'", query);
        return None;
    };

    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistor_keywords_win() {
        assert_eq!(route_query("Resistor calculator"), Some(ToolRoute::ResistorTool));
        assert_eq!(route_query("color code chart"), Some(ToolRoute::ResistorTool));
    }

    #[test]
    fn test_part_numbers_route_to_ic_finder() {
        for query in ["74HC595", "NE555", "lm358 pinout", "7400"] {
            assert_eq!(
                route_query(query),
                Some(ToolRoute::IcFinder {
                    query: query.to_string()
                }),
                "{}",
                query
            );
        }
    }

    #[test]
    fn test_ic_substring_is_literal() {
        assert!(matches!(
            route_query("basic circuits"),
            Some(ToolRoute::IcFinder { .. })
        ));
        assert!(matches!(
            route_query("logic ICs"),
            Some(ToolRoute::IcFinder { .. })
        ));
    }

    #[test]
    fn test_remaining_routes() {
        assert_eq!(route_query("ohm's law"), Some(ToolRoute::Calculators));
        assert_eq!(route_query("Calculate power"), Some(ToolRoute::Calculators));
        assert_eq!(route_query("datasheet"), Some(ToolRoute::Datasheets));
        assert_eq!(route_query("learn soldering"), Some(ToolRoute::Tutorials));
        assert_eq!(route_query("tutorial"), Some(ToolRoute::Tutorials));
        assert_eq!(route_query("banana"), None);
        assert_eq!(route_query(""), None);
    }
}

// src/services/filter.rs

//! Keyword filtering and output projection.

use std::collections::BTreeMap;

use crate::config::FilterConfig;
use crate::models::{Listing, OutputRow};

/// Keeps listings whose description mentions any configured keyword.
pub struct ListingFilter {
    /// Keywords lowercased once at construction
    keywords: Vec<String>,
}

impl ListingFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            keywords: config.keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Case-insensitive substring match, OR across keywords.
    pub fn matches(&self, description: &str) -> bool {
        let text = description.to_lowercase();
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }

    /// Keep the listings whose description matches. A listing without a
    /// description never matches.
    pub fn filter<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings
            .iter()
            .filter(|listing| self.matches(listing.description.as_deref().unwrap_or("")))
            .collect()
    }
}

/// Project a listing onto the CSV output schema.
///
/// Absent fields become empty strings; a sparse listing is still written.
pub fn project(listing: &Listing) -> OutputRow {
    OutputRow {
        id: listing.id.clone().unwrap_or_default(),
        title: listing.title.clone().unwrap_or_default(),
        description: listing.description.clone().unwrap_or_default(),
        employer: listing
            .employer
            .as_ref()
            .and_then(|employer| employer.name.clone())
            .unwrap_or_default(),
        location: flatten_locations(&listing.location_map),
    }
}

/// Join every non-empty location name across all countries with commas.
///
/// Country order is the map's sorted key order; names keep their
/// per-country sequence order.
pub fn flatten_locations(location_map: &BTreeMap<String, Vec<String>>) -> String {
    location_map
        .values()
        .flatten()
        .filter(|name| !name.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employer;

    fn keyword_filter() -> ListingFilter {
        ListingFilter::new(&FilterConfig::default())
    }

    fn listing(description: &str) -> Listing {
        Listing {
            id: Some("jv-1".to_string()),
            title: Some("Developer".to_string()),
            description: Some(description.to_string()),
            employer: Some(Employer {
                name: Some("Acme".to_string()),
            }),
            location_map: BTreeMap::new(),
        }
    }

    #[test]
    fn matches_mixed_case_keyword() {
        let filter = keyword_filter();
        assert!(filter.matches("We offer Visa Sponsorship for all candidates"));
        assert!(filter.matches("RELOCATION ASSISTANCE available"));
    }

    #[test]
    fn matches_is_or_across_keywords() {
        let filter = keyword_filter();
        assert!(filter.matches("relocation assistance only"));
        assert!(filter.matches("visa sponsorship only"));
        assert!(!filter.matches("Remote work only"));
    }

    #[test]
    fn filter_skips_listings_without_description() {
        let filter = keyword_filter();
        let mut blank = listing("");
        blank.description = None;
        let listings = vec![blank, listing("visa sponsorship included")];

        let matched = filter.filter(&listings);
        assert_eq!(matched.len(), 1);
        assert_eq!(
            matched[0].description.as_deref(),
            Some("visa sponsorship included")
        );
    }

    #[test]
    fn flatten_joins_across_countries_in_key_order() {
        let mut map = BTreeMap::new();
        map.insert(
            "de".to_string(),
            vec!["Berlin".to_string(), "Munich".to_string()],
        );
        map.insert("fr".to_string(), Vec::new());
        assert_eq!(flatten_locations(&map), "Berlin,Munich");

        map.insert("at".to_string(), vec!["Vienna".to_string()]);
        assert_eq!(flatten_locations(&map), "Vienna,Berlin,Munich");
    }

    #[test]
    fn flatten_skips_empty_names() {
        let mut map = BTreeMap::new();
        map.insert(
            "de".to_string(),
            vec!["".to_string(), "Berlin".to_string(), "".to_string()],
        );
        assert_eq!(flatten_locations(&map), "Berlin");
        assert_eq!(flatten_locations(&BTreeMap::new()), "");
    }

    #[test]
    fn project_fills_missing_fields_with_blanks() {
        let sparse = Listing {
            id: None,
            title: None,
            description: None,
            employer: None,
            location_map: BTreeMap::new(),
        };
        let row = project(&sparse);
        assert_eq!(
            row,
            OutputRow {
                id: String::new(),
                title: String::new(),
                description: String::new(),
                employer: String::new(),
                location: String::new(),
            }
        );

        let mut no_name = listing("text");
        no_name.employer = Some(Employer { name: None });
        assert_eq!(project(&no_name).employer, "");
    }

    #[test]
    fn project_is_idempotent() {
        let mut item = listing("We offer visa sponsorship");
        item.location_map
            .insert("de".to_string(), vec!["Berlin".to_string()]);
        assert_eq!(project(&item), project(&item));
    }
}

//! Decoded search response structures.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One decoded page of search results.
///
/// `number_records` is only meaningful on the first page; the fetch loop
/// never recomputes the page count from later responses.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResult {
    /// Total record count across all pages
    #[serde(rename = "numberRecords", default)]
    pub number_records: u64,

    /// Listings on this page, in server order
    #[serde(default)]
    pub jvs: Vec<Listing>,
}

/// A single job listing.
///
/// Every field the server may omit decodes to its empty form; a sparse
/// listing is projected with blanks rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Free-text description, the field the keyword filter scans
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub employer: Option<Employer>,

    /// Country code to ordered location names. A BTreeMap keeps the
    /// flattening order stable across runs regardless of JSON key order.
    #[serde(rename = "locationMap", default)]
    pub location_map: BTreeMap<String, Vec<String>>,
}

/// Employer record nested inside a listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Employer {
    #[serde(default)]
    pub name: Option<String>,
}

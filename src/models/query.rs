//! Search request payload.

use serde::Serialize;

use crate::config::SearchConfig;

/// POST body for one page request. Field names follow the wire format.
///
/// Only `page` and `session_id` vary between requests; everything else is
/// fixed for the run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub results_per_page: u32,
    pub page: u32,
    pub sort_search: String,
    pub keywords: Vec<KeywordSpec>,
    pub publication_period: Option<String>,
    pub occupation_uris: Vec<String>,
    pub skill_uris: Vec<String>,
    pub required_experience_codes: Vec<String>,
    pub position_schedule_codes: Vec<String>,
    pub sector_codes: Vec<String>,
    pub education_and_qualification_level_codes: Vec<String>,
    pub position_offering_codes: Vec<String>,
    pub location_codes: Vec<String>,
    pub eures_flag_codes: Vec<String>,
    pub other_benefits_codes: Vec<String>,
    pub required_languages: Vec<LanguageSpec>,
    pub min_number_post: Option<u32>,
    /// Server-assigned session cookie value, absent on the first request
    pub session_id: Option<String>,
}

/// A free-text search keyword with its search scope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSpec {
    pub keyword: String,
    pub specific_search_code: String,
}

/// A required language with its proficiency level.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSpec {
    pub iso_code: String,
    pub level: String,
}

impl SearchRequest {
    /// Build the payload for a 1-based page number.
    pub fn new(search: &SearchConfig, page: u32, session_id: Option<String>) -> Self {
        Self {
            results_per_page: search.results_per_page,
            page,
            sort_search: search.sort.clone(),
            keywords: vec![KeywordSpec {
                keyword: search.occupation.clone(),
                specific_search_code: "EVERYWHERE".to_string(),
            }],
            publication_period: None,
            occupation_uris: Vec::new(),
            skill_uris: Vec::new(),
            required_experience_codes: Vec::new(),
            position_schedule_codes: Vec::new(),
            sector_codes: Vec::new(),
            education_and_qualification_level_codes: Vec::new(),
            position_offering_codes: Vec::new(),
            location_codes: search.location_codes.clone(),
            eures_flag_codes: Vec::new(),
            other_benefits_codes: Vec::new(),
            required_languages: vec![LanguageSpec {
                iso_code: search.language.iso_code.clone(),
                level: search.language.level.clone(),
            }],
            min_number_post: None,
            session_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_wire_field_names() {
        let request = SearchRequest::new(&SearchConfig::default(), 3, None);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["resultsPerPage"], 50);
        assert_eq!(value["page"], 3);
        assert_eq!(value["sortSearch"], "BEST_MATCH");
        assert_eq!(value["keywords"][0]["keyword"], "software developer");
        assert_eq!(value["keywords"][0]["specificSearchCode"], "EVERYWHERE");
        assert_eq!(value["locationCodes"], serde_json::json!(["de", "fi", "fr", "nl"]));
        assert_eq!(value["requiredLanguages"][0]["isoCode"], "en");
        assert_eq!(value["requiredLanguages"][0]["level"], "C2");
        assert!(value["publicationPeriod"].is_null());
        assert!(value["minNumberPost"].is_null());
        assert!(value["sessionId"].is_null());
    }

    #[test]
    fn carries_live_session_id() {
        let request =
            SearchRequest::new(&SearchConfig::default(), 2, Some("abc123".to_string()));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["sessionId"], "abc123");
    }
}

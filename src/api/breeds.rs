//! Breed List Endpoint
//!
//! Fetches the breed list and maps the reply into `BreedRecord`s.

use std::collections::HashSet;

use serde_json::Value;

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::i18n::Language;
use crate::models::{BreedListResponse, BreedRecord, RawBreed};
use super::get_text;

/// Fetch all breeds, localized for `language` when the header is enabled
pub async fn fetch_breeds(config: &AppConfig, language: Language) -> Result<Vec<BreedRecord>, FetchError> {
    let headers: Vec<(&str, &str)> = config.language_header_for(language).into_iter().collect();
    log::debug!("GET {} lang={}", config.api_url, language.code());

    let reply = get_text(config.api_url, &headers, config.request_timeout_ms).await?;
    parse_breed_list(reply.status, &reply.body)
}

/// Turn a status code and body into records.
///
/// Fails on a non-2xx status, on invalid JSON, and when `body` is missing or
/// not an array. Individual records are normalized, never rejected, unless
/// an entry is not a JSON object at all.
pub fn parse_breed_list(status: u16, body: &str) -> Result<Vec<BreedRecord>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }

    let envelope: BreedListResponse = serde_json::from_str(body)?;
    let entries = match envelope.body {
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(FetchError::Shape("`body` is not an array".to_string())),
        None => return Err(FetchError::Shape("missing `body`".to_string())),
    };

    let records = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(FetchError::Shape(format!("entry {} is not an object", index)));
            }
            let raw: RawBreed = serde_json::from_value(entry)
                .map_err(|e| FetchError::Shape(format!("entry {}: {}", index, e)))?;
            Ok(raw.normalize())
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(unique_ids(records))
}

/// Give records with a missing or repeated id a positional one (`#3`, `abc#3`)
fn unique_ids(mut records: Vec<BreedRecord>) -> Vec<BreedRecord> {
    let mut seen = HashSet::new();
    for (index, record) in records.iter_mut().enumerate() {
        if record.id.is_empty() || seen.contains(&record.id) {
            log::warn!("Breed {:?} at {} has no unique id", record.name, index);
            let mut candidate = format!("{}#{}", record.id, index);
            while seen.contains(&candidate) {
                candidate.push('#');
            }
            record.id = candidate;
        }
        seen.insert(record.id.clone());
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok() {
        let body = r#"{"body":[
            {"_id":"a","BreedName":"Gir","Location":["Gujarat"],"MainUses":"Dairy","PhysicalDesc":"","Species":"Bos indicus","BreedingTrait":""},
            {"_id":"b","BreedName":"Sahiwal","Location":["Punjab"]}
        ]}"#;
        let breeds = parse_breed_list(200, body).unwrap();
        assert_eq!(breeds.len(), 2);
        assert_eq!(breeds[0].name, "Gir");
        assert_eq!(breeds[0].species, "Bos indicus");
        assert_eq!(breeds[1].locations, vec!["Punjab"]);
    }

    #[test]
    fn test_empty_object_is_shape_error() {
        assert!(matches!(parse_breed_list(200, "{}"), Err(FetchError::Shape(_))));
    }

    #[test]
    fn test_body_not_array() {
        for body in [r#"{"body":null}"#, r#"{"body":{"_id":"a"}}"#, r#"{"body":"Gir"}"#] {
            assert!(matches!(parse_breed_list(200, body), Err(FetchError::Shape(_))), "{}", body);
        }
    }

    #[test]
    fn test_non_object_envelope() {
        assert!(parse_breed_list(200, "[]").is_err());
        assert!(parse_breed_list(200, "null").is_err());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_breed_list(200, "<html>oops</html>"), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_http_status_checked_first() {
        assert_eq!(parse_breed_list(500, r#"{"body":[]}"#), Err(FetchError::Status(500)));
        assert_eq!(parse_breed_list(404, ""), Err(FetchError::Status(404)));
    }

    #[test]
    fn test_empty_list_is_success() {
        assert_eq!(parse_breed_list(200, r#"{"body":[]}"#), Ok(Vec::new()));
    }

    #[test]
    fn test_bad_location_tolerated_per_record() {
        let body = r#"{"body":[{"_id":"a","BreedName":"Gir","Location":"Gujarat"}]}"#;
        let breeds = parse_breed_list(200, body).unwrap();
        assert_eq!(breeds[0].name, "Gir");
        assert!(breeds[0].locations.is_empty());
    }

    #[test]
    fn test_both_key_spellings_accepted() {
        let body = r#"{"body":[
            {"_id":"64f0","id":"64f0","BreedName":"Gir","Location":["Gujarat"]},
            {"_id":"64f1","BreedName":"Sahiwal","breedName":"Sahiwal","Location":["Punjab"]}
        ]}"#;
        let breeds = parse_breed_list(200, body).unwrap();
        assert_eq!(breeds.len(), 2);
        assert_eq!(breeds[0].id, "64f0");
        assert_eq!(breeds[1].name, "Sahiwal");
    }

    #[test]
    fn test_records_without_id_stay_distinct() {
        let body = r#"{"body":[
            {"BreedName":"Gir"},
            {"BreedName":"Sahiwal"},
            {"_id":"a","BreedName":"Ongole"},
            {"_id":"a","BreedName":"Kankrej"}
        ]}"#;
        let breeds = parse_breed_list(200, body).unwrap();
        let ids: Vec<&str> = breeds.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["#0", "#1", "a", "a#3"]);

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), breeds.len());
    }

    #[test]
    fn test_non_object_entry_rejects_list() {
        let body = r#"{"body":[{"_id":"a"}, 42]}"#;
        assert!(matches!(parse_breed_list(200, body), Err(FetchError::Shape(_))));
    }
}

use rail_shared::TrainRoute;
use serde::{Deserialize, Serialize};

/// Search criteria echoed back with every train search.
///
/// `date` is carried through untouched; routes are not filtered by it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchParams {
    pub from: String,
    pub to: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainSearchResult {
    pub trains: Vec<TrainRoute>,
    pub search_params: SearchParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_serialization() {
        let result = TrainSearchResult {
            trains: vec![],
            search_params: SearchParams {
                from: "NDLS".to_string(),
                to: "LKO".to_string(),
                date: "2025-10-04".to_string(),
            },
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["searchParams"]["date"], "2025-10-04");
        assert!(value["trains"].as_array().unwrap().is_empty());
    }
}

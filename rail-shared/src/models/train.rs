use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainRoute {
    pub number: String,
    pub name: String,
    pub from: String,
    pub to: String,
    pub classes: Vec<String>,
}

impl TrainRoute {
    /// Exact, case-sensitive match on both station codes.
    pub fn serves(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }

    /// "12020 SHATABDI EXP", the form PNR records refer to trains by.
    pub fn label(&self) -> String {
        format!("{} {}", self.number, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serves_is_case_sensitive() {
        let route = TrainRoute {
            number: "12020".to_string(),
            name: "SHATABDI EXP".to_string(),
            from: "NDLS".to_string(),
            to: "LKO".to_string(),
            classes: vec!["CC".to_string(), "EC".to_string()],
        };
        assert!(route.serves("NDLS", "LKO"));
        assert!(!route.serves("ndls", "LKO"));
        assert!(!route.serves("LKO", "NDLS"));
        assert_eq!(route.label(), "12020 SHATABDI EXP");
    }
}

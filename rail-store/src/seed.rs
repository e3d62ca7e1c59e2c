use rail_shared::{Masked, PnrRecord, TrainRoute, UserAccount};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::StoreError;

/// Dataset the store starts with.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<UserAccount>,
    #[serde(default)]
    pub pnr_records: Vec<PnrRecord>,
    #[serde(default)]
    pub trains: Vec<TrainRoute>,
}

impl SeedData {
    /// The demo account, two PNRs and two routes out of New Delhi.
    pub fn builtin() -> Self {
        Self {
            users: vec![UserAccount {
                id: 1,
                username: "demo123".to_string(),
                mobile: "9876543210".to_string(),
                email: "demo@example.com".to_string(),
                password: Masked::from("Demo@123"),
                name: "Demo User".to_string(),
            }],
            pnr_records: vec![
                PnrRecord::confirmed("1234567890", "S2", "45", "12020 SHATABDI EXP"),
                PnrRecord::waitlisted("2345678901", "15", "12952 RAJDHANI EXP"),
            ],
            trains: vec![
                route("12020", "SHATABDI EXP", "NDLS", "LKO", &["CC", "EC"]),
                route("12952", "RAJDHANI EXP", "NDLS", "CSMT", &["3A", "2A", "1A"]),
            ],
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::SeedIo {
            path: path.display().to_string(),
            source,
        })?;
        let seed: SeedData = serde_json::from_str(&raw).map_err(|source| StoreError::SeedFormat {
            path: path.display().to_string(),
            source,
        })?;
        seed.check_accounts().map_err(|reason| StoreError::SeedInvalid {
            path: path.display().to_string(),
            reason,
        })?;
        Ok(seed)
    }

    /// Accounts must be numbered 1..=n (new ids are `n + 1`), and handles, mobiles
    /// and emails must each be unique.
    pub fn check_accounts(&self) -> Result<(), String> {
        let count = self.users.len() as u64;
        let mut ids = HashSet::new();
        let mut usernames = HashSet::new();
        let mut mobiles = HashSet::new();
        let mut emails = HashSet::new();

        for user in &self.users {
            if user.id == 0 || user.id > count {
                return Err(format!("account id {} outside 1..={}", user.id, count));
            }
            if !ids.insert(user.id) {
                return Err(format!("duplicate account id {}", user.id));
            }
            if !usernames.insert(user.username.as_str()) {
                return Err(format!("duplicate username {}", user.username));
            }
            if !mobiles.insert(user.mobile.as_str()) {
                return Err(format!("duplicate mobile {}", user.mobile));
            }
            if !emails.insert(user.email.as_str()) {
                return Err(format!("duplicate email {}", user.email));
            }
        }
        Ok(())
    }
}

fn route(number: &str, name: &str, from: &str, to: &str, classes: &[&str]) -> TrainRoute {
    TrainRoute {
        number: number.to_string(),
        name: name.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        classes: classes.iter().map(|c| c.to_string()).collect(),
    }
}

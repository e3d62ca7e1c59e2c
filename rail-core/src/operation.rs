use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The closed set of operations the mock service answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Login,
    Signup,
    PnrStatus,
    SearchTrains,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Login,
        Operation::Signup,
        Operation::PnrStatus,
        Operation::SearchTrains,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::Signup => "signup",
            Operation::PnrStatus => "pnrStatus",
            Operation::SearchTrains => "searchTrains",
        }
    }

    /// Path the operation was published under in the mock API catalog.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Operation::Login => "/auth/login",
            Operation::Signup => "/auth/signup",
            Operation::PnrStatus => "/pnr/status",
            Operation::SearchTrains => "/trains/search",
        }
    }

}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the operation name or its catalog path.
///
/// `/booking/create` is listed in the catalog but has no handler, so it is rejected like
/// any other unknown name.
impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s || op.endpoint() == s)
            .ok_or_else(|| CoreError::UnknownOperation(s.to_string()))
    }
}

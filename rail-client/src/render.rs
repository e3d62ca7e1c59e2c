use rail_core::{LoginData, SignupData, TrainSearchResult};
use rail_shared::{PnrRecord, PnrStatus};

/// One-line status summary for a PNR lookup.
pub fn pnr_summary(record: &PnrRecord) -> String {
    match record.status {
        PnrStatus::Confirmed => format!(
            "Status: CONFIRMED | Coach: {}, Seat: {} | Train: {}",
            record.coach.as_deref().unwrap_or("-"),
            record.seat.as_deref().unwrap_or("-"),
            record.train
        ),
        PnrStatus::Waitlisted => format!(
            "Status: WAITING LIST (WL {}) | Train: {}",
            record.waitlist.as_deref().unwrap_or("-"),
            record.train
        ),
        PnrStatus::Other(ref code) => format!("Status: {} | Train: {}", code, record.train),
    }
}

pub fn login_greeting(data: &LoginData) -> String {
    format!("Login successful! Welcome {}", data.name)
}

/// "Hi, Demo" style label for the signed-in header.
pub fn first_name(data: &LoginData) -> &str {
    data.name.split(' ').next().unwrap_or_default()
}

pub fn signup_confirmation(data: &SignupData) -> String {
    format!("Account created successfully! Your username is: {}", data.username)
}

pub fn search_heading(result: &TrainSearchResult) -> String {
    let params = &result.search_params;
    format!(
        "Trains from {} to {} on {}",
        params.from.to_uppercase(),
        params.to.to_uppercase(),
        params.date
    )
}

pub fn train_lines(result: &TrainSearchResult) -> Vec<String> {
    result
        .trains
        .iter()
        .map(|t| format!("{} {}  {} -> {}  [{}]", t.number, t.name, t.from, t.to, t.classes.join(", ")))
        .collect()
}

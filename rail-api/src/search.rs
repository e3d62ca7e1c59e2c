use rail_core::{ApiSuccess, Payload, ResponseData, SearchParams, TrainSearchResult};
use tracing::info;

use crate::{error::AppError, state::AppState};

/// No match is still a success, with an empty list.
pub async fn search_trains(state: &AppState, payload: &Payload) -> Result<ApiSuccess, AppError> {
    let params = SearchParams {
        from: payload.str_field("from").to_string(),
        to: payload.str_field("to").to_string(),
        date: payload.str_field("date").to_string(),
    };

    let trains = state.trains.search_trains(&params.from, &params.to).await?;
    info!(from = %params.from, to = %params.to, results = trains.len(), "Train search");

    Ok(ApiSuccess::new(
        "Trains fetched successfully",
        ResponseData::SearchTrains(TrainSearchResult {
            trains,
            search_params: params,
        }),
    ))
}

use rail_core::{ApiSuccess, Payload, ResponseData};
use tracing::debug;

use crate::{error::AppError, state::AppState};

pub async fn pnr_status(state: &AppState, payload: &Payload) -> Result<ApiSuccess, AppError> {
    let pnr = payload.str_field("pnr");

    let record = state
        .pnr_records
        .find_pnr(pnr)
        .await?
        .ok_or_else(|| AppError::NotFoundError(pnr.to_string()))?;
    debug!(pnr = %record.pnr, status = %record.status, "PNR resolved");

    Ok(ApiSuccess::new(
        "PNR status fetched successfully",
        ResponseData::PnrStatus(record),
    ))
}

//! Handlers for the `/inquiries` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use elegant_db::models::inquiry::{CreateInquiry, Inquiry};
use elegant_db::repositories::InquiryRepo;

use crate::error::AppResult;
use crate::response::CreatedResponse;
use crate::state::AppState;

/// Acknowledgement shown by the storefront's contact form.
const CONFIRMATION: &str =
    "Your message has been sent successfully. We will get back to you soon!";

/// POST /api/inquiries
///
/// Validate the contact-form payload and persist it. Validation failures
/// return 400 with a structured detail list.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInquiry>,
) -> AppResult<(StatusCode, Json<CreatedResponse<Inquiry>>)> {
    input.validate()?;

    let inquiry = InquiryRepo::create(&state.pool, &input).await?;
    tracing::info!(inquiry_id = %inquiry.id, "Inquiry received");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(inquiry, CONFIRMATION)),
    ))
}

//! Contact-form inquiry model and create DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

use elegant_core::types::Timestamp;

/// An inquiry row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub inquiry_type: String,
    pub created_at: Timestamp,
}

/// DTO for creating an inquiry from the contact form.
///
/// Required fields are `Option` so a missing field surfaces as a structured
/// validation error (HTTP 400 with a detail list) instead of a body
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInquiry {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 200, message = "name must be 1-200 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address")
    )]
    pub email: Option<String>,

    pub phone: Option<String>,

    #[validate(
        required(message = "subject is required"),
        length(min = 1, max = 300, message = "subject must be 1-300 characters")
    )]
    pub subject: Option<String>,

    #[validate(
        required(message = "message is required"),
        length(min = 1, max = 5000, message = "message must be 1-5000 characters")
    )]
    pub message: Option<String>,

    /// Inquiry channel/topic sent by the form (`"general"` when omitted).
    #[serde(rename = "type")]
    pub inquiry_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Repository for the `inquiries` table.

use sqlx::PgPool;

use crate::models::inquiry::{CreateInquiry, Inquiry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, subject, message, inquiry_type, created_at";

/// Write operations for contact-form inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a new inquiry, returning the created row.
    ///
    /// Callers validate `input` first; the required fields are guaranteed
    /// `Some` here. An omitted `type` defaults to `general`.
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        let inquiry_type = input.inquiry_type.as_deref().unwrap_or("general");
        let query = format!(
            "INSERT INTO inquiries (name, email, phone, subject, message, inquiry_type)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(inquiry_type)
            .fetch_one(pool)
            .await
    }
}

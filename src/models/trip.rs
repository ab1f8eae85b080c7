use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier used when the generation path gets no user identifier.
pub const GUEST_IDENTIFIER: &str = "guest";

/// Prompt recorded when the generation path gets no prompt text.
pub const TEXT_ONLY_PROMPT: &str = "text-only";

/// Prompt recorded when a manual save carries no aesthetic prompt.
pub const SAVED_TRIP_PROMPT: &str = "saved-trip";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TripSource {
    Auto,
    Manual,
}

/// One stored trip. Records are insert-only; nothing updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TripRecord {
    pub id: String,
    pub user_identifier: String,
    pub prompt: String,
    pub plan_text: String,
    pub saved_at: Option<DateTime<Utc>>,
    pub source: TripSource,
    pub created_at: DateTime<Utc>,
}

impl TripRecord {
    /// Record created as a side effect of plan generation.
    pub fn auto(
        user_identifier: Option<&str>,
        prompt: Option<&str>,
        plan_text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_identifier: non_blank(user_identifier)
                .unwrap_or(GUEST_IDENTIFIER)
                .to_string(),
            prompt: non_blank(prompt).unwrap_or(TEXT_ONLY_PROMPT).to_string(),
            plan_text: plan_text.into(),
            saved_at: None,
            source: TripSource::Auto,
            created_at: Utc::now(),
        }
    }

    /// Record created by an explicit save request.
    pub fn manual(
        user_identifier: impl Into<String>,
        prompt: Option<&str>,
        plan_text: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_identifier: user_identifier.into(),
            prompt: non_blank(prompt).unwrap_or(SAVED_TRIP_PROMPT).to_string(),
            plan_text: plan_text.into(),
            saved_at: Some(now),
            source: TripSource::Manual,
            created_at: now,
        }
    }
}

fn non_blank(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}

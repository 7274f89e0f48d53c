//! State behind the movement entry form.
//!
//! The form is the only place that fills in defaults: a blank concept becomes
//! `"-"` and the payment method starts as the digital wallet. After a
//! successful submission the per-entry fields are cleared while the date,
//! type and payment method stick around for the next entry.

use serde_json::Value;
use thiserror::Error;

use crate::client::{ClientError, RelayClient};
use crate::constants::{CONCEPT_PLACEHOLDER, MSG_SUBMIT_FAILED};
use crate::models::{Category, MovementRecord, MovementType, PaymentMethod};

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("amount is required")]
    MissingAmount,
    #[error("category is required")]
    MissingCategory,
    #[error("amount '{0}' is not a number")]
    InvalidAmount(String),
}

/// What the user is told once a submission settles.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

impl Notification {
    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Notification::Success(m) | Notification::Failure(m) => m,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntryForm {
    pub date: String,
    pub kind: MovementType,
    /// Raw text of the amount input; parsed only on submit.
    pub amount: String,
    pub category: Option<Category>,
    pub concept: String,
    pub payment_method: PaymentMethod,
    submitting: bool,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryForm {
    /// Empty form dated today (UTC).
    pub fn new() -> Self {
        Self::with_date(time::OffsetDateTime::now_utc().date().to_string())
    }

    pub fn with_date(date: impl Into<String>) -> Self {
        EntryForm {
            date: date.into(),
            kind: MovementType::default(),
            amount: String::new(),
            category: None,
            concept: String::new(),
            payment_method: PaymentMethod::default(),
            submitting: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit control state: amount typed, category picked, nothing pending.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.amount.trim().is_empty() && self.category.is_some()
    }

    /// Record that would be sent right now, with defaults applied.
    pub fn to_record(&self) -> Result<MovementRecord, FormError> {
        let raw_amount = self.amount.trim();
        if raw_amount.is_empty() {
            return Err(FormError::MissingAmount);
        }
        let category = self.category.ok_or(FormError::MissingCategory)?;
        let amount = raw_amount
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| FormError::InvalidAmount(self.amount.clone()))?;

        let concept = if self.concept.trim().is_empty() {
            CONCEPT_PLACEHOLDER.to_string()
        } else {
            self.concept.clone()
        };

        Ok(MovementRecord {
            date: self.date.clone(),
            kind: self.kind,
            category,
            concept,
            payment_method: self.payment_method,
            amount,
        })
    }

    /// Builds the record and marks the form busy until `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<MovementRecord, FormError> {
        if self.submitting {
            return Err(FormError::InFlight);
        }
        let record = self.to_record()?;
        self.submitting = true;
        Ok(record)
    }

    /// Applies the relay's verdict and releases the submit control.
    pub fn finish_submit(&mut self, outcome: Result<Value, ClientError>) -> Notification {
        self.submitting = false;

        match outcome {
            Ok(_) => {
                let message = format!(
                    "✅ {} registrado exitosamente: S/ {}",
                    self.kind.label(),
                    self.amount
                );
                self.amount.clear();
                self.category = None;
                self.concept.clear();
                Notification::Success(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "movement submission failed");
                Notification::Failure(MSG_SUBMIT_FAILED.to_string())
            }
        }
    }

    /// One full round trip through the relay.
    pub async fn submit(&mut self, client: &RelayClient) -> Result<Notification, FormError> {
        let record = self.begin_submit()?;
        let outcome = client.submit(&record).await;
        Ok(self.finish_submit(outcome))
    }
}

use serde::{Deserialize, Serialize};

use crate::constants::{CONCEPT_PLACEHOLDER, RESULT_ERROR};

/// Whether a movement takes money out or brings it in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementType {
    #[default]
    #[serde(rename = "gasto")]
    Expense,
    #[serde(rename = "ingreso")]
    Income,
}

impl MovementType {
    pub fn label(&self) -> &'static str {
        match self {
            MovementType::Expense => "Gasto",
            MovementType::Income => "Ingreso",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "comida")]
    Food,
    #[serde(rename = "transporte")]
    Transport,
    #[serde(rename = "casa")]
    Housing,
    #[serde(rename = "entretenimiento")]
    Entertainment,
    #[serde(rename = "salud")]
    Health,
    #[serde(rename = "otros")]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Entertainment,
        Category::Health,
        Category::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Food => "comida",
            Category::Transport => "transporte",
            Category::Housing => "casa",
            Category::Entertainment => "entretenimiento",
            Category::Health => "salud",
            Category::Other => "otros",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "billetera digital")]
    DigitalWallet,
    #[serde(rename = "efectivo")]
    Cash,
    #[serde(rename = "transferencia")]
    Transfer,
}

/// One income or expense entry as sent over the wire.
///
/// Keys follow the spreadsheet script's contract, so the Rust names are
/// mapped onto the Spanish field names it expects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovementRecord {
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "tipo")]
    pub kind: MovementType,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "concepto", default = "default_concept")]
    pub concept: String,
    #[serde(rename = "medioPago", default)]
    pub payment_method: PaymentMethod,
    #[serde(rename = "monto")]
    pub amount: f64,
}

fn default_concept() -> String {
    CONCEPT_PLACEHOLDER.to_string()
}

/// Body returned by the relay when it refuses or fails a submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub result: String,
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        ErrorBody {
            result: RESULT_ERROR.to_string(),
            error: message.to_string(),
        }
    }
}

/// Minimal view of the storage service's reply. Anything beyond `result`
/// and `error` is owned by the service and left alone.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SubmissionReply {
    pub result: Option<String>,
    pub error: Option<String>,
}

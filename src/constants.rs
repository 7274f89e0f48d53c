// Server configuration
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";

// Environment variables
pub const ENV_SERVER_HOST: &str = "SERVER_HOST";
pub const ENV_SERVER_PORT: &str = "SERVER_PORT";
pub const ENV_SHEETS_URL: &str = "SHEETS_URL";
pub const ENV_ALLOWED_ORIGIN: &str = "ALLOWED_ORIGIN";

// Routes
pub const RELAY_PATH: &str = "/api/sheets";

// Wire keys of a movement record
pub const FIELD_DATE: &str = "fecha";
pub const FIELD_KIND: &str = "tipo";
pub const FIELD_CATEGORY: &str = "categoria";
pub const FIELD_AMOUNT: &str = "monto";
pub const REQUIRED_FIELDS: [&str; 4] = [FIELD_DATE, FIELD_KIND, FIELD_CATEGORY, FIELD_AMOUNT];

// Record defaults
pub const CONCEPT_PLACEHOLDER: &str = "-";

// Result flags
pub const RESULT_SUCCESS: &str = "success";
pub const RESULT_ERROR: &str = "error";

// Error messages
pub const ERR_MISSING_FIELDS: &str = "Faltan campos obligatorios";
pub const ERR_INVALID_AMOUNT: &str = "El monto debe ser un número válido";
pub const ERR_PROCESSING: &str = "Error al procesar la solicitud";

// Form notifications
pub const MSG_SUBMIT_FAILED: &str = "❌ Error al registrar el movimiento. Por favor, intenta de nuevo.";

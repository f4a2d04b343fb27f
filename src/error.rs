use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("AuthError: {0}")]
    Auth(#[from] AuthError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ExportError: {0}")]
    Export(#[from] ExportError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Input error: {0}")]
    Input(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login failed: Invalid credentials")]
    InvalidCredentials,
    #[error("Login failed")]
    LoginFailed,
    #[error("No usable bearer token in login response")]
    TokenMissing,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Keyring error: {0}")]
    KeyringError(String),
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed")]
    ConfigSaveFailed,
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Attribute catalog could not be retrieved")]
    AttributeCatalogUnavailable,
    #[error("No item found for variation {variation}")]
    VariationNotFound { variation: u64 },
    #[error("No variation data for route {route}")]
    NoVariationData { route: String },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Output write failed at {path}: {source}")]
    OutputIo {
        path: String,
        source: std::io::Error,
    },
}

impl AppError {
    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Auth(_) => Some("'pax-cli auth login' and try again".to_string()),
            AppError::Api(ApiError::Timeout { .. }) => {
                Some("Check your internet or PlentyMarkets connection and try again".to_string())
            }
            AppError::Config(_) => {
                Some("'pax-cli config set <field> <value>' to fix the configuration".to_string())
            }
            AppError::Export(ExportError::AttributeCatalogUnavailable) => Some(
                "Check the configured base URL and the REST permissions of the account".to_string(),
            ),
            _ => None,
        }
    }
}

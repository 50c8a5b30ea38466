#[derive(thiserror::Error, Debug)]
pub enum MeetPointError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("invalid coordinate ({lat}, {lon}): {message}")]
    InvalidCoordinate { lat: f64, lon: f64, message: String },
    #[error("constraint maximum must be a positive, finite number, found {0}")]
    InvalidConstraint(f64),
    #[error("Invalid search configuration: {0}")]
    InvalidConfiguration(String),
    #[error("at least {required} resolvable origins are required, found {found}")]
    InsufficientOrigins { required: usize, found: usize },
    #[error("{0}")]
    InternalError(String),
}

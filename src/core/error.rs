/// Engine-wide Result type
pub type Result<T> = std::result::Result<T, PricingError>;

/// Failure of the external distance/duration provider.
///
/// Kept distinct from [`PricingError`] so callers can tell "temporarily
/// unable to price" apart from a request that is simply not serviceable.
#[derive(thiserror::Error, Debug)]
pub enum DistanceOracleError {
    /// Provider did not answer within the caller-enforced timeout
    #[error("distance provider timed out")]
    Timeout,

    /// Provider reachable but returned an error
    #[error("distance provider unavailable: {0}")]
    Unavailable(String),

    /// Provider answered but found no drivable route between the points
    #[error("no route found between the requested points")]
    NoRoute,
}

/// Main pricing engine error type
#[derive(thiserror::Error, Debug)]
pub enum PricingError {
    /// Malformed or out-of-range request fields, rejected at the boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// No price exists for this request (e.g. unknown vehicle class)
    #[error("Not serviceable: {0}")]
    NotServiceable(String),

    /// Variable-mode pricing is impossible while the oracle is down
    #[error("Unable to calculate route: {0}")]
    RouteUnavailable(#[from] DistanceOracleError),

    /// An external reference-data source failed in a way the engine
    /// could not recover from locally
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Bad reference data or engine configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper constructors for common error scenarios
impl PricingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PricingError::Validation(msg.into())
    }

    pub fn not_serviceable(msg: impl Into<String>) -> Self {
        PricingError::NotServiceable(msg.into())
    }

    pub fn lookup(msg: impl Into<String>) -> Self {
        PricingError::Lookup(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        PricingError::Configuration(msg.into())
    }
}

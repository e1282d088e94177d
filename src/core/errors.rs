/// Errors raised by the office simulator
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A configuration value is outside its allowed domain
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// A uniform draw outside the open interval (0, 1) reached the
    /// exponential transform
    SamplingDomain { draw: f64 },
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimError::InvalidParameter { name, value, reason }
    }
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid parameter {} = {}: {}", name, value, reason)
            }
            SimError::SamplingDomain { draw } => {
                write!(f, "Uniform draw {} is outside the open interval (0, 1)", draw)
            }
        }
    }
}

impl std::error::Error for SimError {}

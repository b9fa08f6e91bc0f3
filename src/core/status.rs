//! Status codes for integrators

/// How an integration call finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The trajectory reaches the end of the requested interval (or the last
    /// point of a truncated fixed-step grid).
    Success,
    /// The adaptive controller needed a step below the minimum step size.
    /// The trajectory stops short of the requested end time.
    StepSizeTooSmall,
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::StepSizeTooSmall => write!(f, "step size too small"),
        }
    }
}

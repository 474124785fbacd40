use thiserror::Error;

/// Invalid parameters are a caller bug, not a runtime condition to
/// tolerate: every variant is fatal to the single call that raised it,
/// and no function returns a sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("{function}: parameter '{parameter}' must be a finite number")]
    NonFiniteParameter {
        function: &'static str,
        parameter: &'static str,
    },
    #[error("{function}: {constraint}")]
    ConstraintViolation {
        function: &'static str,
        constraint: &'static str,
    },
    #[error("unknown membership function key '{0}'")]
    UnknownFunction(String),
    #[error("{function}: expected {expected} parameters, found {found}")]
    ParameterCount {
        function: &'static str,
        expected: usize,
        found: usize,
    },
}

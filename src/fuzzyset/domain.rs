use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::linspace::Linspace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("domain: bounds must be finite numbers")]
    NonFiniteBound,
    #[error("domain: min must not exceed max")]
    Inverted,
}

/// The closed interval a caller samples membership functions over.
/// Membership functions themselves are defined over the full real line;
/// the domain only scopes visualization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DomainJsonProp")]
pub struct Domain {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct DomainJsonProp {
    min: f64,
    max: f64,
}

impl TryFrom<DomainJsonProp> for Domain {
    type Error = DomainError;

    fn try_from(prop: DomainJsonProp) -> Result<Domain, DomainError> {
        Domain::new(prop.min, prop.max)
    }
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Result<Domain, DomainError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::NonFiniteBound);
        }
        if min > max {
            return Err(DomainError::Inverted);
        }
        Ok(Domain { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// `n` evenly spaced sample positions from min to max inclusive.
    pub fn samples(&self, n: usize) -> Linspace {
        Linspace::new(self.min, self.max, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_and_non_finite_bounds() {
        assert_eq!(Domain::new(5.0, 1.0).unwrap_err(), DomainError::Inverted);
        assert_eq!(
            Domain::new(f64::NAN, 1.0).unwrap_err(),
            DomainError::NonFiniteBound
        );
        assert_eq!(
            Domain::new(0.0, f64::INFINITY).unwrap_err(),
            DomainError::NonFiniteBound
        );
    }

    #[test]
    fn zero_span_domain_is_valid() {
        let domain = Domain::new(2.0, 2.0).unwrap();
        assert_eq!(domain.span(), 0.0);
        assert!(domain.contains(2.0));
        assert!(!domain.contains(2.1));
    }

    #[test]
    fn samples_cover_the_interval() {
        let domain = Domain::new(0.0, 1.0).unwrap();
        let samples: Vec<f64> = domain.samples(3).collect();
        assert_eq!(samples, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn deserialization_validates_bounds() {
        let domain: Domain = serde_json::from_str(r#"{"min": -1.0, "max": 4.0}"#).unwrap();
        assert_eq!(domain.min(), -1.0);
        assert_eq!(domain.max(), 4.0);
        let inverted: Result<Domain, _> = serde_json::from_str(r#"{"min": 4.0, "max": -1.0}"#);
        assert!(inverted.is_err());
    }
}

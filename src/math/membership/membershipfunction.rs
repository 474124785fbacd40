use serde::{Deserialize, Serialize};

use crate::fuzzyset::domain::Domain;
use crate::math::membership::formula;
use crate::math::membership::membershiperror::MembershipError;

/// Catalogue keys in presentation order, as offered to a caller building
/// a preset list.
pub const CATALOGUE: [&'static str; 11] = [
    formula::TRIANGULAR,
    formula::TRAPEZOIDAL,
    formula::GAUSSIAN,
    formula::GENERALIZED_BELL,
    formula::SIGMOID,
    formula::S_CURVE,
    formula::Z_CURVE,
    formula::PI_CURVE,
    formula::LEFT_SHOULDER,
    formula::RIGHT_SHOULDER,
    formula::SINGLETON,
];

/// A membership function as data: a variant tag plus its shape parameters.
/// Evaluation resolves to the closed-form formula at call time, so a set
/// definition never carries executable code.
///
/// The serde `kind` tag of each variant equals its catalogue key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MembershipFunction {
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    Gaussian { mean: f64, sigma: f64 },
    GeneralizedBell { a: f64, b: f64, c: f64 },
    Sigmoid { a: f64, c: f64 },
    SCurve { a: f64, b: f64 },
    ZCurve { a: f64, b: f64 },
    PiCurve { a: f64, b: f64, c: f64, d: f64 },
    LeftShoulder { a: f64, b: f64 },
    RightShoulder { a: f64, b: f64 },
    Singleton { c: f64 },
}

impl MembershipFunction {
    pub fn key(&self) -> &'static str {
        match self {
            MembershipFunction::Triangular { .. } => formula::TRIANGULAR,
            MembershipFunction::Trapezoidal { .. } => formula::TRAPEZOIDAL,
            MembershipFunction::Gaussian { .. } => formula::GAUSSIAN,
            MembershipFunction::GeneralizedBell { .. } => formula::GENERALIZED_BELL,
            MembershipFunction::Sigmoid { .. } => formula::SIGMOID,
            MembershipFunction::SCurve { .. } => formula::S_CURVE,
            MembershipFunction::ZCurve { .. } => formula::Z_CURVE,
            MembershipFunction::PiCurve { .. } => formula::PI_CURVE,
            MembershipFunction::LeftShoulder { .. } => formula::LEFT_SHOULDER,
            MembershipFunction::RightShoulder { .. } => formula::RIGHT_SHOULDER,
            MembershipFunction::Singleton { .. } => formula::SINGLETON,
        }
    }

    /// Ordered parameter list, matching the positional convention of
    /// [`MembershipFunction::from_parameters`].
    pub fn parameters(&self) -> Vec<f64> {
        match *self {
            MembershipFunction::Triangular { a, b, c } => vec![a, b, c],
            MembershipFunction::Trapezoidal { a, b, c, d } => vec![a, b, c, d],
            MembershipFunction::Gaussian { mean, sigma } => vec![mean, sigma],
            MembershipFunction::GeneralizedBell { a, b, c } => vec![a, b, c],
            MembershipFunction::Sigmoid { a, c } => vec![a, c],
            MembershipFunction::SCurve { a, b } => vec![a, b],
            MembershipFunction::ZCurve { a, b } => vec![a, b],
            MembershipFunction::PiCurve { a, b, c, d } => vec![a, b, c, d],
            MembershipFunction::LeftShoulder { a, b } => vec![a, b],
            MembershipFunction::RightShoulder { a, b } => vec![a, b],
            MembershipFunction::Singleton { c } => vec![c],
        }
    }

    /// Catalogue lookup: the canonical key constant and its parameter
    /// count, or None for a key outside the catalogue.
    fn catalogue_entry(key: &str) -> Option<(&'static str, usize)> {
        match key {
            k if k == formula::TRIANGULAR => Some((formula::TRIANGULAR, 3)),
            k if k == formula::TRAPEZOIDAL => Some((formula::TRAPEZOIDAL, 4)),
            k if k == formula::GAUSSIAN => Some((formula::GAUSSIAN, 2)),
            k if k == formula::GENERALIZED_BELL => Some((formula::GENERALIZED_BELL, 3)),
            k if k == formula::SIGMOID => Some((formula::SIGMOID, 2)),
            k if k == formula::S_CURVE => Some((formula::S_CURVE, 2)),
            k if k == formula::Z_CURVE => Some((formula::Z_CURVE, 2)),
            k if k == formula::PI_CURVE => Some((formula::PI_CURVE, 4)),
            k if k == formula::LEFT_SHOULDER => Some((formula::LEFT_SHOULDER, 2)),
            k if k == formula::RIGHT_SHOULDER => Some((formula::RIGHT_SHOULDER, 2)),
            k if k == formula::SINGLETON => Some((formula::SINGLETON, 1)),
            _ => None,
        }
    }

    /// Fixed parameter count for a catalogue key.
    pub fn arity(key: &str) -> Option<usize> {
        MembershipFunction::catalogue_entry(key).map(|(_, n)| n)
    }

    /// Resolve a catalogue key plus an ordered parameter list into a
    /// concrete variant. Shape constraints are not checked here; they are
    /// checked on every evaluation.
    pub fn from_parameters(key: &str, parameters: &[f64]) -> Result<MembershipFunction, MembershipError> {
        let (function, expected) = MembershipFunction::catalogue_entry(key)
            .ok_or_else(|| MembershipError::UnknownFunction(key.to_owned()))?;
        if parameters.len() != expected {
            return Err(MembershipError::ParameterCount {
                function,
                expected,
                found: parameters.len(),
            });
        }
        let p = parameters;
        let function = match key {
            k if k == formula::TRIANGULAR => MembershipFunction::Triangular { a: p[0], b: p[1], c: p[2] },
            k if k == formula::TRAPEZOIDAL => MembershipFunction::Trapezoidal { a: p[0], b: p[1], c: p[2], d: p[3] },
            k if k == formula::GAUSSIAN => MembershipFunction::Gaussian { mean: p[0], sigma: p[1] },
            k if k == formula::GENERALIZED_BELL => MembershipFunction::GeneralizedBell { a: p[0], b: p[1], c: p[2] },
            k if k == formula::SIGMOID => MembershipFunction::Sigmoid { a: p[0], c: p[1] },
            k if k == formula::S_CURVE => MembershipFunction::SCurve { a: p[0], b: p[1] },
            k if k == formula::Z_CURVE => MembershipFunction::ZCurve { a: p[0], b: p[1] },
            k if k == formula::PI_CURVE => MembershipFunction::PiCurve { a: p[0], b: p[1], c: p[2], d: p[3] },
            k if k == formula::LEFT_SHOULDER => MembershipFunction::LeftShoulder { a: p[0], b: p[1] },
            k if k == formula::RIGHT_SHOULDER => MembershipFunction::RightShoulder { a: p[0], b: p[1] },
            _ => MembershipFunction::Singleton { c: p[0] },
        };
        Ok(function)
    }

    /// Stock starting parameters for a catalogue key, scaled to the
    /// domain a caller is charting over. A zero-span domain falls back to
    /// a unit width so every produced parameter set evaluates cleanly.
    pub fn default_for_domain(key: &str, domain: &Domain) -> Result<MembershipFunction, MembershipError> {
        let min = domain.min();
        let width = if domain.span() > 0.0 { domain.span() } else { 1.0 };
        let max = min + width;
        let mid = min + width / 2.0;
        let function = match key {
            k if k == formula::TRIANGULAR => MembershipFunction::Triangular { a: min, b: mid, c: max },
            k if k == formula::TRAPEZOIDAL => MembershipFunction::Trapezoidal {
                a: min,
                b: min + width / 4.0,
                c: max - width / 4.0,
                d: max,
            },
            k if k == formula::GAUSSIAN => MembershipFunction::Gaussian { mean: mid, sigma: width / 6.0 },
            k if k == formula::GENERALIZED_BELL => MembershipFunction::GeneralizedBell {
                a: width / 4.0,
                b: 2.0,
                c: mid,
            },
            k if k == formula::SIGMOID => MembershipFunction::Sigmoid { a: 10.0 / width, c: mid },
            k if k == formula::S_CURVE => MembershipFunction::SCurve { a: min, b: max },
            k if k == formula::Z_CURVE => MembershipFunction::ZCurve { a: min, b: max },
            k if k == formula::PI_CURVE => MembershipFunction::PiCurve {
                a: min,
                b: min + width / 4.0,
                c: max - width / 4.0,
                d: max,
            },
            k if k == formula::LEFT_SHOULDER => MembershipFunction::LeftShoulder { a: min, b: max },
            k if k == formula::RIGHT_SHOULDER => MembershipFunction::RightShoulder { a: min, b: max },
            k if k == formula::SINGLETON => MembershipFunction::Singleton { c: mid },
            _ => return Err(MembershipError::UnknownFunction(key.to_owned())),
        };
        Ok(function)
    }

    /// Evaluate the membership degree of `x`, in [0,1].
    pub fn evaluate(&self, x: f64) -> Result<f64, MembershipError> {
        match *self {
            MembershipFunction::Triangular { a, b, c } => formula::triangular(x, a, b, c),
            MembershipFunction::Trapezoidal { a, b, c, d } => formula::trapezoidal(x, a, b, c, d),
            MembershipFunction::Gaussian { mean, sigma } => formula::gaussian(x, mean, sigma),
            MembershipFunction::GeneralizedBell { a, b, c } => formula::generalized_bell(x, a, b, c),
            MembershipFunction::Sigmoid { a, c } => formula::sigmoid(x, a, c),
            MembershipFunction::SCurve { a, b } => formula::s_curve(x, a, b),
            MembershipFunction::ZCurve { a, b } => formula::z_curve(x, a, b),
            MembershipFunction::PiCurve { a, b, c, d } => formula::pi_curve(x, a, b, c, d),
            MembershipFunction::LeftShoulder { a, b } => formula::left_shoulder(x, a, b),
            MembershipFunction::RightShoulder { a, b } => formula::right_shoulder(x, a, b),
            MembershipFunction::Singleton { c } => formula::singleton(x, c),
        }
    }

    /// Degree of the complement set at `x`.
    pub fn evaluate_complement(&self, x: f64) -> Result<f64, MembershipError> {
        formula::complement(self.evaluate(x)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parameters_round_trips_every_key() {
        for key in CATALOGUE {
            let arity = MembershipFunction::arity(key).unwrap();
            let parameters: Vec<f64> = (1..=arity).map(|i| i as f64).collect();
            let function = MembershipFunction::from_parameters(key, &parameters).unwrap();
            assert_eq!(function.key(), key);
            assert_eq!(function.parameters(), parameters);
        }
    }

    #[test]
    fn from_parameters_rejects_unknown_key() {
        let err = MembershipFunction::from_parameters("bellCurve", &[1.0]).unwrap_err();
        assert_eq!(err, MembershipError::UnknownFunction("bellCurve".to_owned()));
    }

    #[test]
    fn from_parameters_rejects_wrong_arity() {
        let err = MembershipFunction::from_parameters("triangular", &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "triangular: expected 3 parameters, found 2"
        );
    }

    #[test]
    fn evaluate_dispatches_to_the_formula() {
        let function = MembershipFunction::Triangular { a: 0.0, b: 5.0, c: 10.0 };
        assert_eq!(function.evaluate(5.0).unwrap(), 1.0);
        assert_eq!(function.evaluate(2.5).unwrap(), 0.5);

        let function = MembershipFunction::Gaussian { mean: 0.0, sigma: 0.0 };
        assert!(function.evaluate(0.0).is_err());
    }

    #[test]
    fn evaluate_complement_inverts_the_degree() {
        let function = MembershipFunction::SCurve { a: 0.0, b: 10.0 };
        let direct = function.evaluate(2.5).unwrap();
        let inverted = function.evaluate_complement(2.5).unwrap();
        assert!((direct + inverted - 1.0).abs() < 1e-12);
    }

    #[test]
    fn serde_tag_equals_catalogue_key() {
        for key in CATALOGUE {
            let arity = MembershipFunction::arity(key).unwrap();
            let parameters: Vec<f64> = (1..=arity).map(|i| i as f64).collect();
            let function = MembershipFunction::from_parameters(key, &parameters).unwrap();
            let value = serde_json::to_value(&function).unwrap();
            assert_eq!(value["kind"], key);
            let back: MembershipFunction = serde_json::from_value(value).unwrap();
            assert_eq!(back, function);
        }
    }

    #[test]
    fn defaults_evaluate_cleanly_on_any_domain() {
        let domains = [
            Domain::new(0.0, 10.0).unwrap(),
            Domain::new(-5.0, 5.0).unwrap(),
            Domain::new(3.0, 3.0).unwrap(),
        ];
        for domain in &domains {
            for key in CATALOGUE {
                let function = MembershipFunction::default_for_domain(key, domain).unwrap();
                let degree = function.evaluate(domain.min()).unwrap();
                assert!((0.0..=1.0).contains(&degree));
            }
        }
    }
}

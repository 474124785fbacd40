use uuid::Uuid;

use crate::fuzzyset::domain::Domain;
use crate::math::membership::membershiperror::MembershipError;
use crate::math::membership::membershipfunction::MembershipFunction;
use crate::math::point::Point2D;

/// A named pairing of a membership function and its parameters, as the
/// visualization layer defines it: identity, display label, display
/// colour, shape. Evaluation is stateless; the set stores nothing
/// between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzySet {
    uuid: Uuid,
    label: String,
    color: String,
    function: MembershipFunction,
}

impl FuzzySet {
    pub fn new(label: String, color: String, function: MembershipFunction) -> FuzzySet {
        FuzzySet {
            uuid: Uuid::new_v4(),
            label,
            color,
            function,
        }
    }

    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    pub fn label(&self) -> &String {
        &self.label
    }

    pub fn color(&self) -> &String {
        &self.color
    }

    pub fn function(&self) -> &MembershipFunction {
        &self.function
    }

    pub fn set_function(&mut self, function: MembershipFunction) {
        self.function = function;
    }

    /// Membership degree of the crisp value `x`.
    pub fn degree(&self, x: f64) -> Result<f64, MembershipError> {
        self.function.evaluate(x)
    }

    /// Chart series over `domain`, failing on the first invalid sample.
    pub fn sample(&self, domain: &Domain, n: usize) -> Result<Vec<Point2D>, MembershipError> {
        domain
            .samples(n)
            .map(|x| self.degree(x).map(|y| Point2D::new(x, y)))
            .collect()
    }

    /// Chart series over `domain`, substituting a zero degree for any
    /// sample the function rejects. This is the degradation the chart
    /// layer applies so one bad parameter edit cannot blank a whole
    /// rendering pass.
    pub fn sample_or_zero(&self, domain: &Domain, n: usize) -> Vec<Point2D> {
        domain
            .samples(n)
            .map(|x| Point2D::new(x, self.degree(x).unwrap_or(0.0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warm() -> FuzzySet {
        FuzzySet::new(
            "warm".to_owned(),
            "#d62728".to_owned(),
            MembershipFunction::Triangular { a: 10.0, b: 20.0, c: 30.0 },
        )
    }

    #[test]
    fn sets_get_distinct_identities() {
        let lhs = warm();
        let rhs = warm();
        assert_ne!(lhs.uuid(), rhs.uuid());
        assert_eq!(lhs.label(), rhs.label());
    }

    #[test]
    fn degree_delegates_to_the_function() {
        let set = warm();
        assert_eq!(set.degree(20.0).unwrap(), 1.0);
        assert_eq!(set.degree(15.0).unwrap(), 0.5);
        assert_eq!(set.degree(40.0).unwrap(), 0.0);
    }

    #[test]
    fn sample_is_ordered_and_spans_the_domain() {
        let set = warm();
        let domain = Domain::new(0.0, 40.0).unwrap();
        let series = set.sample(&domain, 101).unwrap();
        assert_eq!(series.len(), 101);
        assert_eq!(series.first().unwrap().x(), 0.0);
        assert_eq!(series.last().unwrap().x(), 40.0);
        assert!(series.windows(2).all(|w| w[0].x() < w[1].x()));
        assert!(series.iter().all(|p| (0.0..=1.0).contains(&p.y())));
    }

    #[test]
    fn sample_fails_fast_on_invalid_parameters() {
        let mut set = warm();
        set.set_function(MembershipFunction::Gaussian { mean: 5.0, sigma: -1.0 });
        let domain = Domain::new(0.0, 10.0).unwrap();
        assert!(set.sample(&domain, 11).is_err());
    }

    #[test]
    fn sample_or_zero_degrades_instead_of_failing() {
        let mut set = warm();
        set.set_function(MembershipFunction::Gaussian { mean: 5.0, sigma: -1.0 });
        let domain = Domain::new(0.0, 10.0).unwrap();
        let series = set.sample_or_zero(&domain, 11);
        assert_eq!(series.len(), 11);
        assert!(series.iter().all(|p| p.y() == 0.0));
    }
}

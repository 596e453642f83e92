//! Origin/destination filtering over a snapshot of flight records.
//!
//! # Matching Rules
//!
//! 1. Each present criterion is trimmed of surrounding whitespace
//! 2. The stored field is compared as-is, case-insensitively
//! 3. An absent or empty criterion imposes no constraint
//! 4. Criteria compose with logical AND
//!
//! Output keeps the input order.

use crate::domain::entities::Flight;

/// Optional `from`/`to` pair applied when listing flights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightFilter {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl FlightFilter {
    pub fn new(from: Option<String>, to: Option<String>) -> Self {
        Self { from, to }
    }

    /// Returns true if no criterion constrains the result.
    pub fn is_empty(&self) -> bool {
        active(&self.from).is_none() && active(&self.to).is_none()
    }

    /// Returns true if the flight satisfies every present criterion.
    pub fn matches(&self, flight: &Flight) -> bool {
        Matcher::new(self).matches(flight)
    }
}

/// Criteria normalized once per filter call.
struct Matcher {
    from: Option<String>,
    to: Option<String>,
}

impl Matcher {
    fn new(filter: &FlightFilter) -> Self {
        Self {
            from: active(&filter.from).map(normalize),
            to: active(&filter.to).map(normalize),
        }
    }

    fn matches(&self, flight: &Flight) -> bool {
        field_matches(&flight.from, self.from.as_deref())
            && field_matches(&flight.to, self.to.as_deref())
    }
}

/// A criterion is present only when it is non-empty before trimming.
fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

fn normalize(criterion: &str) -> String {
    criterion.trim().to_lowercase()
}

fn field_matches(field: &str, criterion: Option<&str>) -> bool {
    match criterion {
        Some(expected) => field.to_lowercase() == expected,
        None => true,
    }
}

/// Returns the records that satisfy `criteria`, preserving input order.
pub fn filter(records: Vec<Flight>, criteria: &FlightFilter) -> Vec<Flight> {
    if criteria.is_empty() {
        return records;
    }

    let matcher = Matcher::new(criteria);
    records
        .into_iter()
        .filter(|flight| matcher.matches(flight))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn flight(id: i64, from: &str, to: &str) -> Flight {
        Flight::new(
            id,
            from.to_string(),
            to.to_string(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().into(),
        )
    }

    fn sample() -> Vec<Flight> {
        vec![
            flight(1, "VIE", "LHR"),
            flight(2, "LHR", "JFK"),
            flight(3, "Vie", "CDG"),
            flight(4, "GRZ", "LHR"),
        ]
    }

    fn ids(flights: &[Flight]) -> Vec<i64> {
        flights.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let result = filter(sample(), &FlightFilter::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_is_case_insensitive() {
        let criteria = FlightFilter::new(Some("vie".to_string()), None);
        let result = filter(sample(), &criteria);
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_to_filter() {
        let criteria = FlightFilter::new(None, Some("lhr".to_string()));
        let result = filter(sample(), &criteria);
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn test_criteria_compose_with_and() {
        let criteria = FlightFilter::new(Some("VIE".to_string()), Some("CDG".to_string()));
        let result = filter(sample(), &criteria);
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_criterion_is_trimmed() {
        let criteria = FlightFilter::new(Some("  lhr \t".to_string()), None);
        let result = filter(sample(), &criteria);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_stored_field_is_not_trimmed() {
        let records = vec![flight(1, " VIE", "LHR"), flight(2, "VIE", "LHR")];
        let criteria = FlightFilter::new(Some("VIE".to_string()), None);
        let result = filter(records, &criteria);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_empty_criterion_is_ignored() {
        let criteria = FlightFilter::new(Some(String::new()), Some(String::new()));
        assert!(criteria.is_empty());

        let result = filter(sample(), &criteria);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_whitespace_criterion_matches_nothing() {
        let criteria = FlightFilter::new(Some("   ".to_string()), None);
        assert!(!criteria.is_empty());

        let result = filter(sample(), &criteria);
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let criteria = FlightFilter::new(Some("SYD".to_string()), None);
        assert!(filter(sample(), &criteria).is_empty());
    }

    #[test]
    fn test_matches_single_flight() {
        let criteria = FlightFilter::new(Some("grz".to_string()), Some("LHR".to_string()));
        assert!(criteria.matches(&flight(9, "GRZ", "lhr")));
        assert!(!criteria.matches(&flight(9, "GRZ", "JFK")));
    }
}

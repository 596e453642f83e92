//! Demo flights loaded into the store at startup.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Flight, NewFlight};

/// Returns the fixed seed set, numbered from 1 in listing order.
pub fn demo_flights() -> Vec<Flight> {
    let routes = [
        ("Graz", "Hamburg", (2025, 3, 1, 7, 45)),
        ("Hamburg", "Graz", (2025, 3, 1, 18, 20)),
        ("Vienna", "London", (2025, 3, 2, 9, 10)),
        ("London", "New York", (2025, 3, 3, 11, 30)),
        ("Vienna", "Paris", (2025, 3, 4, 6, 55)),
    ];

    routes
        .into_iter()
        .zip(1..)
        .filter_map(|((from, to, (y, mo, d, h, mi)), id)| {
            let date = Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single()?;
            Some(NewFlight::new(from, to, date).with_id(id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_flights_have_sequential_ids() {
        let flights = demo_flights();
        let ids: Vec<i64> = flights.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}

//! Flight analytics engine.
//!
//! Pure, deterministic analytics over an ordered flight list: base/route
//! aggregation, monthly trend, seasonality, downtime gaps, charter likelihood, and
//! pre-sale signals. `analyze_as_of` takes an explicit reference date so the
//! "most recent month" signals are derivable from the inputs alone; [`analyze`]
//! is the convenience wrapper over today.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Utc};

use crate::model::flight::{
    AirportVisits, CharterLikelihood, DowntimePeriod, FlightIntelligence, FlightRecord,
    MonthlyFlightCount, RouteFrequency, TrendDirection,
};

/// Number of top route pairs contributing to the repetition score.
const TOP_ROUTE_COUNT: usize = 5;
/// Minimum gap between consecutive flights that counts as downtime.
const DOWNTIME_GAP_DAYS: i64 = 30;
/// Downtime gap length treated as a pre-sale signal.
const PRE_SALE_GAP_DAYS: i64 = 60;
/// Relative change in half-series means that moves the trend off `Stable`.
const TREND_THRESHOLD: f64 = 0.15;
/// One seasonal mean must exceed the other by this factor to call a pattern.
const SEASONAL_RATIO: f64 = 1.5;

const WINTER_MONTHS: [u32; 5] = [11, 12, 1, 2, 3];
const SUMMER_MONTHS: [u32; 5] = [5, 6, 7, 8, 9];

pub fn analyze(flights: &[FlightRecord]) -> FlightIntelligence {
    analyze_as_of(flights, Utc::now().date_naive())
}

pub fn analyze_as_of(flights: &[FlightRecord], as_of: NaiveDate) -> FlightIntelligence {
    if flights.is_empty() {
        return FlightIntelligence::empty();
    }

    let mut sorted: Vec<FlightRecord> = flights.to_vec();
    sorted.sort_by_key(|f| f.date);
    let total_flights = sorted.len() as u32;

    let airport_visits = count_airport_visits(&sorted);
    let primary_base = airport_visits.first().map(|a| a.airport.clone());

    let (top_routes, route_repetition_score) = top_routes(&sorted, total_flights);

    let monthly_counts = bucket_by_month(&sorted, as_of);
    let counts: Vec<u32> = monthly_counts.iter().map(|m| m.flights).collect();
    let trend = trend_of(&counts);
    let seasonality = seasonality_of(&monthly_counts);

    let downtime_periods = downtime_periods(&sorted);
    let charter_likelihood = charter_likelihood_of(
        total_flights,
        airport_visits.len() as u32,
        route_repetition_score,
    );

    let pre_sale_signals = pre_sale_signals(trend, &downtime_periods, &counts);

    FlightIntelligence {
        total_flights,
        airport_visits,
        primary_base,
        top_routes,
        route_repetition_score,
        monthly_counts,
        trend,
        seasonality,
        downtime_periods,
        charter_likelihood,
        pre_sale_signals,
    }
}

/// Per-airport visit counts over both legs, sorted most-visited first with a name
/// tie-break so the primary base is deterministic.
fn count_airport_visits(flights: &[FlightRecord]) -> Vec<AirportVisits> {
    let mut visits: HashMap<&str, u32> = HashMap::new();
    for flight in flights {
        for airport in [flight.origin.as_str(), flight.destination.as_str()] {
            if !airport.is_empty() {
                *visits.entry(airport).or_default() += 1;
            }
        }
    }

    let mut visits: Vec<AirportVisits> = visits
        .into_iter()
        .map(|(airport, visits)| AirportVisits {
            airport: airport.to_string(),
            visits,
        })
        .collect();
    visits.sort_by(|a, b| b.visits.cmp(&a.visits).then(a.airport.cmp(&b.airport)));
    visits
}

fn top_routes(flights: &[FlightRecord], total_flights: u32) -> (Vec<RouteFrequency>, u32) {
    let mut pairs: HashMap<String, u32> = HashMap::new();
    for flight in flights {
        if flight.origin.is_empty() || flight.destination.is_empty() {
            continue;
        }
        let (a, b) = if flight.origin <= flight.destination {
            (&flight.origin, &flight.destination)
        } else {
            (&flight.destination, &flight.origin)
        };
        *pairs.entry(format!("{a}-{b}")).or_default() += 1;
    }

    let mut routes: Vec<RouteFrequency> = pairs
        .into_iter()
        .map(|(route, count)| RouteFrequency { route, count })
        .collect();
    routes.sort_by(|a, b| b.count.cmp(&a.count).then(a.route.cmp(&b.route)));
    routes.truncate(TOP_ROUTE_COUNT);

    let top_total: u32 = routes.iter().map(|r| r.count).sum();
    let score = (f64::from(top_total) / f64::from(total_flights) * 100.0).round() as u32;

    (routes, score)
}

/// Calendar-month buckets from the earliest flight's month through the later of
/// the last flight's month and the `as_of` month, zero-filled.
fn bucket_by_month(flights: &[FlightRecord], as_of: NaiveDate) -> Vec<MonthlyFlightCount> {
    let month_index = |date: NaiveDate| date.year() * 12 + date.month0() as i32;

    let first = month_index(flights[0].date);
    let last = month_index(flights[flights.len() - 1].date).max(month_index(as_of));

    let mut counts: HashMap<i32, u32> = HashMap::new();
    for flight in flights {
        *counts.entry(month_index(flight.date)).or_default() += 1;
    }

    (first..=last)
        .map(|index| MonthlyFlightCount {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
            flights: counts.get(&index).copied().unwrap_or(0),
        })
        .collect()
}

/// Split the monthly series into halves (the middle month of an odd-length series
/// joins the second half) and compare means against the ±15% band.
fn trend_of(monthly: &[u32]) -> TrendDirection {
    if monthly.len() < 3 {
        return TrendDirection::Stable;
    }

    let split = monthly.len() / 2;
    let first_mean = mean(&monthly[..split]);
    let second_mean = mean(&monthly[split..]);

    if first_mean == 0.0 {
        return if second_mean > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Stable
        };
    }

    if second_mean > first_mean * (1.0 + TREND_THRESHOLD) {
        TrendDirection::Increasing
    } else if second_mean < first_mean * (1.0 - TREND_THRESHOLD) {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

/// Winter/summer comparison. Requires at least six monthly buckets and at least
/// two months carrying data in each seasonal set; otherwise no claim is made.
fn seasonality_of(monthly: &[MonthlyFlightCount]) -> Option<String> {
    if monthly.len() < 6 {
        return None;
    }

    let winter: Vec<u32> = monthly
        .iter()
        .filter(|m| WINTER_MONTHS.contains(&m.month))
        .map(|m| m.flights)
        .collect();
    let summer: Vec<u32> = monthly
        .iter()
        .filter(|m| SUMMER_MONTHS.contains(&m.month))
        .map(|m| m.flights)
        .collect();

    let months_with_data = |season: &[u32]| season.iter().filter(|c| **c > 0).count();
    if months_with_data(&winter) < 2 || months_with_data(&summer) < 2 {
        return None;
    }

    let winter_mean = mean(&winter);
    let summer_mean = mean(&summer);

    if winter_mean > 0.0 && winter_mean >= summer_mean * SEASONAL_RATIO {
        Some("Winter-heavy flight pattern".to_string())
    } else if summer_mean > 0.0 && summer_mean >= winter_mean * SEASONAL_RATIO {
        Some("Summer-heavy flight pattern".to_string())
    } else {
        Some("No strong seasonal pattern".to_string())
    }
}

/// Gaps of at least 30 days between consecutive flights, longest first, capped
/// at five.
fn downtime_periods(flights: &[FlightRecord]) -> Vec<DowntimePeriod> {
    let mut periods: Vec<DowntimePeriod> = flights
        .windows(2)
        .filter_map(|pair| {
            let days = (pair[1].date - pair[0].date).num_days();
            (days >= DOWNTIME_GAP_DAYS).then(|| DowntimePeriod {
                start: pair[0].date,
                end: pair[1].date,
                days,
            })
        })
        .collect();

    periods.sort_by(|a, b| b.days.cmp(&a.days).then(a.start.cmp(&b.start)));
    periods.truncate(5);
    periods
}

fn charter_likelihood_of(
    total_flights: u32,
    unique_airports: u32,
    route_repetition_score: u32,
) -> CharterLikelihood {
    if total_flights < 5 {
        return CharterLikelihood::Low;
    }

    let total = f64::from(total_flights);
    let unique = f64::from(unique_airports);

    if unique > total * 0.6 && route_repetition_score < 30 {
        CharterLikelihood::High
    } else if unique > total * 0.4 && route_repetition_score < 50 {
        CharterLikelihood::Medium
    } else {
        CharterLikelihood::Low
    }
}

/// Order-preserving subset of pre-sale signals. The last bucket is the `as_of`
/// month by construction, so "most recent month has zero flights" is derivable.
fn pre_sale_signals(
    trend: TrendDirection,
    downtime: &[DowntimePeriod],
    monthly: &[u32],
) -> Vec<String> {
    let mut signals = Vec::new();

    if trend == TrendDirection::Declining {
        signals.push("Flight activity trend is declining".to_string());
    }

    if let Some(longest) = downtime.iter().find(|p| p.days >= PRE_SALE_GAP_DAYS) {
        signals.push(format!(
            "Extended downtime period of {} days",
            longest.days
        ));
    }

    if !monthly.is_empty() {
        let overall_mean = mean(monthly);
        if overall_mean > 2.0 && monthly.len() >= 3 {
            let trailing = &monthly[monthly.len() - 3..];
            if mean(trailing) < overall_mean * 0.5 {
                signals.push(
                    "Trailing 3-month activity is below half the historical average".to_string(),
                );
            }
        }

        if monthly[monthly.len() - 1] == 0 {
            signals.push("No flights recorded in the most recent month".to_string());
        }
    }

    signals
}

fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(year: i32, month: u32, day: u32, origin: &str, destination: &str) -> FlightRecord {
        FlightRecord {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            hours: Some(1.5),
        }
    }

    /// `count` flights inside one month, all on the same fixed route
    fn month_of_flights(year: i32, month: u32, count: u32) -> Vec<FlightRecord> {
        (0..count)
            .map(|i| flight(year, month, (i % 28) + 1, "KTEB", "KPBI"))
            .collect()
    }

    mod analyze_as_of {
        use super::*;

        #[test]
        fn empty_input_yields_documented_zero_result() {
            let result = analyze_as_of(&[], NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());

            assert_eq!(result, FlightIntelligence::empty());
        }

        #[test]
        fn aggregates_base_and_routes() {
            let flights = vec![
                flight(2023, 1, 1, "KTEB", "KPBI"),
                flight(2023, 1, 5, "KPBI", "KTEB"),
                flight(2023, 1, 9, "KTEB", "KBOS"),
            ];

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());

            assert_eq!(result.total_flights, 3);
            assert_eq!(result.primary_base.as_deref(), Some("KTEB"));
            assert_eq!(result.top_routes[0].route, "KPBI-KTEB");
            assert_eq!(result.top_routes[0].count, 2);
            // All three flights fall in the top-5 routes
            assert_eq!(result.route_repetition_score, 100);
        }

        /// Monthly counts [10,10,10,10,1,1] must classify as declining
        #[test]
        fn declining_trend_over_six_months() {
            let mut flights = Vec::new();
            for (month, count) in [(1, 10), (2, 10), (3, 10), (4, 10), (5, 1), (6, 1)] {
                flights.extend(month_of_flights(2023, month, count));
            }

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());

            assert_eq!(result.trend, TrendDirection::Declining);
            assert!(result
                .pre_sale_signals
                .contains(&"Flight activity trend is declining".to_string()));
        }

        /// Monthly counts [1,1,10,10] must classify as increasing
        #[test]
        fn increasing_trend_when_activity_ramps_up() {
            let mut flights = Vec::new();
            for (month, count) in [(1, 1), (2, 1), (3, 10), (4, 10)] {
                flights.extend(month_of_flights(2023, month, count));
            }

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());

            assert_eq!(result.trend, TrendDirection::Increasing);
            assert!(!result
                .pre_sale_signals
                .contains(&"Flight activity trend is declining".to_string()));
        }

        #[test]
        fn fewer_than_three_months_defaults_to_stable() {
            let mut flights = month_of_flights(2023, 1, 10);
            flights.extend(month_of_flights(2023, 2, 1));

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());

            assert_eq!(result.trend, TrendDirection::Stable);
        }

        /// Flights on 2023-01-01 and 2023-03-15 leave a 73-day downtime gap
        #[test]
        fn reports_downtime_gap_of_73_days() {
            let flights = vec![
                flight(2023, 1, 1, "KTEB", "KPBI"),
                flight(2023, 3, 15, "KPBI", "KTEB"),
            ];

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 3, 31).unwrap());

            assert_eq!(result.downtime_periods.len(), 1);
            assert_eq!(result.downtime_periods[0].days, 73);
            // 73 days also exceeds the 60-day pre-sale threshold
            assert!(result
                .pre_sale_signals
                .contains(&"Extended downtime period of 73 days".to_string()));
        }

        #[test]
        fn flags_zero_flights_in_the_as_of_month() {
            let flights = month_of_flights(2023, 1, 6);

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());

            // Buckets extend through March even though no flight lands there
            assert_eq!(result.monthly_counts.len(), 3);
            assert!(result
                .pre_sale_signals
                .contains(&"No flights recorded in the most recent month".to_string()));
        }

        #[test]
        fn high_charter_likelihood_for_diverse_low_repetition_flying() {
            // 20 flights chained across 21 unique airports: no route repeats, so
            // the top-5 routes cover only a quarter of the flying
            let airports: Vec<String> = (0..21).map(|i| format!("KA{i:02}")).collect();
            let flights: Vec<FlightRecord> = (0..20u32)
                .map(|i| {
                    flight(
                        2023,
                        (i / 6) + 1,
                        (i % 28) + 1,
                        &airports[i as usize],
                        &airports[i as usize + 1],
                    )
                })
                .collect();

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());

            assert_eq!(result.route_repetition_score, 25);
            assert_eq!(result.charter_likelihood, CharterLikelihood::High);
        }

        #[test]
        fn medium_charter_likelihood_for_mixed_flying() {
            // 11 flights over 11 distinct routes among 6 airports: enough
            // variety to beat the 40% airport threshold, but the top-5 routes
            // still cover 45% of the flying, keeping the high tier out of reach
            let airports: Vec<String> = (0..6).map(|i| format!("KM{i:02}")).collect();
            let pairs = [
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (0, 5),
                (1, 2),
                (1, 3),
                (1, 4),
                (1, 5),
                (2, 3),
                (2, 4),
            ];
            let flights: Vec<FlightRecord> = pairs
                .iter()
                .enumerate()
                .map(|(i, (a, b))| {
                    flight(2023, 1, i as u32 + 1, &airports[*a], &airports[*b])
                })
                .collect();

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());

            assert_eq!(result.route_repetition_score, 45);
            assert_eq!(result.charter_likelihood, CharterLikelihood::Medium);
        }

        #[test]
        fn low_charter_likelihood_for_repetitive_flying() {
            let flights = month_of_flights(2023, 1, 20);

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());

            assert_eq!(result.charter_likelihood, CharterLikelihood::Low);
        }

        #[test]
        fn winter_heavy_seasonality() {
            let mut flights = Vec::new();
            for month in [11, 12] {
                flights.extend(month_of_flights(2022, month, 9));
            }
            for month in [1, 2, 3] {
                flights.extend(month_of_flights(2023, month, 9));
            }
            for month in [5, 6, 7] {
                flights.extend(month_of_flights(2023, month, 2));
            }

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 7, 31).unwrap());

            assert_eq!(
                result.seasonality.as_deref(),
                Some("Winter-heavy flight pattern")
            );
        }

        /// Both seasons carry data but neither mean clears the 1.5x ratio
        #[test]
        fn balanced_seasons_report_no_strong_pattern() {
            let mut flights = Vec::new();
            for month in [1, 2] {
                flights.extend(month_of_flights(2023, month, 6));
            }
            for month in [5, 6] {
                flights.extend(month_of_flights(2023, month, 5));
            }

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());

            // Winter mean 4 (over months 1-3) vs summer mean 5: within the band
            assert_eq!(
                result.seasonality.as_deref(),
                Some("No strong seasonal pattern")
            );
        }

        #[test]
        fn seasonality_requires_both_seasons() {
            let mut flights = Vec::new();
            for month in [1, 2, 3, 4] {
                flights.extend(month_of_flights(2023, month, 4));
            }

            let result = analyze_as_of(&flights, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());

            // Six buckets but no summer data: no seasonality claim
            assert_eq!(result.seasonality, None);
        }

        #[test]
        fn analytics_are_deterministic() {
            let mut flights = month_of_flights(2023, 1, 8);
            flights.extend(month_of_flights(2023, 2, 3));
            let as_of = NaiveDate::from_ymd_opt(2023, 3, 10).unwrap();

            assert_eq!(analyze_as_of(&flights, as_of), analyze_as_of(&flights, as_of));
        }
    }
}

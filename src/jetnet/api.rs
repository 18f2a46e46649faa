//! JETNET endpoint adapters: one method per upstream endpoint, mapping the typed
//! DTO into the crate's data model.

use chrono::{Months, NaiveDate, Utc};
use serde_json::json;

use crate::{
    error::upstream::UpstreamError,
    jetnet::{
        client::JetnetClient,
        schema::{
            format_upstream_date, parse_upstream_date, FlightDataResponse, HistoryResponse,
            ModelTrendsResponse, PicturesResponse, RegNumberResponse, RelationshipsResponse,
        },
        session::SharedSession,
    },
    model::{
        market::{HistoryEntry, HistoryKind, MarketSignals, ModelTrendSignals},
        profile::{AircraftProfile, Location, Picture},
        relationship::{CompanyNode, ContactNode, RelationshipEdge},
        FlightRecord,
    },
    Error,
};

pub const REG_NUMBER_PATH: &str = "/api/Aircraft/getRegNumber";
pub const PICTURES_PATH: &str = "/api/Aircraft/getPictures";
pub const RELATIONSHIPS_PATH: &str = "/api/Aircraft/getCompanyrelationships";
pub const FLIGHT_DATA_PATH: &str = "/api/Aircraft/getFlightData";
pub const HISTORY_PATH: &str = "/api/Aircraft/getHistoryList";
pub const MODEL_TRENDS_PATH: &str = "/api/Model/getModelMarketTrends";

/// Default lookback for the paged flight-data endpoint.
pub const FLIGHT_WINDOW_MONTHS: u32 = 12;
/// Default lookback for the paged transaction-history endpoint.
pub const HISTORY_WINDOW_YEARS: u32 = 10;

impl JetnetClient {
    /// Resolve a registration to an aircraft identity plus market signals.
    ///
    /// This is the one lookup a profile build cannot survive without; a body that
    /// carries no aircraft id maps to [`Error::AircraftNotFound`].
    pub async fn get_aircraft_by_registration(
        &self,
        session: &SharedSession,
        registration: &str,
    ) -> Result<AircraftProfile, Error> {
        let suffix = format!("/{registration}");
        let response: RegNumberResponse = self.get(session, REG_NUMBER_PATH, &suffix).await?;

        let aircraft_id = response
            .aircraft_id
            .filter(|id| *id > 0)
            .ok_or_else(|| Error::AircraftNotFound(registration.to_string()))?;

        let base_location = Location {
            city: response.base_city,
            state: response.base_state,
            country: response.base_country,
            airport_code: response.base_airport,
        };
        let base_location =
            (base_location != Location::default()).then_some(base_location);

        Ok(AircraftProfile {
            registration: registration.to_string(),
            aircraft_id,
            model_id: response.model_id,
            make: response.make,
            model: response.model,
            series: response.series,
            year_manufactured: response.year_manufactured,
            serial_number: response.serial_number,
            weight_class: response.weight_class,
            category: response.category,
            base_location,
            relationships: Vec::new(),
            pictures: Vec::new(),
            utilization: None,
            market: MarketSignals {
                for_sale: response.for_sale.unwrap_or(false),
                asking_price: response.asking_price,
                days_on_market: response.days_on_market,
                listed_date: response.list_date.as_deref().and_then(parse_upstream_date),
            },
            model_trends: None,
            history: Vec::new(),
            hot_not: None,
            owner_intel: None,
        })
    }

    pub async fn get_pictures(
        &self,
        session: &SharedSession,
        aircraft_id: i64,
    ) -> Result<Vec<Picture>, Error> {
        let suffix = format!("/{aircraft_id}");
        let response: PicturesResponse = self.get(session, PICTURES_PATH, &suffix).await?;

        let pictures = response
            .pictures
            .into_iter()
            .filter_map(|row| {
                Some(Picture {
                    url: row.url?,
                    caption: row.caption,
                    taken_at: row.taken_at.as_deref().and_then(parse_upstream_date),
                })
            })
            .collect();

        Ok(pictures)
    }

    pub async fn get_relationships(
        &self,
        session: &SharedSession,
        aircraft_id: i64,
    ) -> Result<Vec<RelationshipEdge>, Error> {
        let suffix = format!("/{aircraft_id}");
        let response: RelationshipsResponse =
            self.get(session, RELATIONSHIPS_PATH, &suffix).await?;

        let edges = response
            .relationships
            .into_iter()
            .map(|row| {
                let contact = ContactNode {
                    contact_id: row.contact_id,
                    first_name: row.first_name,
                    last_name: row.last_name,
                    title: row.title,
                    email: row.email,
                    phone_mobile: row.phone_mobile,
                    phone_office: row.phone_office,
                };
                // A row without any person identity is a company-only edge.
                let contact = (contact.contact_id.is_some()
                    || contact.first_name.is_some()
                    || contact.last_name.is_some())
                .then_some(contact);

                RelationshipEdge {
                    aircraft_id,
                    company: CompanyNode {
                        company_id: row.company_id,
                        name: row.company_name,
                        city: row.company_city,
                        state: row.company_state,
                        country: row.company_country,
                    },
                    contact,
                    relationship_type: row.relationship_type.unwrap_or_else(|| "Unknown".to_string()),
                }
            })
            .collect();

        Ok(edges)
    }

    /// Paged flight data over an explicit window, dates sent `MM/DD/YYYY`.
    pub async fn get_flight_data(
        &self,
        session: &SharedSession,
        aircraft_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<FlightRecord>, Error> {
        let body = json!({
            "aircraftid": aircraft_id,
            "startdate": format_upstream_date(start),
            "enddate": format_upstream_date(end),
        });

        let rows = self
            .post_paged(session, FLIGHT_DATA_PATH, body, |r: FlightDataResponse| {
                (r.page_count, r.flights)
            })
            .await?;

        let records = rows
            .into_iter()
            .filter_map(|row| {
                let date = parse_upstream_date(row.date.as_deref()?)?;
                Some(FlightRecord {
                    date,
                    origin: normalize_airport(row.origin.as_deref()),
                    destination: normalize_airport(row.destination.as_deref()),
                    hours: row.hours,
                })
            })
            .collect();

        Ok(records)
    }

    /// Flight data over the default trailing-12-month window ending at `as_of`.
    pub async fn get_recent_flights(
        &self,
        session: &SharedSession,
        aircraft_id: i64,
    ) -> Result<Vec<FlightRecord>, Error> {
        let end = Utc::now().date_naive();
        let start = end
            .checked_sub_months(Months::new(FLIGHT_WINDOW_MONTHS))
            .unwrap_or(end);
        self.get_flight_data(session, aircraft_id, start, end).await
    }

    /// Paged transaction history over the default trailing-10-year window.
    pub async fn get_history(
        &self,
        session: &SharedSession,
        aircraft_id: i64,
    ) -> Result<Vec<HistoryEntry>, Error> {
        let end = Utc::now().date_naive();
        let start = end
            .checked_sub_months(Months::new(HISTORY_WINDOW_YEARS * 12))
            .unwrap_or(end);

        let body = json!({
            "aircraftid": aircraft_id,
            "startdate": format_upstream_date(start),
            "enddate": format_upstream_date(end),
        });

        let rows = self
            .post_paged(session, HISTORY_PATH, body, |r: HistoryResponse| {
                (r.page_count, r.history)
            })
            .await?;

        let entries = rows
            .into_iter()
            .map(|row| HistoryEntry {
                date: row.date.as_deref().and_then(parse_upstream_date),
                kind: row
                    .transaction_type
                    .as_deref()
                    .map(HistoryKind::from_transaction_type)
                    .unwrap_or(HistoryKind::Other(String::new())),
                buyer: row.buyer,
                seller: row.seller,
                price: row.price,
            })
            .collect();

        Ok(entries)
    }

    pub async fn get_model_trends(
        &self,
        session: &SharedSession,
        model_id: i64,
    ) -> Result<ModelTrendSignals, Error> {
        let suffix = format!("/{model_id}");
        let response: ModelTrendsResponse =
            self.get(session, MODEL_TRENDS_PATH, &suffix).await?;

        if response.model_id.is_none() && response.fleet_size.is_none() {
            return Err(UpstreamError::DataShape(format!(
                "{MODEL_TRENDS_PATH}: response carries no model data"
            ))
            .into());
        }

        Ok(ModelTrendSignals {
            model_id: response.model_id.unwrap_or(model_id),
            fleet_size: response.fleet_size,
            active_listings: response.active_listings,
            sold_last_12_months: response.sold_last_12_months,
            avg_days_on_market: response.avg_days_on_market,
            asking_price_trend_pct: response.asking_price_trend_pct,
        })
    }
}

fn normalize_airport(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().to_uppercase()
}

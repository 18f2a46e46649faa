//! Typed serde DTOs for each JETNET endpoint.
//!
//! This module is the single place upstream field spellings are declared. JETNET
//! responses drift between spellings (`yearmfr` vs `yeardlv`, `relationtype` vs
//! `relationshiptype`) and emit numbers as strings in some deployments; tolerance
//! for both lives here, as `#[serde(alias)]` declarations and `deserialize_with`
//! helpers, so the analytics core never inspects raw JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Date format used by JETNET in both requests and responses.
pub const UPSTREAM_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a JETNET date, accepting the documented `MM/DD/YYYY` form with an ISO
/// fallback. Unparseable or empty values normalize to `None`.
pub fn parse_upstream_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, UPSTREAM_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .ok()
}

/// Render a date the way JETNET request bodies expect it.
pub fn format_upstream_date(date: NaiveDate) -> String {
    date.format(UPSTREAM_DATE_FORMAT).to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) => Some(*v as i64),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// JETNET emits numbers as strings in some deployments; accept either and
/// normalize unparseable values to `None`.
pub fn option_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_i64()))
}

pub fn option_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_i64()).map(|v| v as i32))
}

pub fn option_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| v.as_i64())
        .and_then(|v| u32::try_from(v).ok()))
}

pub fn option_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_f64()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBool {
    Bool(bool),
    Text(String),
}

/// JETNET boolean flags arrive as JSON booleans or as `"Y"`/`"N"`/`"true"` text.
pub fn option_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let raw = Option::<RawBool>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| match v {
        RawBool::Bool(b) => Some(b),
        RawBool::Text(s) => match s.trim().to_uppercase().as_str() {
            "Y" | "YES" | "TRUE" | "1" => Some(true),
            "N" | "NO" | "FALSE" | "0" => Some(false),
            _ => None,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default, alias = "bearerToken", alias = "bearertoken")]
    pub bearer_token: Option<String>,
    #[serde(default, alias = "apiToken", alias = "apitoken")]
    pub api_token: Option<String>,
    #[serde(default, alias = "responsestatus")]
    pub response_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegNumberResponse {
    #[serde(default, alias = "aircraftid", deserialize_with = "option_i64")]
    pub aircraft_id: Option<i64>,
    #[serde(default, alias = "modelid", deserialize_with = "option_i64")]
    pub model_id: Option<i64>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(
        default,
        alias = "yearmfr",
        alias = "yeardlv",
        deserialize_with = "option_i32"
    )]
    pub year_manufactured: Option<i32>,
    #[serde(default, alias = "sernbr", alias = "serialnbr")]
    pub serial_number: Option<String>,
    #[serde(default, alias = "weightclass")]
    pub weight_class: Option<String>,
    #[serde(default, alias = "category", alias = "maketype")]
    pub category: Option<String>,
    #[serde(default, alias = "basecity")]
    pub base_city: Option<String>,
    #[serde(default, alias = "basestate")]
    pub base_state: Option<String>,
    #[serde(default, alias = "basecountry")]
    pub base_country: Option<String>,
    #[serde(default, alias = "baseairport", alias = "baseicao")]
    pub base_airport: Option<String>,
    #[serde(default, alias = "forsale", deserialize_with = "option_bool")]
    pub for_sale: Option<bool>,
    #[serde(default, alias = "askingprice", deserialize_with = "option_f64")]
    pub asking_price: Option<f64>,
    #[serde(
        default,
        alias = "daysonmarket",
        alias = "marketdays",
        deserialize_with = "option_u32"
    )]
    pub days_on_market: Option<u32>,
    #[serde(default, alias = "listdate")]
    pub list_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PicturesResponse {
    #[serde(default, alias = "aircraftpictures")]
    pub pictures: Vec<PictureRow>,
}

#[derive(Debug, Deserialize)]
pub struct PictureRow {
    #[serde(default, alias = "pictureurl")]
    pub url: Option<String>,
    #[serde(default, alias = "picturedescription")]
    pub caption: Option<String>,
    #[serde(default, alias = "datetaken", alias = "picturedate")]
    pub taken_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelationshipsResponse {
    #[serde(default, alias = "companyrelationships")]
    pub relationships: Vec<RelationshipRow>,
}

#[derive(Debug, Deserialize)]
pub struct RelationshipRow {
    #[serde(default, alias = "companyid", deserialize_with = "option_i64")]
    pub company_id: Option<i64>,
    #[serde(default, alias = "companyname")]
    pub company_name: Option<String>,
    #[serde(default, alias = "companycity")]
    pub company_city: Option<String>,
    #[serde(default, alias = "companystate")]
    pub company_state: Option<String>,
    #[serde(default, alias = "companycountry")]
    pub company_country: Option<String>,
    #[serde(default, alias = "contactid", deserialize_with = "option_i64")]
    pub contact_id: Option<i64>,
    #[serde(default, alias = "contactfirstname", alias = "firstname")]
    pub first_name: Option<String>,
    #[serde(default, alias = "contactlastname", alias = "lastname")]
    pub last_name: Option<String>,
    #[serde(default, alias = "contacttitle")]
    pub title: Option<String>,
    #[serde(default, alias = "contactemail")]
    pub email: Option<String>,
    #[serde(default, alias = "contactmobilephone", alias = "mobilephone")]
    pub phone_mobile: Option<String>,
    #[serde(default, alias = "contactofficephone", alias = "officephone")]
    pub phone_office: Option<String>,
    #[serde(default, alias = "relationtype", alias = "relationshiptype")]
    pub relationship_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FlightDataResponse {
    #[serde(default, alias = "pagecount", deserialize_with = "option_u32")]
    pub page_count: Option<u32>,
    #[serde(default, alias = "flightdata")]
    pub flights: Vec<FlightRow>,
}

#[derive(Debug, Deserialize)]
pub struct FlightRow {
    #[serde(default, alias = "flightdate")]
    pub date: Option<String>,
    #[serde(default, alias = "departairport")]
    pub origin: Option<String>,
    #[serde(default, alias = "arriveairport")]
    pub destination: Option<String>,
    #[serde(default, alias = "flighthours", deserialize_with = "option_f64")]
    pub hours: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default, alias = "pagecount", deserialize_with = "option_u32")]
    pub page_count: Option<u32>,
    #[serde(default, alias = "historylist")]
    pub history: Vec<HistoryRow>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryRow {
    #[serde(default, alias = "transdate")]
    pub date: Option<String>,
    #[serde(default, alias = "transtype")]
    pub transaction_type: Option<String>,
    #[serde(default, alias = "purchaser")]
    pub buyer: Option<String>,
    #[serde(default, alias = "sellername")]
    pub seller: Option<String>,
    #[serde(default, alias = "soldprice", deserialize_with = "option_f64")]
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ModelTrendsResponse {
    #[serde(default, alias = "modelid", deserialize_with = "option_i64")]
    pub model_id: Option<i64>,
    #[serde(default, alias = "fleetsize", deserialize_with = "option_u32")]
    pub fleet_size: Option<u32>,
    #[serde(
        default,
        alias = "forsalecount",
        alias = "activelistings",
        deserialize_with = "option_u32"
    )]
    pub active_listings: Option<u32>,
    #[serde(default, alias = "soldlast12months", deserialize_with = "option_u32")]
    pub sold_last_12_months: Option<u32>,
    #[serde(default, alias = "avgdaysonmarket", deserialize_with = "option_u32")]
    pub avg_days_on_market: Option<u32>,
    #[serde(
        default,
        alias = "askingpricetrendpct",
        alias = "pricetrendpct",
        deserialize_with = "option_f64"
    )]
    pub asking_price_trend_pct: Option<f64>,
}

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-issued purchase request identifier.
///
/// The backend may send a JSON number or a string; both normalize to the
/// same textual form so it can be embedded in request paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PurchaseRequestId(pub String);

impl<'de> Deserialize<'de> for PurchaseRequestId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Uint(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Self(n.to_string()),
            Raw::Uint(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

impl fmt::Display for PurchaseRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a purchase request. Case-insensitive on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Pending,
    Fulfilled,
}

impl RequestStatus {
    /// The status a toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            RequestStatus::Pending => RequestStatus::Fulfilled,
            RequestStatus::Fulfilled => RequestStatus::Pending,
        }
    }

    /// Lowercase form used in the `?status=` query.
    pub fn as_query(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Fulfilled => "fulfilled",
        }
    }

    /// Parse a status ignoring ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("pending") {
            Some(RequestStatus::Pending)
        } else if s.eq_ignore_ascii_case("fulfilled") {
            Some(RequestStatus::Fulfilled)
        } else {
            None
        }
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Fulfilled => "Fulfilled",
        }
    }

    /// Text of the button that toggles away from this status.
    pub fn action_label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Accept Request",
            RequestStatus::Fulfilled => "Mark as Pending",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_query())
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RequestStatus::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown purchase request status: {raw:?}"))
        })
    }
}

/// A farmer's offer to sell a crop quantity, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub id: PurchaseRequestId,
    pub crop_type: String,
    /// Kilograms.
    pub quantity: f64,
    pub status: RequestStatus,
    pub farmer_username: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub middleman_username: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub request_date: String,
    /// Rupees per kg.
    pub price: f64,
}

impl PurchaseRequest {
    /// Request date formatted for the card, or the raw string if it is not
    /// a recognised ISO date.
    pub fn display_date(&self) -> String {
        format_request_date(&self.request_date)
    }
}

fn non_empty_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

pub fn format_request_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format(DISPLAY_DATE_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return dt.format(DISPLAY_DATE_FORMAT).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format(DISPLAY_DATE_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PurchaseRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn status_parses_any_case() {
        for raw in ["\"PENDING\"", "\"Pending\"", "\"pending\""] {
            let status: RequestStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(status, RequestStatus::Pending);
        }
        let status: RequestStatus = serde_json::from_str("\"FULFILLED\"").unwrap();
        assert_eq!(status, RequestStatus::Fulfilled);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<RequestStatus>("\"cancelled\"").is_err());
        assert!(RequestStatus::parse("").is_none());
    }

    #[test]
    fn toggle_flips_status() {
        assert_eq!(RequestStatus::Pending.toggled(), RequestStatus::Fulfilled);
        assert_eq!(RequestStatus::Fulfilled.toggled(), RequestStatus::Pending);
        assert_eq!(RequestStatus::Pending.toggled().as_query(), "fulfilled");
        assert_eq!(RequestStatus::Fulfilled.toggled().as_query(), "pending");
    }

    #[test]
    fn action_labels() {
        assert_eq!(RequestStatus::Pending.action_label(), "Accept Request");
        assert_eq!(RequestStatus::Fulfilled.action_label(), "Mark as Pending");
    }

    #[test]
    fn decodes_backend_record() {
        let req = parse(
            r#"{
                "id": 42,
                "cropType": "Wheat",
                "quantity": 120.5,
                "status": "PENDING",
                "farmerUsername": "ravi",
                "middlemanUsername": null,
                "requestDate": "2024-03-05",
                "price": 22
            }"#,
        );
        assert_eq!(req.id, PurchaseRequestId("42".into()));
        assert_eq!(req.crop_type, "Wheat");
        assert_eq!(req.quantity, 120.5);
        assert_eq!(req.status, RequestStatus::Pending);
        assert_eq!(req.middleman_username, None);
        assert_eq!(req.price, 22.0);
    }

    #[test]
    fn string_ids_and_empty_middleman() {
        let req = parse(
            r#"{
                "id": "abc-1",
                "cropType": "Rice",
                "quantity": 10,
                "status": "fulfilled",
                "farmerUsername": "meera",
                "middlemanUsername": "",
                "requestDate": "yesterday",
                "price": 30.25
            }"#,
        );
        assert_eq!(req.id.to_string(), "abc-1");
        assert_eq!(req.middleman_username, None);
        assert_eq!(req.display_date(), "yesterday");
    }

    #[test]
    fn missing_middleman_field_is_none() {
        let req = parse(
            r#"{"id":1,"cropType":"Maize","quantity":5,"status":"Pending",
                "farmerUsername":"a","requestDate":"","price":1}"#,
        );
        assert!(req.middleman_username.is_none());
    }

    #[test]
    fn null_request_date_is_blank() {
        let list: Vec<PurchaseRequest> = serde_json::from_str(
            r#"[{"id":5,"cropType":"Soybean","quantity":12,"status":"pending",
                 "farmerUsername":"kiran","requestDate":null,"price":40}]"#,
        )
        .unwrap();
        assert_eq!(list[0].request_date, "");
        assert_eq!(list[0].display_date(), "");
    }

    #[test]
    fn request_dates_are_formatted() {
        assert_eq!(format_request_date("2024-03-05"), "05 Mar 2024");
        assert_eq!(format_request_date("2024-03-05T10:15:30"), "05 Mar 2024");
        assert_eq!(format_request_date("2024-03-05T10:15:30.123456"), "05 Mar 2024");
        assert_eq!(format_request_date("2024-03-05T10:15:30Z"), "05 Mar 2024");
        assert_eq!(format_request_date("5th March"), "5th March");
    }
}

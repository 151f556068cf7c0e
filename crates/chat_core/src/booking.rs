//! Booking and hotel payloads returned by the backend
//!
//! Wire format is camelCase JSON, matching the concierge API. Dates are
//! kept as strings; the backend guarantees checkIn <= checkOut and the
//! client does not re-validate.

use serde::{Deserialize, Serialize};

/// Status of a booking as reported by the backend.
///
/// The contract allows exactly these three values; anything else fails
/// deserialization and surfaces as an ordinary transport failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Modified,
}

/// Booking confirmation attached to an assistant reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    pub booking_id: String,
    pub hotel_name: String,
    pub city: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

/// A hotel search result. Not interpreted by the core, only rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelInfo {
    pub id: String,
    pub name: String,
    pub city: String,
    pub price_per_night: f64,
    pub room_type: String,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_info_deserializes_camel_case() {
        let json = r#"{
            "bookingId": "B-1",
            "hotelName": "Lotus Inn",
            "city": "Chennai",
            "checkIn": "2024-05-01",
            "checkOut": "2024-05-03",
            "guests": 2,
            "status": "CONFIRMED",
            "totalPrice": 5400
        }"#;
        let info: BookingInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.booking_id, "B-1");
        assert_eq!(info.hotel_name, "Lotus Inn");
        assert_eq!(info.status, BookingStatus::Confirmed);
        assert_eq!(info.total_price, Some(5400.0));
    }

    #[test]
    fn booking_info_total_price_is_optional() {
        let json = r#"{
            "bookingId": "B-2",
            "hotelName": "Sea View",
            "city": "Goa",
            "checkIn": "2024-06-10",
            "checkOut": "2024-06-12",
            "guests": 1,
            "status": "CANCELLED"
        }"#;
        let info: BookingInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.status, BookingStatus::Cancelled);
        assert!(info.total_price.is_none());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{
            "bookingId": "B-3",
            "hotelName": "Lotus Inn",
            "city": "Chennai",
            "checkIn": "2024-05-01",
            "checkOut": "2024-05-03",
            "guests": 2,
            "status": "PENDING"
        }"#;
        assert!(serde_json::from_str::<BookingInfo>(json).is_err());
    }

    #[test]
    fn status_round_trips_screaming_case() {
        for (status, text) in [
            (BookingStatus::Confirmed, "\"CONFIRMED\""),
            (BookingStatus::Cancelled, "\"CANCELLED\""),
            (BookingStatus::Modified, "\"MODIFIED\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), text);
        }
    }

    #[test]
    fn hotel_info_deserializes_camel_case() {
        let json = r#"{
            "id": "H-7",
            "name": "Lotus Inn",
            "city": "Chennai",
            "pricePerNight": 2700.0,
            "roomType": "Deluxe",
            "available": true
        }"#;
        let hotel: HotelInfo = serde_json::from_str(json).unwrap();
        assert_eq!(hotel.room_type, "Deluxe");
        assert!(hotel.available);
    }
}

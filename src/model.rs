// Wire-format types for the booking service. The remote API spells every
// field in lowercase with no separators, so each struct field carries an
// explicit rename; dates travel as ISO `YYYY-MM-DD` strings, which chrono's
// `NaiveDate` serde support matches exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A booking record as the service stores it. Check-in and check-out live
/// in a nested `bookingdates` object on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    #[serde(rename = "totalprice")]
    pub total_price: u32,
    #[serde(rename = "depositpaid")]
    pub deposit_paid: bool,
    #[serde(rename = "bookingdates")]
    pub dates: BookingDates,
    // The live service omits this key on records created without it.
    #[serde(rename = "additionalneeds", default)]
    pub additional_needs: String,
}

/// The stay window of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDates {
    #[serde(rename = "checkin")]
    pub check_in: NaiveDate,
    #[serde(rename = "checkout")]
    pub check_out: NaiveDate,
}

/// Response envelope of a successful create: the assigned id plus the
/// record as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBooking {
    #[serde(rename = "bookingid")]
    pub booking_id: u32,
    pub booking: Booking,
}

/// One element of the id listing returned by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    #[serde(rename = "bookingid")]
    pub booking_id: u32,
}

/// Optional narrowing criteria for the id listing. Unset fields are left
/// out of the query string entirely, so an empty filter lists everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilter {
    #[serde(rename = "firstname", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastname", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "checkin", skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(rename = "checkout", skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
}

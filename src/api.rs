// Gateway module: a small blocking HTTP client that talks to the remote
// booking service, kept behind the `BookingGateway` trait so the
// interactive flows can run against an in-memory double in tests.
//
// The service owns all booking state. This client holds nothing between
// calls except the shared reqwest client, the configuration, and the
// default headers.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::model::{Booking, BookingSummary, CreatedBooking, SearchFilter};

/// Failures crossing the gateway boundary. `NotFound` is the one condition
/// the interactive layer recovers from; everything else aborts the current
/// operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no booking with that id")]
    NotFound,

    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("service answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The five remote operations plus token retrieval, exactly as the service
/// exposes them. Create, read and search are anonymous; update and delete
/// need the session token.
pub trait BookingGateway {
    /// Obtain a short-lived token for the mutating operations.
    fn authenticate(&self) -> Result<String, GatewayError>;

    /// Store a new booking; the service assigns the id.
    fn create(&self, booking: &Booking) -> Result<CreatedBooking, GatewayError>;

    /// Fetch one booking by id.
    fn read(&self, id: u32) -> Result<Booking, GatewayError>;

    /// List booking ids, optionally narrowed by name and date filters.
    fn search(&self, filter: &SearchFilter) -> Result<Vec<BookingSummary>, GatewayError>;

    /// Replace a booking wholesale. There is no partial update.
    fn update(&self, id: u32, token: &str, booking: &Booking) -> Result<Booking, GatewayError>;

    /// Remove a booking by id.
    fn delete(&self, id: u32, token: &str) -> Result<(), GatewayError>;
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// The auth endpoint answers 200 for bad credentials too, with a `reason`
/// instead of a `token`.
#[derive(Deserialize)]
struct AuthResponse {
    token: Option<String>,
    reason: Option<String>,
}

/// Blocking client for the live service. One instance holds the shared
/// HTTP client, the fixed timeout and the default headers; per-call code
/// only adds what differs (the token cookie on update/delete).
pub struct GatewayClient {
    http: Client,
    config: Config,
}

impl GatewayClient {
    /// Build the client from an explicit configuration.
    pub fn new(config: Config) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;
        Ok(GatewayClient { http, config })
    }

    fn booking_url(&self) -> String {
        format!("{}/booking", self.config.base_url)
    }

    fn booking_id_url(&self, id: u32) -> String {
        format!("{}/booking/{}", self.config.base_url, id)
    }

    fn token_cookie(token: &str) -> String {
        format!("token={}", token)
    }
}

/// Turn a non-2xx response into a typed error. The statuses in `missing`
/// are how the service signals an unknown booking id for the given verb.
fn require_success(res: Response, missing: &[StatusCode]) -> Result<Response, GatewayError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    if missing.contains(&status) {
        return Err(GatewayError::NotFound);
    }
    let body = res.text().unwrap_or_else(|_| "".into());
    Err(GatewayError::Status { status, body })
}

impl BookingGateway for GatewayClient {
    fn authenticate(&self) -> Result<String, GatewayError> {
        let url = format!("{}/auth", self.config.base_url);
        let body = AuthRequest {
            username: &self.config.username,
            password: &self.config.password,
        };
        let res = self.http.post(&url).json(&body).send()?;
        let auth: AuthResponse = require_success(res, &[])?.json()?;
        match auth.token {
            Some(token) => Ok(token),
            None => Err(GatewayError::Auth(
                auth.reason.unwrap_or_else(|| "no token in response".into()),
            )),
        }
    }

    fn create(&self, booking: &Booking) -> Result<CreatedBooking, GatewayError> {
        let res = self.http.post(self.booking_url()).json(booking).send()?;
        Ok(require_success(res, &[])?.json()?)
    }

    fn read(&self, id: u32) -> Result<Booking, GatewayError> {
        let res = self.http.get(self.booking_id_url(id)).send()?;
        Ok(require_success(res, &[StatusCode::NOT_FOUND])?.json()?)
    }

    fn search(&self, filter: &SearchFilter) -> Result<Vec<BookingSummary>, GatewayError> {
        let res = self.http.get(self.booking_url()).query(filter).send()?;
        Ok(require_success(res, &[])?.json()?)
    }

    fn update(&self, id: u32, token: &str, booking: &Booking) -> Result<Booking, GatewayError> {
        // The service answers 405, not 404, when the id does not exist on
        // a PUT or DELETE.
        let res = self
            .http
            .put(self.booking_id_url(id))
            .header(COOKIE, Self::token_cookie(token))
            .json(booking)
            .send()?;
        Ok(require_success(res, &[StatusCode::NOT_FOUND, StatusCode::METHOD_NOT_ALLOWED])?.json()?)
    }

    fn delete(&self, id: u32, token: &str) -> Result<(), GatewayError> {
        let res = self
            .http
            .delete(self.booking_id_url(id))
            .header(COOKIE, Self::token_cookie(token))
            .send()?;
        require_success(res, &[StatusCode::NOT_FOUND, StatusCode::METHOD_NOT_ALLOWED])?;
        Ok(())
    }
}

// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive client for
// the restful-booker service.
//
// Module responsibilities:
// - `config`: Explicit configuration (base URL, credentials, timeout)
//   built from environment variables with sandbox defaults.
// - `model`: Wire-format data types for bookings, search filters and the
//   service's response envelopes.
// - `api`: The `BookingGateway` trait and the blocking HTTP client that
//   implements it against the remote service.
// - `console`: The interaction surface (prompt/say/warn) with a real
//   terminal implementation and a scripted one for tests.
// - `editor`: The interactive field editor that walks an operator through
//   a booking, field by field, with validation and keep-current defaults.
// - `ui`: The command loop tying the editor and the gateway together.
//
// Keeping `console` and `api` behind traits makes the whole interactive
// flow testable with scripted input and an in-memory gateway.
pub mod api;
pub mod config;
pub mod console;
pub mod editor;
pub mod model;
pub mod ui;

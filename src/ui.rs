// UI layer: the command loop and the per-command flows. Everything here is
// driven through the `Console` and `BookingGateway` traits, so whole
// sessions can run against scripted input and a fake service in tests.

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::{BookingGateway, GatewayError};
use crate::console::Console;
use crate::editor::{self, date_field, text_field, Field};
use crate::model::SearchFilter;

const WELCOME: &str = "Welcome to Restful Booker!";
const MENU: &str = "Please enter one of the options\ncreate\nget ids\nread\nupdate\ndelete\nexit";
const UNKNOWN_COMMAND: &str = "I didn't understand that command, please try again";
const NOT_FOUND: &str = "Booking id does not exist";
const INVALID_ID: &str = "Did not receive a valid booking id from user";

/// The closed set of commands the loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Create,
    GetIds,
    Read,
    Update,
    Delete,
    Exit,
}

impl Command {
    fn parse(raw: &str) -> Option<Command> {
        match raw.trim().to_lowercase().as_str() {
            "create" => Some(Command::Create),
            "get ids" => Some(Command::GetIds),
            "read" => Some(Command::Read),
            "update" => Some(Command::Update),
            "delete" => Some(Command::Delete),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

fn parse_id(raw: &str) -> Result<u32, &'static str> {
    raw.trim().parse::<u32>().map_err(|_| INVALID_ID)
}

// Spinner shown while a request is in flight; cleared before any output.
fn spin<T>(message: &'static str, call: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    let outcome = call();
    spinner.finish_and_clear();
    outcome
}

/// Top-level conversation. Authenticates once up front, then prompts for
/// commands until `exit`. A failed command reports its error and the loop
/// carries on; only a failed authentication ends the session.
pub fn main_loop<C, G>(io: &mut C, gateway: &G) -> Result<()>
where
    C: Console + ?Sized,
    G: BookingGateway + ?Sized,
{
    io.say(WELCOME);
    let token = spin("Authenticating...", || gateway.authenticate())
        .context("could not obtain an auth token")?;

    loop {
        io.say(MENU);
        let raw = io.prompt("option")?;
        let command = match Command::parse(&raw) {
            Some(command) => command,
            None => {
                io.warn(UNKNOWN_COMMAND);
                continue;
            }
        };
        let outcome = match command {
            Command::Create => handle_create(io, gateway),
            Command::GetIds => handle_get_ids(io, gateway),
            Command::Read => handle_read(io, gateway),
            Command::Update => handle_update(io, gateway, &token),
            Command::Delete => handle_delete(io, gateway, &token),
            Command::Exit => break,
        };
        if let Err(err) = outcome {
            io.warn(&format!("{:#}", err));
        }
    }
    Ok(())
}

/// Collect a fresh booking field by field and submit it.
fn handle_create<C, G>(io: &mut C, gateway: &G) -> Result<()>
where
    C: Console + ?Sized,
    G: BookingGateway + ?Sized,
{
    let booking = editor::edit_booking(io, None)?;
    let created = spin("Creating booking...", || gateway.create(&booking))?;
    io.say("Created booking:");
    io.say(&serde_json::to_string_pretty(&created)?);
    Ok(())
}

/// Ask for the optional name and date filters, then list matching ids.
fn handle_get_ids<C, G>(io: &mut C, gateway: &G) -> Result<()>
where
    C: Console + ?Sized,
    G: BookingGateway + ?Sized,
{
    let first_name = editor::prompt_optional(io, &name_filter_prompt(Field::FirstName), text_field)?;
    let last_name = editor::prompt_optional(io, &name_filter_prompt(Field::LastName), text_field)?;
    let check_in = editor::prompt_optional(io, &date_filter_prompt(Field::CheckIn), date_field)?;
    let check_out = editor::prompt_optional(io, &date_filter_prompt(Field::CheckOut), date_field)?;
    let filter = SearchFilter {
        first_name,
        last_name,
        check_in,
        check_out,
    };
    let summaries = spin("Searching bookings...", || gateway.search(&filter))?;
    io.say(&serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

fn name_filter_prompt(field: Field) -> String {
    format!(
        "Enter {} if you'd like to filter by that kind of name, enter nothing to skip",
        field.name()
    )
}

fn date_filter_prompt(field: Field) -> String {
    format!(
        "Enter {} date (YYYY-MM-DD) to filter by that date, enter nothing to skip",
        field.name()
    )
}

/// Fetch one booking by id and print it.
fn handle_read<C, G>(io: &mut C, gateway: &G) -> Result<()>
where
    C: Console + ?Sized,
    G: BookingGateway + ?Sized,
{
    let id = editor::prompt_value(io, "Please enter a booking id to read", None, parse_id)?;
    match spin("Fetching booking...", || gateway.read(id)) {
        Ok(booking) => {
            io.say(&serde_json::to_string_pretty(&booking)?);
            Ok(())
        }
        Err(GatewayError::NotFound) => {
            io.warn(NOT_FOUND);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Fetch the current booking, run the field editor over it, and submit the
/// replacement. A missing id short-circuits before any prompting.
fn handle_update<C, G>(io: &mut C, gateway: &G, token: &str) -> Result<()>
where
    C: Console + ?Sized,
    G: BookingGateway + ?Sized,
{
    let id = editor::prompt_value(io, "Please enter a booking id", None, parse_id)?;
    let current = match spin("Fetching booking...", || gateway.read(id)) {
        Ok(booking) => booking,
        Err(GatewayError::NotFound) => {
            io.warn(NOT_FOUND);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let replacement = editor::edit_booking(io, Some(&current))?;
    match spin("Updating booking...", || gateway.update(id, token, &replacement)) {
        Ok(updated) => {
            io.say("Updated booking:");
            io.say(&serde_json::to_string_pretty(&updated)?);
            Ok(())
        }
        Err(GatewayError::NotFound) => {
            io.warn(NOT_FOUND);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Delete one booking by id.
fn handle_delete<C, G>(io: &mut C, gateway: &G, token: &str) -> Result<()>
where
    C: Console + ?Sized,
    G: BookingGateway + ?Sized,
{
    let id = editor::prompt_value(io, "Please enter a booking id to delete", None, parse_id)?;
    match spin("Deleting booking...", || gateway.delete(id, token)) {
        Ok(()) => {
            io.say(&format!("Booking {id} deleted"));
            Ok(())
        }
        Err(GatewayError::NotFound) => {
            io.warn(NOT_FOUND);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

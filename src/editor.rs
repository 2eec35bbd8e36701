// Field editor: walks the operator through a booking one field at a time.
// Each field is prompted in a fixed order; empty input keeps the current
// value when one exists, and anything else must pass the field's parser
// before it is accepted. The editor never touches the network, so the whole
// protocol runs against a scripted console in tests.

use anyhow::Result;
use chrono::NaiveDate;

use crate::console::Console;
use crate::model::{Booking, BookingDates};

/// Printed when a required field gets empty input and there is no current
/// value to fall back on.
pub const EMPTY_VALUE: &str = "Did not receive a value from user";
/// Printed when price input is not a non-negative whole number.
pub const INVALID_PRICE: &str = "Did not receive valid, positive whole number from user";
/// Printed when date input is not a real `YYYY-MM-DD` calendar date.
pub const INVALID_DATE: &str = "Did not receive valid date from user";

/// The editable booking fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    TotalPrice,
    DepositPaid,
    CheckIn,
    CheckOut,
    AdditionalNeeds,
}

impl Field {
    /// The order the operator is walked through the fields, for both
    /// creation and update.
    pub const ORDER: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::TotalPrice,
        Field::DepositPaid,
        Field::CheckIn,
        Field::CheckOut,
        Field::AdditionalNeeds,
    ];

    /// The field name as the service spells it.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstname",
            Field::LastName => "lastname",
            Field::TotalPrice => "totalprice",
            Field::DepositPaid => "depositpaid",
            Field::CheckIn => "checkin",
            Field::CheckOut => "checkout",
            Field::AdditionalNeeds => "additionalneeds",
        }
    }

    /// Human label used when prompting for the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::TotalPrice => "total price paid",
            Field::DepositPaid => "deposit status, type 'true' or anything else for false",
            Field::CheckIn => "checkin date",
            Field::CheckOut => "checkout date",
            Field::AdditionalNeeds => "additional needs",
        }
    }
}

/// Free-text field: any non-empty input is taken verbatim.
pub fn text_field(raw: &str) -> Result<String, &'static str> {
    if raw.is_empty() {
        return Err(EMPTY_VALUE);
    }
    Ok(raw.to_string())
}

/// Price field: base-10 whole number, zero allowed, nothing negative.
pub fn price_field(raw: &str) -> Result<u32, &'static str> {
    raw.parse::<u32>().map_err(|_| INVALID_PRICE)
}

/// Date field: exactly `YYYY-MM-DD` and a real calendar date.
pub fn date_field(raw: &str) -> Result<NaiveDate, &'static str> {
    if !is_iso_shape(raw) {
        return Err(INVALID_DATE);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| INVALID_DATE)
}

/// Deposit field: trimmed input equal to `true` in any casing is true;
/// anything else, the empty string included, is false.
pub fn deposit_field(raw: &str) -> Result<bool, &'static str> {
    Ok(raw.trim().eq_ignore_ascii_case("true"))
}

// chrono accepts unpadded months and days, the service does not.
fn is_iso_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// One prompt round for one value. Empty input returns `current` untouched
/// when one exists; otherwise the input must satisfy `parse`, and on
/// failure the diagnostic is printed and the prompt repeated. The loop is
/// deliberately unbounded: an interactive operator always gets another try.
pub fn prompt_value<C, T, F>(io: &mut C, prompt: &str, mut current: Option<T>, parse: F) -> Result<T>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, &'static str>,
{
    loop {
        let raw = io.prompt(prompt)?;
        if raw.is_empty() {
            if let Some(kept) = current.take() {
                return Ok(kept);
            }
        }
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(diagnostic) => io.warn(diagnostic),
        }
    }
}

/// Prompt round for an optional value: empty input skips the field, any
/// other input must satisfy `parse` as in [`prompt_value`].
pub fn prompt_optional<C, T, F>(io: &mut C, prompt: &str, parse: F) -> Result<Option<T>>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, &'static str>,
{
    loop {
        let raw = io.prompt(prompt)?;
        if raw.is_empty() {
            return Ok(None);
        }
        match parse(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(diagnostic) => io.warn(diagnostic),
        }
    }
}

fn field_value<C, T, F>(io: &mut C, field: Field, current: Option<T>, parse: F) -> Result<T>
where
    C: Console + ?Sized,
    T: ToString,
    F: Fn(&str) -> Result<T, &'static str>,
{
    let prompt = match &current {
        Some(value) => format!(
            "Please enter the {} if you'd like to replace {}, enter nothing to keep original value",
            field.label(),
            value.to_string()
        ),
        None => format!("Please enter the {}", field.label()),
    };
    prompt_value(io, &prompt, current, parse)
}

/// Produce a fully-populated booking by prompting for every field in
/// [`Field::ORDER`]. With `current` set (update) each prompt shows the
/// stored value and empty input keeps it. Without it (creation) text,
/// price and date fields insist on input, while an empty deposit answer
/// counts as false like any other non-`true` text.
pub fn edit_booking<C>(io: &mut C, current: Option<&Booking>) -> Result<Booking>
where
    C: Console + ?Sized,
{
    let first_name = field_value(
        io,
        Field::FirstName,
        current.map(|b| b.first_name.clone()),
        text_field,
    )?;
    let last_name = field_value(
        io,
        Field::LastName,
        current.map(|b| b.last_name.clone()),
        text_field,
    )?;
    let total_price = field_value(
        io,
        Field::TotalPrice,
        current.map(|b| b.total_price),
        price_field,
    )?;
    let deposit_paid = field_value(
        io,
        Field::DepositPaid,
        current.map(|b| b.deposit_paid),
        deposit_field,
    )?;
    let check_in = field_value(io, Field::CheckIn, current.map(|b| b.dates.check_in), date_field)?;
    let check_out = field_value(
        io,
        Field::CheckOut,
        current.map(|b| b.dates.check_out),
        date_field,
    )?;
    let additional_needs = field_value(
        io,
        Field::AdditionalNeeds,
        current.map(|b| b.additional_needs.clone()),
        text_field,
    )?;

    Ok(Booking {
        first_name,
        last_name,
        total_price,
        deposit_paid,
        dates: BookingDates {
            check_in,
            check_out,
        },
        additional_needs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stored_booking() -> Booking {
        Booking {
            first_name: "Zach".into(),
            last_name: "Schwartz".into(),
            total_price: 100,
            deposit_paid: false,
            dates: BookingDates {
                check_in: date(2020, 1, 1),
                check_out: date(2020, 2, 2),
            },
            additional_needs: "Nothing".into(),
        }
    }

    #[test_case("2020-01-01" => true ; "plain iso date")]
    #[test_case("2020-02-29" => true ; "leap day")]
    #[test_case("0001-01-01" => true ; "small year")]
    #[test_case("2020-02-30" => false ; "impossible day")]
    #[test_case("2021-02-29" => false ; "non leap year")]
    #[test_case("2020/02/02" => false ; "slash separators")]
    #[test_case("abcd-01-01" => false ; "alphabetic year")]
    #[test_case("2020-1-1" => false ; "unpadded month and day")]
    #[test_case("20-01-01" => false ; "two digit year")]
    #[test_case("2020-13-01" => false ; "month out of range")]
    #[test_case("2020-01-01 " => false ; "trailing space")]
    #[test_case("" => false ; "empty")]
    fn date_field_cases(input: &str) -> bool {
        date_field(input).is_ok()
    }

    #[test_case("0" => Some(0) ; "zero")]
    #[test_case("100" => Some(100) ; "plain number")]
    #[test_case("007" => Some(7) ; "leading zeros")]
    #[test_case("-1" => None ; "negative")]
    #[test_case("abc" => None ; "alphabetic")]
    #[test_case("3.5" => None ; "fractional")]
    #[test_case("" => None ; "empty")]
    fn price_field_cases(input: &str) -> Option<u32> {
        price_field(input).ok()
    }

    #[test_case("true" => true ; "lowercase")]
    #[test_case("TRUE" => true ; "uppercase")]
    #[test_case("True" => true ; "capitalized")]
    #[test_case(" true " => true ; "padded")]
    #[test_case("false" => false ; "false literal")]
    #[test_case("yes" => false ; "other word")]
    #[test_case("" => false ; "empty")]
    fn deposit_field_cases(input: &str) -> bool {
        deposit_field(input).unwrap()
    }

    #[test]
    fn create_collects_every_field() {
        let mut io = ScriptedConsole::new(&[
            "Zach",
            "Schwartz",
            "100",
            "",
            "2020-01-01",
            "2020-02-02",
            "Nothing",
        ]);
        let booking = edit_booking(&mut io, None).unwrap();
        assert_eq!(booking, stored_booking());
        assert_eq!(io.remaining(), 0);
        assert!(io.warnings.is_empty());
    }

    #[test]
    fn create_prompts_follow_the_field_order() {
        let mut io = ScriptedConsole::new(&[
            "Zach",
            "Schwartz",
            "100",
            "",
            "2020-01-01",
            "2020-02-02",
            "Nothing",
        ]);
        edit_booking(&mut io, None).unwrap();
        let expected: Vec<String> = Field::ORDER
            .iter()
            .map(|field| format!("Please enter the {}", field.label()))
            .collect();
        assert_eq!(io.prompts, expected);
    }

    #[test]
    fn create_insists_on_text_input() {
        let mut io = ScriptedConsole::new(&[
            "",
            "",
            "Zach",
            "Schwartz",
            "100",
            "true",
            "2020-01-01",
            "2020-02-02",
            "Nothing",
        ]);
        let booking = edit_booking(&mut io, None).unwrap();
        assert_eq!(booking.first_name, "Zach");
        assert_eq!(io.warnings, vec![EMPTY_VALUE, EMPTY_VALUE]);
    }

    #[test]
    fn create_reprompts_until_the_date_is_real() {
        let mut io = ScriptedConsole::new(&[
            "Zach",
            "Schwartz",
            "100",
            "true",
            "2020-02-30",
            "2020/02/02",
            "2020-03-03",
            "2020-04-04",
            "Nothing",
        ]);
        let booking = edit_booking(&mut io, None).unwrap();
        assert_eq!(booking.dates.check_in, date(2020, 3, 3));
        assert_eq!(booking.dates.check_out, date(2020, 4, 4));
        assert_eq!(io.warnings, vec![INVALID_DATE, INVALID_DATE]);
    }

    #[test]
    fn create_reprompts_on_bad_price() {
        let mut io = ScriptedConsole::new(&[
            "Zach",
            "Schwartz",
            "-1",
            "3.5",
            "100",
            "",
            "2020-01-01",
            "2020-02-02",
            "Nothing",
        ]);
        let booking = edit_booking(&mut io, None).unwrap();
        assert_eq!(booking.total_price, 100);
        assert_eq!(io.warnings, vec![INVALID_PRICE, INVALID_PRICE]);
    }

    #[test]
    fn empty_update_keeps_every_field() {
        let stored = stored_booking();
        let mut io = ScriptedConsole::new(&["", "", "", "", "", "", ""]);
        let booking = edit_booking(&mut io, Some(&stored)).unwrap();
        assert_eq!(booking, stored);
        assert!(io.warnings.is_empty());
    }

    #[test]
    fn update_replaces_only_answered_fields() {
        let stored = stored_booking();
        let mut io = ScriptedConsole::new(&["Gelber", "", "", "", "", "", ""]);
        let booking = edit_booking(&mut io, Some(&stored)).unwrap();
        assert_eq!(booking.first_name, "Gelber");
        assert_eq!(booking.last_name, stored.last_name);
        assert_eq!(booking.total_price, stored.total_price);
        assert_eq!(booking.deposit_paid, stored.deposit_paid);
        assert_eq!(booking.dates, stored.dates);
        assert_eq!(booking.additional_needs, stored.additional_needs);
    }

    #[test]
    fn update_keeps_a_true_deposit_on_empty_input() {
        let mut stored = stored_booking();
        stored.deposit_paid = true;
        let mut io = ScriptedConsole::new(&["", "", "", "", "", "", ""]);
        let booking = edit_booking(&mut io, Some(&stored)).unwrap();
        assert!(booking.deposit_paid);
    }

    #[test]
    fn update_prompts_show_the_stored_value() {
        let stored = stored_booking();
        let mut io = ScriptedConsole::new(&["", "", "", "", "", "", ""]);
        edit_booking(&mut io, Some(&stored)).unwrap();
        assert!(io.prompts[2].contains("replace 100"));
        assert!(io.prompts[4].contains("replace 2020-01-01"));
        assert!(io.prompts.iter().all(|p| p.contains("enter nothing to keep original value")));
    }

    #[test]
    fn update_validates_replacement_input() {
        let stored = stored_booking();
        let mut io = ScriptedConsole::new(&["", "", "abc", "250", "", "", "", ""]);
        let booking = edit_booking(&mut io, Some(&stored)).unwrap();
        assert_eq!(booking.total_price, 250);
        assert_eq!(io.warnings, vec![INVALID_PRICE]);
    }

    #[test]
    fn prompt_optional_skips_on_empty_input() {
        let mut io = ScriptedConsole::new(&[""]);
        let value = prompt_optional(&mut io, "checkin", date_field).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn prompt_optional_still_validates_real_input() {
        let mut io = ScriptedConsole::new(&["2020-1-1", "2020-01-01"]);
        let value = prompt_optional(&mut io, "checkin", date_field).unwrap();
        assert_eq!(value, Some(date(2020, 1, 1)));
        assert_eq!(io.warnings, vec![INVALID_DATE]);
    }

    #[test]
    fn prompt_value_errors_when_the_script_runs_dry() {
        let mut io = ScriptedConsole::new(&["nonsense"]);
        let result = prompt_value(&mut io, "price", None::<u32>, price_field);
        assert!(result.is_err());
        assert_eq!(io.warnings, vec![INVALID_PRICE]);
    }
}

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{CoordinateError, Result};
use crate::types::{AngleKind, Sexagesimal};

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const DECIMAL_DIGITS: usize = 10;

const SECOND_TICKS: f64 = 10_000.0;

static RA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]?[0-9])[: ]([0-5]?[0-9][.0-9]*)[: ]?([.0-9]+)?$")
        .expect("right ascension pattern is valid")
});

static DEC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?([0-9]?[0-9])[: ]([0-5]?[0-9][.0-9]*)[: ]?([.0-9]+)?$")
        .expect("declination pattern is valid")
});

// Reads the longest leading `digits[.digits]` run, so `1.2.3` reads as 1.2.
fn parse_component(text: &str, input: &str) -> Result<f64> {
    let int_len = text.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = int_len;
    if text[end..].starts_with('.') {
        end += 1 + text[end + 1..].bytes().take_while(u8::is_ascii_digit).count();
    }
    let number = &text[..end];
    if number.trim_start_matches('.').is_empty() {
        return Err(CoordinateError::Malformed(input.to_string()));
    }
    number
        .parse::<f64>()
        .map_err(|_| CoordinateError::Malformed(input.to_string()))
}

fn check_range(component: &'static str, value: f64, ok: bool) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(CoordinateError::OutOfRange { component, value })
    }
}

pub fn parse_sexagesimal_ra(input: &str) -> Result<f64> {
    let caps = RA_PATTERN
        .captures(input)
        .ok_or_else(|| CoordinateError::Malformed(input.to_string()))?;
    let hh = parse_component(&caps[1], input)?;
    let mm = parse_component(&caps[2], input)?;
    let ss = match caps.get(3) {
        Some(m) => parse_component(m.as_str(), input)?,
        None => 0.0,
    };
    check_range("hours", hh, (0.0..=23.0).contains(&hh))?;
    check_range("minutes", mm, (0.0..60.0).contains(&mm))?;
    check_range("seconds", ss, (0.0..60.0).contains(&ss))?;
    Ok(DEGREES_PER_HOUR * (hh + mm / 60.0 + ss / 3600.0))
}

pub fn parse_sexagesimal_dec(input: &str) -> Result<f64> {
    let caps = DEC_PATTERN
        .captures(input)
        .ok_or_else(|| CoordinateError::Malformed(input.to_string()))?;
    let sign = if caps.get(1).is_some_and(|m| m.as_str() == "-") { -1.0 } else { 1.0 };
    let dd = parse_component(&caps[2], input)?;
    let mm = parse_component(&caps[3], input)?;
    let ss = match caps.get(4) {
        Some(m) => parse_component(m.as_str(), input)?,
        None => 0.0,
    };
    check_range("degrees", dd, (0.0..=90.0).contains(&dd))?;
    check_range("minutes", mm, (0.0..=59.0).contains(&mm))?;
    check_range("seconds", ss, (0.0..60.0).contains(&ss))?;
    Ok(sign * (dd + mm / 60.0 + ss / 3600.0))
}

/// Input that does not parse is handed back untouched so forms can echo it.
pub fn sexagesimal_ra_to_decimal(input: &str) -> String {
    match parse_sexagesimal_ra(input) {
        Ok(deg) => format!("{:.*}", DECIMAL_DIGITS, deg),
        Err(err) => {
            debug!("passing right ascension through unchanged: {}", err);
            input.to_string()
        }
    }
}

pub fn sexagesimal_dec_to_decimal(input: &str) -> String {
    match parse_sexagesimal_dec(input) {
        Ok(deg) => format!("{:.*}", DECIMAL_DIGITS, deg),
        Err(err) => {
            debug!("passing declination through unchanged: {}", err);
            input.to_string()
        }
    }
}

fn split_angle(kind: AngleKind, degrees: f64) -> Sexagesimal {
    // Non-finite input renders as a zero angle.
    let degrees = if degrees.is_finite() { degrees } else { 0.0 };
    let sign = if degrees < 0.0 { -1 } else { 1 };
    let magnitude = match kind {
        AngleKind::RightAscension => degrees.abs() / DEGREES_PER_HOUR,
        AngleKind::Declination => degrees.abs(),
    };
    // Rounding happens once, in whole ticks, so no field can carry to 60.
    let mut ticks = (magnitude * 3600.0 * SECOND_TICKS).round() as u64;
    let ticks_per_minute = 60 * SECOND_TICKS as u64;
    let ticks_per_whole = 60 * ticks_per_minute;
    if kind == AngleKind::RightAscension {
        ticks %= 24 * ticks_per_whole;
    }
    let whole = ticks / ticks_per_whole;
    let minutes = (ticks % ticks_per_whole) / ticks_per_minute;
    let seconds = (ticks % ticks_per_minute) as f64 / SECOND_TICKS;
    Sexagesimal {
        kind,
        sign,
        whole: u32::try_from(whole).unwrap_or(u32::MAX),
        minutes: minutes as u32,
        seconds,
    }
}

pub fn decimal_ra_to_sexagesimal(degrees: f64) -> Sexagesimal {
    split_angle(AngleKind::RightAscension, degrees)
}

pub fn decimal_dec_to_sexagesimal(degrees: f64) -> Sexagesimal {
    split_angle(AngleKind::Declination, degrees)
}

impl Sexagesimal {
    pub fn whole_signed(&self) -> i64 {
        self.sign as i64 * self.whole as i64
    }

    pub fn to_decimal(&self) -> f64 {
        let magnitude = self.whole as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        let scale = match self.kind {
            AngleKind::RightAscension => DEGREES_PER_HOUR,
            AngleKind::Declination => 1.0,
        };
        self.sign as f64 * magnitude * scale
    }
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match (self.kind, self.sign < 0) {
            (_, true) => "-",
            (AngleKind::Declination, false) => "+",
            (AngleKind::RightAscension, false) => "",
        };
        let seconds = format!("{:07.4}", self.seconds);
        let seconds = seconds.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{}{:02}:{:02}:{}", sign, self.whole, self.minutes, seconds)
    }
}

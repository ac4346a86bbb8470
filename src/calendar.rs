use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::debug;

use crate::types::{InstrumentFamily, SemesterBoundary};

pub const APRIL: u32 = 4;
pub const OCTOBER: u32 = 10;

pub const MJD_EPOCH: f64 = 2_400_000.5;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_EXPOSURE_TIME: f64 = 60.0;

// Boundaries past chrono's range saturate so every function stays total.
fn first_of(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(if year < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

fn day_before(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(NaiveDate::MIN)
}

pub fn semester_start(date: NaiveDate) -> NaiveDate {
    let year = date.year();
    match date.month() {
        m if m < APRIL => first_of(year - 1, OCTOBER),
        m if m < OCTOBER => first_of(year, APRIL),
        _ => first_of(year, OCTOBER),
    }
}

pub fn semester_end(date: NaiveDate) -> NaiveDate {
    let year = date.year();
    let next_boundary = match date.month() {
        m if m < APRIL => first_of(year, APRIL),
        m if m < OCTOBER => first_of(year, OCTOBER),
        _ => first_of(year + 1, APRIL),
    };
    day_before(next_boundary)
}

pub fn semester_bounds(date: NaiveDate) -> SemesterBoundary {
    SemesterBoundary {
        start: semester_start(date),
        end: semester_end(date),
    }
}

pub fn semester_bounds_at<Tz: TimeZone>(dt: &DateTime<Tz>) -> SemesterBoundary {
    semester_bounds(dt.date_naive())
}

impl SemesterBoundary {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn next(&self) -> SemesterBoundary {
        semester_bounds(self.end.succ_opt().unwrap_or(NaiveDate::MAX))
    }

    pub fn previous(&self) -> SemesterBoundary {
        semester_bounds(day_before(self.start))
    }
}

impl InstrumentFamily {
    pub fn from_instrument_type(instrument_type: &str) -> Self {
        if instrument_type.to_uppercase().contains("SOAR") {
            InstrumentFamily::Soar
        } else {
            InstrumentFamily::Other
        }
    }
}

/// Lamp flats scale with slit width. Widths are matched as substrings because
/// they arrive embedded in optical element names like `slit_1.6as`.
pub fn slit_width_to_exposure_time(slit_width: &str) -> f64 {
    const LADDER: [(&str, f64); 4] = [("1.2", 70.0), ("1.6", 50.0), ("2.0", 40.0), ("6.0", 15.0)];
    LADDER
        .iter()
        .find(|(width, _)| slit_width.contains(*width))
        .map(|&(_, seconds)| seconds)
        .unwrap_or(DEFAULT_EXPOSURE_TIME)
}

pub fn lamp_flat_default_exposure_time(
    slit_width: &str,
    instrument_type: &str,
    readout_mode: &str,
) -> f64 {
    match InstrumentFamily::from_instrument_type(instrument_type) {
        InstrumentFamily::Soar => {
            if readout_mode.contains("400m1") {
                3.0
            } else if readout_mode.contains("400m2") {
                2.0
            } else {
                DEFAULT_EXPOSURE_TIME
            }
        }
        InstrumentFamily::Other => slit_width_to_exposure_time(slit_width),
    }
}

pub fn arc_default_exposure_time(instrument_type: &str) -> f64 {
    match InstrumentFamily::from_instrument_type(instrument_type) {
        InstrumentFamily::Soar => 0.5,
        InstrumentFamily::Other => DEFAULT_EXPOSURE_TIME,
    }
}

fn fractional_digits(text: &str) -> usize {
    text.split_once('.')
        .map(|(_, frac)| frac.chars().take_while(char::is_ascii_digit).count())
        .unwrap_or(0)
}

/// MJD from a Julian Date given as text, keeping as many decimal places as the text shows.
pub fn julian_text_to_modified_julian(jd: &str) -> Option<f64> {
    let text = jd.trim();
    let value: f64 = text.parse().ok()?;
    if !(value >= MJD_EPOCH) {
        return None;
    }
    let precision = fractional_digits(text);
    format!("{:.*}", precision, value - MJD_EPOCH).parse().ok()
}

pub fn julian_to_modified_julian(jd: f64) -> Option<f64> {
    julian_text_to_modified_julian(&jd.to_string())
}

fn parse_api_datetime(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn format_date(value: &str) -> Option<String> {
    let text = value.trim();
    if text.is_empty() {
        return None;
    }
    match parse_api_datetime(text) {
        Some(dt) => Some(dt.format(DATETIME_FORMAT).to_string()),
        None => {
            debug!("unrecognised timestamp {:?}", text);
            None
        }
    }
}

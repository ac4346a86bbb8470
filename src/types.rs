use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleKind {
    RightAscension,
    Declination,
}

/// A base-60 angle. Right ascension counts hours, declination counts degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub kind: AngleKind,
    pub sign: i8,
    pub whole: u32,
    pub minutes: u32,
    pub seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemesterBoundary {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentFamily {
    Soar,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    pub key: &'static str,
    pub human_readable: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteMetadata {
    pub code: &'static str,
    pub name: &'static str,
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    pub fn first(&self) -> &str {
        match self {
            QueryValue::Single(v) => v,
            QueryValue::Multiple(vs) => vs.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        match self {
            QueryValue::Single(v) => vec![v.clone()],
            QueryValue::Multiple(vs) => vs.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotWindow {
    pub start: f64,
    pub end: f64,
}

impl PlotWindow {
    pub fn interval(&self) -> f64 {
        self.end - self.start
    }
}

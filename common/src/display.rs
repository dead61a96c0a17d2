//! Text helpers shared by every front end that shows a `JobPosting`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::JobPosting;

/// Shown instead of a deadline when the posting has none.
pub const DEADLINE_NOT_SPECIFIED: &str = "Ej angiven";

/// Swedish calendar date, e.g. 2024-11-02.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats an ISO-8601 date or date-time as a Swedish calendar date.
///
/// Accepts RFC 3339 timestamps, offset-less timestamps (which is what the
/// JobTech API sends) and bare dates. Returns `None` for anything else.
pub fn format_calendar_date(raw: &str) -> Option<String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive().format(DATE_FORMAT).to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date().format(DATE_FORMAT).to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date.format(DATE_FORMAT).to_string());
    }
    None
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl JobPosting {
    pub fn headline(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Workplace name if the employer has one, otherwise the legal name.
    pub fn employer_display_name(&self) -> &str {
        let Some(employer) = &self.employer else {
            return "";
        };
        non_empty(employer.display_name.as_ref())
            .or_else(|| non_empty(employer.name.as_ref()))
            .unwrap_or_default()
    }

    /// Legal employer name, used as alt text for the logo.
    pub fn employer_name(&self) -> &str {
        self.employer
            .as_ref()
            .and_then(|e| e.name.as_deref())
            .unwrap_or_default()
    }

    pub fn employment_label(&self) -> &str {
        self.employment_type
            .as_ref()
            .and_then(|t| t.label.as_deref())
            .unwrap_or_default()
    }

    /// "municipality, region", either side left blank when missing.
    pub fn location_line(&self) -> String {
        let (municipality, region) = match &self.location {
            Some(loc) => (
                loc.municipality.as_deref().unwrap_or_default(),
                loc.region.as_deref().unwrap_or_default(),
            ),
            None => ("", ""),
        };
        format!("{}, {}", municipality, region)
    }

    /// Publication date as a calendar date. Unparseable values are shown raw.
    pub fn published_label(&self) -> String {
        match self.published_at.as_deref() {
            Some(raw) => format_calendar_date(raw).unwrap_or_else(|| raw.to_string()),
            None => String::new(),
        }
    }

    pub fn deadline_label(&self) -> String {
        match non_empty(self.application_deadline.as_ref()) {
            Some(raw) => format_calendar_date(raw).unwrap_or_else(|| raw.to_string()),
            None => DEADLINE_NOT_SPECIFIED.to_string(),
        }
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_ref()
            .and_then(|d| non_empty(d.text.as_ref()))
    }

    /// First `max_chars` characters of the description, with an ellipsis when
    /// something was cut.
    pub fn description_excerpt(&self, max_chars: usize) -> Option<String> {
        let text = self.description_text()?.trim();
        let mut chars = text.chars();
        let excerpt: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            Some(format!("{}…", excerpt.trim_end()))
        } else {
            Some(excerpt)
        }
    }
}

use serde::{Deserialize, Serialize};

pub mod display;

pub use display::{DEADLINE_NOT_SPECIFIED, format_calendar_date};

/// One job listing as returned by the JobTech search API.
///
/// Every field is optional because upstream records are inconsistent; the
/// serde renames map the wire names onto ours.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct JobPosting {
    pub id: Option<String>,
    #[serde(rename = "headline")]
    pub title: Option<String>,
    #[serde(rename = "webpage_url")]
    pub detail_url: Option<String>,
    pub logo_url: Option<String>,
    pub employer: Option<Employer>,
    #[serde(rename = "workplace_address")]
    pub location: Option<Location>,
    pub description: Option<Description>,
    #[serde(rename = "publication_date")]
    pub published_at: Option<String>,
    pub application_deadline: Option<String>,
    #[serde(rename = "working_hours_type")]
    pub employment_type: Option<EmploymentType>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Employer {
    pub name: Option<String>,
    #[serde(rename = "workplace")]
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Location {
    pub municipality: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Description {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EmploymentType {
    pub label: Option<String>,
}

/// Envelope of a search response. `hits` is required: a body without it is
/// treated as malformed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchResponse {
    pub hits: Vec<JobPosting>,
}

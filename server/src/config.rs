use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use jobtech::{DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_REGION, SearchParams};

use crate::error::{AppError, Result};

/// Hosts that logo and profile images may be loaded from (https only).
/// Subdomains of these hosts are accepted as well.
pub const IMAGE_HOSTS: &[&str] = &["arbetsformedlingen.se", "media.licdn.com"];

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_PAGE_TITLE: &str = "Lediga jobb i Skåne";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub search: SearchParams,
    /// `None` leaves JobTech requests without a deadline.
    pub request_timeout: Option<Duration>,
    pub page: PageSettings,
}

/// Everything the renderer needs besides the view state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    pub title: String,
    pub profile: Option<Profile>,
    pub show_description: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            profile: None,
            show_description: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: Option<String>,
    pub image_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source; empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let timeout_secs: Option<u64> = get_parse(&get, "JOBTECH_TIMEOUT_SECS")?;

        let profile = get("PROFILE_NAME").map(|name| Profile {
            name,
            role: get("PROFILE_ROLE"),
            image_url: get("PROFILE_IMAGE_URL"),
        });

        Ok(Self {
            server_address: get("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            search: SearchParams {
                base_url: get("JOBTECH_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                region: get("JOBTECH_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
                limit: get_parse(&get, "JOBTECH_LIMIT")?.unwrap_or(DEFAULT_LIMIT),
            },
            request_timeout: timeout_secs.map(Duration::from_secs),
            page: PageSettings {
                title: get("PAGE_TITLE").unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string()),
                profile,
                show_description: get_parse(&get, "SHOW_DESCRIPTION")?.unwrap_or(false),
            },
        })
    }
}

fn get_parse<T, G>(get: &G, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid value for {}: {}", name, e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_address, "127.0.0.1:3000");
        assert_eq!(config.search, SearchParams::default());
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.page, PageSettings::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SERVER_ADDRESS", "0.0.0.0:8080"),
            ("JOBTECH_REGION", "01"),
            ("JOBTECH_LIMIT", "25"),
            ("JOBTECH_TIMEOUT_SECS", "10"),
            ("PROFILE_NAME", "Taleb Haikal"),
            ("PROFILE_ROLE", "Grundare & App-ägare"),
            ("SHOW_DESCRIPTION", "true"),
        ])
        .unwrap();

        assert_eq!(config.server_address, "0.0.0.0:8080");
        assert_eq!(config.search.region, "01");
        assert_eq!(config.search.limit, 25);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(10)));
        assert!(config.page.show_description);

        let profile = config.page.profile.unwrap();
        assert_eq!(profile.name, "Taleb Haikal");
        assert_eq!(profile.role.as_deref(), Some("Grundare & App-ägare"));
        assert_eq!(profile.image_url, None);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("JOBTECH_LIMIT", "  "), ("PROFILE_NAME", "")]).unwrap();
        assert_eq!(config.search.limit, 100);
        assert!(config.page.profile.is_none());
    }

    #[test]
    fn test_invalid_limit() {
        let err = config_from(&[("JOBTECH_LIMIT", "many")]).unwrap_err();
        assert!(err.to_string().contains("JOBTECH_LIMIT"));
    }

    #[test]
    fn test_invalid_flag() {
        assert!(matches!(
            config_from(&[("SHOW_DESCRIPTION", "yes")]),
            Err(AppError::Config(_))
        ));
    }
}

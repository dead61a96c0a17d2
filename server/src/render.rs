//! HTML for the job board.
//!
//! Pure functions of the view state; nothing here talks to the network.

use common::JobPosting;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use url::Url;

use crate::config::{IMAGE_HOSTS, PageSettings, Profile};
use crate::state::ViewState;

pub const LOADING_TEXT: &str = "Laddar jobb...";
pub const SEARCH_PLACEHOLDER: &str = "Sök jobb (t.ex. chaufför, butik, lagerarbetare)";
const DESCRIPTION_CHARS: usize = 300;
/// Seconds between reloads while a search is pending.
const LOADING_REFRESH_SECS: &str = "2";

const STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
.board { padding: 2rem; min-height: 100vh; }
h1 { text-align: center; font-size: 1.9rem; margin-bottom: 1.5rem; }
.profile { display: flex; flex-direction: column; align-items: center; margin-bottom: 2.5rem; }
.profile .avatar { border-radius: 50%; border: 4px solid #fff; box-shadow: 0 4px 12px rgba(0,0,0,.15); }
.profile p { color: #4b5563; margin: 0; }
.search { display: flex; justify-content: center; gap: .5rem; margin-bottom: 2rem; }
.search input { padding: .5rem 1rem; width: 20rem; border: 1px solid #d1d5db; border-radius: .5rem; }
.search button { padding: .5rem 1rem; background: #2563eb; color: #fff; border: 0; border-radius: .5rem; cursor: pointer; }
.loading, .empty { text-align: center; color: #6b7280; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(22rem, 1fr)); }
.card { background: #fff; border-radius: 1rem; box-shadow: 0 2px 8px rgba(0,0,0,.08); padding: 1.25rem; }
.card-head { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
.card-head h2 { font-size: 1.2rem; margin: 0; }
.employer { color: #4b5563; margin: 0; }
.dates, .location, .description { font-size: .875rem; color: #6b7280; }
.card-foot { display: flex; justify-content: space-between; align-items: center; margin-top: .75rem; }
.card-foot a { color: #2563eb; font-weight: 500; text-decoration: none; }
"#;

/// True for https URLs on an allow-listed host or one of its subdomains.
pub fn is_allowed_image(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    if url.scheme() != "https" {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    IMAGE_HOSTS.iter().any(|allowed| {
        host == *allowed
            || host
                .strip_suffix(allowed)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

fn allowed_image(raw: Option<&str>) -> Option<&str> {
    let raw = raw.filter(|s| !s.is_empty())?;
    if is_allowed_image(raw) {
        Some(raw)
    } else {
        tracing::debug!(url = raw, "Skipping image from host outside the allow-list");
        None
    }
}

pub fn page(state: &ViewState, settings: &PageSettings) -> Markup {
    html! {
        (DOCTYPE)
        html lang="sv" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if state.in_flight {
                    meta http-equiv="refresh" content=(LOADING_REFRESH_SECS);
                }
                title { (settings.title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                main class="board" {
                    h1 { (settings.title) }
                    @if let Some(profile) = &settings.profile {
                        (profile_block(profile))
                    }
                    (search_form(&state.query))
                    (results(state, settings.show_description))
                }
            }
        }
    }
}

fn profile_block(profile: &Profile) -> Markup {
    html! {
        div class="profile" {
            @if let Some(src) = allowed_image(profile.image_url.as_deref()) {
                img class="avatar" src=(src) alt=(profile.name) width="120" height="120";
            }
            h2 { (profile.name) }
            @if let Some(role) = &profile.role {
                p { (role) }
            }
        }
    }
}

fn search_form(query: &str) -> Markup {
    html! {
        form class="search" method="post" action="/search" {
            input type="text" name="q" value=(query) placeholder=(SEARCH_PLACEHOLDER);
            button type="submit" { "Sök" }
        }
    }
}

/// Loading indicator, result grid or empty-state message, never more than
/// one of them.
pub fn results(state: &ViewState, show_description: bool) -> Markup {
    html! {
        @if state.in_flight {
            p class="loading" { (LOADING_TEXT) }
        } @else if state.postings.is_empty() {
            p class="empty" { "Inga jobb hittades för " (state.query) "." }
        } @else {
            div class="grid" {
                @for job in &state.postings {
                    (card(job, show_description))
                }
            }
        }
    }
}

pub fn card(job: &JobPosting, show_description: bool) -> Markup {
    html! {
        article class="card" {
            div class="card-head" {
                @if let Some(logo) = allowed_image(job.logo_url.as_deref()) {
                    img class="logo" src=(logo) alt=(job.employer_name()) width="60" height="60";
                }
                div {
                    h2 { (job.headline()) }
                    p class="employer" { (job.employer_display_name()) }
                }
            }
            div class="dates" {
                "jobb type: " strong { (job.employment_label()) }
                br;
                "Publicerad: " (job.published_label())
                br;
                "Sista ansökningsdag: " (job.deadline_label())
            }
            @if show_description {
                @if let Some(text) = job.description_excerpt(DESCRIPTION_CHARS) {
                    p class="description" { (text) }
                }
            }
            div class="card-foot" {
                span class="location" { (job.location_line()) }
                @if let Some(url) = &job.detail_url {
                    a href=(url) target="_blank" rel="noopener noreferrer" { "Se annons →" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Description, Employer, Location};

    fn job(id: &str, title: &str) -> JobPosting {
        JobPosting {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            detail_url: Some(format!("https://arbetsformedlingen.se/platsbanken/annonser/{}", id)),
            employer: Some(Employer {
                name: Some("Åkeri AB".into()),
                display_name: Some("Åkeriet Ystad".into()),
            }),
            location: Some(Location {
                municipality: Some("Ystad".into()),
                region: Some("Skåne län".into()),
            }),
            published_at: Some("2024-11-01T08:00:00".into()),
            ..Default::default()
        }
    }

    fn loaded(query: &str, postings: Vec<JobPosting>) -> ViewState {
        ViewState {
            query: query.to_string(),
            postings,
            in_flight: false,
            latest_token: 1,
        }
    }

    #[test]
    fn test_one_card_per_posting_in_order() {
        let state = loaded("chaufför", vec![job("1", "Chaufför C-kort"), job("2", "Budbilsförare")]);
        let html = results(&state, false).into_string();

        assert_eq!(html.matches("<article class=\"card\">").count(), 2);
        let first = html.find("Chaufför C-kort").unwrap();
        let second = html.find("Budbilsförare").unwrap();
        assert!(first < second);
        assert!(!html.contains(LOADING_TEXT));
    }

    #[test]
    fn test_empty_message() {
        let html = results(&loaded("chaufför", vec![]), false).into_string();
        assert!(html.contains("Inga jobb hittades för chaufför."));
        assert!(!html.contains("class=\"grid\""));
    }

    #[test]
    fn test_loading_hides_grid() {
        let state = ViewState {
            in_flight: true,
            ..loaded("lager", vec![job("1", "Lagerarbetare")])
        };
        let html = results(&state, false).into_string();
        assert!(html.contains(LOADING_TEXT));
        assert!(!html.contains("Lagerarbetare"));
        assert!(!html.contains("Inga jobb"));
    }

    #[test]
    fn test_loading_page_refreshes() {
        let state = ViewState {
            in_flight: true,
            ..Default::default()
        };
        let html = page(&state, &PageSettings::default()).into_string();
        assert!(html.contains("http-equiv=\"refresh\""));

        let html = page(&loaded("", vec![]), &PageSettings::default()).into_string();
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn test_card_fields() {
        let html = card(&job("1", "Chaufför C-kort"), false).into_string();
        assert!(html.contains("Åkeriet Ystad"));
        assert!(html.contains("Publicerad: 2024-11-01"));
        assert!(html.contains("Sista ansökningsdag: Ej angiven"));
        assert!(html.contains("Ystad, Skåne län"));
        assert!(html.contains(
            "href=\"https://arbetsformedlingen.se/platsbanken/annonser/1\" target=\"_blank\" rel=\"noopener noreferrer\""
        ));
    }

    #[test]
    fn test_card_without_logo_has_no_img() {
        let html = card(&job("1", "Chaufför"), false).into_string();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_card_logo_allow_list() {
        let mut posting = job("1", "Chaufför");
        posting.logo_url = Some("https://www.arbetsformedlingen.se/logo/1.png".into());
        let html = card(&posting, false).into_string();
        assert!(html.contains("<img class=\"logo\" src=\"https://www.arbetsformedlingen.se/logo/1.png\" alt=\"Åkeri AB\""));

        posting.logo_url = Some("https://evil.example.com/logo.png".into());
        assert!(!card(&posting, false).into_string().contains("<img"));
    }

    #[test]
    fn test_is_allowed_image() {
        assert!(is_allowed_image("https://media.licdn.com/dms/image/x"));
        assert!(is_allowed_image("https://arbetsformedlingen.se/a.png"));
        assert!(!is_allowed_image("http://arbetsformedlingen.se/a.png"));
        assert!(!is_allowed_image("https://notarbetsformedlingen.se/a.png"));
        assert!(!is_allowed_image("not a url"));
    }

    #[test]
    fn test_markup_is_escaped() {
        let html = card(&job("1", "<script>alert(1)</script>"), false).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_description_only_when_enabled() {
        let mut posting = job("1", "Säljare");
        posting.description = Some(Description {
            text: Some("Vi söker en säljare.".into()),
        });
        assert!(!card(&posting, false).into_string().contains("Vi söker"));
        assert!(card(&posting, true).into_string().contains("Vi söker en säljare."));
    }

    #[test]
    fn test_page_header_and_form() {
        let settings = PageSettings {
            profile: Some(Profile {
                name: "Taleb Haikal".into(),
                role: Some("Grundare & App-ägare".into()),
                image_url: Some("https://media.licdn.com/dms/image/profile.jpg".into()),
            }),
            ..Default::default()
        };
        let html = page(&loaded("butik", vec![]), &settings).into_string();

        assert!(html.contains("<h1>Lediga jobb i Skåne</h1>"));
        assert!(html.contains("Grundare &amp; App-ägare"));
        assert!(html.contains("class=\"avatar\""));
        assert!(html.contains("name=\"q\" value=\"butik\""));
        assert!(html.contains("action=\"/search\""));
    }
}

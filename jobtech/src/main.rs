//! Command-line job search
//!
//! Runs one query against the JobTech search API and prints the postings.

use clap::Parser;
use common::JobPosting;
use jobtech::{JobTechClient, SearchParams, DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_REGION};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jobtech", about = "Search open jobs via the JobTech API")]
struct Cli {
    /// Free-text search, e.g. "chaufför". Empty means unfiltered.
    #[arg(default_value = "")]
    query: String,

    /// Region code sent with the search
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,

    /// Maximum number of postings to fetch
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Print the raw postings as JSON instead of cards
    #[arg(long)]
    json: bool,
}

fn print_card(job: &JobPosting) {
    println!("📋 {}", job.headline());
    println!("   🏢 {}", job.employer_display_name());
    println!("   🕒 {}", job.employment_label());
    println!("   📍 {}", job.location_line());
    println!(
        "   📅 Publicerad: {} | Sista ansökningsdag: {}",
        job.published_label(),
        job.deadline_label()
    );
    if let Some(url) = &job.detail_url {
        println!("   🔗 {}", url);
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = JobTechClient::new(SearchParams {
        base_url: cli.base_url,
        region: cli.region,
        limit: cli.limit,
    })?;

    let jobs = client.fetch(&cli.query).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&jobs)?);
        return Ok(());
    }

    if jobs.is_empty() {
        println!("Inga jobb hittades för {}.", cli.query);
        return Ok(());
    }

    for job in &jobs {
        print_card(job);
    }
    println!("📊 {} jobb", jobs.len());

    Ok(())
}

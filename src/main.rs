//! r2c - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use r2c::changelog::parse_changelog;
use r2c::fetch::{build_client, fetch_text};
use r2c::output::{dump_release, write_releases};
use r2c::release::ReleaseStore;

/// Upstream endpoints. The tool tracks the jest repository.
const TAGS_URL: &str = "https://api.github.com/repos/facebook/jest/tags";
const CHANGELOG_URL: &str =
    "https://raw.githubusercontent.com/facebook/jest/master/CHANGELOG.md";

/// Merge upstream release tags with changelog notes into a JSON document.
#[derive(Parser, Debug)]
#[command(name = "r2c")]
#[command(about = "Merge upstream release tags with changelog notes into a JSON document")]
#[command(version)]
struct Cli {
    /// Path to the merged output file
    #[arg(short = 'o', long, default_value = "r2c.json")]
    output: PathBuf,

    /// Print each release to stdout after parsing
    #[arg(long)]
    dump: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let client = build_client().context("Failed to build HTTP client")?;

    // Step 1: Fetch the tag list and load it into the store
    let tags = fetch_text(&client, TAGS_URL)
        .await
        .context("Failed to fetch release tags")?;

    let mut store =
        ReleaseStore::from_tag_json(&tags).context("Failed to deserialize release tags")?;

    println!("Found {} release tags", store.len());

    // Step 2: Fetch the changelog
    let changelog = fetch_text(&client, CHANGELOG_URL)
        .await
        .context("Failed to fetch changelog")?;

    // Step 3: Attach changelog notes to matching releases
    parse_changelog(&changelog, &mut store);

    let annotated = store.iter().filter(|r| r.release_notes.is_some()).count();
    println!(
        "Matched changelog notes for {} of {} releases",
        annotated,
        store.len()
    );

    if cli.dump {
        for release in store.iter() {
            dump_release(release);
        }
    }

    // Step 4: Write the merged document
    write_releases(&cli.output, &store).context("Failed to write output file")?;

    println!("✓ Wrote {}", cli.output.display());

    Ok(())
}

use std::path::PathBuf;
use std::time::Instant;

use census_gatherer::loader::{FixtureLoader, HttpImageProbe, ImageProbe, LodestoneLoader, OfflineProbe, PageLoader};
use census_gatherer::settings::Settings;
use census_gatherer::{CharacterRecord, RecordBuilder};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "census", about = "Lodestone character census gatherer")]
struct Cli {
    /// Indent the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a character from the live Lodestone and print its record
    Gather {
        /// Lodestone character ID
        id: u64,
    },
    /// Build a record from a saved Character-<id>.html page
    Parse {
        /// Lodestone character ID
        id: u64,
        /// Directory holding saved pages
        #[arg(short, long, default_value = "tests/fixtures")]
        dir: PathBuf,
        /// Skip the portrait probe and use the fallback date
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;

    let record = match cli.command {
        Commands::Gather { id } => {
            let loader = LodestoneLoader::new(&settings)?;
            let probe = HttpImageProbe::new(&settings)?;
            build(loader, probe, id).await?
        }
        Commands::Parse { id, dir, offline } => {
            let loader = FixtureLoader::new(dir);
            if offline {
                build(loader, OfflineProbe, id).await?
            } else {
                build(loader, HttpImageProbe::new(&settings)?, id).await?
            }
        }
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{}", json);

    info!(
        "Character {} ({:?}) built in {:.2}s",
        record.id,
        record.status,
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}

async fn build<L: PageLoader, P: ImageProbe>(
    loader: L,
    probe: P,
    id: u64,
) -> anyhow::Result<CharacterRecord> {
    let builder = RecordBuilder::new(loader, probe);
    Ok(builder.build(id).await?)
}

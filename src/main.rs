use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use twa_features::models::TwaManifest;
use twa_features::render::{self, Section};
use twa_features::FeatureManager;

const DEFAULT_MANIFEST: &str = "twa-manifest.json";

#[derive(Parser)]
#[command(name = "twafeat")]
#[command(about = "Merge optional feature contributions for a Trusted Web Activity project")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged contribution groups as JSON
    Merge {
        /// Path to twa-manifest.json
        #[arg(default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
    /// Print the project file fragments produced by the enabled features
    Render {
        /// Path to twa-manifest.json
        #[arg(default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,

        /// Only render one section: build, manifest, application or launcher
        #[arg(short, long, value_parser = parse_section)]
        section: Option<Section>,
    },
}

fn parse_section(s: &str) -> Result<Section, String> {
    Section::from_str(s).ok_or_else(|| {
        format!("unknown section '{s}', expected build, manifest, application or launcher")
    })
}

/// Initialize tracing on stderr so stdout only carries command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "twa_features=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_manager(path: &Path) -> anyhow::Result<FeatureManager> {
    let manifest = TwaManifest::load(path)
        .with_context(|| format!("Failed to load manifest {}", path.display()))?;
    let manager = FeatureManager::new(&manifest);
    tracing::info!(
        "Merged features from {} ({} dependencies, {} permissions)",
        path.display(),
        manager.build.dependencies.len(),
        manager.android_manifest.permissions.len()
    );
    Ok(manager)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Merge { manifest } => {
            let manager = load_manager(&manifest)?;
            let json =
                serde_json::to_string_pretty(&manager).context("Failed to serialize features")?;
            println!("{}", json);
        }
        Commands::Render { manifest, section } => {
            let manager = load_manager(&manifest)?;
            let output = match section {
                Some(section) => render::render_section(&manager, section),
                None => render::render_all(&manager),
            };
            print!("{}", output);
        }
    }

    Ok(())
}

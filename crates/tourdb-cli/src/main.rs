use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tourdb_core::{BudgetTier, Criteria, DurationTier, LeadForm, SortKey};
use tourdb_sheets::SheetsClient;

mod catalog;
mod enquiry;
mod show;

#[derive(Debug, Parser)]
#[command(name = "tourdb-cli")]
#[command(about = "tourdb command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List tour packages, optionally filtered and sorted
    Packages {
        /// Only packages for this destination slug
        #[arg(long)]
        destination: Option<String>,
        /// Budget tier: all, budget, mid, or luxury
        #[arg(long, default_value = "all")]
        budget: BudgetTier,
        /// Duration tier: all, short, medium, or long
        #[arg(long, default_value = "all")]
        duration: DurationTier,
        /// Sort key: none, price-asc, price-desc, duration-asc, or rating-desc
        #[arg(long = "sort", default_value = "none")]
        sort_by: SortKey,
    },
    /// Show one package with its itinerary, inclusions, exclusions, and policies
    Show {
        /// Package id as assigned by the sheet store
        id: String,
    },
    /// List destinations
    Destinations,
    /// Submit an enquiry to the leads sheet
    Lead {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        /// Package the enquiry is about; omit for a general enquiry
        #[arg(long, default_value = "")]
        package: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = tourdb_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();
    tracing::debug!(?config, "configuration loaded");

    let client = SheetsClient::new(&config)?;

    match cli.command {
        Commands::Packages {
            destination,
            budget,
            duration,
            sort_by,
        } => {
            let criteria = Criteria {
                budget,
                duration,
                sort_by,
            };
            catalog::run_packages(&client, destination.as_deref(), &criteria).await
        }
        Commands::Show { id } => show::run_show(&client, &id).await,
        Commands::Destinations => catalog::run_destinations(&client).await,
        Commands::Lead {
            name,
            email,
            phone,
            package,
            message,
        } => {
            let form = LeadForm {
                package_id: package,
                name,
                email,
                phone,
                message,
            };
            enquiry::run_lead(&client, &form).await
        }
    }
}

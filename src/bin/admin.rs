//! CLI administration tool for camp-signups.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply bundled migrations without starting the server
//! cargo run --bin admin -- db migrate
//!
//! # Row counts
//! cargo run --bin admin -- stats
//!
//! # Insert sample activities, campers and signups
//! cargo run --bin admin -- seed --yes
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use camp_signups::application::services::{ActivityService, CamperService, SignupService};
use camp_signups::config::load_from_env;
use camp_signups::domain::entities::{NewActivity, NewCamper, NewSignup};
use camp_signups::domain::repositories::{ActivityRepository, CamperRepository, SignupRepository};
use camp_signups::infrastructure::persistence::{
    PgActivityRepository, PgCamperRepository, PgSignupRepository,
};
use camp_signups::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing camp-signups.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show row counts
    Stats,

    /// Insert sample data
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply bundled migrations
    Migrate,
}

const SAMPLE_ACTIVITIES: &[(&str, i32)] = &[
    ("Archery", 2),
    ("Canoeing", 3),
    ("Rock climbing", 5),
    ("Arts and crafts", 1),
];

const SAMPLE_CAMPERS: &[(&str, i32)] = &[
    ("Alex", 12),
    ("Jordan", 9),
    ("Sam", 15),
    ("Riley", 17),
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Seed { yes } => handle_seed(&pool, yes).await?,
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database query failed")?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to apply migrations")?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Displays row counts for every table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let campers = PgCamperRepository::new(pool.clone()).count().await?;
    let activities = PgActivityRepository::new(pool.clone()).count().await?;
    let signups = PgSignupRepository::new(pool).count().await?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!("  {:<12} {}", "Campers:", campers.to_string().cyan());
    println!("  {:<12} {}", "Activities:", activities.to_string().cyan());
    println!("  {:<12} {}", "Signups:", signups.to_string().cyan());
    println!();

    Ok(())
}

/// Inserts sample data through the services, so the usual rules apply.
///
/// Every sample camper is signed up for every sample activity, one hour
/// apart starting at 9.
async fn handle_seed(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "Seed sample data".bright_blue().bold());
    println!(
        "  {} activities, {} campers",
        SAMPLE_ACTIVITIES.len(),
        SAMPLE_CAMPERS.len()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert sample data?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let pool = Arc::new(pool.clone());
    let camper_repo: Arc<dyn CamperRepository> = Arc::new(PgCamperRepository::new(pool.clone()));
    let activity_repo: Arc<dyn ActivityRepository> =
        Arc::new(PgActivityRepository::new(pool.clone()));
    let signup_repo: Arc<dyn SignupRepository> = Arc::new(PgSignupRepository::new(pool));

    let activity_service = ActivityService::new(activity_repo);
    let camper_service = CamperService::new(camper_repo, signup_repo.clone());
    let signup_service = SignupService::new(signup_repo);

    let mut activities = Vec::with_capacity(SAMPLE_ACTIVITIES.len());
    for (name, difficulty) in SAMPLE_ACTIVITIES {
        let activity = activity_service
            .create_activity(NewActivity {
                name: name.to_string(),
                difficulty: *difficulty,
            })
            .await
            .with_context(|| format!("Failed to create activity '{name}'"))?;
        println!("  {} activity {}", "+".green(), activity.name.cyan());
        activities.push(activity);
    }

    let mut signups = 0;
    for (name, age) in SAMPLE_CAMPERS {
        let camper = camper_service
            .create_camper(NewCamper {
                name: name.to_string(),
                age: *age,
            })
            .await
            .with_context(|| format!("Failed to create camper '{name}'"))?;
        println!("  {} camper {}", "+".green(), camper.name.cyan());

        for (hour, activity) in (9..).zip(&activities) {
            signup_service
                .create_signup(NewSignup {
                    camper_id: camper.id,
                    activity_id: activity.id,
                    time: hour,
                })
                .await
                .context("Failed to create signup")?;
            signups += 1;
        }
    }

    println!();
    println!(
        "{} {} signups created",
        "Done:".green().bold(),
        signups.to_string().bright_white()
    );

    Ok(())
}

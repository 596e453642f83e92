//! Command-line front end for the flight API.
//!
//! Drives [`FlightClient`] the way an interactive UI would: list and filter,
//! open a flight (or a `new` draft), save edits, delete.
//!
//! # Usage
//!
//! ```bash
//! # List flights leaving Graz
//! cargo run --bin flights -- list --from graz
//!
//! # Show a single flight
//! cargo run --bin flights -- show 3
//!
//! # Create a flight (prompts for missing fields)
//! cargo run --bin flights -- create --from Vienna --to London --date 2025-04-01T08:00:00Z
//!
//! # Change the destination of flight 3
//! cargo run --bin flights -- edit 3 --to Paris
//!
//! # Delete a flight without confirmation
//! cargo run --bin flights -- delete 3 --yes
//! ```
//!
//! # Environment Variables
//!
//! - `FLIGHTS_API_URL`: API base URL (default: `http://localhost:3000`)

use flight_service::api::dto::flight::FlightPayload;
use flight_service::client::{Feedback, FlightApiClient, FlightClient, NEW_FLIGHT_ID};
use flight_service::domain::entities::FlightDate;
use flight_service::domain::flight_query::FlightFilter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing flights.
#[derive(Parser)]
#[command(name = "flights")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the flight API
    #[arg(long, env = "FLIGHTS_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List flights, optionally filtered
    List {
        /// Departure airport or city
        #[arg(short, long)]
        from: Option<String>,

        /// Arrival airport or city
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Show a single flight (`new` shows an empty draft)
    Show { id: String },

    /// Create a new flight
    Create {
        #[arg(short, long)]
        from: Option<String>,

        #[arg(short, long)]
        to: Option<String>,

        /// Departure time, ISO-8601 (e.g. 2025-04-01T08:00:00Z or 2025-04-01T08:00:00)
        #[arg(short, long)]
        date: Option<FlightDate>,
    },

    /// Edit an existing flight; omitted fields keep their value
    Edit {
        id: i64,

        #[arg(short, long)]
        from: Option<String>,

        #[arg(short, long)]
        to: Option<String>,

        #[arg(short, long)]
        date: Option<FlightDate>,
    },

    /// Delete a flight
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let api = FlightApiClient::new(&cli.api_url).context("Failed to build HTTP client")?;
    let mut client = FlightClient::new(api);

    match cli.command {
        Commands::List { from, to } => list_flights(&mut client, FlightFilter::new(from, to)).await,
        Commands::Show { id } => show_flight(&mut client, &id).await,
        Commands::Create { from, to, date } => {
            create_flight(&mut client, from, to, date).await
        }
        Commands::Edit { id, from, to, date } => {
            edit_flight(&mut client, id, from, to, date).await
        }
        Commands::Delete { id, yes } => delete_flight(&mut client, id, yes).await,
    }
}

/// Lists flights as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Flights
///
///   ID   From                 To                   Date
///   ──────────────────────────────────────────────────────────────────
///   1    Graz                 Hamburg              2025-03-01T07:45:00Z
/// ```
async fn list_flights(client: &mut FlightClient, filter: FlightFilter) -> Result<()> {
    println!("{}", "📋 Flights".bright_blue().bold());
    println!();

    if !client.load_list(&filter).await {
        print_feedback(client.feedback());
        anyhow::bail!("Could not load flights from {}", client.api().url());
    }

    let flights = client.flights();
    if flights.is_empty() {
        println!("{}", "  No flights found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<20} {}",
        "ID".bright_white().bold(),
        "From".bright_white().bold(),
        "To".bright_white().bold(),
        "Date".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for flight in flights {
        println!(
            "  {:<4} {:<20} {:<20} {}",
            format_id(flight).bright_black(),
            flight.from.cyan(),
            flight.to.cyan(),
            flight.date.as_str().bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        flights.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_flight(client: &mut FlightClient, id: &str) -> Result<()> {
    match client.fetch_by_id(id).await {
        Ok(flight) => {
            print_flight(&flight);
            Ok(())
        }
        Err(e) => {
            print_feedback(client.feedback());
            Err(e).with_context(|| format!("Could not load flight '{id}'"))
        }
    }
}

/// Creates a flight, prompting for any field not given on the command line.
async fn create_flight(
    client: &mut FlightClient,
    from: Option<String>,
    to: Option<String>,
    date: Option<FlightDate>,
) -> Result<()> {
    println!("{}", "✈️  Create Flight".bright_blue().bold());
    println!();

    let mut draft = client.fetch_by_id(NEW_FLIGHT_ID).await?;

    draft.from = match from {
        Some(f) => f,
        None => Input::new().with_prompt("From").interact_text()?,
    };
    draft.to = match to {
        Some(t) => t,
        None => Input::new().with_prompt("To").interact_text()?,
    };
    draft.date = match date {
        Some(d) => d,
        None => Input::<FlightDate>::new()
            .with_prompt("Date (ISO-8601)")
            .interact_text()?,
    };

    save_flight(client, draft).await
}

async fn edit_flight(
    client: &mut FlightClient,
    id: i64,
    from: Option<String>,
    to: Option<String>,
    date: Option<FlightDate>,
) -> Result<()> {
    let mut flight = match client.fetch_by_id(&id.to_string()).await {
        Ok(flight) => flight,
        Err(e) => {
            print_feedback(client.feedback());
            return Err(e).with_context(|| format!("Could not load flight {id}"));
        }
    };

    if let Some(f) = from {
        flight.from = f;
    }
    if let Some(t) = to {
        flight.to = t;
    }
    if let Some(d) = date {
        flight.date = d;
    }

    save_flight(client, flight).await
}

async fn save_flight(client: &mut FlightClient, flight: FlightPayload) -> Result<()> {
    let succeeded = client.save(flight).await.is_success();
    print_feedback(client.feedback());

    if !succeeded {
        anyhow::bail!("Flight was not saved");
    }

    if let Some(saved) = client.flight() {
        print_flight(saved);
    }
    Ok(())
}

/// Deletes a flight after showing it and asking for confirmation.
async fn delete_flight(client: &mut FlightClient, id: i64, skip_confirm: bool) -> Result<()> {
    let flight = match client.fetch_by_id(&id.to_string()).await {
        Ok(flight) => flight,
        Err(e) if e.is_not_found() => {
            println!("{}", format!("Flight {id} does not exist, nothing to delete").yellow());
            return Ok(());
        }
        Err(e) => return Err(e).context("Could not load flight"),
    };

    print_flight(&flight);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this flight?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let result = client.remove(&flight).await;
    print_feedback(client.feedback());
    result.context("Could not delete flight")?;

    Ok(())
}

fn format_id(flight: &FlightPayload) -> String {
    flight
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string())
}

fn print_flight(flight: &FlightPayload) {
    println!("{}", "Flight details:".bright_white().bold());
    println!("  ID:   {}", format_id(flight).bright_black());
    println!("  From: {}", flight.from.cyan());
    println!("  To:   {}", flight.to.cyan());
    println!("  Date: {}", flight.date.as_str().bright_yellow());
    println!();
}

fn print_feedback(feedback: Option<&Feedback>) {
    let Some(feedback) = feedback else {
        return;
    };

    if feedback.is_success() {
        println!("{}", format!("✅ {}", feedback.message).green().bold());
    } else {
        println!("{}", format!("⚠️  {}", feedback.message).yellow().bold());
    }
}

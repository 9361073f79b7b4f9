use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use travelcraft::{Interest, TravelStyle, TripForm};

/// Create your perfect trip in seconds with AI
#[derive(Debug, Parser)]
#[command(name = "travelcraft", version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Errors only, no loading animation
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Request an itinerary from the planner webhook
    Plan(PlanArgs),
    /// Render a saved webhook response
    Render(RenderArgs),
    /// Fill in the trip form interactively
    Interactive,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Where do you want to go? e.g. "Paris, France"
    #[arg(long)]
    pub destination: String,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,

    /// What are you interested in? Repeat for several
    #[arg(long = "interest", value_enum, required = true)]
    pub interests: Vec<Interest>,

    #[arg(long, value_enum, default_value_t = TravelStyle::Moderate)]
    pub style: TravelStyle,

    /// Print the normalized view model as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn to_form(&self) -> TripForm {
        TripForm {
            destination: self.destination.clone(),
            start_date: Some(self.start),
            end_date: Some(self.end),
            interests: self.interests.clone(),
            travel_style: self.style,
        }
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON file holding a webhook response
    pub file: PathBuf,

    /// Print the normalized view model as JSON
    #[arg(long)]
    pub json: bool,
}

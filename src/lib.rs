//! `TravelCraft` - AI travel itinerary planning client
//!
//! Posts a trip request to the itinerary webhook and turns whatever JSON
//! comes back into a fully defaulted view model ready for display.

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod normalize;
pub mod progress;
pub mod render;
pub mod session;
pub mod telemetry;
pub mod temperature;

// Re-export core types for public API
pub use client::{ItineraryResponse, ItineraryTransport, WebhookClient};
pub use config::TravelCraftConfig;
pub use error::{RequestError, TravelCraftError};
pub use guard::{InFlightGuard, InFlightPermit};
pub use models::{Interest, TravelStyle, TripForm, TripRequest, ViewModel};
pub use normalize::normalize;
pub use progress::{ProgressDisplay, ProgressPresenter};
pub use session::{PlannerSession, SubmitOutcome};
pub use temperature::display_temperature;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelCraftError>;

//! Trip request model: the form a traveller fills in and the payload sent to the webhook

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TravelCraftError;

/// Interest tags offered on the trip form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Culture,
    Food,
    Adventure,
    Beach,
    Shopping,
    Nightlife,
    Nature,
    Art,
}

impl Interest {
    pub const ALL: [Interest; 8] = [
        Interest::Culture,
        Interest::Food,
        Interest::Adventure,
        Interest::Beach,
        Interest::Shopping,
        Interest::Nightlife,
        Interest::Nature,
        Interest::Art,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Interest::Culture => "Culture & History",
            Interest::Food => "Food & Dining",
            Interest::Adventure => "Adventure",
            Interest::Beach => "Beach & Relaxation",
            Interest::Shopping => "Shopping",
            Interest::Nightlife => "Nightlife",
            Interest::Nature => "Nature",
            Interest::Art => "Art & Museums",
        }
    }

    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            Interest::Culture => "🏛️",
            Interest::Food => "🍜",
            Interest::Adventure => "🏔️",
            Interest::Beach => "🏖️",
            Interest::Shopping => "🛍️",
            Interest::Nightlife => "🎉",
            Interest::Nature => "🌿",
            Interest::Art => "🎨",
        }
    }

    /// Wire name as sent to the webhook
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Culture => "culture",
            Interest::Food => "food",
            Interest::Adventure => "adventure",
            Interest::Beach => "beach",
            Interest::Shopping => "shopping",
            Interest::Nightlife => "nightlife",
            Interest::Nature => "nature",
            Interest::Art => "art",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Budget style of the trip
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Budget,
    #[default]
    Moderate,
    Luxury,
}

impl TravelStyle {
    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            TravelStyle::Budget => "💰",
            TravelStyle::Moderate => "✨",
            TravelStyle::Luxury => "👑",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelStyle::Budget => write!(f, "Budget"),
            TravelStyle::Moderate => write!(f, "Moderate"),
            TravelStyle::Luxury => write!(f, "Luxury"),
        }
    }
}

/// Unvalidated trip form contents
#[derive(Debug, Clone, Default)]
pub struct TripForm {
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub interests: Vec<Interest>,
    pub travel_style: TravelStyle,
}

impl TripForm {
    /// Add the interest if absent, remove it if present
    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest);
        }
    }

    /// Validate the form and stamp it into an immutable request
    pub fn submit(self) -> crate::Result<TripRequest> {
        self.submit_at(Utc::now())
    }

    pub(crate) fn submit_at(self, issued_at: DateTime<Utc>) -> crate::Result<TripRequest> {
        let destination = self.destination.trim().to_string();
        if destination.is_empty() {
            return Err(TravelCraftError::validation("Destination cannot be empty"));
        }

        let start_date = self
            .start_date
            .ok_or_else(|| TravelCraftError::validation("Start date is required"))?;
        let end_date = self
            .end_date
            .ok_or_else(|| TravelCraftError::validation("End date is required"))?;
        if start_date > end_date {
            return Err(TravelCraftError::validation(format!(
                "Start date {start_date} is after end date {end_date}"
            )));
        }

        let mut interests: Vec<Interest> = Vec::with_capacity(self.interests.len());
        for interest in self.interests {
            if !interests.contains(&interest) {
                interests.push(interest);
            }
        }
        if interests.is_empty() {
            return Err(TravelCraftError::validation(
                "Select at least one interest",
            ));
        }

        Ok(TripRequest {
            destination,
            start_date,
            end_date,
            interests,
            travel_style: self.travel_style,
            user_id: format!("web-user-{}", issued_at.timestamp_millis()),
            issued_at,
        })
    }
}

/// Validated request body posted to the itinerary webhook
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    destination: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    interests: Vec<Interest>,
    travel_style: TravelStyle,
    user_id: String,
    #[serde(skip)]
    issued_at: DateTime<Utc>,
}

impl TripRequest {
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    #[must_use]
    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    #[must_use]
    pub fn travel_style(&self) -> TravelStyle {
        self.travel_style
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Number of calendar days covered, both ends included
    #[must_use]
    pub fn trip_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

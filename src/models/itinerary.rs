//! Itinerary view model
//!
//! Owned, fully defaulted representation of a webhook response. Built by
//! [`crate::normalize`]; every optional field of the raw payload has already
//! been resolved, so renderers only check whether lists have items.

use serde::Serialize;

/// Result of normalizing one webhook response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewModel {
    /// Transport failure, `success: false`, or no response at all
    Failure(FailureView),
    /// Successful itinerary
    Itinerary(ItineraryView),
}

impl ViewModel {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, ViewModel::Failure(_))
    }

    #[must_use]
    pub fn itinerary(&self) -> Option<&ItineraryView> {
        match self {
            ViewModel::Itinerary(view) => Some(view),
            ViewModel::Failure(_) => None,
        }
    }
}

/// Error view with a reset action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureView {
    /// Message shown to the user
    pub message: String,
    /// `error` field of the response, kept for logs only
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryView {
    pub destination: String,
    pub overview: String,
    /// Trip length in days
    pub duration: u64,
    pub best_time_to_visit: String,
    pub packing_list: Vec<String>,
    pub local_tips: Vec<String>,
    /// Money-matters panel, never empty
    pub money_tips: Vec<String>,
    /// Present only when the response carried non-empty rates
    pub currency: Option<CurrencyView>,
    pub days: Vec<DayView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurrencyView {
    /// Complete `base`/`code`/`rate` triple
    Rate {
        base: String,
        code: String,
        rate: String,
    },
    /// Rates present but not in the expected shape
    Available,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    /// Day number as sent by the webhook
    pub day: Option<String>,
    pub theme: Option<String>,
    pub date: Option<String>,
    /// Absent when no weather record or no temperature was found for the day
    pub weather: Option<WeatherView>,
    pub morning: Option<ActivityView>,
    pub afternoon: Option<ActivityView>,
    pub evening: Option<ActivityView>,
}

impl DayView {
    /// Activities in time-of-day order, skipping empty slots
    pub fn activities(&self) -> impl Iterator<Item = &ActivityView> {
        [&self.morning, &self.afternoon, &self.evening]
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub icon: WeatherIcon,
    /// Rendered temperature, e.g. "68°F" or "Typical: 20°C"
    pub reading: String,
    /// Typical range or generic historical label; only for historical records
    pub historical_note: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    Rain,
}

impl WeatherIcon {
    /// Icon for a weather description, sun when unknown
    #[must_use]
    pub fn from_description(description: Option<&str>) -> Self {
        match description.map(str::to_lowercase).as_deref() {
            Some("few clouds" | "scattered clouds" | "broken clouds") => WeatherIcon::Cloud,
            Some("rain") => WeatherIcon::Rain,
            _ => WeatherIcon::Sun,
        }
    }

    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "☀️",
            WeatherIcon::Cloud => "☁️",
            WeatherIcon::Rain => "🌧️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// JSON key of the slot in a day record
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }

    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "🌅",
            TimeOfDay::Afternoon => "☀️",
            TimeOfDay::Evening => "🌙",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    pub time_of_day: TimeOfDay,
    pub activity: Option<String>,
    pub location: Option<String>,
    pub map_url: Option<String>,
    pub duration: Option<String>,
    pub tip: Option<String>,
}

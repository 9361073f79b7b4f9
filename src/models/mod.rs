//! Data models for the TravelCraft client
//!
//! - Trip: the form and the request sent to the webhook
//! - Itinerary: the defaulted view model built from the response

pub mod itinerary;
pub mod trip;

pub use itinerary::{
    ActivityView, CurrencyView, DayView, FailureView, ItineraryView, TimeOfDay, ViewModel,
    WeatherIcon, WeatherView,
};
pub use trip::{Interest, TravelStyle, TripForm, TripRequest};

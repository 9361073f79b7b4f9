//! Response normalization
//!
//! Turns whatever JSON the itinerary webhook returned into a [`ViewModel`].
//! Absence is in-bounds input: every field read is defensive and nothing in
//! here returns an error or panics. Truthiness follows the webhook's JSON
//! conventions (`null`, `false`, `0`, `""` count as absent).

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::models::{
    ActivityView, CurrencyView, DayView, FailureView, ItineraryView, TimeOfDay, ViewModel,
    WeatherIcon, WeatherView,
};
use crate::temperature::display_day_temperature;

pub const DEFAULT_DESTINATION: &str = "Your Destination";
pub const DEFAULT_OVERVIEW: &str = "Plan your perfect trip";
pub const DEFAULT_BEST_TIME: &str = "Check weather before traveling";
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

/// Keywords selecting tips for the money-matters panel
pub const MONEY_KEYWORDS: [&str; 6] = ["tip", "cash", "card", "money", "currency", "atm"];
pub const MAX_MONEY_TIPS: usize = 3;

/// Shown in the money-matters panel when no local tip is about money
pub const GENERIC_MONEY_TIPS: [&str; 3] = [
    "Carry some local cash for markets, taxis and small vendors",
    "Let your bank know your travel dates so your card is not blocked",
    "Use ATMs inside banks for better security and exchange rates",
];

/// Build the view model for a response, or for no response at all
#[must_use]
pub fn normalize(raw: Option<&Value>) -> ViewModel {
    let Some(raw) = raw else {
        return failure(None);
    };

    if !raw.get("success").is_some_and(is_truthy) {
        let detail = raw.get("error").and_then(text);
        debug!(?detail, "Webhook reported an unsuccessful result");
        return failure(detail);
    }

    ViewModel::Itinerary(itinerary_view(raw))
}

fn failure(detail: Option<String>) -> ViewModel {
    ViewModel::Failure(FailureView {
        message: FAILURE_MESSAGE.to_string(),
        detail,
    })
}

fn itinerary_view(raw: &Value) -> ItineraryView {
    let destination = raw
        .get("destination")
        .and_then(text)
        .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());
    let overview = raw
        .get("overview")
        .and_then(text)
        .unwrap_or_else(|| DEFAULT_OVERVIEW.to_string());
    let best_time_to_visit = raw
        .get("bestTimeToVisit")
        .and_then(text)
        .unwrap_or_else(|| DEFAULT_BEST_TIME.to_string());

    let raw_days = raw.get("itinerary").and_then(Value::as_array);
    let duration = resolve_duration(raw.get("dates"), raw_days);

    let packing_list = string_list(raw.get("packingList"));
    let local_tips = string_list(raw.get("localTips"));
    let money_tips = money_tips(&local_tips);
    let currency = raw.get("currencyRates").and_then(currency_view);

    let weather_by_day = raw.get("weather").and_then(Value::as_object);
    let days = raw_days
        .map(|days| {
            days.iter()
                .filter_map(Value::as_object)
                .map(|day| day_view(day, weather_by_day, &destination))
                .collect()
        })
        .unwrap_or_default();

    ItineraryView {
        destination,
        overview,
        duration,
        best_time_to_visit,
        packing_list,
        local_tips,
        money_tips,
        currency,
        days,
    }
}

/// `dates.duration` rounded half up when at least 1, else the number of
/// itinerary entries, else 0
fn resolve_duration(dates: Option<&Value>, days: Option<&Vec<Value>>) -> u64 {
    let declared = dates
        .and_then(|dates| dates.get("duration"))
        .and_then(positive_number);

    declared.unwrap_or_else(|| days.map_or(0, |days| days.len() as u64))
}

fn positive_number(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (number.is_finite() && number >= 1.0).then(|| number.round() as u64)
}

/// Tips about money, capped; generic advice when none match
#[must_use]
pub fn money_tips(local_tips: &[String]) -> Vec<String> {
    let matching: Vec<String> = local_tips
        .iter()
        .filter(|tip| {
            let lowered = tip.to_lowercase();
            MONEY_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
        })
        .take(MAX_MONEY_TIPS)
        .cloned()
        .collect();

    if matching.is_empty() {
        GENERIC_MONEY_TIPS.iter().map(|tip| (*tip).to_string()).collect()
    } else {
        matching
    }
}

fn currency_view(rates: &Value) -> Option<CurrencyView> {
    let rates = rates.as_object().filter(|rates| !rates.is_empty())?;

    let base = rates.get("base").and_then(text);
    let code = rates.get("code").and_then(text);
    let rate = rates.get("rate").and_then(text);

    Some(match (base, code, rate) {
        (Some(base), Some(code), Some(rate)) => CurrencyView::Rate { base, code, rate },
        _ => CurrencyView::Available,
    })
}

fn day_view(
    day: &Map<String, Value>,
    weather_by_day: Option<&Map<String, Value>>,
    destination: &str,
) -> DayView {
    let day_key = day.get("day").and_then(text);

    let weather = match day.get("weather") {
        Some(weather) if is_truthy(weather) => weather.as_object(),
        _ => day_key
            .as_deref()
            .and_then(|key| weather_by_day?.get(key))
            .and_then(Value::as_object),
    }
    .and_then(|weather| weather_view(weather, destination));

    DayView {
        theme: day.get("theme").and_then(text),
        date: day.get("date").and_then(text),
        weather,
        morning: activity_view(day, TimeOfDay::Morning),
        afternoon: activity_view(day, TimeOfDay::Afternoon),
        evening: activity_view(day, TimeOfDay::Evening),
        day: day_key,
    }
}

/// `None` unless the record carries a usable temperature
fn weather_view(weather: &Map<String, Value>, destination: &str) -> Option<WeatherView> {
    let celsius = match weather.get("temp")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|celsius| celsius.is_finite())?;

    let description = weather.get("description").and_then(text);
    let historical = weather.get("isHistorical").is_some_and(is_truthy);
    let typical_range = weather.get("tempRange").and_then(text);

    let (reading, historical_note) =
        display_day_temperature(celsius, destination, historical, typical_range.as_deref());

    Some(WeatherView {
        icon: WeatherIcon::from_description(description.as_deref()),
        reading,
        historical_note,
        description,
    })
}

fn activity_view(day: &Map<String, Value>, slot: TimeOfDay) -> Option<ActivityView> {
    let value = day.get(slot.key()).filter(|value| is_truthy(value))?;

    match value {
        Value::Object(activity) => Some(ActivityView {
            time_of_day: slot,
            activity: activity.get("activity").and_then(text),
            location: activity.get("location").and_then(text),
            map_url: activity.get("mapUrl").and_then(text),
            duration: activity.get("duration").and_then(text),
            tip: activity.get("tips").and_then(text),
        }),
        other => Some(ActivityView {
            time_of_day: slot,
            activity: text(other),
            location: None,
            map_url: None,
            duration: None,
            tip: None,
        }),
    }
}

/// Array of strings, skipping anything that is not text
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Displayable text of a scalar; empty strings count as absent
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

/// Whole floats print without a fraction, so `1.0` keys the same as `1`
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

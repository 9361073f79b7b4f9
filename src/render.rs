//! Terminal rendering of itinerary view models

use std::fmt::{self, Display, Formatter};

use crate::models::{
    ActivityView, CurrencyView, DayView, FailureView, ItineraryView, ViewModel, WeatherView,
};

/// Packing items shown in the summary panel
pub const PACKING_PREVIEW: usize = 3;
pub const RETRY_ACTION: &str = "Try Again";
pub const RESET_ACTION: &str = "Plan Another Trip ✈️";
pub const CURRENCY_FALLBACK: &str = "Exchange rates available";

impl Display for ViewModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ViewModel::Failure(failure) => failure.fmt(f),
            ViewModel::Itinerary(itinerary) => itinerary.fmt(f),
        }
    }
}

impl Display for FailureView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "❌ {}", self.message)?;
        writeln!(f, "   [{RETRY_ACTION}]")
    }
}

impl Display for ItineraryView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.destination)?;
        writeln!(f, "{}", self.overview)?;
        writeln!(f, "📅 {} days", self.duration)?;
        writeln!(f)?;

        writeln!(f, "☀️ Weather")?;
        writeln!(f, "   {}", self.best_time_to_visit)?;

        if !self.packing_list.is_empty() {
            writeln!(f, "🧳 Pack These")?;
            for item in self.packing_list.iter().take(PACKING_PREVIEW) {
                writeln!(f, "   • {item}")?;
            }
        }

        writeln!(f, "💵 Money Matters")?;
        if let Some(currency) = &self.currency {
            writeln!(f, "   {currency}")?;
        }
        for tip in &self.money_tips {
            writeln!(f, "   • {tip}")?;
        }
        writeln!(f)?;

        writeln!(f, "✨ Your Day-by-Day Adventure")?;
        for day in &self.days {
            writeln!(f)?;
            day.fmt(f)?;
        }

        if !self.local_tips.is_empty() {
            writeln!(f)?;
            writeln!(f, "✨ Local Tips")?;
            for tip in &self.local_tips {
                writeln!(f, "   💡 {tip}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "[{RESET_ACTION}]")
    }
}

impl Display for CurrencyView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyView::Rate { base, code, rate } => write!(f, "1 {base} = {rate} {code}"),
            CurrencyView::Available => write!(f, "{CURRENCY_FALLBACK}"),
        }
    }
}

impl Display for DayView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.day.as_deref().unwrap_or_default())?;
        if let Some(theme) = &self.theme {
            write!(f, ": {theme}")?;
        }
        if let Some(weather) = &self.weather {
            write!(f, "   {weather}")?;
        }
        writeln!(f)?;

        if let Some(date) = &self.date {
            writeln!(f, "   {date}")?;
        }
        if let Some(note) = self.weather.as_ref().and_then(|w| w.historical_note.as_ref()) {
            writeln!(f, "   {note}")?;
        }

        for activity in self.activities() {
            activity.fmt(f)?;
        }
        Ok(())
    }
}

impl Display for WeatherView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon.emoji(), self.reading)
    }
}

impl Display for ActivityView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "   {} {}: {}",
            self.time_of_day.emoji(),
            self.time_of_day.label(),
            self.activity.as_deref().unwrap_or_default()
        )?;

        let location = self.location.as_deref().unwrap_or_default();
        match &self.map_url {
            Some(url) => writeln!(f, "      📍 {location} ({url})")?,
            None => writeln!(f, "      📍 {location}")?,
        }
        writeln!(f, "      ⏰ {}", self.duration.as_deref().unwrap_or_default())?;

        if let Some(tip) = &self.tip {
            writeln!(f, "      💡 Tip: {tip}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::normalize::{GENERIC_MONEY_TIPS, normalize};
    use serde_json::json;

    #[test]
    fn test_failure_rendering() {
        let rendered = normalize(None).to_string();
        assert!(rendered.contains("Oops! Something went wrong"));
        assert!(rendered.contains("Try Again"));
    }

    #[test]
    fn test_full_itinerary_rendering() {
        let raw = json!({
            "success": true,
            "destination": "Chicago, USA",
            "overview": "Deep dish and architecture",
            "dates": {"duration": 2},
            "packingList": ["Coat", "Umbrella", "Boots", "Scarf"],
            "localTips": ["Bring a jacket", "Tip 20% at restaurants"],
            "currencyRates": {"base": "EUR", "code": "USD", "rate": 1.08},
            "itinerary": [{
                "day": 1,
                "theme": "Loop",
                "weather": {"temp": 10, "description": "few clouds"},
                "morning": {
                    "activity": "Architecture cruise",
                    "location": "Chicago River",
                    "mapUrl": "https://maps.example/river",
                    "duration": "90 minutes",
                    "tips": "Sit on the upper deck"
                }
            }]
        });

        let rendered = normalize(Some(&raw)).to_string();
        assert!(rendered.contains("Chicago, USA"));
        assert!(rendered.contains("📅 2 days"));
        assert!(rendered.contains("• Boots"));
        assert!(!rendered.contains("Scarf"));
        assert!(rendered.contains("1 EUR = 1.08 USD"));
        assert!(rendered.contains("• Tip 20% at restaurants"));
        assert!(rendered.contains("Day 1: Loop   ☁️ 50°F"));
        assert!(rendered.contains("🌅 Morning: Architecture cruise"));
        assert!(rendered.contains("📍 Chicago River (https://maps.example/river)"));
        assert!(rendered.contains("💡 Tip: Sit on the upper deck"));
        assert!(rendered.contains("💡 Bring a jacket"));
        assert!(rendered.contains("Plan Another Trip"));
    }

    #[test]
    fn test_sparse_itinerary_rendering() {
        let rendered = normalize(Some(&json!({"success": true}))).to_string();
        assert!(rendered.contains("Your Destination"));
        assert!(rendered.contains("📅 0 days"));
        assert!(!rendered.contains("Pack These"));
        assert!(!rendered.contains("Local Tips"));
        for tip in GENERIC_MONEY_TIPS {
            assert!(rendered.contains(tip));
        }
    }
}

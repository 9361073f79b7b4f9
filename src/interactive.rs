//! Prompt-driven trip form: plan, show the itinerary, then offer another trip

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use travelcraft::{Interest, PlannerSession, SubmitOutcome, TravelStyle, TripForm};

type Input = Lines<BufReader<Stdin>>;

pub async fn run(session: &PlannerSession) -> Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(form) = read_form(&mut input).await? else {
            return Ok(());
        };

        let request = match form.submit() {
            Ok(request) => request,
            Err(e) => {
                println!("{}", e.user_message());
                continue;
            }
        };

        if let SubmitOutcome::Settled(view) = session.submit(request).await {
            println!("{view}");
        }

        let again = ask(&mut input, "Plan another trip? [y/N] ").await?;
        session.reset();
        if !again.as_deref().is_some_and(is_yes) {
            return Ok(());
        }
    }
}

/// `None` when stdin is closed
async fn read_form(input: &mut Input) -> Result<Option<TripForm>> {
    let Some(destination) = ask(input, "Where do you want to go? ").await? else {
        return Ok(None);
    };
    let Some(start_date) = ask_date(input, "Start date (YYYY-MM-DD): ").await? else {
        return Ok(None);
    };
    let Some(end_date) = ask_date(input, "End date (YYYY-MM-DD): ").await? else {
        return Ok(None);
    };

    println!("What are you interested in?");
    for (idx, interest) in Interest::ALL.iter().enumerate() {
        println!("  {}. {interest}", idx + 1);
    }
    let Some(interests) = ask(input, "Pick by number or name, comma separated: ").await? else {
        return Ok(None);
    };

    let Some(style) = ask(input, "Travel style [budget/moderate/luxury] (moderate): ").await?
    else {
        return Ok(None);
    };

    Ok(Some(TripForm {
        destination,
        start_date: Some(start_date),
        end_date: Some(end_date),
        interests: parse_interests(&interests),
        travel_style: parse_style(&style),
    }))
}

async fn ask(input: &mut Input, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let line = input.next_line().await.context("Failed to read stdin")?;
    Ok(line.map(|line| line.trim().to_string()))
}

async fn ask_date(input: &mut Input, prompt: &str) -> Result<Option<NaiveDate>> {
    loop {
        let Some(answer) = ask(input, prompt).await? else {
            return Ok(None);
        };
        match answer.parse::<NaiveDate>() {
            Ok(date) => return Ok(Some(date)),
            Err(_) => println!("'{answer}' is not a date like 2026-05-01"),
        }
    }
}

fn parse_interests(answer: &str) -> Vec<Interest> {
    let mut form = TripForm::default();
    for token in answer.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let interest = token
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Interest::ALL.get(idx).copied())
            .or_else(|| Interest::from_str(token, true).ok());
        if let Some(interest) = interest.filter(|i| !form.interests.contains(i)) {
            form.toggle_interest(interest);
        }
    }
    form.interests
}

fn parse_style(answer: &str) -> TravelStyle {
    TravelStyle::from_str(answer.trim(), true).unwrap_or_default()
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interests_by_number_and_name() {
        assert_eq!(
            parse_interests("1, Food,  8, nope"),
            vec![Interest::Culture, Interest::Food, Interest::Art]
        );
        assert!(parse_interests("").is_empty());
        assert!(parse_interests("0, 9").is_empty());
    }

    #[test]
    fn test_parse_interests_repeated_answer_keeps_interest() {
        assert_eq!(parse_interests("food, food"), vec![Interest::Food]);
        assert_eq!(parse_interests("2, Food, food"), vec![Interest::Food]);
    }

    #[test]
    fn test_parse_style_defaults_to_moderate() {
        assert_eq!(parse_style("LUXURY"), TravelStyle::Luxury);
        assert_eq!(parse_style(""), TravelStyle::Moderate);
        assert_eq!(parse_style("cheap"), TravelStyle::Moderate);
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("Y"));
        assert!(is_yes("yes"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }
}

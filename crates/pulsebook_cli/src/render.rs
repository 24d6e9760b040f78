//! Plain-text rendering for the list and dashboard views.
//!
//! Layout and styling stay out of core; this module is the only place
//! that decides how records and fetch states look on a terminal.

use pulsebook_core::{Contact, CountrySnapshot, FetchState, HistoricalSeries};

/// Renders the contact list view.
pub fn contact_list(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found. Please add a new contact.");
        return;
    }

    for contact in contacts {
        contact_card(contact);
    }
    println!("{} contact(s).", contacts.len());
}

fn contact_card(contact: &Contact) {
    println!("{}", contact.name);
    println!("  Id:      {}", contact.id);
    println!("  Email:   {}", contact.email);
    println!("  Phone:   {}", contact.phone);
    println!("  Status:  {}", contact.status.as_str());
    if let Some(address) = &contact.address {
        println!("  Address: {address}");
    }
    println!();
}

/// Renders the dashboard view from the two independent fetch states.
pub fn dashboard(
    historical: &FetchState<HistoricalSeries>,
    countries: &FetchState<Vec<CountrySnapshot>>,
) {
    println!("== Historical cases ==");
    match historical {
        FetchState::Loading => println!("Loading..."),
        FetchState::Failed(_) => println!("No data available"),
        FetchState::Ready(series) => historical_summary(series),
    }

    println!();
    println!("== Countries ==");
    match countries {
        FetchState::Loading => println!("Loading..."),
        FetchState::Failed(_) => println!("Error fetching data"),
        FetchState::Ready(snapshots) => country_table(snapshots),
    }
}

fn historical_summary(series: &HistoricalSeries) {
    if series.is_empty() {
        println!("No data available");
        return;
    }

    println!("{} days tracked", series.day_count());
    if let Some((date, value)) = series.latest_cases() {
        println!("  Cases:     {value:>13} (as of {date})");
    }
    if let Some((date, value)) = series.latest_deaths() {
        println!("  Deaths:    {value:>13} (as of {date})");
    }
    if let Some((date, value)) = series.latest_recovered() {
        println!("  Recovered: {value:>13} (as of {date})");
    }
}

fn country_table(snapshots: &[CountrySnapshot]) {
    let mut ranked: Vec<&CountrySnapshot> = snapshots.iter().collect();
    ranked.sort_by(|a, b| b.active.cmp(&a.active));

    println!(
        "{:<24} {:>12} {:>12} {:>12}",
        "Country", "Active", "Recovered", "Deaths"
    );
    for snapshot in ranked.iter().take(10) {
        println!(
            "{:<24} {:>12} {:>12} {:>12}",
            snapshot.country, snapshot.active, snapshot.recovered, snapshot.deaths
        );
    }
    println!("({} countries total)", snapshots.len());
}

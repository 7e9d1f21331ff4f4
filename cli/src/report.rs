use rewards_core::format::{format_count, format_currency, format_date_short, format_timestamp};
use rewards_core::model::top_item::ItemKind;
use rewards_core::{OverlaySnapshot, Series};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct KpiRow {
    #[tabled(rename = "KPI")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "vs Prev")]
    change: String,
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Songs")]
    songs: String,
    #[tabled(rename = "Albums")]
    albums: String,
    #[tabled(rename = "Approved")]
    approved: String,
    #[tabled(rename = "Reward")]
    reward: String,
}

#[derive(Tabled)]
struct TopRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Artist")]
    artist: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Earned")]
    amount: String,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn show_summary(snapshot: &OverlaySnapshot) {
    println!(
        "\x1b[1;36mBalance ({})\x1b[0m  {}",
        snapshot.range.label(),
        snapshot.date_range
    );
    println!("  Estimated: {}   {}", snapshot.current_estimate, snapshot.yesterday);
    println!(
        "  Qualified reviews: {}   Conversion: {}",
        snapshot.qualified, snapshot.conversion
    );
    println!("  Updated: {}\n", format_timestamp(snapshot.updated_at));

    let rows: Vec<KpiRow> = snapshot
        .kpis
        .iter()
        .map(|card| KpiRow {
            label: card.label.clone(),
            value: card.display_value.clone(),
            change: card.display_change.clone(),
        })
        .collect();
    println!("{}", styled(Table::new(rows)));

    let top: Vec<TopRow> = snapshot
        .top_earnings
        .iter()
        .map(|item| TopRow {
            title: item.title.clone(),
            artist: item.artist.clone(),
            kind: match item.kind {
                ItemKind::Song => "Song".to_string(),
                ItemKind::Album => "Album".to_string(),
            },
            amount: format_currency(item.amount),
        })
        .collect();
    println!("\n\x1b[1;36mTop earning\x1b[0m");
    println!("{}", styled(Table::new(top)));
}

pub fn show_daily(series: &Series) {
    if series.is_empty() {
        println!("No days in range.");
        return;
    }

    let rows: Vec<DayRow> = series
        .days()
        .iter()
        .map(|day| DayRow {
            date: format!("{} ({})", format_date_short(day.date), day.date.format("%a")),
            songs: format!("{} / {}", day.approved_songs, day.songs),
            albums: format!("{} / {}", day.approved_albums, day.albums),
            approved: format_count(day.approved_reviews()),
            reward: format_currency(day.reward),
        })
        .collect();

    println!("{}", styled(Table::new(rows)));
}

use crate::analysis::{AggregateBucket, RankedSummary, StatsReport};
use crate::api::ScheduleLine;
use crate::records::MatchRecord;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct BucketRow {
    #[tabled(rename = "#")]
    rank: String,
    name: String,
    win_rate: String,
    record: String,
}

#[derive(Tabled)]
struct ScheduleRow {
    time: String,
    rule: String,
    stages: String,
}

fn win_rate_cell(bucket: &AggregateBucket) -> String {
    let percent = format!("{}%", bucket.win_percent());
    if bucket.is_winning() {
        percent.magenta().bold().to_string()
    } else {
        percent.blue().to_string()
    }
}

pub fn omitted_note(omitted: usize) -> Option<String> {
    if omitted == 0 {
        None
    } else {
        Some(format!("…and {} more", omitted))
    }
}

fn display_summary(title: &str, summary: &RankedSummary) {
    println!("\n{}", title.bold().cyan());

    if summary.is_empty() {
        println!("  {}", "No data".yellow());
        return;
    }

    let rows: Vec<BucketRow> = summary
        .entries
        .iter()
        .enumerate()
        .map(|(idx, bucket)| BucketRow {
            rank: format!("{}", idx + 1),
            name: bucket.key.clone(),
            win_rate: win_rate_cell(bucket),
            record: format!("{}/{}", bucket.wins, bucket.total),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(note) = omitted_note(summary.omitted) {
        println!("  {}", note.dimmed());
    }
}

pub fn display_stats_report(report: &StatsReport) {
    println!("\n{}", "📊 WIN RATE TRACKER".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    if report.is_empty() {
        println!(
            "{}",
            "No matches recorded yet. Use `win <WEAPON>` or `lose <WEAPON>`.".yellow()
        );
        println!();
        return;
    }

    println!("{} {} matches", "📈 Recorded:".bold(), report.total_matches);

    display_summary("Main weapon", &report.by_weapon);
    display_summary("Sub weapon", &report.by_secondary);
    display_summary("Special", &report.by_special);
    println!();
}

pub fn display_recorded(record: &MatchRecord) {
    let result = if record.result.is_win() {
        "WIN".green().bold()
    } else {
        "LOSE".red().bold()
    };
    display_success(&format!("Recorded {} with {}", result, record.weapon));
}

pub fn display_schedule(title: &str, lines: &[ScheduleLine]) {
    println!("\n{}", title.bold().cyan());

    if lines.is_empty() {
        println!("  {}", "No schedule information".yellow());
        return;
    }

    let rows: Vec<ScheduleRow> = lines
        .iter()
        .map(|line| ScheduleRow {
            time: line.window.clone(),
            rule: line
                .rule
                .as_ref()
                .map(|r| format!("[{}]", r))
                .unwrap_or_default(),
            stages: line.stages.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_weapons(names: &[&str]) {
    println!("\n{}", format!("🔫 Weapons ({})", names.len()).bold().cyan());
    for name in names {
        println!("  {}", name);
    }
    println!();
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

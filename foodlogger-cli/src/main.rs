use anyhow::{Context, Result, anyhow, bail};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use foodlogger_core::insights::{
    AnalyticsPeriod, category_distribution, co_occurrence, daily_counts, input_type_breakdown,
    meal_timing, monthly_heatmap, top_items, week_over_week_trend,
};
use foodlogger_core::reminders::{ReminderPolicy, project_daily_reminders, project_weekly_recap};
use foodlogger_core::time;
use foodlogger_core::{FoodEntry, MealCategory, MoodTag, compute_streak, generate_summary};
use foodlogger_ingest::{draft_photo_entry, draft_text_entry, draft_voice_entry};
use foodlogger_sample::{SAMPLE_DAYS, SAMPLE_SEED};

mod config;
mod export;
mod store;

#[derive(Parser, Debug)]
#[command(name = "foodlogger", version, about = "Personal food diary with local analytics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default config under ~/.foodlogger/
    Setup,

    /// Log a meal from text, a voice transcript, or photo labels
    Log {
        #[command(subcommand)]
        command: LogCommand,
    },

    /// Today's entries and the current streak
    Today,

    /// Current logging streak
    Streak,

    /// Aggregated analytics over a recency window
    Insights {
        /// week | month | 3months | year | all
        #[arg(long, default_value = "week")]
        period: String,

        /// Max rows for rankings
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Per-day activity for one calendar month
    Heatmap {
        /// Month as YYYY-MM (default: the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// This week's summary with headline
    Recap,

    /// Case-insensitive search over descriptions, newest day first
    Search {
        query: Vec<String>,
    },

    /// Edit an entry by id (unique prefix accepted)
    Edit {
        id: String,

        /// Replace the processed description
        #[arg(long)]
        description: Option<String>,

        /// breakfast | lunch | snack | dinner | dessert | beverage
        #[arg(long)]
        category: Option<String>,

        /// energised | satisfied | neutral | sluggish | uncomfortable | none
        #[arg(long)]
        mood: Option<String>,
    },

    /// Delete an entry by id (unique prefix accepted)
    Delete {
        id: String,
    },

    /// Fill the store with a deterministic generated history
    Seed {
        #[arg(long, default_value_t = SAMPLE_SEED)]
        seed: u64,

        /// Seed even when the store already has entries
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Remove generated sample entries, keeping real ones
    ClearSamples,

    /// Write a JSON export of the whole diary
    Export {
        /// Target directory (default: current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the projected reminder schedule
    Remind {
        /// Override the daily reminder time as HH:MM
        #[arg(long)]
        at: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum LogCommand {
    /// Log typed text
    Text {
        words: Vec<String>,

        /// Attribute the entry to this day instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Log a spoken transcript
    Voice {
        words: Vec<String>,

        #[arg(long)]
        date: Option<String>,
    },

    /// Log photo classifier labels
    Photo {
        labels: Vec<String>,

        /// Bare filename of the photo to associate
        #[arg(long)]
        file: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Setup => cmd_setup(),
        Command::Log { command } => cmd_log(command),
        Command::Today => cmd_today(),
        Command::Streak => cmd_streak(),
        Command::Insights { period, limit } => cmd_insights(&period, limit),
        Command::Heatmap { month } => cmd_heatmap(month),
        Command::Recap => cmd_recap(),
        Command::Search { query } => cmd_search(&query),
        Command::Edit {
            id,
            description,
            category,
            mood,
        } => cmd_edit(&id, description, category, mood),
        Command::Delete { id } => cmd_delete(&id),
        Command::Seed { seed, force } => cmd_seed(seed, force),
        Command::ClearSamples => cmd_clear_samples(),
        Command::Export { out } => cmd_export(out),
        Command::Remind { at } => cmd_remind(at),
    }
}

fn local_now() -> Result<(config::Config, NaiveDateTime)> {
    let cfg = config::load_config(&config::config_path()?)?;
    let tz = time::parse_timezone(&cfg.timezone)
        .with_context(|| format!("configured timezone {:?}", cfg.timezone))?;
    let now = time::now_in(tz);
    Ok((cfg, now))
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn category_name(entry: &FoodEntry) -> &'static str {
    entry.category.map(MealCategory::display_name).unwrap_or("-")
}

fn cmd_setup() -> Result<()> {
    config::init_config()?;
    println!("Entry store: {}", store::entries_path()?.display());
    println!("\nNext steps:");
    println!("- foodlogger log text oatmeal with blueberries");
    println!("- foodlogger seed   (or start from a generated history)");
    println!("- foodlogger insights");
    Ok(())
}

fn cmd_log(cmd: LogCommand) -> Result<()> {
    let (_cfg, now) = local_now()?;
    let path = store::entries_path()?;
    let mut entries = store::load_entries(&path)?;

    let (mut entry, date) = match cmd {
        LogCommand::Text { words, date } => {
            let text = words.join(" ");
            if text.trim().is_empty() {
                bail!("nothing to log");
            }
            (draft_text_entry(&text, now), date)
        }
        LogCommand::Voice { words, date } => {
            let transcript = words.join(" ");
            if transcript.trim().is_empty() {
                bail!("nothing to log");
            }
            (draft_voice_entry(&transcript, now)?, date)
        }
        LogCommand::Photo { labels, file, date } => {
            (draft_photo_entry(&labels, file, now), date)
        }
    };

    if let Some(d) = date {
        entry.date = time::parse_date(&d)?;
    }

    let logged = format!(
        "Logged: {}  [{}]  (id {})",
        entry.processed_description,
        category_name(&entry),
        short_id(&entry.id),
    );
    entries.push(entry);
    store::save_entries(&path, &entries)?;
    println!("{}", logged);
    Ok(())
}

fn cmd_today() -> Result<()> {
    let (_cfg, now) = local_now()?;
    let entries = store::load_entries(&store::entries_path()?)?;
    let today = now.date();

    let mut todays: Vec<&FoodEntry> = entries.iter().filter(|e| e.date == today).collect();
    todays.sort_by_key(|e| e.created_at);

    println!("{}\n", today.format("%A, %-d %B %Y"));
    if todays.is_empty() {
        println!("No entries yet today.");
    }
    for e in &todays {
        let mood = e.mood.map(|m| format!("  ({})", m.as_str())).unwrap_or_default();
        println!(
            "  {}  [{}]  {}{}  (id {})",
            e.created_at.format("%H:%M"),
            category_name(e),
            e.processed_description,
            mood,
            short_id(&e.id),
        );
    }

    println!();
    print_streak(&entries, today);
    Ok(())
}

fn cmd_streak() -> Result<()> {
    let (_cfg, now) = local_now()?;
    let entries = store::load_entries(&store::entries_path()?)?;
    print_streak(&entries, now.date());
    Ok(())
}

fn print_streak(entries: &[FoodEntry], today: NaiveDate) {
    let streak = compute_streak(entries, today);
    if streak.count == 0 {
        println!("No active streak. Log something today to start one.");
    } else if streak.has_entry_today {
        println!("Streak: {} days 🔥", streak.count);
    } else {
        println!("Streak: {} days (log today to keep it going)", streak.count);
    }
}

fn cmd_insights(period: &str, limit: usize) -> Result<()> {
    let period = AnalyticsPeriod::parse(period)
        .ok_or_else(|| anyhow!("unknown period {:?} (week, month, 3months, year, all)", period))?;
    let (_cfg, now) = local_now()?;
    let entries = store::load_entries(&store::entries_path()?)?;

    println!("Insights ({})\n", period.label());

    let top = top_items(&entries, period, limit, now);
    if top.is_empty() {
        println!("No entries in this period.");
        return Ok(());
    }

    println!("Top foods:");
    for f in &top {
        println!("  {:>3}x {}", f.count, f.item);
    }

    println!("\nCategories:");
    for c in category_distribution(&entries, period, now) {
        println!(
            "  {:<10} {:>4}  {:>5.1}%",
            c.category.display_name(),
            c.count,
            c.percentage
        );
    }

    println!("\nInput types:");
    for t in input_type_breakdown(&entries, period, now) {
        println!("  {:<6} {:>4}  {:>5.1}%", t.input_type.as_str(), t.count, t.percentage);
    }

    println!("\nMeal times:");
    for h in meal_timing(&entries, period, now) {
        if h.count > 0 {
            println!("  {:02}:00  {:>4}  {}", h.hour, h.count, bar(h.count));
        }
    }

    let trend = week_over_week_trend(&entries, now);
    let sign = if trend.change_percent >= 0.0 { "+" } else { "" };
    println!(
        "\nThis week {} vs last week {} ({}{:.0}%)",
        trend.this_week, trend.last_week, sign, trend.change_percent
    );

    let pairs = co_occurrence(&entries, period, limit, now);
    if !pairs.is_empty() {
        println!("\nOften together:");
        for p in &pairs {
            println!("  {} + {}  ({}x)", p.item1, p.item2, p.count);
        }
    }

    if period == AnalyticsPeriod::Week {
        println!("\nEntries per day:");
        for d in daily_counts(&entries, period, now) {
            println!("  {}  {:>2}  {}", d.date.format("%a %d"), d.count, bar(d.count));
        }
    }

    Ok(())
}

fn bar(count: usize) -> String {
    "#".repeat(count.min(40))
}

fn cmd_heatmap(month: Option<String>) -> Result<()> {
    let (_cfg, now) = local_now()?;
    let entries = store::load_entries(&store::entries_path()?)?;

    let month = match month {
        Some(m) => time::parse_month(&m)?,
        None => now.date().with_day(1).unwrap_or(now.date()),
    };

    let rows = monthly_heatmap(&entries, month);
    println!("{}\n", month.format("%B %Y"));
    for r in &rows {
        let marker = if r.count == 0 { String::from(".") } else { bar(r.count) };
        println!("  {}  {:>2}  {}", r.date.format("%a %d"), r.count, marker);
    }

    let total: usize = rows.iter().map(|r| r.count).sum();
    println!("\n{} entries in {}", total, month.format("%B"));
    Ok(())
}

fn cmd_recap() -> Result<()> {
    let (_cfg, now) = local_now()?;
    let entries = store::load_entries(&store::entries_path()?)?;
    let summary = generate_summary(&entries, now);

    println!("{}", summary.headline);
    println!("{}\n", summary.subheadline);

    println!("Week of {}", summary.week_start.format("%-d %B %Y"));
    println!(
        "  Entries: {} ({} days missed)",
        summary.total_entries, summary.missed_days
    );
    if let Some(food) = &summary.top_food_item {
        println!("  Top food: {} ({}x)", food, summary.top_food_count);
    }
    if let Some(cat) = summary.top_category {
        println!("  Top category: {}", cat.display_name());
    }
    if let Some(day) = summary.best_day {
        println!("  Best day: {}", day.format("%A"));
    }
    if let Some(hour) = summary.most_active_hour {
        println!("  Most active hour: {:02}:00", hour);
    }
    println!("  Unique foods: {}", summary.unique_foods_count);
    let sign = if summary.vs_last_week >= 0 { "+" } else { "" };
    println!("  vs last week: {}{}", sign, summary.vs_last_week);
    println!(
        "  Streak: {} days (longest {})",
        summary.current_streak, summary.longest_streak
    );

    println!("\n  Daily:");
    for (day, count) in &summary.daily_entry_counts {
        println!("    {}  {:>2}  {}", day.format("%a"), count, bar(*count));
    }

    if !summary.category_breakdown.is_empty() {
        println!("\n  Categories:");
        for (cat, count) in &summary.category_breakdown {
            println!("    {:<10} {:>2}", cat.display_name(), count);
        }
    }

    Ok(())
}

fn cmd_search(query: &[String]) -> Result<()> {
    let q = query.join(" ").trim().to_lowercase();
    if q.is_empty() {
        bail!("empty search query");
    }

    let entries = store::load_entries(&store::entries_path()?)?;
    let mut by_day: BTreeMap<NaiveDate, Vec<&FoodEntry>> = BTreeMap::new();
    for e in entries.iter().filter(|e| {
        e.processed_description.to_lowercase().contains(&q)
            || e.raw_input.to_lowercase().contains(&q)
    }) {
        by_day.entry(e.date).or_default().push(e);
    }

    if by_day.is_empty() {
        println!("No matches for \"{}\"", q);
        return Ok(());
    }

    for hits in by_day.values_mut() {
        hits.sort_by_key(|e| e.created_at);
    }
    for (day, hits) in by_day.iter().rev() {
        println!("{}", day.format("%A, %-d %B %Y"));
        for e in hits {
            println!(
                "  {}  [{}]  {}  (id {})",
                e.created_at.format("%H:%M"),
                category_name(e),
                e.processed_description,
                short_id(&e.id),
            );
        }
        println!();
    }
    Ok(())
}

fn cmd_edit(
    id: &str,
    description: Option<String>,
    category: Option<String>,
    mood: Option<String>,
) -> Result<()> {
    if description.is_none() && category.is_none() && mood.is_none() {
        bail!("nothing to change (pass --description, --category or --mood)");
    }

    let (_cfg, now) = local_now()?;
    let path = store::entries_path()?;
    let mut entries = store::load_entries(&path)?;
    let idx = store::find_entry_index(&entries, id)?;

    if let Some(d) = description {
        entries[idx].processed_description = d;
    }
    if let Some(c) = &category {
        let parsed = MealCategory::parse(c).ok_or_else(|| {
            anyhow!("unknown category {:?} (breakfast, lunch, snack, dinner, dessert, beverage)", c)
        })?;
        entries[idx].category = Some(parsed);
    }
    if let Some(m) = &mood {
        entries[idx].mood = if m.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(MoodTag::parse(m).ok_or_else(|| {
                anyhow!(
                    "unknown mood {:?} (energised, satisfied, neutral, sluggish, uncomfortable, none)",
                    m
                )
            })?)
        };
    }
    entries[idx].updated_at = Some(now);
    store::save_entries(&path, &entries)?;

    println!(
        "Updated {}: {}  [{}]",
        short_id(&entries[idx].id),
        entries[idx].processed_description,
        category_name(&entries[idx]),
    );
    Ok(())
}

fn cmd_delete(id: &str) -> Result<()> {
    let path = store::entries_path()?;
    let mut entries = store::load_entries(&path)?;
    let idx = store::find_entry_index(&entries, id)?;
    let removed = entries.remove(idx);
    store::save_entries(&path, &entries)?;
    println!("Deleted: {} ({})", removed.processed_description, removed.date);
    Ok(())
}

fn cmd_seed(seed: u64, force: bool) -> Result<()> {
    let (_cfg, now) = local_now()?;
    let path = store::entries_path()?;
    let mut entries = store::load_entries(&path)?;

    if !entries.is_empty() && !force {
        bail!(
            "store already has {} entries (pass --force to seed anyway)",
            entries.len()
        );
    }

    let generated = foodlogger_sample::generate(seed, now.date());
    info!(seed, count = generated.len(), "generated sample history");
    let count = generated.len();
    entries.extend(generated);
    store::save_entries(&path, &entries)?;

    println!("Seeded {} sample entries over the last {} days", count, SAMPLE_DAYS);
    println!("Remove them later with: foodlogger clear-samples");
    Ok(())
}

fn cmd_clear_samples() -> Result<()> {
    let path = store::entries_path()?;
    let mut entries = store::load_entries(&path)?;
    let before = entries.len();
    entries.retain(|e| !e.is_sample());
    let removed = before - entries.len();
    store::save_entries(&path, &entries)?;
    println!("Removed {} sample entries ({} kept)", removed, entries.len());
    Ok(())
}

fn cmd_export(out: Option<PathBuf>) -> Result<()> {
    let (_cfg, now) = local_now()?;
    let entries = store::load_entries(&store::entries_path()?)?;
    let dir = out.unwrap_or_else(|| PathBuf::from("."));
    let path = export::write_export(&dir, &entries, now.date())?;
    println!("Wrote {} ({} entries)", path.display(), entries.len());
    Ok(())
}

fn cmd_remind(at: Option<String>) -> Result<()> {
    let (cfg, now) = local_now()?;
    let entries = store::load_entries(&store::entries_path()?)?;

    let policy = match &at {
        Some(t) => {
            let (hour, minute) = time::parse_clock_time(t)?;
            ReminderPolicy { hour, minute }
        }
        None => ReminderPolicy {
            hour: cfg.reminders.hour,
            minute: cfg.reminders.minute,
        },
    };

    if !cfg.reminders.enabled && at.is_none() {
        println!("Reminders are disabled in config.toml; showing the schedule anyway.\n");
    }

    let today = now.date();
    let has_logged_today = entries.iter().any(|e| e.date == today);

    let daily = project_daily_reminders(policy, has_logged_today, now);
    println!(
        "Daily reminders at {:02}:{:02} ({} scheduled):",
        policy.hour,
        policy.minute,
        daily.len()
    );
    for intent in &daily {
        println!("  {}", intent.fire_at.format("%a %-d %b %H:%M"));
    }
    if has_logged_today {
        println!("  (today skipped: already logged)");
    }

    let summary = generate_summary(&entries, now);
    let recap = project_weekly_recap(&summary.headline, now);
    println!("\nWeekly recap (repeats):");
    println!("  {}  {}: {}", recap.fire_at.format("%a %-d %b %H:%M"), recap.title, recap.body);

    Ok(())
}

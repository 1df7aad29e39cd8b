//! RunPlan - Running Log and Training Plan Generator
//!
//! Usage:
//! ```bash
//! # 10K plan for a 50 minute finish, four sessions a week
//! runplan plan --goal 10k --time 50:00 --sessions 4
//!
//! # Pace for 21.1 km in 1:45:00
//! runplan pace --distance 21.1 --time 1:45:00
//!
//! # Log a run and show the dashboard
//! runplan log add --date 2024-06-10 --distance 8 --time 42:30
//! runplan stats --by month
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use runplan::activities::{
    aggregate_volume, pace_trend, Activity, ActivityLog, ActivitySummary, AggregationMode,
};
use runplan::i18n::{Language, TranslationArgs, TranslationService};
use runplan::pace::{
    calculate_pace, format_distance_value, format_duration, format_pace_from_seconds,
    DistanceUnit, FinishTime, PaceInput,
};
use runplan::plan::{PlanRequest, TrainingGoal};
use runplan::report::PlanReport;
use runplan::storage::config::{self, AppConfig};

#[derive(Parser)]
#[command(
    name = "runplan",
    version,
    about = "Running log, pace calculator and training plan generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Distance unit (km or mi)
    #[arg(long, global = true)]
    units: Option<DistanceUnit>,

    /// Output language (en or fr)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Configuration file override
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a training plan
    Plan {
        /// Race goal (5k, 10k, half, marathon)
        #[arg(long, short = 'g')]
        goal: Option<TrainingGoal>,

        /// Target finish time (H:MM:SS, MM:SS or minutes)
        #[arg(long, short = 't')]
        time: FinishTime,

        /// Sessions per week (4-6)
        #[arg(long, short = 's')]
        sessions: Option<u32>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate a pace from a distance and a time
    Pace {
        /// Distance in the selected unit
        #[arg(long, short = 'd')]
        distance: f64,

        /// Time taken (H:MM:SS, MM:SS or minutes)
        #[arg(long, short = 't')]
        time: FinishTime,
    },

    /// Activity log commands
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Show dashboard statistics
    Stats {
        /// Volume grouping (week or month)
        #[arg(long)]
        by: Option<AggregationMode>,

        /// Maximum number of pace trend points
        #[arg(long)]
        points: Option<usize>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum LogCommand {
    /// Log a run
    Add {
        /// Day of the run (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Distance in the selected unit
        #[arg(long, short = 'd')]
        distance: f64,

        /// Time taken (H:MM:SS, MM:SS or minutes)
        #[arg(long, short = 't')]
        time: FinishTime,
    },

    /// List logged runs
    List,

    /// Delete a run by id or unique id prefix
    Delete { id: String },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Resolved settings for a command.
struct CommandContext {
    config: AppConfig,
    config_path: PathBuf,
    unit: DistanceUnit,
    translations: TranslationService,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting RunPlan v{}", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.clone().unwrap_or_else(config::get_config_path);
    let config = config::load_config_from(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    let unit = cli.units.unwrap_or(config.units);
    let language = cli.lang.unwrap_or_else(|| config.resolved_language());
    let mut translations = TranslationService::with_language(language);
    if let Some(dir) = &config.translations_dir {
        translations
            .load_overrides_from_dir(dir)
            .with_context(|| format!("Failed to load translations from {}", dir.display()))?;
    }

    let ctx = CommandContext {
        config,
        config_path,
        unit,
        translations,
    };

    match cli.command {
        Command::Plan {
            goal,
            time,
            sessions,
            json,
        } => run_plan(&ctx, goal, time, sessions, json),
        Command::Pace { distance, time } => run_pace(&ctx, distance, time),
        Command::Log { action } => run_log(&ctx, action),
        Command::Stats { by, points } => run_stats(&ctx, by, points),
        Command::Config { action } => run_config(&ctx, action),
    }
}

fn run_plan(
    ctx: &CommandContext,
    goal: Option<TrainingGoal>,
    time: FinishTime,
    sessions: Option<u32>,
    json: bool,
) -> Result<()> {
    let request = PlanRequest::new(
        goal.unwrap_or(ctx.config.plan.default_goal),
        time,
        sessions.unwrap_or(ctx.config.plan.sessions_per_week),
    );
    let plan = request.generate().context("Invalid plan request")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let report = PlanReport::new(&plan, ctx.unit, &ctx.translations)
        .with_target_time(request.total_seconds());
    print!("{}", report.render());
    Ok(())
}

fn run_pace(ctx: &CommandContext, distance: f64, time: FinishTime) -> Result<()> {
    let pace = calculate_pace(&PaceInput::new(distance, time))?;

    let mut args = TranslationArgs::new();
    args.set("pace", pace);
    args.set("unit", ctx.unit.label());
    println!("{}", ctx.translations.translate_with_args("pace-result", &args));
    Ok(())
}

fn open_log(ctx: &CommandContext) -> Result<ActivityLog> {
    let path = ctx.config.activity_log_path();
    ActivityLog::open(path.clone())
        .with_context(|| format!("Failed to open activity log {}", path.display()))
}

fn run_log(ctx: &CommandContext, action: LogCommand) -> Result<()> {
    let t = &ctx.translations;
    let mut log = open_log(ctx)?;

    match action {
        LogCommand::Add {
            date,
            distance,
            time,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let activity = Activity::from_input(date, distance, ctx.unit, time)?;
            let id = log.add(activity);
            log.save()?;

            let mut args = TranslationArgs::new();
            args.set("id", id.to_string());
            println!("{}", t.translate_with_args("activity-added", &args));
        }
        LogCommand::List => print_activities(ctx, &log),
        LogCommand::Delete { id } => {
            let target = match Uuid::parse_str(&id) {
                Ok(uuid) => log.get(uuid).map(|a| a.id),
                Err(_) => log.find_by_prefix(&id).map(|a| a.id),
            };

            let mut args = TranslationArgs::new();
            args.set("id", id.clone());
            match target {
                Some(uuid) if log.delete(uuid) => {
                    log.save()?;
                    println!("{}", t.translate_with_args("activity-deleted", &args));
                }
                _ => bail!(t.translate_with_args("activity-not-found", &args)),
            }
        }
    }

    Ok(())
}

fn print_activities(ctx: &CommandContext, log: &ActivityLog) {
    let t = &ctx.translations;
    if log.is_empty() {
        println!("{}", t.translate("no-activities"));
        return;
    }

    let mut unit_args = TranslationArgs::new();
    unit_args.set("unit", ctx.unit.label());
    println!(
        "{:<10} {:<12} {:>14} {:>10} {:>14}",
        "id",
        t.translate("activity-date"),
        t.translate_with_args("activity-distance", &unit_args),
        t.translate("activity-time"),
        t.translate_with_args("activity-pace", &unit_args),
    );

    for activity in log.list() {
        let short_id: String = activity.id.to_string().chars().take(8).collect();
        println!(
            "{:<10} {:<12} {:>14} {:>10} {:>14}",
            short_id,
            activity.date.to_string(),
            format_distance_value(activity.distance_in(ctx.unit), ctx.translations.language()),
            format_duration(f64::from(activity.total_seconds())),
            activity.pace_display(ctx.unit),
        );
    }
}

fn run_stats(ctx: &CommandContext, by: Option<AggregationMode>, points: Option<usize>) -> Result<()> {
    let t = &ctx.translations;
    let log = open_log(ctx)?;
    let activities = log.activities();
    let language = t.language();

    let summary = ActivitySummary::from_activities(activities, ctx.unit);
    let mut unit_args = TranslationArgs::new();
    unit_args.set("unit", ctx.unit.label());
    println!(
        "{}: {}",
        t.translate_with_args("dashboard-total-distance", &unit_args),
        summary.display_total_distance(language)
    );
    println!("{}: {}", t.translate("dashboard-total-time"), summary.display_total_time());
    println!(
        "{}: {}",
        t.translate_with_args("dashboard-average-pace", &unit_args),
        summary.display_average_pace()
    );
    println!("{}: {}", t.translate("dashboard-activities"), summary.count);

    if activities.is_empty() {
        return Ok(());
    }

    let mode = by.unwrap_or(ctx.config.dashboard.aggregation);
    let today = Local::now().date_naive();
    let mode_label = match mode {
        AggregationMode::Week => t.translate("volume-weekly"),
        AggregationMode::Month => t.translate("volume-monthly"),
    };
    println!();
    println!("{} ({})", t.translate("volume-title"), mode_label);
    for point in aggregate_volume(activities, mode, ctx.unit, today) {
        let period = match mode {
            AggregationMode::Week => {
                let mut args = TranslationArgs::new();
                args.set("date", point.period_start.to_string());
                t.translate_with_args("volume-week-of", &args)
            }
            AggregationMode::Month => point.period_start.format("%Y-%m").to_string(),
        };
        println!(
            "  {:<24} {} {}",
            period,
            format_distance_value(point.distance, language),
            ctx.unit.label()
        );
    }

    let max_points = points.unwrap_or(ctx.config.dashboard.pace_trend_points);
    println!();
    println!("{}", t.translate("pace-trend-title"));
    for point in pace_trend(activities, ctx.unit, Some(max_points)) {
        println!(
            "  {}  {}/{}",
            point.date,
            format_pace_from_seconds(point.pace_seconds, 1.0),
            ctx.unit.label()
        );
    }

    Ok(())
}

fn run_config(ctx: &CommandContext, action: ConfigCommand) -> Result<()> {
    match action {
        ConfigCommand::Show => {
            print!("{}", toml::to_string_pretty(&ctx.config)?);
            println!("# data directory: {}", ctx.config.data_dir.display());
        }
        ConfigCommand::Path => println!("{}", ctx.config_path.display()),
        ConfigCommand::Init { force } => {
            if ctx.config_path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    ctx.config_path.display()
                );
            }
            config::save_config_to(&AppConfig::default(), &ctx.config_path)?;
            println!("{}", ctx.config_path.display());
        }
    }
    Ok(())
}

//! Plain-text rendering of training plans.
//!
//! A report starts with a summary card (week count, race reminder and target
//! paces) followed by one block per week listing its sessions. The session that
//! carries the week's quality emphasis is tagged.

use std::fmt::Write;

use crate::i18n::{TranslationArgs, TranslationService};
use crate::pace::{format_distance_value_from_km, format_duration, format_pace, DistanceUnit};
use crate::plan::{PlanWeek, QualityPlacement, TrainingPlan};

/// Indentation for lines inside a card.
const INDENT: &str = "  ";

/// Renders a plan in the translation service's current language.
pub struct PlanReport<'a> {
    plan: &'a TrainingPlan,
    unit: DistanceUnit,
    translations: &'a TranslationService,
    target_time_seconds: Option<u32>,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a TrainingPlan, unit: DistanceUnit, translations: &'a TranslationService) -> Self {
        Self {
            plan,
            unit,
            translations,
            target_time_seconds: None,
        }
    }

    /// Include a finish-time reminder in the summary.
    pub fn with_target_time(mut self, total_seconds: u32) -> Self {
        self.target_time_seconds = Some(total_seconds);
        self
    }

    /// Render the whole plan.
    pub fn render(&self) -> String {
        let mut out = self.render_summary();
        for week in &self.plan.weeks {
            out.push('\n');
            out.push_str(&self.render_week(week));
        }
        out
    }

    /// Render the summary card.
    pub fn render_summary(&self) -> String {
        let t = self.translations;
        let mut out = String::new();

        let mut args = TranslationArgs::new();
        args.set("weeks", self.plan.weeks.len());
        let _ = writeln!(out, "{}", t.translate_with_args("plan-summary-title", &args));
        let _ = writeln!(out, "{}", t.translate("plan-intro"));

        let mut args = TranslationArgs::new();
        args.set("goal", t.translate(&format!("goal-{}", self.plan.goal.id())));
        let _ = writeln!(out, "{}", t.translate_with_args("goal-reminder", &args));

        let mut args = TranslationArgs::new();
        args.set("distance", self.distance(self.plan.race_distance_km));
        args.set("unit", self.unit.label());
        let _ = writeln!(out, "{}", t.translate_with_args("race-reminder", &args));

        if let Some(seconds) = self.target_time_seconds {
            let mut args = TranslationArgs::new();
            args.set("time", format_duration(f64::from(seconds)));
            let _ = writeln!(out, "{}", t.translate_with_args("finish-reminder", &args));
        }

        let mut args = TranslationArgs::new();
        args.set("distance", self.distance(self.plan.peak_long_run_km()));
        args.set("unit", self.unit.label());
        let _ = writeln!(out, "{}", t.translate_with_args("peak-long-reminder", &args));

        out.push('\n');
        let _ = writeln!(out, "{}", t.translate("summary-heading"));

        let rows = self.summary_rows();
        let width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in rows {
            let _ = writeln!(out, "{INDENT}{label:<width$}  {value}");
        }

        out
    }

    fn summary_rows(&self) -> Vec<(String, String)> {
        let t = self.translations;
        let mut rows = vec![(t.translate("summary-race"), self.pace(self.plan.pace_per_km))];

        if let Some(first) = self.plan.weeks.first() {
            rows.push((t.translate("summary-easy"), self.pace(first.easy_runs.pace_per_km)));
            if let Some(steady) = &first.steady_run {
                rows.push((t.translate("summary-steady"), self.pace(steady.pace_per_km)));
            }
            rows.push((t.translate("summary-long"), self.pace(first.long_run.pace_per_km)));
        }

        let mut args = TranslationArgs::new();
        args.set("count", self.plan.sessions_per_week);
        rows.push((
            t.translate("summary-sessions"),
            t.translate_with_args("frequency-option", &args),
        ));
        rows
    }

    /// Render one week card.
    pub fn render_week(&self, week: &PlanWeek) -> String {
        let t = self.translations;
        let mut out = String::new();

        let mut args = TranslationArgs::new();
        args.set("week", week.week);
        let _ = writeln!(out, "{}", t.translate_with_args("week-label", &args));
        let _ = writeln!(out, "{}", t.translate(&format!("focus-{}", week.stage.id())));

        for (placement, text) in self.session_lines(week) {
            if placement == week.quality_placement {
                let _ = writeln!(out, "{INDENT}- {} [{}]", text, t.translate("quality-tag"));
            } else {
                let _ = writeln!(out, "{INDENT}- {}", text);
            }
        }

        let session = t.translate(&format!(
            "quality-{}-{}",
            self.plan.goal.id(),
            week.quality_key.id()
        ));
        let suggested_run = t.translate(&format!("placement-{}", week.quality_placement.id()));
        let mut args = TranslationArgs::new();
        args.set("session", session);
        args.set("suggestedRun", suggested_run);
        let _ = writeln!(
            out,
            "{INDENT}{}: {}",
            t.translate("quality-focus-label"),
            t.translate_with_args("quality-session", &args)
        );

        out
    }

    /// Session lines for a week, tagged with the kind of run they describe.
    fn session_lines(&self, week: &PlanWeek) -> Vec<(QualityPlacement, String)> {
        let t = self.translations;
        let mut lines = Vec::with_capacity(3);

        let mut args = self.run_args(week.easy_runs.distance_km, week.easy_runs.pace_per_km);
        args.set("count", week.easy_runs.count);
        lines.push((QualityPlacement::Easy, t.translate_with_args("easy-runs", &args)));

        if let Some(steady) = &week.steady_run {
            let args = self.run_args(steady.distance_km, steady.pace_per_km);
            lines.push((QualityPlacement::Steady, t.translate_with_args("steady-run", &args)));
        }

        let args = self.run_args(week.long_run.distance_km, week.long_run.pace_per_km);
        lines.push((QualityPlacement::Long, t.translate_with_args("long-run", &args)));

        lines
    }

    fn run_args(&self, distance_km: f64, pace_per_km: f64) -> TranslationArgs<'static> {
        let mut args = TranslationArgs::new();
        args.set("distance", self.distance(distance_km));
        args.set("unit", self.unit.label());
        args.set("pace", self.pace(pace_per_km));
        args
    }

    fn distance(&self, distance_km: f64) -> String {
        format_distance_value_from_km(distance_km, self.unit, self.translations.language())
    }

    fn pace(&self, pace_per_km: f64) -> String {
        format!("{}/{}", format_pace(pace_per_km, self.unit), self.unit.label())
    }
}

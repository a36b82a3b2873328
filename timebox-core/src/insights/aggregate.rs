//! Building the insights report from the event list.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveDateTime};

use super::report::{DatedGap, InsightsReport, SkipReason, SkippedEvent};
use super::{ScheduledEvent, detect_conflicts, find_gaps};
use crate::config::InsightsConfig;
use crate::error::TimeboxResult;
use crate::event::Event;
use crate::store::EventRepository;

const EMPTY_CALENDAR_MESSAGE: &str = "Your calendar is empty. Start planning!";
const ALL_GOOD_MESSAGE: &str = "Your schedule looks good!";

/// Read every event from `repo` and analyse it relative to `now`.
///
/// Only a failing repository read is an error. Events with malformed or
/// inverted timestamps are excluded from conflicts and gaps and listed in
/// `skipped_events`, with a warning line in `insights`.
pub fn compute_insights(
    repo: &dyn EventRepository,
    now: NaiveDateTime,
    config: &InsightsConfig,
) -> TimeboxResult<InsightsReport> {
    let events = repo.list_all()?;
    Ok(build_report(&events, now.date(), config))
}

/// Analyse `events`, scanning for gaps from `today` onwards.
pub fn build_report(events: &[Event], today: NaiveDate, config: &InsightsConfig) -> InsightsReport {
    if events.is_empty() {
        return InsightsReport {
            total_events: 0,
            conflicts: Vec::new(),
            upcoming_gaps: Vec::new(),
            category_breakdown: None,
            insights: vec![EMPTY_CALENDAR_MESSAGE.to_string()],
            skipped_events: Vec::new(),
        };
    }

    let (scheduled, skipped) = ScheduledEvent::partition(events);

    let conflicts = detect_conflicts(&scheduled);

    let all_gaps: Vec<DatedGap> = (0..config.lookahead_days)
        .filter_map(|offset| today.checked_add_days(Days::new(u64::from(offset))))
        .flat_map(|date| {
            find_gaps(&scheduled, date, config)
                .into_iter()
                .map(move |gap| DatedGap { date, gap })
        })
        .collect();

    let category_breakdown = count_categories(events);

    let mut insights = Vec::new();

    if !conflicts.is_empty() {
        insights.push(conflict_message(conflicts.len()));
    }

    let large_blocks = all_gaps
        .iter()
        .filter(|g| g.gap.duration_minutes >= config.large_block_minutes)
        .count();
    if large_blocks > 0 {
        insights.push(large_block_message(large_blocks, config));
    }

    if let Some((category, count)) = most_scheduled(events, &category_breakdown) {
        let noun = if count == 1 { "event" } else { "events" };
        insights.push(format!("📊 Most scheduled: {category} ({count} {noun})"));
    }

    insights.extend(skipped.iter().map(skipped_message));

    if insights.is_empty() {
        insights.push(ALL_GOOD_MESSAGE.to_string());
    }

    tracing::debug!(
        total = events.len(),
        conflicts = conflicts.len(),
        gaps = all_gaps.len(),
        skipped = skipped.len(),
        "computed schedule insights"
    );

    let upcoming_gaps = all_gaps.into_iter().take(config.max_reported_gaps).collect();

    InsightsReport {
        total_events: events.len(),
        conflicts,
        upcoming_gaps,
        category_breakdown: Some(category_breakdown),
        insights,
        skipped_events: skipped,
    }
}

/// Events per category, including events excluded from the time analysis.
fn count_categories(events: &[Event]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Category with the most events. Ties go to the category seen first in
/// `events`.
fn most_scheduled<'a>(
    events: &'a [Event],
    counts: &BTreeMap<String, usize>,
) -> Option<(&'a str, usize)> {
    let mut best: Option<(&str, usize)> = None;

    for event in events {
        let category = event.category.as_str();
        let count = counts.get(category).copied().unwrap_or(0);
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((category, count)),
        }
    }

    best
}

fn conflict_message(count: usize) -> String {
    if count == 1 {
        "⚠️ You have 1 scheduling conflict that needs attention".to_string()
    } else {
        format!("⚠️ You have {count} scheduling conflicts that need attention")
    }
}

fn large_block_message(count: usize, config: &InsightsConfig) -> String {
    let blocks = if count == 1 { "block" } else { "blocks" };
    let length = describe_minutes(config.large_block_minutes);
    let period = if config.lookahead_days == 7 {
        "this week".to_string()
    } else {
        format!("in the next {} days", config.lookahead_days)
    };
    format!("✨ You have {count} {blocks} of {length} free time {period}")
}

fn describe_minutes(minutes: i64) -> String {
    match minutes {
        60 => "1+ hour".to_string(),
        m if m > 0 && m % 60 == 0 => format!("{}+ hours", m / 60),
        m => format!("{m}+ minutes"),
    }
}

fn skipped_message(skipped: &SkippedEvent) -> String {
    let problem = match skipped.reason {
        SkipReason::MalformedTimestamp => "its start or end time could not be read",
        SkipReason::InvalidInterval => "it ends before it starts",
    };
    format!(
        "⚠️ \"{}\" was left out of conflict and free-time analysis: {problem}",
        skipped.title
    )
}

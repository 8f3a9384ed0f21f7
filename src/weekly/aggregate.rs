use std::collections::{BTreeMap, HashMap};

use chrono::DateTime;

use super::range::WeekRange;
use crate::models::{
    Chat, ProjectChat, ProjectGroup, TimelineChat, TimelineDay, WeeklySummary,
};
use crate::utils::text::{PROJECT_SUMMARY_CHARS, TIMELINE_SUMMARY_CHARS, first_user_excerpt};

const UNKNOWN_PROJECT: &str = "Unknown";

/// Chats whose start date falls inside `range`; undated chats never do
pub fn chats_in_range<'a>(chats: &'a [Chat], range: &WeekRange) -> Vec<&'a Chat> {
    chats.iter().filter(|chat| chat.date.is_some_and(|d| range.contains_millis(d))).collect()
}

/// Aggregate the chats of one week window
pub fn summarize_week(chats: &[Chat], range: &WeekRange, weeks_ago: u32) -> WeeklySummary {
    let week_chats = chats_in_range(chats, range);

    WeeklySummary {
        week_start: range.start_iso(),
        week_end: range.end_iso(),
        weeks_ago,
        by_project: group_by_project(&week_chats),
        timeline: build_timeline(&week_chats),
        total_chats: week_chats.len(),
        total_messages: week_chats.iter().map(|c| c.message_count).sum(),
    }
}

fn project_label(chat: &Chat) -> &str {
    if chat.project.name.is_empty() { UNKNOWN_PROJECT } else { &chat.project.name }
}

/// One group per (project, source), in order of first appearance
pub fn group_by_project(chats: &[&Chat]) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for chat in chats {
        let project = project_label(chat);
        let key = format!("{} ({})", project, chat.source);

        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ProjectGroup {
                project: project.to_string(),
                source: chat.source,
                chats: Vec::new(),
                total_messages: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.chats.push(ProjectChat {
            session_id: chat.session_id.clone(),
            date: chat.date,
            summary: first_user_excerpt(&chat.messages, PROJECT_SUMMARY_CHARS),
            message_count: chat.message_count,
        });
        group.total_messages += chat.message_count;
    }

    groups
}

/// One entry per UTC calendar day, days ascending
///
/// Chats keep their input order inside a day.
pub fn build_timeline(chats: &[&Chat]) -> Vec<TimelineDay> {
    let mut days: BTreeMap<String, TimelineDay> = BTreeMap::new();

    for chat in chats {
        let Some(timestamp) = chat.date else { continue };
        let Some(instant) = DateTime::from_timestamp_millis(timestamp) else { continue };

        let date = instant.format("%Y-%m-%d").to_string();
        let day = days.entry(date.clone()).or_insert_with(|| TimelineDay {
            date,
            day: instant.format("%A").to_string(),
            chats: Vec::new(),
        });

        day.chats.push(TimelineChat {
            session_id: chat.session_id.clone(),
            source: chat.source,
            project: project_label(chat).to_string(),
            summary: first_user_excerpt(&chat.messages, TIMELINE_SUMMARY_CHARS),
            message_count: chat.message_count,
            timestamp,
        });
    }

    days.into_values().collect()
}

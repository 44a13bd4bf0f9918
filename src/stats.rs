//! Derived statistics over a snapshot of the question collection
//!
//! Pure functions, recomputed on demand from the caller's in-memory
//! list; nothing here touches storage.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::questions::{Difficulty, Question};

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub topic_count: usize,
    pub needs_revision: usize,
    /// Distinct topics in first-encounter order
    pub topics: Vec<String>,
}

/// Per-topic rollup for the topics view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicBreakdown {
    pub name: String,
    pub count: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    /// Rounded mean confidence across the topic (half rounds up)
    pub avg_confidence: i32,
}

/// Optional criteria for narrowing the question list; all active
/// criteria must match (AND semantics).
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    /// Case-insensitive substring over question, topic and answer
    pub search: Option<String>,
    /// Exact topic match
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub confidence: Option<i32>,
}

/// Compute dashboard statistics.
///
/// Topics are counted by exact string equality. Unlike
/// [`topic_breakdown`], no whitespace trimming is applied here: the
/// dashboard counts topics as entered, so near-duplicate labels stay
/// visible instead of being merged away.
pub fn dashboard_stats(questions: &[Question]) -> DashboardStats {
    let mut seen = HashSet::new();
    let mut topics = Vec::new();
    for q in questions {
        if seen.insert(q.topic.as_str()) {
            topics.push(q.topic.clone());
        }
    }

    DashboardStats {
        total: questions.len(),
        topic_count: topics.len(),
        needs_revision: questions.iter().filter(|q| q.needs_revision()).count(),
        topics,
    }
}

/// Group questions by trimmed topic and roll up per-difficulty counts
/// and average confidence. Groups are ordered by count descending;
/// ties keep first-encounter order. The display name is the trimmed
/// form of the first occurrence; matching is case-sensitive.
pub fn topic_breakdown(questions: &[Question]) -> Vec<TopicBreakdown> {
    struct Group {
        name: String,
        count: usize,
        easy: usize,
        medium: usize,
        hard: usize,
        total_confidence: i64,
    }

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for q in questions {
        let name = q.topic.trim();
        let pos = match positions.get(name) {
            Some(&pos) => pos,
            None => {
                positions.insert(name.to_string(), groups.len());
                groups.push(Group {
                    name: name.to_string(),
                    count: 0,
                    easy: 0,
                    medium: 0,
                    hard: 0,
                    total_confidence: 0,
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[pos];
        group.count += 1;
        match q.difficulty {
            Difficulty::Easy => group.easy += 1,
            Difficulty::Medium => group.medium += 1,
            Difficulty::Hard => group.hard += 1,
        }
        group.total_confidence += q.confidence as i64;
    }

    let mut breakdown: Vec<TopicBreakdown> = groups
        .into_iter()
        .map(|g| TopicBreakdown {
            avg_confidence: (g.total_confidence as f64 / g.count as f64).round() as i32,
            name: g.name,
            count: g.count,
            easy: g.easy,
            medium: g.medium,
            hard: g.hard,
        })
        .collect();

    // Stable sort keeps first-encounter order among equal counts
    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown
}

/// Apply a filter to the question list, keeping input order
pub fn filter_questions(questions: &[Question], filter: &QuestionFilter) -> Vec<Question> {
    let needle = filter.search.as_ref().map(|s| s.to_lowercase());

    questions
        .iter()
        .filter(|q| {
            let matches_search = match &needle {
                None => true,
                Some(needle) => {
                    q.question.to_lowercase().contains(needle)
                        || q.topic.to_lowercase().contains(needle)
                        || q.answer
                            .as_deref()
                            .map(|a| a.to_lowercase().contains(needle))
                            .unwrap_or(false)
                }
            };
            let matches_topic = filter.topic.as_deref().map_or(true, |t| q.topic == t);
            let matches_difficulty = filter.difficulty.map_or(true, |d| q.difficulty == d);
            let matches_confidence = filter.confidence.map_or(true, |c| q.confidence == c);

            matches_search && matches_topic && matches_difficulty && matches_confidence
        })
        .cloned()
        .collect()
}

/// Distinct raw topics, sorted, for filter pickers
pub fn topic_options(questions: &[Question]) -> Vec<String> {
    let mut topics: Vec<String> = questions
        .iter()
        .map(|q| q.topic.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    topics.sort();
    topics
}

//! Dashboard summary statistics.

use serde::Serialize;

/// Aggregate submission counters for one user, as read from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionTotals {
    /// All submissions, regardless of status.
    pub total: i64,
    /// Submissions with status `COMPLETED`.
    pub completed: i64,
    /// Sum of `final_score` over completed submissions that have one.
    pub score_sum: i64,
    /// Number of completed submissions that have a `final_score`.
    pub scored: i64,
}

/// Summary block of the profile document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub reputation: i32,
    pub submission_count: i64,
    pub skill_count: i64,
    pub completed_count: i64,
    pub average_score: Option<f64>,
}

impl DashboardStats {
    pub fn compute(reputation: i32, skill_count: i64, totals: SubmissionTotals) -> Self {
        Self {
            reputation,
            submission_count: totals.total,
            skill_count,
            completed_count: totals.completed,
            average_score: average_score(totals.score_sum, totals.scored),
        }
    }
}

/// Mean score rounded to one decimal place, `None` when nothing was scored.
pub fn average_score(score_sum: i64, scored: i64) -> Option<f64> {
    if scored <= 0 {
        return None;
    }
    let mean = score_sum as f64 / scored as f64;
    Some((mean * 10.0).round() / 10.0)
}

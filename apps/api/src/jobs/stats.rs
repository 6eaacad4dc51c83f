//! Pipeline analytics computed over a user's jobs.
//!
//! Pure functions over `&[JobRow]` so they are testable without a database.
//! Day bucketing uses UTC calendar days.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::models::job::{JobRow, JobStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub total: usize,
    pub wishlist: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
    /// round(100 * (interview + offer) / total); 0 with no jobs.
    pub response_rate: u8,
}

impl PipelineStats {
    pub fn count(&self, status: JobStatus) -> usize {
        match status {
            JobStatus::Wishlist => self.wishlist,
            JobStatus::Applied => self.applied,
            JobStatus::Interview => self.interview,
            JobStatus::Offer => self.offer,
            JobStatus::Rejected => self.rejected,
        }
    }
}

/// One bar of the weekly activity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    /// Short weekday label ("Mon").
    pub label: String,
    pub count: usize,
    pub is_today: bool,
}

pub fn compute_pipeline_stats(jobs: &[JobRow]) -> PipelineStats {
    let mut stats = PipelineStats {
        total: jobs.len(),
        wishlist: 0,
        applied: 0,
        interview: 0,
        offer: 0,
        rejected: 0,
        response_rate: 0,
    };

    for job in jobs {
        match job.status() {
            JobStatus::Wishlist => stats.wishlist += 1,
            JobStatus::Applied => stats.applied += 1,
            JobStatus::Interview => stats.interview += 1,
            JobStatus::Offer => stats.offer += 1,
            JobStatus::Rejected => stats.rejected += 1,
        }
    }

    if stats.total > 0 {
        let responses = stats.interview + stats.offer;
        stats.response_rate = (100.0 * responses as f64 / stats.total as f64).round() as u8;
    }

    stats
}

/// Jobs created per UTC day over the last 7 days, oldest first, today last.
pub fn weekly_activity(jobs: &[JobRow], now: DateTime<Utc>) -> Vec<DayActivity> {
    let today = now.date_naive();

    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let count = jobs
                .iter()
                .filter(|j| j.created_at.date_naive() == day)
                .count();
            DayActivity {
                label: day.format("%a").to_string(),
                count,
                is_today: offset == 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn make_job(status: &str, created_at: DateTime<Utc>) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            url: None,
            salary: None,
            description: None,
            notes: None,
            status: status.to_string(),
            created_at,
            updated_at: created_at,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_pipeline_counts() {
        let now = at(2025, 3, 10);
        let jobs = vec![
            make_job("wishlist", now),
            make_job("applied", now),
            make_job("applied", now),
            make_job("interview", now),
            make_job("offer", now),
            make_job("rejected", now),
        ];
        let stats = compute_pipeline_stats(&jobs);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.wishlist, 1);
        assert_eq!(stats.applied, 2);
        assert_eq!(stats.interview, 1);
        assert_eq!(stats.offer, 1);
        assert_eq!(stats.rejected, 1);
        for status in JobStatus::ALL {
            assert_eq!(
                stats.count(status),
                jobs.iter().filter(|j| j.status() == status).count()
            );
        }
    }

    #[test]
    fn test_response_rate_rounds() {
        let now = at(2025, 3, 10);
        // 2 responses out of 6 → 33.33 → 33.
        let jobs = vec![
            make_job("applied", now),
            make_job("applied", now),
            make_job("applied", now),
            make_job("applied", now),
            make_job("interview", now),
            make_job("offer", now),
        ];
        assert_eq!(compute_pipeline_stats(&jobs).response_rate, 33);
    }

    #[test]
    fn test_response_rate_zero_without_jobs() {
        assert_eq!(compute_pipeline_stats(&[]).response_rate, 0);
    }

    #[test]
    fn test_unknown_status_counts_as_wishlist() {
        let jobs = vec![make_job("archived", at(2025, 3, 10))];
        let stats = compute_pipeline_stats(&jobs);
        assert_eq!(stats.wishlist, 1);
    }

    #[test]
    fn test_weekly_activity_buckets_by_day() {
        let now = at(2025, 3, 10); // a Monday
        let jobs = vec![
            make_job("applied", at(2025, 3, 10)),
            make_job("applied", at(2025, 3, 10)),
            make_job("applied", at(2025, 3, 8)),
            make_job("applied", at(2025, 3, 1)), // outside the window
        ];
        let week = weekly_activity(&jobs, now);
        assert_eq!(week.len(), 7);
        assert_eq!(week[6].count, 2);
        assert!(week[6].is_today);
        assert_eq!(week[6].label, "Mon");
        assert_eq!(week[4].count, 1); // March 8
        assert_eq!(week[0].count, 0);
        assert_eq!(week.iter().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn test_weekly_activity_is_oldest_first() {
        let now = at(2025, 3, 10);
        let week = weekly_activity(&[], now);
        assert_eq!(week[0].label, "Tue"); // March 4, 2025
        assert_eq!(week[6].label, "Mon");
    }
}

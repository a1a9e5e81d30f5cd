//! Mock Content
//!
//! Hard-coded reports, metrics and marketing copy rendered by the views.

use chrono::Duration;

/// Review state of a citizen report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStatus {
    Verified,
    Unverified,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Verified => "verified",
            ReportStatus::Unverified => "unverified",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HazardReport {
    pub id: u32,
    pub title: &'static str,
    pub status: ReportStatus,
    age_minutes: i64,
}

impl HazardReport {
    pub fn age(&self) -> Duration {
        Duration::minutes(self.age_minutes)
    }
}

pub const RECENT_REPORTS: [HazardReport; 2] = [
    HazardReport {
        id: 1,
        title: "Rip current at Baga",
        status: ReportStatus::Verified,
        age_minutes: 15,
    },
    HazardReport {
        id: 2,
        title: "Oil sheen near Marina",
        status: ReportStatus::Unverified,
        age_minutes: 60,
    },
];

/// Headline figure on the authority dashboard
#[derive(Clone, Copy, Debug)]
pub struct DashboardMetric {
    pub label: &'static str,
    pub value: u32,
}

pub const DASHBOARD_METRICS: [DashboardMetric; 3] = [
    DashboardMetric { label: "Active Alerts", value: 3 },
    DashboardMetric { label: "Pending Verifications", value: 7 },
    DashboardMetric { label: "Nearby Reports", value: 12 },
];

/// Report waiting for an authority decision
#[derive(Clone, Debug)]
pub struct PendingReport {
    pub title: String,
    pub uploaded: Duration,
    pub confidence_pct: u8,
}

pub fn pending_reports() -> Vec<PendingReport> {
    (1..=3)
        .map(|i| PendingReport {
            title: format!("Rip current near Beach {}", i),
            uploaded: Duration::minutes(18),
            confidence_pct: 58,
        })
        .collect()
}

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        emoji: "📱",
        title: "Report from Phone",
        description: "Upload video/photo + location. Live-capture for high-severity reports.",
    },
    Feature {
        emoji: "🛰️",
        title: "Social Signals",
        description: "AI mines social media to detect early signals near shores.",
    },
    Feature {
        emoji: "🏛️",
        title: "Authority Fusion",
        description: "Fuse INCOIS advisories and local confirmations for trusted alerts.",
    },
];

/// Small titled tile on the home page
#[derive(Clone, Copy, Debug)]
pub struct Highlight {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const HERO_HIGHLIGHTS: [Highlight; 2] = [
    Highlight { title: "Live alerts", detail: "INCOIS advisory fusion" },
    Highlight { title: "Community verified", detail: "Local confirmations & reputation" },
];

pub const RECENT_HIGHLIGHTS: [Highlight; 2] = [
    Highlight { title: "Recent Verified", detail: "Baga Beach — Rip current" },
    Highlight { title: "Recent Unverified", detail: "Marina — suspected oil spill" },
];

/// Compact relative age: `15m`, `1h`, `2d`
pub fn format_age(age: Duration) -> String {
    if age.num_minutes() < 1 {
        "now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h", age.num_hours())
    } else {
        format!("{}d", age.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::seconds(20)), "now");
        assert_eq!(format_age(Duration::minutes(15)), "15m");
        assert_eq!(format_age(Duration::minutes(60)), "1h");
        assert_eq!(format_age(Duration::minutes(150)), "2h");
        assert_eq!(format_age(Duration::hours(49)), "2d");
    }

    #[test]
    fn test_recent_reports_ages() {
        let ages: Vec<_> = RECENT_REPORTS.iter().map(|r| format_age(r.age())).collect();
        assert_eq!(ages, vec!["15m", "1h"]);
    }

    #[test]
    fn test_pending_reports() {
        let pending = pending_reports();
        assert_eq!(pending.len(), 3);
        assert_eq!(pending[2].title, "Rip current near Beach 3");
        assert_eq!(format_age(pending[0].uploaded), "18m");
    }

    #[test]
    fn test_dashboard_metrics() {
        let values: Vec<_> = DASHBOARD_METRICS.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![3, 7, 12]);
    }
}

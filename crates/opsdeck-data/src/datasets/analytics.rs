//! Analytics page datasets: engagement, funnel, traffic, and device
//! panels

use serde::{Deserialize, Serialize};

/// One month of engagement figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementMonth {
    /// Month label
    pub month: String,
    /// Page views
    pub page_views: i64,
    /// Unique visitors
    pub unique_visitors: i64,
    /// Bounce rate, percent
    pub bounce_rate: f64,
}

/// One stage of the conversion funnel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelStage {
    /// Stage name
    pub stage: String,
    /// Visitors reaching the stage
    pub count: i64,
    /// Share of the top of the funnel, percent
    pub share: f64,
}

/// Visitors attributed to a traffic source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSource {
    /// Source name
    pub name: String,
    /// Share of traffic, percent
    pub share: f64,
    /// Visitor count
    pub visitors: i64,
}

/// Point-in-time site metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeMetrics {
    /// Users on the site right now
    pub active_users: i64,
    /// Average session duration label
    pub session_duration: String,
    /// Page views so far today
    pub page_views_today: i64,
    /// Conversion rate, percent
    pub conversion_rate: f64,
}

/// Traffic figures for one page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageStat {
    /// Page path
    pub page: String,
    /// View count
    pub views: i64,
    /// Average time on page label
    pub avg_time: String,
}

/// Users attributed to a device class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceShare {
    /// Device class
    pub device: String,
    /// Share of users, percent
    pub share: f64,
    /// User count
    pub users: i64,
}

/// Six months of engagement figures
#[must_use]
pub fn engagement() -> Vec<EngagementMonth> {
    let rows = [
        ("Jan", 12_400, 8_200, 32.0),
        ("Feb", 13_200, 8_900, 28.0),
        ("Mar", 12_800, 8_500, 35.0),
        ("Apr", 14_100, 9_200, 30.0),
        ("May", 15_300, 9_800, 25.0),
        ("Jun", 16_200, 10_400, 22.0),
    ];

    rows.into_iter()
        .map(|(month, page_views, unique_visitors, bounce_rate)| EngagementMonth {
            month: month.to_string(),
            page_views,
            unique_visitors,
            bounce_rate,
        })
        .collect()
}

/// Conversion funnel stages
#[must_use]
pub fn conversion_funnel() -> Vec<FunnelStage> {
    let rows = [
        ("Website Visits", 10_000, 100.0),
        ("Product Views", 6_500, 65.0),
        ("Add to Cart", 2_800, 28.0),
        ("Checkout Started", 1_400, 14.0),
        ("Purchase Completed", 980, 9.8),
    ];

    rows.into_iter()
        .map(|(stage, count, share)| FunnelStage {
            stage: stage.to_string(),
            count,
            share,
        })
        .collect()
}

/// Traffic source split
#[must_use]
pub fn traffic_sources() -> Vec<TrafficSource> {
    let rows = [
        ("Organic Search", 45.0, 4_500),
        ("Direct", 30.0, 3_000),
        ("Social Media", 15.0, 1_500),
        ("Email", 7.0, 700),
        ("Paid Ads", 3.0, 300),
    ];

    rows.into_iter()
        .map(|(name, share, visitors)| TrafficSource {
            name: name.to_string(),
            share,
            visitors,
        })
        .collect()
}

/// Current site metrics
#[must_use]
pub fn realtime_metrics() -> RealtimeMetrics {
    RealtimeMetrics {
        active_users: 1247,
        session_duration: "4:32".to_string(),
        page_views_today: 8934,
        conversion_rate: 3.2,
    }
}

/// Most-viewed pages
#[must_use]
pub fn top_pages() -> Vec<PageStat> {
    let rows = [
        ("/dashboard", 2341, "3:24"),
        ("/products", 1876, "2:18"),
        ("/analytics", 1432, "4:12"),
        ("/customers", 1098, "2:45"),
        ("/reports", 867, "5:33"),
    ];

    rows.into_iter()
        .map(|(page, views, avg_time)| PageStat {
            page: page.to_string(),
            views,
            avg_time: avg_time.to_string(),
        })
        .collect()
}

/// Device class split
#[must_use]
pub fn device_breakdown() -> Vec<DeviceShare> {
    let rows = [
        ("Desktop", 58.0, 5_800),
        ("Mobile", 35.0, 3_500),
        ("Tablet", 7.0, 700),
    ];

    rows.into_iter()
        .map(|(device, share, users)| DeviceShare {
            device: device.to_string(),
            share,
            users,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_funnel_narrows_monotonically() {
        let stages = conversion_funnel();
        assert!(stages.windows(2).all(|pair| pair[0].count >= pair[1].count));
        assert_eq!(stages[0].share, 100.0);
    }

    #[test]
    fn test_traffic_shares_sum_to_whole() {
        let total: f64 = traffic_sources().iter().map(|s| s.share).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_engagement_visitors_below_views() {
        for month in engagement() {
            assert!(month.unique_visitors <= month.page_views);
        }
    }

    #[test]
    fn test_device_breakdown_shape() {
        let devices = device_breakdown();
        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].device, "Desktop");
    }
}

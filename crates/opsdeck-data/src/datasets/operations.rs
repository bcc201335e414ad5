//! Operations page datasets: production lines, efficiency and quality
//! series, utilization, and floor alerts

use super::date;
use opsdeck_core::types::{LineStatus, ProductionLine};
use serde::{Deserialize, Serialize};

/// One sample of the intraday efficiency trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencySample {
    /// Sample time ("00:00".."20:00")
    pub time: String,
    /// Overall efficiency, percent
    pub overall: f64,
    /// Assembly Line A efficiency
    pub line_a: f64,
    /// Assembly Line B efficiency
    pub line_b: f64,
    /// Packaging line efficiency
    pub packaging: f64,
}

/// Severity of a floor alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    /// Needs attention soon
    Warning,
    /// Informational
    Info,
    /// Needs attention now
    Error,
}

/// A floor alert row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorAlert {
    /// Alert identifier
    pub id: i64,
    /// Severity
    pub severity: AlertSeverity,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Relative timestamp label
    pub timestamp: String,
}

/// One month of quality metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityMonth {
    /// Month label
    pub month: String,
    /// Defect rate, percent
    pub defect_rate: f64,
    /// First-pass rate, percent
    pub pass_rate: f64,
    /// Rework rate, percent
    pub rework: f64,
}

/// Utilization of one resource class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilizationSlice {
    /// Resource name
    pub name: String,
    /// Utilization, percent
    pub value: f64,
}

/// The production lines on the floor
#[must_use]
pub fn production_lines() -> Vec<ProductionLine> {
    vec![
        ProductionLine {
            id: "LINE-001".to_string(),
            name: "Assembly Line A".to_string(),
            status: LineStatus::Running,
            efficiency: 94.2,
            output: 1247,
            target: 1300,
            last_maintenance: date(2024, 1, 10),
        },
        ProductionLine {
            id: "LINE-002".to_string(),
            name: "Assembly Line B".to_string(),
            status: LineStatus::Maintenance,
            efficiency: 0.0,
            output: 0,
            target: 1200,
            last_maintenance: date(2024, 1, 15),
        },
        ProductionLine {
            id: "LINE-003".to_string(),
            name: "Packaging Line".to_string(),
            status: LineStatus::Running,
            efficiency: 87.5,
            output: 2134,
            target: 2400,
            last_maintenance: date(2024, 1, 8),
        },
        ProductionLine {
            id: "LINE-004".to_string(),
            name: "Quality Control".to_string(),
            status: LineStatus::Running,
            efficiency: 96.8,
            output: 1987,
            target: 2000,
            last_maintenance: date(2024, 1, 12),
        },
    ]
}

/// Intraday efficiency samples
#[must_use]
pub fn efficiency_trend() -> Vec<EfficiencySample> {
    let rows = [
        ("00:00", 92.0, 94.0, 88.0, 93.0),
        ("04:00", 89.0, 91.0, 85.0, 91.0),
        ("08:00", 95.0, 97.0, 92.0, 96.0),
        ("12:00", 91.0, 93.0, 87.0, 93.0),
        ("16:00", 94.0, 96.0, 91.0, 95.0),
        ("20:00", 88.0, 90.0, 84.0, 90.0),
    ];

    rows.into_iter()
        .map(|(time, overall, line_a, line_b, packaging)| EfficiencySample {
            time: time.to_string(),
            overall,
            line_a,
            line_b,
            packaging,
        })
        .collect()
}

/// Current floor alerts
#[must_use]
pub fn floor_alerts() -> Vec<FloorAlert> {
    vec![
        FloorAlert {
            id: 1,
            severity: AlertSeverity::Warning,
            title: "Line B Maintenance Required".to_string(),
            description: "Scheduled maintenance window starting in 2 hours".to_string(),
            timestamp: "2 minutes ago".to_string(),
        },
        FloorAlert {
            id: 2,
            severity: AlertSeverity::Info,
            title: "Efficiency Target Achieved".to_string(),
            description: "Assembly Line A exceeded efficiency target by 4.2%".to_string(),
            timestamp: "15 minutes ago".to_string(),
        },
        FloorAlert {
            id: 3,
            severity: AlertSeverity::Error,
            title: "Quality Control Alert".to_string(),
            description: "Defect rate exceeded threshold on Batch #1247".to_string(),
            timestamp: "32 minutes ago".to_string(),
        },
    ]
}

/// Six months of quality metrics
#[must_use]
pub fn quality_metrics() -> Vec<QualityMonth> {
    let rows = [
        ("Jan", 2.1, 97.9, 1.2),
        ("Feb", 1.8, 98.2, 0.9),
        ("Mar", 2.3, 97.7, 1.4),
        ("Apr", 1.5, 98.5, 0.7),
        ("May", 1.9, 98.1, 1.0),
        ("Jun", 1.3, 98.7, 0.6),
    ];

    rows.into_iter()
        .map(|(month, defect_rate, pass_rate, rework)| QualityMonth {
            month: month.to_string(),
            defect_rate,
            pass_rate,
            rework,
        })
        .collect()
}

/// Resource utilization slices
#[must_use]
pub fn utilization() -> Vec<UtilizationSlice> {
    let rows = [("Equipment", 85.0), ("Labor", 92.0), ("Materials", 78.0)];

    rows.into_iter()
        .map(|(name, value)| UtilizationSlice {
            name: name.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_production_lines_shape() {
        let lines = production_lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].id, "LINE-001");
        assert_eq!(lines[1].status, LineStatus::Maintenance);
        assert_eq!(lines[1].efficiency, 0.0);
    }

    #[test]
    fn test_three_lines_are_running() {
        let running = production_lines()
            .iter()
            .filter(|line| line.is_running())
            .count();
        assert_eq!(running, 3);
    }

    #[test]
    fn test_quality_rates_are_complementary() {
        for month in quality_metrics() {
            assert!((month.defect_rate + month.pass_rate - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_alert_severity_wire_names() {
        let json = serde_json::to_string(&AlertSeverity::Warning).expect("serializes");
        assert_eq!(json, "\"warning\"");
    }
}

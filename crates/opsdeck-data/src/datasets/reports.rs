//! Reports page datasets: templates, recent output, compliance, and
//! schedules

use super::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a report template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateStatus {
    /// Generating on schedule
    Active,
    /// Being authored
    Draft,
    /// Awaiting approval
    Pending,
}

/// A report template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTemplate {
    /// Template identifier
    pub id: i64,
    /// Template name
    pub name: String,
    /// Category ("Financial", "HR", ...)
    pub category: String,
    /// Generation cadence
    pub frequency: String,
    /// Date last generated
    pub last_generated: NaiveDate,
    /// Lifecycle state
    pub status: TemplateStatus,
}

/// A recently generated report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedReport {
    /// Report name
    pub name: String,
    /// Report type
    #[serde(rename = "type")]
    pub kind: String,
    /// Author
    pub generated_by: String,
    /// Generation date
    pub date: NaiveDate,
    /// File size label
    pub size: String,
    /// View count
    pub views: i64,
}

/// Audit state of a compliance report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ComplianceState {
    /// Passing
    Compliant,
    /// Flagged for review
    #[serde(rename = "Review Required")]
    ReviewRequired,
    /// Audit underway
    #[serde(rename = "In Progress")]
    InProgress,
}

/// Priority of a compliance item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CompliancePriority {
    /// Must be handled first
    High,
    /// Normal
    Medium,
    /// Can wait
    Low,
}

/// A compliance report row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Report name
    pub name: String,
    /// Audit state
    pub status: ComplianceState,
    /// Date of the last audit
    pub last_audit: NaiveDate,
    /// Next due date
    pub next_due: NaiveDate,
    /// Priority
    pub priority: CompliancePriority,
}

/// A scheduled report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledReport {
    /// Report name
    pub name: String,
    /// Run cadence
    pub frequency: String,
    /// Next run date
    pub next_run: NaiveDate,
    /// Recipient count
    pub recipients: i64,
}

/// The report templates
#[must_use]
pub fn templates() -> Vec<ReportTemplate> {
    let rows = [
        (1, "Monthly Financial Report", "Financial", "Monthly", (2024, 1, 15), TemplateStatus::Active),
        (2, "Employee Performance Review", "HR", "Quarterly", (2024, 1, 10), TemplateStatus::Active),
        (3, "Operations Efficiency Report", "Operations", "Weekly", (2024, 1, 14), TemplateStatus::Active),
        (4, "Customer Satisfaction Survey", "Customer", "Monthly", (2024, 1, 12), TemplateStatus::Draft),
        (5, "Inventory Status Report", "Inventory", "Daily", (2024, 1, 15), TemplateStatus::Active),
        (6, "Compliance Audit Report", "Compliance", "Annually", (2024, 1, 1), TemplateStatus::Pending),
    ];

    rows.into_iter()
        .map(|(id, name, category, frequency, (y, m, d), status)| ReportTemplate {
            id,
            name: name.to_string(),
            category: category.to_string(),
            frequency: frequency.to_string(),
            last_generated: date(y, m, d),
            status,
        })
        .collect()
}

/// Recently generated reports
#[must_use]
pub fn recent_reports() -> Vec<GeneratedReport> {
    let rows = [
        ("Q4 2023 Financial Summary", "Financial", "John Doe", (2024, 1, 15), "2.4 MB", 23),
        ("December Operations Report", "Operations", "Sarah Johnson", (2024, 1, 14), "1.8 MB", 18),
        ("Year-End HR Analytics", "HR", "Mike Chen", (2024, 1, 13), "3.1 MB", 31),
        ("Customer Journey Analysis", "Customer", "Emily Rodriguez", (2024, 1, 12), "1.5 MB", 15),
        ("Supply Chain Performance", "Inventory", "David Kim", (2024, 1, 11), "2.2 MB", 12),
    ];

    rows.into_iter()
        .map(|(name, kind, generated_by, (y, m, d), size, views)| GeneratedReport {
            name: name.to_string(),
            kind: kind.to_string(),
            generated_by: generated_by.to_string(),
            date: date(y, m, d),
            size: size.to_string(),
            views,
        })
        .collect()
}

/// Compliance report rows
#[must_use]
pub fn compliance_reports() -> Vec<ComplianceReport> {
    let rows = [
        ("SOX Compliance Report", ComplianceState::Compliant, (2024, 1, 15), (2024, 4, 15), CompliancePriority::High),
        ("GDPR Data Protection", ComplianceState::Compliant, (2024, 1, 10), (2024, 7, 10), CompliancePriority::Medium),
        ("ISO 27001 Security", ComplianceState::ReviewRequired, (2024, 1, 5), (2024, 2, 5), CompliancePriority::High),
        ("Environmental Standards", ComplianceState::Compliant, (2024, 1, 1), (2024, 6, 1), CompliancePriority::Low),
        ("Financial Audit", ComplianceState::InProgress, (2023, 12, 15), (2024, 3, 15), CompliancePriority::High),
    ];

    rows.into_iter()
        .map(|(name, status, (ly, lm, ld), (ny, nm, nd), priority)| ComplianceReport {
            name: name.to_string(),
            status,
            last_audit: date(ly, lm, ld),
            next_due: date(ny, nm, nd),
            priority,
        })
        .collect()
}

/// Scheduled report runs
#[must_use]
pub fn scheduled_reports() -> Vec<ScheduledReport> {
    let rows = [
        ("Weekly Sales Summary", "Weekly", (2024, 1, 22), 5),
        ("Monthly P&L Statement", "Monthly", (2024, 2, 1), 8),
        ("Quarterly Board Report", "Quarterly", (2024, 4, 1), 12),
        ("Daily Operations Metrics", "Daily", (2024, 1, 16), 3),
    ];

    rows.into_iter()
        .map(|(name, frequency, (y, m, d), recipients)| ScheduledReport {
            name: name.to_string(),
            frequency: frequency.to_string(),
            next_run: date(y, m, d),
            recipients,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_templates_shape() {
        let all = templates();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].category, "Financial");
        assert_eq!(all[3].status, TemplateStatus::Draft);
        assert_eq!(all[5].frequency, "Annually");
    }

    #[test]
    fn test_compliance_state_wire_names_match_page_labels() {
        let json = serde_json::to_string(&ComplianceState::ReviewRequired).expect("serializes");
        assert_eq!(json, "\"Review Required\"");

        let json = serde_json::to_string(&ComplianceState::InProgress).expect("serializes");
        assert_eq!(json, "\"In Progress\"");
    }

    #[test]
    fn test_generated_report_type_field() {
        let report = &recent_reports()[0];
        let json = serde_json::to_value(report).expect("serializes");
        assert_eq!(json["type"], "Financial");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_compliance_next_due_follows_last_audit() {
        for report in compliance_reports() {
            assert!(report.next_due > report.last_audit);
        }
    }
}

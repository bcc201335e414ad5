//! Settings page datasets: workspace profile, preferences,
//! integrations, and team access (read-only payloads)

use super::date;
use chrono::NaiveDate;
use opsdeck_core::types::EmployeeStatus;
use serde::{Deserialize, Serialize};

/// The signed-in workspace profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceProfile {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Workspace role
    pub role: String,
    /// Department
    pub department: String,
    /// Short bio
    pub bio: String,
}

/// Notification channel toggles
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Email notifications
    pub email: bool,
    /// Push notifications
    pub push: bool,
    /// SMS notifications
    pub sms: bool,
    /// Report-ready notifications
    pub reports: bool,
    /// Alert notifications
    pub alerts: bool,
    /// Marketing mail
    pub marketing: bool,
}

/// Display preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Theme ("light", "dark", "system")
    pub theme: String,
    /// Interface language code
    pub language: String,
    /// IANA timezone
    pub timezone: String,
    /// Date format pattern
    pub date_format: String,
    /// Display currency code
    pub currency: String,
}

/// Connection state of an integration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationStatus {
    /// Linked and syncing
    Connected,
    /// Not linked
    Disconnected,
}

/// A third-party integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    /// Integration name
    pub name: String,
    /// What it is used for
    pub description: String,
    /// Connection state
    pub status: IntegrationStatus,
}

/// Security posture summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityOverview {
    /// Whether two-factor auth is on
    pub two_factor_enabled: bool,
    /// Date of the last password change
    pub last_password_change: NaiveDate,
    /// Currently active sessions
    pub active_sessions: i64,
}

/// One row of the login history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRecord {
    /// Device name
    pub device: String,
    /// Approximate location
    pub location: String,
    /// Login time label
    pub time: String,
    /// Whether this is the current session
    pub current: bool,
}

/// A team member with workspace access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// Member name
    pub name: String,
    /// Workspace role
    pub role: String,
    /// Department
    pub department: String,
    /// Access level label
    pub access: String,
    /// Account status
    pub status: EmployeeStatus,
}

/// The workspace profile
#[must_use]
pub fn profile() -> WorkspaceProfile {
    WorkspaceProfile {
        name: "John Doe".to_string(),
        email: "john.doe@company.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        role: "Administrator".to_string(),
        department: "IT".to_string(),
        bio: "Experienced business operations manager with 10+ years in enterprise software and analytics.".to_string(),
    }
}

/// Notification defaults
#[must_use]
pub const fn notifications() -> NotificationSettings {
    NotificationSettings {
        email: true,
        push: true,
        sms: false,
        reports: true,
        alerts: true,
        marketing: false,
    }
}

/// Display preference defaults
#[must_use]
pub fn preferences() -> Preferences {
    Preferences {
        theme: "system".to_string(),
        language: "en".to_string(),
        timezone: "America/New_York".to_string(),
        date_format: "MM/DD/YYYY".to_string(),
        currency: "USD".to_string(),
    }
}

/// Configured integrations
#[must_use]
pub fn integrations() -> Vec<Integration> {
    let rows = [
        ("Slack", "Team communication", IntegrationStatus::Connected),
        ("Google Workspace", "Email and documents", IntegrationStatus::Connected),
        ("Salesforce", "Customer relationship management", IntegrationStatus::Disconnected),
        ("Microsoft Teams", "Video conferencing", IntegrationStatus::Connected),
        ("Zoom", "Video meetings", IntegrationStatus::Connected),
        ("Jira", "Project management", IntegrationStatus::Disconnected),
    ];

    rows.into_iter()
        .map(|(name, description, status)| Integration {
            name: name.to_string(),
            description: description.to_string(),
            status,
        })
        .collect()
}

/// Security posture
#[must_use]
pub fn security() -> SecurityOverview {
    SecurityOverview {
        two_factor_enabled: true,
        last_password_change: date(2024, 1, 1),
        active_sessions: 3,
    }
}

/// Recent logins
#[must_use]
pub fn login_history() -> Vec<LoginRecord> {
    let rows = [
        ("MacBook Pro", "New York, NY", "2024-01-15 09:30 AM", true),
        ("iPhone", "New York, NY", "2024-01-15 08:15 AM", false),
        ("Chrome Browser", "Boston, MA", "2024-01-14 02:45 PM", false),
    ];

    rows.into_iter()
        .map(|(device, location, time, current)| LoginRecord {
            device: device.to_string(),
            location: location.to_string(),
            time: time.to_string(),
            current,
        })
        .collect()
}

/// Team members with workspace access
#[must_use]
pub fn team_members() -> Vec<TeamMember> {
    let rows = [
        ("Sarah Johnson", "Manager", "Engineering", "Full Access", EmployeeStatus::Active),
        ("Michael Chen", "Analyst", "Finance", "Read Only", EmployeeStatus::Active),
        ("Emily Rodriguez", "Coordinator", "Sales", "Limited", EmployeeStatus::Inactive),
        ("David Kim", "Specialist", "Operations", "Full Access", EmployeeStatus::Active),
    ];

    rows.into_iter()
        .map(|(name, role, department, access, status)| TeamMember {
            name: name.to_string(),
            role: role.to_string(),
            department: department.to_string(),
            access: access.to_string(),
            status,
        })
        .collect()
}

//! Settings page endpoint (read-only; nothing here mutates)

use crate::state::AppState;
use axum::{extract::State, response::Json};
use opsdeck_data::datasets::settings::{
    Integration, LoginRecord, NotificationSettings, Preferences, SecurityOverview, TeamMember,
    WorkspaceProfile,
};
use serde::Serialize;
use std::sync::Arc;

/// Settings page payload
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// Workspace profile
    pub profile: WorkspaceProfile,

    /// Notification defaults
    pub notifications: NotificationSettings,

    /// Display preferences
    pub preferences: Preferences,

    /// Configured integrations
    pub integrations: Vec<Integration>,

    /// Security posture
    pub security: SecurityOverview,

    /// Recent logins
    pub login_history: Vec<LoginRecord>,

    /// Team members with access
    pub team_members: Vec<TeamMember>,
}

/// Settings page data
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<SettingsResponse> {
    let store = &state.store;

    Json(SettingsResponse {
        profile: store.profile.clone(),
        notifications: store.notifications,
        preferences: store.preferences.clone(),
        integrations: store.integrations.clone(),
        security: store.security.clone(),
        login_history: store.login_history.clone(),
        team_members: store.team_members.clone(),
    })
}

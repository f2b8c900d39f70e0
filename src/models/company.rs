//! Company setup types collected by the onboarding wizard.

/// Industry options offered during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Retail,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 5] = [
        Industry::Technology,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Retail,
        Industry::Other,
    ];

    /// Wire value sent to the setup endpoint (also the display label).
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Finance => "Finance",
            Industry::Healthcare => "Healthcare",
            Industry::Retail => "Retail",
            Industry::Other => "Other",
        }
    }
}

/// Operating region options offered during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
    Other,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::NorthAmerica, Region::Europe, Region::AsiaPacific, Region::Other];

    /// Wire value sent to the setup endpoint (also the display label).
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia Pacific",
            Region::Other => "Other",
        }
    }
}

/// Administrator role options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    Ceo,
    Cto,
    HrDirector,
    Manager,
    Other,
}

impl AdminRole {
    pub const ALL: [AdminRole; 5] = [
        AdminRole::Ceo,
        AdminRole::Cto,
        AdminRole::HrDirector,
        AdminRole::Manager,
        AdminRole::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Ceo => "CEO",
            AdminRole::Cto => "CTO",
            AdminRole::HrDirector => "HR Director",
            AdminRole::Manager => "Manager",
            AdminRole::Other => "Other",
        }
    }
}

/// Key metrics the workspace can track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    EngagementScore,
    DeiIndex,
    RetentionRate,
    Satisfaction,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::EngagementScore,
        Metric::DeiIndex,
        Metric::RetentionRate,
        Metric::Satisfaction,
    ];

    /// Wire value for repeated `selectedMetrics` parts (also the card label).
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::EngagementScore => "Engagement Score",
            Metric::DeiIndex => "DEI Index",
            Metric::RetentionRate => "Retention Rate",
            Metric::Satisfaction => "Satisfaction",
        }
    }
}

/// Workspace preference toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub notifications: bool,
    pub analytics: bool,
    pub auto_invite: bool,
}

/// Preference selector for `toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    Notifications,
    Analytics,
    AutoInvite,
}

impl Preferences {
    /// Flip one toggle in place.
    pub fn toggle(&mut self, key: PreferenceKey) {
        match key {
            PreferenceKey::Notifications => self.notifications = !self.notifications,
            PreferenceKey::Analytics => self.analytics = !self.analytics,
            PreferenceKey::AutoInvite => self.auto_invite = !self.auto_invite,
        }
    }

    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::Notifications => self.notifications,
            PreferenceKey::Analytics => self.analytics,
            PreferenceKey::AutoInvite => self.auto_invite,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            analytics: true,
            auto_invite: false,
        }
    }
}

/// A file selected in the UI, held in memory until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    /// Content type for the multipart file part, derived from the extension.
    pub fn mime(&self) -> &'static str {
        let lower = self.file_name.to_lowercase();
        if lower.ends_with(".csv") {
            "text/csv"
        } else if lower.ends_with(".xlsx") {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        } else if lower.ends_with(".png") {
            "image/png"
        } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            "image/jpeg"
        } else {
            "application/octet-stream"
        }
    }
}

/// Snapshot of the wizard state handed to the API client for submission.
///
/// The company logo and admin role are collected by the wizard but the
/// setup endpoint takes no part for them, so they are not carried here.
#[derive(Debug, Clone, Default)]
pub struct CompanySetupRequest {
    pub company_name: String,
    pub industry: Option<Industry>,
    pub region: Option<Region>,
    pub admin_name: String,
    pub admin_title: String,
    pub admin_email: String,
    pub departments: Vec<String>,
    pub preferences: Preferences,
    pub selected_metrics: Vec<Metric>,
    pub employee_file: Option<FileAttachment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_defaults() {
        let prefs = Preferences::default();
        assert!(prefs.notifications);
        assert!(prefs.analytics);
        assert!(!prefs.auto_invite);
    }

    #[test]
    fn test_preference_toggle_pair_is_identity() {
        let mut prefs = Preferences::default();
        let before = prefs;

        prefs.toggle(PreferenceKey::Notifications);
        assert!(!prefs.notifications);
        prefs.toggle(PreferenceKey::Notifications);
        assert_eq!(prefs, before);
    }

    #[test]
    fn test_metric_wire_labels() {
        assert_eq!(Metric::DeiIndex.as_str(), "DEI Index");
        assert_eq!(Metric::EngagementScore.as_str(), "Engagement Score");
    }

    #[test]
    fn test_region_wire_labels_have_spaces() {
        assert_eq!(Region::NorthAmerica.as_str(), "North America");
        assert_eq!(Region::AsiaPacific.as_str(), "Asia Pacific");
    }

    #[test]
    fn test_attachment_mime_from_extension() {
        let csv = FileAttachment {
            file_name: "staff.CSV".to_string(),
            bytes: vec![],
        };
        assert_eq!(csv.mime(), "text/csv");

        let unknown = FileAttachment {
            file_name: "staff.bin".to_string(),
            bytes: vec![],
        };
        assert_eq!(unknown.mime(), "application/octet-stream");
    }
}

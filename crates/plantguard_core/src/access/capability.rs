//! Role capabilities for report workflows.
//!
//! Capabilities gate use-case services and front ends. The record store
//! itself never checks them.

use crate::model::record::ParseEnumError;
use crate::model::user::Role;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Action a role may be allowed to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Browse diseases, pests and remedies.
    ViewCatalog,
    /// Submit new reports.
    SubmitReports,
    /// Approve or reject pending reports.
    ReviewReports,
    /// Change application settings.
    ManageSettings,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Self::ViewCatalog,
        Self::SubmitReports,
        Self::ReviewReports,
        Self::ManageSettings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ViewCatalog => "view_catalog",
            Self::SubmitReports => "submit_reports",
            Self::ReviewReports => "review_reports",
            Self::ManageSettings => "manage_settings",
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::ViewCatalog => "Browse diseases, pests and natural remedies.",
            Self::SubmitReports => "Submit new disease, pest and remedy reports.",
            Self::ReviewReports => "Approve or reject pending reports.",
            Self::ManageSettings => "Change application settings.",
        }
    }

    /// Roles granted this capability.
    pub fn granted_to(self) -> &'static [Role] {
        match self {
            Self::ViewCatalog => &[Role::Admin, Role::Approver, Role::DataEntry, Role::BasicUser],
            Self::SubmitReports => &[Role::Admin, Role::DataEntry],
            Self::ReviewReports => &[Role::Admin, Role::Approver],
            Self::ManageSettings => &[Role::Admin],
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "view_catalog" => Ok(Self::ViewCatalog),
            "submit_reports" => Ok(Self::SubmitReports),
            "review_reports" => Ok(Self::ReviewReports),
            "manage_settings" => Ok(Self::ManageSettings),
            other => Err(ParseEnumError::new("capability", other)),
        }
    }
}

impl Role {
    pub fn has(self, capability: Capability) -> bool {
        capability.granted_to().contains(&self)
    }

    /// Capabilities of this role in declaration order.
    pub fn capabilities(self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.has(*capability))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Capability;
    use crate::model::user::Role;

    #[test]
    fn review_is_limited_to_admin_and_approver() {
        assert!(Role::Admin.has(Capability::ReviewReports));
        assert!(Role::Approver.has(Capability::ReviewReports));
        assert!(!Role::DataEntry.has(Capability::ReviewReports));
        assert!(!Role::BasicUser.has(Capability::ReviewReports));
    }

    #[test]
    fn submit_is_limited_to_admin_and_data_entry() {
        assert!(Role::Admin.has(Capability::SubmitReports));
        assert!(Role::DataEntry.has(Capability::SubmitReports));
        assert!(!Role::Approver.has(Capability::SubmitReports));
    }

    #[test]
    fn basic_user_only_views() {
        assert_eq!(Role::BasicUser.capabilities(), vec![Capability::ViewCatalog]);
        assert_eq!(Role::Admin.capabilities(), Capability::ALL.to_vec());
    }

    #[test]
    fn capability_round_trips_through_manifest_string() {
        for capability in Capability::ALL {
            assert_eq!(capability.as_str().parse::<Capability>().unwrap(), capability);
        }
        assert!("delete_everything".parse::<Capability>().is_err());
    }
}

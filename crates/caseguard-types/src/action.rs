use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed capability enumeration.
///
/// New actions require an explicit new rule in the engine; there is no
/// default-allow or default-deny fallthrough. The string tags only survive at
/// the UI boundary, where [`Action::parse`] turns them into variants (or into
/// the undefined-policy denial when unrecognized).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Action {
    #[serde(rename = "case:create")]
    CaseCreate,
    #[serde(rename = "case:view")]
    CaseView,
    #[serde(rename = "case:edit")]
    CaseEdit,
    #[serde(rename = "case:delete")]
    CaseDelete,
    #[serde(rename = "case:approve")]
    CaseApprove,
    #[serde(rename = "case:reject")]
    CaseReject,
    #[serde(rename = "case:qr-display")]
    CaseQrDisplay,
    #[serde(rename = "case:check-in")]
    CaseCheckIn,
    #[serde(rename = "case:report")]
    CaseReport,
    #[serde(rename = "admin:policy_manage")]
    AdminPolicyManage,
    #[serde(rename = "admin:user_manage")]
    AdminUserManage,
}

impl Action {
    /// Every action, in declaration order. Capability matrices iterate this.
    pub const ALL: [Action; 11] = [
        Action::CaseCreate,
        Action::CaseView,
        Action::CaseEdit,
        Action::CaseDelete,
        Action::CaseApprove,
        Action::CaseReject,
        Action::CaseQrDisplay,
        Action::CaseCheckIn,
        Action::CaseReport,
        Action::AdminPolicyManage,
        Action::AdminUserManage,
    ];

    /// Case-scoped actions: the subset rendered on a case's action bar.
    pub const CASE_SCOPED: [Action; 8] = [
        Action::CaseView,
        Action::CaseEdit,
        Action::CaseDelete,
        Action::CaseApprove,
        Action::CaseReject,
        Action::CaseQrDisplay,
        Action::CaseCheckIn,
        Action::CaseReport,
    ];

    pub fn as_tag(self) -> &'static str {
        match self {
            Action::CaseCreate => ids::ACTION_CASE_CREATE,
            Action::CaseView => ids::ACTION_CASE_VIEW,
            Action::CaseEdit => ids::ACTION_CASE_EDIT,
            Action::CaseDelete => ids::ACTION_CASE_DELETE,
            Action::CaseApprove => ids::ACTION_CASE_APPROVE,
            Action::CaseReject => ids::ACTION_CASE_REJECT,
            Action::CaseQrDisplay => ids::ACTION_CASE_QR_DISPLAY,
            Action::CaseCheckIn => ids::ACTION_CASE_CHECK_IN,
            Action::CaseReport => ids::ACTION_CASE_REPORT,
            Action::AdminPolicyManage => ids::ACTION_ADMIN_POLICY_MANAGE,
            Action::AdminUserManage => ids::ACTION_ADMIN_USER_MANAGE,
        }
    }

    /// Residual dynamic dispatch at the UI boundary. Unknown tags are not an
    /// error here; the engine maps `None` to the undefined-policy denial.
    pub fn parse(tag: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.as_tag() == tag)
    }

    /// Actions whose rules dereference case fields. Invoking one without a
    /// resource is a caller bug that must degrade to a denial, never a panic.
    ///
    /// `case:approve`/`case:reject` are excluded on purpose: the
    /// separation-of-duties denial fires for non-admins without touching the
    /// resource at all.
    pub fn requires_resource(self) -> bool {
        matches!(
            self,
            Action::CaseEdit
                | Action::CaseDelete
                | Action::CaseQrDisplay
                | Action::CaseCheckIn
                | Action::CaseReport
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_tag() {
        for action in Action::ALL {
            assert_eq!(Action::parse(action.as_tag()), Some(action));
        }
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(Action::parse("bogus:action"), None);
        assert_eq!(Action::parse(""), None);
        assert_eq!(Action::parse("case:approve "), None);
    }

    #[test]
    fn serde_uses_tags() {
        let json = serde_json::to_string(&Action::CaseQrDisplay).unwrap();
        assert_eq!(json, "\"case:qr-display\"");
        let back: Action = serde_json::from_str("\"admin:user_manage\"").unwrap();
        assert_eq!(back, Action::AdminUserManage);
    }

    #[test]
    fn case_scoped_excludes_create_and_admin() {
        assert!(!Action::CASE_SCOPED.contains(&Action::CaseCreate));
        assert!(!Action::CASE_SCOPED.contains(&Action::AdminPolicyManage));
        assert!(!Action::CASE_SCOPED.contains(&Action::AdminUserManage));
    }
}

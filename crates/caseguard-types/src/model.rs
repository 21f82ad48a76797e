use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Closed role set. There is no structural hierarchy: ADMIN is special-cased
/// per rule, not "USER plus more".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Guest => "GUEST",
        };
        f.write_str(s)
    }
}

/// Opaque subject identifier. May be empty for anonymous guest flows, never
/// absent.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The authenticated actor requesting a permission. Constructed by the caller
/// at decision time; the engine never looks up an ambient "current user".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Subject {
    pub role: Role,
    pub id: SubjectId,
}

impl Subject {
    pub fn new(role: Role, id: impl AsRef<str>) -> Self {
        Self {
            role,
            id: SubjectId::new(id),
        }
    }
}

/// Opaque, stable case identifier.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case lifecycle state.
///
/// The transition graph lives with the case service, not the engine; the
/// engine only reads `status`. `can_transition` exists so tests can keep the
/// rule table consistent with the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseStatus {
    Draft,
    PendingApproval,
    Approved,
    Rejected,
    InProgress,
    Completed,
    Cancelled,
}

impl CaseStatus {
    /// REJECTED, COMPLETED, and CANCELLED admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            CaseStatus::Rejected | CaseStatus::Completed | CaseStatus::Cancelled
        )
    }

    /// The lifecycle graph enforced by the case service:
    /// DRAFT -> PENDING_APPROVAL -> {APPROVED, REJECTED};
    /// APPROVED -> IN_PROGRESS -> COMPLETED; any non-terminal -> CANCELLED.
    pub fn can_transition(self, to: CaseStatus) -> bool {
        if to == CaseStatus::Cancelled {
            return !self.is_terminal();
        }
        matches!(
            (self, to),
            (CaseStatus::Draft, CaseStatus::PendingApproval)
                | (CaseStatus::PendingApproval, CaseStatus::Approved)
                | (CaseStatus::PendingApproval, CaseStatus::Rejected)
                | (CaseStatus::Approved, CaseStatus::InProgress)
                | (CaseStatus::InProgress, CaseStatus::Completed)
        )
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaseStatus::Draft => "DRAFT",
            CaseStatus::PendingApproval => "PENDING_APPROVAL",
            CaseStatus::Approved => "APPROVED",
            CaseStatus::Rejected => "REJECTED",
            CaseStatus::InProgress => "IN_PROGRESS",
            CaseStatus::Completed => "COMPLETED",
            CaseStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// Informational only. Decisions never consult it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

/// Snapshot of the activity case being acted upon.
///
/// The engine reads this by immutable reference and never stores or mutates
/// it. Freshness is the caller's contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Case {
    pub id: CaseId,
    pub status: CaseStatus,
    /// Owner, set at creation and never reassigned.
    pub creator_id: SubjectId,
    /// Collaborators with owner-equivalent rights for a subset of actions.
    /// Independent of ownership.
    #[serde(default)]
    pub members: BTreeSet<SubjectId>,
    #[serde(default)]
    pub risk_level: RiskLevel,
}

impl Case {
    pub fn is_creator(&self, subject: &SubjectId) -> bool {
        &self.creator_id == subject
    }

    pub fn is_member(&self, subject: &SubjectId) -> bool {
        self.members.contains(subject)
    }

    /// Creator or member: the eligibility basis for edit and QR display.
    pub fn has_owner_rights(&self, subject: &SubjectId) -> bool {
        self.is_creator(subject) || self.is_member(subject)
    }
}

/// The engine's structured verdict.
///
/// `code` and `reason` are populated exactly when `allowed` is false.
/// `required_role` is advisory: it names the role that would satisfy the rule
/// nominally, while ownership or the admin bypass may satisfy it elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Decision {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_role: Option<Role>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            code: None,
            reason: None,
            required_role: None,
        }
    }

    pub fn deny(code: &str, reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            code: Some(code.to_string()),
            reason: Some(reason.into()),
            required_role: None,
        }
    }

    pub fn deny_requiring(code: &str, reason: impl Into<String>, role: Role) -> Self {
        Self {
            required_role: Some(role),
            ..Self::deny(code, reason)
        }
    }
}

//! Stable identifiers for actions and deny codes.
//!
//! Action tags are colon-namespaced capability strings as they arrive from the
//! UI boundary. Deny codes are short snake_case discriminators, one per denial
//! category, so tests and gating callers never match on reason prose.

// Action tags
pub const ACTION_CASE_CREATE: &str = "case:create";
pub const ACTION_CASE_VIEW: &str = "case:view";
pub const ACTION_CASE_EDIT: &str = "case:edit";
pub const ACTION_CASE_DELETE: &str = "case:delete";
pub const ACTION_CASE_APPROVE: &str = "case:approve";
pub const ACTION_CASE_REJECT: &str = "case:reject";
pub const ACTION_CASE_QR_DISPLAY: &str = "case:qr-display";
pub const ACTION_CASE_CHECK_IN: &str = "case:check-in";
pub const ACTION_CASE_REPORT: &str = "case:report";
pub const ACTION_ADMIN_POLICY_MANAGE: &str = "admin:policy_manage";
pub const ACTION_ADMIN_USER_MANAGE: &str = "admin:user_manage";

// Deny codes
pub const CODE_ROLE_INSUFFICIENT: &str = "role_insufficient";
pub const CODE_REJECTED_IMMUTABLE: &str = "rejected_immutable";
pub const CODE_GUEST_RESTRICTED: &str = "guest_restricted";
pub const CODE_NOT_OWNER_OR_MEMBER: &str = "not_owner_or_member";
pub const CODE_STATUS_INELIGIBLE: &str = "status_ineligible";
pub const CODE_RESOURCE_REQUIRED: &str = "resource_required";
pub const CODE_UNDEFINED_POLICY: &str = "undefined_policy";

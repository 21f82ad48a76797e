//! Explain registry for action tags and deny codes.
//!
//! Maps each identifier to a human-readable explanation of the governing rule
//! and what a denied caller can do about it.

use crate::ids;

/// Explanation entry for an action tag or deny code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short name of the action or denial category.
    pub title: &'static str,
    /// The rule as the policy defines it.
    pub description: &'static str,
    /// What a denied caller can do (always an out-of-band step; denials are
    /// never retried automatically).
    pub guidance: &'static str,
}

/// Look up an explanation by action tag or deny code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Action tags
        ids::ACTION_CASE_CREATE => Some(explain_create()),
        ids::ACTION_CASE_VIEW => Some(explain_view()),
        ids::ACTION_CASE_EDIT => Some(explain_edit()),
        ids::ACTION_CASE_DELETE => Some(explain_delete()),
        ids::ACTION_CASE_APPROVE => Some(explain_approve()),
        ids::ACTION_CASE_REJECT => Some(explain_reject()),
        ids::ACTION_CASE_QR_DISPLAY => Some(explain_qr_display()),
        ids::ACTION_CASE_CHECK_IN => Some(explain_check_in()),
        ids::ACTION_CASE_REPORT => Some(explain_report()),
        ids::ACTION_ADMIN_POLICY_MANAGE => Some(explain_admin_policy_manage()),
        ids::ACTION_ADMIN_USER_MANAGE => Some(explain_admin_user_manage()),

        // Deny codes
        ids::CODE_ROLE_INSUFFICIENT => Some(explain_role_insufficient()),
        ids::CODE_REJECTED_IMMUTABLE => Some(explain_rejected_immutable()),
        ids::CODE_GUEST_RESTRICTED => Some(explain_guest_restricted()),
        ids::CODE_NOT_OWNER_OR_MEMBER => Some(explain_not_owner_or_member()),
        ids::CODE_STATUS_INELIGIBLE => Some(explain_status_ineligible()),
        ids::CODE_RESOURCE_REQUIRED => Some(explain_resource_required()),
        ids::CODE_UNDEFINED_POLICY => Some(explain_undefined_policy()),

        _ => None,
    }
}

/// List all known action tags.
pub fn all_action_tags() -> &'static [&'static str] {
    &[
        ids::ACTION_CASE_CREATE,
        ids::ACTION_CASE_VIEW,
        ids::ACTION_CASE_EDIT,
        ids::ACTION_CASE_DELETE,
        ids::ACTION_CASE_APPROVE,
        ids::ACTION_CASE_REJECT,
        ids::ACTION_CASE_QR_DISPLAY,
        ids::ACTION_CASE_CHECK_IN,
        ids::ACTION_CASE_REPORT,
        ids::ACTION_ADMIN_POLICY_MANAGE,
        ids::ACTION_ADMIN_USER_MANAGE,
    ]
}

/// List all known deny codes.
pub fn all_deny_codes() -> &'static [&'static str] {
    &[
        ids::CODE_ROLE_INSUFFICIENT,
        ids::CODE_REJECTED_IMMUTABLE,
        ids::CODE_GUEST_RESTRICTED,
        ids::CODE_NOT_OWNER_OR_MEMBER,
        ids::CODE_STATUS_INELIGIBLE,
        ids::CODE_RESOURCE_REQUIRED,
        ids::CODE_UNDEFINED_POLICY,
    ]
}

// --- Action explanations ---

fn explain_create() -> Explanation {
    Explanation {
        title: "Create Case",
        description: "\
Opens a new activity case in DRAFT status. Resource-independent: the rule is
evaluated with no case snapshot. Allowed for administrators and users; guests
cannot create cases.",
        guidance: "Guests should request a user account from an administrator.",
    }
}

fn explain_view() -> Explanation {
    Explanation {
        title: "View Case",
        description: "\
Read access to a case. Authenticated users have global read visibility.
Guests may view any case except drafts: a DRAFT case is work-in-progress and
is never shown outside its owning group.",
        guidance: "\
Guests denied on a draft should wait until the case is submitted, or ask the
creator to share it after submission.",
    }
}

fn explain_edit() -> Explanation {
    Explanation {
        title: "Edit Case",
        description: "\
Mutates case content. Requires creator or member standing, and the case must
still be in DRAFT. Although the ownership rule nominally also covers REJECTED,
the rejected-immutability rule takes precedence and always wins: a rejected
case is archived for audit purposes and can never be edited, not even by its
creator.",
        guidance: "\
For a rejected case, create a new case based on the archived record. For a
submitted case, ask an administrator to reject it back if a correction is
genuinely needed.",
    }
}

fn explain_delete() -> Explanation {
    Explanation {
        title: "Delete Case",
        description: "\
Removes a case entirely. Only the creator may delete, and only while the case
is still a DRAFT. Once submitted, the case is part of the governance record.",
        guidance: "Cancel a submitted case instead of deleting it.",
    }
}

fn explain_approve() -> Explanation {
    Explanation {
        title: "Approve Case",
        description: "\
Transitions a pending case to APPROVED. Administrator-only: this encodes
separation of duties, so a creator can never approve their own submission.
Non-admin denials carry `required_role: ADMIN`.",
        guidance: "Contact an administrator to process the approval queue.",
    }
}

fn explain_reject() -> Explanation {
    Explanation {
        title: "Reject Case",
        description: "\
Transitions a pending case to REJECTED, a terminal state. Administrator-only,
under the same separation-of-duties rule as approval.",
        guidance: "Contact an administrator to process the approval queue.",
    }
}

fn explain_qr_display() -> Explanation {
    Explanation {
        title: "Display Check-in QR Code",
        description: "\
Shows the attendance QR code for an activity. Restricted to the case creator,
assigned members (managers), or administrators, and only while the activity is
IN_PROGRESS. The QR code grants check-in to whoever scans it, so display is
held to the owning group.",
        guidance: "\
Ask the creator to add you as a member, or have a member present the code at
the venue.",
    }
}

fn explain_check_in() -> Explanation {
    Explanation {
        title: "Check In",
        description: "\
Records attendance against an activity. Users may check in while the activity
is IN_PROGRESS or already APPROVED (early arrival); no ownership is required.
Guests may check in only while the activity is IN_PROGRESS.",
        guidance: "Wait until the activity window opens.",
    }
}

fn explain_report() -> Explanation {
    Explanation {
        title: "View Attendance Report",
        description: "\
Reads the attendance/outcome report for an activity. Available once the
activity starts: IN_PROGRESS or COMPLETED.",
        guidance: "Reports become available when the activity starts.",
    }
}

fn explain_admin_policy_manage() -> Explanation {
    Explanation {
        title: "Manage Policies",
        description: "Administrator console access for policy management. Resource-independent.",
        guidance: "Requires the ADMIN role.",
    }
}

fn explain_admin_user_manage() -> Explanation {
    Explanation {
        title: "Manage Users",
        description: "Administrator console access for user management. Resource-independent.",
        guidance: "Requires the ADMIN role.",
    }
}

// --- Deny code explanations ---

fn explain_role_insufficient() -> Explanation {
    Explanation {
        title: "Role Insufficient",
        description: "\
The action is gated on a role the subject does not hold. The decision's
`required_role` names the role that would satisfy the rule nominally; the
admin bypass may also satisfy rules that nominally require ownership.",
        guidance: "Contact an administrator; roles are assigned out of band.",
    }
}

fn explain_rejected_immutable() -> Explanation {
    Explanation {
        title: "Rejected Case Is Immutable",
        description: "\
The case is REJECTED, and rejected cases are archived for audit purposes.
This rule is evaluated before the ownership-based edit rule and wins for
every non-admin subject, including the creator.",
        guidance: "Create a new case based on the archived record.",
    }
}

fn explain_guest_restricted() -> Explanation {
    Explanation {
        title: "Guest Access Restricted",
        description: "\
Guests hold a blanket restriction: they may view non-draft cases and check in
to in-progress activities, and nothing else.",
        guidance: "Request a user account, or contact the activity owner.",
    }
}

fn explain_not_owner_or_member() -> Explanation {
    Explanation {
        title: "Not Owner or Member",
        description: "\
The action requires creator or member standing on the case, and the subject
has neither.",
        guidance: "Ask the case creator to add you as a member.",
    }
}

fn explain_status_ineligible() -> Explanation {
    Explanation {
        title: "Status Ineligible",
        description: "\
The case's lifecycle status does not permit this action. Each action is only
meaningful in a slice of the lifecycle: editing pre-submission, checking in
during or just before the activity, reporting once it starts.",
        guidance: "\
The denial reason names the offending status. Wait for the lifecycle to
advance, or contact an administrator if the case is stuck.",
    }
}

fn explain_resource_required() -> Explanation {
    Explanation {
        title: "Resource Required",
        description: "\
A resource-dependent action was evaluated without a case snapshot. This is a
caller bug; the engine degrades to a denial rather than failing.",
        guidance: "Pass the case snapshot the action is being evaluated against.",
    }
}

fn explain_undefined_policy() -> Explanation {
    Explanation {
        title: "Undefined Policy",
        description: "\
The requested action tag is not in the closed action set, so no rule covers
it. Unknown actions always resolve to a denial, never an error: the gating
caller must always receive a decision to render against.",
        guidance: "\
Check the tag for typos against the known action list. New capabilities need
an explicit rule before they can be granted to anyone.",
    }
}

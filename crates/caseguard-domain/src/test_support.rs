use caseguard_types::{Case, CaseId, CaseStatus, RiskLevel, Role, Subject, SubjectId};

pub fn admin() -> Subject {
    Subject::new(Role::Admin, "admin")
}

pub fn user(id: &str) -> Subject {
    Subject::new(Role::User, id)
}

pub fn guest() -> Subject {
    Subject::new(Role::Guest, "")
}

pub fn case(status: CaseStatus, creator: &str, members: &[&str]) -> Case {
    Case {
        id: CaseId::new("C-1"),
        status,
        creator_id: SubjectId::new(creator),
        members: members.iter().map(SubjectId::new).collect(),
        risk_level: RiskLevel::Low,
    }
}

pub fn case_with_status(status: CaseStatus) -> Case {
    case(status, "creator", &[])
}

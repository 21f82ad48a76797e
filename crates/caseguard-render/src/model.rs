#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDecision {
    pub allowed: bool,
    pub code: Option<String>,
    pub reason: Option<String>,
    pub required_role: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableEntry {
    pub action: String,
    pub decision: RenderableDecision,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableMatrix {
    pub subject_id: String,
    pub subject_role: String,
    pub case_id: String,
    pub case_status: String,
    pub entries: Vec<RenderableEntry>,
}

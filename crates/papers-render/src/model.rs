#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableDecision {
    Accept,
    Reject,
    Secondary,
    Quarantine,
}

impl RenderableDecision {
    pub fn label(self) -> &'static str {
        match self {
            RenderableDecision::Accept => "Accept",
            RenderableDecision::Reject => "Reject",
            RenderableDecision::Secondary => "Secondary",
            RenderableDecision::Quarantine => "Quarantine",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDetermination {
    pub index: usize,
    pub decision: RenderableDecision,
    pub rule_id: String,
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableSummary {
    pub accept: u32,
    pub reject: u32,
    pub secondary: u32,
    pub quarantine: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub profile: String,
    pub home_country: String,
    pub as_of: Option<String>,
    pub travelers_evaluated: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableError {
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub summary: RenderableSummary,
    pub determinations: Vec<RenderableDetermination>,
    pub error: Option<RenderableError>,
    pub data: RenderableData,
}

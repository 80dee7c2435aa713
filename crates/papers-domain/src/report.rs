use papers_types::{Decision, DecisionCounts, Determination};

#[derive(Clone, Debug)]
pub struct DomainReport {
    /// One entry per traveler, in input order.
    pub determinations: Vec<Determination>,
    pub counts: DecisionCounts,
}

impl DomainReport {
    pub fn from_determinations(determinations: Vec<Determination>) -> Self {
        let counts = DecisionCounts::from_decisions(determinations.iter().map(|d| &d.decision));
        Self {
            determinations,
            counts,
        }
    }

    /// The plain outcome sequence.
    pub fn decisions(&self) -> Vec<Decision> {
        self.determinations.iter().map(|d| d.decision).collect()
    }

    /// Saturates at `u32::MAX`.
    pub fn travelers_evaluated(&self) -> u32 {
        saturating_count(self.determinations.len())
    }
}

fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

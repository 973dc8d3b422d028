//! Knowledge constellation: stage selection and hover path highlighting.
//!
//! Two independent pieces of state live here:
//!
//! - **Selection** is persistent. At most one stage is active, and with it
//!   exactly one highlighted node and one visible detail panel.
//! - **Hover** is a transient overlay. Entering a node lights the edges in
//!   its adjacency list; leaving clears them. Hover never touches the
//!   selection and vice versa.

use crate::types::StageId;

/// Static description of a stage, used to render nodes and panels.
#[derive(Debug, Clone, PartialEq)]
pub struct StageInfo {
    pub id: StageId,
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

/// The stages the site ships with, in node order.
pub fn builtin_stages() -> Vec<StageInfo> {
    vec![
        StageInfo {
            id: StageId::new("awareness"),
            title: "Awareness",
            summary: "Recognise how AI systems fail and who benefits when they do.",
            points: &["Threat taxonomies", "Incident case studies", "Attack surface mapping"],
        },
        StageInfo {
            id: StageId::new("understanding"),
            title: "Understanding",
            summary: "Learn the mechanics behind adversarial behaviour.",
            points: &["Prompt injection", "Data poisoning", "Model extraction"],
        },
        StageInfo {
            id: StageId::new("application"),
            title: "Application",
            summary: "Put defences and evaluations into practice.",
            points: &["Runtime guardrails", "Red-team exercises", "Evaluation harnesses"],
        },
        StageInfo {
            id: StageId::new("mastery"),
            title: "Mastery",
            summary: "Design systems that stay robust as threats evolve.",
            points: &["Reference architectures", "Supply chain provenance", "Continuous assurance"],
        },
    ]
}

/// Entry animation state of the visible panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// Just shown, still at its offset start position
    Entering,
    Settled,
}

#[derive(Debug, Clone)]
pub struct Constellation {
    stages: Vec<StageId>,
    edge_count: usize,
    adjacency: Vec<Vec<usize>>,
    hovered: Option<usize>,
    active: Option<usize>,
    phase: PanelPhase,
    auto_select_spent: bool,
}

impl Constellation {
    /// Build with the default adjacency: node `i` lights every edge `j`
    /// with the same parity.
    pub fn new(stages: Vec<StageId>, edge_count: usize) -> Self {
        let adjacency = (0..stages.len())
            .map(|i| (0..edge_count).filter(|j| j % 2 == i % 2).collect())
            .collect();
        Self::with_adjacency(stages, edge_count, adjacency)
    }

    /// Build with an explicit adjacency list. Edge indices outside
    /// `0..edge_count` are dropped; missing rows mean "no edges".
    pub fn with_adjacency(stages: Vec<StageId>, edge_count: usize, adjacency: Vec<Vec<usize>>) -> Self {
        let mut adjacency: Vec<Vec<usize>> = adjacency
            .into_iter()
            .map(|edges| edges.into_iter().filter(|&e| e < edge_count).collect())
            .collect();
        adjacency.resize(stages.len(), Vec::new());
        Self {
            stages,
            edge_count,
            adjacency,
            hovered: None,
            active: None,
            phase: PanelPhase::Settled,
            auto_select_spent: false,
        }
    }

    pub fn stages(&self) -> &[StageId] {
        &self.stages
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn active_stage(&self) -> Option<&StageId> {
        self.active.map(|i| &self.stages[i])
    }

    pub fn index_of(&self, stage: &StageId) -> Option<usize> {
        self.stages.iter().position(|s| s == stage)
    }

    /// Select a stage by id. Unknown ids are ignored. Re-selecting the
    /// active stage replays its entry animation.
    pub fn select(&mut self, stage: &StageId) -> Option<StageId> {
        let index = self.index_of(stage)?;
        self.select_index(index)
    }

    pub fn select_index(&mut self, index: usize) -> Option<StageId> {
        let stage = self.stages.get(index)?.clone();
        self.active = Some(index);
        self.phase = PanelPhase::Entering;
        // Any explicit choice supersedes the deferred default.
        self.auto_select_spent = true;
        tracing::debug!(%stage, "Stage selected");
        Some(stage)
    }

    /// The deferred default: select the first stage, once per session, and
    /// only if nothing has been selected yet.
    pub fn auto_select(&mut self) -> Option<StageId> {
        if self.auto_select_spent || self.active.is_some() {
            self.auto_select_spent = true;
            return None;
        }
        self.select_index(0)
    }

    pub fn auto_select_spent(&self) -> bool {
        self.auto_select_spent
    }

    pub fn settle_entry(&mut self) {
        self.phase = PanelPhase::Settled;
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn is_node_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn is_panel_visible(&self, stage: &StageId) -> bool {
        self.active_stage() == Some(stage)
    }

    /// Details container is hidden until the first selection.
    pub fn details_visible(&self) -> bool {
        self.active.is_some()
    }

    /// Inline style for a stage panel.
    pub fn panel_style(&self, stage: &StageId) -> &'static str {
        if !self.is_panel_visible(stage) {
            return "display: none;";
        }
        match self.phase {
            PanelPhase::Entering => "display: block; opacity: 0; transform: translateY(20px);",
            PanelPhase::Settled => "display: block; opacity: 1; transform: translateY(0);",
        }
    }

    pub fn hover_enter(&mut self, index: usize) {
        if index < self.stages.len() {
            self.hovered = Some(index);
        }
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn highlighted_edges(&self) -> &[usize] {
        match self.hovered {
            Some(i) => self.adjacency[i].as_slice(),
            None => &[],
        }
    }

    pub fn is_edge_highlighted(&self, edge: usize) -> bool {
        self.highlighted_edges().contains(&edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constellation() -> Constellation {
        let stages = builtin_stages().into_iter().map(|s| s.id).collect();
        Constellation::new(stages, 6)
    }

    #[test]
    fn parity_adjacency() {
        let mut c = constellation();
        c.hover_enter(1);
        assert_eq!(c.highlighted_edges(), &[1, 3, 5]);
        c.hover_enter(2);
        assert_eq!(c.highlighted_edges(), &[0, 2, 4]);
        c.hover_leave();
        assert!(c.highlighted_edges().is_empty());
    }

    #[test]
    fn explicit_adjacency_drops_out_of_range() {
        let stages = vec![StageId::new("a"), StageId::new("b")];
        let mut c = Constellation::with_adjacency(stages, 3, vec![vec![0, 7]]);
        c.hover_enter(0);
        assert_eq!(c.highlighted_edges(), &[0]);
        c.hover_enter(1);
        assert!(c.highlighted_edges().is_empty());
    }

    #[test]
    fn single_selection() {
        let mut c = constellation();
        assert!(!c.details_visible());
        c.select(&StageId::new("understanding"));
        c.select(&StageId::new("mastery"));
        assert_eq!(c.active_stage(), Some(&StageId::new("mastery")));
        let active_nodes = (0..4).filter(|&i| c.is_node_active(i)).count();
        assert_eq!(active_nodes, 1);
        assert_eq!(c.panel_style(&StageId::new("understanding")), "display: none;");
        assert!(c.panel_style(&StageId::new("mastery")).contains("opacity: 0"));
        c.settle_entry();
        assert!(c.panel_style(&StageId::new("mastery")).contains("opacity: 1"));
    }

    #[test]
    fn unknown_stage_is_ignored() {
        let mut c = constellation();
        c.select(&StageId::new("awareness"));
        assert_eq!(c.select(&StageId::new("nope")), None);
        assert_eq!(c.active_stage(), Some(&StageId::new("awareness")));
    }

    #[test]
    fn auto_select_fires_once() {
        let mut c = constellation();
        assert_eq!(c.auto_select(), Some(StageId::new("awareness")));
        c.select(&StageId::new("mastery"));
        assert_eq!(c.auto_select(), None);
        assert_eq!(c.active_stage(), Some(&StageId::new("mastery")));
    }

    #[test]
    fn user_choice_beats_auto_select() {
        let mut c = constellation();
        c.select(&StageId::new("application"));
        assert_eq!(c.auto_select(), None);
        assert_eq!(c.active_stage(), Some(&StageId::new("application")));
    }

    #[test]
    fn hover_and_selection_are_independent() {
        let mut c = constellation();
        c.select_index(2);
        c.hover_enter(1);
        assert!(c.is_node_active(2));
        c.hover_leave();
        assert!(c.is_node_active(2));
        c.select_index(3);
        c.hover_enter(0);
        assert_eq!(c.hovered(), Some(0));
    }

    #[test]
    fn empty_constellation_auto_select_is_noop() {
        let mut c = Constellation::new(Vec::new(), 0);
        assert_eq!(c.auto_select(), None);
        assert!(c.active_stage().is_none());
    }
}

//! Mutually exclusive rendering modes of a collection, plus the card the
//! visitor has expanded in the current mode.

use crate::filter::SortOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillView {
    #[default]
    Grid,
    List,
    Chart,
}

impl SkillView {
    pub const ALL: [SkillView; 3] = [SkillView::Grid, SkillView::List, SkillView::Chart];

    pub fn label(self) -> &'static str {
        match self {
            SkillView::Grid => "Grid",
            SkillView::List => "List",
            SkillView::Chart => "Chart",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SkillView::Grid => "grid_view",
            SkillView::List => "view_list",
            SkillView::Chart => "bar_chart",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            SkillView::Grid => "Compact card view",
            SkillView::List => "Detailed list view",
            SkillView::Chart => "Visual comparison",
        }
    }

    /// Chart mode ranks skills by level; the other modes keep content order.
    pub fn sort_order(self) -> SortOrder {
        match self {
            SkillView::Chart => SortOrder::StrengthDescending,
            _ => SortOrder::Insertion,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestimonialView {
    #[default]
    Carousel,
    Grid,
}

impl TestimonialView {
    pub fn label(self) -> &'static str {
        match self {
            TestimonialView::Carousel => "Carousel",
            TestimonialView::Grid => "Grid",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModeState<M, K> {
    mode: M,
    expanded: Option<K>,
}

impl<M: Default, K> Default for ViewModeState<M, K> {
    fn default() -> Self {
        Self {
            mode: M::default(),
            expanded: None,
        }
    }
}

impl<M: Copy + PartialEq, K: PartialEq> ViewModeState<M, K> {
    pub fn new(mode: M) -> Self {
        Self {
            mode,
            expanded: None,
        }
    }

    pub fn mode(&self) -> M {
        self.mode
    }

    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }

    /// Switches mode. Returns false and keeps the expanded card when `mode`
    /// is already active; otherwise collapses it.
    pub fn select(&mut self, mode: M) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.expanded = None;
        true
    }

    pub fn toggle_expanded(&mut self, key: K) {
        if self.expanded.as_ref() == Some(&key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key);
        }
    }

    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.as_ref() == Some(key)
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_mode_clears_expanded_card() {
        let mut state: ViewModeState<SkillView, String> = ViewModeState::default();
        state.toggle_expanded("React".to_string());
        assert!(state.is_expanded(&"React".to_string()));

        assert!(state.select(SkillView::List));
        assert_eq!(state.mode(), SkillView::List);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn reselecting_active_mode_is_a_no_op() {
        let mut state: ViewModeState<SkillView, String> = ViewModeState::new(SkillView::Grid);
        state.toggle_expanded("Git".to_string());

        assert!(!state.select(SkillView::Grid));
        assert_eq!(state.expanded(), Some(&"Git".to_string()));
    }

    #[test]
    fn toggling_twice_collapses() {
        let mut state: ViewModeState<TestimonialView, usize> = ViewModeState::default();
        state.toggle_expanded(2);
        state.toggle_expanded(3);
        assert!(state.is_expanded(&3));
        state.toggle_expanded(3);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn only_chart_ranks_by_level() {
        assert_eq!(SkillView::Chart.sort_order(), SortOrder::StrengthDescending);
        assert_eq!(SkillView::Grid.sort_order(), SortOrder::Insertion);
        assert_eq!(SkillView::List.caption(), "Detailed list view");
    }
}

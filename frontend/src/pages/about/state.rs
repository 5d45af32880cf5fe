use common::content::{skills, timeline};
use common::filter::CollectionFilter;
use common::model::skill::{category_stats, Skill, SkillCategory, SkillCategoryStats};
use common::model::timeline::{Achievement, Interest, TimelineItem};
use common::view_mode::{SkillView, ViewModeState};

pub struct About {
    pub skills: Vec<Skill>,
    /// Computed once over every skill; the chart summary ignores the filter.
    pub stats: Vec<SkillCategoryStats>,
    pub experience: Vec<TimelineItem>,
    pub education: Vec<TimelineItem>,
    pub achievements: Vec<Achievement>,
    pub interests: Vec<Interest>,
    pub filter: CollectionFilter<SkillCategory>,
    /// Active skill view and the name of the expanded skill.
    pub view: ViewModeState<SkillView, String>,
}

impl About {
    pub fn new() -> Self {
        let skills = skills::skills();
        let stats = category_stats(&skills);
        Self {
            skills,
            stats,
            experience: timeline::experience(),
            education: timeline::education(),
            achievements: timeline::achievements(),
            interests: timeline::interests(),
            filter: CollectionFilter::new(),
            view: ViewModeState::default(),
        }
    }

    /// Skills passing the filter, ordered for the active view.
    pub fn visible_skills(&self) -> Vec<&Skill> {
        let mut shown = self.filter.apply(&self.skills);
        self.view.mode().sort_order().sort(&mut shown);
        shown
    }
}

use common::model::skill::SkillCategory;
use common::view_mode::SkillView;

pub enum Msg {
    SetSearch(String),
    SetCategory(Option<SkillCategory>),
    ClearFilters,
    SetView(SkillView),
    /// Expands the named skill card, or collapses it when already expanded.
    ToggleSkill(String),
}

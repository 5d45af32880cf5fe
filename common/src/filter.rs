//! Search, category and ordering predicates shared by every filterable
//! collection on the site.
//!
//! A [`CollectionFilter`] holds the two user-controlled predicates of a page:
//! a free-text search term and an optional category. An item is shown when
//! it satisfies both. Results keep the order of the underlying content.

use crate::model::blog::BlogPost;
use crate::model::service::{Service, ServiceCategory};
use crate::model::skill::{Skill, SkillCategory};
use crate::model::testimonial::Testimonial;

/// Text fields matched by the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Membership in one of the category tabs of a page.
pub trait Categorized {
    type Category: PartialEq;

    fn in_category(&self, category: &Self::Category) -> bool;
}

/// Ordering key for [`SortOrder::StrengthDescending`].
pub trait Strength {
    fn strength(&self) -> u32;
}

impl Searchable for Skill {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.key_projects.iter().map(String::as_str));
        fields.extend(self.related_skills.iter().map(String::as_str));
        fields
    }
}

impl Categorized for Skill {
    type Category = SkillCategory;

    fn in_category(&self, category: &SkillCategory) -> bool {
        self.category == *category
    }
}

impl Strength for Skill {
    fn strength(&self) -> u32 {
        u32::from(self.level)
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.summary.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Categorized for BlogPost {
    type Category = String;

    fn in_category(&self, tag: &String) -> bool {
        self.tags.contains(tag)
    }
}

impl Searchable for Service {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.features.iter().map(String::as_str));
        fields
    }
}

impl Categorized for Service {
    type Category = ServiceCategory;

    fn in_category(&self, category: &ServiceCategory) -> bool {
        self.category == *category
    }
}

impl Searchable for Testimonial {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.quote.as_str(), self.name.as_str()];
        fields.extend(self.company.as_deref());
        fields.extend(self.project.as_deref());
        fields
    }
}

impl Categorized for Testimonial {
    type Category = String;

    fn in_category(&self, project: &String) -> bool {
        self.project.as_ref() == Some(project)
    }
}

/// True when `term` is empty or occurs, ignoring case, in any search field.
pub fn search_predicate<T: Searchable>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// True when no category is selected or the item belongs to it.
pub fn category_predicate<T: Categorized>(item: &T, category: Option<&T::Category>) -> bool {
    category.is_none_or(|c| item.in_category(c))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionFilter<C> {
    pub search: String,
    /// `None` is the "All" tab.
    pub category: Option<C>,
}

impl<C> Default for CollectionFilter<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
        }
    }
}

impl<C: PartialEq> CollectionFilter<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_category(&mut self, category: Option<C>) {
        self.category = category;
    }

    /// Clears both predicates. This is the single action offered by the
    /// "no results" state.
    pub fn reset(&mut self) {
        self.search.clear();
        self.category = None;
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category.is_some()
    }

    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Searchable + Categorized<Category = C>,
    {
        search_predicate(item, &self.search) && category_predicate(item, self.category.as_ref())
    }

    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Searchable + Categorized<Category = C>,
    {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Insertion,
    StrengthDescending,
}

impl SortOrder {
    /// Orders `items` in place. The descending sort is stable, so equal
    /// strengths keep their content order.
    pub fn sort<T: Strength>(self, items: &mut [&T]) {
        if self == SortOrder::StrengthDescending {
            items.sort_by_key(|item| std::cmp::Reverse(item.strength()));
        }
    }
}

pub fn sorted_by_strength<'a, T: Strength>(items: &[&'a T]) -> Vec<&'a T> {
    let mut sorted = items.to_vec();
    SortOrder::StrengthDescending.sort(&mut sorted);
    sorted
}

/// Every tag used by `posts`, in first-seen order.
pub fn unique_tags(posts: &[BlogPost]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Summary line above the blog results, e.g.
/// `3 articles found for tag "React" matching "hooks"`.
pub fn results_label(count: usize, tag: Option<&str>, search: &str) -> String {
    let mut label = format!(
        "{} {} found",
        count,
        if count == 1 { "article" } else { "articles" }
    );
    if let Some(tag) = tag {
        label.push_str(&format!(" for tag \"{}\"", tag));
    }
    if !search.is_empty() {
        label.push_str(&format!(" matching \"{}\"", search));
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{blog, services, skills, testimonials};

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let all = skills::skills();
        let filter = CollectionFilter::<SkillCategory>::new();
        let shown = filter.apply(&all);
        assert_eq!(shown.len(), all.len());
        assert!(shown.iter().zip(all.iter()).all(|(a, b)| *a == b));
        assert!(!filter.is_active());
    }

    #[test]
    fn result_is_the_subset_satisfying_both_predicates() {
        let all = skills::skills();
        let mut filter = CollectionFilter::new();
        filter.set_search("api");
        filter.set_category(Some(SkillCategory::Backend));

        let shown: Vec<&str> = filter.apply(&all).into_iter().map(|s| s.name.as_str()).collect();
        let expected: Vec<&str> = all
            .iter()
            .filter(|s| search_predicate(*s, "api") && s.category == SkillCategory::Backend)
            .map(|s| s.name.as_str())
            .collect();

        assert_eq!(shown, expected);
        assert!(shown.contains(&"Node.js"));
        assert!(shown.contains(&"GraphQL"));
    }

    #[test]
    fn predicate_order_commutes() {
        let all = blog::posts();
        let tag = "Frontend".to_string();

        let search_first: Vec<&BlogPost> = all
            .iter()
            .filter(|p| search_predicate(*p, "react"))
            .filter(|p| category_predicate(*p, Some(&tag)))
            .collect();
        let category_first: Vec<&BlogPost> = all
            .iter()
            .filter(|p| category_predicate(*p, Some(&tag)))
            .filter(|p| search_predicate(*p, "react"))
            .collect();

        assert_eq!(search_first, category_first);
        assert_eq!(search_first.len(), 2);
    }

    #[test]
    fn search_ignores_case() {
        let all = blog::posts();
        let mut filter = CollectionFilter::<String>::new();
        filter.set_search("TYPESCRIPT");
        let shown = filter.apply(&all);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].slug, "getting-started-with-typescript");
    }

    #[test]
    fn reset_clears_both_predicates() {
        let all = services::services();
        let mut filter = CollectionFilter::new();
        filter.set_search("nothing matches this");
        filter.set_category(Some(ServiceCategory::Mobile));
        assert!(filter.apply(&all).is_empty());

        filter.reset();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&all).len(), all.len());
    }

    #[test]
    fn service_category_selects_members() {
        let all = services::services();
        let mut filter = CollectionFilter::new();
        filter.set_category(Some(ServiceCategory::Analytics));
        let titles: Vec<&str> = filter.apply(&all).into_iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Data Analytics", "SEO Optimization"]);
    }

    #[test]
    fn testimonials_match_on_company() {
        let all = testimonials::testimonials();
        let mut filter = CollectionFilter::<String>::new();
        filter.set_search("webworks");
        let shown = filter.apply(&all);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Sarah Lee");
    }

    #[test]
    fn testimonial_dead_end_clears_in_one_step() {
        let all = testimonials::testimonials();
        let mut filter = CollectionFilter::<String>::new();
        filter.set_category(Some("CRM Integration".to_string()));
        filter.set_search("zzz");
        assert!(filter.apply(&all).is_empty());

        filter.reset();
        assert_eq!(filter.apply(&all).len(), all.len());
    }

    #[test]
    fn chart_order_is_descending_and_stable() {
        let all = skills::skills();
        let refs: Vec<&Skill> = all.iter().collect();
        let sorted = sorted_by_strength(&refs);

        assert!(sorted.windows(2).all(|w| w[0].level >= w[1].level));
        assert_eq!(sorted[0].name, "JavaScript");

        // Tailwind CSS and Git share level 88.
        let tailwind = sorted.iter().position(|s| s.name == "Tailwind CSS");
        let git = sorted.iter().position(|s| s.name == "Git");
        assert!(tailwind < git);
    }

    #[test]
    fn insertion_order_leaves_items_alone() {
        let all = skills::skills();
        let mut refs: Vec<&Skill> = all.iter().collect();
        SortOrder::Insertion.sort(&mut refs);
        assert_eq!(refs[0].name, "React");
    }

    #[test]
    fn tags_are_collected_in_first_seen_order() {
        let tags = unique_tags(&blog::posts());
        assert_eq!(&tags[..4], ["React", "Hooks", "Frontend", "JavaScript"]);
        let react = tags.iter().filter(|t| *t == "React").count();
        assert_eq!(react, 1);
    }

    #[test]
    fn results_label_mentions_active_predicates() {
        assert_eq!(results_label(1, None, ""), "1 article found");
        assert_eq!(
            results_label(3, Some("React"), "hooks"),
            "3 articles found for tag \"React\" matching \"hooks\""
        );
    }
}

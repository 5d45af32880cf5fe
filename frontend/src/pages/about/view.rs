//! View rendering for the About page.
//!
//! Each section is built by its own `build_*` function. The skill browser
//! renders one of three bodies depending on the active [`SkillView`]:
//! compact cards (grid), detailed rows (list) or proficiency bars with a
//! per-category summary (chart).

use common::content::profile::{BIO, LOCATION, NAME, PORTRAIT};
use common::model::skill::{Skill, SkillCategory};
use common::model::timeline::TimelineItem;
use common::view_mode::SkillView;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use super::messages::Msg;
use super::state::About;
use crate::route::Route;

pub fn view(about: &About, ctx: &Context<About>) -> Html {
    let link = ctx.link();

    html! {
        <section class="container page about-page">
            { build_hero() }
            { build_bio() }
            { build_skills(about, link) }
            <div class="two-columns">
                { build_timeline("Work", "Experience", "work", &about.experience) }
                <div>
                    { build_timeline("", "Education", "school", &about.education) }
                    { build_achievements(about) }
                </div>
            </div>
            { build_interests(about) }
            { build_cta() }
        </section>
    }
}

fn build_hero() -> Html {
    html! {
        <div class="hero two-columns">
            <div class="hero-text">
                <h1>{"Hi, I'm "}<span class="accent">{ NAME }</span></h1>
                <p class="muted location">
                    <i class="material-icons small">{"place"}</i>
                    <span>{ LOCATION }</span>
                    <span class="dot" />
                    <span>{"Available for freelance"}</span>
                </p>
                <p class="lead">
                    {"A "}<strong>{"passionate Full Stack Developer"}</strong>{" with "}
                    <strong>{"7+ years of experience"}</strong>
                    {" building beautiful and functional web applications. I specialize in creating dynamic, \
                      responsive, and user-friendly experiences from concept to deployment."}
                </p>
                <p>
                    {"With expertise in modern JavaScript frameworks like React, robust backend technologies, \
                      and a keen eye for design, I transform complex ideas into elegant solutions."}
                </p>
                <div class="actions">
                    <Link<Route> to={Route::Projects} classes={classes!("btn", "primary")}>
                        {"View My Work"}<i class="material-icons">{"arrow_forward"}</i>
                    </Link<Route>>
                </div>
                <div class="quick-stats">
                    { quick_stat("7+", "Years Experience") }
                    { quick_stat("50+", "Projects Completed") }
                    { quick_stat("30+", "Happy Clients") }
                </div>
            </div>
            <div class="hero-portrait">
                <img src={PORTRAIT} alt={NAME} />
            </div>
        </div>
    }
}

fn quick_stat(value: &'static str, label: &'static str) -> Html {
    html! {
        <div class="quick-stat">
            <div class="quick-stat-value">{ value }</div>
            <div class="muted">{ label }</div>
        </div>
    }
}

fn build_bio() -> Html {
    let approach = [
        ("workspace_premium", "Quality-Focused", "I believe in writing clean, maintainable code that stands the test of time."),
        ("favorite", "User-Centered", "Every design decision I make is guided by how it will impact the end user."),
        ("event", "Deadline-Driven", "I take pride in delivering projects on time without compromising on quality."),
    ];

    html! {
        <div class="card bio">
            <h2 class="section-title">{"About "}<span class="accent">{"Me"}</span></h2>
            <div class="two-columns">
                <div>
                    <h3>{"My Story"}</h3>
                    { for BIO.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                </div>
                <div>
                    <h3>{"My Approach"}</h3>
                    { for approach.iter().map(|(icon, title, text)| html! {
                        <div class="approach-item">
                            <div class="icon-bubble"><i class="material-icons">{ *icon }</i></div>
                            <div>
                                <h4>{ *title }</h4>
                                <p class="muted">{ *text }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn build_skills(about: &About, link: &Scope<About>) -> Html {
    let shown = about.visible_skills();
    let mode = about.view.mode();

    html! {
        <div class="skills">
            <div class="skills-header">
                <div>
                    <h2>{"My "}<span class="accent">{"Skills"}</span></h2>
                    <p class="muted">
                        {"I've worked with a variety of technologies across the full stack development spectrum. \
                          Here's a breakdown of my technical expertise."}
                    </p>
                </div>
                <div>
                    { build_view_switcher(mode, link) }
                    <p class="muted small caption">{ mode.caption() }</p>
                </div>
            </div>

            { build_skill_filters(about, link) }

            if shown.is_empty() {
                <div class="empty-state">
                    <p class="muted">{"No skills found matching your search."}</p>
                    <button class="btn link" onclick={link.callback(|_| Msg::ClearFilters)}>
                        {"Clear filters"}
                    </button>
                </div>
            } else {
                <p class="muted small">{ format!("Showing {} skills", shown.len()) }</p>
                {
                    match mode {
                        SkillView::Grid => build_grid(about, &shown, link),
                        SkillView::List => build_list(&shown),
                        SkillView::Chart => build_chart(about, &shown),
                    }
                }
            }
        </div>
    }
}

fn build_view_switcher(active: SkillView, link: &Scope<About>) -> Html {
    html! {
        <div class="segmented">
            { for SkillView::ALL.iter().map(|&mode| html! {
                <button
                    type="button"
                    class={classes!("segment", (mode == active).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetView(mode))}
                >
                    <i class="material-icons small">{ mode.icon() }</i>
                    <span>{ mode.label() }</span>
                </button>
            }) }
        </div>
    }
}

fn build_skill_filters(about: &About, link: &Scope<About>) -> Html {
    let active = about.filter.category;
    let tab = |category: Option<SkillCategory>, label: &'static str| {
        html! {
            <button
                class={classes!("chip", (active == category).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetCategory(category))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="filters">
            <div class="search-box">
                <i class="material-icons">{"search"}</i>
                <input
                    type="text"
                    placeholder="Search skills, projects, or technologies..."
                    value={about.filter.search.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                if !about.filter.search.is_empty() {
                    <button
                        class="btn icon"
                        aria-label="Clear search"
                        onclick={link.callback(|_| Msg::SetSearch(String::new()))}
                    >
                        <i class="material-icons">{"close"}</i>
                    </button>
                }
            </div>
            <div class="chips">
                { tab(None, "All Skills") }
                { for SkillCategory::ALL.iter().map(|&category| tab(Some(category), category.label())) }
            </div>
        </div>
    }
}

fn build_grid(about: &About, skills: &[&Skill], link: &Scope<About>) -> Html {
    html! {
        <div class="skill-grid">
            { for skills.iter().map(|skill| {
                let expanded = about.view.is_expanded(&skill.name);
                let name = skill.name.clone();
                html! {
                    <div
                        class={classes!("card", "skill-card", expanded.then_some("expanded"))}
                        onclick={link.callback(move |_| Msg::ToggleSkill(name.clone()))}
                    >
                        <div class="skill-card-head">
                            <span class="swatch" style={format!("background-color: {}", skill.color)} />
                            <h3>{ skill.name.clone() }</h3>
                            <span class="muted small">{ format!("{}%", skill.level) }</span>
                        </div>
                        { level_bar(skill) }
                        <p class="muted small">{ skill.years_label() }</p>
                        if expanded {
                            <div class="skill-details">
                                <p>{ skill.description.clone() }</p>
                                { tag_list("Key projects", &skill.key_projects) }
                                { tag_list("Related", &skill.related_skills) }
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

fn build_list(skills: &[&Skill]) -> Html {
    html! {
        <div class="skill-list">
            { for skills.iter().map(|skill| html! {
                <div class="card skill-row">
                    <div class="skill-row-head">
                        <span class="swatch" style={format!("background-color: {}", skill.color)} />
                        <h3>{ skill.name.clone() }</h3>
                        <span class="chip small">{ skill.category.label() }</span>
                        <span class="muted small">{ skill.years_label() }</span>
                    </div>
                    { level_bar(skill) }
                    <p>{ skill.description.clone() }</p>
                    <div class="two-columns">
                        { tag_list("Key projects", &skill.key_projects) }
                        { tag_list("Related skills", &skill.related_skills) }
                    </div>
                </div>
            }) }
        </div>
    }
}

fn build_chart(about: &About, skills: &[&Skill]) -> Html {
    html! {
        <div class="skill-chart">
            <div class="card">
                <h3>{"Skill Proficiency Chart"}</h3>
                { for skills.iter().map(|skill| html! {
                    <div class="chart-row">
                        <div class="chart-label">
                            <span class="swatch" style={format!("background-color: {}", skill.color)} />
                            <span>{ skill.name.clone() }</span>
                            <span style={format!("color: {}", skill.color)}>{ format!("{}%", skill.level) }</span>
                        </div>
                        <div class="chart-track">
                            <div
                                class="chart-bar"
                                style={format!("background-color: {}; width: {}%", skill.color, skill.level)}
                            />
                        </div>
                    </div>
                }) }
            </div>
            <div class="stat-grid">
                { for about.stats.iter().map(|stats| html! {
                    <div class="card category-stat">
                        <div class="category-stat-head">
                            <h4>{ stats.category.label() }</h4>
                            <span class="chip small">{ format!("{} skills", stats.count) }</span>
                        </div>
                        <div class="muted small">{"Average Proficiency"}</div>
                        <div class="progress">
                            <div class="progress-bar" style={format!("width: {}%", stats.average_level)} />
                        </div>
                        <span class="accent">{ format!("{}%", stats.average_level) }</span>
                        <div class="muted small">
                            {"Top Skill: "}
                            <strong>{ stats.top_skill.clone().unwrap_or_default() }</strong>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn level_bar(skill: &Skill) -> Html {
    html! {
        <div class="progress">
            <div
                class="progress-bar"
                style={format!("background-color: {}; width: {}%", skill.color, skill.level)}
            />
        </div>
    }
}

fn tag_list(title: &'static str, tags: &[String]) -> Html {
    html! {
        <div class="tag-list">
            <h4 class="small">{ title }</h4>
            <div class="tags">
                { for tags.iter().map(|tag| html! { <span class="tag">{ tag.clone() }</span> }) }
            </div>
        </div>
    }
}

fn build_timeline(lead: &'static str, title: &'static str, icon: &'static str, items: &[TimelineItem]) -> Html {
    html! {
        <div class="timeline-section">
            <h2>{ lead }{" "}<span class="accent">{ title }</span></h2>
            <div class="timeline">
                { for items.iter().map(|item| html! {
                    <div class="timeline-item">
                        <div class="timeline-dot"><i class="material-icons small">{ icon }</i></div>
                        <div class="card">
                            <div class="timeline-head">
                                <h3>{ item.title.clone() }</h3>
                                <span class="chip small">{ item.period.clone() }</span>
                            </div>
                            <div class="muted small">
                                <span>{ item.organization.clone() }</span>
                                if let Some(location) = &item.location {
                                    <span class="dot" />
                                    <i class="material-icons small">{"place"}</i>
                                    <span>{ location.clone() }</span>
                                }
                            </div>
                            <p>{ item.description.clone() }</p>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn build_achievements(about: &About) -> Html {
    html! {
        <div class="achievements">
            <h3>{"Awards & Certifications"}</h3>
            { for about.achievements.iter().map(|a| html! {
                <div class="card achievement">
                    <div class="icon-bubble"><i class="material-icons">{"emoji_events"}</i></div>
                    <div>
                        <h4>{ a.title.clone() }</h4>
                        <p class="muted small">{ format!("{} \u{2022} {}", a.event, a.year) }</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

fn build_interests(about: &About) -> Html {
    html! {
        <div class="card interests">
            <h2 class="section-title">{"Personal "}<span class="accent">{"Interests"}</span></h2>
            <div class="interest-grid">
                { for about.interests.iter().map(|interest| html! {
                    <div class="interest">
                        <i class="material-icons large">{ interest.icon.clone() }</i>
                        <div>{ interest.label.clone() }</div>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn build_cta() -> Html {
    html! {
        <div class="cta">
            <h2>{"Let's Work "}<span class="accent">{"Together"}</span></h2>
            <p class="muted">
                {"I'm always open to discussing new projects, creative ideas or opportunities to be part of your vision."}
            </p>
            <Link<Route> to={Route::Contact} classes={classes!("btn", "primary")}>
                {"Get In Touch"}<i class="material-icons">{"arrow_forward"}</i>
            </Link<Route>>
        </div>
    }
}

use common::content::projects;
use common::model::project::Project;
use yew::{html, Component, Context, Html};

pub struct Projects {
    projects: Vec<Project>,
}

impl Component for Projects {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            projects: projects::projects(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="container page">
                <h1 class="page-title">{"My "}<span class="accent">{"Projects"}</span></h1>
                <p class="muted page-lead">
                    {"A selection of things I've built, from full-stack platforms to small tools."}
                </p>
                <div class="card-grid">
                    { for self.projects.iter().map(project_card) }
                </div>
            </section>
        }
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <article class="card project-card">
            <img class="card-image" src={project.image.clone()} alt={project.name.clone()} />
            <div class="card-body">
                <h3>{ project.name.clone() }</h3>
                <p class="muted">{ project.description.clone() }</p>
                <div class="tags">
                    { for project.technologies.iter().map(|tech| html! { <span class="tag">{ tech.clone() }</span> }) }
                </div>
            </div>
            <div class="card-footer">
                <a class="btn outline" href={project.repository.clone()} target="_blank" rel="noopener noreferrer">
                    <i class="material-icons">{"code"}</i>
                    <span>{"GitHub"}</span>
                </a>
                if let Some(demo) = &project.live_demo {
                    <a class="btn primary" href={demo.clone()} target="_blank" rel="noopener noreferrer">
                        <i class="material-icons">{"open_in_new"}</i>
                        <span>{"Live Demo"}</span>
                    </a>
                }
            </div>
        </article>
    }
}

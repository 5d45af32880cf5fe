use super::strings;
use crate::model::project::Project;

fn project(
    name: &str,
    description: &str,
    image: &str,
    technologies: &[&str],
    repository: &str,
    live_demo: Option<&str>,
) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        technologies: strings(technologies),
        repository: repository.to_string(),
        live_demo: live_demo.map(str::to_string),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "E-commerce Platform",
            "A full-stack e-commerce application with user authentication, product listings, shopping cart, and checkout functionality.",
            "https://images.pexels.com/photos/5632371/pexels-photo-5632371.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["React", "Node.js", "Express", "MongoDB", "Stripe"],
            "https://github.com/example/ecommerce-platform",
            Some("https://ecommerce.example.com"),
        ),
        project(
            "AI Chatbot Integration",
            "Integrated a custom AI chatbot into a customer support portal, improving response times and user satisfaction.",
            "https://images.pexels.com/photos/7375/startup-photos.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["Python", "Flask", "React", "OpenAI API"],
            "https://github.com/example/ai-chatbot",
            None,
        ),
        project(
            "Real-time Collaboration Tool",
            "A web-based tool enabling real-time document collaboration with rich text editing and presence indicators.",
            "https://images.pexels.com/photos/3184418/pexels-photo-3184418.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["Vue.js", "Socket.IO", "Node.js", "PostgreSQL"],
            "https://github.com/example/collaboration-tool",
            Some("https://collab.example.com"),
        ),
        project(
            "Mobile Recipe App",
            "A cross-platform mobile application for discovering, saving, and organizing recipes with offline capabilities.",
            "https://images.pexels.com/photos/3220617/pexels-photo-3220617.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["React Native", "Firebase", "Redux"],
            "https://github.com/example/recipe-app",
            None,
        ),
        project(
            "Personal Portfolio V1",
            "The first iteration of my personal portfolio, showcasing early projects and design explorations.",
            "https://images.pexels.com/photos/1779487/pexels-photo-1779487.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["HTML", "CSS", "JavaScript", "jQuery"],
            "https://github.com/example/portfolio-v1",
            Some("https://old-portfolio.example.com"),
        ),
        project(
            "Task Management API",
            "A robust RESTful API for managing tasks, users, and projects, with authentication and authorization.",
            "https://images.pexels.com/photos/5926390/pexels-photo-5926390.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
            &["Node.js", "Express", "PostgreSQL", "JWT"],
            "https://github.com/example/task-api",
            None,
        ),
    ]
}

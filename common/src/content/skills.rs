use super::strings;
use crate::model::skill::{Skill, SkillCategory};

#[allow(clippy::too_many_arguments)]
fn skill(
    name: &str,
    level: u8,
    category: SkillCategory,
    years: u8,
    projects: &[&str],
    description: &str,
    related: &[&str],
    color: &str,
) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category,
        years_of_experience: years,
        description: description.to_string(),
        related_skills: strings(related),
        key_projects: strings(projects),
        color: color.to_string(),
    }
}

pub fn skills() -> Vec<Skill> {
    use SkillCategory::*;

    vec![
        skill(
            "React", 90, Frontend, 5,
            &["E-commerce Platform", "Social Media Dashboard"],
            "Expert in React, including hooks, context API, and advanced patterns. Experienced with Redux and state management.",
            &["React Router", "Redux", "React Query"],
            "#61DAFB",
        ),
        skill(
            "TypeScript", 85, Frontend, 4,
            &["Enterprise CRM", "Financial Dashboard"],
            "Strong TypeScript skills with focus on type safety, interfaces, and advanced typing patterns.",
            &["JavaScript", "Angular", "React"],
            "#3178C6",
        ),
        skill(
            "JavaScript", 92, Frontend, 7,
            &["Interactive Web Apps", "Browser Extensions"],
            "Extensive JavaScript knowledge including ES6+, async/await, and functional programming concepts.",
            &["TypeScript", "Node.js", "jQuery"],
            "#F7DF1E",
        ),
        skill(
            "Next.js", 80, Frontend, 3,
            &["E-commerce Site", "Blog Platform"],
            "Experienced with server-side rendering, static generation, and Next.js API routes.",
            &["React", "Vercel", "SSR"],
            "#000000",
        ),
        skill(
            "Tailwind CSS", 88, Frontend, 3,
            &["Component Library", "Marketing Website"],
            "Proficient in building responsive UIs with Tailwind, including custom theming and component design.",
            &["CSS", "UI Design", "Responsive Design"],
            "#06B6D4",
        ),
        skill(
            "Node.js", 85, Backend, 5,
            &["RESTful APIs", "Authentication Service"],
            "Strong backend development skills with Node.js including performance optimization and microservice architecture.",
            &["Express.js", "REST APIs", "WebSockets"],
            "#339933",
        ),
        skill(
            "Express.js", 82, Backend, 5,
            &["API Gateway", "Content Management System"],
            "Experienced in building RESTful APIs and middleware using Express.js for various applications.",
            &["Node.js", "REST APIs", "Middleware"],
            "#000000",
        ),
        skill(
            "PostgreSQL", 75, Database, 4,
            &["Data Warehouse", "Analytics Platform"],
            "Skilled in database design, query optimization, and working with complex relational data models.",
            &["SQL", "Database Design", "ORMs"],
            "#336791",
        ),
        skill(
            "MongoDB", 80, Database, 4,
            &["Real-time Analytics", "Content Repository"],
            "Experience with MongoDB schema design, aggregation pipelines, and performance optimization.",
            &["NoSQL", "Mongoose", "Atlas"],
            "#47A248",
        ),
        skill(
            "GraphQL", 78, Backend, 3,
            &["API Gateway", "Content Platform"],
            "Proficient in designing GraphQL schemas, resolvers, and integrating with various data sources.",
            &["Apollo", "API Design", "Node.js"],
            "#E535AB",
        ),
        skill(
            "Docker", 70, Devops, 3,
            &["Microservice Architecture", "CI/CD Pipeline"],
            "Experience with containerization, Docker Compose, and container orchestration.",
            &["Kubernetes", "DevOps", "CI/CD"],
            "#2496ED",
        ),
        skill(
            "AWS", 65, Devops, 3,
            &["Serverless API", "Cloud Migration"],
            "Experienced with various AWS services including EC2, S3, Lambda, and CloudFormation.",
            &["Cloud Computing", "Serverless", "IaC"],
            "#FF9900",
        ),
        skill(
            "Figma", 75, Design, 3,
            &["Design System", "UI/UX Prototype"],
            "Skilled in designing user interfaces, prototyping, and collaborating with design teams.",
            &["UI/UX Design", "Prototyping", "Design Systems"],
            "#F24E1E",
        ),
        skill(
            "Git", 88, Devops, 6,
            &["Open Source Contributions", "Version Control Strategy"],
            "Advanced knowledge of Git workflows, branching strategies, and collaboration practices.",
            &["GitHub", "CI/CD", "Version Control"],
            "#F05032",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn levels_are_percentages() {
        assert!(skills().iter().all(|s| s.level <= 100));
    }

    #[test]
    fn names_are_unique() {
        let all = skills();
        let names: HashSet<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn every_category_is_represented() {
        let all = skills();
        for category in SkillCategory::ALL {
            assert!(all.iter().any(|s| s.category == category), "{:?}", category);
        }
    }
}

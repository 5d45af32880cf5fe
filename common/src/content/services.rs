use super::strings;
use crate::model::service::{Service, ServiceCategory};

fn service(
    title: &str,
    icon: &str,
    description: &str,
    features: &[&str],
    price: &str,
    color: &str,
    category: ServiceCategory,
) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
        features: strings(features),
        price: price.to_string(),
        category,
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

pub fn services() -> Vec<Service> {
    use ServiceCategory::*;

    vec![
        service(
            "Web Development",
            "code",
            "Custom websites built with modern frameworks like React, Next.js, and more. Fully responsive and optimized for performance.",
            &[
                "Custom React applications",
                "E-commerce solutions",
                "Progressive Web Apps (PWA)",
                "API integrations",
                "Performance optimization",
            ],
            "Starting at $1,500",
            "from-blue-500 to-sky-700",
            Development,
        ),
        service(
            "UI/UX Design",
            "design_services",
            "Professional user interface and experience design that prioritizes usability, accessibility, and visual appeal.",
            &[
                "Wireframing & prototyping",
                "User flow design",
                "Usability testing",
                "Design systems",
                "Brand identity",
            ],
            "Starting at $1,000",
            "from-purple-500 to-pink-600",
            Design,
        ),
        service(
            "Data Analytics",
            "insights",
            "Transform your raw data into actionable insights with custom reports, dashboards, and visualization solutions.",
            &[
                "Data visualization",
                "Custom dashboards",
                "Reporting automation",
                "Predictive analytics",
                "Business intelligence",
            ],
            "Starting at $1,200",
            "from-green-500 to-emerald-700",
            Analytics,
        ),
        service(
            "Mobile Development",
            "smartphone",
            "Native and cross-platform mobile applications for iOS and Android that deliver exceptional user experiences.",
            &[
                "React Native apps",
                "iOS & Android development",
                "App Store submission",
                "In-app purchases",
                "Push notifications",
            ],
            "Starting at $2,500",
            "from-red-500 to-orange-600",
            Mobile,
        ),
        service(
            "SEO Optimization",
            "public",
            "Improve your website's visibility in search engines with technical SEO, content optimization, and link building.",
            &[
                "Technical SEO audit",
                "Keyword research",
                "On-page optimization",
                "Content strategy",
                "Performance reporting",
            ],
            "Starting at $800",
            "from-yellow-500 to-amber-600",
            Analytics,
        ),
        service(
            "Database Design",
            "storage",
            "Efficient, secure database architecture and management solutions for your applications and websites.",
            &[
                "Database architecture",
                "Data migration",
                "Performance optimization",
                "Security hardening",
                "Backup solutions",
            ],
            "Starting at $1,200",
            "from-cyan-500 to-blue-600",
            Development,
        ),
    ]
}

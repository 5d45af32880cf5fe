use crate::model::testimonial::Testimonial;

fn testimonial(
    quote: &str,
    name: &str,
    title: &str,
    company: &str,
    rating: u8,
    image: &str,
    project: &str,
) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        company: Some(company.to_string()),
        rating: Some(rating),
        image: Some(image.to_string()),
        project: Some(project.to_string()),
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "Working with this developer was an exceptional experience. Their attention to detail and problem-solving skills are top-notch. They delivered our complex project ahead of schedule and exceeded our expectations in every way.",
            "Jane Doe",
            "CTO",
            "TechCorp",
            5,
            "https://randomuser.me/api/portraits/women/44.jpg",
            "E-commerce Platform",
        ),
        testimonial(
            "I was thoroughly impressed with the professionalism and skill demonstrated throughout our project. Communication was clear, deadlines were met, and the final product was exactly what we envisioned. I highly recommend them for any development project.",
            "John Smith",
            "Project Manager",
            "Innovate Solutions",
            5,
            "https://randomuser.me/api/portraits/men/32.jpg",
            "Mobile Banking App",
        ),
        testimonial(
            "Their expertise in full-stack development is truly remarkable. They built a robust and scalable application that perfectly met our needs. What sets them apart is their ability to understand business requirements and translate them into technical solutions.",
            "Sarah Lee",
            "Lead Engineer",
            "WebWorks",
            5,
            "https://randomuser.me/api/portraits/women/68.jpg",
            "Data Analytics Dashboard",
        ),
        testimonial(
            "An absolute pleasure to work with. They took our vague concept and transformed it into a beautiful, functional website that has received countless compliments from our clients. Their design sense and technical skills are exceptional.",
            "Michael Chen",
            "Marketing Director",
            "Bright Ideas Inc",
            5,
            "https://randomuser.me/api/portraits/men/75.jpg",
            "Corporate Website Redesign",
        ),
        testimonial(
            "Reliable, efficient, and incredibly talented. They quickly understood our requirements and delivered high-quality code that was well-structured and easy to maintain. I appreciate their commitment to best practices and clean code.",
            "Emily Rodriguez",
            "Product Owner",
            "Software Solutions",
            4,
            "https://randomuser.me/api/portraits/women/17.jpg",
            "CRM Integration",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testimonial::MAX_RATING;

    #[test]
    fn ratings_stay_within_scale() {
        for t in testimonials() {
            assert!(t.rating.is_some_and(|r| (1..=MAX_RATING).contains(&r)));
        }
    }

    #[test]
    fn grid_excerpts_are_truncated() {
        let all = testimonials();
        let excerpt = all[0].excerpt(150);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), 153);
    }
}

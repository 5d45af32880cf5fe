use crate::model::timeline::{Achievement, Interest, TimelineItem, TimelineKind};

fn item(
    kind: TimelineKind,
    title: &str,
    organization: &str,
    period: &str,
    description: &str,
    location: &str,
) -> TimelineItem {
    TimelineItem {
        kind,
        title: title.to_string(),
        organization: organization.to_string(),
        period: period.to_string(),
        description: description.to_string(),
        location: Some(location.to_string()),
    }
}

pub fn education() -> Vec<TimelineItem> {
    vec![
        item(
            TimelineKind::Education,
            "Master of Computer Science",
            "Stanford University",
            "2018 - 2020",
            "Specialized in Human-Computer Interaction and Machine Learning with a focus on building intuitive user interfaces for AI applications.",
            "California, USA",
        ),
        item(
            TimelineKind::Education,
            "Bachelor of Science in Software Engineering",
            "MIT",
            "2014 - 2018",
            "Graduated with honors. Participated in multiple hackathons and led the university coding club for two years.",
            "Massachusetts, USA",
        ),
    ]
}

pub fn experience() -> Vec<TimelineItem> {
    vec![
        item(
            TimelineKind::Experience,
            "Senior Full Stack Developer",
            "Tech Innovations Inc.",
            "2021 - Present",
            "Lead developer for enterprise SaaS applications serving over 10,000 users. Architected and implemented scalable solutions using React, Node.js, and AWS.",
            "Remote",
        ),
        item(
            TimelineKind::Experience,
            "Frontend Developer",
            "Creative Digital Agency",
            "2019 - 2021",
            "Developed responsive web applications and interactive experiences for major brand clients. Implemented performant UI components and animations.",
            "San Francisco, CA",
        ),
        item(
            TimelineKind::Experience,
            "Software Engineer Intern",
            "Global Tech Solutions",
            "2018 - 2019",
            "Contributed to the development of core features for a financial analytics platform. Worked on both frontend and backend components.",
            "New York, NY",
        ),
    ]
}

pub fn achievements() -> Vec<Achievement> {
    [
        ("Best Web Application", "International Dev Summit 2022", "2022"),
        ("Innovation Award", "Tech Conference", "2021"),
        ("1st Place Hackathon", "Global Code Jam", "2020"),
    ]
    .into_iter()
    .map(|(title, event, year)| Achievement {
        title: title.to_string(),
        event: event.to_string(),
        year: year.to_string(),
    })
    .collect()
}

pub fn interests() -> Vec<Interest> {
    [
        ("Photography", "photo_camera"),
        ("Hiking", "hiking"),
        ("Reading", "menu_book"),
        ("Chess", "extension"),
        ("Cooking", "restaurant"),
        ("Travel", "flight"),
    ]
    .into_iter()
    .map(|(label, icon)| Interest {
        label: label.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

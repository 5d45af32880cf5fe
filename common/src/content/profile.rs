//! Owner details shared by the header, footer, About and Contact pages.

pub const BRAND: &str = "MyPortfolio";
pub const NAME: &str = "Alex Johnson";
pub const HEADLINE: &str = "Full Stack Developer";
pub const LOCATION: &str = "San Francisco, California";
pub const EMAIL: &str = "alex.johnson@example.com";
pub const PHONE: &str = "+1 (555) 123-4567";
pub const PORTRAIT: &str = "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/alexjohnson",
        icon: "work",
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/alexjohnson",
        icon: "code",
    },
    SocialLink {
        name: "Twitter",
        url: "https://twitter.com/alexjohnson",
        icon: "alternate_email",
    },
];

pub const BIO: [&str; 3] = [
    "My journey in web development began during my college years when I built my first website for a local business. \
     The ability to create something meaningful that helps solve real problems immediately captivated me.",
    "Over the years, I've had the opportunity to work with startups, agencies, and enterprise companies, \
     developing a versatile skill set that allows me to tackle a wide range of challenges. I'm particularly \
     passionate about creating accessible, performant web applications that deliver exceptional user experiences.",
    "Outside of coding, I enjoy contributing to open-source projects, writing technical articles, and mentoring \
     aspiring developers. I believe in continuous learning and staying ahead of industry trends and best practices.",
];

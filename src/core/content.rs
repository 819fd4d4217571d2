//! Static site copy that is not part of the project catalog.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub footer_tagline: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Damir",
    role: "Machine Learning Engineer & Data Scientist",
    tagline: "I build distributed systems and create data-driven solutions. \
              Passionate about transforming complex data into actionable insights.",
    footer_tagline: "Building intelligent solutions with data and code.",
    github: "https://github.com/Damirchik11",
    linkedin: "https://www.linkedin.com/in/damir-kozhamkulov/",
    email: "damir.kozhamkulov2@gmail.com",
};

pub const ABOUT_INTRO: &str = "I'm a passionate Machine Learning Engineer and developer \
     with a focus on building intelligent, data-driven solutions.";

pub const ABOUT_BIO: &[&str] = &[
    "My journey in tech started with a curiosity about how data can be transformed into \
     meaningful insights. I specialize in developing machine learning models, analyzing \
     complex datasets, and creating applications that solve real-world problems.",
    "When I'm not coding, you can find me exploring new ML research papers, contributing \
     to open-source projects, or diving into challenging datasets.",
];

/// A skill with a proficiency level in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", level: 90 },
    Skill { name: "TensorFlow", level: 80 },
    Skill { name: "Pandas", level: 85 },
    Skill { name: "Scikit-learn", level: 80 },
    Skill { name: "React", level: 75 },
    Skill { name: "JavaScript", level: 70 },
    Skill { name: "SQL", level: 75 },
    Skill { name: "Git", level: 85 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "3+", label: "Projects" },
    Stat { value: "5+", label: "Technologies" },
    Stat { value: "∞", label: "Curiosity" },
];

/// An entry in the About accordion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

/// Placeholder entries for the About accordion. Replace with real history
/// before publishing.
pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Your Role",
        organization: "Company Name",
        period: "20XX - Present",
        summary: "Describe what you work on here.",
        highlights: &["Key accomplishment", "Another accomplishment"],
    },
    Experience {
        role: "Your Previous Role",
        organization: "Company Name",
        period: "20XX - 20XX",
        summary: "Describe what you worked on here.",
        highlights: &["Key accomplishment"],
    },
];

/// A row in the contact information list. Rows without `href` render as
/// plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "damir.kozhamkulov2@gmail.com",
        href: Some("mailto:damir.kozhamkulov2@gmail.com"),
    },
    ContactChannel {
        label: "LinkedIn",
        value: "linkedin.com/in/damir-kozhamkulov",
        href: Some("https://www.linkedin.com/in/damir-kozhamkulov/"),
    },
    ContactChannel {
        label: "GitHub",
        value: "github.com/Damirchik11",
        href: Some("https://github.com/Damirchik11"),
    },
    ContactChannel {
        label: "Location",
        value: "Your City, State",
        href: None,
    },
];

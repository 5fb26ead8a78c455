//! Static page content. Everything here is immutable and defined at build
//! time; the components only read it.

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Experience {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

pub struct Highlight {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

/// Role strings the hero typewriter cycles through, in order.
pub const ROLES: &[&str] = &[
    "Full Stack Developer",
    "Gen AI",
    "Open Source Contributor",
    "Problem Solver",
    "AI/ML",
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &["JavaScript", "TypeScript", "Python", "C++"],
    },
    SkillCategory {
        name: "Frontend",
        skills: &["React", "Next.js", "HTML CSS", "Tailwind"],
    },
    SkillCategory {
        name: "Backend",
        skills: &["Node.js", "Flask", "Streamlit", "Django"],
    },
    SkillCategory {
        name: "AI & LLM Tools",
        skills: &["LangChain", "Hugging Face", "Gemini/Groq/LLaMA APIs", "OpenAI"],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Gen AI Wing",
        organization: "Google Developers Group On Campus",
        period: "Sept 2025 - Present",
        description: "Core member in the GenAI field, with experience managing LinkedIn outreach, volunteering, and actively contributing to campaigns and study jams.",
    },
    Experience {
        title: "Member",
        organization: "Science and Technology Council",
        period: "Aug 2025 - Present",
        description: "Web Dev Team",
    },
    Experience {
        title: "Core Team Member",
        organization: "Yantrik",
        period: "Apr 2025 - Sept 2025",
        description: "Worked on a project: Unicycle",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI Email Assistant",
        description: "A Streamlit web app that generates professional or daily use emails using the latest open-source AI models via the Groq API. Enter your requirements and instantly get high-quality email drafts and improvement suggestions.",
        tech: &["Streamlit", "Groq API"],
    },
    Project {
        title: "Memory Haven",
        description: "A full-stack web application where users can securely store personal memories (text, images, audio, or video) that are only accessible after a future unlock date. A digital time capsule platform.",
        tech: &["React", "Node.js", "MongoDB", "JWT Authentication"],
    },
    Project {
        title: "SNTC Website",
        description: "A website to manage club activities and schedule for SNTC, IIT Mandi.",
        tech: &["React", "Next.js", "Vercel"],
    },
    Project {
        title: "BookMyShow",
        description: "A website made using GenAI to book movie tickets online.",
        tech: &["React", "Next.js", "Vercel"],
    },
];

/// Working-style cards shown beside the about paragraphs.
pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Performance First",
        blurb: "Optimizing for speed and efficiency",
    },
    Highlight {
        title: "Scalable Architecture",
        blurb: "Building systems that grow with demand",
    },
    Highlight {
        title: "Clean Code",
        blurb: "Writing maintainable, testable code",
    },
    Highlight {
        title: "Innovation",
        blurb: "Exploring cutting-edge technologies",
    },
];

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        label: "Email",
        value: "khushbu.sharma7105@gmail.com",
        href: "mailto:khushbu.sharma7105@gmail.com",
    },
    ContactEntry {
        label: "LinkedIn",
        value: "Khushbu Sharma",
        href: "https://www.linkedin.com/in/khushbu-sharma-152440351/",
    },
    ContactEntry {
        label: "GitHub",
        value: "@Khushbu710",
        href: "https://github.com/Khushbu710",
    },
];

//! Portfolio project records shown on the home page.
//!
//! The list is compiled into the client and never changes at runtime, so
//! records borrow `'static` strings rather than owning them.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// A single portfolio entry's display data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static str,
    pub image_url: &'static str,
    pub live_url: &'static str,
    pub code_url: &'static str,
}

/// Projects in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI Financial Assistant",
        description: "Built a Gen-AI-powered assistant offering personalized financial advice, budgeting, and savings insights via a natural language interface.",
        tech_stack: "Technology Stack : HTML, CSS, Java Script, Java, Spring Boot, MySQL",
        image_url: "../images/project-placeholder-1.webp",
        live_url: "https://festive-clam-149.convex.app/",
        code_url: "https://github.com/Zehruddin/Gen-AI-Application",
    },
    Project {
        title: "Bank Application",
        description: "Developed a web-based banking system using Java Servlets for customer transactions and account management.",
        tech_stack: "Technology Stack : HTML, CSS, Java Script, Java, Servlets, MySQL",
        image_url: "../images/project-placeholder-2.webp",
        live_url: "https://festive-clam-149.convex.app/",
        code_url: "https://github.com/Zehruddin/Bank-web-application",
    },
    Project {
        title: "Employee Task Tracker",
        description: "Developed a web-based banking system using Java Servlets for customer transactions and account management.",
        tech_stack: "Technology Stack : HTML, CSS, Java Script, Java, Servlets, MySQL",
        image_url: "../images/project-placeholder-3.webp",
        live_url: "https://festive-clam-149.convex.app/",
        code_url: "https://github.com/Zehruddin/Employee_Time_Tracker",
    },
];

/// Expanded details shown in the project modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetails {
    pub overview: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub challenges: &'static str,
}

/// A project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Referenced by the card's `data-project-id` and by the modal
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub repo_url: &'static str,
    pub details: ProjectDetails,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "portfolio-website",
        title: "Personal Portfolio Website",
        description: "A modern, responsive portfolio website built with HTML, CSS, and vanilla JavaScript featuring dark mode, animations, and accessibility.",
        image: "./assets/1000101515.png",
        tags: &["HTML5", "CSS3", "JavaScript", "Responsive Design"],
        live_url: "#",
        repo_url: "https://github.com/poovarasu/portfolio",
        details: ProjectDetails {
            overview: "This portfolio website showcases modern web development practices with a focus on performance, accessibility, and user experience.",
            features: &[
                "Responsive mobile-first design",
                "Dark/light theme switching",
                "Smooth scroll animations",
                "Contact form with validation",
                "Print-friendly resume view",
                "Keyboard navigation support",
            ],
            technologies: &["HTML5", "CSS3", "JavaScript ES6+", "CSS Grid", "Flexbox"],
            challenges: "Implementing smooth animations while maintaining excellent performance scores and ensuring full accessibility compliance.",
        },
    },
    Project {
        id: "task-manager",
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, user authentication, and team collaboration features.",
        image: "./assets/download.jpeg",
        tags: &["React", "Node.js", "MongoDB", "Socket.io"],
        live_url: "#",
        repo_url: "https://github.com/poovarasu/task-manager",
        details: ProjectDetails {
            overview: "A full-stack task management solution designed for teams to collaborate effectively and track project progress.",
            features: &[
                "Real-time collaboration",
                "User authentication & authorization",
                "Drag-and-drop task organization",
                "File attachments and comments",
                "Progress tracking and analytics",
                "Email notifications",
            ],
            technologies: &["React", "Node.js", "Express", "MongoDB", "Socket.io", "JWT"],
            challenges: "Implementing real-time synchronization while maintaining data consistency and handling concurrent user interactions.",
        },
    },
    Project {
        id: "ecommerce-platform",
        title: "E-commerce Platform",
        description: "A modern e-commerce solution with payment integration, inventory management, and admin dashboard.",
        image: "./assets/download (1).jpeg",
        tags: &["Vue.js", "Python", "Django", "PostgreSQL"],
        live_url: "#",
        repo_url: "https://github.com/poovarasu/ecommerce",
        details: ProjectDetails {
            overview: "A comprehensive e-commerce platform built for small to medium businesses with modern web technologies.",
            features: &[
                "Product catalog with search and filters",
                "Shopping cart and checkout process",
                "Payment gateway integration",
                "Order tracking and management",
                "Admin dashboard for inventory",
                "Customer reviews and ratings",
            ],
            technologies: &["Vue.js", "Python", "Django REST Framework", "PostgreSQL", "Stripe API"],
            challenges: "Building a secure payment system and optimizing database queries for large product catalogs.",
        },
    },
];

/// Look up a project by id.
pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn find_project_by_id() {
        assert_eq!(find_project("task-manager").map(|p| p.title), Some("Task Management App"));
        assert!(find_project("does-not-exist").is_none());
    }
}

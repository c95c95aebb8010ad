//! Static site content: profile, packages, projects and the rest of the page copy.

use crate::scope::ProjectType;

#[derive(Debug, Clone, Copy)]
pub struct WhyHireMe {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub deliverables: &'static [&'static str],
    pub turnaround: &'static str,
    pub requirements: &'static str,
    /// Deep link to the matching gig. Falls back to [`Socials::hire_href`].
    pub gig_url: Option<&'static str>,
    pub project_type: ProjectType,
}

#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
    pub meta: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDemo {
    ScopeBuilder,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub tech: &'static [&'static str],
    pub description: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub highlights: &'static [&'static str],
    pub demo: Option<ProjectDemo>,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub kind: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub year: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Socials {
    pub fiverr: &'static str,
    pub fiverr_gig: Option<&'static str>,
    pub github: &'static str,
    pub linkedin: &'static str,
    /// `mailto:` link, empty for marketplace-only contact.
    pub email: &'static str,
}

impl Socials {
    /// Primary call-to-action target: the gig deep link when configured, else the profile.
    pub fn hire_href(&self) -> &'static str {
        self.fiverr_gig.unwrap_or(self.fiverr)
    }

    pub fn email(&self) -> Option<&'static str> {
        Some(self.email).filter(|e| !e.is_empty())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub languages: &'static [&'static str],
    pub headline: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub why_hire_me: &'static [WhyHireMe],
    pub skills: &'static [&'static str],
    pub services: &'static [Service],
    pub process_steps: &'static [ProcessStep],
    pub faq: &'static [FaqItem],
    pub projects: &'static [Project],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub certifications: &'static [Certification],
    pub socials: Socials,
}

impl Profile {
    pub fn order_href(&self, service: &Service) -> &'static str {
        service.gig_url.unwrap_or(self.socials.hire_href())
    }
}

/// In-page anchors shown in the navbar, in page order.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("About", "#about"),
    ("Services", "#services"),
    ("Projects", "#projects"),
    ("Process", "#process"),
    ("FAQ", "#faq"),
    ("Experience", "#experience"),
];

/// Index of the package shown with the "POPULAR" ribbon.
pub const POPULAR_SERVICE: usize = 1;

pub const RISK_REVERSAL: [&str; 4] = [
    "2 revision rounds included",
    "Scope confirmed before coding",
    "Clean handoff (GitHub/ZIP + instructions)",
    "Mobile-first + accessible UI",
];

pub static PROFILE: Profile = Profile {
    name: "Dante",
    handle: "@dominerex",
    title: "Front End Dev",
    location: "Federal Way, WA • Remote",
    languages: &["English"],
    headline: "The \"J.D.\" Developer | Precision & Speed",
    tagline: "I convert Figma/screenshots into pixel-perfect React + Tailwind applications, fast, accessible, and contract-grade.",
    bio: &[
        "I am a US-based developer (Washington State) with a Law background (J.D., Univ. of Michigan). I bring strict legal precision to your code.",
        "I specialize in Rapid UI Conversions. I turn designs, screenshots, or ideas into production-ready React & Tailwind apps in record time.",
    ],
    why_hire_me: &[
        WhyHireMe {
            title: "Reliability",
            description: "I communicate clearly & hit deadlines.",
        },
        WhyHireMe {
            title: "Speed",
            description: "My AI-augmented workflow is 3x faster than standard agencies.",
        },
        WhyHireMe {
            title: "Quality",
            description: "Clean, semantic, mobile-responsive code.",
        },
    ],
    skills: &[
        "Figma designer",
        "Tailwind CSS expert",
        "React expert",
        "JavaScript developer",
        "Html expert",
        "CSS expert",
        "TypeScript",
        "Framer Motion",
        "Spring Boot",
        "Angular",
    ],
    services: &[
        Service {
            title: "Rapid UI Conversion",
            price: "From $99",
            description: "I convert your Figma designs, screenshots, or sketches into pixel-perfect, responsive React & Tailwind code.",
            deliverables: &[
                "Component-based Architecture",
                "Mobile Responsive Layout",
                "Clean, Semantic HTML/CSS",
                "Basic Interactivity",
            ],
            turnaround: "2-3 Days",
            requirements: "Design file (Figma/Sketch) or clear screenshots.",
            gig_url: None,
            project_type: ProjectType::UiConversion,
        },
        Service {
            title: "Landing Page Build",
            price: "From $249",
            description: "A complete, high-converting landing page built for speed and SEO.",
            deliverables: &[
                "All 'Rapid UI' features",
                "Smooth Animations (Framer Motion)",
                "SEO Best Practices",
                "Deployment Setup (Netlify/Vercel)",
            ],
            turnaround: "3-5 Days",
            requirements: "Content (Copy/Images) and Branding guidelines.",
            gig_url: None,
            project_type: ProjectType::LandingPage,
        },
        Service {
            title: "Bug Fix & Refactor",
            price: "From $79",
            description: "I will audit your code, fix specific bugs, or refactor for better performance and maintainability.",
            deliverables: &[
                "Code Audit & Report",
                "Bug Fixes",
                "TypeScript Conversion (Optional)",
                "Performance Optimization",
            ],
            turnaround: "1-3 Days",
            requirements: "Access to codebase (GitHub) and list of issues.",
            gig_url: None,
            project_type: ProjectType::Bugfix,
        },
    ],
    process_steps: &[
        ProcessStep {
            title: "Send your brief",
            description: "Share the design, screenshots or idea plus the pages you need. The scope builder gives you a price range up front.",
            meta: "5 minutes",
        },
        ProcessStep {
            title: "Confirm scope",
            description: "I review the brief, confirm price and timeline in writing, and flag anything unclear before any code is written.",
            meta: "Same day",
        },
        ProcessStep {
            title: "Build & hand off",
            description: "You get a first draft fast, two revision rounds, and a clean handoff with run/build instructions.",
            meta: "1-9 days",
        },
    ],
    faq: &[
        FaqItem {
            question: "What do you need from me to start?",
            answer: "A Figma file is best. Screenshots work too. If you have no design yet, I can guide layout and components, though scope may shift as we go.",
        },
        FaqItem {
            question: "How accurate is the quote preview?",
            answer: "It is a transparent starting range based on pages, extras and deadline. The final price and timeline are confirmed in writing before work begins.",
        },
        FaqItem {
            question: "Do you offer rush delivery?",
            answer: "Yes. Rush compresses the timeline and adds 25% to the price, with limited revision bandwidth, so the scope must be very clear.",
        },
        FaqItem {
            question: "What stack do you deliver?",
            answer: "React + TypeScript with Tailwind, component-based and mobile-first. Deployment to Netlify or Vercel is available.",
        },
        FaqItem {
            question: "How many revisions are included?",
            answer: "Two revision rounds are included in every package.",
        },
    ],
    projects: &[
        Project {
            title: "Contract-Grade Scope Builder",
            tech: &["Rust", "Leptos", "Tailwind"],
            description: "Answer a few questions and get a clean scope summary, price range, and timeline, ready to send.",
            challenge: "Turning a vague request into a clear, priced scope without a sales call.",
            solution: "A three-step wizard over a transparent pricing model that renders a copy/paste scope document and downloadable summary.",
            highlights: &[
                "Live price + timeline estimate",
                "Risk flags for missing designs and rush deadlines",
                "Copy or download the scope summary",
            ],
            demo: Some(ProjectDemo::ScopeBuilder),
        },
        Project {
            title: "SaaS Analytics Dashboard",
            tech: &["React", "TypeScript", "Tailwind", "SVG"],
            description: "A high-performance dashboard for visualizing complex datasets.",
            challenge: "Rendering large datasets without UI lag while maintaining mobile responsiveness.",
            solution: "Built a lightweight, interactive dashboard with SVG charting and a sortable table to demonstrate state + UI performance patterns.",
            highlights: &[
                "Timeframe toggle (7/30/90 days)",
                "SVG chart rendering (no chart library)",
                "Sortable 'Top Pages' table",
            ],
            demo: None,
        },
        Project {
            title: "Marketing Landing Page",
            tech: &["React", "TypeScript", "Tailwind", "Framer Motion"],
            description: "A high-conversion landing page with scroll-triggered animations.",
            challenge: "Creating engaging animations that don't compromise load speed.",
            solution: "Added polished micro-animations and an accessible lead form with validation, loading, and a clean success state.",
            highlights: &[
                "Accessible lead form with validation",
                "Async submit + success state",
                "Mobile-first layout",
            ],
            demo: None,
        },
    ],
    experience: &[
        Experience {
            role: "Full-stack Developer",
            company: "Cognizant",
            kind: "Full-time",
            duration: "Apr 2023 - Feb 2024 • 11 mos",
            location: "Seattle, Washington, United States • Remote",
            description: "Worked within a global Fortune 500 technology consultancy, delivering high-quality solutions for enterprise clients.",
            achievements: &[
                "Operated in a high-compliance, fast-paced environment requiring strict attention to detail.",
                "Collaborated with cross-functional teams to meet rigorous project deadlines.",
                "Maintained professional standards for documentation and deliverables.",
            ],
        },
        Experience {
            role: "Software Developer",
            company: "Revature",
            kind: "Full-time",
            duration: "Mar 2022 - Mar 2023 • 1 yr 1 mo",
            location: "Reston, Virginia, United States • Remote",
            description: "Full-stack Java/React developer, also completed a project using Angular.",
            achievements: &[
                "Developed scalable web applications using React and Angular frameworks.",
                "Implemented backend services with Java Spring Boot.",
                "Utilized Jenkins for CI/CD pipelines to streamline deployment.",
                "Applied Object-Oriented Programming (OOP) principles for maintainable code architecture.",
            ],
        },
    ],
    education: &[
        Education {
            school: "University of Michigan",
            degree: "J.D. Degree, Law",
            year: "Graduated 2007",
        },
        Education {
            school: "Western Michigan University",
            degree: "B.A. Degree, English",
            year: "Graduated 2004",
        },
    ],
    certifications: &[Certification {
        name: "Meta Frontend Developer Professional Certificate",
        issuer: "Coursera/Meta",
        year: "2024",
    }],
    socials: Socials {
        fiverr: "https://www.fiverr.com/dominerex",
        fiverr_gig: None,
        github: "https://github.com/DanteArceneaux",
        linkedin: "https://www.linkedin.com/in/dante-arceneaux-90269247/",
        email: "",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hire_href_falls_back_to_profile() {
        let mut socials = PROFILE.socials;
        assert_eq!(socials.hire_href(), "https://www.fiverr.com/dominerex");
        socials.fiverr_gig = Some("https://www.fiverr.com/dominerex/gig");
        assert_eq!(socials.hire_href(), "https://www.fiverr.com/dominerex/gig");
        assert_eq!(socials.email(), None);
    }

    #[test]
    fn test_order_href_prefers_gig_url() {
        let mut service = PROFILE.services[0];
        assert_eq!(PROFILE.order_href(&service), PROFILE.socials.hire_href());
        service.gig_url = Some("https://www.fiverr.com/dominerex/ui");
        assert_eq!(PROFILE.order_href(&service), "https://www.fiverr.com/dominerex/ui");
    }

    #[test]
    fn test_services_match_package_names() {
        use crate::scope::{estimate, ScopeState};

        for service in PROFILE.services {
            let summary = estimate(&ScopeState {
                project_type: service.project_type,
                ..ScopeState::default()
            });
            assert_eq!(summary.recommended_package, service.title);
        }
        assert!(POPULAR_SERVICE < PROFILE.services.len());
    }

    #[test]
    fn test_nav_links_are_anchors() {
        for (label, href) in NAV_LINKS {
            assert!(href.starts_with('#'), "{label} should be an in-page anchor");
            assert_eq!(&href[1..], href[1..].to_lowercase());
        }
    }

    #[test]
    fn test_single_scope_builder_demo() {
        let demos = PROFILE
            .projects
            .iter()
            .filter(|p| p.demo == Some(ProjectDemo::ScopeBuilder))
            .count();
        assert_eq!(demos, 1);
    }
}

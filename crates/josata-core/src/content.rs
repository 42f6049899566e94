//! Static site catalog: navigation, services, and page copy.
//!
//! Everything in this module is configuration read at render time. It has no
//! lifecycle and no invariants beyond internal consistency, which the tests
//! at the bottom pin down (unique service ids, deep links that resolve).

use serde::Serialize;

/// A top-level navigation entry, optionally with a dropdown of deep links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub dropdown: &'static [NavLink],
}

/// A link into a section of a page, addressed by `?section=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub section: &'static str,
}

/// One consulting service offered on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub details: &'static [&'static str],
    pub image: &'static str,
}

/// A headline number on the stats band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

/// A named logo image, used by the partner and technology marquees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogoRef {
    pub name: &'static str,
    pub url: &'static str,
}

/// One slide of a cinematic image carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub url: &'static str,
    pub code: &'static str,
    pub label: &'static str,
}

/// A step of the delivery process band on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

/// A hover-reveal card: sector frameworks on Solutions, the value cards on
/// About. Same shape, different copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub image: &'static str,
}

/// A way to reach the company, listed on the contact page and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub hint: &'static str,
    pub value: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        path: "/",
        dropdown: &[],
    },
    NavItem {
        label: "About Us",
        path: "/about",
        dropdown: &[],
    },
    NavItem {
        label: "Services",
        path: "/services",
        dropdown: &[
            NavLink {
                label: "IT Consulting",
                path: "/services",
                section: "it-consulting",
            },
            NavLink {
                label: "Software Development",
                path: "/services",
                section: "software-dev",
            },
            NavLink {
                label: "Cloud Solutions",
                path: "/services",
                section: "cloud",
            },
            NavLink {
                label: "Data Analytics",
                path: "/services",
                section: "data-analytics",
            },
            NavLink {
                label: "Cybersecurity",
                path: "/services",
                section: "cybersecurity",
            },
            NavLink {
                label: "Digital Transformation",
                path: "/services",
                section: "digital-transformation",
            },
        ],
    },
    NavItem {
        label: "Solutions",
        path: "/solutions",
        dropdown: &[
            NavLink {
                label: "Digital Transformation",
                path: "/solutions",
                section: "digital",
            },
            NavLink {
                label: "Enterprise Solutions",
                path: "/solutions",
                section: "enterprise",
            },
        ],
    },
    NavItem {
        label: "Careers",
        path: "/careers",
        dropdown: &[],
    },
    NavItem {
        label: "Contact Us",
        path: "/contact",
        dropdown: &[],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        id: "it-consulting",
        title: "IT Consulting",
        description: "Strategizing your technology landscape for future-proof growth.",
        icon: "Cpu",
        details: &[
            "Strategic Planning",
            "Infrastructure Audit",
            "Tech Stack Optimization",
        ],
        image: "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "software-dev",
        title: "Software Development",
        description: "Custom, scalable, and high-performance software tailored to your business.",
        icon: "Code",
        details: &["Web Applications", "Mobile Apps", "Enterprise Software"],
        image: "https://images.unsplash.com/photo-1587620962725-abab7fe55159?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "cloud",
        title: "Cloud Solutions",
        description: "Seamless migration and management of cloud environments.",
        icon: "Cloud",
        details: &["AWS/Azure/GCP", "Cloud Migration", "Serverless Architecture"],
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "data-analytics",
        title: "Data Analytics",
        description: "Transforming raw data into actionable business intelligence.",
        icon: "BarChart3",
        details: &["Big Data", "Predictive Modeling", "Visualization"],
        image: "https://images.unsplash.com/photo-1551288049-bbbda5366a7a?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "cybersecurity",
        title: "Cybersecurity",
        description: "Comprehensive protection for your digital assets and infrastructure.",
        icon: "ShieldCheck",
        details: &["Threat Detection", "Compliance", "Identity Management"],
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&q=80&w=800",
    },
    Service {
        id: "digital-transformation",
        title: "Digital Transformation",
        description: "Modernizing legacy processes with innovative digital technologies.",
        icon: "MonitorSmartphone",
        details: &["Process Automation", "UX/UI Design", "IoT Integration"],
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=800",
    },
];

/// Section anchors that exist on the solutions page.
pub const SOLUTION_SECTIONS: &[&str] = &["digital", "enterprise"];

pub const STATS: &[Stat] = &[
    Stat {
        label: "Projects Completed",
        value: 500,
        suffix: "+",
    },
    Stat {
        label: "Happy Clients",
        value: 150,
        suffix: "+",
    },
    Stat {
        label: "Expert Engineers",
        value: 80,
        suffix: "+",
    },
    Stat {
        label: "Global Offices",
        value: 5,
        suffix: "",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Emily Watson",
        role: "CTO, FinEdge Inc.",
        quote: "Working with Josata was a game-changer for our cloud architecture. Their engineers are top-notch.",
        avatar: "https://i.pravatar.cc/150?u=1",
    },
    Testimonial {
        name: "Robert Klein",
        role: "VP of Product, SaaSly",
        quote: "The custom dashboard they built allowed us to visualize data like never before. Incredible speed and quality.",
        avatar: "https://i.pravatar.cc/150?u=2",
    },
    Testimonial {
        name: "Meera Gupta",
        role: "CEO, HealthTech Solutions",
        quote: "Professionalism and technical depth are Josata's strengths. They really understood our security needs.",
        avatar: "https://i.pravatar.cc/150?u=3",
    },
];

pub const PARTNER_LOGOS: &[LogoRef] = &[
    LogoRef {
        name: "Nvidia",
        url: "https://cdn.worldvectorlogo.com/logos/nvidia.svg",
    },
    LogoRef {
        name: "Google Cloud",
        url: "https://cdn.worldvectorlogo.com/logos/google-cloud-1.svg",
    },
    LogoRef {
        name: "Microsoft",
        url: "https://cdn.worldvectorlogo.com/logos/microsoft-6.svg",
    },
    LogoRef {
        name: "AWS",
        url: "https://cdn.worldvectorlogo.com/logos/amazon-web-services-2.svg",
    },
    LogoRef {
        name: "Cisco",
        url: "https://cdn.worldvectorlogo.com/logos/cisco-2.svg",
    },
    LogoRef {
        name: "Oracle",
        url: "https://cdn.worldvectorlogo.com/logos/oracle-6.svg",
    },
];

pub const TECHNOLOGIES: &[LogoRef] = &[
    LogoRef {
        name: "Azure",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/azure/azure-original.svg",
    },
    LogoRef {
        name: "Docker",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg",
    },
    LogoRef {
        name: "Kubernetes",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/kubernetes/kubernetes-plain.svg",
    },
    LogoRef {
        name: "React",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
    },
    LogoRef {
        name: "Angular",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/angularjs/angularjs-original.svg",
    },
    LogoRef {
        name: "AWS",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original-wordmark.svg",
    },
    LogoRef {
        name: "Node.js",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
    },
    LogoRef {
        name: "Python",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
    },
    LogoRef {
        name: "TypeScript",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
    },
    LogoRef {
        name: "PostgreSQL",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg",
    },
    LogoRef {
        name: "Google Cloud",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/googlecloud/googlecloud-original.svg",
    },
    LogoRef {
        name: "MongoDB",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg",
    },
    LogoRef {
        name: "Java",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg",
    },
    LogoRef {
        name: "Spring Boot",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/spring/spring-original.svg",
    },
    LogoRef {
        name: "Go",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/go/go-original-wordmark.svg",
    },
    LogoRef {
        name: "Rust",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-plain.svg",
    },
    LogoRef {
        name: "Vue.js",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vuejs/vuejs-original.svg",
    },
    LogoRef {
        name: "Next.js",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nextjs/nextjs-original.svg",
    },
    LogoRef {
        name: "Flutter",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flutter/flutter-original.svg",
    },
    LogoRef {
        name: "TensorFlow",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tensorflow/tensorflow-original.svg",
    },
    LogoRef {
        name: "Redis",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/redis/redis-original.svg",
    },
    LogoRef {
        name: "GraphQL",
        url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/graphql/graphql-plain.svg",
    },
];

pub const HERO_SLIDES: &[Slide] = &[
    Slide {
        url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&q=90&w=1600",
        code: "SOURCE_CORE.01",
        label: "Systems Architecture",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1542831371-29b0f74f9713?auto=format&fit=crop&q=90&w=1600",
        code: "SYNTAX_FLOW.02",
        label: "Neural Engineering",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?auto=format&fit=crop&q=90&w=1600",
        code: "INTERFACE.03",
        label: "Logic Systems",
    },
];

pub const ABOUT_SLIDES: &[Slide] = &[
    Slide {
        url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&fit=crop&q=80&w=1200",
        code: "TEAM_SYNC.01",
        label: "Collaborative Intelligence",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=1200",
        code: "HQ_NODE.02",
        label: "Strategic Global HQ",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&q=80&w=1200",
        code: "CORE_DEV.03",
        label: "Principal Engineering",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80&w=1200",
        code: "R&D_ZONE.04",
        label: "Innovation Laboratory",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=1200",
        code: "PLAN_V3.05",
        label: "Future Roadmaps",
    },
];

pub const SOLUTION_SLIDES: &[Slide] = &[
    Slide {
        url: "https://images.unsplash.com/photo-1551288049-bbbda5366a7a?auto=format&fit=crop&q=80&w=1200",
        code: "DATA_NODE.01",
        label: "Predictive Analytics",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?auto=format&fit=crop&q=80&w=1200",
        code: "BIO_CORE.02",
        label: "Bio-Tech Sync",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?auto=format&fit=crop&q=80&w=1200",
        code: "AUTO_MECH.03",
        label: "Autonomous Systems",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80&w=1200",
        code: "CLOUD_STRAT.04",
        label: "Cloud Governance",
    },
    Slide {
        url: "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&q=80&w=1200",
        code: "SEC_PROTOCOL.05",
        label: "Quantum Security",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        icon: "Layout",
        title: "Plan",
        detail: "Strategy sessions to define architecture and goals.",
    },
    ProcessStep {
        icon: "Settings",
        title: "Develop",
        detail: "Agile sprints with high-quality engineering.",
    },
    ProcessStep {
        icon: "Rocket",
        title: "Deploy",
        detail: "Seamless cloud integration and launch.",
    },
    ProcessStep {
        icon: "Headphones",
        title: "Support",
        detail: "24/7 maintenance and iterative optimization.",
    },
];

pub const SECTORS: &[RevealCard] = &[
    RevealCard {
        icon: "Briefcase",
        title: "Finance",
        detail: "Secure decentralized ledgers and high-frequency trading pipes.",
        image: "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&q=80&w=800",
    },
    RevealCard {
        icon: "Activity",
        title: "Healthcare",
        detail: "Neural-linked diagnostic tools and distributed patient data clouds.",
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?auto=format&fit=crop&q=80&w=800",
    },
    RevealCard {
        icon: "ShoppingCart",
        title: "Logistics",
        detail: "Global supply-chain optimization through autonomous AI routers.",
        image: "https://images.unsplash.com/photo-1551288049-bbbda5366a7a?auto=format&fit=crop&q=80&w=800",
    },
    RevealCard {
        icon: "Cpu",
        title: "Manuf.",
        detail: "Real-time structural health monitoring for industrial heavy-lifts.",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=800",
    },
];

pub const VALUES: &[RevealCard] = &[
    RevealCard {
        icon: "Shield",
        title: "Integrity",
        detail: "Absolute transparency in every neural connection. We build trust through code.",
        image: "https://images.unsplash.com/photo-1542831371-29b0f74f9713?auto=format&fit=crop&q=80&w=600",
    },
    RevealCard {
        icon: "Zap",
        title: "Velocity",
        detail: "Rapid deployment without systemic instability. We engineer for speed and scale.",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&q=80&w=600",
    },
    RevealCard {
        icon: "Globe",
        title: "Sovereignty",
        detail: "Giving clients control over their digital destiny in an interconnected world.",
        image: "https://images.unsplash.com/photo-1587620962725-abab7fe55159?auto=format&fit=crop&q=80&w=600",
    },
    RevealCard {
        icon: "Award",
        title: "Legacy",
        detail: "Building high-performance systems that outlast technological cycles and trends.",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=600",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "Mail",
        title: "Email Us",
        hint: "Our support team is here for you.",
        value: "hr@josata.com",
    },
    ContactChannel {
        icon: "Phone",
        title: "Call Us",
        hint: "Mon-Fri from 9am to 6pm.",
        value: "+1 (800) JOSATA-IT",
    },
    ContactChannel {
        icon: "MapPin",
        title: "Visit Us",
        hint: "Come say hello at our HQ.",
        value: "IT Park, Madhurawada, Visakhapatnam, AP 530048",
    },
];

/// Footer "Services" column: deep links into the services page.
pub const FOOTER_SERVICE_LINKS: &[NavLink] = &[
    NavLink {
        label: "Cloud Migration",
        path: "/services",
        section: "cloud",
    },
    NavLink {
        label: "Custom Software",
        path: "/services",
        section: "software-dev",
    },
    NavLink {
        label: "Cybersecurity Audit",
        path: "/services",
        section: "cybersecurity",
    },
    NavLink {
        label: "Big Data Analytics",
        path: "/services",
        section: "data-analytics",
    },
    NavLink {
        label: "AI & Machine Learning",
        path: "/services",
        section: "digital-transformation",
    },
];

/// All services, in display order.
pub fn services() -> &'static [Service] {
    SERVICES
}

/// Look up a service by its section id.
pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_ids_are_unique() {
        let mut ids: Vec<_> = SERVICES.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn test_nav_dropdown_links_resolve() {
        for item in NAV_ITEMS {
            for link in item.dropdown {
                let resolves = match link.path {
                    "/services" => service_by_id(link.section).is_some(),
                    "/solutions" => SOLUTION_SECTIONS.contains(&link.section),
                    other => panic!("dropdown link into unknown page {}", other),
                };
                assert!(resolves, "dead deep link: {}?section={}", link.path, link.section);
            }
        }
    }

    #[test]
    fn test_footer_service_links_resolve() {
        for link in FOOTER_SERVICE_LINKS {
            assert!(
                service_by_id(link.section).is_some(),
                "dead footer link: {}",
                link.section
            );
        }
    }

    #[test]
    fn test_nav_covers_every_route() {
        let paths: Vec<_> = NAV_ITEMS.iter().map(|i| i.path).collect();
        for expected in ["/", "/about", "/services", "/solutions", "/careers", "/contact"] {
            assert!(paths.contains(&expected), "route {} missing from nav", expected);
        }
    }

    #[test]
    fn test_service_lookup() {
        let cloud = service_by_id("cloud").unwrap();
        assert_eq!(cloud.title, "Cloud Solutions");
        assert!(service_by_id("blockchain").is_none());
    }

    #[test]
    fn test_every_service_has_three_details() {
        for service in SERVICES {
            assert_eq!(service.details.len(), 3, "{}", service.id);
        }
    }
}

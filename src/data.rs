//! Static display data. Everything here is read-only configuration consumed
//! by the page components; there is no other data source for projects,
//! certifications or skills.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub brand: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_id: Option<&'static str>,
    pub image: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent used for the icon block and the pointer-follow glow overlay.
    pub glow_color: &'static str,
    pub icon: &'static str,
    pub features: &'static [Feature],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        href: "/",
    },
    NavItem {
        label: "About",
        href: "/about",
    },
    NavItem {
        label: "Portfolio",
        href: "/portfolio",
    },
    NavItem {
        label: "Blog",
        href: "/blog",
    },
    NavItem {
        label: "Contact",
        href: "/contact",
    },
];

/// Rotating hero tagline, one line per specialization.
pub const HERO_ROLES: &[&str] = &[
    "Fullstack Developer Specializing in • Software Engineering",
    "Fullstack Developer Specializing in • Data Science/AI",
    "Fullstack Developer Specializing in • Cybersecurity",
    "Fullstack Developer Specializing in • IoT Engineering",
];

pub const SCROLL_MESSAGE: &str = "Building systems that connect code, data and hardware";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        brand: "Fullstack Development",
        description: "Modern e-commerce solution built with React, Node.js, and MongoDB. Features real-time inventory management, payment integration, and responsive design.",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        image_url: "/images/project-ecommerce.jpg",
        link: "/portfolio#ecommerce-platform",
    },
    Project {
        id: 2,
        title: "AI-Powered Analytics Dashboard",
        brand: "Data Science/AI",
        description: "Machine learning dashboard for business intelligence with predictive analytics, real-time data visualization, and automated reporting.",
        tags: &["Python", "TensorFlow", "React", "D3.js"],
        image_url: "/images/project-ai-dashboard.jpg",
        link: "/portfolio#ai-dashboard",
    },
    Project {
        id: 3,
        title: "Cybersecurity Monitoring System",
        brand: "Cybersecurity",
        description: "Advanced security monitoring platform with threat detection, vulnerability assessment, and incident response automation.",
        tags: &["Python", "Docker", "Elasticsearch", "React"],
        image_url: "/images/project-security.jpg",
        link: "/portfolio#security-system",
    },
    Project {
        id: 4,
        title: "IoT Smart Home Hub",
        brand: "IoT Engineering",
        description: "Centralized IoT management system for smart home devices with real-time monitoring, automation, and mobile app integration.",
        tags: &["Arduino", "React Native", "Node.js", "MQTT"],
        image_url: "/images/project-iot.jpg",
        link: "/portfolio#iot-hub",
    },
    Project {
        id: 5,
        title: "Social Media Management Tool",
        brand: "Software Engineering",
        description: "Comprehensive social media management platform with content scheduling, analytics, and multi-platform integration.",
        tags: &["Vue.js", "Laravel", "Redis", "API Integration"],
        image_url: "/images/project-social.jpg",
        link: "/portfolio#social-media-tool",
    },
];

pub const SKILL_CARDS: &[SkillCard] = &[
    SkillCard {
        id: "fullstack",
        title: "Fullstack Software Engineer",
        description: "Building robust end-to-end web applications, from interactive user interfaces to scalable backend architectures.",
        glow_color: "#3b82f6",
        icon: "devicon-react-original",
        features: &[
            Feature {
                icon: "devicon-react-original",
                text: "React/Next.js",
            },
            Feature {
                icon: "devicon-mongodb-plain",
                text: "MySQL/MongoDB",
            },
        ],
    },
    SkillCard {
        id: "data-ai",
        title: "Data Science & AI Engineer",
        description: "Developing machine learning models and AI solutions, from data analysis through deploying models to production environments.",
        glow_color: "#f97316",
        icon: "devicon-python-plain",
        features: &[
            Feature {
                icon: "devicon-python-plain",
                text: "Pandas, Scikit",
            },
            Feature {
                icon: "devicon-tensorflow-original",
                text: "ML Models",
            },
        ],
    },
    SkillCard {
        id: "cybersecurity",
        title: "Cybersecurity",
        description: "Protecting digital infrastructure with vulnerability analysis, penetration testing, and security protocol implementation.",
        glow_color: "#ef4444",
        icon: "devicon-linux-plain",
        features: &[
            Feature {
                icon: "devicon-kalilinux-plain",
                text: "Ethical Hacking & Pentesting",
            },
            Feature {
                icon: "devicon-azure-plain",
                text: "Network & Cloud Security",
            },
        ],
    },
    SkillCard {
        id: "iot",
        title: "IoT Engineer",
        description: "Designing and building connected device ecosystems, integrating hardware, firmware, and cloud platforms.",
        glow_color: "#8b5cf6",
        icon: "devicon-arduino-plain",
        features: &[
            Feature {
                icon: "devicon-embeddedc-plain",
                text: "Microcontrollers (ESP32)",
            },
            Feature {
                icon: "devicon-googlecloud-plain",
                text: "MQTT & Cloud Integration",
            },
        ],
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Software Engineering",
        icon: "💻",
        skills: &[
            Skill {
                name: "JavaScript/TypeScript",
                level: "Expert",
            },
            Skill {
                name: "React/Vue",
                level: "Expert",
            },
            Skill {
                name: "Node.js/Python",
                level: "Advanced",
            },
            Skill {
                name: "Cloud (AWS/GCP)",
                level: "Advanced",
            },
        ],
    },
    SkillCategory {
        title: "Data Science & AI",
        icon: "📈",
        skills: &[
            Skill {
                name: "Python (Pandas, NumPy)",
                level: "Advanced",
            },
            Skill {
                name: "Machine Learning",
                level: "Intermediate",
            },
            Skill {
                name: "TensorFlow/PyTorch",
                level: "Intermediate",
            },
            Skill {
                name: "Data Visualization",
                level: "Advanced",
            },
        ],
    },
    SkillCategory {
        title: "Cybersecurity",
        icon: "🔒",
        skills: &[
            Skill {
                name: "OWASP Top 10",
                level: "Expert",
            },
            Skill {
                name: "Secure Coding",
                level: "Advanced",
            },
            Skill {
                name: "Penetration Testing",
                level: "Intermediate",
            },
            Skill {
                name: "Compliance (GDPR, HIPAA)",
                level: "Advanced",
            },
        ],
    },
    SkillCategory {
        title: "IoT Solutions",
        icon: "🌐",
        skills: &[
            Skill {
                name: "Embedded Systems",
                level: "Advanced",
            },
            Skill {
                name: "Arduino/Raspberry Pi",
                level: "Expert",
            },
            Skill {
                name: "MQTT/CoAP Protocols",
                level: "Advanced",
            },
            Skill {
                name: "Edge Computing",
                level: "Intermediate",
            },
        ],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Senior Fullstack Developer",
        company: "Tech Innovations Inc.",
        period: "2022 - Present",
        description: "Leading development of scalable web applications using React, Node.js, and cloud technologies. Implemented CI/CD pipelines and mentored junior developers.",
    },
    Experience {
        title: "Software Engineer",
        company: "Digital Solutions Ltd.",
        period: "2020 - 2022",
        description: "Developed and maintained multiple client projects using Python, Django, and React. Integrated third-party APIs and implemented security best practices.",
    },
    Experience {
        title: "Junior Developer",
        company: "StartUp Ventures",
        period: "2018 - 2020",
        description: "Built MVPs for startup clients using various technologies. Gained experience in full development lifecycle from conception to deployment.",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        date: "March 2024",
        credential_id: Some("AWS-SAA-4821"),
        image: "/certs/aws-solutions-architect.webp",
        href: Some("https://www.credly.com/badges/aws-saa-4821"),
    },
    Certification {
        title: "TensorFlow Developer Certificate",
        issuer: "Google",
        date: "November 2023",
        credential_id: Some("TF-DEV-59207"),
        image: "/certs/tensorflow-developer.webp",
        href: Some("https://www.credential.net/tf-dev-59207"),
    },
    Certification {
        title: "Certified Ethical Hacker",
        issuer: "EC-Council",
        date: "July 2023",
        credential_id: Some("ECC-CEH-77310"),
        image: "/certs/ceh.webp",
        href: Some("https://aspen.eccouncil.org/verify/ECC-CEH-77310"),
    },
    Certification {
        title: "CompTIA Security+",
        issuer: "CompTIA",
        date: "February 2023",
        credential_id: Some("COMP-SEC-20931"),
        image: "/certs/security-plus.webp",
        href: None,
    },
    Certification {
        title: "Professional Data Engineer",
        issuer: "Google Cloud",
        date: "September 2024",
        credential_id: None,
        image: "/certs/gcp-data-engineer.webp",
        href: None,
    },
    Certification {
        title: "Azure IoT Developer Specialty",
        issuer: "Microsoft",
        date: "May 2024",
        credential_id: Some("AZ-220-11458"),
        image: "/certs/azure-iot.webp",
        href: Some("https://learn.microsoft.com/credentials/az-220-11458"),
    },
    Certification {
        title: "Kubernetes Application Developer",
        issuer: "Cloud Native Computing Foundation",
        date: "January 2024",
        credential_id: Some("CKAD-2024-0117"),
        image: "/certs/ckad.webp",
        href: None,
    },
    Certification {
        title: "Cisco CCNA",
        issuer: "Cisco",
        date: "October 2022",
        credential_id: None,
        image: "/certs/ccna.webp",
        href: None,
    },
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: "✉️",
        label: "Email",
        value: "zen.bisnis17@gmail.com",
        href: Some("mailto:zen.bisnis17@gmail.com"),
    },
    ContactDetail {
        icon: "📞",
        label: "Phone",
        value: "+62-857-9166-3369",
        href: Some("tel:+6285791663369"),
    },
    ContactDetail {
        icon: "📍",
        label: "Location",
        value: "Malang, Indonesia",
        href: None,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: "devicon-github-original",
        url: "https://github.com/Aftaza",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "devicon-linkedin-plain",
        url: "https://id.linkedin.com/in/m-alfian-taftazani-2a456124b",
    },
    SocialLink {
        name: "TikTok",
        icon: "extra-tiktok",
        url: "https://www.tiktok.com/@zentaza_official",
    },
];

//! The site's content. Edit here to change what the site shows.

use super::*;

pub static CONTENT: SiteContent = SiteContent {
    profile: Profile {
        name: "Daniel Rajakumar",
        role: "CS Student • Builder",
        location: "New Jersey, USA",
        email: "daniel@example.com",
        phone: "+1 (000) 000-0000",
        resume_url: "/assets/resume.pdf",
        status: Availability { label: "Open to internships / Freelance", available: true },
        birthday: DateEntry { label: "June 23, 1999", datetime: "1999-06-23" },
        avatar: "/assets/images/my-avatar.svg",
        about: &[
            "I build modern web apps and AI-powered projects. I like clean UI, fast performance, and practical features.",
            "Currently focused on shipping projects that are actually useful.",
        ],
    },

    socials: &[
        SocialLink { label: "GitHub", href: "https://github.com/" },
        SocialLink { label: "LinkedIn", href: "https://linkedin.com/" },
        SocialLink { label: "Instagram", href: "https://instagram.com/" },
    ],

    education: &[TimelineItem {
        title: "B.S. Computer Science",
        org: "Your College",
        range: "2023 — 2027",
        details: TimelineDetails::Text("Focus: Web Development, AI/ML, Systems."),
        coursework: &[],
    }],

    experience: &[TimelineItem {
        title: "Student Leader / Builder",
        org: "Clubs & Projects",
        range: "2024 — Present",
        details: TimelineDetails::Text("Built event systems, web apps, and led campus projects."),
        coursework: &[],
    }],

    skills: &[
        Skill { name: "TypeScript", level: 80 },
        Skill { name: "Next.js", level: 75 },
        Skill { name: "Tailwind", level: 85 },
        Skill { name: "React", level: 80 },
    ],

    services: &[
        Service {
            title: "Web design",
            description: "Modern, thoughtful layouts built with usability and polish in mind.",
            icon: ServiceIcon::Design,
        },
        Service {
            title: "Web development",
            description: "High-quality, performant sites and apps shipped with care.",
            icon: ServiceIcon::Dev,
        },
        Service {
            title: "Mobile apps",
            description: "Cross-platform experiences that feel fast and native.",
            icon: ServiceIcon::App,
        },
        Service {
            title: "Photography",
            description: "Clean visual storytelling with an editorial eye.",
            icon: ServiceIcon::Photo,
        },
    ],

    testimonials: &[
        Testimonial {
            name: "Daniel Lewis",
            avatar: "/assets/images/avatar-1.svg",
            date: "2021-06-14",
            text: "Daniel was hired to create a corporate identity. We were very pleased with the work done. He has a lot of experience and is very concerned about the needs of the client.",
        },
        Testimonial {
            name: "Jessica Miller",
            avatar: "/assets/images/avatar-2.svg",
            date: "2021-05-28",
            text: "Daniel took a complex brief and turned it into a clean product experience. The process was collaborative and the outcome was better than expected.",
        },
        Testimonial {
            name: "Emily Evans",
            avatar: "/assets/images/avatar-3.svg",
            date: "2021-04-18",
            text: "The attention to detail was impressive, and the final site loads fast while looking sharp on every screen.",
        },
        Testimonial {
            name: "Henry William",
            avatar: "/assets/images/avatar-4.svg",
            date: "2021-03-09",
            text: "Reliable, organized, and thoughtful. Delivered on time and made the whole build feel smooth.",
        },
    ],

    clients: &[
        Client { name: "client-1", logo: "/assets/images/logo-1.svg" },
        Client { name: "client-2", logo: "/assets/images/logo-2.svg" },
        Client { name: "client-3", logo: "/assets/images/logo-3.svg" },
        Client { name: "client-4", logo: "/assets/images/logo-4.svg" },
        Client { name: "client-5", logo: "/assets/images/logo-5.svg" },
        Client { name: "client-6", logo: "/assets/images/logo-6.svg" },
    ],

    projects: &[
        Project {
            title: "RockyGPT",
            category: ProjectCategory::WebDevelopment,
            description: "Campus assistant concept with an AI-backed chat flow.",
            tech: &["Next.js", "TypeScript", "AI"],
            image: "/assets/images/project-1.svg",
            links: &[
                ProjectLink { label: "GitHub", href: "https://github.com/" },
                ProjectLink { label: "Live", href: "https://example.com" },
            ],
            status: None,
        },
        Project {
            title: "Canoga (JS)",
            category: ProjectCategory::Applications,
            description: "Dice + strategy game implementation for web.",
            tech: &["JavaScript", "Game Logic"],
            image: "/assets/images/project-2.svg",
            links: &[],
            status: None,
        },
        Project {
            title: "Fundo",
            category: ProjectCategory::WebDesign,
            description: "Landing page exploration with clean typography and spacing.",
            tech: &["Design", "UI"],
            image: "/assets/images/project-3.svg",
            links: &[],
            status: None,
        },
        Project {
            title: "MetaSpark",
            category: ProjectCategory::WebDesign,
            description: "Brand-forward layout with playful visuals.",
            tech: &["Branding", "Web"],
            image: "/assets/images/project-4.svg",
            links: &[],
            status: None,
        },
        Project {
            title: "Summary",
            category: ProjectCategory::WebDevelopment,
            description: "A minimal productivity site for teams.",
            tech: &["Next.js", "UI"],
            image: "/assets/images/project-5.svg",
            links: &[],
            status: None,
        },
        Project {
            title: "Task Manager",
            category: ProjectCategory::Applications,
            description: "Simple task app concept with boards and filters.",
            tech: &["App", "UX"],
            image: "/assets/images/project-6.svg",
            links: &[],
            status: None,
        },
    ],

    blog_posts: &[
        BlogPost {
            title: "Design conferences in 2025",
            category: "Design",
            date: "2025-02-23",
            excerpt: "A quick rundown of the events I am tracking this year.",
            image: "/assets/images/blog-1.svg",
        },
        BlogPost {
            title: "Best fonts every designer uses",
            category: "Design",
            date: "2025-02-16",
            excerpt: "A short list of typefaces that work across web and print.",
            image: "/assets/images/blog-2.svg",
        },
        BlogPost {
            title: "Building with intent",
            category: "Product",
            date: "2025-01-30",
            excerpt: "How I keep projects tight, useful, and easy to ship.",
            image: "/assets/images/blog-3.svg",
        },
    ],
};

use super::{
    Experience, Icon, LinkKind, Profile, Project, ProjectStatus, Skill, SkillCategory, SkillLevel,
};

pub static PROFILE: Profile = Profile {
    name: "Iain Zechender",
    title: "Homelab Engineer • Full-Stack Tinkerer",
    location: Some("Bowling Green, Kentucky"),
    summary: "I build reliable homelab systems and tools: Proxmox clusters, TrueNAS storage, network automation, and custom web apps. I like clean UIs with clear purpose.",
    links: &[
        (LinkKind::GitHub, "https://github.com/MrZech"),
        (LinkKind::LinkedIn, "https://www.linkedin.com/in/your-handle/"),
        (LinkKind::Email, "mailto:mrzech@zechender.com"),
    ],
    resume_url: Some("/resume.pdf"),
    logo_url: Some("/logo.png"),
};

pub static SKILLS: &[Skill] = &[
    Skill {
        label: "HTML/CSS/JS",
        icon: Icon::Cpu,
        level: SkillLevel::Advanced,
        score: 85,
        category: SkillCategory::Frontend,
    },
    Skill {
        label: "PHP & SQL",
        icon: Icon::Database,
        level: SkillLevel::Advanced,
        score: 80,
        category: SkillCategory::Backend,
    },
    Skill {
        label: "C# / .NET",
        icon: Icon::Cog,
        level: SkillLevel::Intermediate,
        score: 60,
        category: SkillCategory::Backend,
    },
    Skill {
        label: "Proxmox / TrueNAS",
        icon: Icon::Server,
        level: SkillLevel::Intermediate,
        score: 65,
        category: SkillCategory::Infrastructure,
    },
    Skill {
        label: "Python",
        icon: Icon::Server,
        level: SkillLevel::Beginner,
        score: 30,
        category: SkillCategory::Backend,
    },
    Skill {
        label: "Docker & Compose",
        icon: Icon::Boxes,
        level: SkillLevel::Beginner,
        score: 35,
        category: SkillCategory::Infrastructure,
    },
    Skill {
        label: "OPNsense / Routing",
        icon: Icon::Network,
        level: SkillLevel::Working,
        score: 45,
        category: SkillCategory::Networking,
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        name: "Nebula Control (WIP)",
        description: "Unifi-inspired homelab dashboard with live system cards for Proxmox, containers, and TrueNAS pools.",
        tags: &["React", "Tailwind", "Flask API", "Recharts"],
        link: Some("#"),
        status: Some(ProjectStatus::WorkInProgress),
    },
    Project {
        name: "Timeclock Web App",
        description: "Bootstrap/PHP timeclock with admin panel, QR check-ins, and hourly/volunteer reporting.",
        tags: &["PHP", "MySQL", "Bootstrap"],
        link: Some("#"),
        status: Some(ProjectStatus::Active),
    },
    Project {
        name: "Drive Wipe & Clone Suite",
        description: "Parallel disk wipe/clone tools for Dell T330 with logs, progress, and registry.",
        tags: &["Python", "Bash", "smartctl", "perccli"],
        link: Some("#"),
        status: Some(ProjectStatus::Active),
    },
    Project {
        name: "LAN Service Start Page",
        description: "Auto-discovers local services and renders a categorized start page with health indicators.",
        tags: &["Node", "mDNS", "Docker"],
        link: Some("#"),
        status: None,
    },
];

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Homelab Architect (Personal)",
        period: "2021 — Present",
        bullets: &[
            "Built Proxmox cluster (Lenovo SR650, HPE DL325 G10, Custom 'ProxBox') with LXC/VM workloads and GPU offload.",
            "TrueNAS storage with SMB/NFS shares; 10Gb SFP+ backbone",
            "Unifi networking VPN's, Firewalls, and Access Points.",
        ],
    },
    Experience {
        role: "Full-Stack Projects",
        period: "Ongoing",
        bullets: &[
            "Timeclock suite (PHP/MySQL) incl. volunteer module and reporting.",
            "Frigate NVR tuning with go2rtc live streams and VAAPI/QuickSync.",
            "Internal tools: Dockerized services, start pages, and health reporters.",
            "Custom automation for drive wiping, imaging, and inventory management.",
        ],
    },
];

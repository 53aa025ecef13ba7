//! Static marketing copy rendered by the public pages.

pub struct Service {
    pub title: &'static str,
    /// Value submitted as `serviceType` by the quote forms.
    pub service_type: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub position: &'static str,
    pub bio: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Air Freight",
        service_type: "Air Freight",
        description: "Fast and reliable air cargo services for time-sensitive shipments worldwide.",
        features: &[
            "Express delivery options",
            "Real-time tracking",
            "Customs clearance support",
            "Temperature-controlled cargo",
            "Dangerous goods handling",
            "Door-to-door service",
        ],
        benefits: &[
            "Fastest transit times",
            "High security standards",
            "Global network coverage",
            "24/7 customer support",
        ],
    },
    Service {
        title: "Ocean Freight",
        service_type: "Ocean Freight",
        description: "Cost-effective sea freight solutions for bulk cargo with comprehensive port services.",
        features: &[
            "FCL & LCL options",
            "Port-to-port delivery",
            "Container tracking",
            "Cargo insurance",
            "Documentation handling",
            "Multi-modal connections",
        ],
        benefits: &[
            "Most economical for bulk cargo",
            "Environmentally friendly",
            "High capacity handling",
            "Global port network",
        ],
    },
    Service {
        title: "Ground Transport",
        service_type: "Ground Transport",
        description: "Comprehensive land transportation services with nationwide coverage.",
        features: &[
            "LTL & FTL services",
            "Specialized equipment",
            "Last-mile delivery",
            "Cross-docking facilities",
            "Route optimization",
            "Fleet management",
        ],
        benefits: &[
            "Flexible scheduling",
            "Cost-effective for regional transport",
            "Direct delivery options",
            "Real-time visibility",
        ],
    },
    Service {
        title: "Warehousing & Distribution",
        service_type: "Warehousing",
        description: "Modern warehouse facilities with advanced inventory management systems.",
        features: &[
            "Inventory management",
            "Order fulfillment",
            "Pick & pack services",
            "Quality control",
            "Returns processing",
            "Value-added services",
        ],
        benefits: &[
            "Reduced operational costs",
            "Improved order accuracy",
            "Scalable solutions",
            "Strategic locations",
        ],
    },
    Service {
        title: "Customs Clearance",
        service_type: "Customs Clearance",
        description: "Expert customs brokerage services ensuring smooth clearance processes.",
        features: &[
            "Customs documentation",
            "Duty & tax calculation",
            "Trade compliance",
            "ATA Carnet processing",
            "Temporary imports",
            "Free trade agreements",
        ],
        benefits: &[
            "Faster clearance times",
            "Compliance assurance",
            "Cost optimization",
            "Risk mitigation",
        ],
    },
    Service {
        title: "Supply Chain Consulting",
        service_type: "Supply Chain",
        description: "End-to-end supply chain optimization with advanced analytics and consulting.",
        features: &[
            "Supply chain analysis",
            "Process optimization",
            "Technology integration",
            "Performance metrics",
            "Risk assessment",
            "Strategic planning",
        ],
        benefits: &[
            "Improved efficiency",
            "Cost reduction",
            "Enhanced visibility",
            "Competitive advantage",
        ],
    },
];

pub const WHY_CHOOSE_US: &[Highlight] = &[
    Highlight {
        title: "Global Network",
        description: "Extensive worldwide coverage across 150+ countries",
    },
    Highlight {
        title: "24/7 Support",
        description: "Round-the-clock customer service and tracking",
    },
    Highlight {
        title: "Secure & Reliable",
        description: "99.9% delivery success rate with full insurance coverage",
    },
    Highlight {
        title: "Industry Expertise",
        description: "25+ years of experience in international logistics",
    },
];

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "1999",
        title: "Company Founded",
        description: "Started as a small freight forwarding company",
    },
    Milestone {
        year: "2005",
        title: "Global Expansion",
        description: "Opened offices in 25 countries",
    },
    Milestone {
        year: "2010",
        title: "Technology Integration",
        description: "Launched advanced tracking systems",
    },
    Milestone {
        year: "2015",
        title: "Supply Chain Solutions",
        description: "Expanded into comprehensive logistics consulting",
    },
    Milestone {
        year: "2020",
        title: "Digital Transformation",
        description: "Implemented AI-powered optimization",
    },
    Milestone {
        year: "2024",
        title: "Sustainable Logistics",
        description: "Leading green logistics initiatives",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "John Martinez",
        position: "CEO & Founder",
        bio: "25+ years in international logistics and supply chain management",
    },
    TeamMember {
        name: "Sarah Chen",
        position: "COO",
        bio: "Expert in operational excellence and global logistics networks",
    },
    TeamMember {
        name: "Michael Rodriguez",
        position: "CTO",
        bio: "Technology innovator specializing in logistics automation",
    },
    TeamMember {
        name: "Emma Thompson",
        position: "VP of Sales",
        bio: "Building strategic partnerships across global markets",
    },
];

pub const CERTIFICATIONS: &[Highlight] = &[
    Highlight {
        title: "ISO 9001:2015",
        description: "Quality Management Systems",
    },
    Highlight {
        title: "ISO 14001:2015",
        description: "Environmental Management",
    },
    Highlight {
        title: "AEO Certification",
        description: "Authorized Economic Operator",
    },
    Highlight {
        title: "C-TPAT Certified",
        description: "Customs-Trade Partnership",
    },
];

pub const HOME_STATS: &[Stat] = &[
    Stat {
        value: "150+",
        label: "Countries Served",
    },
    Stat {
        value: "25+",
        label: "Years of Experience",
    },
    Stat {
        value: "99.9%",
        label: "Delivery Success Rate",
    },
    Stat {
        value: "24/7",
        label: "Customer Support",
    },
];

pub const CONTACT_STATS: &[Stat] = &[
    Stat {
        value: "24/7",
        label: "Customer Support",
    },
    Stat {
        value: "2 Hours",
        label: "Response Time",
    },
    Stat {
        value: "150+",
        label: "Countries Served",
    },
];

// Site content: embedded configuration plus the static copy for the pages

use std::sync::LazyLock;

use stageready::SiteConfig;

/// Option lists, business details and portfolio projects.
pub static SITE: LazyLock<SiteConfig> =
    LazyLock::new(|| SiteConfig::from_embedded(include_str!("../stageready.toml")));

pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct StyleTile {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const STYLE_TILES: &[StyleTile] = &[
    StyleTile {
        key: "rustic",
        title: "Rustic Warmth",
        description: "Textured layers, natural wood, and lived-in charm.",
        image: "/images/rustic-living-room-1.jpg",
    },
    StyleTile {
        key: "contemporary",
        title: "Contemporary Calm",
        description: "Clean lines, balanced contrast, elevated simplicity.",
        image: "/images/contemporary-living-room-1.jpg",
    },
    StyleTile {
        key: "coastal",
        title: "Coastal Light",
        description: "Breezy hues, airy materials, serene flow.",
        image: "/images/cozy-living-room-1.jpg",
    },
    StyleTile {
        key: "organic",
        title: "Organic Modern",
        description: "Soft silhouettes, greenery, and grounded tones.",
        image: "/images/modern-living-room-1.jpg",
    },
];

pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub stats: [(&'static str, &'static str); 3],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Vacant Property Staging",
        summary: "Full furniture, art and styling for empty homes so buyers can picture the life the property offers.",
        stats: [
            ("Avg. DOM Reduction", "30%"),
            ("Photo Click-Through", "+45%"),
            ("Staged Rooms", "Up to 8"),
        ],
    },
    Service {
        title: "Occupied Home Styling",
        summary: "We work with what you have, edit and rearrange, and fill gaps with curated pieces from our inventory.",
        stats: [
            ("Budget Efficiency", "High"),
            ("Prep Time Saved", "2 weeks"),
            ("Rooms Optimized", "All living areas"),
        ],
    },
    Service {
        title: "Developer & Agent Packages",
        summary: "Repeatable, on-brand presentation for display suites and multi-unit projects with reliable turnaround.",
        stats: [
            ("Portfolio Units", "5+"),
            ("Turnaround", "48 hrs"),
            ("Brand Consistency", "Guaranteed"),
        ],
    },
];

pub const APPROACH: &[Feature] = &[
    Feature {
        title: "Space Planning",
        body: "Balanced layouts that guide the eye and enhance natural flow.",
    },
    Feature {
        title: "Furniture Curation",
        body: "Pieces that anchor each room and harmonise scale and proportion.",
    },
    Feature {
        title: "Materiality + Layers",
        body: "Thoughtful layers, textiles, and finishes add depth.",
    },
    Feature {
        title: "Style Direction",
        body: "Helping you choose a style that complements your architecture.",
    },
    Feature {
        title: "Scale + Proportion",
        body: "Right-size selections for comfort, usability, and impact.",
    },
    Feature {
        title: "Colour + Texture",
        body: "Neutral foundations with accents of colour.",
    },
];

pub const VALUES: &[Feature] = &[
    Feature {
        title: "Crafted with Intention",
        body: "Every room tells a story. We style with purpose so buyers feel at home from the first photo.",
    },
    Feature {
        title: "Client-Centred",
        body: "Guidance that's clear, practical, and timeline-aware.",
    },
    Feature {
        title: "Market-Savvy",
        body: "Trend-aware, locally tuned styling for the Melbourne market.",
    },
];

pub const BOOKING_STEPS: &[Feature] = &[
    Feature {
        title: "Free discovery call",
        body: "Share your goals, timeline, and property details. We'll recommend the best approach.",
    },
    Feature {
        title: "On-site or virtual walkthrough",
        body: "A specialist reviews layout, lighting, and focal points to craft a tailored staging plan.",
    },
    Feature {
        title: "Clear proposal, no pressure",
        body: "Receive a transparent scope, timeline, and flat-rate pricing. You decide the next step.",
    },
];

pub const REFERRAL_TIERS: &[&str] = &[
    "$100 bonus on projects under $1,500",
    "$200 bonus on projects $1,500 - $3,000",
    "$300 bonus on projects over $3,000",
];

pub struct TermsSection {
    pub heading: &'static str,
    pub points: &'static [&'static str],
}

pub const TERMS: &[TermsSection] = &[
    TermsSection {
        heading: "Main Comments",
        points: &[
            "Standard hire period is 6 weeks and includes delivery, installation and insurance.",
            "All other terms and conditions apply according to the original hire agreement.",
        ],
    },
    TermsSection {
        heading: "Cancellation and Date Changes",
        points: &[
            "Please give as much notice as possible when changing installation or de-stage dates.",
            "Late cancellations may incur a fee to cover scheduled crew and transport.",
        ],
    },
    TermsSection {
        heading: "Condition of Goods",
        points: &[
            "Candles are for display purposes only and should not be used due to the fire risk they pose.",
            "Damaged or missing items will be charged at replacement cost.",
            "In the event of theft, report the matter immediately to Victoria Police and obtain a police report.",
        ],
    },
    TermsSection {
        heading: "Installation Day",
        points: &[
            "Electricity must be connected and switched on for installation and de-stage.",
            "Our team will not remove shoes during installation and de-stage.",
        ],
    },
    TermsSection {
        heading: "Early Completions",
        points: &[
            "Hire fees are not refunded for early completion of the hire period.",
            "All OH&S requirements must be adhered to.",
        ],
    },
    TermsSection {
        heading: "Limitation of Liability",
        points: &[
            "Stage Ready is not liable for any loss arising from the sale or non-sale of a property.",
        ],
    },
];

pub const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Mon - Fri", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 2:00 PM"),
    ("Sunday", "Closed"),
];

pub const SERVICE_AREAS: &[&str] = &["Inner East", "South Eastern Suburbs", "Bayside"];

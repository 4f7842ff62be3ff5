//! Constant content tables for the community page.
//!
//! Order matters: cards render in table order, and the stat groups are
//! indexed by the rotation order in [`crate::rotation`].

use crate::types::{
    CourseCard, FeatureBlock, FormField, Hub, InfoCard, Link, LinkArrow, Newsletter, StatEntry,
    StatGroup,
};

/// Official community chat, linked from the hubs and gallery sections.
pub const TELEGRAM_URL: &str = "https://t.me/Official_ICP";

/// The four rotating stat groups, in slot order.
pub const STAT_GROUPS: [StatGroup; 4] = [
    &[
        StatEntry::new("Active Countries", "30"),
        StatEntry::new("Grants Awarded", "76"),
        StatEntry::new("Events Launched", "20"),
        StatEntry::new("Official ICP.Hubs", "15"),
    ],
    &[
        StatEntry::new("University Collaborations", "32"),
        StatEntry::new("Network Entrepreneurs", "2000"),
        StatEntry::new("New Users Accounts", "25000"),
    ],
    &[
        StatEntry::new("Ecosystem Partnerships", "12"),
        StatEntry::new("Conference Appearances", "15"),
        StatEntry::new("Incubated Projects", "60"),
    ],
    &[
        StatEntry::new("Hackathons Held", "5"),
        StatEntry::new("Education Courses", "4"),
        StatEntry::new("Devs Trained", "600"),
    ],
];

const fn hub(
    name: &'static str,
    location: &'static str,
    description: &'static str,
    image: &'static str,
    link: &'static str,
    lat: f64,
    lng: f64,
) -> Hub {
    Hub {
        name,
        location,
        description,
        image,
        link,
        coordinates: Some((lat, lng)),
    }
}

const fn highlight(
    name: &'static str,
    description: &'static str,
    image: &'static str,
    link: &'static str,
) -> Hub {
    Hub {
        name,
        location: "",
        description,
        image,
        link,
        coordinates: None,
    }
}

/// Official ICP.Hubs, each with globe coordinates.
pub const HUBS: &[Hub] = &[
    hub(
        "ICP.HUB India",
        "India",
        "In the heart of India, Crewsphere ICP India.Hub champions the Internet Computer via bootcamps that turn talented developers into Web3 experts.",
        "/img/community/icp-hub-india.webp",
        "https://linktr.ee/crewsphere?utm_source=linktree_admin_share",
        20.5937,
        78.9629,
    ),
    hub(
        "ICP.Hub Malaysia",
        "Malaysia/Thailand",
        "With hubs located in Thailand and Malaysia, SynergyLabs provide tools, insights, and network to foster ICP innovation.",
        "/img/community/icp-hub-synergylab.webp",
        "https://linktr.ee/SynergyLabsICP",
        13.7563,
        100.5018,
    ),
    hub(
        "ICP.Hub Italia",
        "Italy",
        "ICP.Hub Italia is a growing regional network for developing professional and institutional Web3 initiatives and solutions on the Internet Computer blockchain.",
        "/img/community/icp-hub-italia.webp",
        "https://icpitalia.icp.page/",
        41.8719,
        12.5674,
    ),
    hub(
        "ICP.Hub North America",
        "Canada / USA",
        "Hubs in North America are dedicated to accelerating mass adoption of the Internet Computer in Canada 🇨🇦 and the US 🇺🇸.",
        "/img/community/icp-hub-north-america.webp",
        "https://linktr.ee/Icphubnorthamerica",
        54.525961,
        -105.255119,
    ),
    hub(
        "ICP.Hub Philippines",
        "Philippines",
        "ISLA Camp is unleashing the potential of Web3 in the Philippines through immersive education, dynamic workshops, and hands-on bootcamps on the Internet Computer.",
        "/img/community/icp-hub-philippines.webp",
        "https://linktr.ee/ICPHubPH",
        12.8797,
        121.774,
    ),
    hub(
        "ICP.Hub Turkey",
        "Turkey, Cyprus",
        "The first hub in the Middle East offering a supportive environment for developers, startups, and enthusiasts to build and deploy decentralized applications on the Internet Computer.",
        "/img/community/icp-hub-turkey.webp",
        "https://linktr.ee/icphubturkey",
        38.9637,
        35.2433,
    ),
    hub(
        "ICP.Hub Indonesia",
        "Indonesia",
        "ICP.Hub Indonesia is where ideas transform into innovation. DISRUPTIVES support ICP projects through incubation programs and resources to kickstart.",
        "/img/community/icp-hub-indonesia.webp",
        "https://linktr.ee/disruptives",
        -0.7893,
        113.9213,
    ),
    hub(
        "ICP.Hub Korea",
        "Korea",
        "ICP.Hub Korea is committed to advancing the Internet Computer blockchain and Web3 in Korea by regularly hosting education bootcamps and cultivating a community of developers.",
        "/img/community/icp-hub-korea.webp",
        "https://linktr.ee/icphubkorea",
        35.9078,
        127.7669,
    ),
    hub(
        "ICP.Hub East Africa",
        "East Africa",
        "The Kushite ICP.Hub aims to create awareness, educate and evangelize about the Internet Computer Protocol to aspiring and existing Web3 developers in the region.",
        "/img/community/icp-hub-east-africa.webp",
        "https://linktr.ee/icpkushitehub",
        -1.2921,
        36.8219,
    ),
    hub(
        "ICP.Hub West Africa",
        "West Africa",
        "ICP.Hub Sahara is creating a safe heaven for developers and blockchain enthusiasts to learn and build on the Internet Computer.",
        "/img/community/icp-hub-west-africa.webp",
        "https://linktr.ee/saharaicphub",
        9.082,
        8.6753,
    ),
    hub(
        "ICP.Hub GCC",
        "Dubai",
        "A local community of Web3 enthusiasts, developers and entrepreneurs, expanding the footprint of the Internet Computer through education, community building, incubation and industry collaborations.",
        "/img/community/icp-hub-gcc.webp",
        "https://linktr.ee/icphubgcc",
        25.276987,
        55.296249,
    ),
    hub(
        "ICP.Hub Germany",
        "Germany",
        "Focusing on Web3 development, LinkUp is the go-to community hub for dreamers and creators dedicated to growing the awareness of the Internet Computer in Germany.",
        "/img/community/icp-hub-germany.webp",
        "https://linktr.ee/icphubgermany",
        51.1657,
        10.4515,
    ),
    hub(
        "ICP.Hub Singapore",
        "Singapore",
        "Advocating digital innovation by harnessing the power of Web3 regional entrepreneurs, venture capitalists and community to realise the mass adoption of the Internet Computer's decentralized cloud and blockchain services.",
        "/img/community/icp-hub-singapore.webp",
        "https://linktr.ee/interlink3",
        1.3521,
        103.8198,
    ),
    hub(
        "ICP.Hub Bulgaria",
        "Balkans (Bulgaria)",
        "The intersection between the Internet Computer and the Balkans. This hub is building a local ICP ecosystem, educating developers and engaging with potential VCs.",
        "/img/community/icp-hub-bulgaria.webp",
        "https://linktr.ee/balkan.icp.hub",
        42.7339,
        25.4858,
    ),
    hub(
        "ICP.Hub LATAM",
        "LATAM",
        "With focus on teaching developers and entrepeneurs how to build blockchain solutions, the LATAM hub is driving outreach via bootcamps, educational content and community events to increase awareness in region.",
        "/img/community/icp-hub-latam.webp",
        "https://linktr.ee/icphublatam",
        -8.7832,
        -55.4915,
    ),
];

/// Conference appearances and launches shown under "The best of ICP.Hubs".
pub const HIGHLIGHTS: &[Hub] = &[
    highlight(
        "Internet Computer at Coinfest Asia 2023",
        "ICP.Hub Indonesia steps into the spotlight at Coinfest Asia 2023, a dynamic and immersive Web3 festival that serves as a rallying point for visionaries, innovators, and blockchain enthusiasts across Asia.",
        "/img/community/coinfest-asia.webp",
        "https://twitter.com/CoinfestAsia/status/1689501197642960896",
    ),
    highlight(
        "Internet Computer at Web3Conf India 2023",
        "ICP.Hub India's prominent presence at Web3Conf India 2023 as a leading partner has ignited tremendous excitement within the local Web3 community.",
        "/img/community/web3-india.webp",
        "https://twitter.com/web3conf_india/status/1686272790150754304?s=46&t=znCni81w_5V68LfRCHvtZA",
    ),
    highlight(
        "Internet Computer at Istanbul Blockchain Week 2023",
        "ICP.Hub Turkey played a pivotal role at Istanbul Blockchain Week 2023, actively engaging in discussions, organizing insightful events, and strengthening their position as a key player in Turkey's blockchain landscape.",
        "/img/community/istanbul-blockchain-week.webp",
        "https://twitter.com/istanbulblockwk/status/1687075926386110464?s=46&t=YWzpokcUePMtkg043EMwBQ",
    ),
    highlight(
        "Internet Computer launches Web3 incubator in Latin America",
        "ICP.Hub LATAM has partnered with College, a technology academy specializing in Web3, to introduce ICPnova, an incubation program designed to support Web3 projects within the regional ecosystem.",
        "/img/community/icpnnova.webp",
        "https://es.cointelegraph.com/news/colledge-and-icp-latam-hub-launch-icpnnova-incubation-programme-for-web3-projects-in-latin-america",
    ),
    highlight(
        "Internet Computer at Web3 Lagos Conference",
        "ICP.Hub East Africa played a significant role at the Web3 Lagos Conference, emphasizing its dedication to fostering Web3 innovation within the region.",
        "/img/community/lagos_conf.webp",
        "https://twitter.com/Web3Bridge/status/1694304365694046238?s=20",
    ),
    highlight(
        "Internet Computer at Korea Blockchain Week 2023",
        "ICP.Hub Korea hosts one of KBW 2023's largest side events, reinforcing its role as a key advocate for Web3 innovation in the Korean blockchain community.",
        "/img/community/korea-blockchain-week.webp",
        "https://twitter.com/ICPhubkorea/status/1685858938116575233?s=20",
    ),
    highlight(
        "Internet Computer at Blockchain Week Rome 2023",
        "ICP.Hub Italia made an impact at Blockchain Week Rome 2023, actively engaging in discussions, workshops, and networking sessions. Their presence underscored their commitment to advancing blockchain innovation and collaboration within Italy.",
        "/img/community/icp-italia-highlight.webp",
        "https://twitter.com/BlockchainRome/status/1655256183895121926?s=20",
    ),
    highlight(
        "A Deep Dive into Internet Computer",
        "The conversation around @dfinity & its plan is streaming NOW, exclusively on #CMCLive on CoinMarketCap's App.",
        "/img/community/icp-deep-dive.webp",
        "https://twitter.com/coinmarketcap/status/1702352254383112526?s=46&t=MYEPlWlA63PER7If_BM83A",
    ),
];

/// "Explore community initiatives" row.
pub const INITIATIVES: &[InfoCard] = &[
    InfoCard {
        icon: "/img/community/icon-education.svg",
        title: "Education",
        body: "Dedicated educational programs designed in cooperation with Web3 learning platforms to empower talented builders and pave the way for their future projects on the Internet Computer blockchain.",
        cta: Link {
            label: "Start learning",
            href: Some("#education"),
            arrow: LinkArrow::Down,
        },
    },
    InfoCard {
        icon: "/img/community/icon-hubs.svg",
        title: "ICP.Hubs",
        body: "ICP. Hubs are flourishing worldwide. With 15 hubs already established and more in the pipeline, a thriving community is actively promoting awareness and adoption, encompassing evangelism, education, strategic partnerships, and project acceleration.",
        cta: Link {
            label: "Find ICP.Hubs near you",
            href: Some("#hubs"),
            arrow: LinkArrow::Down,
        },
    },
    InfoCard {
        icon: "/img/community/icon-events.svg",
        title: "Events",
        body: "At ICP Events, you'll find fantastic chances to gather, socialize, celebrate, expand your knowledge, and form lasting bonds with fellow visionaries.",
        cta: Link {
            label: "Discover upcoming events",
            href: Some("https://dfinity.org/events-and-news/"),
            arrow: LinkArrow::UpRight,
        },
    },
];

/// "Build the community" row.
pub const BUILD_CARDS: &[InfoCard] = &[
    InfoCard {
        icon: "/img/community/icon-launch.svg",
        title: "Launch an ICP.Hub",
        body: "Calling all Web3 entrepreneurs! Do you believe the Internet Computer deserves a stronger presence in your region? Share your business proposal and get ready to ignite the world with your visionary ideas.",
        cta: Link {
            label: "Submit your proposal",
            href: Some("https://airtable.com/shr94SzLU4XXs9cTi"),
            arrow: LinkArrow::UpRight,
        },
    },
    InfoCard {
        icon: "/img/community/icon-grants.svg",
        title: "Community Grant Program",
        body: "For all Web3 content creators, educators, event organizers, influencers, and innovators eager to promote the Internet Computer, the Community Grant Program is your perfect opportunity.",
        cta: Link {
            label: "Apply for a grant",
            href: Some("https://dfinity.org/community-grants/"),
            arrow: LinkArrow::UpRight,
        },
    },
    InfoCard {
        icon: "/img/community/icon-ambassador.svg",
        title: "Ambassador Program",
        body: "Be a strong voice advocating for the Internet Computer, its unprecented technical capabilities and ever expanding ecosystem.",
        cta: Link {
            label: "Coming soon",
            href: None,
            arrow: LinkArrow::UpRight,
        },
    },
];

/// The ICP Asia Alliance feature block.
pub const ALLIANCE: FeatureBlock = FeatureBlock {
    title: "ICP Asia Alliance",
    lead: "The ICP Asia Alliance is at the forefront of fostering a vibrant Web3 and AI ecosystem in Asia.",
    image: "/img/community/asia-alliance-hero-img.webp",
    cta: Link {
        label: "See alliance’s mission & vision",
        href: Some("/community/asia-alliance"),
        arrow: LinkArrow::Right,
    },
};

/// Courses in the education section.
pub const EDUCATION: &[CourseCard] = &[
    CourseCard {
        title_lines: &["TypeScript on ICP"],
        body: "In this beginner course on Decade, you will learn essential Internet Computer concepts and how to write canister smart contracts using TypeScript.",
        cta: Link {
            label: "Start learning",
            href: Some("https://dacade.org/communities/icp"),
            arrow: LinkArrow::UpRight,
        },
    },
    CourseCard {
        title_lines: &["ICP Rust Bootcamp"],
        body: "From core concepts, to the ICP EVM model, to hands-on experience with Rust using the Remix IDE, this Rise In bootcamp will open your eyes to the potential of Web3 development.",
        cta: Link {
            label: "Apply now",
            href: Some("https://www.risein.com/courses/build-on-internet-computer-with-icp-rust-cdk"),
            arrow: LinkArrow::UpRight,
        },
    },
    CourseCard {
        title_lines: &["ICP", "Developer I"],
        body: "A 4-week basics course in Spanish that covers canister development using Motoko, creating a backend and frontend canister, and ending with building your own dapp on the Internet Computer.",
        cta: Link {
            label: "Learn at your pace",
            href: Some(
                "https://icp-esp.gitbook.io/icp-developer/lineamientos-certificacion/programa-icp-developer",
            ),
            arrow: LinkArrow::UpRight,
        },
    },
    CourseCard {
        title_lines: &["ICP", "Developer II"],
        body: "This online course offered in Spanish is a continuation of ICP Developer I. Spend 5 days more building your project on the Internet Computer and finish the week with celebrating your first 100% on-chain dapp.",
        cta: Link {
            label: "Continue building",
            href: Some("https://icp-esp.gitbook.io/icp-developer-ii/"),
            arrow: LinkArrow::UpRight,
        },
    },
];

/// Newsletter signup at the bottom of the page.
pub const NEWSLETTER: Newsletter = Newsletter {
    post_url: "https://dfinity.us16.list-manage.com/subscribe/post?u=33c727489e01ff5b6e1fb6cc6&id=7e9469a315&f_id=00bac2e1f0",
    fields: &[FormField {
        name: "EMAIL",
        placeholder: "Email",
        kind: "email",
        required: true,
    }],
    cta_label: "Get updates!",
    heading: "Want to meet ICP enthusiasts IRL?",
    subheading: "Sign up to stay connected",
    decoration: "/img/newsletter/email-image-1.webp",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hub_has_coordinates() {
        assert_eq!(HUBS.len(), 15);
        assert!(HUBS.iter().all(|h| h.coordinates.is_some()));
    }

    #[test]
    fn highlights_are_not_on_the_globe() {
        assert!(HIGHLIGHTS.iter().all(|h| h.marker().is_none()));
    }

    #[test]
    fn stat_groups_are_non_empty_and_numeric() {
        for group in STAT_GROUPS {
            assert!((3..=4).contains(&group.len()));
            assert!(group.iter().all(|e| e.numeric_value().is_some()));
        }
    }

    #[test]
    fn newsletter_requires_only_email() {
        let required: Vec<_> = NEWSLETTER
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["EMAIL"]);
    }
}

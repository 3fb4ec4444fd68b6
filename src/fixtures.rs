//! Static seed content for the site. The store copies these at startup so
//! every view reads from one place; nothing here is authoritative once the
//! admin console starts editing.

use crate::models::{Author, BlogPost, EventItem, EventLayout, Speaker, Sponsor, TeamMember};

/// Fallback image for records created without one.
pub const PLACEHOLDER_IMAGE: &str = "https://ui-avatars.com/api/?background=random";

/// Fallback avatar for authors created without one.
pub const PLACEHOLDER_AVATAR: &str = "https://ui-avatars.com/api/?name=Admin";

pub const DEFAULT_READ_TIME: &str = "5 Min Read";

#[derive(Debug, Clone)]
pub struct Initiative {
    pub title: &'static str,
    pub description: &'static str,
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct Stat {
    pub count: &'static str,
    pub label: &'static str,
}

pub const INITIATIVES: &[Initiative] = &[
    Initiative {
        title: "Startup Incubation",
        description: "We provide mentorship, resources, and workspace to help turn your ideas into successful startups.",
        highlighted: false,
    },
    Initiative {
        title: "E-Learning Program",
        description: "Access to courses, workshops, and learning materials to develop entrepreneurial skills.",
        highlighted: true,
    },
    Initiative {
        title: "Networking Events",
        description: "Regular meetups with successful entrepreneurs, investors, and industry experts.",
        highlighted: false,
    },
];

pub const STATS: &[Stat] = &[
    Stat { count: "4+", label: "Cities" },
    Stat { count: "20+", label: "Startups" },
    Stat { count: "4000+", label: "Students" },
];

fn member(id: &str, name: &str, role: &str, image: &str, category: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        image: image.to_string(),
        linkedin: "#".to_string(),
        category: category.to_string(),
    }
}

/// The full roster: faculty coordinators, board, then sub-team members.
pub fn team() -> Vec<TeamMember> {
    vec![
        member(
            "m-margathajaran",
            "Dr. M. Margathajaran",
            "Faculty Coordinator",
            "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=400&h=400&auto=format&fit=crop",
            "faculty",
        ),
        member(
            "bhakti-parashar",
            "Dr. Bhakti Parashar",
            "Faculty Coordinator",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=400&h=400&auto=format&fit=crop",
            "faculty",
        ),
        member(
            "swapnil",
            "Swapnil",
            "President",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=400&h=400&auto=format&fit=crop",
            "Board Members",
        ),
        member(
            "vp-name",
            "Name",
            "Vice-President",
            "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?q=80&w=400&h=400&auto=format&fit=crop",
            "Board Members",
        ),
        member(
            "yathansh",
            "Yathansh",
            "Genral Sec.",
            "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=400&h=400&auto=format&fit=crop",
            "Board Members",
        ),
        member(
            "t1",
            "Ayush Singh",
            "Lead Developer",
            "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=400&h=400&auto=format&fit=crop",
            "Tech Team",
        ),
        member(
            "t2",
            "Rohan Verma",
            "Full Stack",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=400&h=400&auto=format&fit=crop",
            "Tech Team",
        ),
        member(
            "t3",
            "Sneha Rao",
            "Frontend Dev",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=400&h=400&auto=format&fit=crop",
            "Tech Team",
        ),
        member(
            "e1",
            "Kabir Das",
            "Operations Lead",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=400&h=400&auto=format&fit=crop",
            "Events Team",
        ),
        member(
            "e2",
            "Meera Nair",
            "Coordinator",
            "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=400&h=400&auto=format&fit=crop",
            "Events Team",
        ),
        member(
            "e3",
            "Arjun Kapoor",
            "Logistics",
            "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=400&h=400&auto=format&fit=crop",
            "Events Team",
        ),
        member(
            "d1",
            "Sanya Gupta",
            "UI/UX Lead",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=400&h=400&auto=format&fit=crop",
            "Design Team",
        ),
        member(
            "sm1",
            "Ishita Roy",
            "Content Head",
            "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=400&h=400&auto=format&fit=crop",
            "Social Media Team",
        ),
        member(
            "c1",
            "Vikram Seth",
            "Editor",
            "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?q=80&w=400&h=400&auto=format&fit=crop",
            "Content Team",
        ),
        member(
            "cr1",
            "Tanmay Singh",
            "Partnerships",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=400&h=400&auto=format&fit=crop",
            "Corporate Team",
        ),
        member(
            "f1",
            "Priya Mishra",
            "Treasurer",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=400&h=400&auto=format&fit=crop",
            "Finance Team",
        ),
        member(
            "o1",
            "Rahul Vats",
            "General Ops",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=400&h=400&auto=format&fit=crop",
            "Operations Team",
        ),
    ]
}

fn event(id: &str, title: &str, description: &str, image: &str, layout: EventLayout) -> EventItem {
    EventItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        layout,
    }
}

pub fn events() -> Vec<EventItem> {
    vec![
        event(
            "e-summit-25",
            "E-Summit 25",
            "E-Summit 2025 is our premier entrepreneurial event bringing together innovators, investors, and industry leaders for insightful talks, workshops, networking, and pitch competitions.",
            "https://images.unsplash.com/photo-1540575861501-7ad05823c9f5?q=80&w=2070&auto=format&fit=crop",
            EventLayout::ImageFirst,
        ),
        event(
            "e-summit-24",
            "E-Summit 24",
            "E-Summit '24 was a landmark event celebrating innovation, entrepreneurship, and strategic thinking, with a legendary speaker session, a paper trading competition, an IPL auction challenge, and a product design competition.",
            "https://images.unsplash.com/photo-1591115765373-520b7a6f72d7?q=80&w=2070&auto=format&fit=crop",
            EventLayout::TextFirst,
        ),
        event(
            "parichay-24",
            "Parichay 24",
            "Parichay 24 brought together entrepreneurial leaders who shared their inspiring journeys and expertise, including two Shark Tank India alumni founders.",
            "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?q=80&w=2000&auto=format&fit=crop",
            EventLayout::ImageFirst,
        ),
        event(
            "parichay-22",
            "Parichay 22",
            "Parichay '22 was a dynamic event designed to introduce students to the world of entrepreneurship and innovation, featuring insightful sessions and talks by industry leaders.",
            "https://images.unsplash.com/photo-1528605248644-14dd04022da1?q=80&w=2070&auto=format&fit=crop",
            EventLayout::TextFirst,
        ),
        event(
            "prachar",
            "Prachar",
            "Prachar 2022 was an insightful and engaging event centered on creative marketing, featuring interactive quizzes, stand-up acts, and expert discussions.",
            "https://images.unsplash.com/photo-1551818255-e6e10975bc17?q=80&w=2025&auto=format&fit=crop",
            EventLayout::ImageFirst,
        ),
        event(
            "arohan",
            "Arohan",
            "Aarohan '23 was a vibrant business extravaganza featuring a business case competition and an insightful founder talk.",
            "https://images.unsplash.com/photo-1531482615713-2afd69097998?q=80&w=2070&auto=format&fit=crop",
            EventLayout::TextFirst,
        ),
    ]
}

fn speaker(id: &str, name: &str, title: &str, image: &str) -> Speaker {
    Speaker {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        image: image.to_string(),
    }
}

pub fn speakers() -> Vec<Speaker> {
    vec![
        speaker(
            "srijan-mehrotra",
            "Srijan Mehrotra",
            "AI Engineer | Building Model Verse | Gen AI Developer",
            "https://images.unsplash.com/photo-1492562080023-ab3db95bfbce?q=80&w=400&h=400&auto=format&fit=crop",
        ),
        speaker(
            "abhay-yadav",
            "Dr. Abhay Yadav",
            "Co-Founder & CEO, Bhopal Angels | Angel Investor",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=400&h=400&auto=format&fit=crop",
        ),
        speaker(
            "ankita-saxena",
            "Ankita Saxena",
            "Marketing Champion | Communication | Ex-Walmart",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=400&h=400&auto=format&fit=crop",
        ),
        speaker(
            "devesh-bochre",
            "Devesh Bochre",
            "Founder, Void Energy (Shark Tank India S3)",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=400&h=400&auto=format&fit=crop",
        ),
        speaker(
            "kaif-khan",
            "Kaif Khan",
            "Stand Up Comedian",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=400&h=400&auto=format&fit=crop",
        ),
        speaker(
            "mitresh-sharma",
            "Mitresh Sharma",
            "Founder, First Bud Organics (Shark Tank India S3)",
            "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?q=80&w=400&h=400&auto=format&fit=crop",
        ),
        speaker(
            "punit-g",
            "Punit G",
            "CEO - ArthNirmiti | Ex-VP @ OYO | TEDx Speaker",
            "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=400&h=400&auto=format&fit=crop",
        ),
        speaker(
            "rakhi-pal",
            "Rakhi Pal",
            "Co-Founder at EventBeep | TEDx | Shark Tank India",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=400&h=400&auto=format&fit=crop",
        ),
    ]
}

pub fn sponsors() -> Vec<Sponsor> {
    [
        ("1", "Notion"),
        ("2", "Finlatics"),
        ("3", "Unstop"),
        ("4", "Internshala"),
        ("5", "StockGro"),
        ("6", "Interview Buddy"),
        ("7", "Campus Times"),
        ("8", "Bluelearn"),
        ("9", "NoticeBard"),
        ("10", "Startup Talky"),
        ("11", "Bazarville"),
        ("12", "Yashvi Foundation"),
        ("13", "Markoknow"),
        ("14", "Stock Edge"),
        ("15", "Startup News"),
        ("16", "Blunt"),
    ]
    .iter()
    .map(|(id, name)| Sponsor {
        id: id.to_string(),
        name: name.to_string(),
        logo: format!("/static/img/sponsors/{}.png", id),
    })
    .collect()
}

fn post(
    id: &str,
    title: &str,
    category: &str,
    date: &str,
    read_time: &str,
    snippet: &str,
    image: &str,
    author: Author,
    body: &str,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        snippet: snippet.to_string(),
        image: image.to_string(),
        author,
        body: body.to_string(),
        status: None,
        submitted_at: None,
    }
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        post(
            "info-edge-giants",
            "Info Edge: The Silent Investor Fueling India's Digital Giants",
            "INVESTMENTS",
            "September 13, 2025",
            "8 Min Read",
            "When you think of the companies that define India's digital economy, brands like Zomato and PolicyBazaar immediately come to mind...",
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=400&auto=format&fit=crop",
            Author {
                name: "Srijan Mehrotra".to_string(),
                role: "AI Lead & Tech Analyst".to_string(),
                avatar: "https://images.unsplash.com/photo-1492562080023-ab3db95bfbce?q=80&w=400&h=400&auto=format&fit=crop".to_string(),
            },
            "<p>When you think of the companies that define India's digital economy, brands like Zomato and PolicyBazaar immediately come to mind. But behind these household names lies a quieter, more strategic force: <strong>Info Edge (India) Limited</strong>.</p>\
             <h2>The Genesis of a Strategic Empire</h2>\
             <p>Founded by Sanjeev Bikhchandani in 1995, Info Edge started as a humble classifieds business. Naukri.com wasn't just a job portal; it was the first brick in what would become a massive digital wall.</p>\
             <h2>The Zomato Bet</h2>\
             <p>In 2010, Info Edge made its most legendary move: a $1 million investment into a fledgling restaurant discovery platform called FoodieBay, later Zomato. Today that stake is worth billions, and it validated the strategic-investor model in India.</p>\
             <ul><li><strong>Patient Capital:</strong> Info Edge plays the 20-year game.</li>\
             <li><strong>Deep Domain Expertise:</strong> they understand the unit economics of marketplaces.</li>\
             <li><strong>Ecosystem Synergy:</strong> portfolio companies find efficiencies within the same network.</li></ul>",
        ),
        post(
            "clicks-to-bricks",
            "From Clicks To Bricks: How Platforms Are Revolutionizing Offline Retail",
            "RETAIL",
            "September 20, 2025",
            "6 Min Read",
            "As we continue binge-shopping on mobile apps, a silent revolution is happening where online giants are reclaiming the physical retail space...",
            "https://images.unsplash.com/photo-1441986300917-64674bd600d8?q=80&w=400&auto=format&fit=crop",
            Author {
                name: "Ankita Saxena".to_string(),
                role: "Marketing Strategist".to_string(),
                avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=400&h=400&auto=format&fit=crop".to_string(),
            },
            "<p>The death of physical retail has been greatly exaggerated. Instead of disappearing, physical stores are evolving into high-tech experience centers.</p>\
             <h2>The Omnichannel Reality</h2>\
             <p>Modern consumers don't think in terms of online or offline. They think in terms of convenience: see a product on social media, research it on a blog, feel the material in a store, and order it from an app.</p>\
             <p>Companies like Lenskart and Nykaa have mastered this transition. By using online data to decide where to open a physical store, they minimize risk and maximize footfall.</p>",
        ),
        post(
            "indigo-domination",
            "IndiGo Airlines: Domination, Drama, And Debt",
            "BUSINESS",
            "September 27, 2025",
            "10 Min Read",
            "If IndiGo airlines were a college student, they'd be the topper who everyone notices. Let's dive into the operational efficiency that defines them...",
            "https://images.unsplash.com/photo-1436491865332-7a61a109c0f2?q=80&w=400&auto=format&fit=crop",
            Author {
                name: "Punit G".to_string(),
                role: "Ex-VP @ OYO | Growth Expert".to_string(),
                avatar: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=400&h=400&auto=format&fit=crop".to_string(),
            },
            "<p>In an industry where players like Jet Airways and Kingfisher collapsed under their own weight, IndiGo stands as a titan of operational discipline.</p>\
             <h2>The Power of One</h2>\
             <p>IndiGo's primary secret is simplicity. By operating almost exclusively with the Airbus A320 family, they achieve massive economies of scale in maintenance, training, and spare parts management.</p>\
             <h2>Scale vs. Sentiment</h2>\
             <p>IndiGo isn't known for luxury; it's known for punctuality. With a market share exceeding 60%, the question is whether the low-cost model survives the long-haul journey.</p>",
        ),
    ]
}

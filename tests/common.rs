use ecell_site::models::*;
use ecell_site::store::ContentStore;

pub fn get_seed_member_0() -> TeamMember {
    TeamMember {
        id: "m-0".to_string(),
        name: "Dr. A. Rao".to_string(),
        role: "Faculty Coordinator".to_string(),
        image: "/static/img/team/m-0.png".to_string(),
        linkedin: "https://linkedin.com/in/arao".to_string(),
        category: "faculty".to_string(),
    }
}

pub fn get_seed_member_1() -> TeamMember {
    TeamMember {
        id: "m-1".to_string(),
        name: "Priya Shah".to_string(),
        role: "President".to_string(),
        image: "/static/img/team/m-1.png".to_string(),
        linkedin: "https://linkedin.com/in/priyashah".to_string(),
        category: "Board Members".to_string(),
    }
}

pub fn get_seed_member_2() -> TeamMember {
    TeamMember {
        id: "m-2".to_string(),
        name: "Rohan Iyer".to_string(),
        role: "Tech Lead".to_string(),
        image: "/static/img/team/m-2.png".to_string(),
        linkedin: "https://linkedin.com/in/rohaniyer".to_string(),
        category: "Tech Team".to_string(),
    }
}

pub fn get_seed_event_0() -> EventItem {
    EventItem {
        id: "e-0".to_string(),
        title: "Startup Sprint".to_string(),
        description: "48 hours from idea to pitch.".to_string(),
        image: "/static/img/events/e-0.png".to_string(),
        layout: EventLayout::ImageFirst,
    }
}

pub fn get_seed_event_1() -> EventItem {
    EventItem {
        id: "e-1".to_string(),
        title: "Founder Fireside".to_string(),
        description: "An evening with alumni founders.".to_string(),
        image: "/static/img/events/e-1.png".to_string(),
        layout: EventLayout::TextFirst,
    }
}

pub fn get_seed_post_0() -> BlogPost {
    BlogPost {
        id: "b-0".to_string(),
        title: "Bootstrapping 101".to_string(),
        category: "BUSINESS".to_string(),
        date: "January 4, 2026".to_string(),
        read_time: "5 Min Read".to_string(),
        snippet: "What we learned funding ourselves.".to_string(),
        image: "/static/img/blog/b-0.png".to_string(),
        author: Author {
            name: "Priya Shah".to_string(),
            role: "President".to_string(),
            avatar: "/static/img/team/m-1.png".to_string(),
        },
        body: "<p>What we learned funding ourselves.</p>".to_string(),
        status: None,
        submitted_at: None,
    }
}

pub fn get_seed_post_1() -> BlogPost {
    BlogPost {
        id: "b-1".to_string(),
        title: "Reading A Term Sheet".to_string(),
        category: "INVESTMENTS".to_string(),
        date: "January 5, 2026".to_string(),
        read_time: "5 Min Read".to_string(),
        snippet: "The clauses that actually matter.".to_string(),
        image: "/static/img/blog/b-1.png".to_string(),
        author: Author {
            name: "Rohan Iyer".to_string(),
            role: "Tech Lead".to_string(),
            avatar: "/static/img/team/m-2.png".to_string(),
        },
        body: "<p>The clauses that actually matter.</p>".to_string(),
        status: None,
        submitted_at: None,
    }
}

pub fn get_seed_draft() -> CommunityBlogDraft {
    CommunityBlogDraft {
        title: "My First Customer".to_string(),
        category: "RETAIL".to_string(),
        author_name: "Ankit Verma".to_string(),
        author_email: "ankit@example.com".to_string(),
        snippet: None,
        body: "<p>How a college fest became a storefront.</p>".to_string(),
    }
}

pub fn get_seed_store() -> ContentStore {
    ContentStore::with_content(
        vec![get_seed_member_0(), get_seed_member_1(), get_seed_member_2()],
        vec![get_seed_event_0(), get_seed_event_1()],
        vec![get_seed_post_0(), get_seed_post_1()],
    )
}

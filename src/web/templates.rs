use askama::Template;

use crate::fixtures::{Initiative, Stat};
use crate::models::{BlogPost, EventItem, Speaker, Sponsor, TeamMember};
use crate::nav::NavItem;
use crate::web::helpers::TeamGroup;

#[derive(Template)]
#[template(path = "public/landing.html")]
pub struct LandingTemplate {
    pub page_title: &'static str,
    pub nav_items: &'static [NavItem],
    pub active_label: &'static str,
    pub initiatives: &'static [Initiative],
    pub stats: &'static [Stat],
    pub teasers: Vec<BlogPost>,
    pub events: Vec<EventItem>,
    pub speakers: Vec<Speaker>,
    pub team_preview: Vec<TeamMember>,
    pub sponsors: Vec<Sponsor>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "public/team.html")]
pub struct TeamDirectoryTemplate {
    pub page_title: &'static str,
    pub nav_items: &'static [NavItem],
    pub active_label: &'static str,
    pub groups: Vec<TeamGroup>,
}

#[derive(Template)]
#[template(path = "public/blog.html")]
pub struct BlogArchiveTemplate {
    pub page_title: &'static str,
    pub nav_items: &'static [NavItem],
    pub active_label: &'static str,
    pub categories: Vec<String>,
    pub selected: String,
    pub posts: Vec<BlogPost>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "public/blog_detail.html")]
pub struct BlogDetailTemplate {
    pub page_title: &'static str,
    pub nav_items: &'static [NavItem],
    pub active_label: &'static str,
    pub post: BlogPost,
}

#[derive(Template)]
#[template(path = "public/auth.html")]
pub struct AuthTemplate {
    pub page_title: &'static str,
    pub nav_items: &'static [NavItem],
    pub active_label: &'static str,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/members.html")]
pub struct AdminMembersTemplate {
    pub active_tab: &'static str,
    pub api_base: String,
    pub groups: Vec<TeamGroup>,
    pub categories: Vec<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/member_edit.html")]
pub struct AdminMemberEditTemplate {
    pub active_tab: &'static str,
    pub api_base: String,
    pub member: TeamMember,
    pub categories: Vec<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/events.html")]
pub struct AdminEventsTemplate {
    pub active_tab: &'static str,
    pub api_base: String,
    pub events: Vec<EventItem>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/event_edit.html")]
pub struct AdminEventEditTemplate {
    pub active_tab: &'static str,
    pub api_base: String,
    pub event: EventItem,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/blogs.html")]
pub struct AdminBlogsTemplate {
    pub active_tab: &'static str,
    pub api_base: String,
    pub blogs: Vec<BlogPost>,
    pub categories: Vec<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/blog_edit.html")]
pub struct AdminBlogEditTemplate {
    pub active_tab: &'static str,
    pub api_base: String,
    pub post: BlogPost,
    pub categories: Vec<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/moderation.html")]
pub struct AdminModerationTemplate {
    pub active_tab: &'static str,
    pub api_base: String,
    pub pending: Vec<BlogPost>,
    pub error: Option<String>,
}

use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use crate::fixtures::{self, INITIATIVES, STATS};
use crate::models::{CommunityBlogDraft, BLOG_CATEGORIES, MEMBER_CATEGORIES};
use crate::nav::NAV_ITEMS;
use crate::web::forms::{BlogQuery, CommunityBlogForm, ContactForm, LandingQuery};
use crate::web::helpers::{group_members, owned_categories, redirect, render};
use crate::web::state::AppState;
use crate::web::templates::{
    BlogArchiveTemplate, BlogDetailTemplate, LandingTemplate, TeamDirectoryTemplate,
};

fn landing_notice(code: &str) -> String {
    match code {
        "contact-missing" => "Please fill in every field before sending.".to_string(),
        "contact-offline" => {
            "The contact service is not connected yet, so your message was not sent. \
             Reach us directly in the meantime."
                .to_string()
        }
        other => other.to_string(),
    }
}

#[get("/")]
pub async fn landing(state: web::Data<AppState>, query: web::Query<LandingQuery>) -> impl Responder {
    let teasers: Vec<_> = state.store.blogs().into_iter().take(3).collect();
    let team_preview: Vec<_> = state
        .store
        .members()
        .into_iter()
        .filter(|m| m.category == "faculty" || m.category == "Board Members")
        .collect();

    render(LandingTemplate {
        page_title: "E-Cell — Where Ideas Take Flight",
        nav_items: NAV_ITEMS,
        active_label: "HOME",
        initiatives: INITIATIVES,
        stats: STATS,
        teasers,
        events: state.store.events(),
        speakers: fixtures::speakers(),
        team_preview,
        sponsors: fixtures::sponsors(),
        notice: query.notice.as_deref().map(landing_notice),
    })
}

#[get("/team")]
pub async fn team_directory(state: web::Data<AppState>) -> impl Responder {
    let members = state.store.members();
    render(TeamDirectoryTemplate {
        page_title: "Meet Our Team — E-Cell",
        nav_items: NAV_ITEMS,
        active_label: "HOME",
        groups: group_members(&members, MEMBER_CATEGORIES),
    })
}

#[get("/blog")]
pub async fn blog_archive(state: web::Data<AppState>, query: web::Query<BlogQuery>) -> impl Responder {
    let selected = query
        .category
        .clone()
        .filter(|c| BLOG_CATEGORIES.contains(&c.as_str()))
        .unwrap_or_else(|| "ALL".to_string());

    let posts: Vec<_> = state
        .store
        .blogs()
        .into_iter()
        .filter(|p| selected == "ALL" || p.category == selected)
        .collect();

    let notice = query.notice.as_deref().map(|code| match code {
        "submitted" => "Thanks for writing! Your story is waiting for a moderator.".to_string(),
        other => other.to_string(),
    });

    render(BlogArchiveTemplate {
        page_title: "Blogs — E-Cell",
        nav_items: NAV_ITEMS,
        active_label: "BLOGS",
        categories: owned_categories(BLOG_CATEGORIES),
        selected,
        posts,
        notice,
    })
}

#[get("/blog/{id}")]
pub async fn blog_detail(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.store.blog(&id) {
        Some(post) => render(BlogDetailTemplate {
            page_title: "Blogs — E-Cell",
            nav_items: NAV_ITEMS,
            active_label: "BLOGS",
            post,
        }),
        None => HttpResponse::NotFound().body("Not found"),
    }
}

/// Community submissions go straight into the moderation queue; the post
/// stays invisible until an admin approves it.
#[post("/blog/submit")]
pub async fn blog_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<CommunityBlogForm>,
) -> impl Responder {
    let draft = CommunityBlogDraft {
        title: form.title.clone(),
        category: form.category.clone(),
        author_name: form.author_name.clone(),
        author_email: form.author_email.clone(),
        snippet: form.snippet.clone(),
        body: form.body.clone(),
    };

    match state.store.submit_blog(&draft) {
        Ok(post) => {
            tracing::info!(id = %post.id, "community post queued for moderation");
            redirect(&req, "/blog?notice=submitted")
        }
        Err(e) => render(BlogArchiveTemplate {
            page_title: "Blogs — E-Cell",
            nav_items: NAV_ITEMS,
            active_label: "BLOGS",
            categories: owned_categories(BLOG_CATEGORIES),
            selected: "ALL".to_string(),
            posts: state.store.blogs(),
            notice: Some(e.to_string()),
        }),
    }
}

/// The contact backend does not exist yet; a complete form still gets the
/// not-connected notice and the user keeps their landing-page state.
#[post("/contact")]
pub async fn contact_submit(req: HttpRequest, form: web::Form<ContactForm>) -> impl Responder {
    let complete = [&form.name, &form.email, &form.phone, &form.message]
        .iter()
        .all(|f| !f.trim().is_empty());

    if !complete {
        return redirect(&req, "/?notice=contact-missing#join");
    }

    tracing::info!(from = %form.email, "contact form submitted against stub endpoint");
    redirect(&req, "/?notice=contact-offline#join")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing)
        .service(team_directory)
        .service(blog_archive)
        .service(blog_detail)
        .service(blog_submit)
        .service(contact_submit);
}

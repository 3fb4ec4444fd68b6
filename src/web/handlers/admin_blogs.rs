use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use crate::models::{BlogCreate, BlogUpdate, BLOG_CATEGORIES};
use crate::web::forms::{BlogEditForm, BlogForm, DeleteForm};
use crate::web::helpers::{confirmed, owned_categories, redirect, render};
use crate::web::state::AppState;
use crate::web::templates::{AdminBlogEditTemplate, AdminBlogsTemplate};

fn nonblank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.trim().is_empty())
}

fn blogs_page(state: &AppState, error: Option<String>) -> AdminBlogsTemplate {
    AdminBlogsTemplate {
        active_tab: "blogs",
        api_base: state.api_base.clone(),
        blogs: state.store.blogs(),
        categories: owned_categories(BLOG_CATEGORIES),
        error,
    }
}

#[get("/admin/blogs")]
pub async fn blogs_list(state: web::Data<AppState>) -> impl Responder {
    render(blogs_page(&state, None))
}

#[post("/admin/blogs")]
pub async fn blog_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<BlogForm>,
) -> impl Responder {
    let data = BlogCreate {
        title: form.title.clone(),
        category: nonblank(&form.category),
        author_name: nonblank(&form.author_name),
        image: nonblank(&form.image),
        snippet: nonblank(&form.snippet),
        body: form.body.clone(),
    };

    match state.store.create_blog(&data) {
        Ok(post) => {
            tracing::info!(id = %post.id, "blog post added");
            redirect(&req, "/admin/blogs")
        }
        Err(e) => render(blogs_page(&state, Some(e.to_string()))),
    }
}

#[get("/admin/blogs/{id}/edit")]
pub async fn blog_edit_form(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.store.blog(&id) {
        Some(post) => render(AdminBlogEditTemplate {
            active_tab: "blogs",
            api_base: state.api_base.clone(),
            post,
            categories: owned_categories(BLOG_CATEGORIES),
            error: None,
        }),
        None => HttpResponse::NotFound().body("Not found"),
    }
}

#[post("/admin/blogs/{id}")]
pub async fn blog_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<BlogEditForm>,
) -> impl Responder {
    let id = path.into_inner();
    let data = BlogUpdate {
        title: nonblank(&form.title),
        category: nonblank(&form.category),
        author_name: nonblank(&form.author_name),
        image: nonblank(&form.image),
        snippet: nonblank(&form.snippet),
        body: nonblank(&form.body),
    };

    match state.store.update_blog(&id, &data) {
        Ok(_) => redirect(&req, "/admin/blogs"),
        Err(e) => render(blogs_page(&state, Some(e.to_string()))),
    }
}

#[post("/admin/blogs/{id}/delete")]
pub async fn blog_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<DeleteForm>,
) -> impl Responder {
    if confirmed(&form.confirm) {
        state.store.delete_blog(&path.into_inner());
    }
    redirect(&req, "/admin/blogs")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(blogs_list)
        .service(blog_create)
        .service(blog_edit_form)
        .service(blog_update)
        .service(blog_delete);
}

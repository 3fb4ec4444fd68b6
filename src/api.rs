//! Placeholder JSON API.
//!
//! This is the boundary a real backend will eventually fill in. Collection
//! GETs answer an empty list (callers fall back to the store's fixture
//! data); every other operation answers `501 Not Implemented`. The admin
//! console does not go through this surface at all, it mutates the
//! in-memory store directly, so the site works end to end while these
//! stay stubs.

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::common::ApiError;
use crate::models::{BlogPost, Speaker, Sponsor, TeamMember};

fn stub(endpoint: &'static str) -> ApiError {
    tracing::debug!(endpoint, "placeholder endpoint hit");
    ApiError::NotImplemented(endpoint)
}

// --- team ---

#[get("/api/team")]
async fn list_team() -> impl Responder {
    HttpResponse::Ok().json(Vec::<TeamMember>::new())
}

#[post("/api/team")]
async fn create_team_member() -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/team"))
}

#[put("/api/team/{id}")]
async fn update_team_member(_id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    Err(stub("PUT /api/team/:id"))
}

#[delete("/api/team/{id}")]
async fn delete_team_member(_id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    Err(stub("DELETE /api/team/:id"))
}

// --- events ---

#[get("/api/events")]
async fn list_events() -> impl Responder {
    HttpResponse::Ok().json(Vec::<serde_json::Value>::new())
}

#[post("/api/events")]
async fn create_event() -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/events"))
}

#[put("/api/events/{id}")]
async fn update_event(_id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    Err(stub("PUT /api/events/:id"))
}

#[delete("/api/events/{id}")]
async fn delete_event(_id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    Err(stub("DELETE /api/events/:id"))
}

// --- blogs ---

#[get("/api/blogs")]
async fn list_blogs() -> impl Responder {
    HttpResponse::Ok().json(Vec::<BlogPost>::new())
}

/// "Post or absent": absent until a backend exists.
#[get("/api/blogs/{id}")]
async fn get_blog(_id: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::Value::Null)
}

#[post("/api/blogs")]
async fn create_blog() -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/blogs"))
}

#[put("/api/blogs/{id}")]
async fn update_blog(_id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    Err(stub("PUT /api/blogs/:id"))
}

#[delete("/api/blogs/{id}")]
async fn delete_blog(_id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    Err(stub("DELETE /api/blogs/:id"))
}

// --- moderation ---

#[get("/api/blogs/pending/list")]
async fn list_pending_blogs() -> Result<HttpResponse, ApiError> {
    Err(stub("GET /api/blogs/pending/list"))
}

#[post("/api/blogs/{id}/approve")]
async fn approve_blog(_id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/blogs/:id/approve"))
}

#[post("/api/blogs/{id}/reject")]
async fn reject_blog(_id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/blogs/:id/reject"))
}

#[post("/api/blogs/submit")]
async fn submit_community_blog() -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/blogs/submit"))
}

// --- sponsors & speakers ---

#[get("/api/sponsors")]
async fn list_sponsors() -> impl Responder {
    HttpResponse::Ok().json(Vec::<Sponsor>::new())
}

#[get("/api/speakers")]
async fn list_speakers() -> impl Responder {
    HttpResponse::Ok().json(Vec::<Speaker>::new())
}

// --- auth, contact, upload ---

#[post("/api/auth/login")]
async fn login() -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/auth/login"))
}

#[post("/api/auth/register")]
async fn register() -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/auth/register"))
}

#[post("/api/contact")]
async fn contact() -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/contact"))
}

/// Multipart image upload. The admin form adopts a local object-URL preview
/// first, so this failing keeps the local preview in place.
#[post("/api/upload")]
async fn upload() -> Result<HttpResponse, ApiError> {
    Err(stub("POST /api/upload"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_team)
        .service(create_team_member)
        .service(update_team_member)
        .service(delete_team_member)
        .service(list_events)
        .service(create_event)
        .service(update_event)
        .service(delete_event)
        .service(list_blogs)
        .service(list_pending_blogs)
        .service(get_blog)
        .service(create_blog)
        .service(update_blog)
        .service(delete_blog)
        .service(approve_blog)
        .service(reject_blog)
        .service(submit_community_blog)
        .service(list_sponsors)
        .service(list_speakers)
        .service(login)
        .service(register)
        .service(contact)
        .service(upload);
}

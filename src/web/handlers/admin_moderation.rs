use actix_web::{get, post, web, HttpRequest, Responder};

use crate::web::helpers::{redirect, render};
use crate::web::state::AppState;
use crate::web::templates::AdminModerationTemplate;

fn moderation_page(state: &AppState, error: Option<String>) -> AdminModerationTemplate {
    AdminModerationTemplate {
        active_tab: "moderation",
        api_base: state.api_base.clone(),
        pending: state.store.pending_blogs(),
        error,
    }
}

#[get("/admin/moderation")]
pub async fn moderation_list(state: web::Data<AppState>) -> impl Responder {
    render(moderation_page(&state, None))
}

/// Approval either fully moves the post into the published collection or
/// fails and leaves the queue as it was.
#[post("/admin/moderation/{id}/approve")]
pub async fn moderation_approve(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match state.store.approve_blog(&id) {
        Ok(post) => {
            tracing::info!(id = %post.id, "community post approved");
            redirect(&req, "/admin/moderation")
        }
        Err(e) => render(moderation_page(&state, Some(e.to_string()))),
    }
}

#[post("/admin/moderation/{id}/reject")]
pub async fn moderation_reject(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    if state.store.reject_blog(&id) {
        redirect(&req, "/admin/moderation")
    } else {
        render(moderation_page(
            &state,
            Some(format!("No pending post with id {:?}", id)),
        ))
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(moderation_list)
        .service(moderation_approve)
        .service(moderation_reject);
}

use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use crate::models::{EventCreate, EventUpdate};
use crate::web::forms::{DeleteForm, EventEditForm, EventForm};
use crate::web::helpers::{confirmed, redirect, render};
use crate::web::state::AppState;
use crate::web::templates::{AdminEventEditTemplate, AdminEventsTemplate};

fn nonblank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.trim().is_empty())
}

fn parse_layout(value: &Option<String>) -> Option<crate::models::EventLayout> {
    value.as_deref().and_then(|s| s.parse().ok())
}

fn events_page(state: &AppState, error: Option<String>) -> AdminEventsTemplate {
    AdminEventsTemplate {
        active_tab: "events",
        api_base: state.api_base.clone(),
        events: state.store.events(),
        error,
    }
}

#[get("/admin/events")]
pub async fn events_list(state: web::Data<AppState>) -> impl Responder {
    render(events_page(&state, None))
}

#[post("/admin/events")]
pub async fn event_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<EventForm>,
) -> impl Responder {
    let data = EventCreate {
        title: form.title.clone(),
        description: form.description.clone(),
        image: nonblank(&form.image),
        layout: parse_layout(&form.layout),
    };

    match state.store.create_event(&data) {
        Ok(event) => {
            tracing::info!(id = %event.id, "event added");
            redirect(&req, "/admin/events")
        }
        Err(e) => render(events_page(&state, Some(e.to_string()))),
    }
}

#[get("/admin/events/{id}/edit")]
pub async fn event_edit_form(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.store.events().into_iter().find(|e| e.id == id) {
        Some(event) => render(AdminEventEditTemplate {
            active_tab: "events",
            api_base: state.api_base.clone(),
            event,
            error: None,
        }),
        None => HttpResponse::NotFound().body("Not found"),
    }
}

#[post("/admin/events/{id}")]
pub async fn event_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<EventEditForm>,
) -> impl Responder {
    let id = path.into_inner();
    let data = EventUpdate {
        title: nonblank(&form.title),
        description: nonblank(&form.description),
        image: nonblank(&form.image),
        layout: parse_layout(&form.layout),
    };

    match state.store.update_event(&id, &data) {
        Ok(_) => redirect(&req, "/admin/events"),
        Err(e) => render(events_page(&state, Some(e.to_string()))),
    }
}

#[post("/admin/events/{id}/delete")]
pub async fn event_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<DeleteForm>,
) -> impl Responder {
    if confirmed(&form.confirm) {
        state.store.delete_event(&path.into_inner());
    }
    redirect(&req, "/admin/events")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(events_list)
        .service(event_create)
        .service(event_edit_form)
        .service(event_update)
        .service(event_delete);
}

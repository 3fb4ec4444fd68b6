use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use crate::models::{MemberCreate, MemberUpdate, MEMBER_CATEGORIES};
use crate::web::forms::{DeleteForm, MemberEditForm, MemberForm};
use crate::web::helpers::{confirmed, group_members, owned_categories, redirect, render};
use crate::web::state::AppState;
use crate::web::templates::{AdminMemberEditTemplate, AdminMembersTemplate};

fn nonblank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.trim().is_empty())
}

fn members_page(state: &AppState, error: Option<String>) -> AdminMembersTemplate {
    AdminMembersTemplate {
        active_tab: "members",
        api_base: state.api_base.clone(),
        groups: group_members(&state.store.members(), MEMBER_CATEGORIES),
        categories: owned_categories(MEMBER_CATEGORIES),
        error,
    }
}

#[get("/admin")]
pub async fn admin_index(req: HttpRequest) -> impl Responder {
    redirect(&req, "/admin/members")
}

#[get("/admin/members")]
pub async fn members_list(state: web::Data<AppState>) -> impl Responder {
    render(members_page(&state, None))
}

#[post("/admin/members")]
pub async fn member_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<MemberForm>,
) -> impl Responder {
    let data = MemberCreate {
        name: form.name.clone(),
        role: form.role.clone(),
        category: form.category.clone(),
        image: nonblank(&form.image),
        linkedin: nonblank(&form.linkedin),
    };

    match state.store.create_member(&data) {
        Ok(member) => {
            tracing::info!(id = %member.id, "member added");
            redirect(&req, "/admin/members")
        }
        Err(e) => render(members_page(&state, Some(e.to_string()))),
    }
}

#[get("/admin/members/{id}/edit")]
pub async fn member_edit_form(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.store.members().into_iter().find(|m| m.id == id) {
        Some(member) => render(AdminMemberEditTemplate {
            active_tab: "members",
            api_base: state.api_base.clone(),
            member,
            categories: owned_categories(MEMBER_CATEGORIES),
            error: None,
        }),
        None => HttpResponse::NotFound().body("Not found"),
    }
}

/// Blank fields in the edit form are left unchanged.
#[post("/admin/members/{id}")]
pub async fn member_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<MemberEditForm>,
) -> impl Responder {
    let id = path.into_inner();
    let data = MemberUpdate {
        name: nonblank(&form.name),
        role: nonblank(&form.role),
        category: nonblank(&form.category),
        image: nonblank(&form.image),
        linkedin: nonblank(&form.linkedin),
    };

    match state.store.update_member(&id, &data) {
        Ok(_) => redirect(&req, "/admin/members"),
        Err(e) => match state.store.members().into_iter().find(|m| m.id == id) {
            Some(member) => render(AdminMemberEditTemplate {
                active_tab: "members",
                api_base: state.api_base.clone(),
                member,
                categories: owned_categories(MEMBER_CATEGORIES),
                error: Some(e.to_string()),
            }),
            None => HttpResponse::NotFound().body("Not found"),
        },
    }
}

#[post("/admin/members/{id}/delete")]
pub async fn member_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<DeleteForm>,
) -> impl Responder {
    if confirmed(&form.confirm) {
        state.store.delete_member(&path.into_inner());
    }
    redirect(&req, "/admin/members")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_index)
        .service(members_list)
        .service(member_create)
        .service(member_edit_form)
        .service(member_update)
        .service(member_delete);
}

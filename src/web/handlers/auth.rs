use actix_web::{get, post, web, Responder};

use crate::common::ApiError;
use crate::nav::NAV_ITEMS;
use crate::web::forms::{LoginForm, RegisterForm};
use crate::web::helpers::render;
use crate::web::templates::AuthTemplate;

fn auth_page(error: Option<String>) -> AuthTemplate {
    AuthTemplate {
        page_title: "Sign In — E-Cell",
        nav_items: NAV_ITEMS,
        active_label: "AUTH",
        error,
    }
}

#[get("/login")]
pub async fn login_form() -> impl Responder {
    render(auth_page(None))
}

/// Auth has no backend yet. Valid input still lands on the not-connected
/// message; the screen stays usable either way.
#[post("/login")]
pub async fn login_submit(form: web::Form<LoginForm>) -> impl Responder {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return render(auth_page(Some("Email and password are required".to_string())));
    }

    let err = ApiError::NotImplemented("POST /api/auth/login");
    render(auth_page(Some(err.to_string())))
}

#[post("/register")]
pub async fn register_submit(form: web::Form<RegisterForm>) -> impl Responder {
    if form.name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.password.is_empty()
    {
        return render(auth_page(Some(
            "Name, email and password are required".to_string(),
        )));
    }

    let err = ApiError::NotImplemented("POST /api/auth/register");
    render(auth_page(Some(err.to_string())))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(register_submit);
}

use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::models::TeamMember;

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

/// Post-action redirect that follows the request style: htmx requests get
/// an HX-Redirect header, plain form posts a 303.
pub fn redirect(req: &HttpRequest, location: &str) -> HttpResponse {
    if is_htmx(req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", location.to_string()))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", location.to_string()))
            .finish()
    }
}

/// Destructive actions only proceed when the form carries an explicit
/// confirmation value (set by the confirm dialog in the admin script).
pub fn confirmed(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some("true") | Some("on") | Some("1"))
}

pub fn owned_categories(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Members grouped by category, in the fixed category display order.
pub struct TeamGroup {
    pub name: String,
    pub members: Vec<TeamMember>,
}

pub fn group_members(members: &[TeamMember], categories: &[&str]) -> Vec<TeamGroup> {
    categories
        .iter()
        .map(|category| TeamGroup {
            name: category.to_string(),
            members: members
                .iter()
                .filter(|m| m.category == *category)
                .cloned()
                .collect(),
        })
        .filter(|g| !g.members.is_empty())
        .collect()
}

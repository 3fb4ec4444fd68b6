pub mod admin_blogs;
pub mod admin_events;
pub mod admin_members;
pub mod admin_moderation;
pub mod auth;
pub mod public;

use actix_web::web;

/// Registers every route: public pages, auth screen, admin console, and
/// the placeholder JSON API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    admin_members::configure(cfg);
    admin_events::configure(cfg);
    admin_blogs::configure(cfg);
    admin_moderation::configure(cfg);
    crate::api::configure(cfg);
}

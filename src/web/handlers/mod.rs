pub mod admin_contacts;
pub mod admin_dashboard;
pub mod admin_resources;
pub mod admin_settings;
pub mod public;
pub mod recruitment;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    recruitment::configure(cfg);
    admin_dashboard::configure(cfg);
    admin_contacts::configure(cfg);
    admin_settings::configure(cfg);
    admin_resources::configure(cfg);
}

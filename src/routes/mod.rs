use actix_web::web;

pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(user::create::create_user)
        .service(user::list::get_users)
        .service(user::delete::delete_user)
        .service(user::update::update_user);
}

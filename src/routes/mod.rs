use actix_web::web;

pub mod auth;
pub mod health;
pub mod posts;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::hello);

    cfg.service(auth::signup::signup);
    cfg.service(auth::signin::signin);
    cfg.service(auth::signout::signout);
    cfg.service(auth::verification::send_verification_code);
    cfg.service(auth::verification::verify_verification_code);
    cfg.service(auth::password::change_password);
    cfg.service(auth::password::send_forgot_password_code);
    cfg.service(auth::password::verify_forgot_password_code);

    cfg.service(posts::list::get_posts);
    cfg.service(posts::single::single_post);
    cfg.service(posts::create::create_post);
    cfg.service(posts::update::update_post);
    cfg.service(posts::delete::delete_post);
}

use actix_web::http::header;
use actix_web::{get, HttpResponse};

#[get("/")]
/// redirect to the API documentation
pub(crate) async fn root() -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, "/docs"))
        .finish()
}

#[get("/favicon.ico")]
/// browsers ask for this; nothing to serve
pub(crate) async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

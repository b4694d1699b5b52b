use crate::server::controller::error::ApiError;
use crate::server::model::order::CreateOrderRequest;
use crate::server::state::AppState;
use actix_web::{get, post, web, Responder};

#[post("/orders")]
/// persist a new order and echo it back with its assigned id
pub(crate) async fn create_order(
    req: web::Json<CreateOrderRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let order = data.store().insert(req.into_inner()).await?;
    Ok(web::Json(order))
}

#[get("/orders")]
/// all persisted orders, unordered
pub(crate) async fn list_orders(data: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let orders = data.store().list().await?;
    Ok(web::Json(orders))
}

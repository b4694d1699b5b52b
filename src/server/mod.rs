//! main file for the server

mod controller;
mod database;
pub(crate) mod model;
mod state;
mod store;
mod util;

use crate::server::controller::home::{favicon, root};
use crate::server::controller::orders::{create_order, list_orders};
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use crate::server::store::OrderStore;
use actix_web::{middleware::Logger, web, App, HttpServer};

/// seconds to wait for a pooled connection before giving up
pub(crate) const DB_TIMEOUT_SECONDS: u64 = 5;

/// Run the server
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let store = OrderStore::connect(&config)
        .await
        .map_err(std::io::Error::other)?;
    let state = AppState::new(store);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .service(root)
            .service(favicon)
            .service(create_order)
            .service(list_orders)
    })
    .bind(config.addr)?
    .run()
    .await
}

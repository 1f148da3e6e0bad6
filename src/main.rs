use std::time::Duration;

use crate::{
    configuration::Configuration, configuration_handler::ConfigurationHandler,
    database_interface::DatabaseInterface, http::create_app, local_bookings::LocalBookings,
};
use tokio::time::sleep;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod backend;
mod configuration;
mod configuration_handler;
mod database_interface;
mod error;
mod events;
mod forms;
mod http;
mod local_bookings;
mod pages;
mod reservation;
mod schema;
mod slots;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let configuration = ConfigurationHandler::parse_arguments();

    let address = configuration.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(?err, "Failed to bind {address}");
            std::process::exit(1);
        }
    };
    info!("{} accessible at {address}", configuration.website_title());

    let app = if let Some(database_url) = configuration.database_url() {
        let backend = loop {
            match DatabaseInterface::new(&database_url) {
                Ok(backend) => {
                    info!("Successfully connected to database");
                    break backend;
                }
                Err(err) => {
                    error!(?err, "Failed to establish database connection. Retry in 1 sec. You may want to restart it with database disabled (impersistent bookings).");
                    sleep(Duration::from_secs(1)).await;
                }
            }
        };
        create_app(backend, configuration)
    } else {
        warn!("No database configured. Bookings are kept in memory only");
        let backend = LocalBookings::default();
        create_app(backend, configuration)
    };

    if let Err(err) = axum::serve(listener, app).await {
        error!(?err, "Server stopped");
    }
}

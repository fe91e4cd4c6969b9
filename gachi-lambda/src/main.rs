use gachi_shared::utilities::config;
use lambda_http::{service_fn, Error};

use crate::router::handle_lambda;

mod endpoints;
mod router;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    lambda_http::run(service_fn(handle_lambda)).await?;
    Ok(())
}

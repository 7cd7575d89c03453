mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use lead_agent::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use court_access::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

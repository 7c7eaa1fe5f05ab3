use std::{net::TcpListener, time::Duration};

use env_logger::Env;
use probe::{configuration::get_configuration, services::SearchClient, startup::run};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let search_client = SearchClient::new(
        configuration.search.base_url,
        Duration::from_secs(configuration.search.timeout_seconds),
    );

    run(listener, search_client)?.await
}

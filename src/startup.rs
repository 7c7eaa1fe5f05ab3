use std::net::TcpListener;

use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self},
    App, HttpServer,
};

use crate::{
    routes::{default_route, domain_route},
    services::SearchClient,
};

pub fn run(listener: TcpListener, search_client: SearchClient) -> Result<Server, std::io::Error> {
    let search_client = web::Data::new(search_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(web::scope("/domain").service(domain_route::find_company_domain))
            .app_data(search_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

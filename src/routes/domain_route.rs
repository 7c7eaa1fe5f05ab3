use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::services::{resolve_domain, SearchClient};

#[derive(Deserialize)]
struct FindDomainQuery {
    company: String,
}

#[get("")]
async fn find_company_domain(
    search_client: web::Data<SearchClient>,
    query: web::Query<FindDomainQuery>,
) -> HttpResponse {
    let company_name = query.company.trim();
    if company_name.is_empty() {
        return HttpResponse::BadRequest().body("Company name is required");
    }

    log::info!("Resolving domain for company: {}", company_name);

    match resolve_domain(&search_client, company_name).await {
        Some(domain) => HttpResponse::Ok().json(serde_json::json!({
            "company": company_name,
            "domain": domain,
        })),
        None => {
            HttpResponse::NotFound().body(format!("No domain found for {}", company_name))
        }
    }
}

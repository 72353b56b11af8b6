use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::departamentos;
use crate::server::EstadoApp;

#[derive(Debug, Deserialize)]
pub struct ParamsDepartamentos {
    #[serde(default)]
    pub q: String,
    #[serde(default = "pagina_uno")]
    pub page: u32,
    #[serde(default = "limite_diez")]
    pub limit: u32,
}

fn pagina_uno() -> u32 {
    1
}

fn limite_diez() -> u32 {
    10
}

/// GET /departamentos?q=&page=&limit=: proxy del API remoto.
pub async fn buscar_handler(
    params: web::Query<ParamsDepartamentos>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    match departamentos::buscar(
        &datos.http,
        &datos.url_departamentos,
        &params.q,
        params.page,
        params.limit,
    )
    .await
    {
        Ok(pagina) => HttpResponse::Ok().json(json!({
            "items": pagina.users,
            "total": pagina.total,
            "page": params.page,
            "limit": params.limit,
        })),
        Err(err) => HttpResponse::BadGateway().json(json!({"error": format!("{err}")})),
    }
}

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::almacen;
use crate::models::{EstadoSolicitud, NuevaSolicitud};

/// Quién firma las acciones hechas desde el panel.
const APROBADOR: &str = "Admin";

#[derive(Debug, Deserialize)]
pub struct ParamsSolicitudes {
    pub estado: Option<String>,
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

/// GET /solicitudes?estado=&page=&limit=
///
/// El filtro "Todos los estados" (o un estado desconocido) no filtra,
/// como el selector del tablero. El total es el del conjunto filtrado.
pub async fn listar_handler(params: web::Query<ParamsSolicitudes>) -> impl Responder {
    let filtro = params
        .estado
        .as_deref()
        .and_then(EstadoSolicitud::desde_texto);
    match almacen::abrir_conexion().and_then(|conn| {
        almacen::solicitudes::sembrar_si_vacia(&conn)?;
        almacen::solicitudes::listar(&conn, filtro)
    }) {
        Ok(solicitudes) => {
            let total = solicitudes.len() as u64;
            let inicio =
                (params.page.saturating_sub(1) as usize).saturating_mul(params.limit as usize);
            let items: Vec<_> = solicitudes
                .into_iter()
                .skip(inicio)
                .take(params.limit as usize)
                .collect();
            HttpResponse::Ok().json(json!({
                "items": items,
                "total": total,
                "page": params.page,
                "limit": params.limit,
            }))
        }
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo leyendo solicitudes: {err}")})),
    }
}

/// POST /solicitudes
pub async fn crear_handler(cuerpo: web::Json<NuevaSolicitud>) -> impl Responder {
    let nueva = cuerpo.into_inner();
    if nueva.nombre.trim().is_empty()
        || nueva.inicio.trim().is_empty()
        || nueva.fin.trim().is_empty()
    {
        return HttpResponse::BadRequest()
            .json(json!({"error": "nombre, inicio y fin son obligatorios"}));
    }
    match almacen::abrir_conexion().and_then(|conn| almacen::solicitudes::crear(&conn, nueva)) {
        Ok(solicitud) => HttpResponse::Ok().json(solicitud),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo insertando solicitud: {err}")})),
    }
}

/// POST /solicitudes/{id}/aprobar
pub async fn aprobar_handler(ruta: web::Path<String>) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion()
        .and_then(|conn| almacen::solicitudes::aprobar(&conn, &id, APROBADOR))
    {
        Ok(Some(solicitud)) => HttpResponse::Ok().json(solicitud),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Solicitud no encontrada"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo aprobando solicitud: {err}")})),
    }
}

/// POST /solicitudes/{id}/rechazar
pub async fn rechazar_handler(ruta: web::Path<String>) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion()
        .and_then(|conn| almacen::solicitudes::rechazar(&conn, &id, APROBADOR))
    {
        Ok(Some(solicitud)) => HttpResponse::Ok().json(solicitud),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Solicitud no encontrada"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo rechazando solicitud: {err}")})),
    }
}

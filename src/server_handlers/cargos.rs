use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::almacen;
use crate::models::{NuevoCargo, ParcheCargo};
use crate::paginacion::PeticionPagina;

/// GET /cargos?page=&limit=
pub async fn listar_handler(peticion: web::Query<PeticionPagina>) -> impl Responder {
    match almacen::abrir_conexion().and_then(|conn| almacen::cargos::listar(&conn)) {
        Ok(cargos) => {
            let total = cargos.len() as u64;
            let inicio =
                (peticion.page.saturating_sub(1) as usize).saturating_mul(peticion.limit as usize);
            let items: Vec<_> = cargos
                .into_iter()
                .skip(inicio)
                .take(peticion.limit as usize)
                .collect();
            HttpResponse::Ok().json(json!({
                "items": items,
                "total": total,
                "page": peticion.page,
                "limit": peticion.limit,
            }))
        }
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo leyendo cargos: {err}")})),
    }
}

/// POST /cargos
pub async fn crear_handler(cuerpo: web::Json<NuevoCargo>) -> impl Responder {
    let nuevo = cuerpo.into_inner();
    if nuevo.nombre.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "nombre es obligatorio"}));
    }
    match almacen::abrir_conexion().and_then(|conn| almacen::cargos::insertar(&conn, nuevo)) {
        Ok(cargo) => HttpResponse::Ok().json(cargo),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo insertando cargo: {err}")})),
    }
}

/// PATCH /cargos/{id}
pub async fn parchar_handler(
    ruta: web::Path<String>,
    cuerpo: web::Json<ParcheCargo>,
) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion()
        .and_then(|conn| almacen::cargos::parchar(&conn, &id, cuerpo.into_inner()))
    {
        Ok(Some(cargo)) => HttpResponse::Ok().json(cargo),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Cargo no encontrado"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo editando cargo: {err}")})),
    }
}

/// DELETE /cargos/{id}
pub async fn eliminar_handler(ruta: web::Path<String>) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion().and_then(|conn| almacen::cargos::eliminar(&conn, &id)) {
        Ok(true) => HttpResponse::Ok().json(json!({"status": "ok"})),
        Ok(false) => HttpResponse::NotFound().json(json!({"error": "Cargo no encontrado"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo eliminando cargo: {err}")})),
    }
}

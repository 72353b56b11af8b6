use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::almacen;
use crate::models::{NuevaRenuncia, ParcheRenuncia};
use crate::paginacion::{cortar_pagina, PeticionPagina};

/// GET /renuncias?page=&limit=. Cada fila lleva el nombre del empleado
/// resuelto contra la plantilla local.
pub async fn listar_handler(peticion: web::Query<PeticionPagina>) -> impl Responder {
    let resultado = almacen::abrir_conexion().and_then(|conn| {
        let renuncias = almacen::renuncias::listar(&conn)?;
        let empleados = almacen::empleados::listar(&conn)?;
        Ok(almacen::renuncias::con_nombres(&renuncias, &empleados))
    });
    match resultado {
        Ok(filas) => {
            let total = filas.len() as u64;
            let items = cortar_pagina(filas, peticion.page, peticion.limit);
            HttpResponse::Ok().json(json!({
                "items": items,
                "total": total,
                "page": peticion.page,
                "limit": peticion.limit,
            }))
        }
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo leyendo renuncias: {err}")})),
    }
}

/// POST /renuncias
pub async fn crear_handler(cuerpo: web::Json<NuevaRenuncia>) -> impl Responder {
    let nueva = cuerpo.into_inner();
    if nueva.employee_id.trim().is_empty() || nueva.fecha.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(json!({"error": "employee_id y fecha son obligatorios"}));
    }
    match almacen::abrir_conexion().and_then(|conn| almacen::renuncias::insertar(&conn, nueva)) {
        Ok(renuncia) => HttpResponse::Ok().json(renuncia),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo insertando renuncia: {err}")})),
    }
}

/// PATCH /renuncias/{id}
pub async fn parchar_handler(
    ruta: web::Path<String>,
    cuerpo: web::Json<ParcheRenuncia>,
) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion()
        .and_then(|conn| almacen::renuncias::parchar(&conn, &id, cuerpo.into_inner()))
    {
        Ok(Some(renuncia)) => HttpResponse::Ok().json(renuncia),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Renuncia no encontrada"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo editando renuncia: {err}")})),
    }
}

/// DELETE /renuncias/{id}
pub async fn eliminar_handler(ruta: web::Path<String>) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion().and_then(|conn| almacen::renuncias::eliminar(&conn, &id)) {
        Ok(true) => HttpResponse::Ok().json(json!({"status": "ok"})),
        Ok(false) => HttpResponse::NotFound().json(json!({"error": "Renuncia no encontrada"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo eliminando renuncia: {err}")})),
    }
}

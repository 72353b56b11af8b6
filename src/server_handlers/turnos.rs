use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::almacen;
use crate::models::AsignacionTurno;
use crate::paginacion::PeticionPagina;

/// GET /turnos?page=&limit=
pub async fn listar_handler(peticion: web::Query<PeticionPagina>) -> impl Responder {
    match almacen::abrir_conexion().and_then(|conn| almacen::turnos::listar(&conn)) {
        Ok(turnos) => {
            let total = turnos.len() as u64;
            let inicio =
                (peticion.page.saturating_sub(1) as usize).saturating_mul(peticion.limit as usize);
            let items: Vec<_> = turnos
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
            .json(json!({"error": format!("fallo leyendo turnos: {err}")})),
    }
}

/// POST /turnos: asigna (o reasigna) el turno de un empleado.
pub async fn asignar_handler(cuerpo: web::Json<AsignacionTurno>) -> impl Responder {
    let asignacion = cuerpo.into_inner();
    if asignacion.empleado_nombre.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "empleado_nombre es obligatorio"}));
    }
    match almacen::abrir_conexion().and_then(|conn| almacen::turnos::asignar(&conn, asignacion)) {
        Ok((turno, reemplazado)) => {
            HttpResponse::Ok().json(json!({"turno": turno, "reemplazado": reemplazado}))
        }
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo asignando turno: {err}")})),
    }
}

/// PATCH /turnos/{id}
pub async fn editar_handler(
    ruta: web::Path<String>,
    cuerpo: web::Json<AsignacionTurno>,
) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion()
        .and_then(|conn| almacen::turnos::editar(&conn, &id, cuerpo.into_inner()))
    {
        Ok(Some(turno)) => HttpResponse::Ok().json(turno),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Turno no encontrado"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo editando turno: {err}")})),
    }
}

/// DELETE /turnos/{id}
pub async fn eliminar_handler(ruta: web::Path<String>) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion().and_then(|conn| almacen::turnos::eliminar(&conn, &id)) {
        Ok(true) => HttpResponse::Ok().json(json!({"status": "ok"})),
        Ok(false) => HttpResponse::NotFound().json(json!({"error": "Turno no encontrado"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo eliminando turno: {err}")})),
    }
}

/// GET /turnos/empleado/{nombre}: turno asignado a un empleado, o nulo.
pub async fn por_empleado_handler(ruta: web::Path<String>) -> impl Responder {
    let nombre = ruta.into_inner();
    match almacen::abrir_conexion().and_then(|conn| almacen::turnos::por_empleado(&conn, &nombre))
    {
        Ok(turno) => HttpResponse::Ok().json(json!({"turno": turno})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo buscando turno: {err}")})),
    }
}

use actix_web::{web, HttpResponse, Responder};
use reqwest::Client;
use serde_json::{json, Value};

use crate::almacen;
use crate::models::{NuevoEmpleado, ParcheEmpleado};
use crate::paginacion::{cortar_pagina, FormaCuerpo, PeticionPagina};
use crate::server::EstadoApp;

/// Trae la plantilla remota; cualquier fallo se traga y devuelve vacío,
/// como hacía el tablero (lo local sigue funcionando sin red).
async fn obtener_remotas(http: &Client, url: Option<&str>) -> Vec<Value> {
    let Some(url) = url else {
        return Vec::new();
    };
    match http.get(url).send().await {
        Ok(respuesta) if respuesta.status().is_success() => {
            match respuesta.json::<Value>().await {
                Ok(cuerpo) => FormaCuerpo::clasificar(cuerpo).en_filas(),
                Err(err) => {
                    log::debug!("cuerpo remoto de empleados ilegible: {err}");
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    }
}

/// GET /empleados?page=&limit=: mezcla remoto y local y pagina en memoria.
pub async fn listar_handler(
    peticion: web::Query<PeticionPagina>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let url_remota = datos
        .cargador
        .registro()
        .endpoints
        .get("Empleado")
        .map(String::as_str);
    let remotas = obtener_remotas(&datos.http, url_remota).await;

    let locales = match almacen::abrir_conexion().and_then(|conn| almacen::empleados::listar(&conn))
    {
        Ok(locales) => locales,
        Err(err) => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": format!("fallo leyendo empleados locales: {err}")}));
        }
    };

    let todas = almacen::empleados::combinar_con_api(remotas, &locales);
    let total = todas.len() as u64;
    let items = cortar_pagina(todas, peticion.page, peticion.limit);
    HttpResponse::Ok().json(json!({
        "items": items,
        "total": total,
        "page": peticion.page,
        "limit": peticion.limit,
    }))
}

/// POST /empleados
pub async fn crear_handler(cuerpo: web::Json<NuevoEmpleado>) -> impl Responder {
    let nuevo = cuerpo.into_inner();
    if nuevo.employee_name.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "employee_name es obligatorio"}));
    }
    match almacen::abrir_conexion().and_then(|conn| almacen::empleados::insertar(&conn, nuevo)) {
        Ok(empleado) => HttpResponse::Ok().json(empleado),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo insertando empleado: {err}")})),
    }
}

/// PATCH /empleados/{id}
pub async fn parchar_handler(
    ruta: web::Path<String>,
    cuerpo: web::Json<ParcheEmpleado>,
) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion()
        .and_then(|conn| almacen::empleados::parchar(&conn, &id, cuerpo.into_inner()))
    {
        Ok(Some(empleado)) => HttpResponse::Ok().json(empleado),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Empleado no encontrado"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo editando empleado: {err}")})),
    }
}

/// DELETE /empleados/{id}
pub async fn eliminar_handler(ruta: web::Path<String>) -> impl Responder {
    let id = ruta.into_inner();
    match almacen::abrir_conexion().and_then(|conn| almacen::empleados::eliminar(&conn, &id)) {
        Ok(true) => HttpResponse::Ok().json(json!({"status": "ok"})),
        Ok(false) => HttpResponse::NotFound().json(json!({"error": "Empleado no encontrado"})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo eliminando empleado: {err}")})),
    }
}

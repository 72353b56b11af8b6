use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};

use crate::paginacion::{PeticionPagina, ResultadoCarga};
use crate::server::EstadoApp;

/// GET /vistas: nombres de vista configurados y su modo.
pub async fn listar_vistas_handler(datos: web::Data<EstadoApp>) -> impl Responder {
    let registro = datos.cargador.registro();
    let vistas: Vec<Value> = registro
        .endpoints
        .keys()
        .map(|nombre| {
            let modo = match registro.paginacion.get(nombre) {
                Some(crate::paginacion::ModoPaginacion::Servidor { .. }) => "server",
                _ => "client",
            };
            json!({"vista": nombre, "modo": modo})
        })
        .collect();
    HttpResponse::Ok().json(json!({"vistas": vistas}))
}

/// GET /vistas/{nombre}?page=&limit=
///
/// Tres desenlaces: página cargada, vista sin enlazar (items nulo, no es
/// un error) o fallo remoto con el detalle en `error`.
pub async fn cargar_vista_handler(
    ruta: web::Path<String>,
    peticion: web::Query<PeticionPagina>,
    datos: web::Data<EstadoApp>,
) -> impl Responder {
    let vista = ruta.into_inner();
    match datos.cargador.cargar_vista(&vista, *peticion).await {
        Ok(ResultadoCarga::Pagina(pagina)) => HttpResponse::Ok().json(json!({
            "vista": vista,
            "enlazada": true,
            "items": pagina.items,
            "total": pagina.total,
            "page": pagina.page,
            "limit": pagina.limit,
        })),
        Ok(ResultadoCarga::SinEnlazar) => HttpResponse::Ok().json(json!({
            "vista": vista,
            "enlazada": false,
            "items": Value::Null,
            "total": 0,
        })),
        Err(err) => HttpResponse::BadGateway().json(json!({
            "vista": vista,
            "error": format!("{err}"),
        })),
    }
}

/// GET /estado: instantánea de la última carga del cargador.
pub async fn estado_handler(datos: web::Data<EstadoApp>) -> impl Responder {
    HttpResponse::Ok().json(datos.cargador.estado())
}

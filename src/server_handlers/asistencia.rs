use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::almacen;
use crate::asistencia;
use crate::models::Marcacion;

#[derive(Debug, Deserialize)]
pub struct ParamsReporte {
    /// Fecha del reporte (YYYY-MM-DD); por defecto hoy.
    pub fecha: Option<String>,
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

/// GET /asistencia/reporte?fecha=&page=&limit=
///
/// Los KPIs se calculan sobre la plantilla completa; la tabla se pagina.
pub async fn reporte_handler(params: web::Query<ParamsReporte>) -> impl Responder {
    let fecha = params
        .fecha
        .clone()
        .unwrap_or_else(|| Utc::now().date_naive().to_string());

    let resultado = almacen::abrir_conexion().and_then(|conn| {
        let empleados = almacen::empleados::listar(&conn)?;
        let turnos = almacen::turnos::listar(&conn)?;
        let marcaciones = almacen::marcaciones::listar_por_fecha(&conn, &fecha)?;
        Ok(asistencia::construir_reporte(&empleados, &turnos, &marcaciones))
    });

    match resultado {
        Ok((filas, kpis)) => {
            let total = filas.len() as u64;
            let inicio =
                (params.page.saturating_sub(1) as usize).saturating_mul(params.limit as usize);
            let items: Vec<_> = filas
                .into_iter()
                .skip(inicio)
                .take(params.limit as usize)
                .collect();
            HttpResponse::Ok().json(json!({
                "fecha": fecha,
                "kpis": kpis,
                "items": items,
                "total": total,
                "page": params.page,
                "limit": params.limit,
            }))
        }
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo construyendo el reporte: {err}")})),
    }
}

/// POST /asistencia/marcaciones: importa un lote de marcaciones.
pub async fn importar_handler(cuerpo: web::Json<Vec<Marcacion>>) -> impl Responder {
    let lote = cuerpo.into_inner();
    if lote.is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "el lote viene vacío"}));
    }
    match almacen::abrir_conexion()
        .and_then(|conn| almacen::marcaciones::insertar_lote(&conn, &lote))
    {
        Ok(insertadas) => HttpResponse::Ok().json(json!({"status": "ok", "insertadas": insertadas})),
        Err(err) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("fallo importando marcaciones: {err}")})),
    }
}

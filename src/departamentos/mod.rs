//! Consulta remota de departamentos.
//!
//! El API remoto usa otro dialecto de paginación que las vistas genéricas:
//! `limit`/`skip` como query params (y `/search?q=` para buscar), con el
//! total dentro del cuerpo. Por eso vive junto al cargador, no dentro.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::paginacion::ErrorCarga;

const VISTA: &str = "Departamento";

#[derive(Debug, Default, Deserialize)]
pub struct PaginaDepartamentos {
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub total: u64,
}

/// Pide una página de departamentos al API remoto, con búsqueda opcional.
pub async fn buscar(
    http: &Client,
    base_url: &str,
    q: &str,
    page: u32,
    limit: u32,
) -> Result<PaginaDepartamentos, ErrorCarga> {
    let skip = page.saturating_sub(1).saturating_mul(limit);
    let base = base_url.trim_end_matches('/');
    let q = q.trim();

    let peticion = if q.is_empty() {
        http.get(base.to_string())
    } else {
        http.get(format!("{base}/search")).query(&[("q", q)])
    };

    let respuesta = peticion
        .query(&[("limit", limit.to_string()), ("skip", skip.to_string())])
        .send()
        .await
        .map_err(|fuente| ErrorCarga::Red {
            vista: VISTA.to_string(),
            fuente,
        })?;

    let status = respuesta.status();
    if !status.is_success() {
        return Err(ErrorCarga::Estado {
            vista: VISTA.to_string(),
            status: status.as_u16(),
        });
    }

    let texto = respuesta.text().await.map_err(|fuente| ErrorCarga::Red {
        vista: VISTA.to_string(),
        fuente,
    })?;
    serde_json::from_str(&texto).map_err(|fuente| ErrorCarga::Cuerpo {
        vista: VISTA.to_string(),
        fuente,
    })
}

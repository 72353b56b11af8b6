//! Carga paginada de vistas
//!
//! Resuelve una vista nombrada (p. ej. "Empleado") a una página de
//! registros, eligiendo entre dos estrategias: paginación en el servidor
//! (el endpoint acepta página/límite como query params) o paginación en el
//! cliente (el endpoint devuelve todo y el corte se hace localmente).
//! Los registros son opacos para el cargador: sólo se cuentan y se cortan.

use std::collections::HashMap;
use std::sync::Mutex;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Modo de paginación declarado para una vista.
#[derive(Debug, Clone)]
pub enum ModoPaginacion {
    /// El endpoint entrega una sola página: página y límite viajan como
    /// query params bajo los nombres configurados, y el total (si el
    /// servidor lo anuncia) llega en la cabecera indicada.
    Servidor {
        param_pagina: String,
        param_limite: String,
        cabecera_total: String,
    },
    /// El endpoint entrega siempre el dataset completo sin parámetros;
    /// el corte en páginas se hace en memoria.
    Cliente,
}

/// Registro de vistas: URL base por nombre y, por separado, el modo de
/// paginación por nombre. Una vista con endpoint pero sin descriptor se
/// trata como modo cliente.
#[derive(Debug, Clone, Default)]
pub struct Registro {
    pub endpoints: HashMap<String, String>,
    pub paginacion: HashMap<String, ModoPaginacion>,
}

impl Registro {
    pub fn nuevo() -> Self {
        Self::default()
    }

    /// Registra una vista en modo cliente.
    pub fn vista_cliente(mut self, nombre: &str, base_url: &str) -> Self {
        self.endpoints.insert(nombre.to_string(), base_url.to_string());
        self.paginacion
            .insert(nombre.to_string(), ModoPaginacion::Cliente);
        self
    }

    /// Registra una vista en modo servidor con sus nombres de parámetros
    /// y la cabecera donde el endpoint anuncia el total.
    pub fn vista_servidor(
        mut self,
        nombre: &str,
        base_url: &str,
        param_pagina: &str,
        param_limite: &str,
        cabecera_total: &str,
    ) -> Self {
        self.endpoints.insert(nombre.to_string(), base_url.to_string());
        self.paginacion.insert(
            nombre.to_string(),
            ModoPaginacion::Servidor {
                param_pagina: param_pagina.to_string(),
                param_limite: param_limite.to_string(),
                cabecera_total: cabecera_total.to_string(),
            },
        );
        self
    }

    pub fn vistas(&self) -> Vec<&str> {
        self.endpoints.keys().map(String::as_str).collect()
    }
}

/// Página solicitada. Los campos son sin signo y con defaults 1/10; un
/// valor 0 no se rechaza y pasa tal cual a la estrategia (ver DESIGN.md).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PeticionPagina {
    #[serde(default = "pagina_por_defecto")]
    pub page: u32,
    #[serde(default = "limite_por_defecto")]
    pub limit: u32,
}

fn pagina_por_defecto() -> u32 {
    1
}

fn limite_por_defecto() -> u32 {
    10
}

impl Default for PeticionPagina {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// Una página resuelta: las filas de la página más el total conocido o
/// estimado del dataset.
#[derive(Debug, Clone, Serialize)]
pub struct PaginaResultado {
    pub items: Vec<Value>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Desenlace de `cargar_vista`: una página, o la señal de que la vista no
/// tiene endpoint registrado (que no es un error).
#[derive(Debug)]
pub enum ResultadoCarga {
    Pagina(PaginaResultado),
    SinEnlazar,
}

/// Fallos al cargar una vista. Se entregan tal cual, sin reintentos ni
/// clasificación en recuperables/fatales: el llamador decide.
#[derive(Debug, Error)]
pub enum ErrorCarga {
    #[error("HTTP {status} al consultar la vista '{vista}'")]
    Estado { vista: String, status: u16 },
    #[error("fallo de red al consultar la vista '{vista}'")]
    Red {
        vista: String,
        #[source]
        fuente: reqwest::Error,
    },
    #[error("cuerpo JSON inválido en la vista '{vista}'")]
    Cuerpo {
        vista: String,
        #[source]
        fuente: serde_json::Error,
    },
}

/// Forma reconocida del cuerpo de respuesta. La precedencia es fija:
/// arreglo directo, luego `.data`, luego `.items`, luego objeto suelto
/// (que se envuelve en un arreglo de un elemento). `null` cuenta como
/// vacío.
#[derive(Debug, PartialEq)]
pub enum FormaCuerpo {
    Arreglo(Vec<Value>),
    CampoData(Vec<Value>),
    CampoItems(Vec<Value>),
    Suelto(Value),
    Vacio,
}

impl FormaCuerpo {
    pub fn clasificar(cuerpo: Value) -> Self {
        match cuerpo {
            Value::Array(filas) => Self::Arreglo(filas),
            Value::Null => Self::Vacio,
            Value::Object(mut mapa) => {
                // `.data` o `.items` sólo cuentan si son arreglos; un campo
                // con otro tipo se conserva dentro del objeto suelto.
                match mapa.remove("data") {
                    Some(Value::Array(filas)) => return Self::CampoData(filas),
                    Some(otro) => {
                        mapa.insert("data".to_string(), otro);
                    }
                    None => {}
                }
                match mapa.remove("items") {
                    Some(Value::Array(filas)) => return Self::CampoItems(filas),
                    Some(otro) => {
                        mapa.insert("items".to_string(), otro);
                    }
                    None => {}
                }
                Self::Suelto(Value::Object(mapa))
            }
            otro => Self::Suelto(otro),
        }
    }

    /// Aplana la forma clasificada a la lista de filas.
    pub fn en_filas(self) -> Vec<Value> {
        match self {
            Self::Arreglo(filas) | Self::CampoData(filas) | Self::CampoItems(filas) => filas,
            Self::Suelto(valor) => vec![valor],
            Self::Vacio => Vec::new(),
        }
    }
}

/// Estimación del total cuando el servidor no lo anuncia: si la página
/// vino completa se asume que existe al menos una más. Es una heurística
/// aproximada, no un conteo.
pub fn estimar_total(page: u32, limit: u32, recibidos: usize) -> u64 {
    let base = u64::from(page) * u64::from(limit);
    if recibidos == limit as usize && limit > 0 {
        base + 1
    } else {
        base
    }
}

/// Corte local de página: `[(page-1)*limit, (page-1)*limit + limit)`.
/// Con `page = 0` la aritmética satura y el corte cae en la primera página.
pub fn cortar_pagina(filas: Vec<Value>, page: u32, limit: u32) -> Vec<Value> {
    let inicio = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
    filas.into_iter().skip(inicio).take(limit as usize).collect()
}

/// Instantánea del estado del cargador: la última vista pedida con su
/// página, límite, total y filas. `items == None` significa que la última
/// vista pedida no estaba enlazada a ningún endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EstadoCargador {
    pub vista: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub items: Option<Vec<Value>>,
}

impl Default for EstadoCargador {
    fn default() -> Self {
        Self {
            vista: None,
            page: 1,
            limit: 10,
            total: 0,
            items: Some(Vec::new()),
        }
    }
}

/// Cargador de listas paginadas. Posee el registro de vistas, el cliente
/// HTTP y el estado de la última carga; no hay estado global de módulo.
pub struct CargadorListas {
    registro: Registro,
    http: Client,
    estado: Mutex<EstadoCargador>,
}

impl CargadorListas {
    pub fn nuevo(registro: Registro) -> Self {
        Self {
            registro,
            http: Client::new(),
            estado: Mutex::new(EstadoCargador::default()),
        }
    }

    pub fn registro(&self) -> &Registro {
        &self.registro
    }

    /// Copia del estado actual. Mutar la copia no afecta al cargador.
    pub fn estado(&self) -> EstadoCargador {
        self.estado
            .lock()
            .expect("estado del cargador envenenado")
            .clone()
    }

    /// Carga una página de la vista indicada.
    ///
    /// Exactamente un GET por llamada para vistas enlazadas; una vista sin
    /// endpoint no toca la red y devuelve `SinEnlazar`. El estado interno
    /// sólo se sobrescribe cuando la carga termina (el último commit gana
    /// si hay cargas concurrentes); un fallo lo deja intacto. No hay
    /// reintentos ni cancelación de peticiones en vuelo.
    pub async fn cargar_vista(
        &self,
        vista: &str,
        peticion: PeticionPagina,
    ) -> Result<ResultadoCarga, ErrorCarga> {
        let Some(base_url) = self.registro.endpoints.get(vista) else {
            log::debug!("vista '{vista}' sin endpoint registrado");
            let mut estado = self.estado.lock().expect("estado del cargador envenenado");
            *estado = EstadoCargador {
                vista: Some(vista.to_string()),
                page: peticion.page,
                limit: peticion.limit,
                total: 0,
                items: None,
            };
            return Ok(ResultadoCarga::SinEnlazar);
        };

        let pagina = match self.registro.paginacion.get(vista) {
            Some(ModoPaginacion::Servidor {
                param_pagina,
                param_limite,
                cabecera_total,
            }) => {
                self.cargar_servidor(vista, base_url, param_pagina, param_limite, cabecera_total, peticion)
                    .await
            }
            // Sin descriptor, o declarado cliente: estrategia de cliente.
            _ => self.cargar_cliente(vista, base_url, peticion).await,
        };

        match pagina {
            Ok(pagina) => {
                let mut estado = self.estado.lock().expect("estado del cargador envenenado");
                *estado = EstadoCargador {
                    vista: Some(vista.to_string()),
                    page: pagina.page,
                    limit: pagina.limit,
                    total: pagina.total,
                    items: Some(pagina.items.clone()),
                };
                Ok(ResultadoCarga::Pagina(pagina))
            }
            Err(err) => {
                log::warn!("fallo cargando la vista '{vista}': {err}");
                Err(err)
            }
        }
    }

    /// Estrategia servidor: un GET con página/límite como query params y
    /// lectura del total desde la cabecera configurada.
    async fn cargar_servidor(
        &self,
        vista: &str,
        base_url: &str,
        param_pagina: &str,
        param_limite: &str,
        cabecera_total: &str,
        peticion: PeticionPagina,
    ) -> Result<PaginaResultado, ErrorCarga> {
        let respuesta = self
            .http
            .get(base_url)
            .query(&[
                (param_pagina, peticion.page.to_string()),
                (param_limite, peticion.limit.to_string()),
            ])
            .send()
            .await
            .map_err(|fuente| ErrorCarga::Red {
                vista: vista.to_string(),
                fuente,
            })?;

        let status = respuesta.status();
        if !status.is_success() {
            return Err(ErrorCarga::Estado {
                vista: vista.to_string(),
                status: status.as_u16(),
            });
        }

        // La búsqueda en HeaderMap ya es insensible a mayúsculas, así que
        // una sola consulta cubre la cabecera en cualquier caja.
        let valor_cabecera = respuesta
            .headers()
            .get(cabecera_total)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_string());

        let filas = self.leer_filas(vista, respuesta).await?;

        let total = match valor_cabecera {
            // Cabecera presente pero no numérica: se usa el conteo recibido.
            Some(valor) => valor.parse::<u64>().unwrap_or(filas.len() as u64),
            None => estimar_total(peticion.page, peticion.limit, filas.len()),
        };

        Ok(PaginaResultado {
            items: filas,
            total,
            page: peticion.page,
            limit: peticion.limit,
        })
    }

    /// Estrategia cliente: un único GET sin parámetros y corte local.
    async fn cargar_cliente(
        &self,
        vista: &str,
        base_url: &str,
        peticion: PeticionPagina,
    ) -> Result<PaginaResultado, ErrorCarga> {
        let respuesta = self
            .http
            .get(base_url)
            .send()
            .await
            .map_err(|fuente| ErrorCarga::Red {
                vista: vista.to_string(),
                fuente,
            })?;

        let status = respuesta.status();
        if !status.is_success() {
            return Err(ErrorCarga::Estado {
                vista: vista.to_string(),
                status: status.as_u16(),
            });
        }

        let todas = self.leer_filas(vista, respuesta).await?;
        let total = todas.len() as u64;
        let items = cortar_pagina(todas, peticion.page, peticion.limit);

        Ok(PaginaResultado {
            items,
            total,
            page: peticion.page,
            limit: peticion.limit,
        })
    }

    /// Lee el cuerpo como texto, lo decodifica y lo normaliza a filas.
    /// Se decodifica aparte de reqwest para distinguir el JSON inválido
    /// del fallo de transporte.
    async fn leer_filas(
        &self,
        vista: &str,
        respuesta: reqwest::Response,
    ) -> Result<Vec<Value>, ErrorCarga> {
        let texto = respuesta.text().await.map_err(|fuente| ErrorCarga::Red {
            vista: vista.to_string(),
            fuente,
        })?;
        let cuerpo: Value =
            serde_json::from_str(&texto).map_err(|fuente| ErrorCarga::Cuerpo {
                vista: vista.to_string(),
                fuente,
            })?;
        Ok(FormaCuerpo::clasificar(cuerpo).en_filas())
    }
}

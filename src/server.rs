use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;

use crate::config;
use crate::paginacion::CargadorListas;
use crate::server_handlers::{asistencia, cargos, departamentos, empleados, renuncias, solicitudes, turnos, vistas};

/// Estado compartido entre handlers: el cargador de vistas, un cliente
/// HTTP para los proxys remotos y las URLs configuradas.
pub struct EstadoApp {
    pub cargador: CargadorListas,
    pub http: reqwest::Client,
    pub url_departamentos: String,
}

impl EstadoApp {
    pub fn desde_config() -> Self {
        Self {
            cargador: CargadorListas::nuevo(config::registro_por_defecto()),
            http: reqwest::Client::new(),
            url_departamentos: config::url_departamentos(),
        }
    }
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let datos = web::Data::new(EstadoApp::desde_config());
    HttpServer::new(move || {
        // El consumidor es una SPA servida desde otro origen
        App::new()
            .wrap(Cors::permissive())
            .app_data(datos.clone())
            .route("/vistas", web::get().to(vistas::listar_vistas_handler))
            .route("/vistas/{nombre}", web::get().to(vistas::cargar_vista_handler))
            .route("/estado", web::get().to(vistas::estado_handler))
            .route("/empleados", web::get().to(empleados::listar_handler))
            .route("/empleados", web::post().to(empleados::crear_handler))
            .route("/empleados/{id}", web::patch().to(empleados::parchar_handler))
            .route("/empleados/{id}", web::delete().to(empleados::eliminar_handler))
            .route("/cargos", web::get().to(cargos::listar_handler))
            .route("/cargos", web::post().to(cargos::crear_handler))
            .route("/cargos/{id}", web::patch().to(cargos::parchar_handler))
            .route("/cargos/{id}", web::delete().to(cargos::eliminar_handler))
            .route("/renuncias", web::get().to(renuncias::listar_handler))
            .route("/renuncias", web::post().to(renuncias::crear_handler))
            .route("/renuncias/{id}", web::patch().to(renuncias::parchar_handler))
            .route("/renuncias/{id}", web::delete().to(renuncias::eliminar_handler))
            .route("/turnos", web::get().to(turnos::listar_handler))
            .route("/turnos", web::post().to(turnos::asignar_handler))
            .route("/turnos/empleado/{nombre}", web::get().to(turnos::por_empleado_handler))
            .route("/turnos/{id}", web::patch().to(turnos::editar_handler))
            .route("/turnos/{id}", web::delete().to(turnos::eliminar_handler))
            .route("/solicitudes", web::get().to(solicitudes::listar_handler))
            .route("/solicitudes", web::post().to(solicitudes::crear_handler))
            .route("/solicitudes/{id}/aprobar", web::post().to(solicitudes::aprobar_handler))
            .route("/solicitudes/{id}/rechazar", web::post().to(solicitudes::rechazar_handler))
            .route("/asistencia/reporte", web::get().to(asistencia::reporte_handler))
            .route("/asistencia/marcaciones", web::post().to(asistencia::importar_handler))
            .route("/departamentos", web::get().to(departamentos::buscar_handler))
            .route("/ayuda", web::get().to(ayuda_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}

async fn ayuda_handler(datos: web::Data<EstadoApp>) -> impl Responder {
    let ayuda = json!({
        "descripcion": "API del sistema de ponche. Las vistas genéricas se consultan con GET /vistas/{nombre}?page=&limit=; el resto de recursos son CRUD JSON.",
        "vistas_configuradas": datos.cargador.registro().vistas(),
        "ejemplo_vista": "/vistas/Usuarios?page=1&limit=10",
        "ejemplo_solicitud": {
            "nombre": "Andrea Díaz Calderón - 646546",
            "nivel": "Sia Latam",
            "categoria": "Vacaciones",
            "tipo": "No trabajadas (días)",
            "inicio": "2025-09-02",
            "fin": "2025-10-02"
        },
        "ejemplo_turno": {"empleado_nombre": "Ana Pérez", "turno": "Diurno"},
        "ejemplo_marcacion": [{
            "empleado_nombre": "Ana Pérez",
            "fecha": "2026-08-07",
            "entrada": "08:12",
            "salida": "16:05",
            "minutos_almuerzo": 35
        }],
        "nota": "Los recursos locales (empleados, cargos, renuncias, turnos, solicitudes, marcaciones) viven en SQLite; las vistas y los departamentos consultan APIs remotas."
    });
    HttpResponse::Ok().json(ayuda)
}

//! Configuración del servicio: registro de vistas y variables de entorno.

use std::env;

use crate::paginacion::Registro;

/// Carga .env si existe; los errores se ignoran (el fichero es opcional).
pub fn cargar_dotenv() {
    let _ = dotenv::dotenv();
}

/// Registro de vistas por defecto: los endpoints demo del tablero, en modo
/// cliente (ambas APIs devuelven el dataset completo). Las variables
/// `PONCHE_ENDPOINT_<VISTA>` añaden o sobreescriben URLs base; una vista
/// añadida así sin descriptor queda en modo cliente.
pub fn registro_por_defecto() -> Registro {
    cargar_dotenv();
    let mut registro = Registro::nuevo()
        .vista_cliente(
            "Empleado",
            "https://dummy.restapiexample.com/api/v1/employees",
        )
        .vista_cliente("Usuarios", "https://jsonplaceholder.typicode.com/users");

    for (clave, valor) in env::vars() {
        if let Some(vista) = clave.strip_prefix("PONCHE_ENDPOINT_") {
            if !vista.is_empty() && !valor.trim().is_empty() {
                registro
                    .endpoints
                    .insert(vista.to_string(), valor.trim().to_string());
            }
        }
    }

    registro
}

/// URL base del API remoto de departamentos (estilo dummyjson).
pub fn url_departamentos() -> String {
    cargar_dotenv();
    env::var("PONCHE_DEPARTAMENTOS_URL").unwrap_or_else(|_| "https://dummyjson.com/users".to_string())
}

/// Dirección de escucha del servidor HTTP.
pub fn direccion_escucha() -> String {
    cargar_dotenv();
    env::var("PONCHE_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registro_por_defecto_trae_vistas_demo() {
        let registro = registro_por_defecto();
        assert!(registro.endpoints.contains_key("Empleado"));
        assert!(registro.endpoints.contains_key("Usuarios"));
    }
}

// Biblioteca raíz del crate `ponche`.
// Reexporta los módulos principales y la función `run_server` que levanta
// el servicio HTTP completo.
pub mod almacen;
pub mod asistencia;
pub mod config;
pub mod departamentos;
pub mod models;
pub mod paginacion;
pub mod server;
mod server_handlers;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

//! Almacén local de entidades sobre SQLite.
//!
//! Sustituye a la caché clave-valor del navegador: una tabla por entidad,
//! conexiones de corta vida por operación y creación de tablas idempotente.

pub mod cargos;
pub mod empleados;
pub mod marcaciones;
pub mod renuncias;
pub mod solicitudes;
pub mod turnos;

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use rusqlite::Connection;

fn cargar_dotenv() {
    let _ = dotenv::dotenv();
}

/// Ruta del fichero SQLite local. Honra `PONCHE_DB_PATH` y `PONCHE_DB_URL`
/// (aceptando los esquemas sqlite:// y file://); por defecto
/// `datos/ponche.db`.
pub fn ruta_db() -> PathBuf {
    cargar_dotenv();
    if let Ok(ruta) = env::var("PONCHE_DB_PATH") {
        PathBuf::from(ruta)
    } else if let Ok(url) = env::var("PONCHE_DB_URL") {
        if let Some(resto) = url.strip_prefix("sqlite://") {
            PathBuf::from(resto)
        } else if let Some(resto) = url.strip_prefix("file://") {
            PathBuf::from(resto)
        } else {
            PathBuf::from("datos/ponche.db")
        }
    } else {
        PathBuf::from("datos/ponche.db")
    }
}

/// Abre una conexión al almacén local, creando el directorio si hace falta.
pub fn abrir_conexion() -> Result<Connection, Box<dyn Error>> {
    let ruta = ruta_db();
    if let Some(dir) = ruta.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(Connection::open(ruta)?)
}

/// Crea las tablas de entidades si no existen.
pub fn init_db(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS empleados (
            id TEXT PRIMARY KEY,
            employee_name TEXT NOT NULL,
            employee_salary TEXT NOT NULL,
            employee_age TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS cargos (
            id TEXT PRIMARY KEY,
            nombre TEXT NOT NULL,
            descripcion TEXT
        );

        CREATE TABLE IF NOT EXISTS renuncias (
            id TEXT PRIMARY KEY,
            employee_id TEXT NOT NULL,
            fecha TEXT,
            razon TEXT
        );

        CREATE TABLE IF NOT EXISTS turnos (
            id_turno TEXT PRIMARY KEY,
            empleado_nombre TEXT NOT NULL,
            turno TEXT NOT NULL,
            inicio TEXT NOT NULL,
            fin TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS solicitudes (
            id TEXT PRIMARY KEY,
            nombre TEXT NOT NULL,
            nivel TEXT,
            categoria TEXT,
            tipo TEXT,
            fecha_solicitud TEXT,
            inicio TEXT,
            fin TEXT,
            fecha_accion TEXT,
            aprobado_por TEXT,
            estado TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS marcaciones (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            empleado_nombre TEXT NOT NULL,
            fecha TEXT NOT NULL,
            entrada TEXT,
            salida TEXT,
            minutos_almuerzo INTEGER NOT NULL DEFAULT 0
        );",
    )?;
    Ok(())
}

/// Abre la base, crea las tablas y siembra los datos demo. Pensada para el
/// arranque del servidor.
pub fn preparar_db() -> Result<(), Box<dyn Error>> {
    let conn = abrir_conexion()?;
    init_db(&conn)?;
    solicitudes::sembrar_si_vacia(&conn)?;
    Ok(())
}

static ULTIMO_ID: AtomicI64 = AtomicI64::new(0);

/// Id basado en el reloj en milisegundos, monótono dentro del proceso para
/// que dos altas consecutivas no colisionen.
pub fn generar_id() -> String {
    let ahora = Utc::now().timestamp_millis();
    let mut previo = ULTIMO_ID.load(Ordering::SeqCst);
    loop {
        let candidato = ahora.max(previo + 1);
        match ULTIMO_ID.compare_exchange(previo, candidato, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return candidato.to_string(),
            Err(actual) => previo = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generar_id_no_repite() {
        let a = generar_id();
        let b = generar_id();
        let c = generar_id();
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_init_db_es_idempotente() {
        let conn = Connection::open_in_memory().expect("sqlite en memoria");
        init_db(&conn).expect("primera creación");
        init_db(&conn).expect("segunda creación");
    }
}

//! Solicitudes de ausencia: alta, listado filtrado y aprobación/rechazo.

use std::error::Error;

use chrono::{Datelike, NaiveDate, Timelike, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{EstadoSolicitud, NuevaSolicitud, Solicitud};

const MESES: [&str; 12] = [
    "ENE", "FEB", "MAR", "ABR", "MAY", "JUN", "JUL", "AGO", "SEP", "OCT", "NOV", "DIC",
];

/// Fecha corta al estilo del tablero: "28 NOV 2024".
pub fn fecha_corta(fecha: NaiveDate) -> String {
    let mes = MESES[(fecha.month0()) as usize];
    format!("{:02} {} {}", fecha.day(), mes, fecha.year())
}

/// Si el texto es una fecha ISO (entrada de formulario) la reformatea; en
/// otro caso lo deja tal cual.
pub fn formatear_fecha(texto: &str) -> String {
    match texto.parse::<NaiveDate>() {
        Ok(fecha) => fecha_corta(fecha),
        Err(_) => texto.to_string(),
    }
}

/// Sello de fecha y hora de acción: "28 NOV 2024 10:12".
pub fn sello_ahora() -> String {
    let ahora = Utc::now();
    format!(
        "{} {:02}:{:02}",
        fecha_corta(ahora.date_naive()),
        ahora.hour(),
        ahora.minute()
    )
}

fn mapear_fila(fila: &rusqlite::Row<'_>) -> rusqlite::Result<(Solicitud, String)> {
    let estado_texto: String = fila.get(10)?;
    Ok((
        Solicitud {
            id: fila.get(0)?,
            nombre: fila.get(1)?,
            nivel: fila.get::<_, Option<String>>(2)?.unwrap_or_default(),
            categoria: fila.get::<_, Option<String>>(3)?.unwrap_or_default(),
            tipo: fila.get::<_, Option<String>>(4)?.unwrap_or_default(),
            fecha_solicitud: fila.get::<_, Option<String>>(5)?.unwrap_or_default(),
            inicio: fila.get::<_, Option<String>>(6)?.unwrap_or_default(),
            fin: fila.get::<_, Option<String>>(7)?.unwrap_or_default(),
            fecha_accion: fila.get::<_, Option<String>>(8)?.unwrap_or_default(),
            aprobado_por: fila.get::<_, Option<String>>(9)?.unwrap_or_default(),
            estado: EstadoSolicitud::Pendiente,
        },
        estado_texto,
    ))
}

fn resolver_estado(
    (mut solicitud, estado_texto): (Solicitud, String),
) -> Result<Solicitud, Box<dyn Error>> {
    solicitud.estado = EstadoSolicitud::desde_texto(&estado_texto)
        .ok_or_else(|| format!("estado de solicitud desconocido en la base: '{estado_texto}'"))?;
    Ok(solicitud)
}

const COLUMNAS: &str = "id, nombre, nivel, categoria, tipo, fecha_solicitud, inicio, fin, fecha_accion, aprobado_por, estado";

/// Lista las solicitudes, opcionalmente sólo las de un estado.
pub fn listar(
    conn: &Connection,
    filtro: Option<EstadoSolicitud>,
) -> Result<Vec<Solicitud>, Box<dyn Error>> {
    let mut salida = Vec::new();
    match filtro {
        Some(estado) => {
            let sql = format!(
                "SELECT {COLUMNAS} FROM solicitudes WHERE estado = ?1 ORDER BY rowid DESC"
            );
            let mut stmt = conn.prepare(&sql)?;
            let filas = stmt.query_map(params![estado.texto()], mapear_fila)?;
            for fila in filas {
                salida.push(resolver_estado(fila?)?);
            }
        }
        None => {
            let sql = format!("SELECT {COLUMNAS} FROM solicitudes ORDER BY rowid DESC");
            let mut stmt = conn.prepare(&sql)?;
            let filas = stmt.query_map([], mapear_fila)?;
            for fila in filas {
                salida.push(resolver_estado(fila?)?);
            }
        }
    }
    Ok(salida)
}

pub fn buscar(conn: &Connection, id: &str) -> Result<Option<Solicitud>, Box<dyn Error>> {
    let sql = format!("SELECT {COLUMNAS} FROM solicitudes WHERE id = ?1");
    let fila = conn
        .query_row(&sql, params![id], mapear_fila)
        .optional()?;
    match fila {
        Some(fila) => Ok(Some(resolver_estado(fila)?)),
        None => Ok(None),
    }
}

fn insertar(conn: &Connection, solicitud: &Solicitud) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT INTO solicitudes (id, nombre, nivel, categoria, tipo, fecha_solicitud, inicio, fin, fecha_accion, aprobado_por, estado)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            solicitud.id,
            solicitud.nombre,
            solicitud.nivel,
            solicitud.categoria,
            solicitud.tipo,
            solicitud.fecha_solicitud,
            solicitud.inicio,
            solicitud.fin,
            solicitud.fecha_accion,
            solicitud.aprobado_por,
            solicitud.estado.texto(),
        ],
    )?;
    Ok(())
}

/// Alta de una solicitud: nace Pendiente, sin aprobador, con la fecha de
/// solicitud de hoy.
pub fn crear(conn: &Connection, nueva: NuevaSolicitud) -> Result<Solicitud, Box<dyn Error>> {
    let nivel = if nueva.nivel.trim().is_empty() {
        "—".to_string()
    } else {
        nueva.nivel
    };
    let solicitud = Solicitud {
        id: super::generar_id(),
        nombre: nueva.nombre,
        nivel,
        categoria: nueva.categoria,
        tipo: nueva.tipo,
        fecha_solicitud: fecha_corta(Utc::now().date_naive()),
        inicio: formatear_fecha(&nueva.inicio),
        fin: formatear_fecha(&nueva.fin),
        fecha_accion: sello_ahora(),
        aprobado_por: "—".to_string(),
        estado: EstadoSolicitud::Pendiente,
    };
    insertar(conn, &solicitud)?;
    Ok(solicitud)
}

fn transicionar(
    conn: &Connection,
    id: &str,
    estado: EstadoSolicitud,
    quien: &str,
) -> Result<Option<Solicitud>, Box<dyn Error>> {
    let Some(mut solicitud) = buscar(conn, id)? else {
        return Ok(None);
    };
    solicitud.estado = estado;
    solicitud.aprobado_por = quien.to_string();
    solicitud.fecha_accion = sello_ahora();
    conn.execute(
        "UPDATE solicitudes SET estado = ?2, aprobado_por = ?3, fecha_accion = ?4 WHERE id = ?1",
        params![
            solicitud.id,
            solicitud.estado.texto(),
            solicitud.aprobado_por,
            solicitud.fecha_accion,
        ],
    )?;
    Ok(Some(solicitud))
}

pub fn aprobar(
    conn: &Connection,
    id: &str,
    quien: &str,
) -> Result<Option<Solicitud>, Box<dyn Error>> {
    transicionar(conn, id, EstadoSolicitud::Aprobado, quien)
}

pub fn rechazar(
    conn: &Connection,
    id: &str,
    quien: &str,
) -> Result<Option<Solicitud>, Box<dyn Error>> {
    transicionar(conn, id, EstadoSolicitud::NoAprobado, quien)
}

/// Siembra las tres solicitudes de demostración del tablero si la tabla
/// está vacía.
pub fn sembrar_si_vacia(conn: &Connection) -> Result<(), Box<dyn Error>> {
    let cuantas: i64 = conn.query_row("SELECT COUNT(*) FROM solicitudes", [], |fila| fila.get(0))?;
    if cuantas > 0 {
        return Ok(());
    }
    let semillas = [
        Solicitud {
            id: "000125".to_string(),
            nombre: "Christian Garcia".to_string(),
            nivel: "Sia Latam".to_string(),
            categoria: "Vacaciones".to_string(),
            tipo: "No trabajadas (días)".to_string(),
            fecha_solicitud: "28 NOV 2024".to_string(),
            inicio: "02 SEP 2025".to_string(),
            fin: "02 OCT 2025".to_string(),
            fecha_accion: "28 NOV 2024 10:12".to_string(),
            aprobado_por: "Admin".to_string(),
            estado: EstadoSolicitud::Pendiente,
        },
        Solicitud {
            id: "000151".to_string(),
            nombre: "Adrian Garcia-Rech".to_string(),
            nivel: "Sia Latam".to_string(),
            categoria: "Permiso".to_string(),
            tipo: "Horas".to_string(),
            fecha_solicitud: "03 DIC 2024".to_string(),
            inicio: "14 ENE 2025".to_string(),
            fin: "14 ENE 2025".to_string(),
            fecha_accion: "03 DIC 2024 09:40".to_string(),
            aprobado_por: "Cristian Garcia".to_string(),
            estado: EstadoSolicitud::Aprobado,
        },
        Solicitud {
            id: "000205".to_string(),
            nombre: "Cristian Garcia".to_string(),
            nivel: "Ventas".to_string(),
            categoria: "Enfermedad".to_string(),
            tipo: "Días".to_string(),
            fecha_solicitud: "28 NOV 2024".to_string(),
            inicio: "07 MAR 2025".to_string(),
            fin: "08 MAR 2025".to_string(),
            fecha_accion: "28 NOV 2024 12:20".to_string(),
            aprobado_por: "RH Supervisor".to_string(),
            estado: EstadoSolicitud::NoAprobado,
        },
    ];
    for solicitud in &semillas {
        insertar(conn, solicitud)?;
    }
    Ok(())
}

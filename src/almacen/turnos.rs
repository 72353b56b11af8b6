//! Asignación de turnos fijos a empleados.
//!
//! Regla del tablero: un empleado tiene a lo sumo un turno; asignarle otro
//! reemplaza el anterior. La búsqueda por nombre no distingue mayúsculas.

use std::error::Error;

use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{AsignacionTurno, TipoTurno, Turno};

fn fila_a_turno(
    id_turno: String,
    empleado_nombre: String,
    turno: String,
    inicio: String,
    fin: String,
) -> Result<Turno, Box<dyn Error>> {
    let tipo = TipoTurno::desde_texto(&turno)
        .ok_or_else(|| format!("tipo de turno desconocido en la base: '{turno}'"))?;
    Ok(Turno {
        id_turno,
        empleado_nombre,
        turno: tipo,
        inicio,
        fin,
    })
}

pub fn listar(conn: &Connection) -> Result<Vec<Turno>, Box<dyn Error>> {
    let mut stmt = conn.prepare(
        "SELECT id_turno, empleado_nombre, turno, inicio, fin FROM turnos ORDER BY rowid DESC",
    )?;
    let filas = stmt.query_map([], |fila| {
        Ok((
            fila.get::<_, String>(0)?,
            fila.get::<_, String>(1)?,
            fila.get::<_, String>(2)?,
            fila.get::<_, String>(3)?,
            fila.get::<_, String>(4)?,
        ))
    })?;
    let mut salida = Vec::new();
    for fila in filas {
        let (id, nombre, turno, inicio, fin) = fila?;
        salida.push(fila_a_turno(id, nombre, turno, inicio, fin)?);
    }
    Ok(salida)
}

/// Asigna un turno al empleado, reemplazando el que tuviera. Devuelve el
/// turno creado y si hubo reemplazo.
pub fn asignar(
    conn: &Connection,
    asignacion: AsignacionTurno,
) -> Result<(Turno, bool), Box<dyn Error>> {
    let previas = conn.execute(
        "DELETE FROM turnos WHERE lower(empleado_nombre) = lower(?1)",
        params![asignacion.empleado_nombre],
    )?;
    let (inicio, fin) = asignacion.turno.horario();
    let turno = Turno {
        id_turno: super::generar_id(),
        empleado_nombre: asignacion.empleado_nombre,
        turno: asignacion.turno,
        inicio: inicio.to_string(),
        fin: fin.to_string(),
    };
    conn.execute(
        "INSERT INTO turnos (id_turno, empleado_nombre, turno, inicio, fin) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            turno.id_turno,
            turno.empleado_nombre,
            turno.turno.texto(),
            turno.inicio,
            turno.fin,
        ],
    )?;
    Ok((turno, previas > 0))
}

/// Cambia empleado y/o tipo de un turno existente; el horario se recalcula
/// del tipo. Devuelve `None` si el id no existe.
pub fn editar(
    conn: &Connection,
    id_turno: &str,
    asignacion: AsignacionTurno,
) -> Result<Option<Turno>, Box<dyn Error>> {
    let existe = conn
        .query_row(
            "SELECT id_turno FROM turnos WHERE id_turno = ?1",
            params![id_turno],
            |fila| fila.get::<_, String>(0),
        )
        .optional()?;
    if existe.is_none() {
        return Ok(None);
    }
    let (inicio, fin) = asignacion.turno.horario();
    conn.execute(
        "UPDATE turnos SET empleado_nombre = ?2, turno = ?3, inicio = ?4, fin = ?5 WHERE id_turno = ?1",
        params![
            id_turno,
            asignacion.empleado_nombre,
            asignacion.turno.texto(),
            inicio,
            fin,
        ],
    )?;
    Ok(Some(Turno {
        id_turno: id_turno.to_string(),
        empleado_nombre: asignacion.empleado_nombre,
        turno: asignacion.turno,
        inicio: inicio.to_string(),
        fin: fin.to_string(),
    }))
}

pub fn eliminar(conn: &Connection, id_turno: &str) -> Result<bool, Box<dyn Error>> {
    let borradas = conn.execute("DELETE FROM turnos WHERE id_turno = ?1", params![id_turno])?;
    Ok(borradas > 0)
}

/// Turno asignado a un empleado, buscando por nombre sin distinguir
/// mayúsculas. `None` si no tiene.
pub fn por_empleado(conn: &Connection, nombre: &str) -> Result<Option<Turno>, Box<dyn Error>> {
    let fila = conn
        .query_row(
            "SELECT id_turno, empleado_nombre, turno, inicio, fin FROM turnos
             WHERE lower(empleado_nombre) = lower(?1)",
            params![nombre],
            |fila| {
                Ok((
                    fila.get::<_, String>(0)?,
                    fila.get::<_, String>(1)?,
                    fila.get::<_, String>(2)?,
                    fila.get::<_, String>(3)?,
                    fila.get::<_, String>(4)?,
                ))
            },
        )
        .optional()?;
    match fila {
        Some((id, nombre, turno, inicio, fin)) => {
            Ok(Some(fila_a_turno(id, nombre, turno, inicio, fin)?))
        }
        None => Ok(None),
    }
}

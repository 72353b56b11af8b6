//! Catálogo de cargos.

use std::error::Error;

use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{Cargo, NuevoCargo, ParcheCargo};

pub fn listar(conn: &Connection) -> Result<Vec<Cargo>, Box<dyn Error>> {
    let mut stmt =
        conn.prepare("SELECT id, nombre, descripcion FROM cargos ORDER BY rowid DESC")?;
    let filas = stmt.query_map([], |fila| {
        Ok(Cargo {
            id: fila.get(0)?,
            nombre: fila.get(1)?,
            descripcion: fila.get::<_, Option<String>>(2)?.unwrap_or_default(),
        })
    })?;
    let mut salida = Vec::new();
    for fila in filas {
        salida.push(fila?);
    }
    Ok(salida)
}

pub fn buscar(conn: &Connection, id: &str) -> Result<Option<Cargo>, Box<dyn Error>> {
    let cargo = conn
        .query_row(
            "SELECT id, nombre, descripcion FROM cargos WHERE id = ?1",
            params![id],
            |fila| {
                Ok(Cargo {
                    id: fila.get(0)?,
                    nombre: fila.get(1)?,
                    descripcion: fila.get::<_, Option<String>>(2)?.unwrap_or_default(),
                })
            },
        )
        .optional()?;
    Ok(cargo)
}

pub fn insertar(conn: &Connection, nuevo: NuevoCargo) -> Result<Cargo, Box<dyn Error>> {
    let cargo = Cargo {
        id: super::generar_id(),
        nombre: nuevo.nombre,
        descripcion: nuevo.descripcion,
    };
    conn.execute(
        "INSERT INTO cargos (id, nombre, descripcion) VALUES (?1, ?2, ?3)",
        params![cargo.id, cargo.nombre, cargo.descripcion],
    )?;
    Ok(cargo)
}

pub fn parchar(
    conn: &Connection,
    id: &str,
    parche: ParcheCargo,
) -> Result<Option<Cargo>, Box<dyn Error>> {
    let Some(mut cargo) = buscar(conn, id)? else {
        return Ok(None);
    };
    if let Some(valor) = parche.nombre {
        cargo.nombre = valor;
    }
    if let Some(valor) = parche.descripcion {
        cargo.descripcion = valor;
    }
    conn.execute(
        "UPDATE cargos SET nombre = ?2, descripcion = ?3 WHERE id = ?1",
        params![cargo.id, cargo.nombre, cargo.descripcion],
    )?;
    Ok(Some(cargo))
}

pub fn eliminar(conn: &Connection, id: &str) -> Result<bool, Box<dyn Error>> {
    let borradas = conn.execute("DELETE FROM cargos WHERE id = ?1", params![id])?;
    Ok(borradas > 0)
}

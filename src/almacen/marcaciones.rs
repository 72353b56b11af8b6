//! Marcaciones importadas (entrada/salida por empleado y fecha).

use std::error::Error;

use rusqlite::{params, Connection};

use crate::models::Marcacion;

/// Importa un lote de marcaciones. Devuelve cuántas filas se insertaron.
pub fn insertar_lote(conn: &Connection, lote: &[Marcacion]) -> Result<usize, Box<dyn Error>> {
    let mut insertadas = 0;
    for marcacion in lote {
        conn.execute(
            "INSERT INTO marcaciones (empleado_nombre, fecha, entrada, salida, minutos_almuerzo)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                marcacion.empleado_nombre,
                marcacion.fecha,
                marcacion.entrada,
                marcacion.salida,
                marcacion.minutos_almuerzo,
            ],
        )?;
        insertadas += 1;
    }
    Ok(insertadas)
}

/// Marcaciones de una fecha concreta (YYYY-MM-DD).
pub fn listar_por_fecha(conn: &Connection, fecha: &str) -> Result<Vec<Marcacion>, Box<dyn Error>> {
    let mut stmt = conn.prepare(
        "SELECT empleado_nombre, fecha, entrada, salida, minutos_almuerzo
         FROM marcaciones WHERE fecha = ?1 ORDER BY rowid",
    )?;
    let filas = stmt.query_map(params![fecha], |fila| {
        Ok(Marcacion {
            empleado_nombre: fila.get(0)?,
            fecha: fila.get(1)?,
            entrada: fila.get::<_, Option<String>>(2)?.unwrap_or_default(),
            salida: fila.get::<_, Option<String>>(3)?.unwrap_or_default(),
            minutos_almuerzo: fila.get(4)?,
        })
    })?;
    let mut salida = Vec::new();
    for fila in filas {
        salida.push(fila?);
    }
    Ok(salida)
}

//! Renuncias, siempre referidas a un empleado por su id.

use std::error::Error;

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{json, Value};

use crate::models::{Empleado, NuevaRenuncia, ParcheRenuncia, Renuncia};

pub fn listar(conn: &Connection) -> Result<Vec<Renuncia>, Box<dyn Error>> {
    let mut stmt =
        conn.prepare("SELECT id, employee_id, fecha, razon FROM renuncias ORDER BY rowid DESC")?;
    let filas = stmt.query_map([], |fila| {
        Ok(Renuncia {
            id: fila.get(0)?,
            employee_id: fila.get(1)?,
            fecha: fila.get::<_, Option<String>>(2)?.unwrap_or_default(),
            razon: fila.get::<_, Option<String>>(3)?.unwrap_or_default(),
        })
    })?;
    let mut salida = Vec::new();
    for fila in filas {
        salida.push(fila?);
    }
    Ok(salida)
}

pub fn buscar(conn: &Connection, id: &str) -> Result<Option<Renuncia>, Box<dyn Error>> {
    let renuncia = conn
        .query_row(
            "SELECT id, employee_id, fecha, razon FROM renuncias WHERE id = ?1",
            params![id],
            |fila| {
                Ok(Renuncia {
                    id: fila.get(0)?,
                    employee_id: fila.get(1)?,
                    fecha: fila.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    razon: fila.get::<_, Option<String>>(3)?.unwrap_or_default(),
                })
            },
        )
        .optional()?;
    Ok(renuncia)
}

pub fn insertar(conn: &Connection, nueva: NuevaRenuncia) -> Result<Renuncia, Box<dyn Error>> {
    let renuncia = Renuncia {
        id: super::generar_id(),
        employee_id: nueva.employee_id,
        fecha: nueva.fecha,
        razon: nueva.razon,
    };
    conn.execute(
        "INSERT INTO renuncias (id, employee_id, fecha, razon) VALUES (?1, ?2, ?3, ?4)",
        params![renuncia.id, renuncia.employee_id, renuncia.fecha, renuncia.razon],
    )?;
    Ok(renuncia)
}

pub fn parchar(
    conn: &Connection,
    id: &str,
    parche: ParcheRenuncia,
) -> Result<Option<Renuncia>, Box<dyn Error>> {
    let Some(mut renuncia) = buscar(conn, id)? else {
        return Ok(None);
    };
    if let Some(valor) = parche.employee_id {
        renuncia.employee_id = valor;
    }
    if let Some(valor) = parche.fecha {
        renuncia.fecha = valor;
    }
    if let Some(valor) = parche.razon {
        renuncia.razon = valor;
    }
    conn.execute(
        "UPDATE renuncias SET employee_id = ?2, fecha = ?3, razon = ?4 WHERE id = ?1",
        params![renuncia.id, renuncia.employee_id, renuncia.fecha, renuncia.razon],
    )?;
    Ok(Some(renuncia))
}

pub fn eliminar(conn: &Connection, id: &str) -> Result<bool, Box<dyn Error>> {
    let borradas = conn.execute("DELETE FROM renuncias WHERE id = ?1", params![id])?;
    Ok(borradas > 0)
}

/// Adjunta a cada renuncia el nombre del empleado referido; "Desconocido"
/// cuando el id ya no existe en la plantilla.
pub fn con_nombres(renuncias: &[Renuncia], empleados: &[Empleado]) -> Vec<Value> {
    renuncias
        .iter()
        .map(|renuncia| {
            let nombre = empleados
                .iter()
                .find(|empleado| empleado.id == renuncia.employee_id)
                .map(|empleado| empleado.employee_name.as_str())
                .unwrap_or("Desconocido");
            json!({
                "id": renuncia.id,
                "employee_id": renuncia.employee_id,
                "empleado_nombre": nombre,
                "fecha": renuncia.fecha,
                "razon": renuncia.razon,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_con_nombres_marca_desconocido() {
        let empleados = vec![Empleado {
            id: "1".to_string(),
            employee_name: "Marta Gil".to_string(),
            employee_salary: "900".to_string(),
            employee_age: "40".to_string(),
        }];
        let renuncias = vec![
            Renuncia {
                id: "a".to_string(),
                employee_id: "1".to_string(),
                fecha: "2026-01-15".to_string(),
                razon: "Cambio de ciudad".to_string(),
            },
            Renuncia {
                id: "b".to_string(),
                employee_id: "99".to_string(),
                fecha: "2026-02-01".to_string(),
                razon: "".to_string(),
            },
        ];
        let filas = con_nombres(&renuncias, &empleados);
        assert_eq!(filas[0]["empleado_nombre"], "Marta Gil");
        assert_eq!(filas[1]["empleado_nombre"], "Desconocido");
    }
}

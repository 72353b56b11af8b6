//! Altas, bajas y ediciones de empleados, más la mezcla con la API remota.

use std::error::Error;

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::models::{Empleado, NuevoEmpleado, ParcheEmpleado};

pub fn listar(conn: &Connection) -> Result<Vec<Empleado>, Box<dyn Error>> {
    let mut stmt = conn.prepare(
        "SELECT id, employee_name, employee_salary, employee_age FROM empleados ORDER BY rowid DESC",
    )?;
    let filas = stmt.query_map([], |fila| {
        Ok(Empleado {
            id: fila.get(0)?,
            employee_name: fila.get(1)?,
            employee_salary: fila.get(2)?,
            employee_age: fila.get(3)?,
        })
    })?;
    let mut salida = Vec::new();
    for fila in filas {
        salida.push(fila?);
    }
    Ok(salida)
}

pub fn buscar(conn: &Connection, id: &str) -> Result<Option<Empleado>, Box<dyn Error>> {
    let empleado = conn
        .query_row(
            "SELECT id, employee_name, employee_salary, employee_age FROM empleados WHERE id = ?1",
            params![id],
            |fila| {
                Ok(Empleado {
                    id: fila.get(0)?,
                    employee_name: fila.get(1)?,
                    employee_salary: fila.get(2)?,
                    employee_age: fila.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(empleado)
}

pub fn insertar(conn: &Connection, nuevo: NuevoEmpleado) -> Result<Empleado, Box<dyn Error>> {
    let empleado = Empleado {
        id: super::generar_id(),
        employee_name: nuevo.employee_name,
        employee_salary: nuevo.employee_salary,
        employee_age: nuevo.employee_age,
    };
    conn.execute(
        "INSERT INTO empleados (id, employee_name, employee_salary, employee_age) VALUES (?1, ?2, ?3, ?4)",
        params![
            empleado.id,
            empleado.employee_name,
            empleado.employee_salary,
            empleado.employee_age,
        ],
    )?;
    Ok(empleado)
}

/// Edición parcial. Devuelve `None` si el id no existe.
pub fn parchar(
    conn: &Connection,
    id: &str,
    parche: ParcheEmpleado,
) -> Result<Option<Empleado>, Box<dyn Error>> {
    let Some(mut empleado) = buscar(conn, id)? else {
        return Ok(None);
    };
    if let Some(valor) = parche.employee_name {
        empleado.employee_name = valor;
    }
    if let Some(valor) = parche.employee_salary {
        empleado.employee_salary = valor;
    }
    if let Some(valor) = parche.employee_age {
        empleado.employee_age = valor;
    }
    conn.execute(
        "UPDATE empleados SET employee_name = ?2, employee_salary = ?3, employee_age = ?4 WHERE id = ?1",
        params![
            empleado.id,
            empleado.employee_name,
            empleado.employee_salary,
            empleado.employee_age,
        ],
    )?;
    Ok(Some(empleado))
}

pub fn eliminar(conn: &Connection, id: &str) -> Result<bool, Box<dyn Error>> {
    let borradas = conn.execute("DELETE FROM empleados WHERE id = ?1", params![id])?;
    Ok(borradas > 0)
}

/// Mezcla las filas remotas con las locales: una fila remota cuyo id
/// coincide con una local se descarta (lo local gana) y las locales van al
/// final, en el mismo orden que combinaba el tablero.
pub fn combinar_con_api(remotas: Vec<Value>, locales: &[Empleado]) -> Vec<Value> {
    let mut salida: Vec<Value> = remotas
        .into_iter()
        .filter(|remota| {
            let id_remota = id_como_texto(remota);
            !locales
                .iter()
                .any(|local| Some(local.id.as_str()) == id_remota.as_deref())
        })
        .collect();
    for local in locales {
        if let Ok(valor) = serde_json::to_value(local) {
            salida.push(valor);
        }
    }
    salida
}

/// El id remoto puede venir como número o como texto.
fn id_como_texto(fila: &Value) -> Option<String> {
    match fila.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_combinar_gana_lo_local() {
        let locales = vec![Empleado {
            id: "7".to_string(),
            employee_name: "Ana Pérez".to_string(),
            employee_salary: "1200".to_string(),
            employee_age: "31".to_string(),
        }];
        let remotas = vec![
            json!({"id": 7, "employee_name": "Ana (remota)"}),
            json!({"id": 8, "employee_name": "Luis"}),
        ];
        let combinadas = combinar_con_api(remotas, &locales);
        assert_eq!(combinadas.len(), 2);
        assert_eq!(combinadas[0]["id"], json!(8));
        assert_eq!(combinadas[1]["employee_name"], json!("Ana Pérez"));
    }
}

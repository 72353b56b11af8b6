// Estructuras de datos principales del sistema de ponche

use serde::{Deserialize, Serialize};

/// Empleado tal como lo entrega la API demo; los nombres de campo se
/// conservan para poder mezclar filas remotas y locales sin traducción.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Empleado {
    pub id: String,
    pub employee_name: String,
    pub employee_salary: String,
    pub employee_age: String,
}

/// Alta de empleado: el id lo asigna el almacén.
#[derive(Debug, Clone, Deserialize)]
pub struct NuevoEmpleado {
    pub employee_name: String,
    pub employee_salary: String,
    pub employee_age: String,
}

/// Edición parcial de empleado.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParcheEmpleado {
    pub employee_name: Option<String>,
    pub employee_salary: Option<String>,
    pub employee_age: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cargo {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NuevoCargo {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParcheCargo {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

/// Renuncia referida a un empleado por su id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Renuncia {
    pub id: String,
    pub employee_id: String,
    pub fecha: String,
    pub razon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NuevaRenuncia {
    pub employee_id: String,
    pub fecha: String,
    pub razon: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParcheRenuncia {
    pub employee_id: Option<String>,
    pub fecha: Option<String>,
    pub razon: Option<String>,
}

/// Turnos con horario fijo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoTurno {
    Diurno,
    Tarde,
    Nocturno,
}

impl TipoTurno {
    /// Horario fijo (inicio, fin) en formato HH:MM. El turno Tarde y el
    /// Nocturno cruzan la medianoche.
    pub fn horario(self) -> (&'static str, &'static str) {
        match self {
            TipoTurno::Diurno => ("08:00", "16:00"),
            TipoTurno::Tarde => ("16:00", "00:00"),
            TipoTurno::Nocturno => ("00:00", "08:00"),
        }
    }

    pub fn texto(self) -> &'static str {
        match self {
            TipoTurno::Diurno => "Diurno",
            TipoTurno::Tarde => "Tarde",
            TipoTurno::Nocturno => "Nocturno",
        }
    }

    pub fn desde_texto(texto: &str) -> Option<Self> {
        match texto {
            "Diurno" => Some(TipoTurno::Diurno),
            "Tarde" => Some(TipoTurno::Tarde),
            "Nocturno" => Some(TipoTurno::Nocturno),
            _ => None,
        }
    }
}

/// Asignación de turno a un empleado. Un empleado tiene a lo sumo una.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turno {
    pub id_turno: String,
    pub empleado_nombre: String,
    pub turno: TipoTurno,
    pub inicio: String,
    pub fin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AsignacionTurno {
    pub empleado_nombre: String,
    pub turno: TipoTurno,
}

/// Estado de una solicitud. El texto "No aprobado" se conserva tal cual
/// lo muestra el tablero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoSolicitud {
    Pendiente,
    Aprobado,
    #[serde(rename = "No aprobado")]
    NoAprobado,
}

impl EstadoSolicitud {
    pub fn texto(self) -> &'static str {
        match self {
            EstadoSolicitud::Pendiente => "Pendiente",
            EstadoSolicitud::Aprobado => "Aprobado",
            EstadoSolicitud::NoAprobado => "No aprobado",
        }
    }

    pub fn desde_texto(texto: &str) -> Option<Self> {
        match texto {
            "Pendiente" => Some(EstadoSolicitud::Pendiente),
            "Aprobado" => Some(EstadoSolicitud::Aprobado),
            "No aprobado" => Some(EstadoSolicitud::NoAprobado),
            _ => None,
        }
    }
}

/// Solicitud de ausencia (vacaciones, permiso, enfermedad...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solicitud {
    pub id: String,
    pub nombre: String,
    pub nivel: String,
    pub categoria: String,
    pub tipo: String,
    pub fecha_solicitud: String,
    pub inicio: String,
    pub fin: String,
    pub fecha_accion: String,
    pub aprobado_por: String,
    pub estado: EstadoSolicitud,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NuevaSolicitud {
    pub nombre: String,
    #[serde(default)]
    pub nivel: String,
    pub categoria: String,
    pub tipo: String,
    pub inicio: String,
    pub fin: String,
}

/// Marcación de un día: entrada/salida en HH:MM y minutos de almuerzo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marcacion {
    pub empleado_nombre: String,
    pub fecha: String,
    pub entrada: String,
    pub salida: String,
    #[serde(default)]
    pub minutos_almuerzo: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EstadoAsistencia {
    Ok,
    Tarde,
    Ausente,
}

/// Fila del reporte de marcaciones para un empleado.
#[derive(Debug, Clone, Serialize)]
pub struct FilaAsistencia {
    pub id: String,
    pub nombre: String,
    pub horario: String,
    pub marcaciones: u32,
    pub horas: String,
    pub estado: EstadoAsistencia,
    pub minutos_tarde: u32,
    pub minutos_retiro: u32,
    pub almuerzo_extendido: bool,
    pub minutos_sobretiempo: u32,
}

/// Conteos del reporte de marcaciones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KpisAsistencia {
    pub asistencia: u32,
    pub ausencias: u32,
    pub tardanzas: u32,
    pub almuerzo_extendido: u32,
    pub retiros_temprano: u32,
    pub sobretiempo: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_solicitud_serializa_con_espacio() {
        let texto = serde_json::to_string(&EstadoSolicitud::NoAprobado).unwrap();
        assert_eq!(texto, "\"No aprobado\"");
        let de_vuelta: EstadoSolicitud = serde_json::from_str(&texto).unwrap();
        assert_eq!(de_vuelta, EstadoSolicitud::NoAprobado);
    }

    #[test]
    fn test_horarios_fijos_de_turno() {
        assert_eq!(TipoTurno::Diurno.horario(), ("08:00", "16:00"));
        assert_eq!(TipoTurno::Tarde.horario(), ("16:00", "00:00"));
        assert_eq!(TipoTurno::Nocturno.horario(), ("00:00", "08:00"));
        assert_eq!(TipoTurno::desde_texto("Tarde"), Some(TipoTurno::Tarde));
        assert_eq!(TipoTurno::desde_texto("tarde"), None);
    }
}

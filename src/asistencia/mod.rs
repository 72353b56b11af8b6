//! Reporte de marcaciones: una fila por empleado y los seis contadores
//! (asistencia, ausencias, tardanzas, almuerzo extendido, retiros
//! temprano, sobretiempo).

use crate::models::{
    Empleado, EstadoAsistencia, FilaAsistencia, KpisAsistencia, Marcacion, Turno,
};

/// Almuerzo normal en minutos; por encima cuenta como extendido.
pub const ALMUERZO_NORMAL_MIN: u32 = 30;

const MINUTOS_DIA: u32 = 24 * 60;

/// Convierte "HH:MM" a minutos desde medianoche. `None` si el texto no
/// tiene esa forma.
pub fn hhmm_a_minutos(texto: &str) -> Option<u32> {
    let (horas, minutos) = texto.split_once(':')?;
    let horas: u32 = horas.parse().ok()?;
    let minutos: u32 = minutos.parse().ok()?;
    if horas > 23 || minutos > 59 {
        return None;
    }
    Some(horas * 60 + minutos)
}

/// Minutos a "HH:MM". Los valores por encima de un día se truncan a 23:59.
pub fn minutos_a_hhmm(minutos: u32) -> String {
    let minutos = minutos.min(MINUTOS_DIA - 1);
    format!("{:02}:{:02}", minutos / 60, minutos % 60)
}

/// Extremo de fin que puede cruzar medianoche: si `fin <= inicio` el turno
/// termina al día siguiente y se le suman 24 horas para comparar.
fn fin_absoluto(inicio: u32, fin: u32) -> u32 {
    if fin <= inicio { fin + MINUTOS_DIA } else { fin }
}

/// Construye la fila del reporte para un empleado a partir de su turno
/// asignado (si tiene) y su marcación del día (si marcó).
pub fn construir_fila(
    empleado: &Empleado,
    turno: Option<&Turno>,
    marcacion: Option<&Marcacion>,
) -> FilaAsistencia {
    let horario = match turno {
        Some(turno) => format!("{} | {}", turno.inicio, turno.fin),
        None => "--:-- | --:--".to_string(),
    };

    let Some(marcacion) = marcacion else {
        return FilaAsistencia {
            id: empleado.id.clone(),
            nombre: empleado.employee_name.clone(),
            horario,
            marcaciones: 0,
            horas: "--:--".to_string(),
            estado: EstadoAsistencia::Ausente,
            minutos_tarde: 0,
            minutos_retiro: 0,
            almuerzo_extendido: false,
            minutos_sobretiempo: 0,
        };
    };

    let entrada = hhmm_a_minutos(&marcacion.entrada);
    let salida = hhmm_a_minutos(&marcacion.salida);

    // Tarde / retiro / sobretiempo sólo se pueden medir con turno asignado
    // y marcas legibles.
    let programado = turno.and_then(|turno| {
        let inicio = hhmm_a_minutos(&turno.inicio)?;
        let fin = hhmm_a_minutos(&turno.fin)?;
        Some((inicio, fin_absoluto(inicio, fin)))
    });

    let mut minutos_tarde = 0;
    let mut minutos_retiro = 0;
    let mut minutos_sobretiempo = 0;
    if let (Some((inicio_prog, fin_prog)), Some(entrada), Some(salida)) =
        (programado, entrada, salida)
    {
        let salida_abs = if salida <= entrada { salida + MINUTOS_DIA } else { salida };
        minutos_tarde = entrada.saturating_sub(inicio_prog);
        minutos_retiro = fin_prog.saturating_sub(salida_abs);
        minutos_sobretiempo = salida_abs.saturating_sub(fin_prog);
    }

    let horas = match (entrada, salida) {
        (Some(entrada), Some(salida)) => {
            let salida_abs = if salida <= entrada { salida + MINUTOS_DIA } else { salida };
            minutos_a_hhmm(
                salida_abs
                    .saturating_sub(entrada)
                    .saturating_sub(marcacion.minutos_almuerzo),
            )
        }
        _ => "--:--".to_string(),
    };

    let estado = if minutos_tarde > 0 {
        EstadoAsistencia::Tarde
    } else {
        EstadoAsistencia::Ok
    };

    FilaAsistencia {
        id: empleado.id.clone(),
        nombre: empleado.employee_name.clone(),
        horario,
        marcaciones: 2 + if marcacion.minutos_almuerzo > 0 { 2 } else { 0 },
        horas,
        estado,
        minutos_tarde,
        minutos_retiro,
        almuerzo_extendido: marcacion.minutos_almuerzo > ALMUERZO_NORMAL_MIN,
        minutos_sobretiempo,
    }
}

/// Conteo de los seis indicadores sobre las filas del reporte.
pub fn construir_kpis(filas: &[FilaAsistencia]) -> KpisAsistencia {
    let mut kpis = KpisAsistencia::default();
    for fila in filas {
        if fila.estado == EstadoAsistencia::Ausente {
            kpis.ausencias += 1;
        } else {
            kpis.asistencia += 1;
        }
        if fila.minutos_tarde > 0 {
            kpis.tardanzas += 1;
        }
        if fila.almuerzo_extendido {
            kpis.almuerzo_extendido += 1;
        }
        if fila.minutos_retiro > 0 {
            kpis.retiros_temprano += 1;
        }
        if fila.minutos_sobretiempo > 0 {
            kpis.sobretiempo += 1;
        }
    }
    kpis
}

/// Reporte completo: una fila por empleado, cruzando turnos y marcaciones
/// por nombre sin distinguir mayúsculas, más los contadores.
pub fn construir_reporte(
    empleados: &[Empleado],
    turnos: &[Turno],
    marcaciones: &[Marcacion],
) -> (Vec<FilaAsistencia>, KpisAsistencia) {
    let filas: Vec<FilaAsistencia> = empleados
        .iter()
        .map(|empleado| {
            let nombre = empleado.employee_name.to_lowercase();
            let turno = turnos
                .iter()
                .find(|turno| turno.empleado_nombre.to_lowercase() == nombre);
            let marcacion = marcaciones
                .iter()
                .find(|marcacion| marcacion.empleado_nombre.to_lowercase() == nombre);
            construir_fila(empleado, turno, marcacion)
        })
        .collect();
    let kpis = construir_kpis(&filas);
    (filas, kpis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hhmm_a_minutos() {
        assert_eq!(hhmm_a_minutos("08:30"), Some(510));
        assert_eq!(hhmm_a_minutos("14:00"), Some(840));
        assert_eq!(hhmm_a_minutos("23:59"), Some(1439));
        assert_eq!(hhmm_a_minutos("24:00"), None);
        assert_eq!(hhmm_a_minutos("0830"), None);
        assert_eq!(hhmm_a_minutos("--:--"), None);
    }

    #[test]
    fn test_minutos_a_hhmm() {
        assert_eq!(minutos_a_hhmm(510), "08:30");
        assert_eq!(minutos_a_hhmm(0), "00:00");
        assert_eq!(minutos_a_hhmm(2000), "23:59");
    }
}

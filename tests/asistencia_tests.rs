//! Pruebas del reporte de marcaciones y sus contadores.

use ponche::asistencia::{construir_fila, construir_kpis, construir_reporte};
use ponche::models::{Empleado, EstadoAsistencia, Marcacion, TipoTurno, Turno};

fn empleado(id: &str, nombre: &str) -> Empleado {
    Empleado {
        id: id.to_string(),
        employee_name: nombre.to_string(),
        employee_salary: "1000".to_string(),
        employee_age: "30".to_string(),
    }
}

fn turno(nombre: &str, tipo: TipoTurno) -> Turno {
    let (inicio, fin) = tipo.horario();
    Turno {
        id_turno: "t1".to_string(),
        empleado_nombre: nombre.to_string(),
        turno: tipo,
        inicio: inicio.to_string(),
        fin: fin.to_string(),
    }
}

fn marcacion(nombre: &str, entrada: &str, salida: &str, almuerzo: u32) -> Marcacion {
    Marcacion {
        empleado_nombre: nombre.to_string(),
        fecha: "2026-08-07".to_string(),
        entrada: entrada.to_string(),
        salida: salida.to_string(),
        minutos_almuerzo: almuerzo,
    }
}

#[test]
fn test_fila_puntual_en_turno_diurno() {
    let emp = empleado("1", "Ana Pérez");
    let t = turno("Ana Pérez", TipoTurno::Diurno);
    let m = marcacion("Ana Pérez", "08:00", "16:00", 30);

    let fila = construir_fila(&emp, Some(&t), Some(&m));
    assert_eq!(fila.estado, EstadoAsistencia::Ok);
    assert_eq!(fila.horario, "08:00 | 16:00");
    assert_eq!(fila.minutos_tarde, 0);
    assert_eq!(fila.minutos_retiro, 0);
    assert_eq!(fila.minutos_sobretiempo, 0);
    assert!(!fila.almuerzo_extendido);
    // 8 horas menos 30 de almuerzo
    assert_eq!(fila.horas, "07:30");
    assert_eq!(fila.marcaciones, 4);
}

#[test]
fn test_fila_tarde_con_retiro_y_almuerzo_extendido() {
    let emp = empleado("2", "Luis Soto");
    let t = turno("Luis Soto", TipoTurno::Diurno);
    let m = marcacion("Luis Soto", "08:25", "15:40", 50);

    let fila = construir_fila(&emp, Some(&t), Some(&m));
    assert_eq!(fila.estado, EstadoAsistencia::Tarde);
    assert_eq!(fila.minutos_tarde, 25);
    assert_eq!(fila.minutos_retiro, 20);
    assert!(fila.almuerzo_extendido);
    assert_eq!(fila.minutos_sobretiempo, 0);
}

#[test]
fn test_fila_sobretiempo() {
    let emp = empleado("3", "Marta Gil");
    let t = turno("Marta Gil", TipoTurno::Diurno);
    let m = marcacion("Marta Gil", "08:00", "17:30", 30);

    let fila = construir_fila(&emp, Some(&t), Some(&m));
    assert_eq!(fila.minutos_sobretiempo, 90);
    assert_eq!(fila.minutos_retiro, 0);
}

#[test]
fn test_turno_tarde_cruza_medianoche() {
    let emp = empleado("4", "Pedro Ruiz");
    let t = turno("Pedro Ruiz", TipoTurno::Tarde);
    // Entra con 10 de retraso y se retira 10 antes de medianoche
    let m = marcacion("Pedro Ruiz", "16:10", "23:50", 0);

    let fila = construir_fila(&emp, Some(&t), Some(&m));
    assert_eq!(fila.minutos_tarde, 10);
    assert_eq!(fila.minutos_retiro, 10);
    assert_eq!(fila.minutos_sobretiempo, 0);
}

#[test]
fn test_fila_ausente_y_sin_turno() {
    let emp = empleado("5", "Eva Díaz");

    let ausente = construir_fila(&emp, None, None);
    assert_eq!(ausente.estado, EstadoAsistencia::Ausente);
    assert_eq!(ausente.horario, "--:-- | --:--");
    assert_eq!(ausente.horas, "--:--");
    assert_eq!(ausente.marcaciones, 0);

    // Con marcación pero sin turno asignado no se puede medir tardanza
    let m = marcacion("Eva Díaz", "09:00", "17:00", 0);
    let sin_turno = construir_fila(&emp, None, Some(&m));
    assert_eq!(sin_turno.estado, EstadoAsistencia::Ok);
    assert_eq!(sin_turno.minutos_tarde, 0);
    assert_eq!(sin_turno.horas, "08:00");
}

#[test]
fn test_kpis_cuentan_como_el_tablero() {
    let empleados = vec![
        empleado("1", "Ana Pérez"),
        empleado("2", "Luis Soto"),
        empleado("3", "Eva Díaz"),
    ];
    let turnos = vec![
        turno("Ana Pérez", TipoTurno::Diurno),
        turno("Luis Soto", TipoTurno::Diurno),
        turno("Eva Díaz", TipoTurno::Diurno),
    ];
    // Ana puntual, Luis tarde con almuerzo largo, Eva no marcó
    let marcaciones = vec![
        marcacion("Ana Pérez", "08:00", "16:00", 20),
        marcacion("Luis Soto", "08:15", "15:30", 45),
    ];

    let (filas, kpis) = construir_reporte(&empleados, &turnos, &marcaciones);
    assert_eq!(filas.len(), 3);
    assert_eq!(kpis.asistencia, 2);
    assert_eq!(kpis.ausencias, 1);
    assert_eq!(kpis.tardanzas, 1);
    assert_eq!(kpis.almuerzo_extendido, 1);
    assert_eq!(kpis.retiros_temprano, 1);
    assert_eq!(kpis.sobretiempo, 0);

    let solo_kpis = construir_kpis(&filas);
    assert_eq!(solo_kpis, kpis);
}

#[test]
fn test_reporte_cruza_nombres_sin_distinguir_mayusculas() {
    let empleados = vec![empleado("1", "Ana Pérez")];
    let turnos = vec![turno("ana pérez", TipoTurno::Diurno)];
    let marcaciones = vec![marcacion("ANA PÉREZ", "08:05", "16:00", 0)];

    let (filas, kpis) = construir_reporte(&empleados, &turnos, &marcaciones);
    assert_eq!(filas[0].estado, EstadoAsistencia::Tarde);
    assert_eq!(filas[0].minutos_tarde, 5);
    assert_eq!(kpis.asistencia, 1);
}

//! Pruebas del almacén local sobre SQLite en memoria.

use rusqlite::Connection;

use ponche::almacen::{self, cargos, empleados, marcaciones, renuncias, solicitudes, turnos};
use ponche::models::{
    AsignacionTurno, EstadoSolicitud, Marcacion, NuevaRenuncia, NuevaSolicitud, NuevoCargo,
    NuevoEmpleado, ParcheEmpleado, TipoTurno,
};

fn base_en_memoria() -> Connection {
    let conn = Connection::open_in_memory().expect("sqlite en memoria");
    almacen::init_db(&conn).expect("creación de tablas");
    conn
}

fn alta_empleado(conn: &Connection, nombre: &str) -> ponche::models::Empleado {
    empleados::insertar(
        conn,
        NuevoEmpleado {
            employee_name: nombre.to_string(),
            employee_salary: "1500".to_string(),
            employee_age: "28".to_string(),
        },
    )
    .expect("alta de empleado")
}

#[test]
fn test_empleados_crud_completo() {
    let conn = base_en_memoria();

    let ana = alta_empleado(&conn, "Ana Pérez");
    let luis = alta_empleado(&conn, "Luis Soto");

    // La lista sale con lo más reciente primero
    let lista = empleados::listar(&conn).expect("listado");
    assert_eq!(lista.len(), 2);
    assert_eq!(lista[0].id, luis.id);
    assert_eq!(lista[1].id, ana.id);

    // Parche parcial: sólo cambia el salario
    let parchado = empleados::parchar(
        &conn,
        &ana.id,
        ParcheEmpleado {
            employee_salary: Some("1800".to_string()),
            ..Default::default()
        },
    )
    .expect("parche")
    .expect("existe");
    assert_eq!(parchado.employee_name, "Ana Pérez");
    assert_eq!(parchado.employee_salary, "1800");

    // Id inexistente: None, no error
    let ninguno = empleados::parchar(&conn, "no-existe", ParcheEmpleado::default())
        .expect("parche sobre id inexistente");
    assert!(ninguno.is_none());

    assert!(empleados::eliminar(&conn, &luis.id).expect("borrado"));
    assert!(!empleados::eliminar(&conn, &luis.id).expect("segundo borrado"));
    assert_eq!(empleados::listar(&conn).expect("listado final").len(), 1);
}

#[test]
fn test_cargos_y_renuncias() {
    let conn = base_en_memoria();

    let cargo = cargos::insertar(
        &conn,
        NuevoCargo {
            nombre: "Analista".to_string(),
            descripcion: "Analista de RRHH".to_string(),
        },
    )
    .expect("alta de cargo");
    assert_eq!(cargos::listar(&conn).expect("cargos").len(), 1);
    assert!(cargos::eliminar(&conn, &cargo.id).expect("borrado de cargo"));

    let ana = alta_empleado(&conn, "Ana Pérez");
    let renuncia = renuncias::insertar(
        &conn,
        NuevaRenuncia {
            employee_id: ana.id.clone(),
            fecha: "2026-03-01".to_string(),
            razon: "Traslado".to_string(),
        },
    )
    .expect("alta de renuncia");

    let lista = renuncias::listar(&conn).expect("renuncias");
    let filas = renuncias::con_nombres(&lista, &empleados::listar(&conn).expect("plantilla"));
    assert_eq!(filas[0]["empleado_nombre"], "Ana Pérez");
    assert!(renuncias::eliminar(&conn, &renuncia.id).expect("borrado de renuncia"));
}

#[test]
fn test_turnos_reasignar_reemplaza() {
    let conn = base_en_memoria();

    let (primero, reemplazado) = turnos::asignar(
        &conn,
        AsignacionTurno {
            empleado_nombre: "Ana Pérez".to_string(),
            turno: TipoTurno::Diurno,
        },
    )
    .expect("primera asignación");
    assert!(!reemplazado);
    assert_eq!(primero.inicio, "08:00");

    // Reasignar con otra caja de mayúsculas reemplaza la anterior
    let (segundo, reemplazado) = turnos::asignar(
        &conn,
        AsignacionTurno {
            empleado_nombre: "ANA PEREZ".to_string(),
            turno: TipoTurno::Nocturno,
        },
    )
    .expect("segunda asignación");
    assert!(!reemplazado, "la caja cambia el nombre acentuado, no debe chocar");

    let (_, reemplazado) = turnos::asignar(
        &conn,
        AsignacionTurno {
            empleado_nombre: "ana pérez".to_string(),
            turno: TipoTurno::Tarde,
        },
    )
    .expect("tercera asignación");
    assert!(reemplazado);

    let lista = turnos::listar(&conn).expect("turnos");
    assert_eq!(lista.len(), 2);

    let encontrado = turnos::por_empleado(&conn, "ANA PEREZ")
        .expect("búsqueda")
        .expect("el turno existe");
    assert_eq!(encontrado.id_turno, segundo.id_turno);

    let editado = turnos::editar(
        &conn,
        &segundo.id_turno,
        AsignacionTurno {
            empleado_nombre: "Ana Peres".to_string(),
            turno: TipoTurno::Diurno,
        },
    )
    .expect("edición")
    .expect("existe");
    assert_eq!(editado.inicio, "08:00");
    assert!(turnos::eliminar(&conn, &editado.id_turno).expect("borrado de turno"));
}

#[test]
fn test_solicitudes_siembra_y_transiciones() {
    let conn = base_en_memoria();

    solicitudes::sembrar_si_vacia(&conn).expect("siembra");
    solicitudes::sembrar_si_vacia(&conn).expect("segunda siembra no duplica");
    assert_eq!(solicitudes::listar(&conn, None).expect("todas").len(), 3);

    let pendientes = solicitudes::listar(&conn, Some(EstadoSolicitud::Pendiente))
        .expect("pendientes");
    assert_eq!(pendientes.len(), 1);
    assert_eq!(pendientes[0].id, "000125");

    let aprobada = solicitudes::aprobar(&conn, "000125", "Admin")
        .expect("aprobación")
        .expect("existe");
    assert_eq!(aprobada.estado, EstadoSolicitud::Aprobado);
    assert_eq!(aprobada.aprobado_por, "Admin");
    assert!(!aprobada.fecha_accion.is_empty());

    let rechazada = solicitudes::rechazar(&conn, "000151", "Admin")
        .expect("rechazo")
        .expect("existe");
    assert_eq!(rechazada.estado, EstadoSolicitud::NoAprobado);

    assert!(solicitudes::aprobar(&conn, "zzz", "Admin")
        .expect("aprobar id inexistente")
        .is_none());
}

#[test]
fn test_solicitudes_alta_nace_pendiente() {
    let conn = base_en_memoria();

    let creada = solicitudes::crear(
        &conn,
        NuevaSolicitud {
            nombre: "Andrea Díaz Calderón - 646546".to_string(),
            nivel: "".to_string(),
            categoria: "Vacaciones".to_string(),
            tipo: "No trabajadas (días)".to_string(),
            inicio: "2025-09-02".to_string(),
            fin: "2025-10-02".to_string(),
        },
    )
    .expect("alta de solicitud");

    assert_eq!(creada.estado, EstadoSolicitud::Pendiente);
    assert_eq!(creada.aprobado_por, "—");
    assert_eq!(creada.nivel, "—");
    // Las fechas ISO del formulario se reformatean al estilo del tablero
    assert_eq!(creada.inicio, "02 SEP 2025");
    assert_eq!(creada.fin, "02 OCT 2025");

    let guardada = solicitudes::buscar(&conn, &creada.id)
        .expect("búsqueda")
        .expect("persistida");
    assert_eq!(guardada.inicio, creada.inicio);
}

#[test]
fn test_marcaciones_por_fecha() {
    let conn = base_en_memoria();

    let lote = vec![
        Marcacion {
            empleado_nombre: "Ana Pérez".to_string(),
            fecha: "2026-08-07".to_string(),
            entrada: "08:02".to_string(),
            salida: "16:01".to_string(),
            minutos_almuerzo: 30,
        },
        Marcacion {
            empleado_nombre: "Luis Soto".to_string(),
            fecha: "2026-08-06".to_string(),
            entrada: "08:30".to_string(),
            salida: "16:00".to_string(),
            minutos_almuerzo: 0,
        },
    ];
    assert_eq!(
        marcaciones::insertar_lote(&conn, &lote).expect("importación"),
        2
    );

    let del_dia = marcaciones::listar_por_fecha(&conn, "2026-08-07").expect("por fecha");
    assert_eq!(del_dia.len(), 1);
    assert_eq!(del_dia[0].empleado_nombre, "Ana Pérez");
}

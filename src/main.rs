// --- Sistema de Ponche - Archivo principal ---

use ponche::{almacen, config, run_server};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    config::cargar_dotenv();
    env_logger::init();

    println!("=== Sistema de Ponche (API) ===");
    if let Err(err) = almacen::preparar_db() {
        eprintln!("No se pudo preparar la base local: {err}");
    }

    let bind = config::direccion_escucha();
    println!("Iniciando servidor en http://{bind}");
    run_server(&bind).await
}

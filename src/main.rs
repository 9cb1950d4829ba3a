use actix_web::{middleware::{DefaultHeaders, Logger}, web, App, HttpServer};
use clap::Parser;
use std::path::PathBuf;
use weblat_backend::{
    config::Config,
    helper::file_store::FileStore,
    routes,
    store::RecordStore,
    views::Renderer,
    AppState,
};

#[derive(Parser, Debug)]
#[command(name = "weblat_server", author, version, about = "Starts the weblat web server.")]
struct Cli {
    /// Path to the .env configuration file.
    #[arg(long, required = true, value_name = "FILE")]
    env_file: PathBuf,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env(&cli.env_file)
        .expect("FATAL: Failed to load or parse configuration.");

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.log_level));

    let views = Renderer::from_dir(&config.template_dir).expect("FATAL: Template initialization failed");

    let db_file = config.database_file();
    if !db_file.exists() {
        log::error!(
            "FATAL: database not found at '{}'. Run 'cargo run --bin setup_cli -- --env-file <path> db setup'",
            db_file.display()
        );
        return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "database file missing"));
    }
    let store = RecordStore::open(&db_file).expect("FATAL: Failed to create Rusqlite connection pool.");

    let files = FileStore::new(&config.upload_dir, config.max_upload_bytes());
    files.ensure_root()?;

    let state = web::Data::new(AppState { store, files, views });
    let upload_dir = config.upload_dir.clone();
    let server_address = config.listen_addr();
    log::info!("Server starting at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-XSS-Protection", "1; mode=block")),
            )
            .app_data(state.clone())
            .configure(routes::config_routes)
            .service(actix_files::Files::new("/uploads", &upload_dir))
    })
    .bind(server_address)?
    .run()
    .await
}

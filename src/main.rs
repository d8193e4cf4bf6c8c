use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracing_actix_web::TracingLogger;

use catalog_browser::db::{self, SqliteProductStore};
use catalog_browser::render::Templates;
use catalog_browser::settings::Settings;
use catalog_browser::{configure_routes, seed, telemetry, AppError, AppState};

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    telemetry::init_tracing("info");

    let settings = Settings::load().inspect_err(|e| error!(error = %e, "Failed to load configuration"))?;

    let pool = db::init_pool(&settings.database)
        .inspect_err(|e| error!(error = %e, "Error connecting to database"))?;
    let store = SqliteProductStore::new(pool);

    if settings.seed.enabled {
        seed(&store, settings.seed.count, &mut rand::thread_rng())
            .inspect_err(|e| error!(error = %e, "Error seeding products"))?;
    }

    let state = AppState::new(Arc::new(store), Templates::new()?);
    let static_dir = settings.server.static_dir.clone();
    let (host, port) = settings.bind_address();

    info!("Server started at http://localhost:{}/home", port);
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| configure_routes(cfg, &static_dir))
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}

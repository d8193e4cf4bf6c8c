use std::sync::Arc;

use actix_files::Files;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{info, instrument};

use crate::catalog;
use crate::db::repository::ProductStore;
use crate::errors::AppError;
use crate::render::Templates;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, templates: Templates) -> Self {
        Self {
            store,
            templates: Arc::new(templates),
        }
    }
}

#[instrument(name = "handler::home", skip(state, req), fields(query = %req.query_string()))]
pub async fn home(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
    // The first `page` pair wins; an unparseable query string counts as no
    // page parameter at all.
    let page_param = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .ok()
        .and_then(|pairs| {
            pairs
                .into_inner()
                .into_iter()
                .find_map(|(key, value)| (key == "page").then_some(value))
        });

    let store = Arc::clone(&state.store);
    let page = web::block(move || catalog::get_page(store.as_ref(), page_param.as_deref())).await??;

    info!(page = page.page, count = page.items.len(), "Serving catalog page");
    let html = state.templates.render_home(&page)?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: &str) {
    cfg.service(Files::new("/static", static_dir))
        .route("/home", web::get().to(home));
}

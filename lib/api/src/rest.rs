use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use parking_lot::RwLock;
use segtrain_core::{Annotation, EdgeRow, Error, Session};
use serde::Deserialize;
use std::sync::Arc;

pub type SharedSession = Arc<RwLock<Session>>;

#[derive(Deserialize)]
struct LoadGraphRequest {
    rows: Vec<EdgeRow>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(session: SharedSession, host: &str, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(session.clone()))
                .configure(Self::routes)
        })
        .bind((host, port))?
        .run()
        .await
    }

    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/graph", web::get().to(get_graph))
            .route("/graph", web::put().to(load_graph))
            .route("/graph/sample", web::post().to(load_sample))
            .route("/graph/edges", web::get().to(list_edges))
            .route("/annotations", web::get().to(list_annotations))
            .route("/annotations", web::post().to(submit_annotation))
            .route("/annotations", web::delete().to(clear_annotations))
            .route("/score", web::get().to(get_score));
    }
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        Error::NoGraph | Error::UnknownEdge(_) => HttpResponse::NotFound().json(body),
        Error::Validation(_) | Error::InvalidEdgeRef(_) | Error::Serialization(_) => {
            HttpResponse::BadRequest().json(body)
        }
        Error::Io(_) => HttpResponse::InternalServerError().json(body),
    }
}

async fn get_graph(session: web::Data<SharedSession>) -> ActixResult<HttpResponse> {
    let session = session.read();
    match session.graph() {
        Some(graph) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": graph.to_view()
        }))),
        None => Ok(error_response(&Error::NoGraph)),
    }
}

async fn load_graph(
    session: web::Data<SharedSession>,
    req: web::Json<LoadGraphRequest>,
) -> ActixResult<HttpResponse> {
    let mut session = session.write();
    match session.load_edge_table(&req.rows) {
        Ok(graph) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": graph.to_view()
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn load_sample(session: web::Data<SharedSession>) -> ActixResult<HttpResponse> {
    let mut session = session.write();
    let graph = session.load_sample();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": graph.to_view()
    })))
}

async fn list_edges(session: web::Data<SharedSession>) -> ActixResult<HttpResponse> {
    let session = session.read();
    match session.graph() {
        Some(graph) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": graph.edge_strings()
        }))),
        None => Ok(error_response(&Error::NoGraph)),
    }
}

async fn list_annotations(session: web::Data<SharedSession>) -> ActixResult<HttpResponse> {
    let session = session.read();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": session.annotations()
    })))
}

async fn submit_annotation(
    session: web::Data<SharedSession>,
    req: web::Json<Annotation>,
) -> ActixResult<HttpResponse> {
    let mut session = session.write();
    match session.append_annotation(req.into_inner()) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn clear_annotations(session: web::Data<SharedSession>) -> ActixResult<HttpResponse> {
    session.write().clear_annotations();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": true
    })))
}

async fn get_score(session: web::Data<SharedSession>) -> ActixResult<HttpResponse> {
    let session = session.read();
    match session.score() {
        Ok(report) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": report
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

//! Single binary web server: JSON API for one knockout tournament, static files from STATIC_DIR.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), STATIC_DIR (e.g. static).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use table_tennis_knockout::{
    bracket_overview, finish_round, pick_special_winner, pick_winner, start_tournament, MatchId,
    ParticipantId, SpecialMatch, Tournament, TournamentError,
};
use tokio::sync::RwLock;

/// The one tournament of this session. Every transition runs under the write guard.
type AppState = Data<RwLock<Tournament>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddParticipantBody {
    name: String,
}

#[derive(Deserialize)]
struct PickWinnerBody {
    match_id: MatchId,
    participant_id: ParticipantId,
}

#[derive(Deserialize)]
struct PickSpecialWinnerBody {
    kind: SpecialMatch,
    participant_id: ParticipantId,
}

/// Path segment: participant id (e.g. /api/tournament/participants/{participant_id})
#[derive(Deserialize)]
struct ParticipantPath {
    participant_id: ParticipantId,
}

/// Snapshot on success, 400 with the error message otherwise. State is unchanged on error.
fn respond(result: Result<(), TournamentError>, t: &Tournament) -> HttpResponse {
    match result {
        Ok(()) => HttpResponse::Ok().json(t.snapshot()),
        Err(e) => {
            log::debug!("Rejected action: {}", e);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "table-tennis-knockout",
    })
}

/// Current tournament snapshot.
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let t = state.read().await;
    HttpResponse::Ok().json(t.snapshot())
}

/// Text overview of the bracket.
#[get("/api/tournament/overview")]
async fn api_overview(state: AppState) -> HttpResponse {
    let t = state.read().await;
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(bracket_overview(&t))
}

/// Add a participant (Entry only).
#[post("/api/tournament/participants")]
async fn api_add_participant(state: AppState, body: Json<AddParticipantBody>) -> HttpResponse {
    let mut t = state.write().await;
    let result = t.add_participant(body.name.as_str()).map(|_| ());
    respond(result, &t)
}

/// Remove a participant by id (Entry only).
#[delete("/api/tournament/participants/{participant_id}")]
async fn api_remove_participant(state: AppState, path: Path<ParticipantPath>) -> HttpResponse {
    let mut t = state.write().await;
    let result = t.remove_participant(path.participant_id);
    respond(result, &t)
}

/// Seed round 1 and start (Entry -> Matches).
#[post("/api/tournament/start")]
async fn api_start_tournament(state: AppState) -> HttpResponse {
    let mut t = state.write().await;
    let result = start_tournament(&mut t);
    respond(result, &t)
}

/// Set the winner of one match in the current round.
#[put("/api/tournament/matches/winner")]
async fn api_pick_winner(state: AppState, body: Json<PickWinnerBody>) -> HttpResponse {
    let mut t = state.write().await;
    let result = pick_winner(&mut t, body.match_id, body.participant_id);
    respond(result, &t)
}

/// Set the winner of the bronze match or the final.
#[put("/api/tournament/special/winner")]
async fn api_pick_special_winner(state: AppState, body: Json<PickSpecialWinnerBody>) -> HttpResponse {
    let mut t = state.write().await;
    let result = pick_special_winner(&mut t, body.kind, body.participant_id);
    respond(result, &t)
}

/// Finish the current round, bronze match, or final.
#[post("/api/tournament/finish-round")]
async fn api_finish_round(state: AppState) -> HttpResponse {
    let mut t = state.write().await;
    let result = finish_round(&mut t);
    respond(result, &t)
}

/// Clear everything and go back to participant entry.
#[post("/api/tournament/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let mut t = state.write().await;
    t.reset_all();
    respond(Ok(()), &t)
}

/// Back to participant entry keeping the participants.
#[post("/api/tournament/restart")]
async fn api_restart(state: AppState) -> HttpResponse {
    let mut t = state.write().await;
    let result = t.restart_tournament();
    respond(result, &t)
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "static".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Serving static files from {}", static_dir);

    let state: AppState = Data::new(RwLock::new(Tournament::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_get_tournament)
            .service(api_overview)
            .service(api_add_participant)
            .service(api_remove_participant)
            .service(api_start_tournament)
            .service(api_pick_winner)
            .service(api_pick_special_winner)
            .service(api_finish_round)
            .service(api_reset)
            .service(api_restart)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(bind)?
    .run()
    .await
}

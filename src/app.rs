use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/subjects", post(handlers::add_subject))
        .route("/api/subjects/:index/attended", post(handlers::mark_attended))
        .route("/api/subjects/:index/missed", post(handlers::mark_missed))
        .route(
            "/api/subjects/:index/reset",
            get(handlers::preview_reset).post(handlers::reset_subject),
        )
        .route(
            "/api/subjects/:index/remove",
            get(handlers::preview_remove).post(handlers::remove_subject),
        )
        .route(
            "/api/schedule",
            get(handlers::get_schedule).post(handlers::add_schedule_entry),
        )
        .route("/api/schedule/:index/remove", post(handlers::remove_schedule_entry))
        .route("/api/goal", get(handlers::get_goal).post(handlers::set_goal))
        .route("/api/notifications", get(handlers::get_notifications))
        .with_state(state)
}

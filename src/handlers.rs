use crate::errors::{AppError, StoreError};
use crate::models::{
    AddScheduleRequest, AddSubjectRequest, ConfirmRequest, GoalRequest, GoalResponse,
    NotificationIntent, OverviewResponse, RemovalPreview, RemovedSubject, ScheduleEntry,
    ScheduleRow, Subject, SubjectReport,
};
use crate::state::AppState;
use crate::stats::{build_overview, schedule_rows, subject_report};
use crate::store::RecordStore;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(store.goal()))
}

pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let store = state.store.lock().await;
    Json(build_overview(store.snapshot()))
}

pub async fn add_subject(
    State(state): State<AppState>,
    Json(payload): Json<AddSubjectRequest>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    let subject = mutate(&state, move |store| store.add_subject(&payload.name)).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

pub async fn mark_attended(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SubjectReport>, AppError> {
    let report = mutate(&state, move |store| {
        let subject = store.mark_attended(index)?;
        Ok(subject_report(index, &subject, store.goal()))
    })
    .await?;
    Ok(Json(report))
}

pub async fn mark_missed(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<SubjectReport>, AppError> {
    let report = mutate(&state, move |store| {
        let subject = store.mark_missed(index)?;
        Ok(subject_report(index, &subject, store.goal()))
    })
    .await?;
    Ok(Json(report))
}

pub async fn preview_reset(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Subject>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.preview_reset_subject(index)?))
}

pub async fn reset_subject(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<ConfirmRequest>,
) -> Result<Json<SubjectReport>, AppError> {
    require_confirmation(&payload)?;
    let report = mutate(&state, move |store| {
        let subject = store.reset_subject(index)?;
        Ok(subject_report(index, &subject, store.goal()))
    })
    .await?;
    Ok(Json(report))
}

pub async fn preview_remove(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<RemovalPreview>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.preview_remove_subject(index)?))
}

pub async fn remove_subject(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<ConfirmRequest>,
) -> Result<Json<RemovedSubject>, AppError> {
    require_confirmation(&payload)?;
    let removed = mutate(&state, move |store| store.remove_subject(index)).await?;
    Ok(Json(removed))
}

pub async fn get_schedule(State(state): State<AppState>) -> Json<Vec<ScheduleRow>> {
    let store = state.store.lock().await;
    Json(schedule_rows(store.snapshot()))
}

pub async fn add_schedule_entry(
    State(state): State<AppState>,
    Json(payload): Json<AddScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleEntry>), AppError> {
    let entry = mutate(&state, move |store| {
        store.add_schedule_entry(&payload.subject, &payload.day, &payload.time)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn remove_schedule_entry(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<ConfirmRequest>,
) -> Result<Json<ScheduleEntry>, AppError> {
    require_confirmation(&payload)?;
    let entry = mutate(&state, move |store| store.remove_schedule_entry(index)).await?;
    Ok(Json(entry))
}

pub async fn get_goal(State(state): State<AppState>) -> Json<GoalResponse> {
    let store = state.store.lock().await;
    Json(GoalResponse { goal: store.goal() })
}

pub async fn set_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<GoalResponse>, AppError> {
    let goal = mutate(&state, move |store| store.set_goal(payload.goal)).await?;
    Ok(Json(GoalResponse { goal }))
}

pub async fn get_notifications(State(state): State<AppState>) -> Json<Vec<NotificationIntent>> {
    Json(state.notifications.drain())
}

/// Runs a store mutation, and the file write it ends with, on the blocking
/// pool while holding the store lock.
async fn mutate<T, F>(state: &AppState, apply: F) -> Result<T, AppError>
where
    F: FnOnce(&mut RecordStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let mut store = Arc::clone(&state.store).lock_owned().await;
    let outcome = tokio::task::spawn_blocking(move || apply(&mut *store))
        .await
        .map_err(AppError::internal)?;
    Ok(outcome?)
}

fn require_confirmation(payload: &ConfirmRequest) -> Result<(), AppError> {
    if payload.confirm {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "this action needs confirmation: send {\"confirm\": true}",
        ))
    }
}

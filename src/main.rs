use attendance_tracker::{
    AppState, Config, JsonFileGateway, RecordStore, alarm::{lead_time, spawn_alarm_task},
    notify::NotificationFeed, router,
};
use std::net::SocketAddr;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    info!(path = %config.data_path.display(), "loading records");
    let gateway = JsonFileGateway::new(&config.data_path);
    let store = tokio::task::spawn_blocking(move || RecordStore::open(gateway)).await?;
    info!(
        subjects = store.subjects().len(),
        schedule = store.schedule().len(),
        goal = store.goal(),
        "records loaded"
    );

    let lead = lead_time(config.alarm_lead_minutes);
    let state = AppState::new(store, NotificationFeed::new(lead));
    spawn_alarm_task(
        state.store.clone(),
        state.notifications.clone(),
        config.alarm_scan_interval,
        lead,
    );

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam::channel::RecvTimeoutError;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use smart_skin_telemetry::config::load_or_default;
use smart_skin_telemetry::ipc::{StoreHandle, TelemetryChannels};
use smart_skin_telemetry::metrics::TickMetrics;
use smart_skin_telemetry::remote::ReadingsClient;
use smart_skin_telemetry::scheduler::{Spotlight, TickJob, TickScheduler};
use smart_skin_telemetry::sensor::{Region, SensorKey, SyntheticGenerator};
use smart_skin_telemetry::store::Store;
use smart_skin_telemetry::visualization::{
    detail_panel, render_store_charts, sensor_cards, status_board,
};

const CONFIG_PATH: &str = "config/telemetry.toml";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("starting smart skin telemetry demo");

    let cfg = load_or_default(CONFIG_PATH).with_env_overrides();
    info!(?cfg, "configuration loaded");

    let mut generator = match cfg.seed {
        Some(seed) => SyntheticGenerator::new(seed),
        None => SyntheticGenerator::from_entropy(),
    };
    let store = Store::backfill(cfg.backfill_points, &mut generator);
    let handle = StoreHandle::new(store);
    let channels = TelemetryChannels::new(cfg.notice_buffer);
    let metrics = TickMetrics::new();

    let scheduler = TickScheduler::new(
        &cfg,
        TickJob::new(generator, handle.clone(), channels.clone(), metrics.clone()),
    );
    let spotlight = Spotlight::from_config(&cfg);

    scheduler.start();
    spotlight.start();

    // Observer: log the board after every published tick
    let shutdown = Arc::new(AtomicBool::new(false));
    let observer_rx = channels.notice_rx.clone();
    let observer_shutdown = shutdown.clone();
    let observer = tokio::task::spawn_blocking(move || loop {
        if observer_shutdown.load(Ordering::Relaxed) {
            break;
        }
        match observer_rx.recv_timeout(Duration::from_millis(250)) {
            Ok(notice) => match status_board(&notice.store) {
                Ok(board) => info!(version = notice.version, "\n{}", board),
                Err(e) => warn!(error = %e, "status board unavailable"),
            },
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    });

    // Remote source is independent of the synthetic store
    match ReadingsClient::new(&cfg.api_base_url) {
        Ok(client) => match client.get_readings(Region::RightArm, None, None).await {
            Ok(readings) => info!(count = readings.len(), "remote readings available"),
            Err(e) => warn!(base_url = client.base_url(), error = %e, "remote readings unavailable"),
        },
        Err(e) => warn!(error = %e, "remote client not built"),
    }

    let run_for = Duration::from_secs(cfg.run_secs);
    info!(secs = cfg.run_secs, "running");
    tokio::time::sleep(run_for).await;

    if let Some(region) = spotlight.current() {
        info!(%region, "spotlight at shutdown");
        match sensor_cards(&handle.snapshot(), region) {
            Ok(cards) => {
                for card in cards {
                    info!("  {}", card);
                }
            }
            Err(e) => warn!(error = %e, "sensor cards unavailable"),
        }
        match detail_panel(&handle.snapshot(), region, SensorKey::Pressure, 5) {
            Ok(panel) => info!("\n{}", panel),
            Err(e) => warn!(error = %e, "detail panel unavailable"),
        }
    }

    spotlight.stop();
    scheduler.stop();
    shutdown.store(true, Ordering::Relaxed);
    let _ = observer.await;

    let snapshot = handle.snapshot();
    if let Some(dir) = &cfg.chart_dir {
        if let Err(e) = render_store_charts(&snapshot, Path::new(dir)) {
            warn!(error = %e, "chart rendering failed");
        }
    }

    let report = metrics.report();
    info!(
        ticks = report.ticks,
        spikes = report.spikes,
        dropped = report.dropped_notices,
        "tick metrics"
    );
    info!(
        "compute p50 {:?} p99 {:?}, publish p50 {:?} p99 {:?}",
        report.compute_p50, report.compute_p99, report.publish_p50, report.publish_p99
    );
    info!(snapshots = handle.version(), readings = snapshot.total_len(), "shutdown complete");
}

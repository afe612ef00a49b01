use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/info", get(info))
        .route("/live", get(live))
        .route("/metrics", get(metrics))
        .route("/metrics/prometheus", get(metrics_prometheus))
}

async fn root(State(state): State<AppState>) -> Response {
    let response = CompatHealthResponse {
        status: "ok",
        timestamp: now_iso(),
        uptime: state.uptime_seconds(),
    };

    (StatusCode::OK, Json(response)).into_response()
}

async fn info(State(state): State<AppState>) -> Response {
    let response = HealthInfoResponse {
        service: "coach-backend",
        version: std::env::var("APP_VERSION")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "unknown".to_string()),
        environment: std::env::var("APP_ENV")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "development".to_string()),
        start_time: system_time_iso(state.started_at_system()),
        uptime: state.uptime_seconds(),
    };

    Json(response).into_response()
}

async fn live(State(state): State<AppState>) -> Response {
    let process_healthy = std::process::id() > 0;
    let memory_healthy = check_memory_health(0.9);

    let status = if process_healthy && memory_healthy {
        "healthy"
    } else {
        "unhealthy"
    };

    let response = LivenessResponse {
        status,
        timestamp: now_iso(),
        uptime: state.uptime_seconds(),
        version: std::env::var("APP_VERSION")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "unknown".to_string()),
        checks: LivenessChecks {
            process: process_healthy,
            memory: memory_healthy,
        },
    };

    let status_code = if status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response)).into_response()
}

async fn metrics(State(state): State<AppState>) -> Response {
    let hostname = read_hostname();
    let load_average = read_load_average();
    let students = state.store().count().await;

    let response = MetricsResponse {
        timestamp: now_iso(),
        system: MetricsSystem {
            hostname,
            platform: std::env::consts::OS.to_string(),
            arch: normalize_arch(std::env::consts::ARCH).to_string(),
            uptime: read_os_uptime_seconds(),
            load_average: vec![load_average[0], load_average[1], load_average[2]],
            cpu_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        },
        process: MetricsProcess {
            pid: std::process::id(),
            uptime: state.uptime_seconds(),
            memory_usage: read_memory_usage(),
        },
        coach: MetricsCoach {
            students: students as u64,
        },
    };

    Json(response).into_response()
}

async fn metrics_prometheus(State(state): State<AppState>) -> Response {
    let memory_usage = read_memory_usage();
    let load_average = read_load_average();
    let uptime_seconds = state.uptime_seconds() as f64;
    let students = state.store().count().await as f64;

    let mut lines: Vec<String> = Vec::new();

    add_metric(
        &mut lines,
        "process_uptime_seconds",
        "Process uptime in seconds",
        "gauge",
        uptime_seconds,
        None,
    );
    add_metric(
        &mut lines,
        "process_rss_bytes",
        "Process RSS in bytes",
        "gauge",
        memory_usage.rss as f64,
        None,
    );

    add_metric(
        &mut lines,
        "coach_students_total",
        "Number of enrolled students",
        "gauge",
        students,
        None,
    );

    add_metric(
        &mut lines,
        "system_load_1m",
        "System load average 1 minute",
        "gauge",
        load_average[0],
        None,
    );
    add_metric(
        &mut lines,
        "system_load_5m",
        "System load average 5 minutes",
        "gauge",
        load_average[1],
        None,
    );
    add_metric(
        &mut lines,
        "system_load_15m",
        "System load average 15 minutes",
        "gauge",
        load_average[2],
        None,
    );

    let body = lines.join("\n");
    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

fn system_time_iso(time: std::time::SystemTime) -> String {
    let datetime: chrono::DateTime<chrono::Utc> = time.into();
    datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn check_memory_health(threshold: f64) -> bool {
    let usage = read_memory_usage();
    if usage.rss == 0 {
        return true;
    }

    let heap_size_limit = 1_400_000_000f64;
    (usage.rss as f64) / heap_size_limit < threshold
}

fn read_memory_usage() -> MemoryUsage {
    let rss_bytes = read_proc_self_status_kb("VmRSS").unwrap_or(0) * 1024;

    MemoryUsage {
        rss: rss_bytes,
        heap_used: rss_bytes,
    }
}

fn read_proc_self_status_kb(prefix: &str) -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    for line in status.lines() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with(prefix) {
            continue;
        }
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() < 2 {
            continue;
        }
        let value: u64 = parts[1].parse().ok()?;
        return Some(value);
    }
    None
}

fn read_hostname() -> String {
    if let Ok(raw) = std::fs::read_to_string("/proc/sys/kernel/hostname") {
        let value = raw.trim().to_string();
        if !value.is_empty() {
            return value;
        }
    }

    std::env::var("HOSTNAME")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn read_os_uptime_seconds() -> u64 {
    let Ok(raw) = std::fs::read_to_string("/proc/uptime") else {
        return 0;
    };

    let Some(first) = raw.split_whitespace().next() else {
        return 0;
    };

    first
        .parse::<f64>()
        .ok()
        .map(|v| v.floor().max(0.0) as u64)
        .unwrap_or(0)
}

fn read_load_average() -> [f64; 3] {
    let Ok(raw) = std::fs::read_to_string("/proc/loadavg") else {
        return [0.0, 0.0, 0.0];
    };

    let mut iter = raw.split_whitespace();
    let one = iter
        .next()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    let five = iter
        .next()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    let fifteen = iter
        .next()
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);
    [one, five, fifteen]
}

fn normalize_arch(value: &str) -> &str {
    match value {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        other => other,
    }
}

fn add_metric(
    lines: &mut Vec<String>,
    name: &str,
    help: &str,
    metric_type: &str,
    value: f64,
    labels: Option<&[(&str, &str)]>,
) {
    lines.push(format!("# HELP {name} {help}"));
    lines.push(format!("# TYPE {name} {metric_type}"));

    let label_str = labels.map(|pairs| {
        let inner = pairs
            .iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join(",");
        format!("{{{inner}}}")
    });

    match label_str {
        Some(labels) => lines.push(format!("{name}{labels} {value}")),
        None => lines.push(format!("{name} {value}")),
    };
}

#[derive(Serialize)]
struct CompatHealthResponse {
    status: &'static str,
    timestamp: String,
    uptime: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthInfoResponse {
    service: &'static str,
    version: String,
    environment: String,
    start_time: String,
    uptime: u64,
}

#[derive(Serialize)]
struct LivenessResponse {
    status: &'static str,
    timestamp: String,
    uptime: u64,
    version: String,
    checks: LivenessChecks,
}

#[derive(Serialize)]
struct LivenessChecks {
    process: bool,
    memory: bool,
}

#[derive(Serialize)]
struct MetricsResponse {
    timestamp: String,
    system: MetricsSystem,
    process: MetricsProcess,
    coach: MetricsCoach,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsSystem {
    hostname: String,
    platform: String,
    arch: String,
    uptime: u64,
    load_average: Vec<f64>,
    cpu_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsProcess {
    pid: u32,
    uptime: u64,
    memory_usage: MemoryUsage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MemoryUsage {
    rss: u64,
    heap_used: u64,
}

#[derive(Serialize)]
struct MetricsCoach {
    students: u64,
}

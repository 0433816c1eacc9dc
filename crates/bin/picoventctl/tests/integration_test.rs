//! End-to-end tests for the command-line client.
//!
//! Each test starts a stub device (an axum router on an ephemeral loopback
//! port) and runs a command through the real reqwest transport, metric
//! service and status board.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Form, Json, Router};
use picovent_domain::light::LightState;
use picoventctl::cli::Command;
use picoventctl::config::Config;

/// Stub device state shared with the handlers.
#[derive(Clone, Default)]
struct Device {
    light: Arc<Mutex<String>>,
    /// When set, the device ignores writes and keeps reporting the old state.
    stuck: bool,
    reject_writes: bool,
    light_reads: Arc<AtomicUsize>,
}

async fn read_light(State(device): State<Device>) -> Json<String> {
    device.light_reads.fetch_add(1, Ordering::SeqCst);
    Json(device.light.lock().unwrap().clone())
}

async fn write_light(
    State(device): State<Device>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, String) {
    if device.reject_writes {
        return (StatusCode::INTERNAL_SERVER_ERROR, "relay fault".to_string());
    }
    let Some(state) = form.get("state") else {
        return (StatusCode::BAD_REQUEST, "missing state".to_string());
    };
    if !device.stuck {
        state.clone_into(&mut device.light.lock().unwrap());
    }
    (StatusCode::OK, format!("Light set to {state}"))
}

fn router(device: Device) -> Router {
    Router::new()
        .route("/api/fan/indoor_humidity", get(|| async { "64.2" }))
        .route("/api/fan/outdoor_humidity", get(|| async { "58" }))
        .route("/api/fan/speed", get(|| async { "3" }))
        .route(
            "/api/battery/voltage",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "adc fault") }),
        )
        .route("/api/light/brightness", get(|| async { "0.75" }))
        .route("/api/light/state", get(read_light).put(write_light))
        .route("/api/motion/state", get(|| async { "false" }))
        .route("/api/wlan/mac", get(|| async { "\"28:cd:c1:0a:3b:7f\"" }))
        .with_state(device)
}

async fn start(device: Device) -> Config {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(device)).await.unwrap();
    });
    let mut config = Config::default();
    config.set_base_url(format!("http://{addr}")).unwrap();
    config
}

fn device_with_light(state: &str) -> Device {
    Device {
        light: Arc::new(Mutex::new(state.to_string())),
        ..Device::default()
    }
}

async fn run(command: Command, config: &Config) -> String {
    let mut out = Vec::new();
    picoventctl::run(&command, config, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn should_show_every_metric_and_dash_for_failures() {
    let config = start(device_with_light("off")).await;

    let out = run(Command::Status { metric: None }, &config).await;

    assert_eq!(
        out,
        "\
indoor_humidity   64.2
outdoor_humidity  58
fan_speed         3
battery_voltage   -
light_brightness  0.75
light_state       off
motion_state      false
mac_address       28:cd:c1:0a:3b:7f
"
    );
}

#[tokio::test]
async fn should_show_single_metric_when_filtered() {
    let config = start(Device::default()).await;

    let out = run(
        Command::Status {
            metric: Some("fan_speed".to_string()),
        },
        &config,
    )
    .await;

    assert_eq!(out, "fan_speed  3\n");
}

#[tokio::test]
async fn should_fail_for_unknown_metric() {
    let config = start(Device::default()).await;
    let mut out = Vec::new();

    let result = picoventctl::run(
        &Command::Status {
            metric: Some("temperature".to_string()),
        },
        &config,
        &mut out,
    )
    .await;

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[tokio::test]
async fn should_switch_light_and_show_reported_state() {
    let device = device_with_light("off");
    let config = start(device.clone()).await;

    let out = run(
        Command::Light {
            state: LightState::on(),
        },
        &config,
    )
    .await;

    assert_eq!(out, "device: Light set to on\nlight_state  on\n");
    assert_eq!(*device.light.lock().unwrap(), "on");
    assert_eq!(device.light_reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn should_show_device_state_not_requested_state() {
    let device = Device {
        stuck: true,
        ..device_with_light("off")
    };
    let config = start(device).await;

    let out = run(
        Command::Light {
            state: LightState::on(),
        },
        &config,
    )
    .await;

    assert_eq!(out, "device: Light set to on\nlight_state  off\n");
}

#[tokio::test]
async fn should_not_refresh_when_device_rejects_write() {
    let device = Device {
        reject_writes: true,
        ..device_with_light("off")
    };
    let config = start(device.clone()).await;

    let out = run(
        Command::Light {
            state: LightState::on(),
        },
        &config,
    )
    .await;

    assert_eq!(out, "light state unchanged\nlight_state  -\n");
    assert_eq!(device.light_reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn should_show_dashes_when_device_unreachable() {
    let mut config = Config::default();
    config.set_base_url("http://127.0.0.1:1").unwrap();

    let out = run(
        Command::Status {
            metric: Some("mac_address".to_string()),
        },
        &config,
    )
    .await;

    assert_eq!(out, "mac_address  -\n");
}

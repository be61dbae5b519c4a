use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sales_dashboard::{
    errors::{ApiError, SubmitError},
    Config, DashboardApp, HttpSalesApi, MemoryStore, NewSale, RecordingNotifier, SalesApi,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct Backend {
    sales: Arc<Mutex<Vec<Value>>>,
    reject: Arc<Mutex<Option<String>>>,
    garble: Arc<Mutex<bool>>,
    garble_list: Arc<Mutex<bool>>,
}

async fn add_sale(State(backend): State<Backend>, Json(sale): Json<NewSale>) -> Response {
    if *backend.garble.lock().await {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    if let Some(reason) = backend.reject.lock().await.clone() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": reason })),
        )
            .into_response();
    }

    backend.sales.lock().await.push(json!({
        "customer": sale.customer,
        "item": sale.item,
        "quantity": sale.quantity,
        "total": sale.price * f64::from(sale.quantity),
        "timestamp": "2026-01-05 10:00:00",
    }));
    Json(json!({ "success": true })).into_response()
}

async fn get_sales(State(backend): State<Backend>) -> Response {
    if *backend.garble_list.lock().await {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    Json(Value::Array(backend.sales.lock().await.clone())).into_response()
}

/// Serves the two endpoints under `prefix` and returns the base path to hand the client.
async fn spawn_backend(prefix: &str) -> (String, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route(&format!("{prefix}/add-sale"), post(add_sale))
        .route(&format!("{prefix}/get-sales"), get(get_sales))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind random port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend stopped");
    });

    (format!("http://{addr}{prefix}"), backend)
}

fn new_sale(customer: &str, item: &str, price: f64, quantity: u32) -> NewSale {
    NewSale {
        customer: customer.to_string(),
        item: item.to_string(),
        price,
        quantity,
    }
}

fn config_for(base: &str) -> Config {
    Config {
        api_base: base.to_string(),
        ..Config::default()
    }
}

fn app_for(base: &str) -> DashboardApp<HttpSalesApi, MemoryStore, RecordingNotifier> {
    let config = config_for(base);
    DashboardApp::new(
        &config,
        HttpSalesApi::new(&config),
        MemoryStore::default(),
        RecordingNotifier::default(),
    )
}

fn unique_prefs_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("sales_dashboard_http_{}_{nanos}.json", std::process::id()));
    path
}

async fn run_cli(args: Vec<String>) -> Output {
    run_cli_with_log(args, "warn").await
}

async fn run_cli_with_log(args: Vec<String>, rust_log: &'static str) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_sales-dashboard"))
            .args(&args)
            .env("RUST_LOG", rust_log)
            .env_remove("SALES_API_BASE")
            .env_remove("SALES_PREFS_PATH")
            .env_remove("SALES_CURRENCY")
            .env_remove("SALES_CATALOG")
            .output()
            .expect("failed to run binary")
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn client_posts_and_lists_in_order() {
    let (base, _backend) = spawn_backend("/api").await;
    let api = HttpSalesApi::new(&config_for(&base));

    let reply = api.add_sale(&new_sale("Ana", "Pen", 10.0, 2)).await.unwrap();
    assert!(reply.success);
    api.add_sale(&new_sale("Ben", "Book", 50.0, 1)).await.unwrap();

    let sales = api.get_sales().await.unwrap();
    assert_eq!(sales.len(), 2);
    assert_eq!(sales[0].customer, "Ana");
    assert_eq!(sales[0].total, 20.0);
    assert_eq!(sales[1].item, "Book");
    assert_eq!(sales[1].timestamp, "2026-01-05 10:00:00");
}

#[tokio::test]
async fn base_path_without_api_prefix() {
    let (base, _backend) = spawn_backend("").await;
    let api = HttpSalesApi::new(&config_for(&format!("{base}/")));
    assert!(api.add_sale(&new_sale("Ana", "Pen", 10.0, 1)).await.unwrap().success);
    assert_eq!(api.get_sales().await.unwrap().len(), 1);
}

#[tokio::test]
async fn dashboard_flow_against_backend() {
    let (base, backend) = spawn_backend("/api").await;
    let mut app = app_for(&base);
    app.load().await.unwrap();
    assert_eq!(app.view.best_seller, "None");
    assert_eq!(app.view.total_revenue, "₱0.00");

    app.form.fill("Ana", "White Springtail", "2");
    app.submit().await.unwrap();
    app.form.fill("Ben", "Orange Springtail", "1");
    app.submit().await.unwrap();

    assert_eq!(backend.sales.lock().await.len(), 2);
    assert_eq!(app.view.total_revenue, "₱490.00");
    assert_eq!(app.view.total_sales_count, "2");
    assert_eq!(app.view.best_seller, "White Springtail");
    assert_eq!(app.form.customer, "");
    assert!(app.notifier().alerts().is_empty());
}

#[tokio::test]
async fn rejection_with_error_status_still_reads_the_body() {
    let (base, backend) = spawn_backend("/api").await;
    *backend.reject.lock().await = Some("out of stock".to_string());
    let mut app = app_for(&base);
    app.load().await.unwrap();

    app.form.fill("Ana", "Agnara", "1");
    let err = app.submit().await.unwrap_err();

    assert!(matches!(err, SubmitError::Rejected(ref reason) if reason == "out of stock"));
    assert_eq!(app.notifier().alerts(), vec!["Error adding sale: out of stock".to_string()]);
    assert_eq!(app.form.customer, "Ana");
}

#[tokio::test]
async fn non_json_reply_is_a_transport_failure() {
    let (base, backend) = spawn_backend("/api").await;
    *backend.garble.lock().await = true;
    let api = HttpSalesApi::new(&config_for(&base));

    let err = api.add_sale(&new_sale("Ana", "Pen", 10.0, 1)).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_only_logged_on_read() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut app = app_for(&format!("http://127.0.0.1:{port}/api"));
    assert!(app.load().await.is_err());
    assert!(app.notifier().alerts().is_empty());
    assert_eq!(app.notifier().logs().len(), 1);
    assert_eq!(app.view.total_sales_count, "0");
}

#[tokio::test]
async fn malformed_listing_is_only_logged() {
    let (base, backend) = spawn_backend("/api").await;
    let mut app = app_for(&base);
    app.load().await.unwrap();
    app.form.fill("Ana", "Agnara", "1");
    app.submit().await.unwrap();
    assert_eq!(app.view.total_sales_count, "1");

    *backend.garble_list.lock().await = true;
    let err = app.refresh().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(app.view.rows.len(), 1);
    assert_eq!(app.view.total_revenue, "₱120.00");
    assert!(app.notifier().alerts().is_empty());
    let logs = app.notifier().logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("Error loading sales: malformed response"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_log_level_follows_rust_log() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let args = || {
        vec![
            "--api-base".to_string(),
            format!("http://127.0.0.1:{port}/api"),
            "--prefs".to_string(),
            unique_prefs_path().display().to_string(),
            "show".to_string(),
        ]
    };

    let quiet = run_cli_with_log(args(), "warn").await;
    assert!(quiet.status.success());
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("loading dashboard"));

    let chatty = run_cli_with_log(args(), "info").await;
    assert!(chatty.status.success());
    assert!(String::from_utf8_lossy(&chatty.stderr).contains("loading dashboard"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_add_prints_refreshed_dashboard() {
    let (base, _backend) = spawn_backend("/api").await;
    let prefs = unique_prefs_path();

    let output = run_cli(vec![
        "--api-base".into(),
        base,
        "--prefs".into(),
        prefs.display().to_string(),
        "add".into(),
        "--customer".into(),
        "Ana".into(),
        "--item".into(),
        "Agnara".into(),
        "--quantity".into(),
        "2".into(),
    ])
    .await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total revenue : ₱240.00"));
    assert!(stdout.contains("Total sales   : 1"));
    assert!(stdout.contains("Best seller   : Agnara"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_add_fails_on_invalid_quantity() {
    let (base, backend) = spawn_backend("/api").await;
    let prefs = unique_prefs_path();

    let output = run_cli(vec![
        "--api-base".into(),
        base,
        "--prefs".into(),
        prefs.display().to_string(),
        "add".into(),
        "--customer".into(),
        "Ana".into(),
        "--item".into(),
        "Agnara".into(),
        "--quantity".into(),
        "0".into(),
    ])
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("alert: Please fill all fields correctly."));
    assert!(backend.sales.lock().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_theme_toggle_persists_between_runs() {
    let prefs = unique_prefs_path();
    let prefs_arg = prefs.display().to_string();

    let shown = run_cli(vec!["--prefs".into(), prefs_arg.clone(), "theme".into()]).await;
    assert_eq!(String::from_utf8_lossy(&shown.stdout).trim(), "dark");

    let toggled = run_cli(vec![
        "--prefs".into(),
        prefs_arg.clone(),
        "theme".into(),
        "toggle".into(),
    ])
    .await;
    assert_eq!(String::from_utf8_lossy(&toggled.stdout).trim(), "light");

    let reloaded = run_cli(vec!["--prefs".into(), prefs_arg, "theme".into()]).await;
    assert_eq!(String::from_utf8_lossy(&reloaded.stdout).trim(), "light");

    let _ = std::fs::remove_file(prefs);
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_render_writes_page_with_open_menu() {
    let (base, backend) = spawn_backend("/api").await;
    let api = HttpSalesApi::new(&config_for(&base));
    api.add_sale(&new_sale("Ana", "Agnara", 120.0, 1)).await.unwrap();
    api.add_sale(&new_sale("Ben", "Agnara", 120.0, 1)).await.unwrap();
    assert_eq!(backend.sales.lock().await.len(), 2);

    let prefs = unique_prefs_path();
    let mut out = unique_prefs_path();
    out.set_extension("html");

    let output = run_cli(vec![
        "--api-base".into(),
        base,
        "--prefs".into(),
        prefs.display().to_string(),
        "render".into(),
        "--out".into(),
        out.display().to_string(),
        "--open-menu".into(),
        "1".into(),
    ])
    .await;
    assert!(output.status.success());

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(html.contains(r#"id="dropdown-1" class="dropdown-content show""#));
    assert!(html.contains("₱240.00"));

    let _ = std::fs::remove_file(out);
}

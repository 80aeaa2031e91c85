use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::codegen::Derived;
use crate::settings::{Field, Settings};
use crate::tuner::{PropertyMap, Tuner};

mod css;
mod inline_js;
mod page;
pub(crate) mod util;

struct DevState {
    tuner: Tuner<PropertyMap>,
    /// Highest input sequence number applied so far.
    last_seq: u64,
}

type SharedState = Arc<Mutex<DevState>>;

type HandlerError = (StatusCode, String);

fn shared_state(settings: Settings) -> SharedState {
    Arc::new(Mutex::new(DevState {
        tuner: Tuner::with_settings(settings, PropertyMap::new()),
        last_seq: 0,
    }))
}

/// Start the local tuner UI.
pub async fn run_dev_server(
    settings: Settings,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(shared_state(settings));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    eprintln!("fluid-type dev server");
    eprintln!("  tuner:  http://localhost:{port}/");
    eprintln!("  state:  http://localhost:{port}/state");
    eprintln!("  css:    http://localhost:{port}/export/css");
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(serve_page))
        .route("/state", get(serve_state))
        .route("/input", post(serve_input))
        .route("/export/css", get(serve_export_css))
        .with_state(state)
}

// ── Responses ─────────────────────────────────────────────────────────

#[derive(Serialize)]
struct StateResponse {
    settings: Settings,
    derived: Derived,
    error: Option<String>,
    /// Sequence number of the newest input reflected in this state.
    seq: u64,
}

impl StateResponse {
    fn snapshot(tuner: &Tuner<PropertyMap>, seq: u64, error: Option<String>) -> Self {
        Self {
            settings: tuner.settings().clone(),
            derived: tuner.derived().clone(),
            error,
            seq,
        }
    }
}

/// A poisoned lock means the current state is unknown; report only that.
fn lock_error(e: impl std::fmt::Display) -> HandlerError {
    tracing::error!(error = %e, "tuner state lock poisoned");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Lock error: {e}"))
}

// ── Route handlers ────────────────────────────────────────────────────

/// Serve the tuner page, initialised from the current settings.
async fn serve_page(State(state): State<SharedState>) -> (StatusCode, Html<String>) {
    match state.lock() {
        Ok(dev) => (
            StatusCode::OK,
            Html(page::build_tuner_page(&dev.tuner, dev.last_seq)),
        ),
        Err(e) => {
            let (status, msg) = lock_error(e);
            (status, Html(page::build_error_page(&msg)))
        }
    }
}

async fn serve_state(
    State(state): State<SharedState>,
) -> Result<axum::Json<StateResponse>, HandlerError> {
    let dev = state.lock().map_err(lock_error)?;
    Ok(axum::Json(StateResponse::snapshot(
        &dev.tuner,
        dev.last_seq,
        None,
    )))
}

// ── POST /input: one control changed ──────────────────────────────────

#[derive(Deserialize)]
struct InputRequest {
    field: Field,
    value: String,
    /// Client-side counter, increasing with every input event. Requests
    /// that arrive after a newer one has been applied are skipped.
    #[serde(default)]
    seq: Option<u64>,
}

async fn serve_input(
    State(state): State<SharedState>,
    axum::Json(req): axum::Json<InputRequest>,
) -> Result<axum::Json<StateResponse>, HandlerError> {
    let mut dev = state.lock().map_err(lock_error)?;

    if let Some(seq) = req.seq {
        if seq <= dev.last_seq {
            tracing::debug!(
                seq,
                last = dev.last_seq,
                field = %req.field,
                "stale input skipped"
            );
            return Ok(axum::Json(StateResponse::snapshot(
                &dev.tuner,
                dev.last_seq,
                None,
            )));
        }
    }

    let error = match dev.tuner.set(req.field, &req.value) {
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "input rejected");
            Some(e.to_string())
        }
    };
    if let Some(seq) = req.seq {
        dev.last_seq = seq;
    }
    Ok(axum::Json(StateResponse::snapshot(
        &dev.tuner,
        dev.last_seq,
        error,
    )))
}

// ── Export ────────────────────────────────────────────────────────────

async fn serve_export_css(
    State(state): State<SharedState>,
) -> Result<([(axum::http::header::HeaderName, &'static str); 2], String), HandlerError> {
    let body = state.lock().map_err(lock_error)?.tuner.css().to_string();
    Ok((
        [
            (axum::http::header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (
                axum::http::header::CONTENT_DISPOSITION,
                "attachment; filename=\"fluid-typography.css\"",
            ),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn input(field: Field, value: &str, seq: Option<u64>) -> axum::Json<InputRequest> {
        axum::Json(InputRequest {
            field,
            value: value.to_string(),
            seq,
        })
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    fn post_input(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/input")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request")
    }

    #[tokio::test]
    async fn router_keeps_last_posted_value() {
        let app = router(shared_state(Settings::default()));

        for body in [
            r#"{"field":"base-font-size","value":"17","seq":1}"#,
            r#"{"field":"base-font-size","value":"18","seq":2}"#,
        ] {
            let resp = app.clone().oneshot(post_input(body)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let resp = app
            .oneshot(Request::builder().uri("/state").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let state = json_body(resp).await;
        assert_eq!(state["settings"]["baseFontSize"], 18);
        assert_eq!(state["derived"]["display"]["base_font_size"], "18px");
        assert_eq!(state["seq"], 2);
    }

    #[tokio::test]
    async fn late_older_input_is_skipped() {
        let state = shared_state(Settings::default());

        let newer = serve_input(
            State(state.clone()),
            input(Field::BaseFontSize, "18", Some(2)),
        )
        .await
        .unwrap();
        assert_eq!(newer.0.settings.base_font_size(), 18);

        let older = serve_input(
            State(state.clone()),
            input(Field::BaseFontSize, "17", Some(1)),
        )
        .await
        .unwrap();
        assert_eq!(older.0.seq, 2);
        assert_eq!(older.0.settings.base_font_size(), 18);

        let dev = state.lock().unwrap();
        assert_eq!(dev.tuner.settings().base_font_size(), 18);
        assert_eq!(
            dev.tuner.sink().get("--font-size-base"),
            Some("clamp(15.75px, 16.2px + 0.5vw, 20.25px)")
        );
    }

    #[tokio::test]
    async fn input_without_seq_always_applies() {
        let state = shared_state(Settings::default());
        serve_input(State(state.clone()), input(Field::Method, "global", Some(5)))
            .await
            .unwrap();
        let resp = serve_input(State(state.clone()), input(Field::Method, "individual", None))
            .await
            .unwrap();
        assert_eq!(resp.0.settings.method(), crate::settings::Method::Individual);
        assert_eq!(resp.0.seq, 5);
    }

    #[tokio::test]
    async fn rejected_input_reports_error_and_keeps_settings() {
        let state = shared_state(Settings::default());
        let resp = serve_input(
            State(state.clone()),
            input(Field::LineHeight, "2", Some(1)),
        )
        .await
        .unwrap();

        let error = resp.0.error.as_deref().expect("error should be reported");
        assert!(error.contains("invalid line-height value \"2\""));
        assert_eq!(resp.0.settings, Settings::default());
        assert_eq!(state.lock().unwrap().tuner.settings(), &Settings::default());
    }

    #[tokio::test]
    async fn state_reflects_tuner() {
        let state = shared_state(Settings::default());
        state
            .lock()
            .unwrap()
            .tuner
            .set(Field::ViewportScale, "1")
            .unwrap();

        let resp = serve_state(State(state.clone())).await.unwrap();
        assert_eq!(resp.0.settings.viewport_scale(), 1.0);
        assert_eq!(resp.0.derived.display.viewport_scale, "1vw");
        assert!(resp.0.error.is_none());
    }

    #[tokio::test]
    async fn export_body_is_current_css() {
        let state = shared_state(Settings::default());
        state.lock().unwrap().tuner.set(Field::Method, "global").unwrap();

        let (headers, body) = serve_export_css(State(state.clone())).await.unwrap();
        assert_eq!(body, state.lock().unwrap().tuner.css());
        assert_eq!(headers[0].1, "text/css; charset=utf-8");
        assert!(body.starts_with(":root {"));
    }

    #[tokio::test]
    async fn poisoned_lock_returns_server_error() {
        let state = shared_state(Settings::default());
        let poisoner = state.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the tuner lock");
        })
        .join();

        let (status, msg) = serve_state(State(state.clone())).await.err().unwrap();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(msg.starts_with("Lock error"));

        let (status, _) = serve_input(State(state.clone()), input(Field::Method, "global", None))
            .await
            .err()
            .unwrap();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        assert!(serve_export_css(State(state)).await.is_err());
    }
}

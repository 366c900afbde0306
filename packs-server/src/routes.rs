use packs_solver::PackCalculatorService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tracing::error;
use warp::{
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    hyper::body::Bytes,
    reject::{self, Rejection},
    reply::{self, Response},
    Filter, Reply,
};

pub type SharedCalculator = Arc<dyn PackCalculatorService + Send + Sync>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InputRequest {
    #[serde(default)]
    pub amount: i64,
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, GET, OPTIONS, PUT, DELETE"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(
            "Accept, Content-Type, Content-Length, Accept-Encoding, Authorization",
        ),
    );
    headers
}

/// Largest request body accepted by `/calculate`.
pub const MAX_BODY_BYTES: u64 = 4 * 1024;

/// `/calculate`: every method is routed here so that preflight and method errors carry CORS
/// headers. Only `POST` reads a body, and it must declare a length within [`MAX_BODY_BYTES`].
pub fn calculate(
    calculator: SharedCalculator,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let calculator = warp::any().map(move || calculator.clone());
    let route = warp::path("calculate").and(warp::path::end());

    let bodiless = route.clone().and(warp::method()).and_then(handle_bodiless);
    let post = route
        .and(warp::post())
        .and(calculator)
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(handle_calculate)
        .recover(handle_body_rejection)
        .unify();

    bodiless
        .or(post)
        .unify()
        .with(warp::reply::with::headers(cors_headers()))
}

async fn handle_bodiless(method: Method) -> Result<Response, Rejection> {
    if method == Method::POST {
        return Err(warp::reject());
    }
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    Ok(reply::with_status("method not allowed", StatusCode::METHOD_NOT_ALLOWED).into_response())
}

async fn handle_body_rejection(rejection: Rejection) -> Result<Response, Rejection> {
    if rejection.find::<reject::PayloadTooLarge>().is_some() {
        return Ok(
            reply::with_status("request body too large", StatusCode::PAYLOAD_TOO_LARGE)
                .into_response(),
        );
    }
    if rejection.find::<reject::LengthRequired>().is_some() {
        return Ok(
            reply::with_status("content length required", StatusCode::LENGTH_REQUIRED)
                .into_response(),
        );
    }
    Err(rejection)
}

async fn handle_calculate(
    calculator: SharedCalculator,
    body: Bytes,
) -> Result<Response, Rejection> {
    let request = match serde_json::from_slice::<InputRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            error!(error = %e, "invalid request body");
            return Ok(reply::with_status("invalid request", StatusCode::BAD_REQUEST).into_response());
        }
    };

    // The search is CPU bound, keep it off the async workers.
    match spawn_blocking(move || calculator.calculate_packs(request.amount)).await {
        Ok(Ok(result)) => Ok(reply::json(&result).into_response()),
        Ok(Err(e)) => {
            error!(error = %e, "calculation failed");
            Ok(reply::with_status(e.to_string(), StatusCode::BAD_REQUEST).into_response())
        }
        Err(e) => {
            error!(error = %e, "calculation task failed");
            Ok(
                reply::with_status("internal error", StatusCode::INTERNAL_SERVER_ERROR)
                    .into_response(),
            )
        }
    }
}

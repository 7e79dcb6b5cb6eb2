//! Arithmetic endpoints: `POST /math/{add,sub,mul,div}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::make_error;
use crate::http::extract::LenientBody;
use crate::math::{Operand, Operation};

#[derive(Debug, Serialize)]
struct MathResponse {
    message: String,
}

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/math/add", post(add))
        .route("/math/sub", post(sub))
        .route("/math/mul", post(mul))
        .route("/math/div", post(div))
}

async fn add(LenientBody(body): LenientBody) -> Response {
    calculate(Operation::Add, &body)
}

async fn sub(LenientBody(body): LenientBody) -> Response {
    calculate(Operation::Sub, &body)
}

async fn mul(LenientBody(body): LenientBody) -> Response {
    calculate(Operation::Mul, &body)
}

async fn div(LenientBody(body): LenientBody) -> Response {
    calculate(Operation::Div, &body)
}

fn calculate(operation: Operation, body: &Value) -> Response {
    let a = Operand::from_json(body.get("a"));
    let b = Operand::from_json(body.get("b"));

    match operation.compute(&a, &b) {
        Ok(message) => (StatusCode::OK, Json(MathResponse { message })).into_response(),
        Err(code) => {
            tracing::debug!(code = %code, ?operation, "Rejected arithmetic operands");
            (StatusCode::BAD_REQUEST, Json(make_error(code))).into_response()
        }
    }
}

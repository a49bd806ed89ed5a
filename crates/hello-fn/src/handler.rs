use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use svclog::Logger;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// The one route this function serves: log a structured greeting record,
/// answer with a JSON body carrying the current time.
pub fn handle_hello(logger: &Logger, _event: &Value) -> ApiGatewayResponse {
    logger.info(
        "hello world",
        Some(&json!({
            "structuredData": true,
            "route": "helloWorld",
        })),
    );

    let body = json!({
        "status": "ok",
        "message": "Hello from the monorepo!",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    });

    ApiGatewayResponse {
        status_code: 200,
        headers: json!({ "Content-Type": "application/json" }),
        body: body.to_string(),
    }
}

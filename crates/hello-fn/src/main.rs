use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use svclog::{Logger, LoggerConfig};

mod handler;

use handler::handle_hello;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let logger = Arc::new(Logger::new(LoggerConfig::default()));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let logger = Arc::clone(&logger);
        async move { Ok::<_, Error>(handle_hello(&logger, &event.payload)) }
    }))
    .await
}

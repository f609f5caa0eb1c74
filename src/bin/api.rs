use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use testimonials::api::handler;
use testimonials::store::PgConnector;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    testimonials::setup_logging();

    let connector = PgConnector;
    let connector = &connector;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(event, connector).await
    }))
    .await
}

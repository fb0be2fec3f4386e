use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use valida_cpf::adapters::lambda::{handle_proxy_event, ProxyRequest, ProxyResponse};
use valida_cpf::utils::{logger, validation::Validate};
use valida_cpf::LambdaConfig;

async fn function_handler(
    event: LambdaEvent<ProxyRequest>,
    function_key: Option<&str>,
) -> Result<ProxyResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling CPF validation event");

    let response = handle_proxy_event(&event.payload, function_key)?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    run(service_fn(move |event: LambdaEvent<ProxyRequest>| {
        let function_key = config.function_key.clone();
        async move { function_handler(event, function_key.as_deref()).await }
    }))
    .await
}

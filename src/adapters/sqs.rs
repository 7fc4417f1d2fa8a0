use crate::config::QueueConfig;
use crate::core::QueueClient;
use crate::utils::error::BoxError;
use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::config::{Credentials, Region};
use aws_sdk_sqs::types::MessageAttributeValue;
use aws_sdk_sqs::Client as SqsClient;
use std::time::Duration;

/// [`QueueClient`] backed by Amazon SQS.
#[derive(Debug, Clone)]
pub struct SqsQueueClient {
    client: SqsClient,
}

impl SqsQueueClient {
    pub fn new(client: SqsClient) -> Self {
        Self { client }
    }

    /// 依設定建立 SQS client；沒有靜態金鑰時使用 AWS 預設憑證鏈
    pub async fn from_config(config: &QueueConfig) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

        if let (Some(access_key), Some(secret_key)) = (&config.access_key, &config.secret_key) {
            loader = loader.credentials_provider(Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                config.session_token.clone(),
                None,
                "static",
            ));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        if let Some(timeout) = config.timeout_seconds {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(timeout))
                    .build(),
            );
        }

        let shared_config = loader.load().await;
        tracing::debug!(region = %config.region, "SQS client configured");
        Self::new(SqsClient::new(&shared_config))
    }
}

pub(crate) fn build_string_message_attribute(
    value: String,
) -> Result<MessageAttributeValue, BoxError> {
    let attribute = MessageAttributeValue::builder()
        .data_type("String")
        .string_value(value)
        .build()?;
    Ok(attribute)
}

#[async_trait]
impl QueueClient for SqsQueueClient {
    async fn publish(
        &self,
        queue_url: &str,
        body: String,
        attributes: Vec<(String, String)>,
    ) -> Result<Option<String>, BoxError> {
        let mut request = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body);

        for (name, value) in attributes {
            request = request.message_attributes(name, build_string_message_attribute(value)?);
        }

        let output = request.send().await.map_err(aws_sdk_sqs::Error::from)?;

        Ok(output.message_id().map(str::to_string))
    }
}

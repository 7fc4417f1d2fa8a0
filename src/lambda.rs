#[cfg(feature = "lambda")]
use journal_harvest_queue::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use journal_harvest_queue::{
    DispatchReport, HarvestProducer, ImportQueueCreator, Journal, QueueConfig, SqsQueueClient,
};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    pub journal: Option<Journal>,
    #[serde(default)]
    pub journals: Vec<Journal>,
}

#[cfg(feature = "lambda")]
impl Request {
    /// Single `journal` is appended after the `journals` list.
    pub fn into_journals(self) -> Vec<Journal> {
        let Request { journal, mut journals } = self;
        journals.extend(journal);
        journals
    }
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub message: String,
    #[serde(flatten)]
    pub report: DispatchReport,
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    tracing::info!("Starting journal harvest dispatch");

    let journals = event.payload.into_journals();

    // 建立佇列設定 (SQS_QUEUE_URL 等環境變數)
    let config = QueueConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let client = SqsQueueClient::from_config(&config).await;
    let producer = HarvestProducer::new(client, config.queue_url.clone());
    let creator = ImportQueueCreator::new(producer).strict(config.strict_systems);

    let report = creator.create_queues(&journals).await;

    let response = Response {
        message: format!(
            "Queued {} of {} journals ({} skipped, {} failed)",
            report.published,
            journals.len(),
            report.skipped,
            report.failed()
        ),
        report,
    };

    tracing::info!("Journal harvest dispatch completed");
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}

#[cfg(all(test, feature = "lambda"))]
mod tests {
    use super::*;
    use journal_harvest_queue::core::dispatcher::DispatchFailure;

    #[test]
    fn test_request_merges_journal_and_journals() {
        let request: Request = serde_json::from_value(serde_json::json!({
            "journal": {"id": 3, "website": "https://c.example", "setting": {"system": "doaj"}},
            "journals": [
                {"id": 1, "website": "https://a.example", "setting": {"system": "ojs-oai"}},
                {"id": 2, "website": "https://b.example"}
            ]
        }))
        .unwrap();

        let keys: Vec<String> = request
            .into_journals()
            .iter()
            .map(|j| j.journal_key())
            .collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_request_accepts_single_journal() {
        let request: Request = serde_json::from_str(
            r#"{"journal": {"id": 9, "website": "https://z.example", "setting": {"system": "teckiz"}}}"#,
        )
        .unwrap();

        let journals = request.into_journals();
        assert_eq!(journals.len(), 1);
        assert_eq!(
            journals[0].setting().map(|s| s.system()),
            Some("teckiz")
        );

        let empty: Request = serde_json::from_str("{}").unwrap();
        assert!(empty.into_journals().is_empty());
    }

    #[test]
    fn test_response_flattens_report() {
        let response = Response {
            message: "Queued 1 of 2 journals (0 skipped, 1 failed)".to_string(),
            report: DispatchReport {
                published: 1,
                skipped: 0,
                failures: vec![DispatchFailure {
                    journal_key: "2".to_string(),
                    error: "Configuration error: journal setting not found".to_string(),
                    retryable: false,
                }],
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "Queued 1 of 2 journals (0 skipped, 1 failed)",
                "published": 1,
                "skipped": 0,
                "failures": [{
                    "journal_key": "2",
                    "error": "Configuration error: journal setting not found",
                    "retryable": false
                }]
            })
        );
    }
}

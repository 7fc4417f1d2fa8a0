use clap::Parser;
use journal_harvest_queue::utils::{logger, validation::Validate};
use journal_harvest_queue::{
    CliConfig, DispatchOutcome, DryRunQueueClient, HarvestProducer, ImportQueueCreator, Journal,
    QueueClient, QueueError, SqsQueueClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting journal-harvest-queue CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let journal = cli.journal();

    // dry run 不需要完整的佇列設定，只印出訊息內容
    if cli.dry_run {
        let config = cli.queue_config().ok();
        let queue_url = config
            .as_ref()
            .map(|config| config.queue_url.clone())
            .unwrap_or_else(|| "dry-run".to_string());
        let strict = cli.strict || config.map(|config| config.strict_systems).unwrap_or(false);
        let producer = HarvestProducer::new(DryRunQueueClient::stdout(), queue_url);
        let creator = ImportQueueCreator::new(producer).strict(strict);
        dispatch(&creator, &journal).await;
        return Ok(());
    }

    let config = match cli.queue_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Queue config: {:?}", config);

    let client = SqsQueueClient::from_config(&config).await;
    let producer = HarvestProducer::new(client, config.queue_url.clone());
    let creator = ImportQueueCreator::new(producer).strict(config.strict_systems);

    dispatch(&creator, &journal).await;

    Ok(())
}

async fn dispatch<Q: QueueClient>(creator: &ImportQueueCreator<Q>, journal: &Journal) {
    match creator.create_queue(journal).await {
        Ok(DispatchOutcome::Published {
            system_type,
            message_id,
        }) => {
            println!(
                "✅ Queued {} harvest for journal {} (message id: {})",
                system_type,
                journal.journal_key(),
                message_id.as_deref().unwrap_or("-")
            );
        }
        Ok(DispatchOutcome::Skipped { system }) => {
            println!(
                "⚠️ Journal {} uses system '{}', which has no harvest integration; nothing queued",
                journal.journal_key(),
                system
            );
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &QueueError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 設定錯誤 1，送出失敗 2
    let exit_code = if e.is_retryable() { 2 } else { 1 };
    std::process::exit(exit_code);
}

/// Example showing the client pacing requests under the configured limit
///
/// Configure rate limiting via environment variables:
/// - USPTO_RATE_LIMIT_MAX_REQUESTS (default: 60)
/// - USPTO_RATE_LIMIT_PERIOD_SECONDS (default: 60)
/// - USPTO_RATE_LIMIT_BURST_SIZE (default: 10)
///
/// Run with: cargo run --bin simple_rate_limiter
use std::time::Instant;
use tracing::info;
use uspto_odp::application::client::Client;
use uspto_odp::application::interfaces::patent::PatentService;
use uspto_odp::utils::setup_logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::default();
    info!("Rate limiter: {}", client.config().rate_limiter);

    let serial = "16123456";
    let start = Instant::now();
    let num_requests = 15;

    for i in 1..=num_requests {
        let request_start = Instant::now();
        let transactions = client.get_patent_transactions(serial).await?;
        info!(
            "Request {}/{}: {} events in {:.2}ms (total elapsed: {:.2}s)",
            i,
            num_requests,
            transactions.events().count(),
            request_start.elapsed().as_secs_f64() * 1000.0,
            start.elapsed().as_secs_f64()
        );
    }

    let avg_rate = num_requests as f64 / start.elapsed().as_secs_f64();
    info!("Average rate: {:.2} requests/minute", avg_rate * 60.0);

    Ok(())
}

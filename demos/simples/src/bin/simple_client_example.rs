use uspto_odp::application::client::Client;
use uspto_odp::application::interfaces::patent::PatentService;
use uspto_odp::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting simple client example");

    // Reads USPTO_API_KEY from the environment or .env
    let client = Client::default();

    let serial = std::env::args().nth(1).unwrap_or_else(|| "16123456".to_string());
    let wrapper = client.get_patent_wrapper(&serial).await?;

    info!(
        "{} - {}",
        wrapper.application_number,
        wrapper.metadata.invention_title.as_deref().unwrap_or("(no title)")
    );
    info!(
        "Status: {}",
        wrapper
            .metadata
            .application_status_description
            .as_deref()
            .unwrap_or("unknown")
    );
    if let Some(event) = wrapper.latest_event() {
        info!(
            "Latest event: {} {} ({:?})",
            event.event_code, event.event_description, event.event_date
        );
    }

    let continuity = client.get_patent_continuity(&serial).await?;
    for app in &continuity.continuities {
        info!("Parents: {:?}", app.parent_numbers().collect::<Vec<_>>());
        info!("Children: {:?}", app.child_numbers().collect::<Vec<_>>());
    }

    Ok(())
}

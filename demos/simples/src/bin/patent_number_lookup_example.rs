use uspto_odp::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::default();
    let numbers: Vec<String> = std::env::args().skip(1).collect();
    let numbers = if numbers.is_empty() {
        vec!["US11,989,999".to_string()]
    } else {
        numbers
    };

    for number in &numbers {
        match client.get_app_metadata_from_patent_number(number).await? {
            Some(wrapper) => info!(
                "{} -> application {} ({})",
                number,
                wrapper.application_number,
                wrapper.metadata.invention_title.unwrap_or_default()
            ),
            None => warn!("No application found for {}", number),
        }
    }

    Ok(())
}

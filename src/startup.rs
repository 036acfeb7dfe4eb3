use std::time::Duration;

use crate::{
    configuration::Settings,
    services::{
        filter_corpus, harvest, read_companies, write_filtered, write_unfiltered,
        BingSearchClient, Droid, OpenaiClient,
    },
};

/// Run the full harvest-and-extraction pass over every company in the input
/// file. Each company gets an output pair even when nothing was found, and a
/// pacing sleep separates companies to stay under the search provider's rate
/// limit.
pub async fn run(configuration: Settings) -> anyhow::Result<()> {
    let companies = read_companies(&configuration.input_file)?;
    log::info!(
        "Loaded {} companies from {}",
        companies.len(),
        configuration.input_file
    );

    let search_client = BingSearchClient::new(
        configuration.api_keys.bing.clone(),
        configuration.api_keys.bing_custom_config_id.clone(),
        configuration.search.result_count,
    );
    let openai_client = OpenaiClient::new(
        configuration.api_keys.openai.clone(),
        configuration.harvest.max_output_tokens,
    );
    let droid = Droid::new(
        configuration.harvest.webdriver_url.clone(),
        Duration::from_secs(configuration.harvest.page_wait_secs),
    );

    let total = companies.len();
    for (i, company) in companies.into_iter().enumerate() {
        log::info!("Processing company {}/{}: {}", i + 1, total, company.name);

        let urls = search_client.search(&company.name, &company.website).await;
        log::info!("Found {} URLs for {}", urls.len(), company.name);

        let corpus = harvest(&droid, &company.name, urls).await;
        log::info!(
            "Scraping complete for {}. Accepted {} pages",
            company.name,
            corpus.len()
        );

        let raw_text = corpus.annotated_text();
        let unfiltered_path =
            write_unfiltered(&configuration.output_dir, &company.name, &raw_text)?;
        log::info!("Content saved to {}", unfiltered_path.display());

        let filtered = filter_corpus(
            &openai_client,
            &raw_text,
            configuration.harvest.max_chunk_chars,
            Duration::from_secs(configuration.harvest.extraction_timeout_secs),
        )
        .await;
        let filtered_path =
            write_filtered(&configuration.output_dir, &company.name, &filtered)?;
        log::info!(
            "Filtering complete for {}. Content saved to {}",
            company.name,
            filtered_path.display()
        );

        if i + 1 < total {
            tokio::time::sleep(Duration::from_secs(configuration.search.pacing_secs)).await;
        }
    }

    Ok(())
}

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::split_into_chunks;

#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(&self, chunk: &str) -> anyhow::Result<String>;
}

/// Run the extractor over the corpus text, chunk by chunk, in chunk order.
///
/// Non-empty results are joined with one blank line; an empty result
/// contributes nothing, not even a separator. Every extraction call runs
/// under `call_timeout`; a chunk whose call fails or times out is logged and
/// skipped so the remaining chunks still run.
pub async fn filter_corpus<E: ContentExtractor + ?Sized>(
    extractor: &E,
    raw_text: &str,
    max_chunk_chars: usize,
    call_timeout: Duration,
) -> String {
    let chunks = split_into_chunks(raw_text, max_chunk_chars);
    let total = chunks.len();
    let mut filtered_content: Vec<String> = vec![];

    for (i, chunk) in chunks.iter().enumerate() {
        log::info!("Processing chunk {}/{}", i + 1, total);

        match tokio::time::timeout(call_timeout, extractor.extract(chunk)).await {
            Ok(Ok(content)) => match content.is_empty() {
                true => {}
                false => filtered_content.push(content),
            },
            Ok(Err(e)) => log::error!("Extraction failed on chunk {}/{}: {:?}", i + 1, total, e),
            Err(_) => log::error!(
                "Extraction timed out on chunk {}/{} after {:?}",
                i + 1,
                total,
                call_timeout
            ),
        }
    }

    filtered_content.join("\n\n")
}

use anyhow::Context;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

use crate::services::ContentExtractor;

const EXTRACTION_MODEL: &str = "gpt-4o-mini";
const EXTRACTION_TEMPERATURE: f32 = 0.5;

const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that filters text.";

const EXTRACTION_INSTRUCTION: &str = "Please extract and retain only the information related to the specific company's sustainability (environmental, social, governance) claims and efforts. \
Also get info about the company's address and company size or number of employees. If no sustainability information is found in the current chunk, do not write anything. \
Also, while filtering the text, make sure to remove any empty lines or empty spaces. The final extracted results should only be organized, complete sentences about the company's sustainability practices.";

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
    max_output_tokens: u32,
}

impl OpenaiClient {
    pub fn new(api_key: String, max_output_tokens: u32) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Client::with_config(config),
            max_output_tokens,
        }
    }

    /// Distill one chunk down to its sustainability content. An empty string
    /// is a valid answer meaning the chunk had nothing to contribute.
    pub async fn filter_sustainability_content(&self, chunk: &str) -> anyhow::Result<String> {
        let prompt = format!(
            "{}\nfrom the following text:\n\n{}\n\nFiltered content:",
            EXTRACTION_INSTRUCTION, chunk
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(EXTRACTION_MODEL)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_INSTRUCTION)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .max_tokens(self.max_output_tokens)
            .temperature(EXTRACTION_TEMPERATURE)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .first()
            .context("No choices in openai response")?
            .message
            .content
            .clone()
            .context("No content in openai response")?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl ContentExtractor for OpenaiClient {
    async fn extract(&self, chunk: &str) -> anyhow::Result<String> {
        self.filter_sustainability_content(chunk).await
    }
}

use anyhow::Result;

use super::translate::load_config;
use crate::chat::{ChatSession, SessionConfig};
use crate::config::ResolveOptions;
use crate::translation::TranslationClient;

pub struct ChatOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_config(&ResolveOptions {
        from: options.from,
        to: options.to,
        endpoint: options.endpoint,
    })?;

    let client = TranslationClient::new(config.client_options())?;
    let mut session = ChatSession::new(SessionConfig::from(&config), client);
    session.run().await
}

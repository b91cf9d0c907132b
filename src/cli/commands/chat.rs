use anyhow::Result;

use super::load_config;
use crate::api::ApiClient;
use crate::chat::{ChatClient, ChatRepl};
use crate::config::ResolveOptions;

pub async fn run_chat(options: ResolveOptions) -> Result<()> {
    let config = load_config(&options)?;
    let api = ApiClient::new(&config.base_url, config.timeout)?;
    let client = ChatClient::with_welcome(api, config.welcome_message.clone());

    let mut repl = ChatRepl::new(client, config);
    repl.run().await
}

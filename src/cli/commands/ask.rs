use anyhow::{Result, bail};

use super::load_config;
use crate::api::{ApiClient, ChatBackend};
use crate::chat::{ChatClient, Message, SendOutcome, Sender};
use crate::config::ResolveOptions;
use crate::input::InputReader;
use crate::ui::{Spinner, Style};

pub struct AskOptions {
    pub file: Option<String>,
    pub resolve: ResolveOptions,
}

/// Sends one message in a throwaway session and prints the reply.
pub async fn run_ask(options: AskOptions) -> Result<()> {
    let text = InputReader::read_message(options.file.as_deref())?;
    let config = load_config(&options.resolve)?;
    let api = ApiClient::new(&config.base_url, config.timeout)?;
    let mut client = ChatClient::with_welcome(api, config.welcome_message);

    let reply = exchange(&mut client, &text).await;
    client.close_session().await;

    let reply = reply?;
    println!("{}", reply.content());
    print_reply_details(&reply);
    Ok(())
}

/// Creates a session, sends `text`, and returns the bot reply.
pub async fn exchange<B: ChatBackend>(client: &mut ChatClient<B>, text: &str) -> Result<Message> {
    {
        let _spinner = Spinner::new("Connecting...");
        client.create_session().await?;
    }

    let outcome = {
        let _spinner = Spinner::new("Waiting for reply...");
        client.send_message(text).await?
    };

    if let SendOutcome::Skipped(reason) = outcome {
        bail!("Message not sent: {reason}");
    }

    match client.state().messages().last() {
        Some(m) if m.sender() == Sender::Bot && !m.is_error() => Ok(m.clone()),
        _ => bail!("No reply received"),
    }
}

fn print_reply_details(reply: &Message) {
    if let Some(pct) = reply.confidence_percent() {
        crate::status!("{}", Style::secondary(format!("confidence {pct}%")));
    }
    for (i, suggestion) in reply.suggestions().iter().enumerate() {
        crate::status!("{}", Style::chip(format!("[{}] {suggestion}", i + 1)));
    }
}

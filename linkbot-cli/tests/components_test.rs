//! Integration test: the wired chain over a recording bot, without Telegram.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use link_engine::RewriteConfig;
use linkbot_cli::{build_bot_components, build_handler_chain, BotConfig};
use linkbot_core::{Bot, Chat, DocumentRef, FileArtifact, Message, Result, User};
use linkbot_telegram::TelegramConfig;

#[derive(Default)]
struct RecordingBot {
    texts: Mutex<Vec<(i64, String)>>,
    documents: Mutex<Vec<(i64, FileArtifact)>>,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.texts.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }

    async fn send_document(
        &self,
        chat: &Chat,
        artifact: &FileArtifact,
        _caption: Option<&str>,
    ) -> Result<()> {
        self.documents
            .lock()
            .unwrap()
            .push((chat.id, artifact.clone()));
        Ok(())
    }

    async fn download_document(&self, _document: &DocumentRef) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

fn config(channel: Option<i64>) -> BotConfig {
    BotConfig {
        telegram: TelegramConfig::with_token("t".to_string()),
        log_channel_id: channel,
        rewrite: RewriteConfig {
            manifest_proxy_host: "proxy.test".to_string(),
            ..RewriteConfig::default()
        },
    }
}

fn text(user_id: i64, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: user_id,
            username: None,
            first_name: Some("Ada".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        entities: Vec::new(),
        document: None,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_wired_chain_collects_text() {
    let bot = Arc::new(RecordingBot::default());
    let components = build_bot_components(&config(None), bot.clone());
    let chain = build_handler_chain(&components);
    assert_eq!(chain.len(), 6);

    for content in ["/extract_txt notes", "one", "two", "/over"] {
        chain.handle(&text(11, content)).await.unwrap();
    }

    let documents = bot.documents.lock().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].0, 11);
    assert_eq!(documents[0].1.file_name, "notes.txt");
    assert_eq!(documents[0].1.text(), Some("one\ntwo"));
}

#[tokio::test]
async fn test_wired_chain_uses_configured_rewrite_host() {
    let bot = Arc::new(RecordingBot::default());
    let components = build_bot_components(&config(Some(-100)), bot.clone());
    let rewritten = components
        .rewriter
        .rewrite_manifest_links("https://cdn.x/v9/master.mpd", "tok");
    assert_eq!(rewritten, "https://proxy.test/v9/master.m3u8?token=tok");

    let chain = build_handler_chain(&components);
    chain.handle(&text(12, "/start")).await.unwrap();
    let texts = bot.texts.lock().unwrap();
    assert!(texts.iter().any(|(chat, _)| *chat == -100));
    assert!(texts.iter().any(|(chat, _)| *chat == 12));
}

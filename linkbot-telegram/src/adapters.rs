//! Adapters from Telegram (teloxide) types to linkbot_core types.

use linkbot_core::{
    Chat, DocumentRef, Message, SpanKind, TextSpan, ToCoreMessage, ToCoreUser, User,
};
use teloxide::types::{MessageEntity, MessageEntityKind};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Maps a Telegram entity to a core span; offsets stay in UTF-16 code units.
pub fn span_from_entity(entity: &MessageEntity) -> TextSpan {
    let kind = match &entity.kind {
        MessageEntityKind::TextLink { url } => SpanKind::Hyperlink {
            url: url.to_string(),
        },
        other => SpanKind::Other(format!("{:?}", other)),
    };
    TextSpan {
        offset: entity.offset,
        length: entity.length,
        kind,
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// `content` is the text, or the caption of a media message; entities follow whichever was used.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        let (content, entities) = match msg.text() {
            Some(text) => (text, msg.entities()),
            None => (msg.caption().unwrap_or(""), msg.caption_entities()),
        };
        let document = self.document();
        let message_type = if document.is_some() {
            "document"
        } else if msg.text().is_some() {
            "text"
        } else {
            "other"
        };

        Message {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: format!("{:?}", msg.chat.kind),
            },
            content: content.to_string(),
            message_type: message_type.to_string(),
            entities: entities
                .unwrap_or_default()
                .iter()
                .map(span_from_entity)
                .collect(),
            document,
            created_at: msg.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn document(&self) -> Option<DocumentRef> {
        self.0.document().map(|doc| DocumentRef {
            file_id: doc.file.id.0.clone(),
            file_name: doc.file_name.clone(),
            size: u64::from(doc.file.size),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
        assert_eq!(core_user.display_name(), "@testuser");
    }

    #[test]
    fn test_text_link_becomes_hyperlink_span() {
        let entity = MessageEntity {
            kind: MessageEntityKind::TextLink {
                url: "https://example.com/lecture".parse().unwrap(),
            },
            offset: 3,
            length: 9,
        };

        let span = span_from_entity(&entity);
        assert_eq!(span.offset, 3);
        assert_eq!(span.length, 9);
        assert_eq!(span.url(), Some("https://example.com/lecture"));
    }

    #[test]
    fn test_other_entities_are_not_hyperlinks() {
        let entity = MessageEntity {
            kind: MessageEntityKind::Bold,
            offset: 0,
            length: 4,
        };

        let span = span_from_entity(&entity);
        assert_eq!(span.url(), None);
        assert!(matches!(span.kind, SpanKind::Other(_)));
    }
}

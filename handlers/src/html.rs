//! `/html`: builds a link page from collected fields and `label:URL` pairs.

use std::sync::Arc;

use async_trait::async_trait;
use link_engine::{render, HtmlWizard, RenderRequest, Rewriter, Step, WizardKey};
use linkbot_core::{Bot, FileArtifact, Handler, HandlerResponse, Message, Result, User};
use tracing::{error, info, instrument};

use crate::admin_log::{now, AdminLog};
use crate::command::Command;
use crate::reply::{receive_input, send_reply, GENERIC_FAILURE};
use crate::wizards::Wizards;

/// Caption sent with a generated page, to the user and to the admin channel.
pub(crate) fn page_caption(user: &User, request: &RenderRequest, time: &str) -> String {
    format!(
        "📄 New HTML File Generated\n\n\
         👤 User: {}\n\
         🆔 ID: {}\n\
         🔗 Username: {}\n\
         📛 Title: {}\n\
         🕒 Time: {}\n\
         🔢 Buttons: {}",
        user.full_name(),
        user.id,
        user.display_name(),
        request.title,
        time,
        request.pairs.len()
    )
}

pub struct HtmlHandler {
    bot: Arc<dyn Bot>,
    wizards: Arc<Wizards>,
    rewriter: Arc<Rewriter>,
    admin: AdminLog,
}

impl HtmlHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        wizards: Arc<Wizards>,
        rewriter: Arc<Rewriter>,
        admin: AdminLog,
    ) -> Self {
        Self {
            bot,
            wizards,
            rewriter,
            admin,
        }
    }

    async fn start(&self, message: &Message) -> HandlerResponse {
        let (state, prompt) = HtmlWizard::start();
        self.wizards.begin_html(WizardKey::of(message), state);
        info!(user_id = message.user.id, "step: /html started");
        send_reply(self.bot.as_ref(), message, prompt).await
    }

    async fn step(&self, message: &Message, state: HtmlWizard) -> HandlerResponse {
        let key = WizardKey::of(message);
        let received = receive_input(self.bot.as_ref(), message, |d| state.wants_document(d)).await;
        let input = match received {
            Ok(input) => input,
            Err(reply) => {
                self.wizards.html.put(key, state);
                return send_reply(self.bot.as_ref(), message, reply).await;
            }
        };

        match state.advance(input, &self.rewriter) {
            Step::Next { state, reply } | Step::Retry { state, reply } => {
                self.wizards.html.put(key, state);
                send_reply(self.bot.as_ref(), message, &reply).await
            }
            Step::Done(request) => self.deliver(message, request).await,
        }
    }

    async fn deliver(&self, message: &Message, request: RenderRequest) -> HandlerResponse {
        let user_id = message.user.id;
        let page = FileArtifact::new(request.output_file_name(), render(&request));
        let caption = page_caption(&message.user, &request, &now());

        if let Err(e) = self
            .bot
            .send_document(&message.chat, &page, Some(&caption))
            .await
        {
            error!(error = %e, user_id, "Failed to deliver HTML page");
            return send_reply(self.bot.as_ref(), message, GENERIC_FAILURE).await;
        }

        info!(
            user_id,
            file_name = %page.file_name,
            buttons = request.pairs.len(),
            "step: /html page delivered"
        );
        let copy = page.renamed(format!("user_{}_{}", user_id, page.file_name));
        self.admin.send_document(&copy, &caption).await;
        HandlerResponse::Stop
    }
}

#[async_trait]
impl Handler for HtmlHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if let Some(cmd) = Command::parse(&message.content) {
            if cmd.is("html") {
                return Ok(self.start(message).await);
            }
            return Ok(HandlerResponse::Continue);
        }

        match self.wizards.html.take(WizardKey::of(message)) {
            Some(state) => Ok(self.step(message, state).await),
            None => Ok(HandlerResponse::Continue),
        }
    }
}

//! `/pw`: rewrites manifest links in an uploaded text file with the user's token.

use std::sync::Arc;

use async_trait::async_trait;
use link_engine::{PwRequest, PwWizard, Rewriter, Step, WizardKey};
use linkbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

use crate::admin_log::{mask_token, AdminLog};
use crate::command::Command;
use crate::reply::{receive_input, send_reply, GENERIC_FAILURE};
use crate::wizards::Wizards;

pub struct PwHandler {
    bot: Arc<dyn Bot>,
    wizards: Arc<Wizards>,
    rewriter: Arc<Rewriter>,
    admin: AdminLog,
}

impl PwHandler {
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
        let (state, prompt) = PwWizard::start();
        self.wizards.begin_pw(WizardKey::of(message), state);
        info!(user_id = message.user.id, "step: /pw started");
        self.admin
            .notify(&message.user, "🚀 PW Link Changer Started", None, None)
            .await;
        send_reply(self.bot.as_ref(), message, prompt).await
    }

    async fn step(&self, message: &Message, state: PwWizard) -> HandlerResponse {
        let user_id = message.user.id;
        let key = WizardKey::of(message);
        let received = receive_input(self.bot.as_ref(), message, |d| state.wants_document(d)).await;
        let input = match received {
            Ok(input) => input,
            Err(reply) => {
                self.wizards.pw.put(key, state);
                return send_reply(self.bot.as_ref(), message, reply).await;
            }
        };

        match state.advance(input) {
            Step::Next { state, reply } => {
                if let PwWizard::AwaitingToken { file_name, .. } = &state {
                    info!(user_id, file_name = %file_name, "step: /pw file received");
                    self.admin
                        .notify(&message.user, "📂 File Uploaded", Some(file_name), None)
                        .await;
                }
                self.wizards.pw.put(key, state);
                send_reply(self.bot.as_ref(), message, &reply).await
            }
            Step::Retry { state, reply } => {
                self.wizards.pw.put(key, state);
                send_reply(self.bot.as_ref(), message, &reply).await
            }
            Step::Done(request) => self.deliver(message, request).await,
        }
    }

    async fn deliver(&self, message: &Message, request: PwRequest) -> HandlerResponse {
        let user_id = message.user.id;
        let links = self.rewriter.count_manifest_links(&request.content);
        let artifact = request.rewritten(&self.rewriter);
        let masked = mask_token(&request.token);
        let caption = format!(
            "📄 Here is the final TXT file\n\n🔗 Links converted: {}",
            links
        );

        if let Err(e) = self
            .bot
            .send_document(&message.chat, &artifact, Some(&caption))
            .await
        {
            error!(error = %e, user_id, "Failed to deliver rewritten file");
            return send_reply(self.bot.as_ref(), message, GENERIC_FAILURE).await;
        }

        info!(
            user_id,
            file_name = %artifact.file_name,
            links,
            token = %masked,
            "step: /pw rewritten file delivered"
        );
        let extra = format!("Token: {}", masked);
        self.admin
            .notify(
                &message.user,
                "📄 Transformed File Sent",
                Some(&artifact.file_name),
                Some(&extra),
            )
            .await;
        HandlerResponse::Stop
    }
}

#[async_trait]
impl Handler for PwHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if let Some(cmd) = Command::parse(&message.content) {
            if cmd.is("pw") {
                return Ok(self.start(message).await);
            }
            return Ok(HandlerResponse::Continue);
        }

        match self.wizards.pw.take(WizardKey::of(message)) {
            Some(state) => Ok(self.step(message, state).await),
            None => Ok(HandlerResponse::Continue),
        }
    }
}

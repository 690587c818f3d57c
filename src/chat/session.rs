//! Chat session for tagchat.
//!
//! A session owns the tag repository and the message log. User messages are
//! appended as soon as they are submitted. Commands are answered by the bot
//! after a simulated delay, without blocking further input.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use super::log::MessageLog;
use super::message::{Message, User};
use crate::command::{parse_input, ChatInput, Command, CommandError, Dispatcher};
use crate::config::Config;
use crate::tag::TagRepository;

/// Parsed command waiting for its reply.
type PendingCommand = Result<Command, CommandError>;

/// An interactive chat session between the local user and the bot.
pub struct ChatSession<R: TagRepository> {
    repo: R,
    log: MessageLog,
    dispatcher: Dispatcher,
    user: User,
    bot: User,
    prefix: char,
    reply_delay: Duration,
    reply_tx: mpsc::UnboundedSender<PendingCommand>,
    reply_rx: mpsc::UnboundedReceiver<PendingCommand>,
    pending: usize,
}

impl<R: TagRepository> ChatSession<R> {
    /// Create a session from configuration, starting with the welcome message.
    pub fn new(config: &Config, repo: R) -> Self {
        let user = User::new(&config.user.name, &config.user.avatar);
        let bot = User::bot(&config.bot.name, &config.bot.avatar);
        let prefix = config.bot.prefix;
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        Self {
            repo,
            log: MessageLog::with_welcome(bot.clone(), prefix),
            dispatcher: Dispatcher::new(&user.username, prefix),
            user,
            bot,
            prefix,
            reply_delay: config.bot.reply_delay(),
            reply_tx,
            reply_rx,
            pending: 0,
        }
    }

    /// Submit a line typed by the user.
    ///
    /// Blank input is ignored and returns `None`. Commands schedule a bot
    /// reply, which is delivered by [`next_reply`](Self::next_reply).
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, input: &str) -> Option<&Message> {
        match parse_input(input, self.prefix) {
            ChatInput::Message(text) if text.is_empty() => None,
            ChatInput::Message(text) => Some(self.log.push(Message::new(self.user.clone(), text))),
            ChatInput::Command(parsed) => {
                self.schedule_reply(parsed);
                Some(self.log.push(Message::command(self.user.clone(), input)))
            }
        }
    }

    /// Hand a parsed command back after the reply delay.
    fn schedule_reply(&mut self, parsed: PendingCommand) {
        let tx = self.reply_tx.clone();
        let delay = self.reply_delay;
        self.pending += 1;
        debug!(pending = self.pending, "scheduled bot reply");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver lives as long as the session.
            let _ = tx.send(parsed);
        });
    }

    /// Wait for the next bot reply and append it to the log.
    ///
    /// Returns `None` immediately when no reply is pending. Overlapping
    /// replies arrive in the order their timers fire.
    pub async fn next_reply(&mut self) -> Option<Message> {
        if self.pending == 0 {
            return None;
        }

        let parsed = self.reply_rx.recv().await?;
        self.pending -= 1;

        let response = self.dispatcher.dispatch_parsed(&parsed, &mut self.repo);
        let message = Message::new(self.bot.clone(), response.text).with_embeds(response.embeds);
        self.log.push(message.clone());
        Some(message)
    }

    /// Number of bot replies not yet delivered.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// The message log.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// The tag repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// The local user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The bot user.
    pub fn bot(&self) -> &User {
        &self.bot
    }

    /// The command prefix.
    pub fn prefix(&self) -> char {
        self.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{default_tags, InMemoryTagRepository};

    fn session() -> ChatSession<InMemoryTagRepository> {
        ChatSession::new(
            &Config::default(),
            InMemoryTagRepository::with_tags(default_tags()),
        )
    }

    #[tokio::test]
    async fn test_new_session_has_welcome() {
        let session = session();
        assert_eq!(session.log().len(), 1);
        assert!(session.log().messages()[0].is_from_bot());
        assert_eq!(session.pending(), 0);
        assert_eq!(session.prefix(), '/');
        assert_eq!(session.user().username, "User");
        assert_eq!(session.bot().username, "Dyno");
    }

    #[tokio::test]
    async fn test_plain_message_has_no_reply() {
        let mut session = session();
        let msg = session.submit("hello **there**").unwrap();
        assert!(!msg.is_command);
        assert_eq!(msg.user.username, "User");
        assert_eq!(session.pending(), 0);
        assert!(session.next_reply().await.is_none());
        assert_eq!(session.log().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut session = session();
        assert!(session.submit("   ").is_none());
        assert!(session.submit("").is_none());
        assert_eq!(session.log().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_command_reply_is_delayed() {
        let mut session = session();
        let start = tokio::time::Instant::now();

        let msg = session.submit("/tags").unwrap();
        assert!(msg.is_command);
        assert_eq!(msg.content, "/tags");
        assert_eq!(session.pending(), 1);
        assert_eq!(session.log().len(), 2);

        let reply = session.next_reply().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(400));
        assert!(reply.is_from_bot());
        assert_eq!(reply.content, "**Available Tags:**\nrockstar-fix, hello");
        assert_eq!(session.pending(), 0);
        assert_eq!(session.log().len(), 3);
        assert_eq!(session.log().last().unwrap().id, reply.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_accepted_while_reply_pending() {
        let mut session = session();
        session.submit("/tag get hello");
        session.submit("still typing");
        assert_eq!(session.log().len(), 3);
        assert_eq!(session.pending(), 1);

        let reply = session.next_reply().await.unwrap();
        assert!(reply.content.starts_with("Welcome to the server!"));
        assert_eq!(session.log().last().unwrap().id, reply.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_then_get() {
        let mut session = session();
        session.submit("/tag create greeting Hello there");
        let created = session.next_reply().await.unwrap();
        assert_eq!(created.content, "✅ Tag `greeting` created successfully.");

        let tag = session.repository().find_by_name("greeting", false).unwrap();
        assert_eq!(tag.author, "User");

        session.submit("/tag get name:greeting");
        let reply = session.next_reply().await.unwrap();
        assert_eq!(reply.content, "Hello there");
        assert!(reply.embeds.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_github_embed_reply() {
        let mut session = session();
        session.submit("/tag get rockstar-fix");
        let reply = session.next_reply().await.unwrap();
        assert_eq!(reply.embeds.len(), 1);
        assert_eq!(
            reply.embeds[0].url.as_deref(),
            Some("https://github.com/onajlikezz/Nightlight-Game-Launcher")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_replies_all_arrive() {
        let mut session = session();
        session.submit("/tags");
        session.submit("/tag get missing");
        session.submit("/nope");
        assert_eq!(session.pending(), 3);

        let mut replies = Vec::new();
        while let Some(reply) = session.next_reply().await {
            replies.push(reply.content);
        }

        assert_eq!(replies.len(), 3);
        assert!(replies.iter().any(|r| r == "❌ Tag `missing` not found."));
        assert!(replies.iter().any(|r| r.starts_with("❌ Unknown command.")));
        assert!(replies.iter().any(|r| r.starts_with("**Available Tags:**")));
        assert_eq!(session.log().len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_uppercase_and_bare_prefix_commands_are_answered() {
        let mut session = session();

        assert!(session.submit("/TAGS").unwrap().is_command);
        let reply = session.next_reply().await.unwrap();
        assert!(reply.content.starts_with("**Available Tags:**"));

        assert!(session.submit("/").unwrap().is_command);
        let reply = session.next_reply().await.unwrap();
        assert!(reply.content.starts_with("❌ Unknown command."));

        assert!(session.submit("/ta").unwrap().is_command);
        let reply = session.next_reply().await.unwrap();
        assert!(reply.content.starts_with("❌ Unknown command."));
        assert_eq!(session.log().len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_command_reply() {
        let mut session = session();
        session.submit("/tag create lonely");
        let reply = session.next_reply().await.unwrap();
        assert_eq!(reply.content, "❌ Please provide content for the tag.");
        assert_eq!(session.repository().len(), 2);
    }
}

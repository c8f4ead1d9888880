//! SendMessage command handler.
//!
//! The heart of the service: receives a user's chat message, resolves or
//! creates the session, persists the message, asks the completion API for a
//! reply, and records the point awards.
//!
//! # Write ordering
//!
//! The steps are sequential, non-transactional writes against four
//! collections. A failure part-way through leaves earlier writes committed:
//! a completion failure strands the saved user message, and a profile-write
//! failure leaves the ledger ahead of the cached total. This mirrors the
//! production behavior the tests pin down; see the integration suite for the
//! documented drift cases.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::chat::{ChatMessage, ChatSession, MessageRole};
use crate::domain::foundation::{AuthenticatedUser, DomainError, SessionId};
use crate::domain::points::{
    points_for_exchange, PointTransaction, Profile, NEW_SESSION_POINTS, USER_MESSAGE_POINTS,
};
use crate::ports::{
    AiError, AiProvider, CompletionRequest, MessageRepository, MessageRole as AiMessageRole,
    PointLedger, ProfileRepository, SessionRepository,
};

/// Persona and incentive framing sent ahead of every completion call.
const SYSTEM_PROMPT: &str = "You are a helpful AI assistant in cChat, a Web3-powered platform \
where users earn points for engaging conversations. Be conversational, helpful, and encourage \
meaningful dialogue. Keep responses concise but engaging.";

/// Most recent messages of the session forwarded as model context.
const HISTORY_LIMIT: u32 = 20;

/// Command to send a chat message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    /// The message content.
    pub message: String,
    /// Session to continue, or `None` to start a new conversation.
    pub session_id: Option<SessionId>,
}

impl SendMessageCommand {
    /// Creates a new send message command.
    pub fn new(message: impl Into<String>, session_id: Option<SessionId>) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// Result of a completed exchange.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    /// The assistant's reply text.
    pub reply: String,
    /// The session the exchange belongs to (newly created if none was given).
    pub session_id: SessionId,
    /// Points earned by this exchange (excludes any new-session bonus).
    pub points_earned: i32,
    /// The user's cached point total after the exchange.
    pub total_points: i64,
}

/// Errors that can occur while processing a message.
#[derive(Debug, Clone, Error)]
pub enum SendMessageError {
    /// Message body was empty or whitespace only.
    #[error("Validation error: message cannot be empty")]
    EmptyMessage,

    /// The completion API failed or returned a malformed payload.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// A storage read or write failed.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<AiError> for SendMessageError {
    fn from(err: AiError) -> Self {
        SendMessageError::Upstream(err.to_string())
    }
}

impl From<DomainError> for SendMessageError {
    fn from(err: DomainError) -> Self {
        SendMessageError::Persistence(err.to_string())
    }
}

/// Handler for the send-message workflow.
pub struct SendMessageHandler {
    sessions: Arc<dyn SessionRepository>,
    messages: Arc<dyn MessageRepository>,
    ledger: Arc<dyn PointLedger>,
    profiles: Arc<dyn ProfileRepository>,
    ai: Arc<dyn AiProvider>,
}

impl SendMessageHandler {
    /// Creates a new handler wired to its ports.
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        messages: Arc<dyn MessageRepository>,
        ledger: Arc<dyn PointLedger>,
        profiles: Arc<dyn ProfileRepository>,
        ai: Arc<dyn AiProvider>,
    ) -> Self {
        Self {
            sessions,
            messages,
            ledger,
            profiles,
            ai,
        }
    }

    /// Processes one chat message end to end.
    pub async fn handle(
        &self,
        user: &AuthenticatedUser,
        command: SendMessageCommand,
    ) -> Result<SendMessageResult, SendMessageError> {
        if command.message.trim().is_empty() {
            return Err(SendMessageError::EmptyMessage);
        }

        tracing::info!(user_id = %user.id, "Processing chat message");

        // Resolve or create the session. An unknown or foreign session id
        // falls through to creation rather than erroring.
        let mut session = match command.session_id {
            Some(id) => self.sessions.find_for_user(&id, &user.id).await?,
            None => None,
        };

        let session = match session.take() {
            Some(session) => session,
            None => self.start_session(user, &command.message).await?,
        };

        let user_message = ChatMessage::from_user(
            *session.id(),
            user.id.clone(),
            command.message.clone(),
            USER_MESSAGE_POINTS,
        );
        self.messages.save(&user_message).await?;

        // History is fetched after the user message is saved, so it already
        // contains the incoming message (up to the window limit).
        let history = self.messages.history(session.id(), HISTORY_LIMIT).await?;

        let reply = self.request_completion(&history).await?;

        let assistant_message =
            ChatMessage::from_assistant(*session.id(), user.id.clone(), reply.clone());
        self.messages.save(&assistant_message).await?;

        // The resulting count is history length plus the two messages of
        // this exchange, matching how the award tiers are defined.
        let message_count = history.len() as i32 + 2;
        let points_earned = points_for_exchange(message_count);

        let mut session = session;
        session.record_exchange(message_count, points_earned);
        self.sessions.update(&session).await?;

        let award = PointTransaction::earned(
            user.id.clone(),
            *session.id(),
            points_earned,
            format!("Chat message ({} pts)", points_earned),
        );
        self.ledger.record(&award).await?;

        let total_points = self.credit_profile(user, points_earned).await?;

        tracing::info!(
            session_id = %session.id(),
            points_earned,
            total_points,
            "Chat exchange completed"
        );

        Ok(SendMessageResult {
            reply,
            session_id: *session.id(),
            points_earned,
            total_points,
        })
    }

    /// Creates a new session and awards the flat new-session bonus.
    async fn start_session(
        &self,
        user: &AuthenticatedUser,
        first_message: &str,
    ) -> Result<ChatSession, SendMessageError> {
        let session = ChatSession::start(user.id.clone(), first_message);
        self.sessions.save(&session).await?;

        let bonus = PointTransaction::earned(
            user.id.clone(),
            *session.id(),
            NEW_SESSION_POINTS,
            "Started new chat session",
        );
        self.ledger.record(&bonus).await?;

        tracing::info!(session_id = %session.id(), "Started new chat session");
        Ok(session)
    }

    /// Forwards the bounded history to the completion API.
    async fn request_completion(
        &self,
        history: &[ChatMessage],
    ) -> Result<String, SendMessageError> {
        let mut request = CompletionRequest::new().with_system_prompt(SYSTEM_PROMPT);
        for message in history {
            let role = match message.role() {
                MessageRole::User => AiMessageRole::User,
                MessageRole::Assistant => AiMessageRole::Assistant,
            };
            request = request.with_message(role, message.content());
        }

        let response = self.ai.complete(request).await?;
        Ok(response.content)
    }

    /// Read-then-write update of the cached profile total.
    ///
    /// Not an atomic increment: two concurrent exchanges can read the same
    /// total and the slower write wins.
    async fn credit_profile(
        &self,
        user: &AuthenticatedUser,
        points_earned: i32,
    ) -> Result<i64, SendMessageError> {
        let mut profile = match self.profiles.find_by_user(&user.id).await? {
            Some(profile) => profile,
            None => {
                let profile = Profile::new(user.id.clone());
                self.profiles.save(&profile).await?;
                profile
            }
        };

        profile.credit(points_earned);
        self.profiles.update_total(&profile).await?;
        Ok(profile.total_points())
    }
}

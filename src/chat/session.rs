// Chat session - owns the message log and sequences each turn
//
// Turn state machine:
//
//   [Idle] ──submit(non-empty)──▶ [PendingBotReply] ──reply due──▶ [Idle]
//                                        │
//                                        └──cancel──▶ [Idle]
//
// Every front end routes its triggers (Enter, Send button, stdin line) through
// `submit()`. Replies are not spawned tasks: each is a deadline in a FIFO
// queue that the owning event loop drains with `deliver_due()`. The delay is
// constant, so deadlines never decrease and replies land in submission order.

use super::log::MessageLog;
use super::message::{ChatMessage, SubmissionId};
use super::sink::DisplaySink;
use crate::profile::ProfileFacts;
use crate::resolver::Resolver;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Default simulated "thinking" latency before a bot reply
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// A bot reply waiting for its deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub id: SubmissionId,
    pub due: Instant,
    pub text: String,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened
    Ignored,
    /// User message appended, reply queued
    Scheduled(SubmissionId),
    /// User message appended, but the lookup failed and no reply will come
    Faulted(SubmissionId),
}

impl SubmitOutcome {
    /// Whether the input was consumed (the caller should clear its field)
    pub fn accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Ignored)
    }
}

/// Conversation turn state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnState {
    #[default]
    Idle,
    /// At least one reply is queued
    PendingBotReply { pending: usize },
}

/// A chat conversation bound to a profile and a display sink
pub struct ChatSession<S: DisplaySink> {
    profile: Arc<ProfileFacts>,
    resolver: Resolver,
    reply_delay: Duration,
    log: MessageLog,
    pending: VecDeque<PendingReply>,
    next_id: u64,
    sink: S,
}

impl<S: DisplaySink> ChatSession<S> {
    pub fn new(profile: Arc<ProfileFacts>, resolver: Resolver, sink: S) -> Self {
        Self {
            profile,
            resolver,
            reply_delay: DEFAULT_REPLY_DELAY,
            log: MessageLog::new(),
            pending: VecDeque::new(),
            next_id: 1,
            sink,
        }
    }

    /// Override the reply delay (builder style)
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Submit raw input text
    ///
    /// Appends the trimmed text as a user message right away and queues the
    /// bot reply for `now + reply_delay`. Whitespace-only input is ignored
    /// without touching the log or the resolver.
    pub fn submit(&mut self, raw: &str, now: Instant) -> SubmitOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        let id = SubmissionId(self.next_id);
        self.next_id += 1;

        self.append(ChatMessage::user(id, text));

        match self.resolver.resolve(text, &self.profile) {
            Ok(reply) => {
                tracing::info!(
                    "Submission {} queued reply ({} pending)",
                    id,
                    self.pending.len() + 1
                );
                self.pending.push_back(PendingReply {
                    id,
                    due: now + self.reply_delay,
                    text: reply,
                });
                SubmitOutcome::Scheduled(id)
            }
            Err(e) => {
                tracing::error!("Submission {} dropped its reply: {}", id, e);
                SubmitOutcome::Faulted(id)
            }
        }
    }

    /// Append every reply whose deadline has passed, oldest first
    ///
    /// Returns the number of replies delivered.
    pub fn deliver_due(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        while self.pending.front().is_some_and(|p| p.due <= now) {
            if let Some(reply) = self.pending.pop_front() {
                tracing::debug!("Delivering reply for submission {}", reply.id);
                self.append(ChatMessage::bot(reply.id, reply.text));
                delivered += 1;
            }
        }
        delivered
    }

    /// Deadline of the oldest queued reply
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.front().map(|p| p.due)
    }

    /// Drop the queued reply for one submission
    ///
    /// Returns false if it was already delivered (or never queued).
    pub fn cancel(&mut self, id: SubmissionId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        let cancelled = self.pending.len() != before;
        if cancelled {
            tracing::info!("Cancelled reply for submission {}", id);
        }
        cancelled
    }

    /// Drop every queued reply ("stop generating")
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        if count > 0 {
            tracing::info!("Cancelled {} pending reply(s)", count);
        }
        count
    }

    pub fn state(&self) -> TurnState {
        match self.pending.len() {
            0 => TurnState::Idle,
            pending => TurnState::PendingBotReply { pending },
        }
    }

    pub fn pending(&self) -> impl Iterator<Item = &PendingReply> {
        self.pending.iter()
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    #[cfg(test)]
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn append(&mut self, message: ChatMessage) {
        let message = self.log.append(message);
        self.sink.show(message);
    }
}

/// Sleep until the next reply is due; never resolves when nothing is queued
///
/// Meant for a `tokio::select!` arm next to input handling.
pub async fn reply_timer(next_due: Option<Instant>) {
    match next_due {
        Some(due) => tokio::time::sleep_until(due).await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Sender;
    use crate::chat::sink::RecordingSink;
    use crate::resolver::{MissingExperience, FALLBACK_REPLY};

    const SKILLS_REPLY: &str = "My key skills include: Docker, Tensorflow, AWS, Flask";
    const CERTS_REPLY: &str =
        "My certifications: Data Science certification by PW Skills, Intro to Data Engg. coursera";

    fn session() -> ChatSession<RecordingSink> {
        ChatSession::new(
            Arc::new(ProfileFacts::default()),
            Resolver::default(),
            RecordingSink::default(),
        )
    }

    fn texts(session: &ChatSession<RecordingSink>) -> Vec<(Sender, String)> {
        session
            .log()
            .entries()
            .iter()
            .map(|m| (m.sender, m.text.clone()))
            .collect()
    }

    #[test]
    fn user_message_appears_before_delay() {
        let mut s = session();
        let t0 = Instant::now();

        let outcome = s.submit("What skills do you have?", t0);
        assert_eq!(outcome, SubmitOutcome::Scheduled(SubmissionId(1)));
        assert_eq!(
            texts(&s),
            vec![(Sender::User, "What skills do you have?".to_string())]
        );
        assert_eq!(s.state(), TurnState::PendingBotReply { pending: 1 });

        // Not yet due
        assert_eq!(s.deliver_due(t0 + Duration::from_millis(499)), 0);
        assert_eq!(s.log().len(), 1);

        assert_eq!(s.deliver_due(t0 + Duration::from_millis(500)), 1);
        assert_eq!(
            s.log().entries().last().map(|m| (m.sender, m.text.as_str())),
            Some((Sender::Bot, SKILLS_REPLY))
        );
        assert_eq!(s.state(), TurnState::Idle);
    }

    #[test]
    fn submitted_text_is_trimmed() {
        let mut s = session();
        s.submit("   Tell me your certifications \n", Instant::now());
        assert_eq!(s.log().entries()[0].text, "Tell me your certifications");

        s.deliver_due(Instant::now() + DEFAULT_REPLY_DELAY);
        assert_eq!(s.log().entries()[1].text, CERTS_REPLY);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut s = session();
        assert_eq!(s.submit("", Instant::now()), SubmitOutcome::Ignored);
        assert_eq!(s.submit("  \t\n ", Instant::now()), SubmitOutcome::Ignored);
        assert!(!SubmitOutcome::Ignored.accepted());
        assert!(s.log().is_empty());
        assert!(s.sink().shown.is_empty());
        assert_eq!(s.next_due(), None);
    }

    #[test]
    fn rapid_submissions_reply_in_order() {
        let mut s = session();
        let t0 = Instant::now();

        s.submit("skills", t0);
        s.submit("hello", t0 + Duration::from_millis(100));

        // Both user entries land immediately
        assert_eq!(s.log().count_from(Sender::User), 2);

        // First reply only
        assert_eq!(s.deliver_due(t0 + Duration::from_millis(550)), 1);
        // Second reply after its own delay
        assert_eq!(s.deliver_due(t0 + Duration::from_millis(600)), 1);

        assert_eq!(
            texts(&s),
            vec![
                (Sender::User, "skills".to_string()),
                (Sender::User, "hello".to_string()),
                (Sender::Bot, SKILLS_REPLY.to_string()),
                (Sender::Bot, FALLBACK_REPLY.to_string()),
            ]
        );
        let ids: Vec<_> = s.log().entries().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 1, 2]);
    }

    #[test]
    fn late_delivery_flushes_everything_due() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit("a", t0);
        s.submit("b", t0);
        s.submit("c", t0);
        assert_eq!(s.deliver_due(t0 + Duration::from_secs(5)), 3);
        assert_eq!(s.state(), TurnState::Idle);
    }

    #[test]
    fn experience_fault_keeps_user_message_only() {
        let mut s = ChatSession::new(
            Arc::new(ProfileFacts::default()),
            Resolver::new(MissingExperience::Fault),
            RecordingSink::default(),
        );
        let t0 = Instant::now();

        let outcome = s.submit("your experience?", t0);
        assert_eq!(outcome, SubmitOutcome::Faulted(SubmissionId(1)));
        assert!(outcome.accepted());

        assert_eq!(s.deliver_due(t0 + Duration::from_secs(1)), 0);
        assert_eq!(texts(&s), vec![(Sender::User, "your experience?".to_string())]);
        assert_eq!(s.state(), TurnState::Idle);
    }

    #[test]
    fn cancel_removes_only_that_reply() {
        let mut s = session();
        let t0 = Instant::now();
        let SubmitOutcome::Scheduled(first) = s.submit("skills", t0) else {
            panic!("expected a scheduled reply");
        };
        s.submit("certifications", t0);

        assert!(s.cancel(first));
        assert!(!s.cancel(first));
        assert_eq!(s.state(), TurnState::PendingBotReply { pending: 1 });

        s.deliver_due(t0 + DEFAULT_REPLY_DELAY);
        assert_eq!(s.log().entries().last().map(|m| m.text.as_str()), Some(CERTS_REPLY));
        assert_eq!(s.log().count_from(Sender::Bot), 1);
    }

    #[test]
    fn cancel_all_clears_queue() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit("one", t0);
        s.submit("two", t0);
        assert_eq!(s.cancel_all(), 2);
        assert_eq!(s.cancel_all(), 0);
        assert_eq!(s.deliver_due(t0 + Duration::from_secs(1)), 0);
    }

    #[test]
    fn sink_sees_every_append_in_log_order() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit("skills", t0);
        s.deliver_due(t0 + DEFAULT_REPLY_DELAY);

        assert_eq!(s.sink().shown.as_slice(), s.log().entries());
    }

    #[test]
    fn custom_delay_moves_deadline() {
        let mut s = session().with_reply_delay(Duration::from_millis(20));
        let t0 = Instant::now();
        s.submit("hi", t0);
        assert_eq!(s.next_due(), Some(t0 + Duration::from_millis(20)));
        assert_eq!(s.reply_delay(), Duration::from_millis(20));
    }

    #[tokio::test(start_paused = true)]
    async fn reply_timer_fires_at_deadline() {
        let mut s = session();
        let start = Instant::now();
        s.submit("skills", start);

        reply_timer(s.next_due()).await;

        assert!(start.elapsed() >= DEFAULT_REPLY_DELAY);
        assert_eq!(s.deliver_due(Instant::now()), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reply_timer_idles_without_pending_replies() {
        let s = session();
        let idle = tokio::time::timeout(Duration::from_secs(60), reply_timer(s.next_due())).await;
        assert!(idle.is_err());
    }
}

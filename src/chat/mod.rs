// Chat module - the conversation core shared by every front end
//
// - message: ChatMessage and its sender tag
// - log: append-only MessageLog
// - sink: DisplaySink, the rendering capability injected into a session
// - session: ChatSession, the shared submit operation and reply scheduling

pub mod log;
pub mod message;
pub mod session;
pub mod sink;

pub use message::{ChatMessage, Sender};
pub use session::{reply_timer, ChatSession, SubmitOutcome, TurnState};
pub use sink::DisplaySink;

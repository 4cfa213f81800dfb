// Components module - UI building blocks
//
// Focusable panels own their state and implement the trait system:
// - Transcript panel: the conversation (also the session's display sink)
// - Logs panel: captured tracing events
//
// Chrome is rendered by plain functions:
// - Title bar: app name, reply spinner, profile summary
// - Input bar: input field and Send button
// - Status bar: key hints and counts

pub mod formatters;
pub mod input_bar;
pub mod logs_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod transcript_panel;

pub use toast::Toast;

//! The command the bot answers and the text it answers with.

/// The command token users type to ask for a writing prompt.
pub const WRITE_COMMAND: &str = "/write";

/// The fixed reply posted when [`WRITE_COMMAND`] is seen.
pub const WRITE_COMMAND_REPLY: &str = "글을 작성해 주세요!";

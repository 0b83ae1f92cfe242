pub mod clock;
pub mod input;
pub mod shell;

pub use self::clock::start_clock;
pub use self::input::{ChordState, ClickOutcome, InputBridge, KeyOutcome, KeyPress};
pub use self::shell::{parse_command, ShellCommand};

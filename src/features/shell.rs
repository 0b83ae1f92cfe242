use crate::features::input::KeyPress;

// one line typed into the headless shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Quit,
    Show,
    Click(String),
    Key(KeyPress),
    Push(String),
    Back,
    Forward,
    // `key` or `push` without the value they need
    MissingArgument(String),
    Unrecognized(String),
}

pub fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    let mut parts = line.split_whitespace();

    match (parts.next(), parts.next()) {
        (None, _) => ShellCommand::Empty,
        (Some("quit"), _) | (Some("exit"), _) => ShellCommand::Quit,
        (Some("show"), _) => ShellCommand::Show,
        (Some("key"), Some(chord)) => ShellCommand::Key(parse_key(chord)),
        (Some("push"), Some(fragment)) => ShellCommand::Push(fragment.to_string()),
        (Some("back"), _) => ShellCommand::Back,
        (Some("forward"), _) => ShellCommand::Forward,
        (Some(command @ ("key" | "push")), None) => {
            ShellCommand::MissingArgument(command.to_string())
        }
        (Some(href), None) => ShellCommand::Click(href.to_string()),
        _ => ShellCommand::Unrecognized(line.to_string()),
    }
}

// "ctrl+k", "cmd+k", "meta+k" or a bare key
pub fn parse_key(chord: &str) -> KeyPress {
    match chord.split_once('+') {
        Some(("ctrl", key)) => KeyPress::ctrl(key),
        Some(("cmd", key)) | Some(("meta", key)) => KeyPress::meta(key),
        _ => KeyPress::plain(chord),
    }
}

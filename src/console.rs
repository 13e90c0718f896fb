use crate::keypad::Key;
use crate::session::Event;

#[derive(Debug, PartialEq)]
pub enum Command {
    events(Vec<Event>),
    quit,
    unknown(String),
}

pub const HELP: &str = "keys: 0-9 + - * / C   calculate: =   edit: :set <text>   leave: quit";

/// Turns one console line into the events it stands for.
///
/// A run of keypad labels presses each key in order; a single stray
/// character rejects the whole line.
pub fn read_command(line: &str) -> Command {
    let edit = match line.strip_prefix(":set") {
        Some("") => Some(""),
        Some(rest) => rest.strip_prefix(' '),
        None => None,
    };
    if let Some(text) = edit {
        return Command::events(vec![Event::edit(text.into())]);
    }

    match line.trim() {
        "quit" | "exit" => Command::quit,
        "=" | "calc" => Command::events(vec![Event::calculate]),
        "" => Command::unknown(String::new()),
        labels => labels
            .chars()
            .map(|label| Key::from_label(label).map(Event::press))
            .collect::<Option<Vec<Event>>>()
            .map_or_else(|| Command::unknown(labels.into()), Command::events),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(label: char) -> Event {
        Event::press(Key::from_label(label).unwrap())
    }

    #[test]
    fn test_single_keys() {
        assert_eq!(read_command("7"), Command::events(vec![press('7')]));
        assert_eq!(read_command(" / "), Command::events(vec![press('/')]));
        assert_eq!(read_command("C"), Command::events(vec![press('C')]));
    }

    #[test]
    fn test_key_runs() {
        assert_eq!(
            read_command("12+3"),
            Command::events(vec![press('1'), press('2'), press('+'), press('3')])
        );
        assert_eq!(read_command("1 + 2"), Command::unknown("1 + 2".into()));
    }

    #[test]
    fn test_calculate_and_quit() {
        assert_eq!(read_command("="), Command::events(vec![Event::calculate]));
        assert_eq!(read_command("calc"), Command::events(vec![Event::calculate]));
        assert_eq!(read_command("quit"), Command::quit);
        assert_eq!(read_command("exit"), Command::quit);
    }

    #[test]
    fn test_set_keeps_text_verbatim() {
        assert_eq!(
            read_command(":set (2 + 3) x 4"),
            Command::events(vec![Event::edit("(2 + 3) x 4".into())])
        );
        assert_eq!(read_command(":set"), Command::events(vec![Event::edit(String::new())]));
        assert_eq!(read_command(":set "), Command::events(vec![Event::edit(String::new())]));
    }

    #[test]
    fn test_set_needs_a_separator() {
        assert_eq!(read_command(":setx"), Command::unknown(":setx".into()));
        assert_eq!(read_command(":set1+2"), Command::unknown(":set1+2".into()));
    }

    #[test]
    fn test_unknown_lines() {
        assert_eq!(read_command("hello"), Command::unknown("hello".into()));
        assert_eq!(read_command(""), Command::unknown(String::new()));
    }
}

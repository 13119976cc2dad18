use std::{io::stdin, sync::mpsc, thread};

use termion::{event::Key, input::TermRead};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    TogglePause,
    Accelerate,
    Decelerate,
}

impl InputCmd {
    fn from_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Char('q') | Key::Esc | Key::Ctrl('c') => InputCmd::Exit,
            Key::Char('p') | Key::Char(' ') => InputCmd::TogglePause,
            Key::Char('+') | Key::Char('=') => InputCmd::Accelerate,
            Key::Char('-') => InputCmd::Decelerate,
            _ => return None,
        };
        Some(command)
    }
}

/// reads keys on a background thread, the thread ends with stdin or the receiver.
pub fn spawn() -> mpsc::Receiver<InputCmd> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || input_loop(sender));
    receiver
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let key = match key {
            Ok(key) => key,
            Err(err) => {
                warn!(%err, "failed to read key");
                break;
            }
        };
        let Some(command) = InputCmd::from_key(key) else {
            continue;
        };
        if sender.send(command).is_err() {
            break;
        }
    }
}

#[test]
fn test_key_bindings() {
    assert_eq!(InputCmd::from_key(Key::Char('q')), Some(InputCmd::Exit));
    assert_eq!(InputCmd::from_key(Key::Ctrl('c')), Some(InputCmd::Exit));
    assert_eq!(InputCmd::from_key(Key::Char(' ')), Some(InputCmd::TogglePause));
    assert_eq!(InputCmd::from_key(Key::Char('+')), Some(InputCmd::Accelerate));
    assert_eq!(InputCmd::from_key(Key::Char('-')), Some(InputCmd::Decelerate));
    assert_eq!(InputCmd::from_key(Key::Up), None);
}

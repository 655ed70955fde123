//! Single-line prompt editor with history recall and command completion.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use vault_session::FocusMode;
use vault_terminal::{CommandRegistry, InputHistory};

/// What the main loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Input changed (or nothing happened); redraw.
    Edited,
    Submit(String),
    Focus(FocusMode),
    /// Re-read the snapshot file.
    Reload,
    Quit,
}

/// Editable input line. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Default)]
pub struct Prompt {
    input: String,
    cursor: usize,
    history: InputHistory,
}

impl Prompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor position in characters, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.input[..self.cursor].chars().count()
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.input.len();
    }

    fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) {
        if let Some((prev, _)) = self.input[..self.cursor].char_indices().last() {
            self.input.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    fn delete(&mut self) {
        if let Some(ch) = self.input[self.cursor..].chars().next() {
            self.input.drain(self.cursor..self.cursor + ch.len_utf8());
        }
    }

    fn move_left(&mut self) {
        if let Some((prev, _)) = self.input[..self.cursor].char_indices().last() {
            self.cursor = prev;
        }
    }

    fn move_right(&mut self) {
        if let Some(ch) = self.input[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Complete the command token. A unique match gets a trailing space;
    /// several matches extend to their longest common prefix.
    fn complete(&mut self, registry: &CommandRegistry) {
        if self.input.contains(char::is_whitespace) {
            return;
        }
        let matches = registry.completions(&self.input);
        match matches.as_slice() {
            [] => {},
            [only] => {
                let text = format!("{only} ");
                self.set_input(&text);
            },
            [first, rest @ ..] => {
                let common = rest.iter().fold(first.len(), |len, m| {
                    first
                        .bytes()
                        .zip(m.bytes())
                        .take(len)
                        .take_while(|(a, b)| a == b)
                        .count()
                });
                if common >= self.input.len() {
                    let text = first[..common].to_string();
                    self.set_input(&text);
                }
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> PromptAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => return PromptAction::Quit,
                KeyCode::Char('u') => self.set_input(""),
                _ => {},
            }
            return PromptAction::Edited;
        }

        match key.code {
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.cursor = 0;
                self.history.record(&line);
                return PromptAction::Submit(line);
            },
            KeyCode::Esc => return PromptAction::Quit,
            KeyCode::F(1) => return PromptAction::Focus(FocusMode::Terminal),
            KeyCode::F(2) => return PromptAction::Focus(FocusMode::Balanced),
            KeyCode::F(3) => return PromptAction::Focus(FocusMode::Visual),
            KeyCode::F(5) => return PromptAction::Reload,
            KeyCode::Up => {
                if let Some(line) = self.history.recall_previous() {
                    let line = line.to_string();
                    self.set_input(&line);
                }
            },
            KeyCode::Down => {
                if let Some(line) = self.history.recall_next() {
                    let line = line.to_string();
                    self.set_input(&line);
                }
            },
            KeyCode::Tab => self.complete(registry),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.len(),
            KeyCode::Char(c) => self.insert_char(c),
            _ => {},
        }
        PromptAction::Edited
    }
}

use crate::keypad::{self, Key};
use crate::session::SessionState;

use std::fmt::Write;

pub const TITLE: &str = "Compact Calculator";

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub keypad: bool,
    /// Show operator keys as symbolic icons instead of their ASCII labels.
    pub icons: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self{keypad: true, icons: true}
    }
}

fn key_face(key: Option<Key>, icons: bool) -> String {
    match key {
        None => String::new(),
        Some(key) if icons && !key.icon().is_empty() => key.icon().into(),
        Some(key) => key.label().into(),
    }
}

fn render_keypad(out: &mut String, icons: bool) {
    for row in keypad::layout() {
        let faces: Vec<String> = row
            .iter()
            .map(|key| format!("[{:^3}]", key_face(*key, icons)))
            .collect();
        out.push_str(faces.join(" ").trim_end());
        out.push('\n');
    }
}

/// Draws the whole screen for the current state.
///
/// The result banner only appears once a Calculate has stored a result.
pub fn render(state: &SessionState, options: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.len()));
    out.push('\n');

    if options.keypad {
        render_keypad(&mut out, options.icons);
    }

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Enter your expression: {}", state.expression);
    out.push_str("[ Calculate ]\n");
    if let Some(result) = &state.result {
        let _ = writeln!(out, "Result: {}", result);
    }
    out
}

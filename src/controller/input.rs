/// Platform-agnostic keyboard command mapping

/// Everything a key press can ask of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Launch,
    Reset,
    ToggleCamera,
    ToggleSmoke,
    ToggleNight,
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    Quit,
}

/// Key mapping configuration. Keys are matched case-sensitively.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub launch: String,
    pub reset: String,
    pub toggle_camera: String,
    pub toggle_smoke: String,
    pub toggle_night: String,
    pub zoom_in: Vec<String>,
    pub zoom_out: Vec<String>,
    pub pan_left: String,
    pub pan_right: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            launch: "l".to_string(),
            reset: "r".to_string(),
            toggle_camera: "c".to_string(),
            toggle_smoke: "s".to_string(),
            toggle_night: "t".to_string(),
            zoom_in: vec!["w".to_string(), "+".to_string()],
            zoom_out: vec!["x".to_string(), "-".to_string()],
            pan_left: "a".to_string(),
            pan_right: "d".to_string(),
            quit: "q".to_string(),
        }
    }
}

/// Translates typed keys into commands
#[derive(Debug, Clone)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn command_for(&self, key: &str) -> Option<Command> {
        let b = &self.bindings;
        if key == b.launch {
            Some(Command::Launch)
        } else if key == b.reset {
            Some(Command::Reset)
        } else if key == b.toggle_camera {
            Some(Command::ToggleCamera)
        } else if key == b.toggle_smoke {
            Some(Command::ToggleSmoke)
        } else if key == b.toggle_night {
            Some(Command::ToggleNight)
        } else if b.zoom_in.iter().any(|k| k == key) {
            Some(Command::ZoomIn)
        } else if b.zoom_out.iter().any(|k| k == key) {
            Some(Command::ZoomOut)
        } else if key == b.pan_left {
            Some(Command::PanLeft)
        } else if key == b.pan_right {
            Some(Command::PanRight)
        } else if key == b.quit {
            Some(Command::Quit)
        } else {
            None
        }
    }

    /// One line per binding, for the help overlay.
    pub fn help_lines(&self) -> Vec<String> {
        let b = &self.bindings;
        vec![
            format!("{} - Launch", b.launch),
            format!("{} - Reset", b.reset),
            format!("{} - Camera mode", b.toggle_camera),
            format!("{} - Smoke", b.toggle_smoke),
            format!("{} - Day/Night", b.toggle_night),
            format!("{} - Zoom in", b.zoom_in.join(" / ")),
            format!("{} - Zoom out", b.zoom_out.join(" / ")),
            format!("{} / {} - Pan", b.pan_left, b.pan_right),
            format!("{} - Quit", b.quit),
        ]
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

pub mod native {
    use winit::event::{ElementState, KeyEvent};
    use winit::keyboard::Key;

    /// The typed character of a key press, or `None` for releases and
    /// non-character keys.
    pub fn pressed_character(event: &KeyEvent) -> Option<&str> {
        if event.state != ElementState::Pressed {
            return None;
        }
        match &event.logical_key {
            Key::Character(c) => Some(c.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_every_key() {
        let input = InputProcessor::default();
        let expected = [
            ("l", Command::Launch),
            ("r", Command::Reset),
            ("c", Command::ToggleCamera),
            ("s", Command::ToggleSmoke),
            ("t", Command::ToggleNight),
            ("w", Command::ZoomIn),
            ("+", Command::ZoomIn),
            ("x", Command::ZoomOut),
            ("-", Command::ZoomOut),
            ("a", Command::PanLeft),
            ("d", Command::PanRight),
            ("q", Command::Quit),
        ];
        for (key, command) in expected {
            assert_eq!(input.command_for(key), Some(command), "key {key:?}");
        }
    }

    #[test]
    fn keys_are_case_sensitive() {
        let input = InputProcessor::default();
        assert_eq!(input.command_for("L"), None);
        assert_eq!(input.command_for("Q"), None);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let input = InputProcessor::default();
        for key in ["z", "1", " ", "Escape", ""] {
            assert_eq!(input.command_for(key), None);
        }
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let bindings = KeyBindings {
            launch: "g".to_string(),
            ..KeyBindings::default()
        };
        let input = InputProcessor::new(bindings);
        assert_eq!(input.command_for("g"), Some(Command::Launch));
        assert_eq!(input.command_for("l"), None);
    }

    #[test]
    fn help_lists_all_bindings() {
        let lines = InputProcessor::default().help_lines();
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().any(|l| l == "w / + - Zoom in"));
    }
}

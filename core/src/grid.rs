use crate::gesture::activation_key;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridAction {
    Activate,
    Focus(usize),
    /// Arrow key at the edge of the grid: swallow the key, keep focus.
    Stay,
    Ignore,
}

impl GridAction {
    pub fn prevents_default(self) -> bool {
        !matches!(self, GridAction::Ignore)
    }
}

pub fn grid_key_action(key: &str, index: usize, len: usize) -> GridAction {
    if index >= len {
        return GridAction::Ignore;
    }
    if activation_key(key) {
        return GridAction::Activate;
    }
    match key {
        "ArrowRight" if index + 1 < len => GridAction::Focus(index + 1),
        "ArrowLeft" if index > 0 => GridAction::Focus(index - 1),
        "ArrowRight" | "ArrowLeft" => GridAction::Stay,
        _ => GridAction::Ignore,
    }
}

pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub const MENU_PREFIX: &str = "dropdown-";

/// Where a click landed relative to the row action menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    InsideActionsMenu,
    Elsewhere,
}

/// Open/closed state of the per-row action menus. At most one is open, and
/// the open menu's row is the only row marked active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionMenus {
    rows: usize,
    open: Option<usize>,
}

impl ActionMenus {
    pub fn new(rows: usize) -> Self {
        Self { rows, open: None }
    }

    pub fn menu_id(row: usize) -> String {
        format!("{MENU_PREFIX}{row}")
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn is_open(&self, row: usize) -> bool {
        self.open == Some(row)
    }

    pub fn is_row_active(&self, row: usize) -> bool {
        self.is_open(row)
    }

    pub fn open_menu(&self) -> Option<usize> {
        self.open
    }

    /// Accepts `dropdown-3` or just `3`.
    pub fn toggle(&mut self, id: &str) {
        let target = resolve(id).filter(|row| *row < self.rows);
        self.open = match (target, self.open) {
            (Some(row), Some(open)) if row == open => None,
            (Some(row), _) => Some(row),
            (None, _) => None,
        };
    }

    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.close_all();
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}

fn resolve(id: &str) -> Option<usize> {
    id.strip_prefix(MENU_PREFIX).unwrap_or(id).parse().ok()
}

// Slide-out menu state machine and the layout each state maps to.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Where a click landed relative to the menu widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuClick {
    Toggle,
    InsidePanel,
    Outside,
}

impl MenuClick {
    pub fn classify(in_toggle: bool, in_panel: bool) -> Self {
        if in_toggle {
            MenuClick::Toggle
        } else if in_panel {
            MenuClick::InsidePanel
        } else {
            MenuClick::Outside
        }
    }
}

/// Style values written for one menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub panel_left: &'static str,
    pub icon_display: &'static str,
    pub back_button_left: &'static str,
}

pub const OPEN_LAYOUT: MenuLayout = MenuLayout {
    panel_left: "0",
    icon_display: "none",
    back_button_left: "24vw",
};

pub const CLOSED_LAYOUT: MenuLayout = MenuLayout {
    panel_left: "-25vw",
    icon_display: "block",
    back_button_left: "-5vw",
};

impl MenuState {
    /// The toggle button's `active` class is the source of truth.
    #[inline]
    pub fn from_active(active: bool) -> Self {
        if active {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn next(self, click: MenuClick) -> Self {
        match (self, click) {
            (MenuState::Closed, MenuClick::Toggle) => MenuState::Open,
            (MenuState::Open, MenuClick::Toggle) => MenuState::Closed,
            (MenuState::Open, MenuClick::Outside) => MenuState::Closed,
            (state, _) => state,
        }
    }

    pub fn layout(self) -> MenuLayout {
        match self {
            MenuState::Open => OPEN_LAYOUT,
            MenuState::Closed => CLOSED_LAYOUT,
        }
    }
}

use std::rc::Rc;

use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPosition {
    Top,
    Scrolled,
}

impl ScrollPosition {
    /// Only the current offset matters; NaN counts as the top of the page.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollPosition::Scrolled
        } else {
            ScrollPosition::Top
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuVisibility {
    Closed,
    Open,
}

impl MenuVisibility {
    pub fn toggled(self) -> Self {
        match self {
            MenuVisibility::Closed => MenuVisibility::Open,
            MenuVisibility::Open => MenuVisibility::Closed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    /// A scroll sample carrying the current vertical offset.
    Scrolled(f64),
    ToggleMenu,
    LinkActivated,
}

/// The navigation bar's two independent axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavState {
    pub position: ScrollPosition,
    pub menu: MenuVisibility,
    threshold: f64,
}

impl Default for NavState {
    fn default() -> Self {
        Self::with_threshold(SCROLL_THRESHOLD_PX)
    }
}

impl NavState {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            position: ScrollPosition::Top,
            menu: MenuVisibility::Closed,
            threshold,
        }
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(offset) => Self {
                position: ScrollPosition::from_offset(offset, self.threshold),
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu: self.menu.toggled(),
                ..self
            },
            NavAction::LinkActivated => Self {
                menu: MenuVisibility::Closed,
                ..self
            },
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.position == ScrollPosition::Scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuVisibility::Open
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_STATES: [(ScrollPosition, MenuVisibility); 4] = [
        (ScrollPosition::Top, MenuVisibility::Closed),
        (ScrollPosition::Top, MenuVisibility::Open),
        (ScrollPosition::Scrolled, MenuVisibility::Closed),
        (ScrollPosition::Scrolled, MenuVisibility::Open),
    ];

    fn state(position: ScrollPosition, menu: MenuVisibility) -> NavState {
        NavState { position, menu, ..NavState::default() }
    }

    #[test]
    fn starts_at_top_with_menu_closed() {
        let initial = NavState::default();
        assert_eq!(initial.position, ScrollPosition::Top);
        assert_eq!(initial.menu, MenuVisibility::Closed);
    }

    #[test]
    fn scrolled_only_past_threshold() {
        let cases = [
            (0.0, ScrollPosition::Top),
            (49.0, ScrollPosition::Top),
            (50.0, ScrollPosition::Top),
            (51.0, ScrollPosition::Scrolled),
            (1000.0, ScrollPosition::Scrolled),
        ];
        for (offset, expected) in cases {
            let next = NavState::default().apply(NavAction::Scrolled(offset));
            assert_eq!(next.position, expected, "offset {}", offset);
        }
    }

    #[test]
    fn position_follows_current_offset_only() {
        let samples = [10.0, 80.0, 51.0, 50.0, 300.0, 0.0];
        let expected = [
            ScrollPosition::Top,
            ScrollPosition::Scrolled,
            ScrollPosition::Scrolled,
            ScrollPosition::Top,
            ScrollPosition::Scrolled,
            ScrollPosition::Top,
        ];
        let mut current = NavState::default();
        for (offset, want) in samples.into_iter().zip(expected) {
            current = current.apply(NavAction::Scrolled(offset));
            assert_eq!(current.position, want);
        }
    }

    #[test]
    fn nan_offset_counts_as_top() {
        let scrolled = state(ScrollPosition::Scrolled, MenuVisibility::Closed);
        assert_eq!(scrolled.apply(NavAction::Scrolled(f64::NAN)).position, ScrollPosition::Top);
    }

    #[test]
    fn custom_threshold() {
        let nav = NavState::with_threshold(600.0);
        assert!(!nav.apply(NavAction::Scrolled(599.0)).is_scrolled());
        assert!(nav.apply(NavAction::Scrolled(601.0)).is_scrolled());
    }

    #[test]
    fn double_toggle_restores_menu() {
        for (position, menu) in ALL_STATES {
            let start = state(position, menu);
            let once = start.apply(NavAction::ToggleMenu);
            assert_ne!(once.menu, start.menu);
            assert_eq!(once.apply(NavAction::ToggleMenu), start);
        }
    }

    #[test]
    fn link_activation_always_closes_menu() {
        for (position, menu) in ALL_STATES {
            let next = state(position, menu).apply(NavAction::LinkActivated);
            assert_eq!(next.menu, MenuVisibility::Closed);
            assert_eq!(next.position, position);
        }
    }

    #[test]
    fn scroll_samples_leave_menu_alone() {
        for (position, menu) in ALL_STATES {
            let next = state(position, menu).apply(NavAction::Scrolled(200.0));
            assert_eq!(next.menu, menu);
            assert!(next.is_scrolled());
        }
    }

    #[test]
    fn reducer_reuses_state_when_nothing_changes() {
        let current = Rc::new(NavState::default());
        let next = Rc::clone(&current).reduce(NavAction::Scrolled(20.0));
        assert!(Rc::ptr_eq(&current, &next));

        let moved = Rc::clone(&current).reduce(NavAction::Scrolled(70.0));
        assert!(!Rc::ptr_eq(&current, &moved));
        assert!(moved.is_scrolled());
    }
}

use enum_iterator::{all, Sequence};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum Screen {
    Pairing,
    Dashboard,
    Ecg,
    SpO2,
    BloodPressure,
    Temperature,
    History,
}

impl Screen {
    pub fn all() -> Vec<Screen> {
        all::<Screen>().collect::<Vec<_>>()
    }

    pub fn is_detail(self) -> bool {
        !matches!(self, Screen::Pairing | Screen::Dashboard)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result = match self {
            Screen::Pairing => "pairing",
            Screen::Dashboard => "dashboard",
            Screen::Ecg => "ecg",
            Screen::SpO2 => "spo2",
            Screen::BloodPressure => "bp",
            Screen::Temperature => "temp",
            Screen::History => "history",
        };

        write!(f, "{}", result)
    }
}

// The single owner of the current-screen value. Screens receive intents
// (messages), never a mutable handle; all mutation funnels through here.
#[derive(Debug)]
pub struct Navigation {
    current: Screen,
}

impl Navigation {
    pub fn new() -> Self {
        Navigation { current: Screen::Pairing }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn navigate(&mut self, target: Screen) {
        debug!("Navigating {} -> {}", self.current, target);
        self.current = target;
    }

    // Every detail screen exposes a single back control, and it always
    // lands on the dashboard.
    pub fn go_back(&mut self) {
        self.navigate(Screen::Dashboard);
    }

    // The crown: force-transition to pairing from any state.
    pub fn reset(&mut self) {
        self.navigate(Screen::Pairing);
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Navigation::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_pairing() {
        assert_eq!(Navigation::new().current(), Screen::Pairing);
    }

    #[test]
    fn navigate_sets_every_target() {
        for target in Screen::all() {
            let mut nav = Navigation::new();
            nav.navigate(target);
            assert_eq!(nav.current(), target);
        }
    }

    #[test]
    fn back_returns_to_dashboard_from_every_detail_screen() {
        for screen in Screen::all().into_iter().filter(|s| s.is_detail()) {
            let mut nav = Navigation::new();
            nav.navigate(screen);
            nav.go_back();
            assert_eq!(nav.current(), Screen::Dashboard);
        }
    }

    #[test]
    fn reset_reaches_pairing_from_every_screen() {
        for screen in Screen::all() {
            let mut nav = Navigation::new();
            nav.navigate(screen);
            nav.reset();
            assert_eq!(nav.current(), Screen::Pairing);
        }
    }

    #[test]
    fn screen_names_are_distinct() {
        let mut names = Screen::all()
            .into_iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Screen::all().len());
    }
}

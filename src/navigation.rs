//! Header menu and the route table of the admin area.

/// Views reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    TranslationList,
}

/// Path → view. Only the translator lives in this program.
pub const ROUTES: &[(&str, View)] = &[("admin/traductor", View::TranslationList)];

pub fn resolve(path: &str) -> Option<View> {
    let path = path.trim_matches('/');
    ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, view)| *view)
}

/// The two collapsible submenus of the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderMenu {
    admin_open: bool,
    loans_open: bool,
}

impl HeaderMenu {
    pub fn toggle_admin(&mut self) -> bool {
        self.admin_open = !self.admin_open;
        self.admin_open
    }

    pub fn toggle_loans(&mut self) -> bool {
        self.loans_open = !self.loans_open;
        self.loans_open
    }

    pub fn admin_open(&self) -> bool {
        self.admin_open
    }

    pub fn loans_open(&self) -> bool {
        self.loans_open
    }
}

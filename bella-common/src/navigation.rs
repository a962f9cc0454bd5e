//! Navigation targets and active-link resolution

use serde::Serialize;

/// A page reachable from the navigation bar
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavTarget {
    pub path: &'static str,
    pub label: &'static str,
}

pub const HOME: NavTarget = NavTarget { path: "/", label: "Inicio" };
pub const MENU: NavTarget = NavTarget { path: "/menu", label: "Menú" };
pub const CONTACT: NavTarget = NavTarget { path: "/contact", label: "Contacto" };

/// Navigation bar entries in display order
pub const NAV_TARGETS: [NavTarget; 3] = [HOME, MENU, CONTACT];

/// Label of the reservation call to action, which always points at [`CONTACT`]
pub const RESERVE_LABEL: &str = "Reservar Mesa";

/// A navigation target resolved against the current location
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub target: NavTarget,
    pub active: bool,
}

impl NavLink {
    pub fn path(&self) -> &'static str {
        self.target.path
    }

    pub fn label(&self) -> &'static str {
        self.target.label
    }

    /// CSS classes for the rendered link
    pub fn class(&self) -> &'static str {
        if self.active {
            "navbar-link active"
        } else {
            "navbar-link"
        }
    }
}

impl NavTarget {
    /// Exact match only; "/menu/" or "/menu/x" do not activate "/menu"
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Resolve every navigation target against `current_path`
pub fn nav_links(current_path: &str) -> Vec<NavLink> {
    NAV_TARGETS
        .iter()
        .map(|target| NavLink {
            target: *target,
            active: target.is_active(current_path),
        })
        .collect()
}

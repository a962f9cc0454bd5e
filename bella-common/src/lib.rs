//! Common types and state shared between bella-ui and bella-server

pub mod content;
pub mod menu;
pub mod navigation;
pub mod reservation;
pub mod schedule;

use serde::{Deserialize, Serialize};

pub use menu::{Category, CategoryFilter, MenuItem, MenuListing, CATALOG};
pub use navigation::{NavLink, NavTarget, NAV_TARGETS};
pub use reservation::{
    FormField, FormStatus, Reservation, ReservationFields, ReservationForm, SubmitOutcome,
    STATUS_CLEAR_DELAY,
};
pub use schedule::{PendingClear, TimerHandle};

/// Static image shipped with the site
///
/// The UI resolves these to URLs; everything else treats them as opaque.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    Logo,
    Pizza,
    Pasta,
    Lasana,
    Vino,
}

impl Asset {
    /// File name under the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Asset::Logo => "logo.png",
            Asset::Pizza => "pizza.avif",
            Asset::Pasta => "pasta.avif",
            Asset::Lasana => "lasana.jpg",
            Asset::Vino => "vino.jpg",
        }
    }
}

/// Domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, Error>;

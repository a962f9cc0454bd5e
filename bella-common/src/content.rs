//! Static copy for the home and contact pages

use serde::Serialize;

use crate::Asset;

pub const RESTAURANT_NAME: &str = "Bella Italia";
pub const FOUNDED: u16 = 1985;

/// Dish highlighted on the home page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeaturedDish {
    pub id: u32,
    pub name: &'static str,
    pub image: Asset,
    pub description: &'static str,
}

pub static FEATURED_DISHES: [FeaturedDish; 4] = [
    FeaturedDish {
        id: 1,
        name: "Pizza Margherita",
        image: Asset::Pizza,
        description: "Pizza clásica con tomate, mozzarella fresca y albahaca",
    },
    FeaturedDish {
        id: 2,
        name: "Pasta Carbonara",
        image: Asset::Pasta,
        description: "Pasta fresca con salsa carbonara tradicional",
    },
    FeaturedDish {
        id: 3,
        name: "Lasaña Bolognesa",
        image: Asset::Lasana,
        description: "Capas de pasta con ragú de carne y bechamel",
    },
    FeaturedDish {
        id: 4,
        name: "Vino Toscano",
        image: Asset::Vino,
        description: "Selección de los mejores vinos italianos",
    },
];

pub const ABOUT_FEATURES: [&str; 4] = [
    "Ingredientes frescos y de calidad premium",
    "Recetas tradicionales familiares",
    "Ambiente acogedor y elegante",
    "Servicio excepcional",
];

/// One block of the contact information column
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct InfoBlock {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const ADDRESS: InfoBlock = InfoBlock {
    title: "Dirección",
    lines: &["Calle Italia, 123", "28001 Madrid, España"],
};

pub const PHONES: InfoBlock = InfoBlock {
    title: "Teléfono",
    lines: &["+34 91 123 45 67", "+34 600 12 34 56"],
};

pub const EMAILS: InfoBlock = InfoBlock {
    title: "Email",
    lines: &["info@bellaitalia.es", "reservas@bellaitalia.es"],
};

pub const CONTACT_BLOCKS: [InfoBlock; 3] = [ADDRESS, PHONES, EMAILS];

/// Opening hours for a group of days
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const OPENING_HOURS: [OpeningHours; 2] = [
    OpeningHours {
        days: "Lunes a Viernes:",
        hours: "13:00 - 16:00 / 20:00 - 23:30",
    },
    OpeningHours {
        days: "Sábados y Domingos:",
        hours: "13:00 - 23:30",
    },
];

pub const SOCIAL_LINKS: [&str; 3] = ["Facebook", "Instagram", "Twitter"];

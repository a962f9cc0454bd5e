//! Menu catalog and category filtering

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Asset;

/// Menu section a dish belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pizzas,
    Pastas,
    Bebidas,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pizzas => "pizzas",
            Category::Pastas => "pastas",
            Category::Bebidas => "bebidas",
        }
    }
}

/// Active selection of the menu listing; `All` disables filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Pizzas,
    Pastas,
    Bebidas,
}

impl CategoryFilter {
    /// Filter buttons in display order
    pub const OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Pizzas,
        CategoryFilter::Pastas,
        CategoryFilter::Bebidas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Pizzas => "pizzas",
            CategoryFilter::Pastas => "pastas",
            CategoryFilter::Bebidas => "bebidas",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Todos",
            CategoryFilter::Pizzas => "Pizzas",
            CategoryFilter::Pastas => "Pastas",
            CategoryFilter::Bebidas => "Bebidas",
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        *self == CategoryFilter::All || *self == CategoryFilter::from(category)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Pizzas => CategoryFilter::Pizzas,
            Category::Pastas => CategoryFilter::Pastas,
            Category::Bebidas => CategoryFilter::Bebidas,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dish or drink on the menu
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MenuItem {
    pub id: u32,
    pub category: Category,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str, // euros, two decimals
    pub image: Asset,
}

impl MenuItem {
    /// Price as shown on the menu card, e.g. "12.90€"
    pub fn display_price(&self) -> String {
        format!("{}€", self.price)
    }
}

/// The full menu, in display order
pub static CATALOG: [MenuItem; 12] = [
    MenuItem {
        id: 1,
        category: Category::Pizzas,
        name: "Pizza Margherita",
        description: "Tomate San Marzano, mozzarella fresca, albahaca y aceite de oliva",
        price: "12.90",
        image: Asset::Pizza,
    },
    MenuItem {
        id: 2,
        category: Category::Pizzas,
        name: "Pizza Quattro Formaggi",
        description: "Mozzarella, gorgonzola, parmesano y queso de cabra",
        price: "14.90",
        image: Asset::Pizza,
    },
    MenuItem {
        id: 3,
        category: Category::Pizzas,
        name: "Pizza Prosciutto",
        description: "Tomate, mozzarella, jamón de Parma, rúcula y parmesano",
        price: "15.90",
        image: Asset::Pizza,
    },
    MenuItem {
        id: 4,
        category: Category::Pastas,
        name: "Spaghetti Carbonara",
        description: "Pasta fresca, huevo, panceta, pecorino romano y pimienta negra",
        price: "13.90",
        image: Asset::Pasta,
    },
    MenuItem {
        id: 5,
        category: Category::Pastas,
        name: "Fettuccine Alfredo",
        description: "Pasta fresca, mantequilla, crema, parmesano y nuez moscada",
        price: "12.90",
        image: Asset::Pasta,
    },
    MenuItem {
        id: 6,
        category: Category::Pastas,
        name: "Penne Arrabiata",
        description: "Pasta, tomate, ajo, guindilla, perejil y aceite de oliva",
        price: "11.90",
        image: Asset::Pasta,
    },
    MenuItem {
        id: 7,
        category: Category::Pastas,
        name: "Lasaña Bolognesa",
        description: "Capas de pasta, ragú de carne, bechamel y parmesano",
        price: "14.90",
        image: Asset::Lasana,
    },
    MenuItem {
        id: 8,
        category: Category::Pastas,
        name: "Ravioli de Ricotta",
        description: "Ravioli rellenos de ricotta y espinacas con salsa de tomate",
        price: "13.90",
        image: Asset::Pasta,
    },
    MenuItem {
        id: 9,
        category: Category::Bebidas,
        name: "Chianti Classico",
        description: "Vino tinto de la región de Toscana",
        price: "24.90",
        image: Asset::Vino,
    },
    MenuItem {
        id: 10,
        category: Category::Bebidas,
        name: "Prosecco",
        description: "Vino espumoso del Véneto",
        price: "22.90",
        image: Asset::Vino,
    },
    MenuItem {
        id: 11,
        category: Category::Bebidas,
        name: "Limoncello",
        description: "Licor de limón artesanal",
        price: "6.90",
        image: Asset::Vino,
    },
    MenuItem {
        id: 12,
        category: Category::Bebidas,
        name: "Espresso",
        description: "Café italiano auténtico",
        price: "2.50",
        image: Asset::Vino,
    },
];

/// State of the menu page: the catalog plus the active category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuListing {
    catalog: &'static [MenuItem],
    active: CategoryFilter,
}

impl Default for MenuListing {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuListing {
    pub fn new() -> Self {
        Self {
            catalog: &CATALOG,
            active: CategoryFilter::All,
        }
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        if self.active != filter {
            tracing::debug!(from = %self.active, to = %filter, "menu category changed");
        }
        self.active = filter;
    }

    pub fn is_active(&self, filter: CategoryFilter) -> bool {
        self.active == filter
    }

    /// Catalog entries matching the active category, in catalog order
    pub fn visible_items(&self) -> Vec<&'static MenuItem> {
        let filter = self.active;
        self.catalog
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&MenuItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.name).collect()
    }

    #[test]
    fn test_all_returns_full_catalog_in_order() {
        let listing = MenuListing::new();
        assert!(listing.is_active(CategoryFilter::All));

        let items = listing.visible_items();
        assert_eq!(items.len(), CATALOG.len());
        let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_pizzas_filter() {
        let mut listing = MenuListing::new();
        listing.select_category(CategoryFilter::Pizzas);

        let items = listing.visible_items();
        assert_eq!(
            names(&items),
            vec!["Pizza Margherita", "Pizza Quattro Formaggi", "Pizza Prosciutto"]
        );
    }

    #[test]
    fn test_filters_partition_catalog() {
        let mut listing = MenuListing::new();
        let mut total = 0;

        for filter in [CategoryFilter::Pizzas, CategoryFilter::Pastas, CategoryFilter::Bebidas] {
            listing.select_category(filter);
            let items = listing.visible_items();
            assert!(items.iter().all(|item| filter.matches(item.category)));
            assert!(items.windows(2).all(|pair| pair[0].id < pair[1].id));
            total += items.len();
        }

        assert_eq!(total, CATALOG.len());
    }

    #[test]
    fn test_pastas_and_bebidas_counts() {
        let mut listing = MenuListing::new();
        listing.select_category(CategoryFilter::Pastas);
        assert_eq!(listing.visible_items().len(), 5);
        assert_eq!(listing.visible_items()[3].name, "Lasaña Bolognesa");

        listing.select_category(CategoryFilter::Bebidas);
        assert_eq!(
            names(&listing.visible_items()),
            vec!["Chianti Classico", "Prosecco", "Limoncello", "Espresso"]
        );
    }

    #[test]
    fn test_select_back_to_all() {
        let mut listing = MenuListing::new();
        listing.select_category(CategoryFilter::Bebidas);
        assert!(listing.is_active(CategoryFilter::Bebidas));
        assert!(!listing.is_active(CategoryFilter::All));

        listing.select_category(CategoryFilter::All);
        assert_eq!(listing.visible_items().len(), 12);
    }

    #[test]
    fn test_filter_matching() {
        assert!(CategoryFilter::All.matches(Category::Bebidas));
        assert!(CategoryFilter::Pastas.matches(Category::Pastas));
        assert!(!CategoryFilter::Pastas.matches(Category::Pizzas));

        for category in [Category::Pizzas, Category::Pastas, Category::Bebidas] {
            let filter = CategoryFilter::from(category);
            assert_eq!(filter.as_str(), category.as_str());
        }
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<&str> = CategoryFilter::OPTIONS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Todos", "Pizzas", "Pastas", "Bebidas"]);
    }

    #[test]
    fn test_display_price() {
        assert_eq!(CATALOG[0].display_price(), "12.90€");
        assert_eq!(CATALOG[11].display_price(), "2.50€");
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<u32> = CATALOG.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_menu_item_serialization() {
        let json = serde_json::to_value(&CATALOG[6]).unwrap();
        assert_eq!(json["category"], "pastas");
        assert_eq!(json["image"], "lasana");
        assert_eq!(json["price"], "14.90");
    }
}

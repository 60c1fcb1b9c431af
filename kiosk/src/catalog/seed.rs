//! Built-in catalog loaded at startup

use rust_decimal::Decimal;
use shared::models::{Category, MenuItem};

struct SeedItem {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    /// Price in centavos
    cents: i64,
    image: &'static str,
    category: Category,
    popular: bool,
}

const SEED: &[SeedItem] = &[
    // Burgers
    SeedItem {
        id: "burger-1",
        name: "Smash Clássico",
        description: "Blend bovino 150g, queijo cheddar, cebola caramelizada, picles e molho especial",
        cents: 3290,
        image: "burger-classico.jpg",
        category: Category::Burgers,
        popular: true,
    },
    SeedItem {
        id: "burger-2",
        name: "Bacon Monster",
        description: "Duplo smash 300g, bacon crocante, queijo cheddar duplo, cebola roxa e BBQ",
        cents: 4590,
        image: "burger-bacon.jpg",
        category: Category::Burgers,
        popular: true,
    },
    SeedItem {
        id: "burger-3",
        name: "Veggie Burger",
        description: "Hambúrguer de grão de bico, queijo muçarela, alface, tomate e maionese verde",
        cents: 2990,
        image: "burger-classico.jpg",
        category: Category::Burgers,
        popular: false,
    },
    SeedItem {
        id: "burger-4",
        name: "Texas BBQ",
        description: "Smash 180g, onion rings, bacon, cheddar e molho barbecue defumado",
        cents: 3990,
        image: "burger-bacon.jpg",
        category: Category::Burgers,
        popular: false,
    },
    SeedItem {
        id: "burger-5",
        name: "Cheese Salada",
        description: "Smash 150g, queijo prato, alface americana, tomate e maionese da casa",
        cents: 2890,
        image: "burger-classico.jpg",
        category: Category::Burgers,
        popular: false,
    },
    // Sides
    SeedItem {
        id: "side-1",
        name: "Batata Frita",
        description: "Porção generosa de batatas fritas crocantes com sal e orégano",
        cents: 1890,
        image: "batata-frita.jpg",
        category: Category::Sides,
        popular: true,
    },
    SeedItem {
        id: "side-2",
        name: "Onion Rings",
        description: "Anéis de cebola empanados e fritos, acompanha molho especial",
        cents: 2290,
        image: "batata-frita.jpg",
        category: Category::Sides,
        popular: false,
    },
    SeedItem {
        id: "side-3",
        name: "Batata Cheddar Bacon",
        description: "Batata frita coberta com cheddar cremoso e bacon crocante",
        cents: 2890,
        image: "batata-frita.jpg",
        category: Category::Sides,
        popular: false,
    },
    // Drinks
    SeedItem {
        id: "drink-1",
        name: "Refrigerante Lata",
        description: "Coca-Cola, Guaraná ou Sprite - 350ml",
        cents: 790,
        image: "milkshake.jpg",
        category: Category::Drinks,
        popular: false,
    },
    SeedItem {
        id: "drink-2",
        name: "Milkshake",
        description: "Chocolate, Morango ou Ovomaltine - 400ml",
        cents: 1990,
        image: "milkshake.jpg",
        category: Category::Drinks,
        popular: true,
    },
    SeedItem {
        id: "drink-3",
        name: "Suco Natural",
        description: "Laranja, Limão ou Maracujá - 300ml",
        cents: 1290,
        image: "milkshake.jpg",
        category: Category::Drinks,
        popular: false,
    },
    // Desserts
    SeedItem {
        id: "dessert-1",
        name: "Brownie com Sorvete",
        description: "Brownie quentinho com sorvete de creme e calda de chocolate",
        cents: 2490,
        image: "milkshake.jpg",
        category: Category::Desserts,
        popular: false,
    },
    SeedItem {
        id: "dessert-2",
        name: "Petit Gateau",
        description: "Bolinho de chocolate com recheio cremoso e sorvete de baunilha",
        cents: 2690,
        image: "milkshake.jpg",
        category: Category::Desserts,
        popular: false,
    },
];

/// Fresh copy of the built-in catalog
pub fn menu_items() -> Vec<MenuItem> {
    SEED.iter()
        .map(|s| MenuItem {
            id: s.id.to_string(),
            name: s.name.to_string(),
            description: s.description.to_string(),
            price: Decimal::new(s.cents, 2),
            image: s.image.to_string(),
            category: s.category,
            popular: s.popular.then_some(true),
        })
        .collect()
}

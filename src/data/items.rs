use crate::shared::*;

/// Populate the ItemRegistry with every item type in the game.
///
/// `sell_price` on a def is the baseline; owned instances can differ (caught
/// fish carry their rolled value, bought furniture resells at half price).
pub fn populate_items(registry: &mut ItemRegistry) {
    let items: Vec<ItemDef> = vec![
        ItemDef {
            id: "flower".into(),
            name: "Flower".into(),
            category: ItemCategory::Flower,
            sell_price: FLOWER_SELL_PRICE,
            buy_price: None,
            placeable: true,
            icon: "✿".into(),
        },
        ItemDef {
            id: "fish".into(),
            name: "Fish".into(),
            category: ItemCategory::Fish,
            sell_price: CATCH_VALUE_MIN,
            buy_price: None,
            placeable: false,
            icon: "🐟".into(),
        },
        ItemDef {
            id: "table".into(),
            name: "Table".into(),
            category: ItemCategory::Furniture,
            sell_price: 25,
            buy_price: Some(50),
            placeable: true,
            icon: "🪑".into(),
        },
        ItemDef {
            id: "chair".into(),
            name: "Chair".into(),
            category: ItemCategory::Furniture,
            sell_price: 15,
            buy_price: Some(30),
            placeable: true,
            icon: "🪑".into(),
        },
        ItemDef {
            id: "fishing_rod".into(),
            name: "Fishing Rod".into(),
            category: ItemCategory::Tool,
            sell_price: 5,
            buy_price: Some(10),
            placeable: false,
            icon: "🎣".into(),
        },
    ];

    for item in items {
        registry.items.insert(item.id.clone(), item);
    }
}

use crate::shared::*;

/// The trading post's fixed stock.
pub fn populate_shop(stock: &mut ShopStock) {
    stock.listings = vec![
        ShopListing {
            item_id: "table".into(),
            price: 50,
        },
        ShopListing {
            item_id: "chair".into(),
            price: 30,
        },
        ShopListing {
            item_id: "fishing_rod".into(),
            price: 10,
        },
    ];
}

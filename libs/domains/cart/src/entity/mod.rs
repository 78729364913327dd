//! Sea-ORM entities for `storefront.carts` and `storefront.cart_items`

pub mod cart;
pub mod cart_item;

//! Domain model for the e-commerce platform.
//!
//! Pure data contracts shared with the backend API. No behavior beyond small
//! read-only helpers.

pub mod common;
pub mod currency;
pub mod id;
pub mod order;
pub mod product;
pub mod status;
pub mod user;

pub use common::{
    ApiError, FilterOptions, PageInfo, PaginatedResponse, PaginationParams, PriceRange,
    SearchParams, SeoMetadata,
};
pub use currency::CurrencyCode;
pub use id::*;
pub use order::{Cart, CartItem, Order, OrderItem};
pub use product::{Category, Inventory, Product, ProductImage, ProductVariant, VariantOption};
pub use status::*;
pub use user::{Address, AuthUser, LoginCredentials, RegisterData, User};

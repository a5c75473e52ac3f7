//! Closet Store Common Library
//!
//! I/Oを持たないカタログ操作のコア。CLIやUIから共有される。

pub mod types;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod pagination;
pub mod query;

pub use types::{Item, PricingOption, SortBy};
pub use error::{Error, Result};
pub use filter::{FilterSpec, PriceRange};
pub use pagination::{paginate, Page, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use query::{load_filters, parse_query, save_filters, to_query};

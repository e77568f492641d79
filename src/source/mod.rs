// Fragment source boundary: the trait plus the live page fetcher.

pub mod fetcher;
pub mod traits;

pub use fetcher::GoogleFlightsFetcher;
pub use traits::{FragmentResult, FragmentSource};

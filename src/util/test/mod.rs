//! In-process fakes for the fetcher and persistence seams.

pub mod fetcher;

pub use fetcher::FakeFetcher;
pub use sink::RecordingSink;

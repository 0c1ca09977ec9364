mod nester;
pub mod orientation;
pub mod shelf;

#[doc(inline)]
pub use nester::ShelfNester;

#[doc(inline)]
pub use nester::nest;

mod group;
mod part;
mod placement;
mod sheet;
mod solution;
mod unit;

#[doc(inline)]
pub use part::PartSpec;

#[doc(inline)]
pub use part::Grain;

#[doc(inline)]
pub use part::EdgeBanding;

#[doc(inline)]
pub use unit::PlaceableUnit;

#[doc(inline)]
pub use unit::expand_units;

#[doc(inline)]
pub use sheet::SheetDims;

#[doc(inline)]
pub use sheet::StockSheet;

#[doc(inline)]
pub use sheet::SheetCatalog;

#[doc(inline)]
pub use group::GroupKey;

#[doc(inline)]
pub use group::MaterialGroup;

#[doc(inline)]
pub use group::group_units;

#[doc(inline)]
pub use placement::PlacedPart;

#[doc(inline)]
pub use solution::NestSolution;

#[doc(inline)]
pub use solution::NestingResult;

#[doc(inline)]
pub use solution::SheetStats;

pub(crate) use solution::overall_efficiency;

pub mod context;
pub mod hero;
pub mod region;
pub mod street;

pub use context::Context;
pub use hero::Hero;
pub use region::{Region, MatchMode, RegionCount, StreetDetail};
pub use street::{StreetRecord, Kind};

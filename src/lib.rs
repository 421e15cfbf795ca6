pub mod record;
pub mod sector;
pub mod store;
pub mod template;

pub use record::{load_fields, probe_water, WaterFields, NO_MATERIAL};
pub use sector::SectorIndex;
pub use store::{SectorStore, StoreError};
pub use template::{KNOWN_MATERIALS, WATER_BLOCK_TEMPLATE};

mod error;
pub use error::DictError;
pub use error::Result;

pub mod table;
pub use table::OccupancyStats;
pub use table::StringTable;

pub mod loader;

pub mod random;
pub use random::WordGenerator;

mod shell;
pub use shell::Shell;

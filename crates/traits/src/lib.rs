pub mod lookup;
pub mod monospace;
pub mod oracle;

pub use lookup::{LookupFallback, LookupOracle};
pub use monospace::MonospaceOracle;
pub use oracle::{Axis, Fragment, GeometryError, GeometryOracle, ROW_PROBE, measure_frame};

//! core model and pure processing stages for traffic-enforcement device datasets.
//!
//! rows published with an inconsistent, human-edited header are resolved against
//! lists of acceptable column names ([`schema`]), their cells coerced into numbers
//! ([`coerce`]), turned into point and section records ([`extract`]), and every
//! emitted coordinate is collected for viewport fitting ([`bounds`]). none of these
//! stages perform I/O or fail; bad input degrades into "no match", NaN, or a
//! rejected row.
pub mod bounds;
pub mod coerce;
pub mod extract;
pub mod model;
pub mod schema;

// Library exports for moneymatters
pub mod ants;
pub mod input;
pub mod logging;
pub mod union_find;
pub mod verify;

pub use union_find::{ForestError, UnionFind};
pub use verify::{verify, Total, Value, Verdict, VerifyError};

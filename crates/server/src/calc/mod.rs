//! Pure calculation engines. Every function here is deterministic and
//! side-effect free; the REST layer only wires them to HTTP.

pub mod arraigo;
pub mod deadline;
pub mod dosage;
pub mod liquidation;
pub mod prescription;

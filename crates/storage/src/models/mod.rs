mod scan;

pub use scan::{RiskProfile, Routine, Scan};

//! IFRS17 valuation: BEL, risk adjustment, CSM and technical provisions

mod engine;
mod provisions;

pub use engine::{bel, csm, risk_adjustment, ValuationEngine};
pub use provisions::{TechnicalProvisions, TechnicalProvisionsRow};

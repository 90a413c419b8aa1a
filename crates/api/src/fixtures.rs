//! Documentation Fixtures
//!
//! Worked examples and the state comparison table published with the model
//! artifact. The prices are pinned to one specific artifact version; they
//! are documentation, not correctness oracles, and are NOT recomputed from
//! whatever model happens to be loaded.

use feature_codec::StateCode;

/// Baseline inputs used by the worked examples and the comparison table
pub const BASELINE_BED: u32 = 2;
/// Baseline bath count
pub const BASELINE_BATH: u32 = 1;
/// Baseline lot size in acres
pub const BASELINE_ACRE_LOT: f64 = 10.0;
/// Baseline house size
pub const BASELINE_HOUSE_SIZE: f64 = 100.0;

/// A worked example pinned to one artifact version
#[derive(Debug, Clone, Copy)]
pub struct WorkedExample {
    pub state: StateCode,
    pub price: f64,
}

/// The two worked examples shipped with the original artifact
pub const WORKED_EXAMPLES: [WorkedExample; 2] = [
    WorkedExample {
        state: StateCode::Massachusetts,
        price: 47500.00,
    },
    WorkedExample {
        state: StateCode::Pennsylvania,
        price: 92451.63,
    },
];

/// Predicted price per state at the baseline inputs, pinned to the same
/// artifact version as the worked examples
pub const STATE_COMPARISON: [(StateCode, f64); StateCode::COUNT] = [
    (StateCode::Connecticut, 47951.38),
    (StateCode::Delaware, 47951.38),
    (StateCode::Georgia, 47500.00),
    (StateCode::Maine, 47500.00),
    (StateCode::Massachusetts, 47500.00),
    (StateCode::NewHampshire, 47500.00),
    (StateCode::NewJersey, 47500.00),
    (StateCode::NewYork, 24319.21),
    (StateCode::Pennsylvania, 92451.63),
    (StateCode::PuertoRico, 73509.03),
    (StateCode::RhodeIsland, 69314.51),
    (StateCode::SouthCarolina, 215057.88),
    (StateCode::Tennessee, 215057.88),
    (StateCode::Vermont, 238119.03),
    (StateCode::UsVirginIslands, 238119.03),
    (StateCode::Virginia, 238119.03),
    (StateCode::WestVirginia, 238119.03),
    (StateCode::Wyoming, 238119.03),
];

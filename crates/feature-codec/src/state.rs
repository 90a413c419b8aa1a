//! Categorical State Encoding

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 18 states/territories the model was trained on.
///
/// The discriminant is the categorical encoding baked into the trained
/// artifact. It must never be reassigned: any change invalidates every
/// prediction made against an existing model and requires retraining,
/// versioned together with the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateCode {
    Connecticut = 0,
    Delaware = 1,
    Georgia = 2,
    Maine = 3,
    Massachusetts = 4,
    NewHampshire = 5,
    NewJersey = 6,
    NewYork = 7,
    Pennsylvania = 8,
    PuertoRico = 9,
    RhodeIsland = 10,
    SouthCarolina = 11,
    Tennessee = 12,
    Vermont = 13,
    UsVirginIslands = 14,
    Virginia = 15,
    WestVirginia = 16,
    Wyoming = 17,
}

impl StateCode {
    /// Number of known states
    pub const COUNT: usize = 18;

    /// All states in encoding order
    pub const ALL: [StateCode; Self::COUNT] = [
        StateCode::Connecticut,
        StateCode::Delaware,
        StateCode::Georgia,
        StateCode::Maine,
        StateCode::Massachusetts,
        StateCode::NewHampshire,
        StateCode::NewJersey,
        StateCode::NewYork,
        StateCode::Pennsylvania,
        StateCode::PuertoRico,
        StateCode::RhodeIsland,
        StateCode::SouthCarolina,
        StateCode::Tennessee,
        StateCode::Vermont,
        StateCode::UsVirginIslands,
        StateCode::Virginia,
        StateCode::WestVirginia,
        StateCode::Wyoming,
    ];

    /// Integer encoding used in the feature vector
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Display name, as it appears in the training data
    pub fn name(self) -> &'static str {
        match self {
            StateCode::Connecticut => "Connecticut",
            StateCode::Delaware => "Delaware",
            StateCode::Georgia => "Georgia",
            StateCode::Maine => "Maine",
            StateCode::Massachusetts => "Massachusetts",
            StateCode::NewHampshire => "New Hampshire",
            StateCode::NewJersey => "New Jersey",
            StateCode::NewYork => "New York",
            StateCode::Pennsylvania => "Pennsylvania",
            StateCode::PuertoRico => "Puerto Rico",
            StateCode::RhodeIsland => "Rhode Island",
            StateCode::SouthCarolina => "South Carolina",
            StateCode::Tennessee => "Tennessee",
            StateCode::Vermont => "Vermont",
            StateCode::UsVirginIslands => "US Virgin Islands",
            StateCode::Virginia => "Virginia",
            StateCode::WestVirginia => "West Virginia",
            StateCode::Wyoming => "Wyoming",
        }
    }

    /// Look up a state by its training-data name
    pub fn from_name(name: &str) -> Option<StateCode> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use std::collections::VecDeque;

use ttim::constants::{Degree, Kilometer};
use ttim::travel_time::{Arrival, TravelTimeModel};
use ttim::ttim_errors::TtimError;

/// One call received by a [`ScriptedModel`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SelectBranches,
    SetDepth(Kilometer),
    Lookup(Degree),
}

/// Travel-time model answering lookups from a prepared script and recording every call.
pub struct ScriptedModel {
    pub calls: Vec<Call>,
    responses: VecDeque<Vec<Arrival>>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<Vec<Arrival>>) -> Self {
        ScriptedModel {
            calls: Vec::new(),
            responses: responses.into(),
        }
    }
}

impl TravelTimeModel for ScriptedModel {
    fn select_branches(&mut self) {
        self.calls.push(Call::SelectBranches);
    }

    fn set_depth(&mut self, depth: Kilometer) {
        self.calls.push(Call::SetDepth(depth));
    }

    fn lookup(&mut self, delta: Degree) -> Result<Vec<Arrival>, TtimError> {
        self.calls.push(Call::Lookup(delta));
        Ok(self.responses.pop_front().unwrap_or_default())
    }
}

pub fn arrival(phase: &str, travel_time: f64) -> Arrival {
    Arrival {
        phase: phase.to_string(),
        travel_time,
        ray_parameter: 8.495,
        dtdd: 8.4951,
        dtdh: -0.1712,
        dddp: -0.0032,
    }
}

/// Surface source, 45 degrees: a handful of iasp91-like teleseismic phases.
pub fn teleseismic_arrivals() -> Vec<Arrival> {
    vec![
        arrival("P", 478.45),
        arrival("PcP", 599.996),
        arrival("S", 865.37),
    ]
}

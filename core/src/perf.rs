#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadReport {
    pub load_ms: f64,
    pub budget_ms: f64,
}

impl LoadReport {
    pub fn new(load_ms: f64, budget_ms: f64) -> Self {
        Self {
            load_ms: load_ms.max(0.0),
            budget_ms,
        }
    }

    pub fn is_slow(&self) -> bool {
        self.load_ms > self.budget_ms
    }

    pub fn rounded_ms(&self) -> u64 {
        self.load_ms.round() as u64
    }
}

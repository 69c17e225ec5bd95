// Loading gate: the page is revealed once both the model and the document
// have finished loading, and only once.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSignal {
    Asset,
    PageLoad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Waiting,
    /// Both signals arrived with this call; reveal the page now.
    Released,
    /// Already released earlier; nothing to do.
    Done,
}

#[derive(Debug, Default)]
pub struct LoadGate {
    asset: bool,
    page: bool,
    released: bool,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, signal: LoadSignal) -> GateState {
        if self.released {
            return GateState::Done;
        }
        match signal {
            LoadSignal::Asset => self.asset = true,
            LoadSignal::PageLoad => self.page = true,
        }
        if self.asset && self.page {
            self.released = true;
            GateState::Released
        } else {
            GateState::Waiting
        }
    }
}

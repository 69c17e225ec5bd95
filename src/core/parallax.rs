// Scroll-driven parallax state.
//
// The driver eases a displayed scroll value toward the latest scroll offset
// and derives the CSS scale factors for the two text layers and the canvas.
// Ticking is modelled as a cooperative task: it runs while the tracked
// element overlaps the viewport band and stops on the first miss, after which
// only a new scroll event can start it again.

/// Fraction of the remaining distance covered per tick.
pub const SCROLL_EASE: f64 = 0.001;
/// Scale gain per scrolled pixel for the front text layer.
pub const PARALLAX_SCALE_FRONT: f64 = 0.0005;
/// Scale gain per scrolled pixel for the back text layer and the canvas.
pub const PARALLAX_SCALE_BACK: f64 = 0.00025;
/// Tick period emulating a 60 Hz cadence.
pub const PARALLAX_TICK_MS: i32 = 1000 / 60;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub current: f64,
    pub target: f64,
    pub ease: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            ease: SCROLL_EASE,
        }
    }
}

impl ScrollState {
    /// One exponential ease step toward `target`. Returns the new `current`.
    #[inline]
    pub fn step(&mut self) -> f64 {
        self.current += (self.target - self.current) * self.ease;
        self.current
    }

    #[inline]
    pub fn scales(&self) -> ParallaxScales {
        ParallaxScales {
            front: 1.0 + self.current * PARALLAX_SCALE_FRONT,
            back: 1.0 + self.current * PARALLAX_SCALE_BACK,
        }
    }
}

/// Scale multipliers for one tick. `back` is shared by the second text layer
/// and the canvas container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxScales {
    pub front: f64,
    pub back: f64,
}

impl ParallaxScales {
    pub fn front_css(&self) -> String {
        format!("scale({})", self.front)
    }

    pub fn back_css(&self) -> String {
        format!("scale({})", self.back)
    }
}

/// Geometry sampled from the page at tick time. Element edges are in page
/// space (client rect offset by the live scroll position).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSample {
    pub viewport_height: f64,
    pub element_top: f64,
    pub element_bottom: f64,
}

impl ViewportSample {
    /// Build from a client rect and the live page scroll offset.
    pub fn from_client_rect(page_offset: f64, viewport_height: f64, top: f64, bottom: f64) -> Self {
        Self {
            viewport_height,
            element_top: page_offset + top,
            element_bottom: page_offset + bottom,
        }
    }

    /// Whether the element overlaps the band `[scroll, scroll + viewport_height]`.
    #[inline]
    pub fn intersects_band(&self, scroll: f64) -> bool {
        !(scroll + self.viewport_height < self.element_top || scroll > self.element_bottom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TaskState {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug, Default)]
pub struct ParallaxDriver {
    pub scroll: ScrollState,
    task: TaskState,
}

impl ParallaxDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(&self) -> TaskState {
        self.task
    }

    /// Start the tick task. Returns `true` when the caller must schedule the
    /// first tick, `false` if a task is already running.
    pub fn start(&mut self) -> bool {
        match self.task {
            TaskState::Running => false,
            TaskState::Stopped => {
                self.task = TaskState::Running;
                true
            }
        }
    }

    /// Drop back to `Stopped` when the next tick could not be scheduled, so a
    /// later scroll event can start the task again.
    pub fn stop(&mut self) {
        self.task = TaskState::Stopped;
    }

    /// Record a new absolute scroll offset and (re)start the task.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.scroll.target = offset;
        self.start()
    }

    /// Run one tick. `Some` carries the scales to apply and means the caller
    /// must reschedule; `None` means the task stopped on a guard miss.
    pub fn tick(&mut self, sample: ViewportSample) -> Option<ParallaxScales> {
        if self.task == TaskState::Stopped {
            return None;
        }
        if !sample.intersects_band(self.scroll.target) {
            self.task = TaskState::Stopped;
            return None;
        }
        self.scroll.step();
        Some(self.scroll.scales())
    }
}

//! State and reducer for the daily home page.
//!
//! All view state lives in [`Model`]. Key presses and fetch results arrive
//! as [`Msg`] values; the [`update`] reducer mutates the model and returns a
//! [`Cmd`] describing the side effect the runtime should execute. No I/O
//! happens in this crate.

pub mod palette;

pub use palette::{DEFAULT_HEADER, HeaderColor, PALETTE};

/// One calendar day: month name, day of month, weekday name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub month: String,
    pub day: u8,
    pub weekday: String,
}

impl DayRecord {
    pub fn new(month: &str, day: u8, weekday: &str) -> Self {
        Self {
            month: month.to_string(),
            day,
            weekday: weekday.to_string(),
        }
    }
}

/// Which widget owns keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Navigation,
    Vibe,
}

/// Events that drive state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Sent exactly once by the runtime before the first draw.
    Mount { lucky_number: f64 },
    /// Advance to the next day, wrapping at the end of the sequence.
    UpdateDay,
    /// Request a fresh featured dog.
    ChangeDog,
    /// A dog fetch resolved with an image URL.
    DogFetched(String),
    /// Give the vibe input focus.
    EnterVibe,
    /// Return focus to navigation.
    ExitVibe,
    VibeChar(char),
    VibeBackspace,
    Quit,
}

/// Side effects for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    None,
    /// GET the dog endpoint and deliver `Msg::DogFetched` on success.
    FetchDog,
    Quit,
}

/// Complete display state, owned by the event loop and mutated only
/// through [`update`].
#[derive(Debug)]
pub struct Model {
    header_color: HeaderColor,
    featured_dog_url: Option<String>,
    day_index: usize,
    lucky_number: f64,
    current_day: Option<DayRecord>,
    vibe: String,
    mode: Mode,
    quit: bool,
    days: Vec<DayRecord>,
    palette: Vec<HeaderColor>,
}

impl Model {
    /// A model over the given day sequence with the built-in palette.
    pub fn new(days: Vec<DayRecord>) -> Self {
        Self::with_palette(days, PALETTE.to_vec())
    }

    pub fn with_palette(days: Vec<DayRecord>, palette: Vec<HeaderColor>) -> Self {
        Self {
            header_color: DEFAULT_HEADER,
            featured_dog_url: None,
            day_index: 0,
            lucky_number: 0.0,
            current_day: None,
            vibe: String::new(),
            mode: Mode::Navigation,
            quit: false,
            days,
            palette,
        }
    }

    pub fn header_color(&self) -> HeaderColor {
        self.header_color
    }

    pub fn featured_dog_url(&self) -> Option<&str> {
        self.featured_dog_url.as_deref()
    }

    pub fn day_index(&self) -> usize {
        self.day_index
    }

    pub fn lucky_number(&self) -> f64 {
        self.lucky_number
    }

    pub fn current_day(&self) -> Option<&DayRecord> {
        self.current_day.as_ref()
    }

    pub fn vibe(&self) -> &str {
        &self.vibe
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn quit(&self) -> bool {
        self.quit
    }

    /// Recompute `current_day` from `day_index`, and repaint the header only
    /// if the month actually changed. The header color is keyed by the day
    /// index, not the month value; consecutive same-month days therefore
    /// leave it stale. That coupling is the page's observed behavior and is
    /// kept as-is.
    fn apply_day(&mut self) {
        let Some(day) = self.days.get(self.day_index) else {
            return;
        };
        let month_changed = self
            .current_day
            .as_ref()
            .is_none_or(|prev| prev.month != day.month);
        self.current_day = Some(day.clone());
        if month_changed && !self.palette.is_empty() {
            self.header_color = self.palette[self.day_index % self.palette.len()];
        }
    }
}

/// Apply a message to the model and return the next command for the runtime.
///
/// Every state transition goes through here, so the whole page is
/// deterministic and testable without a terminal.
pub fn update(model: &mut Model, msg: Msg) -> Cmd {
    match msg {
        Msg::Mount { lucky_number } => {
            model.lucky_number = lucky_number;
            model.apply_day();
            Cmd::FetchDog
        }
        Msg::UpdateDay => {
            if model.days.is_empty() {
                return Cmd::None;
            }
            model.day_index = (model.day_index + 1) % model.days.len();
            model.apply_day();
            Cmd::None
        }
        Msg::ChangeDog => Cmd::FetchDog,
        Msg::DogFetched(url) => {
            model.featured_dog_url = Some(url);
            Cmd::None
        }
        Msg::EnterVibe => {
            model.mode = Mode::Vibe;
            Cmd::None
        }
        Msg::ExitVibe => {
            model.mode = Mode::Navigation;
            Cmd::None
        }
        Msg::VibeChar(c) => {
            model.vibe.push(c);
            Cmd::None
        }
        Msg::VibeBackspace => {
            model.vibe.pop();
            Cmd::None
        }
        Msg::Quit => {
            model.quit = true;
            Cmd::Quit
        }
    }
}

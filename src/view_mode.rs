use std::env;

use clap::ValueEnum;

/// Width (in columns) below which auto-detection resolves to the compact
/// mobile arrangement.
pub const DEFAULT_COMPACT_WIDTH: u16 = 80;

/// Environment variables that identify terminals running on phones. Any of
/// them being set counts as a mobile signal, same weight as a narrow window.
const MOBILE_ENV_VARS: &[&str] = &["TERMUX_VERSION", "ISH_VERSION"];
const MOBILE_TERM_PROGRAMS: &[&str] = &["Termux", "Blink", "a-Shell", "iSH"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    #[default]
    Auto,
    Desktop,
    Mobile,
}

/// Resolves desktop vs mobile. Auto combines the environment heuristic with
/// the current terminal width (OR of the two signals, re-evaluated on every
/// resize); an explicit desktop/mobile choice overrides detection for the
/// rest of the process.
pub struct ViewState {
    pub mode: ViewMode,
    detected_mobile: bool,
    env_mobile: bool,
    compact_width: u16,
}

impl ViewState {
    pub fn new(mode: ViewMode, width: u16, compact_width: u16) -> Self {
        let env_mobile = env_is_mobile();
        Self {
            mode,
            detected_mobile: classify(env_mobile, width, compact_width),
            env_mobile,
            compact_width,
        }
    }

    /// Testing constructor with the environment signal pinned.
    pub fn with_env(mode: ViewMode, env_mobile: bool, width: u16, compact_width: u16) -> Self {
        Self {
            mode,
            detected_mobile: classify(env_mobile, width, compact_width),
            env_mobile,
            compact_width,
        }
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn on_resize(&mut self, width: u16) {
        self.detected_mobile = classify(self.env_mobile, width, self.compact_width);
    }

    pub fn is_mobile(&self) -> bool {
        match self.mode {
            ViewMode::Auto => self.detected_mobile,
            ViewMode::Desktop => false,
            ViewMode::Mobile => true,
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            ViewMode::Auto => "auto",
            ViewMode::Desktop => "desktop",
            ViewMode::Mobile => "mobile",
        }
    }
}

fn classify(env_mobile: bool, width: u16, compact_width: u16) -> bool {
    env_mobile || width < compact_width
}

fn env_is_mobile() -> bool {
    if MOBILE_ENV_VARS.iter().any(|var| env::var_os(var).is_some()) {
        return true;
    }
    match env::var("TERM_PROGRAM") {
        Ok(program) => MOBILE_TERM_PROGRAMS
            .iter()
            .any(|known| program.eq_ignore_ascii_case(known)),
        Err(_) => false,
    }
}

//! Editor state machine: the single owner of the spectrum.
//!
//! Every state change goes through one of the methods below and is followed by
//! a full resynthesis of the waveform, so `waveform()` always reflects
//! `spectrum()`. Methods return `Some` when the front-end needs to redraw.

use crate::config::EditorConfig;
use crate::geometry::{resolve_bin, BinTarget, PlotGeometry};
use crate::spectrum::{FrequencyBins, Spectrum};
use crate::synth::{Synthesizer, WaveformSample};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            2 => Self::Secondary,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContextMenu {
    #[default]
    Hidden,
    Open {
        index: usize,
    },
}

/// Keyboard-driven editor actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    Reset,
    DismissMenu,
}

impl EditorCommand {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "r" | "R" => Some(Self::Reset),
            "Escape" => Some(Self::DismissMenu),
            _ => None,
        }
    }
}

pub struct SpectrumEditor {
    bins: FrequencyBins,
    spectrum: Spectrum,
    synth: Synthesizer,
    waveform: Vec<WaveformSample>,
    drag: DragState,
    menu: ContextMenu,
    // the last primary press already applied the edit its click would repeat
    press_applied: bool,
    config: EditorConfig,
}

impl SpectrumEditor {
    pub fn new(config: EditorConfig) -> Self {
        let bins = FrequencyBins::default();
        let synth = Synthesizer::new(config.sample_count, config.window_sec);
        let mut editor = Self {
            bins,
            spectrum: Spectrum::seeded(),
            synth,
            waveform: Vec::new(),
            drag: DragState::Idle,
            menu: ContextMenu::Hidden,
            press_applied: false,
            config,
        };
        editor.resynthesize();
        editor
    }

    pub fn bins(&self) -> &FrequencyBins {
        &self.bins
    }

    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    pub fn waveform(&self) -> &[WaveformSample] {
        &self.waveform
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn context_menu(&self) -> ContextMenu {
        self.menu
    }

    /// Replace the amplitude of the bin under `pos`. Positions outside the
    /// plot (or over a degenerate plot) are ignored.
    pub fn apply_at(&mut self, pos: Vec2, geometry: &PlotGeometry) -> Option<BinTarget> {
        let target = resolve_bin(geometry, pos, &self.bins)?;
        self.spectrum.set(target.index, target.amplitude)?;
        self.resynthesize();
        log::debug!(
            "[editor] bin {} ({:.1} Hz) -> {:.3}",
            target.index,
            self.bins.frequency(target.index),
            target.amplitude
        );
        Some(target)
    }

    /// Primary press inside the plot starts a drag and edits immediately.
    pub fn pointer_down(
        &mut self,
        button: PointerButton,
        pos: Vec2,
        geometry: &PlotGeometry,
    ) -> Option<BinTarget> {
        self.press_applied = false;
        if button != PointerButton::Primary {
            return None;
        }
        let target = self.apply_at(pos, geometry)?;
        self.drag = DragState::Dragging;
        self.press_applied = true;
        Some(target)
    }

    /// While dragging, every move re-applies the mapper (last write wins).
    pub fn pointer_move(&mut self, pos: Vec2, geometry: &PlotGeometry) -> Option<BinTarget> {
        match self.drag {
            DragState::Dragging => self.apply_at(pos, geometry),
            DragState::Idle => None,
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Discrete click. A click that completes a press already handled by
    /// `pointer_down` is skipped; the press (and any drag) wrote the edit.
    pub fn click(&mut self, pos: Vec2, geometry: &PlotGeometry) -> Option<BinTarget> {
        if std::mem::take(&mut self.press_applied) {
            return None;
        }
        self.apply_at(pos, geometry)
    }

    /// Secondary click: target the bin under `pos` for deletion. The menu is
    /// only opened over a bin that has something to delete.
    pub fn open_context_menu(&mut self, pos: Vec2, geometry: &PlotGeometry) -> Option<usize> {
        self.menu = ContextMenu::Hidden;
        let target = resolve_bin(geometry, pos, &self.bins)?;
        let amplitude = self.spectrum.amplitude(target.index)?;
        if amplitude <= 0.0 {
            return None;
        }
        self.menu = ContextMenu::Open {
            index: target.index,
        };
        Some(target.index)
    }

    /// Zero the bin targeted by the open menu and close it.
    pub fn confirm_delete(&mut self) -> Option<usize> {
        let ContextMenu::Open { index } = self.menu else {
            return None;
        };
        self.menu = ContextMenu::Hidden;
        if !self.spectrum.clear(index) {
            return None;
        }
        self.resynthesize();
        log::info!(
            "[menu] deleted {:.1} Hz component",
            self.bins.frequency(index)
        );
        Some(index)
    }

    /// Close the menu without touching the spectrum. Returns true if it was open.
    pub fn dismiss_menu(&mut self) -> bool {
        let was_open = self.menu != ContextMenu::Hidden;
        self.menu = ContextMenu::Hidden;
        was_open
    }

    /// Back to the session's initial spectrum.
    pub fn reset(&mut self) {
        self.spectrum = Spectrum::seeded();
        self.drag = DragState::Idle;
        self.menu = ContextMenu::Hidden;
        self.press_applied = false;
        self.resynthesize();
        log::info!("[editor] reset to initial spectrum");
    }

    pub fn apply_command(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::Reset => self.reset(),
            EditorCommand::DismissMenu => {
                self.dismiss_menu();
            }
        }
    }

    fn resynthesize(&mut self) {
        self.synth
            .synthesize_into(&self.spectrum, &self.bins, &mut self.waveform);
    }
}

impl Default for SpectrumEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

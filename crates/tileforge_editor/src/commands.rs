//! The closed command set the editor consumes, its bounded queue, and the
//! debounce cooldown for discrete UI commands.

use crate::ViewportId;
use glam::Vec2;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Preset layer dimensions offered by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerPreset {
    Grid50,
    Grid100,
    Grid200,
}

impl LayerPreset {
    /// Width and height in cells
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            LayerPreset::Grid50 => (50, 50),
            LayerPreset::Grid100 => (100, 100),
            LayerPreset::Grid200 => (200, 200),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Commands delivered by the input/UI collaborator
///
/// Pointer positions are in the target viewport's local space; selection
/// and placement commands carry no viewport id because selection always
/// reads the atlas view and placement always reads the map view.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Make the layer at this index the placement target
    SelectLayer(usize),
    /// Stamp the armed selection at a map point (single click)
    PlaceTile(Vec2),
    /// Stamp while the pointer drags across the map
    PlaceTileContinuous(Vec2),
    /// Clear the map cell under this point on the active layer
    EraseTile(Vec2),
    BeginAtlasSelect(Vec2),
    UpdateAtlasSelect(Vec2),
    EndAtlasSelect(Vec2),
    BeginPan(ViewportId, Vec2),
    UpdatePan(ViewportId, Vec2),
    EndPan(ViewportId, Vec2),
    Zoom(ViewportId, ZoomDirection),
    ToggleMergedPreview,
    AddLayer(LayerPreset),
    SaveMap(PathBuf),
    LoadMap(PathBuf),
}

impl EditorCommand {
    /// Discrete commands pass through the debounce cooldown; pointer
    /// streams and zoom steps do not.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            EditorCommand::SelectLayer(_)
                | EditorCommand::ToggleMergedPreview
                | EditorCommand::AddLayer(_)
                | EditorCommand::SaveMap(_)
                | EditorCommand::LoadMap(_)
        )
    }
}

/// Capacity-bounded FIFO of pending commands. Submissions past capacity
/// are dropped rather than growing the queue.
#[derive(Debug, Clone)]
pub struct CommandQueue {
    queue: VecDeque<EditorCommand>,
    capacity: usize,
}

impl CommandQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Enqueue a command. Returns false when the queue is full and the
    /// command was dropped.
    pub fn push(&mut self, command: EditorCommand) -> bool {
        if self.queue.len() >= self.capacity {
            return false;
        }
        self.queue.push_back(command);
        true
    }

    pub fn pop(&mut self) -> Option<EditorCommand> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Cooldown armed once at startup, before the first discrete command is
/// accepted.
pub const STARTUP_COOLDOWN: f32 = 0.05;
/// Re-arm applied after each accepted discrete command
pub const COMMAND_COOLDOWN: f32 = 0.01;

/// Frame-ticked timer that suppresses rapid re-dispatch of discrete
/// commands, e.g. one button click reported by two consecutive input
/// polls.
#[derive(Debug, Clone)]
pub struct Cooldown {
    remaining: f32,
}

impl Cooldown {
    pub fn new() -> Self {
        Self {
            remaining: STARTUP_COOLDOWN,
        }
    }

    /// Advance by the frame's elapsed seconds
    pub fn tick(&mut self, delta_seconds: f32) {
        self.remaining -= delta_seconds;
    }

    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Arm for the given duration
    pub fn arm(&mut self, seconds: f32) {
        self.remaining = seconds;
    }
}

impl Default for Cooldown {
    fn default() -> Self {
        Self::new()
    }
}

//! The top-level editor controller
//!
//! The editor owns every sub-component exclusively and drives them from
//! the command stream: the UI submits commands, `pump` drains and applies
//! them once per frame, and `draw_list` snapshots the renderable result.

use crate::commands::COMMAND_COOLDOWN;
use crate::draw::{self, DrawList};
use crate::{
    map_io, transform, AtlasSelector, CommandQueue, Cooldown, EditorCommand, EditorConfig,
    EditorError, TileAtlas, Viewport, ViewportId, ZoomDirection,
};
use glam::{IVec2, Vec2};
use tileforge_core::LayerStack;

pub struct Editor {
    stack: LayerStack,
    selector: AtlasSelector,
    atlas: TileAtlas,
    atlas_view: Viewport,
    map_view: Viewport,
    merged_preview: bool,
    queue: CommandQueue,
    cooldown: Cooldown,
    config: EditorConfig,
    last_error: Option<EditorError>,
}

impl Editor {
    /// Initialize from config. Fails only when the atlas bitmap cannot be
    /// measured; there is no editing without a catalog to pick from.
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        let atlas = TileAtlas::load(&config.atlas_path, config.base_tile_size)?;
        Ok(Self::with_atlas(config, atlas))
    }

    /// Initialize with an already-measured atlas, for hosts that load the
    /// bitmap themselves.
    pub fn with_atlas(config: EditorConfig, atlas: TileAtlas) -> Self {
        Self {
            stack: LayerStack::new(config.base_tile_size as f32),
            selector: AtlasSelector::new(),
            atlas,
            atlas_view: Viewport::new(),
            map_view: Viewport::new(),
            merged_preview: false,
            queue: CommandQueue::new(config.queue_capacity),
            cooldown: Cooldown::new(),
            config,
            last_error: None,
        }
    }

    /// Queue a command for the next pump. Returns false when the queue is
    /// full and the command was dropped.
    pub fn submit(&mut self, command: EditorCommand) -> bool {
        let accepted = self.queue.push(command);
        if !accepted {
            log::warn!("Command queue full; dropping command");
        }
        accepted
    }

    /// Run one frame's worth of input: tick the debounce cooldown by the
    /// elapsed seconds, then drain and apply every queued command in
    /// order. Call once per frame, before building the draw list.
    pub fn pump(&mut self, delta_seconds: f32) {
        self.cooldown.tick(delta_seconds);
        while let Some(command) = self.queue.pop() {
            if command.is_discrete() {
                if !self.cooldown.ready() {
                    log::debug!("Cooldown suppressed {:?}", command);
                    continue;
                }
                self.cooldown.arm(COMMAND_COOLDOWN);
            }
            if let Err(e) = self.apply(command) {
                log::error!("{}", e);
                self.last_error = Some(e);
            }
        }
    }

    fn apply(&mut self, command: EditorCommand) -> Result<(), EditorError> {
        match command {
            EditorCommand::SelectLayer(index) => {
                self.stack.set_active_layer(index)?;
                log::info!("Switched to layer {}", index);
            }
            EditorCommand::PlaceTile(point) | EditorCommand::PlaceTileContinuous(point) => {
                self.place_at(point);
            }
            EditorCommand::EraseTile(point) => {
                let cell = self.map_cell(point);
                self.stack.remove_tile(cell.x, cell.y);
            }
            EditorCommand::BeginAtlasSelect(point) | EditorCommand::UpdateAtlasSelect(point) => {
                let cell = self.atlas_cell(point);
                self.selector.begin_or_update(cell);
            }
            EditorCommand::EndAtlasSelect(point) => {
                let cell = self.atlas_cell(point);
                self.selector
                    .finish(cell, self.atlas.columns(), self.atlas.tile_size());
            }
            EditorCommand::BeginPan(viewport, point) => self.view_mut(viewport).begin_pan(point),
            EditorCommand::UpdatePan(viewport, point) => self.view_mut(viewport).update_pan(point),
            EditorCommand::EndPan(viewport, _) => self.view_mut(viewport).end_pan(),
            EditorCommand::Zoom(viewport, direction) => self.zoom(viewport, direction),
            EditorCommand::ToggleMergedPreview => {
                self.merged_preview = !self.merged_preview;
            }
            EditorCommand::AddLayer(preset) => {
                let (width, height) = preset.dimensions();
                let index = self.stack.add_layer(width, height)?;
                log::info!("Added {}x{} layer {}", width, height, index);
            }
            EditorCommand::SaveMap(path) => {
                map_io::save_map(&self.stack, &path)?;
                log::info!("Saved map to {:?}", path);
                self.config.last_map_path = Some(path);
            }
            EditorCommand::LoadMap(path) => {
                let mut stack = map_io::load_map(&path, self.config.base_tile_size as f32)?;
                // Stored positions reflect the zoom the map was saved at;
                // bring them to this view's rung before installing.
                stack.rescale(self.map_view.scale_factor());
                self.stack = stack;
                log::info!("Loaded map from {:?}", path);
                self.config.last_map_path = Some(path);
            }
        }
        Ok(())
    }

    /// Stamp the armed selection with its top-left cell at `point`
    fn place_at(&mut self, point: Vec2) {
        if self.selector.stamp().is_empty() {
            return;
        }
        let origin = self.map_cell(point);
        self.stack
            .place_tiles(origin.x, origin.y, &self.selector.stamp().cells);
    }

    /// The cell under a map-viewport point at the current pan and zoom
    fn map_cell(&self, point: Vec2) -> IVec2 {
        transform::to_cell(
            point,
            self.map_view.pan_offset,
            self.map_view.scale_factor(),
            self.config.base_tile_size as f32,
        )
    }

    /// The catalog cell under an atlas-viewport point
    fn atlas_cell(&self, point: Vec2) -> IVec2 {
        transform::to_cell(
            point,
            self.atlas_view.pan_offset,
            self.atlas_view.scale_factor(),
            self.config.base_tile_size as f32,
        )
    }

    fn view_mut(&mut self, viewport: ViewportId) -> &mut Viewport {
        match viewport {
            ViewportId::Atlas => &mut self.atlas_view,
            ViewportId::Map => &mut self.map_view,
        }
    }

    fn zoom(&mut self, viewport: ViewportId, direction: ZoomDirection) {
        let view = self.view_mut(viewport);
        let changed = match direction {
            ZoomDirection::In => view.zoom.zoom_in(),
            ZoomDirection::Out => view.zoom.zoom_out(),
        };
        if !changed {
            return;
        }
        // Placed tiles track the map view's rung immediately; the atlas
        // view scales only at draw time.
        if viewport == ViewportId::Map {
            self.stack.rescale(self.map_view.scale_factor());
        }
    }

    /// Snapshot the frame's renderable output for both viewports
    pub fn draw_list(&self) -> DrawList {
        DrawList {
            map: draw::map_primitives(&self.stack, self.map_view.pan_offset, self.merged_preview),
            atlas: draw::atlas_primitives(&self.atlas, &self.selector, &self.atlas_view),
        }
    }

    /// The failure recorded by the most recent rejected command, if any.
    /// Taking it clears it.
    pub fn take_last_error(&mut self) -> Option<EditorError> {
        self.last_error.take()
    }

    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    pub fn selector(&self) -> &AtlasSelector {
        &self.selector
    }

    pub fn atlas(&self) -> &TileAtlas {
        &self.atlas
    }

    pub fn viewport(&self, viewport: ViewportId) -> &Viewport {
        match viewport {
            ViewportId::Atlas => &self.atlas_view,
            ViewportId::Map => &self.map_view,
        }
    }

    pub fn merged_preview(&self) -> bool {
        self.merged_preview
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}

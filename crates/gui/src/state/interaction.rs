//! Hover, auto-rotation, and fullscreen flags for the viewport.
//!
//! Every transition is total. Changes bump `version`, which the renderer
//! uses to decide when to redraw; none of them rebuild geometry.

use shared::{PartDescriptor, PartId, PartKind};

/// User-driven viewport state
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    hovered: Option<PartId>,
    auto_rotating: bool,
    fullscreen: bool,
    version: u64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovered: None,
            auto_rotating: true,
            fullscreen: false,
            version: 0,
        }
    }
}

impl InteractionState {
    pub fn hovered(&self) -> Option<PartId> {
        self.hovered
    }

    pub fn auto_rotating(&self) -> bool {
        self.auto_rotating
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Change counter
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_highlighted(&self, id: PartId) -> bool {
        self.hovered == Some(id)
    }

    pub fn set_hover(&mut self, id: Option<PartId>) {
        if self.hovered != id {
            tracing::debug!(
                "hover: {} -> {}",
                self.hovered.map_or("none".to_string(), |p| p.key()),
                id.map_or("none".to_string(), |p| p.key())
            );
            self.hovered = id;
            self.version += 1;
        }
    }

    pub fn pointer_over(&mut self, id: PartId) {
        self.set_hover(Some(id));
    }

    /// Clears the hover only when `id` is the part currently hovered
    pub fn pointer_out(&mut self, id: PartId) {
        if self.hovered == Some(id) {
            self.set_hover(None);
        }
    }

    /// Feed the latest pick result: emits pointer-out for the previous part
    /// and pointer-over for the new one.
    pub fn update_hover(&mut self, hit: Option<PartId>) {
        if hit == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            self.pointer_out(previous);
        }
        if let Some(id) = hit {
            self.pointer_over(id);
        }
    }

    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotating = !self.auto_rotating;
        self.version += 1;
        tracing::info!("auto-rotation {}", if self.auto_rotating { "on" } else { "off" });
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen != fullscreen {
            self.fullscreen = fullscreen;
            self.version += 1;
        }
    }
}

// ── Palette ──────────────────────────────────────────────────

fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

pub fn base_color(kind: PartKind) -> [f32; 3] {
    match kind {
        PartKind::Flange => hex_rgb(0xA29BFE),
        PartKind::Web => hex_rgb(0xFAB1A0),
        PartKind::Bolt => hex_rgb(0x81ECEC),
        PartKind::CoverPlate => hex_rgb(0xDFF9FB),
    }
}

pub fn highlight_color(kind: PartKind) -> [f32; 3] {
    match kind {
        PartKind::Flange => hex_rgb(0x6C5CE7),
        PartKind::Web => hex_rgb(0xE17055),
        PartKind::Bolt => hex_rgb(0x00CEC9),
        PartKind::CoverPlate => hex_rgb(0x74B9FF),
    }
}

/// Render color of a part under the current interaction state
pub fn part_color(part: &PartDescriptor, state: &InteractionState) -> [f32; 3] {
    if state.is_highlighted(part.id) {
        highlight_color(part.kind)
    } else {
        base_color(part.kind)
    }
}

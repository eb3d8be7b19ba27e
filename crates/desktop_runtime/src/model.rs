use desktop_app_contract::{AppId, ContentId, DesktopSettings};
use serde::{Deserialize, Serialize};

use crate::window_manager::WindowManager;

/// First z-index handed out by the window stack counter.
pub const Z_INDEX_BASE: u32 = 100;
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
pub const MIN_WINDOW_WIDTH: i32 = 400;
pub const MIN_WINDOW_HEIGHT: i32 = 300;
/// Top-left of the first window; each further window cascades by the step.
pub const CASCADE_ORIGIN: Position = Position { x: 100, y: 80 };
pub const CASCADE_STEP: Position = Position { x: 50, y: 30 };
/// Horizontal strip of a dragged window that always stays inside the viewport.
pub const REACHABLE_MARGIN: i32 = 80;
/// Title bar height kept above the bottom viewport edge while dragging.
pub const TITLEBAR_HEIGHT: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Clamps a drag target so the title bar of a `size` window stays grabbable.
    ///
    /// The top edge never rises above the viewport and at least [`REACHABLE_MARGIN`] pixels
    /// remain on screen horizontally. Right and bottom limits need a known `viewport`.
    pub fn kept_reachable(self, size: Size, viewport: Option<Size>) -> Self {
        let (mut x, mut y) = (self.x, self.y);
        if let Some(viewport) = viewport {
            x = x.min(viewport.width - REACHABLE_MARGIN);
            y = y.min(viewport.height - TITLEBAR_HEIGHT);
        }
        Self {
            x: x.max(REACHABLE_MARGIN - size.width),
            y: y.max(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub id: AppId,
    pub title: String,
    pub content_id: ContentId,
    pub minimized: bool,
    pub position: Position,
    pub size: Size,
    pub z_index: u32,
}

impl WindowDescriptor {
    /// Inline CSS placing the window frame; minimized frames stay mounted but are not displayed.
    pub fn frame_style(&self) -> String {
        let mut style = format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.position.x, self.position.y, self.size.width, self.size.height, self.z_index
        );
        if self.minimized {
            style.push_str("display:none;");
        }
        style
    }
}

/// Partial geometry update; absent fields are left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometryPatch {
    pub position: Option<Position>,
    pub size: Option<Size>,
}

impl GeometryPatch {
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            size: None,
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            position: None,
            size: Some(size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub windows: WindowManager,
    pub settings: DesktopSettings,
    /// Set once boot hydration landed or the user changed a setting; later hydration is ignored.
    pub settings_settled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    const fn moves_west_edge(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    const fn moves_north_edge(self) -> bool {
        matches!(self, Self::North | Self::NorthWest | Self::NorthEast)
    }

    const fn moves_east_edge(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    const fn moves_south_edge(self) -> bool {
        matches!(self, Self::South | Self::SouthWest | Self::SouthEast)
    }
}

/// Applies a pointer delta to a window rectangle dragged by `edge`.
///
/// The edge opposite the dragged one stays fixed, including when the minimum size clamps.
pub fn resize_geometry(
    position: Position,
    size: Size,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
) -> (Position, Size) {
    let mut next_position = position;
    let mut width = size.width;
    let mut height = size.height;

    if edge.moves_east_edge() {
        width += dx;
    }
    if edge.moves_south_edge() {
        height += dy;
    }
    if edge.moves_west_edge() {
        width = (size.width - dx).max(MIN_WINDOW_WIDTH);
        next_position.x = position.x + size.width - width;
    }
    if edge.moves_north_edge() {
        height = (size.height - dy).max(MIN_WINDOW_HEIGHT);
        next_position.y = position.y + size.height - height;
    }

    (next_position, Size { width, height }.clamped_min())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: AppId,
    pub pointer_start: PointerPosition,
    pub position_start: Position,
    pub size: Size,
    pub viewport: Option<Size>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub position_start: Position,
    pub size_start: Size,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const START: Position = Position { x: 200, y: 150 };
    const START_SIZE: Size = Size {
        width: 800,
        height: 600,
    };

    #[test]
    fn east_and_south_edges_grow_without_moving() {
        let (position, size) = resize_geometry(START, START_SIZE, ResizeEdge::SouthEast, 40, 25);
        assert_eq!(position, START);
        assert_eq!(
            size,
            Size {
                width: 840,
                height: 625,
            }
        );
    }

    #[test]
    fn west_edge_moves_origin_and_keeps_right_edge() {
        let (position, size) = resize_geometry(START, START_SIZE, ResizeEdge::West, 100, 0);
        assert_eq!(position, Position { x: 300, y: 150 });
        assert_eq!(size.width, 700);
        assert_eq!(position.x + size.width, START.x + START_SIZE.width);
    }

    #[test]
    fn north_west_clamp_pins_the_opposite_corner() {
        let (position, size) = resize_geometry(START, START_SIZE, ResizeEdge::NorthWest, 900, 900);
        assert_eq!(
            size,
            Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }
        );
        assert_eq!(position.x + size.width, START.x + START_SIZE.width);
        assert_eq!(position.y + size.height, START.y + START_SIZE.height);
    }

    #[test]
    fn shrinking_east_edge_clamps_to_minimum() {
        let (_, size) = resize_geometry(START, START_SIZE, ResizeEdge::East, -1000, 0);
        assert_eq!(size.width, MIN_WINDOW_WIDTH);
        assert_eq!(size.height, START_SIZE.height);
    }

    #[test]
    fn frame_style_carries_geometry_and_stack_order() {
        let descriptor = WindowDescriptor {
            id: AppId::trusted("resume"),
            title: "Resume".to_string(),
            content_id: ContentId::new("ResumeView"),
            minimized: false,
            position: Position { x: 100, y: 80 },
            size: Size::default(),
            z_index: 101,
        };
        assert_eq!(
            descriptor.frame_style(),
            "left:100px;top:80px;width:800px;height:600px;z-index:101;"
        );
    }

    #[test]
    fn minimized_frame_is_not_displayed() {
        let mut descriptor = WindowDescriptor {
            id: AppId::trusted("skills"),
            title: "Skills".to_string(),
            content_id: ContentId::new("SkillsView"),
            minimized: true,
            position: Position { x: 100, y: 80 },
            size: Size::default(),
            z_index: 100,
        };
        assert_eq!(
            descriptor.frame_style(),
            "left:100px;top:80px;width:800px;height:600px;z-index:100;display:none;"
        );

        descriptor.minimized = false;
        assert!(!descriptor.frame_style().contains("display:none"));
    }

    #[test]
    fn drag_target_keeps_the_title_bar_reachable() {
        let far_up_left = Position { x: -3300, y: -2010 };
        assert_eq!(
            far_up_left.kept_reachable(START_SIZE, None),
            Position {
                x: REACHABLE_MARGIN - START_SIZE.width,
                y: 0,
            }
        );

        let viewport = Size {
            width: 1280,
            height: 720,
        };
        let far_down_right = Position { x: 5000, y: 4000 };
        assert_eq!(
            far_down_right.kept_reachable(START_SIZE, Some(viewport)),
            Position {
                x: 1280 - REACHABLE_MARGIN,
                y: 720 - TITLEBAR_HEIGHT,
            }
        );

        assert_eq!(START.kept_reachable(START_SIZE, Some(viewport)), START);
    }
}

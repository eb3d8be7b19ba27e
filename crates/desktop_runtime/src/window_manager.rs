//! Window record store and the transitions the desktop applies to it.
//!
//! Every transition is total: operations naming a window that is not open leave the store
//! untouched and report `false`. Stack order is expressed only through `z_index`, drawn from a
//! counter that never decreases, so the most recently opened, focused, or restored window is
//! always on top.

use desktop_app_contract::{AppId, ContentId};

use crate::model::{
    GeometryPatch, Position, Size, WindowDescriptor, CASCADE_ORIGIN, CASCADE_STEP, Z_INDEX_BASE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowManager {
    windows: Vec<WindowDescriptor>,
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            next_z: Z_INDEX_BASE,
        }
    }
}

impl WindowManager {
    /// Open windows in creation order.
    pub fn windows(&self) -> &[WindowDescriptor] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, id: &AppId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|window| &window.id == id)
    }

    /// The z-index the next raise will receive.
    pub fn next_z(&self) -> u32 {
        self.next_z
    }

    /// Highest non-minimized window, which the shell renders as focused.
    pub fn topmost(&self) -> Option<&WindowDescriptor> {
        self.windows
            .iter()
            .filter(|window| !window.minimized)
            .max_by_key(|window| window.z_index)
    }

    /// Opens a window for `app_id`, or un-minimizes and raises the existing one.
    pub fn open(&mut self, app_id: AppId, title: impl Into<String>, content_id: ContentId) {
        let z_index = self.take_z();
        if let Some(window) = self.find_mut(&app_id) {
            window.minimized = false;
            window.z_index = z_index;
            return;
        }

        let cascade = self.windows.len() as i32;
        self.windows.push(WindowDescriptor {
            id: app_id,
            title: title.into(),
            content_id,
            minimized: false,
            position: CASCADE_ORIGIN.offset(CASCADE_STEP.x * cascade, CASCADE_STEP.y * cascade),
            size: Size::default(),
            z_index,
        });
    }

    pub fn close(&mut self, id: &AppId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|window| &window.id != id);
        self.windows.len() != before
    }

    pub fn minimize(&mut self, id: &AppId) -> bool {
        match self.find_mut(id) {
            Some(window) => {
                window.minimized = true;
                true
            }
            None => false,
        }
    }

    /// Raises `id` to the top of the stack. Minimized windows stay minimized.
    pub fn focus(&mut self, id: &AppId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let z_index = self.take_z();
        if let Some(window) = self.find_mut(id) {
            window.z_index = z_index;
        }
        true
    }

    /// Un-minimizes `id` and raises it.
    pub fn restore(&mut self, id: &AppId) -> bool {
        match self.find_mut(id) {
            Some(window) => window.minimized = false,
            None => return false,
        }
        self.focus(id)
    }

    /// Merges `patch` into the window geometry, clamping size to the minimum.
    pub fn update_geometry(&mut self, id: &AppId, patch: GeometryPatch) -> bool {
        let Some(window) = self.find_mut(id) else {
            return false;
        };
        if let Some(position) = patch.position {
            window.position = position;
        }
        if let Some(size) = patch.size {
            window.size = size.clamped_min();
        }
        true
    }

    pub fn position_of(&self, id: &AppId) -> Option<Position> {
        self.get(id).map(|window| window.position)
    }

    fn find_mut(&mut self, id: &AppId) -> Option<&mut WindowDescriptor> {
        self.windows.iter_mut().find(|window| &window.id == id)
    }

    fn take_z(&mut self) -> u32 {
        let z_index = self.next_z;
        self.next_z = self.next_z.saturating_add(1);
        z_index
    }
}

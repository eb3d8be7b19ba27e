//! Shared UI primitive library for the desktop shell and portfolio panels.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell stylesheet. Panels
//! compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, DesktopBackdrop, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Dock, DockButton, DockDivider,
    EmptyState, Grid, Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, LinkButton,
    LoadingState, Panel, ProgressBar, ResizeHandle, Stack, StatTile, Surface, SurfaceVariant,
    Switch, Text, TextField, TextRole, TextTone, ToggleRow, TopBar, TopBarSection, WallpaperSwatch,
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for panel crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, EmptyState, Grid,
        Heading, Icon, IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
        LinkButton, LoadingState, Panel, ProgressBar, Stack, StatTile, Surface, SurfaceVariant,
        Switch, Text, TextField, TextRole, TextTone, ToggleRow,
    };
}

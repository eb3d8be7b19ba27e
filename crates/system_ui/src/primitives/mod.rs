//! Layout, chrome, content, and control primitives.
//!
//! Every primitive renders `data-ui-primitive="true"` plus a `data-ui-kind` token; variants,
//! sizes, and tones surface as further `data-ui-*` attributes for the stylesheet.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod shell;

pub use controls::{Button, LinkButton, ProgressBar, Switch, TextField, ToggleRow};
pub use data_display::{
    Badge, Card, EmptyState, Heading, LoadingState, Panel, StatTile, Surface, Text,
};
pub use layout::{Cluster, Grid, Stack};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Dock,
    DockButton, DockDivider, ResizeHandle, TopBar, TopBarSection, WallpaperSwatch, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Background treatment for surfaces, panels, and cards.
pub enum SurfaceVariant {
    /// Frosted glass over the wallpaper.
    #[default]
    Standard,
    /// Dimmer fill for nested regions such as chat bubbles.
    Muted,
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Visual weight of a button or link button.
pub enum ButtonVariant {
    /// Outlined button.
    #[default]
    Standard,
    /// Filled call-to-action.
    Primary,
    /// Borderless button for chrome and icon-only actions.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Button height and padding scale.
pub enum ButtonSize {
    /// Compact button used in cards and window chrome.
    Sm,
    /// Regular button.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Typographic role of a text run.
pub enum TextRole {
    /// Paragraph text.
    #[default]
    Body,
    /// Emphasized short label.
    Label,
    /// Small secondary text.
    Caption,
    /// Section or page title.
    Title,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Foreground color role.
pub enum TextTone {
    /// Default foreground.
    #[default]
    Primary,
    /// Muted foreground.
    Secondary,
    /// Brand accent.
    Accent,
    /// Positive status, e.g. completed or easy.
    Success,
    /// Cautionary status, e.g. in progress or medium.
    Warning,
    /// Negative status, e.g. hard.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Spacing between children of a layout primitive.
pub enum LayoutGap {
    /// Children touch.
    None,
    /// Tight spacing.
    Sm,
    /// Regular spacing.
    #[default]
    Md,
    /// Section spacing.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Inner padding of a layout or surface primitive.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Tight padding.
    Sm,
    /// Regular padding.
    #[default]
    Md,
    /// Page-level padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Cross-axis alignment of layout children.
pub enum LayoutAlign {
    /// Children fill the cross axis.
    #[default]
    Stretch,
    /// Children hug the leading edge.
    Start,
    /// Children are centered.
    Center,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Main-axis distribution of cluster children.
pub enum LayoutJustify {
    /// Packed at the leading edge.
    #[default]
    Start,
    /// Packed in the middle.
    Center,
    /// First and last children pinned to the edges.
    Between,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Invokes an optional event callback.
pub(crate) fn forward<E: 'static>(callback: Option<Callback<E>>, event: E) {
    if let Some(callback) = callback {
        callback.call(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("projects-featured")),
            "ui-card projects-featured"
        );
    }

    #[test]
    fn defaults_match_the_common_case() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(LayoutAlign::default().token(), "stretch");
        assert_eq!(TextTone::default().token(), "primary");
    }

    #[test]
    fn forward_calls_only_present_callbacks() {
        let _ = leptos::create_runtime();
        let hits = create_rw_signal(0);
        forward(Some(Callback::new(move |n: i32| hits.update(|h| *h += n))), 2);
        forward(None::<Callback<i32>>, 5);
        assert_eq!(hits.get_untracked(), 2);
        assert_eq!(bool_token(true), "true");
    }
}

//! Glyph icons used across the landing page.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ClipboardText,
    CheckCircle,
    FileArrowUp,
    MapPin,
    Info,
    CaretRight,
    ArrowSquareOut,
}

impl IconKind {
    fn glyph(self) -> &'static str {
        match self {
            IconKind::ClipboardText => "\u{1F4CB}",
            IconKind::CheckCircle => "\u{2714}",
            IconKind::FileArrowUp => "\u{1F4E4}",
            IconKind::MapPin => "\u{1F4CD}",
            IconKind::Info => "\u{2139}",
            IconKind::CaretRight => "\u{203A}",
            IconKind::ArrowSquareOut => "\u{2197}",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    /// Font size in pixels
    #[props(default = 16)]
    pub size: u32,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let glyph = props.kind.glyph();
    let style = format!("font-size: {}px; line-height: 1;", props.size);
    rsx! {
        span { aria_hidden: "true", style: "{style}", "{glyph}" }
    }
}

//! Inline SVG icons for the preset buttons
//!
//! Carried as opaque markup payloads; the embedding application decides
//! how to render them.

// Device switcher
pub const DEVICE_DESKTOP: &str = r#"<svg style="display: block; max-width: 22px" viewBox="0 0 24 24">
    <path fill="currentColor" d="M21,16H3V4H21M21,2H3C1.89,2 1,2.89 1,4V16A2,2 0 0,0 3,18H10V20H8V22H16V20H14V18H21A2,2 0 0,0 23,16V4C23,2.89 22.1,2 21,2Z" />
</svg>"#;

pub const DEVICE_TABLET: &str = r#"<svg style="display: block; max-width: 22px" viewBox="0 0 24 24">
    <path fill="currentColor" d="M19,18H5V6H19M21,4H3C1.89,4 1,4.89 1,6V18A2,2 0 0,0 3,20H21A2,2 0 0,0 23,18V6C23,4.89 22.1,4 21,4Z" />
</svg>"#;

pub const DEVICE_MOBILE: &str = r#"<svg style="display: block; max-width: 22px" viewBox="0 0 24 24">
    <path fill="currentColor" d="M17,19H7V5H17M17,1H7C5.89,1 5,1.89 5,3V21A2,2 0 0,0 7,23H17A2,2 0 0,0 19,21V3C19,1.89 18.1,1 17,1Z" />
</svg>"#;

// Options row
pub const PREVIEW: &str = r#"<svg style="display: block; max-width: 22px" viewBox="0 0 24 24"><path fill="currentColor" d="M12,9A3,3 0 0,0 9,12A3,3 0 0,0 12,15A3,3 0 0,0 15,12A3,3 0 0,0 12,9M12,17A5,5 0 0,1 7,12A5,5 0 0,1 12,7A5,5 0 0,1 17,12A5,5 0 0,1 12,17M12,4.5C7,4.5 2.73,7.61 1,12C2.73,16.39 7,19.5 12,19.5C17,19.5 21.27,16.39 23,12C21.27,7.61 17,4.5 12,4.5Z"></path></svg>"#;

pub const UNDO: &str = r#"<svg style="display: block; max-width: 22px" viewBox="0 0 24 24">
    <path fill="currentColor" d="M20 13.5C20 17.09 17.09 20 13.5 20H6V18H13.5C16 18 18 16 18 13.5S16 9 13.5 9H7.83L10.91 12.09L9.5 13.5L4 8L9.5 2.5L10.92 3.91L7.83 7H13.5C17.09 7 20 9.91 20 13.5Z" />
</svg>"#;

pub const REDO: &str = r#"<svg style="display: block; max-width: 22px" viewBox="0 0 24 24">
    <path fill="currentColor" d="M10.5 18H18V20H10.5C6.91 20 4 17.09 4 13.5S6.91 7 10.5 7H16.17L13.08 3.91L14.5 2.5L20 8L14.5 13.5L13.09 12.09L16.17 9H10.5C8 9 6 11 6 13.5S8 18 10.5 18Z" />
</svg>"#;

pub const CLEAR: &str = r#"<svg style="display: block; max-width: 22px" viewBox="0 0 24 24">
    <path fill="currentColor" d="M19,4H15.5L14.5,3H9.5L8.5,4H5V6H19M6,19A2,2 0 0,0 8,21H16A2,2 0 0,0 18,19V7H6V19Z" />
</svg>"#;

// Views
pub const LAYERS: &str = r#"<svg style="display: block; max-width: 22px" viewBox="0 0 24 24">
    <path fill="currentColor" d="M12,16L19.36,10.27L21,9L12,2L3,9L4.63,10.27M12,18.54L4.62,12.81L3,14.07L12,21.07L21,14.07L19.37,12.8L12,18.54Z" />
</svg>"#;

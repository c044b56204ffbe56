//! Built-in renderers: Header, Banner, Carousel, Button, Text, Image, Spacer,
//! Divider, Footer.

pub mod banner;
pub mod button;
pub mod carousel;
pub mod footer;
pub mod header;
pub mod image;
pub mod spacer;
pub mod text;

pub use banner::BannerRenderer;
pub use button::ButtonRenderer;
pub use carousel::CarouselRenderer;
pub use footer::FooterRenderer;
pub use header::HeaderRenderer;
pub use image::ImageRenderer;
pub use spacer::{DividerRenderer, SpacerRenderer};
pub use text::TextRenderer;

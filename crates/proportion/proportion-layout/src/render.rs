//! Draws computed placements with embedded-graphics
//!
//! Layout works in fractional host units; drawing snaps every span to whole
//! pixels with [`AxisSpan::to_pixels`], which keeps neighbouring children
//! adjacent after rounding.
//!
//! # Example
//!
//! ```
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::{Gray4, GrayColor};
//! use embedded_graphics::prelude::*;
//! use proportion_layout::prelude::*;
//! use proportion_layout::render::{outline_style, render_placements};
//!
//! let mut group = ProportionLayoutGroup::<u8>::horizontal();
//! group.set_container_size(ContainerSize::new(40.0, 10.0));
//! group.add_child(0, Some(1.0))?;
//! group.add_child(1, Some(3.0))?;
//!
//! let mut display: MockDisplay<Gray4> = MockDisplay::new();
//! render_placements(&group.compute(), Point::zero(), outline_style(Gray4::BLACK), &mut display)
//!     .unwrap();
//! assert_eq!(display.affected_area().size, Size::new(40, 10));
//! # Ok::<(), LayoutError>(())
//! ```

use crate::layout::{AxisSpan, LayoutParams, LayoutResult};
use crate::style::Axis;
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
};

/// One pixel wide outline drawn inside the rectangle.
pub fn outline_style(color: Gray4) -> PrimitiveStyle<Gray4> {
    PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

/// Returns the container's content box (container minus padding), in pixels.
pub fn content_bounds(params: &LayoutParams) -> Rectangle {
    let span = |axis: Axis| {
        let size = (params.extent(axis) - params.padding_along(axis)).max(0.0);
        AxisSpan::new(params.padding_start(axis), size).to_pixels()
    };
    let (x, width) = span(Axis::Horizontal);
    let (y, height) = span(Axis::Vertical);
    Rectangle::new(Point::new(x, y), Size::new(width, height))
}

/// Draws the content box of a container.
pub fn render_container<D: DrawTarget<Color = Gray4>>(
    params: &LayoutParams,
    offset: Point,
    style: PrimitiveStyle<Gray4>,
    display: &mut D,
) -> Result<(), D::Error> {
    content_bounds(params)
        .translate(offset)
        .into_styled(style)
        .draw(display)
}

/// Draws every placement of `result`.
///
/// Placements without a primary span (the primary pass was a no-op) are
/// skipped, as are zero-area rectangles.
pub fn render_placements<H, D: DrawTarget<Color = Gray4>>(
    result: &LayoutResult<H>,
    offset: Point,
    style: PrimitiveStyle<Gray4>,
    display: &mut D,
) -> Result<(), D::Error> {
    let rects = result
        .placements
        .iter()
        .filter_map(|placement| placement.bounds(result.direction))
        .filter(|rect| rect.size.width > 0 && rect.size.height > 0);

    for rect in rects {
        rect.translate(offset).into_styled(style).draw(display)?;
    }

    Ok(())
}

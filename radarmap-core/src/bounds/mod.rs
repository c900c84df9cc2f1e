mod viewport_bounds;

pub use viewport_bounds::ViewportBounds;

pub mod apply_alpha_mask;
pub mod collaborators;
pub mod coordinates;
pub mod dominant_color;
pub mod geometry;
pub mod lifecycle;
pub mod resize_to_fit;

pub mod keyframe;
pub mod lerp;
pub mod shape;

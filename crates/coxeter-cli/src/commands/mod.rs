pub mod inversions;
pub mod matrix;
pub mod reflection;
pub mod verify;

pub mod app;
pub mod camera;
pub mod cli;
pub mod demos;
pub mod field;
pub mod mesh;
pub mod renderer;

pub use camera::OrbitCamera;
pub use demos::{Demo, DemoSettings};
pub use field::{Cube, CubeField, CubeInstance, FieldConfig};

//! Pendant - lanyard strap and ID card
//!
//! The strap is a Verlet particle chain held together by distance
//! constraints (iterative relaxation). The card is a rigid body that either
//! hangs from the last particle or is dragged kinematically by the pointer.
//!
//! Each frame the joint positions are threaded by a Catmull-Rom curve that is
//! sampled and extruded into a ribbon mesh.

mod camera;
mod card;
mod chain;
mod curve;
mod ribbon;

pub use camera::{Camera, Ray};
pub use card::{CardBody, CardMode, DragState, Release};
pub use chain::{ChainParticle, VerletChain};
pub use curve::CatmullRom;
pub use ribbon::RibbonMesh;

pub mod capacity;
pub mod hide;
pub mod keygen;
pub mod unveil;

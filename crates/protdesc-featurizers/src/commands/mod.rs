pub mod describe;
pub mod featurize;
pub mod scales;

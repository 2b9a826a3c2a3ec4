//! Grundlegende Typen eines Gleis-Rasters: Himmelsrichtungen und Drehungen in Viertel-Schritten.

pub mod drehung;
pub mod himmelsrichtung;

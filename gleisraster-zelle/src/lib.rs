//! Eine einzelne Zelle eines Gleis-Rasters: Geometrie, Drehung, Weichen-Stellung
//! und die Abfrage, in welche Himmelsrichtung ein Fahrzeug die Zelle wieder verlässt.

pub mod fehler;
pub mod typ;
pub mod variante;
pub mod zelle;
pub mod zustand;

//! Routing-Logik einer einzelnen Zelle eines Gleis-Rasters.
//!
//! Eine [`Zelle`](zelle::zelle::Zelle) beantwortet die Frage, in welche
//! [`Himmelsrichtung`](typen::himmelsrichtung::Himmelsrichtung) ein Fahrzeug sie
//! wieder verlässt, und stellt Weichen abhängig von ihrem
//! [`Typ`](zelle::typ::Typ) beim Befahren um.
//! Zusammenbau eines ganzen Gleis-Rasters, Darstellung und Fahrzeug-Simulation
//! sind Aufgabe der Verwender dieser Crates.

// Die Facade-Crate bündelt nur die Teil-Crates unter stabilen Modul-Namen.
#![allow(clippy::pub_use)]

pub use gleisraster_typen as typen;
pub use gleisraster_zelle as zelle;

//! Gleis-Geometrie einer Zelle vor Anwendung der Drehung.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Die ungedrehte Geometrie einer Zelle.
///
/// Alle Angaben beziehen sich auf eine Zelle mit
/// [`Drehung::Keine`](gleisraster_typen::drehung::Drehung::Keine);
/// der Stamm einer Weiche zeigt dann nach Norden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Sequence, Serialize, Deserialize)]
pub enum Variante {
    /// Gerades Gleis: Norden ↔ Süden.
    #[default]
    Gerade,
    /// Kurve: Norden ↔ Osten.
    Kurve,
    /// Kreuzung: Norden ↔ Süden und Osten ↔ Westen, alle vier Richtungen befahrbar.
    Kreuzung,
    /// Doppelte Kurve: Norden ↔ Osten und Süden ↔ Westen.
    DoppelKurve,
    /// Weiche mit Zweig nach Osten und gerader Durchfahrt Norden ↔ Süden.
    Links,
    /// Spiegelbild der linken Weiche: Zweig nach Westen, gerade Durchfahrt Norden ↔ Süden.
    Rechts,
    /// Symmetrische Weiche: Zweige nach Osten und Westen, keine gerade Durchfahrt.
    Symmetrisch,
}

impl Variante {
    /// Alias für die Standard-Variante.
    pub const STANDARD: Variante = Variante::Gerade;

    /// Hat die Variante einen Stamm mit zwei Zweigen, d.h. eine umstellbare Geometrie?
    #[must_use]
    pub const fn ist_weiche(self) -> bool {
        match self {
            Variante::Links | Variante::Rechts | Variante::Symmetrisch => true,
            Variante::Gerade | Variante::Kurve | Variante::Kreuzung | Variante::DoppelKurve => {
                false
            },
        }
    }
}
